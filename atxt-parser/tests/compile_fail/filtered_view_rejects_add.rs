use atxt_parser::atxt::ast::Node;
use atxt_parser::atxt::selection::Selection;

fn main() {
    let root = Node::new("doc");
    let selection = Selection::new(&root);
    let filtered = selection.filter(|_| true);
    filtered.add("never reaches the tree");
}
