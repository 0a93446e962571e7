//! Token-stream folding into the node tree.

use super::params::split_params;
use crate::atxt::ast::{Child, Node};
use crate::atxt::token::Token;

/// Build the document root from a token stream.
pub fn build(tokens: &[Token]) -> Node {
    let mut builder = TreeBuilder::new();
    for token in tokens {
        builder.push_token(token);
    }
    builder.finish()
}

/// The most recent token class that can anchor structure. An indent that
/// follows an annotation head continues it structurally; an indent that
/// follows plain content is extra indentation kept as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Last {
    None,
    Type,
    Params,
    Content,
    End,
}

struct Frame {
    target: Vec<usize>,
    baseline: usize,
}

struct TreeBuilder {
    root: Node,
    /// Path to the node whose children receive new items.
    current: Vec<usize>,
    /// Path to the most specific node created by the most recent type
    /// token; the target for params and for structural indents.
    active: Vec<usize>,
    frames: Vec<Frame>,
    same_line: usize,
    in_inline: bool,
    inline_first: bool,
    pending_blanks: usize,
    escape_pending: bool,
    last: Last,
    depth: usize,
    baseline: usize,
}

fn node_at_mut<'a>(root: &'a mut Node, path: &[usize]) -> &'a mut Node {
    let mut node = root;
    for &index in path {
        node = match &mut node.children[index] {
            Child::Node(n) => n,
            // paths are only ever recorded for node children
            Child::Text(_) => unreachable!("tree path through a text child"),
        };
    }
    node
}

impl TreeBuilder {
    fn new() -> Self {
        TreeBuilder {
            root: Node::default(),
            current: Vec::new(),
            active: Vec::new(),
            frames: Vec::new(),
            same_line: 0,
            in_inline: false,
            inline_first: false,
            pending_blanks: 0,
            escape_pending: false,
            last: Last::None,
            depth: 0,
            baseline: 0,
        }
    }

    fn extra(&self) -> usize {
        self.depth.saturating_sub(self.baseline)
    }

    /// A lone escape marker with nothing attached becomes a literal `@`.
    fn flush_escape(&mut self) {
        if self.escape_pending {
            self.escape_pending = false;
            node_at_mut(&mut self.root, &self.current)
                .children
                .push(Child::Text("@".to_string()));
            self.last = Last::Content;
        }
    }

    /// Buffered blank lines land wherever the next real content lands.
    fn flush_blanks(&mut self) {
        if self.pending_blanks > 0 {
            let target = node_at_mut(&mut self.root, &self.current);
            for _ in 0..self.pending_blanks {
                target.children.push(Child::Text(String::new()));
            }
            self.pending_blanks = 0;
        }
    }

    fn save_frame(&mut self) {
        self.frames.push(Frame {
            target: self.current.clone(),
            baseline: self.baseline,
        });
    }

    fn restore_frame(&mut self) {
        if let Some(frame) = self.frames.pop() {
            self.current = frame.target;
            self.baseline = frame.baseline;
        }
    }

    fn push_token(&mut self, token: &Token) {
        match token {
            Token::Type(name) => {
                self.flush_escape();
                if name.is_empty() {
                    self.escape_pending = true;
                    self.active = self.current.clone();
                } else {
                    self.flush_blanks();
                    let target = node_at_mut(&mut self.root, &self.current);
                    target.children.push(Child::Node(Node::new(name.clone())));
                    let mut path = self.current.clone();
                    path.push(target.children.len() - 1);
                    self.active = path;
                    self.last = Last::Type;
                }
            }
            Token::Params(raw) => {
                if self.escape_pending {
                    self.escape_pending = false;
                    self.flush_blanks();
                    node_at_mut(&mut self.root, &self.current)
                        .children
                        .push(Child::Text(format!("@{raw}")));
                    self.last = Last::Content;
                } else {
                    node_at_mut(&mut self.root, &self.active).params = split_params(raw);
                    self.last = Last::Params;
                }
            }
            Token::Content(value) => {
                let mut value = value.clone();
                if self.escape_pending && (self.in_inline || self.same_line > 0) {
                    self.escape_pending = false;
                    value.insert(0, '@');
                } else {
                    self.flush_escape();
                }
                self.flush_blanks();
                let extra = self.extra();
                let target = node_at_mut(&mut self.root, &self.current);
                if self.in_inline {
                    if self.inline_first {
                        target.children.push(Child::Text(value));
                        self.inline_first = false;
                    } else if let Some(Child::Text(last)) = target.children.last_mut() {
                        // Pieces of one bracketed run join with single spaces.
                        last.push(' ');
                        last.push_str(&value);
                    } else {
                        target.children.push(Child::Text(value));
                    }
                } else {
                    let text = if self.same_line == 0 && extra > 0 {
                        format!("{}{}", " ".repeat(extra), value)
                    } else {
                        value
                    };
                    target.children.push(Child::Text(text));
                }
                self.last = Last::Content;
            }
            Token::EmptyContent(_) => {
                self.pending_blanks += 1;
            }
            Token::Comment(_) => {}
            Token::Indent(delta) => {
                self.flush_escape();
                self.depth += delta;
                let structural = matches!(self.last, Last::Type | Last::Params | Last::End);
                self.save_frame();
                if structural {
                    self.current = self.active.clone();
                    self.baseline = self.depth;
                }
            }
            Token::Dedent(delta) => {
                self.flush_escape();
                self.depth = self.depth.saturating_sub(*delta);
                self.restore_frame();
            }
            Token::StartSameLineContent => {
                self.save_frame();
                self.current = self.active.clone();
                self.same_line += 1;
            }
            Token::EndSameLineContent => {
                self.flush_escape();
                self.restore_frame();
                self.same_line = self.same_line.saturating_sub(1);
                self.last = Last::End;
            }
            Token::StartInlineContent => {
                self.save_frame();
                self.current = self.active.clone();
                self.in_inline = true;
                self.inline_first = true;
            }
            Token::EndInlineContent => {
                self.flush_escape();
                self.restore_frame();
                self.in_inline = false;
                self.last = Last::End;
            }
        }
    }

    fn finish(mut self) -> Node {
        self.flush_escape();
        self.root
    }
}
