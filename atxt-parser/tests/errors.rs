//! Integration tests for syntax errors: positions, context snippets, and
//! the no-partial-results policy.

use atxt_parser::atxt::building::parse_document;
use atxt_parser::atxt::lexing::tokenize;

#[test]
fn test_mismatched_dedent_position() {
    // Dedent to column 1, which is not on the indent stack [0, 2, 4].
    let err = tokenize("@a\n  @b\n    @c\n @d\n").unwrap_err();
    assert_eq!(err.message, "indentation mismatch");
    assert_eq!(err.line, 4);
    assert_eq!(err.column, 2);
    assert_eq!(err.offset, 16);
}

#[test]
fn test_error_context_carries_caret() {
    let err = tokenize("@a\n  @b\n    @c\n @d\n").unwrap_err();
    assert!(err.context.contains("  4 |  @d"));
    assert!(err.context.contains("^^^^^^^^"));
    assert!(err.context.contains("  3 |     @c"));
}

#[test]
fn test_display_includes_position_and_context() {
    let err = parse_document("@a\n  @b\n @c\n").unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.contains("line 3, column 2"));
    assert!(rendered.contains("indentation mismatch"));
    assert!(rendered.contains("^^^^^^^^"));
}

#[test]
fn test_unterminated_inline_content() {
    let err = tokenize("@a[never closed\n").unwrap_err();
    assert_eq!(err.message, "unterminated inline content brackets");
    assert!(err.context.contains("@a[never closed"));
}

#[test]
fn test_unterminated_inline_params() {
    let err = tokenize("@a(never closed").unwrap_err();
    assert_eq!(err.message, "unterminated parameter brackets");
}

#[test]
fn test_positions_stay_aligned_after_multi_line_inline() {
    // Inline content spans a line boundary and ends right before a line
    // that dedents to a level not on the stack; the reported position must
    // belong to that following line, not drift from the bracket handling.
    let err = tokenize("@x\n  @a[one\n  two]\n @bad\n").unwrap_err();
    assert_eq!(err.message, "indentation mismatch");
    assert_eq!(err.line, 4);
    assert_eq!(err.column, 2);
}

#[test]
fn test_no_partial_tree_on_failure() {
    let result = parse_document("@good\n  fine\n@broken\n    x\n  y\n oops\n");
    assert!(result.is_err());
}

#[test]
fn test_comment_and_blank_lines_never_error_on_indentation() {
    // Deep comment and blank lines do not touch the indent stack.
    let doc = parse_document("@a\n  x\n        # far right\n\n  y\n").expect("parse failed");
    let a = doc.root.first_of_kind("a").expect("a");
    assert_eq!(a.texts().collect::<Vec<_>>(), vec!["x", "", "y"]);
}
