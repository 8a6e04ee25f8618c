//! Line spans for extracted definitions

use tree_sitter::Node;

/// 1-based inclusive `(start, end)` lines of a definition node
///
/// A function-like macro has no terminator, so its node runs through the
/// newline onto the first line of whatever follows; that line is dropped.
/// `end` never goes below `start`.
pub fn line_span(node: &Node, is_macro: bool) -> (u32, u32) {
    let start = node.start_position().row as u32 + 1;
    let mut end = node.end_position().row as u32 + 1;

    if is_macro {
        end -= 1;
    }

    (start, end.max(start))
}
