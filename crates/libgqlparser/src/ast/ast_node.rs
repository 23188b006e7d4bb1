use crate::GraphQLSourceSpan;

/// Trait implemented by every AST node that covers a contiguous range of
/// source text.
///
/// Nodes implement it via `#[inherent] impl AstNode`, so the methods are
/// callable without importing the trait while generic utilities can still
/// bound on it.
pub trait AstNode {
    /// The source range this node was parsed from.
    fn span(&self) -> GraphQLSourceSpan;

    /// Append this node's original source text to `sink`.
    ///
    /// `source` must be the text the node was parsed from. The text is sliced
    /// directly via byte offsets, so formatting and comments inside the node
    /// are preserved.
    fn append_source(&self, sink: &mut String, source: &str) {
        let range = self.span().byte_range();
        debug_assert!(
            range.end <= source.len(),
            "append_source: span byte range {}..{} exceeds source length {}",
            range.start,
            range.end,
            source.len(),
        );
        if let Some(text) = source.get(range) {
            sink.push_str(text);
        }
    }

    /// Return this node's original source text.
    fn to_source(&self, source: &str) -> String {
        let mut s = String::new();
        self.append_source(&mut s, source);
        s
    }
}
