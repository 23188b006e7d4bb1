/// A location within the source text.
///
/// This is a pure data struct with no mutation methods. The scanner is
/// responsible for computing position values as it walks the input.
///
/// # Indexing Convention
///
/// - `line`: 1-based line number (1 = first line of the document)
/// - `column`: 1-based byte column within the current line
/// - `byte_offset`: 0-based byte offset within the whole document
///
/// Columns count bytes, not characters. For ASCII input (which covers every
/// GraphQL punctuator, name and keyword) the two are identical.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub struct SourcePosition {
    line: usize,
    column: usize,
    byte_offset: usize,
}

impl SourcePosition {
    /// Create a new SourcePosition.
    pub fn new(line: usize, column: usize, byte_offset: usize) -> Self {
        Self {
            line,
            column,
            byte_offset,
        }
    }

    /// The position of the first byte of a document.
    pub fn start_of_document() -> Self {
        Self::new(1, 1, 0)
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based byte column within the line.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Returns the 0-based byte offset from the start of the document.
    pub fn byte_offset(&self) -> usize {
        self.byte_offset
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
