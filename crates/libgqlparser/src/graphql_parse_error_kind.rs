/// Categorizes parse errors for programmatic handling.
///
/// Each variant contains the minimal data needed for programmatic decisions.
/// Human-readable context belongs in the `notes` of a
/// [`GraphQLParseError`](crate::GraphQLParseError).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphQLParseErrorKind {
    /// The grammar required one of `expected` but found something else.
    ///
    /// ```text
    /// query { user(id 1) }
    ///                 ^ expected `:`
    /// ```
    #[error("unexpected token: `{found}`")]
    UnexpectedToken {
        expected: Vec<String>,
        found: String,
    },

    /// The document ended before a complete construct was parsed.
    #[error("unexpected end of input")]
    UnexpectedEof {
        expected: Vec<String>,
    },

    /// The scanner could not classify the input: an invalid character, a
    /// malformed number, an invalid quote run or an unterminated string or
    /// object literal.
    #[error("lexer error")]
    LexerError,

    /// A `[` of a list type or list literal was never closed.
    ///
    /// ```text
    /// query ($ids: [ID) { node }
    ///              ^ unclosed `[`
    /// ```
    #[error("unclosed delimiter: `{delimiter}`")]
    UnclosedDelimiter {
        delimiter: String,
    },

    /// A name was used where it is reserved, such as a fragment named `on`.
    #[error("reserved name: `{name}`")]
    ReservedName {
        name: String,
    },

    /// A construct that must have content was opened and left empty.
    ///
    /// ```text
    /// query { user { } }
    ///              ^^^ selection set cannot be empty
    /// ```
    #[error("invalid empty construct: `{construct}`")]
    InvalidEmptyConstruct {
        construct: String,
    },

    /// A schema definition keyword (`type`, `schema`, ...) at the top of an
    /// execution document.
    #[error("schema definition not supported: `{keyword}`")]
    SchemaDefinitionNotSupported {
        keyword: String,
    },

    /// Catch-all for syntax errors without a dedicated variant. The specific
    /// problem is described by the error's message.
    #[error("invalid syntax")]
    InvalidSyntax,
}
