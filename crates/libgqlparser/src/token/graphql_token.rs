use crate::GraphQLSourceSpan;
use crate::token::GraphQLTokenType;
use crate::token::Lexeme;

/// A scanned token: the lexeme it was classified as, the exact source slice
/// it covers, its location and an optional semantic type tag.
///
/// Tokens borrow their text from the source (`'src`), so scanning never
/// copies. A token is immutable once built; the type tag is attached with
/// the consuming [`with_type`](Self::with_type) builder before the token is
/// handed out.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GraphQLToken<'src> {
    lexeme: Lexeme,
    text: &'src str,
    span: GraphQLSourceSpan,
    token_type: Option<GraphQLTokenType>,
}

impl<'src> GraphQLToken<'src> {
    pub fn new(lexeme: Lexeme, text: &'src str, span: GraphQLSourceSpan) -> Self {
        Self {
            lexeme,
            text,
            span,
            token_type: None,
        }
    }

    /// Returns this token stamped with `token_type`.
    pub fn with_type(mut self, token_type: GraphQLTokenType) -> Self {
        self.token_type = Some(token_type);
        self
    }

    pub fn lexeme(&self) -> Lexeme {
        self.lexeme
    }

    /// The source text of this token. Sigils are not part of the text of a
    /// variable or directive name, although they are part of its span.
    pub fn text(&self) -> &'src str {
        self.text
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    pub fn token_type(&self) -> Option<GraphQLTokenType> {
        self.token_type
    }

    /// Whether this token carries the type tag `expected`.
    pub fn is_type(&self, expected: GraphQLTokenType) -> bool {
        self.token_type == Some(expected)
    }

    pub fn begin_line(&self) -> usize {
        self.span.begin_line()
    }

    pub fn begin_column(&self) -> usize {
        self.span.begin_column()
    }

    pub fn end_line(&self) -> usize {
        self.span.end_line()
    }

    pub fn end_column(&self) -> usize {
        self.span.end_column()
    }
}

impl std::fmt::Display for GraphQLToken<'_> {
    /// Renders `<Token [type] text>`, omitting `[type]` when untagged.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.token_type {
            Some(token_type) => write!(f, "<Token [{token_type}] {}>", self.text),
            None => write!(f, "<Token {}>", self.text),
        }
    }
}
