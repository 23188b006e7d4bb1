/// The semantic type tag stamped on literal tokens for downstream
/// consumers.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum GraphQLTokenType {
    Int,
    Float,
    String,
    Boolean,
    Enum,
    Array,
    Object,
    BlockString,
    /// The bare name of a `$variable` used as an argument value.
    Variable,
}

impl GraphQLTokenType {
    /// The tag for a literal lexeme, or `None` for lexemes that are not
    /// literal values (and for `null`, which has no tag).
    pub fn from_lexeme(lexeme: crate::token::Lexeme) -> Option<Self> {
        use crate::token::Lexeme;
        Some(match lexeme {
            Lexeme::Int => Self::Int,
            Lexeme::Float => Self::Float,
            Lexeme::String => Self::String,
            Lexeme::True | Lexeme::False => Self::Boolean,
            Lexeme::Enum => Self::Enum,
            Lexeme::List => Self::Array,
            Lexeme::Object => Self::Object,
            Lexeme::BlockString => Self::BlockString,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Boolean => "boolean",
            Self::Enum => "enum",
            Self::Array => "array",
            Self::Object => "object",
            Self::BlockString => "blockstring",
            Self::Variable => "variable",
        }
    }
}

impl std::fmt::Display for GraphQLTokenType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
