/// The classification of the most recently scanned lexeme.
///
/// Variants are declared in contiguous groups, and each group predicate
/// below covers exactly one run of the declaration order:
///
/// | Group                  | Variants                                     |
/// |------------------------|----------------------------------------------|
/// | control                | `Eof`, `Unknown`                             |
/// | atoms                  | `Name`, `Comment`, `Variable`, `Directive`   |
/// | structural punctuation | `{ } ( ) [ ] : = .`                          |
/// | literal values         | `Int` .. `BlockString`                       |
/// | execution keywords     | `query mutation subscription fragment on`    |
/// | definition keywords    | `schema` .. `repeatable`                     |
///
/// Keyword variants are never produced by the scanner itself; a `Name`
/// only becomes a keyword through
/// [`KeywordTable::upgrade`](crate::token::KeywordTable::upgrade).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum Lexeme {
    // Control
    Eof,
    Unknown,

    // Atoms
    Name,
    Comment,
    /// The `$` sigil introducing a variable reference.
    Variable,
    /// The `@` sigil introducing a directive.
    Directive,

    // Structural punctuation
    CurlyOpen,
    CurlyClose,
    ParenOpen,
    ParenClose,
    SquareBracketOpen,
    SquareBracketClose,
    Colon,
    Equals,
    Period,

    // Literal values
    Int,
    Float,
    String,
    True,
    False,
    Null,
    Enum,
    List,
    Object,
    BlockString,

    // Execution keywords
    Query,
    Mutation,
    Subscription,
    Fragment,
    On,

    // Definition keywords
    Schema,
    DirectiveKeyword,
    EnumKeyword,
    Input,
    Interface,
    Scalar,
    Type,
    Union,
    Extend,
    Implements,
    Repeatable,
}

impl Lexeme {
    pub fn is_control(&self) -> bool {
        matches!(self, Self::Eof | Self::Unknown)
    }

    pub fn is_atom(&self) -> bool {
        matches!(
            self,
            Self::Name | Self::Comment | Self::Variable | Self::Directive,
        )
    }

    pub fn is_structure(&self) -> bool {
        matches!(
            self,
            Self::CurlyOpen
                | Self::CurlyClose
                | Self::ParenOpen
                | Self::ParenClose
                | Self::SquareBracketOpen
                | Self::SquareBracketClose
                | Self::Colon
                | Self::Equals
                | Self::Period
        )
    }

    pub fn is_value(&self) -> bool {
        matches!(
            self,
            Self::Int
                | Self::Float
                | Self::String
                | Self::True
                | Self::False
                | Self::Null
                | Self::Enum
                | Self::List
                | Self::Object
                | Self::BlockString
        )
    }

    pub fn is_execution_keyword(&self) -> bool {
        self.is_operation_keyword() || matches!(self, Self::Fragment | Self::On)
    }

    /// `query`, `mutation` or `subscription`.
    pub fn is_operation_keyword(&self) -> bool {
        matches!(self, Self::Query | Self::Mutation | Self::Subscription)
    }

    pub fn is_definition_keyword(&self) -> bool {
        matches!(
            self,
            Self::Schema
                | Self::DirectiveKeyword
                | Self::EnumKeyword
                | Self::Input
                | Self::Interface
                | Self::Scalar
                | Self::Type
                | Self::Union
                | Self::Extend
                | Self::Implements
                | Self::Repeatable
        )
    }

    /// The source spelling of a keyword lexeme, or `None` for every
    /// non-keyword lexeme.
    pub fn as_keyword_str(&self) -> Option<&'static str> {
        Some(match self {
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",

            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
            Self::Fragment => "fragment",
            Self::On => "on",

            Self::Schema => "schema",
            Self::DirectiveKeyword => "directive",
            Self::EnumKeyword => "enum",
            Self::Input => "input",
            Self::Interface => "interface",
            Self::Scalar => "scalar",
            Self::Type => "type",
            Self::Union => "union",
            Self::Extend => "extend",
            Self::Implements => "implements",
            Self::Repeatable => "repeatable",

            _ => return None,
        })
    }

    /// The punctuator character for structural lexemes.
    pub fn as_punctuator_char(&self) -> Option<char> {
        Some(match self {
            Self::CurlyOpen => '{',
            Self::CurlyClose => '}',
            Self::ParenOpen => '(',
            Self::ParenClose => ')',
            Self::SquareBracketOpen => '[',
            Self::SquareBracketClose => ']',
            Self::Colon => ':',
            Self::Equals => '=',
            Self::Period => '.',
            _ => return None,
        })
    }
}
