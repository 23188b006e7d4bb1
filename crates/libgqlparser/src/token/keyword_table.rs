use crate::token::Lexeme;

/// A fixed, read-only table of keywords a `Name` lexeme may be upgraded to.
///
/// Each table is one contiguous run of [`Lexeme`] variants. Which table is
/// consulted depends on the grammar position, so `query` is an operation
/// keyword at the top of a document but an ordinary field name inside a
/// selection set.
#[derive(Debug)]
pub struct KeywordTable {
    keywords: &'static [Lexeme],
}

/// `true`, `false`, `null`.
pub static VALUE_KEYWORDS: KeywordTable = KeywordTable {
    keywords: &[Lexeme::True, Lexeme::False, Lexeme::Null],
};

/// `query`, `mutation`, `subscription`, `fragment`, `on`.
pub static EXECUTION_KEYWORDS: KeywordTable = KeywordTable {
    keywords: &[
        Lexeme::Query,
        Lexeme::Mutation,
        Lexeme::Subscription,
        Lexeme::Fragment,
        Lexeme::On,
    ],
};

/// Keywords of the schema definition language. They are recognized but
/// never parsed by this crate.
pub static DEFINITION_KEYWORDS: KeywordTable = KeywordTable {
    keywords: &[
        Lexeme::Schema,
        Lexeme::DirectiveKeyword,
        Lexeme::EnumKeyword,
        Lexeme::Input,
        Lexeme::Interface,
        Lexeme::Scalar,
        Lexeme::Type,
        Lexeme::Union,
        Lexeme::Extend,
        Lexeme::Implements,
        Lexeme::Repeatable,
    ],
};

impl KeywordTable {
    /// Returns the keyword `text` spells exactly, or [`Lexeme::Name`] when it
    /// matches no entry of this table.
    pub fn upgrade(&self, text: &str) -> Lexeme {
        self.keywords
            .iter()
            .copied()
            .find(|keyword| {
                keyword.as_keyword_str().is_some_and(|kw| {
                    kw.len() == text.len() && kw.as_bytes() == text.as_bytes()
                })
            })
            .unwrap_or(Lexeme::Name)
    }

    /// The position of `lexeme` within this table, if it belongs to it.
    pub fn index_of(&self, lexeme: Lexeme) -> Option<usize> {
        self.keywords.iter().position(|kw| *kw == lexeme)
    }

    pub fn keywords(&self) -> &'static [Lexeme] {
        self.keywords
    }
}
