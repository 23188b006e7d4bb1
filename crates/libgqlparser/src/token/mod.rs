//! The lexeme classification, keyword tables and location-tagged tokens
//! shared by the scanner and the parser.

mod graphql_token;
mod graphql_token_type;
mod keyword_table;
mod lexeme;

pub use graphql_token::GraphQLToken;
pub use graphql_token_type::GraphQLTokenType;
pub use keyword_table::DEFINITION_KEYWORDS;
pub use keyword_table::EXECUTION_KEYWORDS;
pub use keyword_table::KeywordTable;
pub use keyword_table::VALUE_KEYWORDS;
pub use lexeme::Lexeme;
