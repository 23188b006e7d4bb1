//! The character-level scanner that classifies GraphQL source text into
//! lexemes.

mod graphql_scanner;

pub use graphql_scanner::GraphQLScanner;
pub(crate) use graphql_scanner::is_ignorable;

#[cfg(test)]
mod tests;
