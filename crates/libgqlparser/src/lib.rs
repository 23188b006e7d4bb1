//! A parser for GraphQL execution documents: queries, mutations,
//! subscriptions and fragments.
//!
//! Source text is scanned into lexemes by [`scanner::GraphQLScanner`] and
//! assembled by [`GraphQLParser`] into an [`ast::ExecutionDocument`] whose
//! nodes all carry line/column spans. Malformed input produces a single
//! [`GraphQLParseError`] naming the offending text and where it begins.
//!
//! Schema definitions are outside the scope of this crate. Documents are
//! only checked for syntax, never validated against a schema.
//!
//! ```
//! let doc = libgqlparser::parse_execution("{ hero { name } }").unwrap();
//! let op = &doc.operations[0];
//! assert_eq!(op.kind, libgqlparser::ast::OperationKind::Query);
//! assert!(op.name.is_none());
//! ```

pub mod ast;
mod graphql_error_note;
mod graphql_error_note_kind;
mod graphql_parse_error;
mod graphql_parse_error_kind;
mod graphql_parser;
mod graphql_source_span;
mod graphql_value_reader;
pub mod scanner;
mod source_position;
pub mod token;

pub use graphql_error_note::GraphQLErrorNote;
pub use graphql_error_note::GraphQLErrorNotes;
pub use graphql_error_note_kind::GraphQLErrorNoteKind;
pub use graphql_parse_error::GraphQLParseError;
pub use graphql_parse_error_kind::GraphQLParseErrorKind;
pub use graphql_parser::GraphQLParser;
pub use graphql_source_span::GraphQLSourceSpan;
pub use smallvec::SmallVec;
pub use smallvec::smallvec;
pub use source_position::SourcePosition;

/// Parses `source` as an execution document.
pub fn parse_execution(source: &str) -> Result<ast::ExecutionDocument<'_>, GraphQLParseError> {
    GraphQLParser::new(source).parse_execution_document()
}

/// Parses `source` as a single type annotation, such as `[ID!]!`.
pub fn parse_type(source: &str) -> Result<ast::TypeAnnotation<'_>, GraphQLParseError> {
    GraphQLParser::new(source).parse_type_annotation()
}

/// Parses `source` as a single literal value, such as `[1, 2.5, "three"]`.
pub fn parse_value(source: &str) -> Result<ast::Value<'_>, GraphQLParseError> {
    GraphQLParser::new(source).parse_value()
}

#[cfg(test)]
mod tests;
