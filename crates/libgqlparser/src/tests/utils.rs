//! Shared helpers for parser tests.

use crate::GraphQLParseError;
use crate::ast;

/// Parses `source`, panicking with the formatted diagnostic on failure.
pub fn parse_ok(source: &str) -> ast::ExecutionDocument<'_> {
    match crate::parse_execution(source) {
        Ok(doc) => doc,
        Err(err) => panic!(
            "expected `{source}` to parse:\n{}",
            err.format_detailed(Some(source)),
        ),
    }
}

/// Parses `source`, panicking if it unexpectedly succeeds.
pub fn parse_err(source: &str) -> GraphQLParseError {
    match crate::parse_execution(source) {
        Ok(doc) => panic!("expected `{source}` to fail, got {doc:#?}"),
        Err(err) => err,
    }
}

/// The document's only operation.
pub fn only_operation<'a, 'src>(
    doc: &'a ast::ExecutionDocument<'src>,
) -> &'a ast::Operation<'src> {
    assert_eq!(doc.operations.len(), 1, "expected exactly one operation");
    &doc.operations[0]
}

/// The field at `selections[idx]`, panicking if it is a spread.
pub fn field_at<'a, 'src>(
    selections: &'a [ast::Selection<'src>],
    idx: usize,
) -> &'a ast::Field<'src> {
    selections[idx]
        .as_field()
        .unwrap_or_else(|| panic!("selection {idx} is not a field"))
}

/// The names of the fields in `selections`, skipping spreads.
pub fn field_names<'src>(selections: &[ast::Selection<'src>]) -> Vec<&'src str> {
    selections
        .iter()
        .filter_map(|s| s.as_field())
        .map(|f| f.name.text())
        .collect()
}
