//! Tests for selection sets: fields, aliases, arguments and spreads.

use crate::GraphQLParseErrorKind;
use crate::ast::ArgumentValue;
use crate::ast::Selection;
use crate::ast::Spread;
use crate::ast::Value;
use crate::tests::utils::field_at;
use crate::tests::utils::field_names;
use crate::tests::utils::only_operation;
use crate::tests::utils::parse_err;
use crate::tests::utils::parse_ok;
use crate::token::GraphQLTokenType;

// =============================================================================
// Fields
// =============================================================================

#[test]
fn aliased_field_with_arguments() {
    let doc = parse_ok("{ smallPic: profilePic(size: 64) }");
    let field = field_at(&only_operation(&doc).selections, 0);
    assert_eq!(field.alias.as_ref().map(|a| a.text()), Some("smallPic"));
    assert_eq!(field.name.text(), "profilePic");
    assert_eq!(field.response_key(), "smallPic");
    assert_eq!(field.arguments[0].name.text(), "size");
}

#[test]
fn response_key_without_alias() {
    let doc = parse_ok("{ profilePic }");
    assert_eq!(field_at(&only_operation(&doc).selections, 0).response_key(), "profilePic");
}

#[test]
fn nested_selection_sets() {
    let doc = parse_ok("{ a { b { c } d } e }");
    let top = &only_operation(&doc).selections;
    assert_eq!(field_names(top), vec!["a", "e"]);

    let a = field_at(top, 0);
    assert_eq!(field_names(&a.selections), vec!["b", "d"]);
    let b = field_at(&a.selections, 0);
    assert_eq!(field_names(&b.selections), vec!["c"]);
    assert!(field_at(top, 1).selections.is_empty());
}

#[test]
fn field_spans_and_source() {
    let source = "{\n  user(id: 1) @live {\n    name\n  }\n}";
    let doc = parse_ok(source);
    let user = field_at(&only_operation(&doc).selections, 0);
    assert_eq!((user.span.begin_line(), user.span.begin_column()), (2, 3));
    assert_eq!((user.span.end_line(), user.span.end_column()), (4, 3));
    assert_eq!(
        user.to_source(source),
        "user(id: 1) @live {\n    name\n  }",
    );
}

/// An opened field body must select something; the failure points at the
/// closing brace.
#[test]
fn empty_field_selection_set() {
    let err = parse_err("{ a { } }");
    assert_eq!(err.found(), "}");
    assert_eq!((err.line(), err.column()), (1, 7));
    assert_eq!(
        err.kind(),
        &GraphQLParseErrorKind::InvalidEmptyConstruct {
            construct: "selection set".to_string(),
        },
    );
}

#[test]
fn alias_requires_field_name() {
    let err = parse_err("{ alias: }");
    assert_eq!(err.found(), "}");
    assert_eq!(err.column(), 10);
}

#[test]
fn deep_nesting_is_rejected() {
    let depth = 100;
    let source = format!("{}{}", "{ a ".repeat(depth), "}".repeat(depth));
    let err = parse_err(&source);
    assert_eq!(err.kind(), &GraphQLParseErrorKind::InvalidSyntax);
    assert_eq!(err.message(), "maximum nesting depth exceeded");
}

#[test]
fn moderate_nesting_is_accepted() {
    let depth = 32;
    let source = format!("{}b{}", "{ a ".repeat(depth), " }".repeat(depth));
    let doc = parse_ok(&source);
    let mut selections = &only_operation(&doc).selections;
    for _ in 1..depth {
        selections = &field_at(selections, 0).selections;
    }
    assert_eq!(field_names(selections), vec!["a", "b"]);
}

// =============================================================================
// Arguments
// =============================================================================

/// Each argument holds exactly one of a literal or a variable reference.
#[test]
fn argument_values() {
    let doc = parse_ok(
        r#"{ f(a: 1, b: $v, c: "s", d: ENUM, e: null, g: [1, [2]], h: {x: 1}) }"#,
    );
    let args = &field_at(&only_operation(&doc).selections, 0).arguments;
    let summary: Vec<_> = args
        .iter()
        .map(|arg| match &arg.value {
            ArgumentValue::Variable(token) => (arg.name.text(), token.token_type()),
            ArgumentValue::Value(value) => (arg.name.text(), value.token_type()),
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("a", Some(GraphQLTokenType::Int)),
            ("b", Some(GraphQLTokenType::Variable)),
            ("c", Some(GraphQLTokenType::String)),
            ("d", Some(GraphQLTokenType::Enum)),
            ("e", None),
            ("g", Some(GraphQLTokenType::Array)),
            ("h", Some(GraphQLTokenType::Object)),
        ],
    );
    assert_eq!(args[4].value, ArgumentValue::Value(Value::Null));
}

#[test]
fn variable_argument_spans_sigil() {
    let doc = parse_ok("{ f(id: $userId) }");
    let arg = &field_at(&only_operation(&doc).selections, 0).arguments[0];
    let ArgumentValue::Variable(token) = &arg.value else {
        panic!("expected a variable argument");
    };
    assert_eq!(token.text(), "userId");
    assert_eq!(token.begin_column(), 9);
    assert_eq!(arg.span.begin_column(), 5);
    assert_eq!(arg.span.end_column(), 15);
}

#[test]
fn empty_argument_list_is_accepted() {
    let doc = parse_ok("{ f() }");
    assert!(field_at(&only_operation(&doc).selections, 0).arguments.is_empty());
}

#[test]
fn argument_requires_colon() {
    let err = parse_err("{ f(a 1) }");
    assert_eq!(err.found(), "1");
    assert_eq!(err.column(), 7);
}

#[test]
fn argument_requires_value() {
    let err = parse_err("{ f(a:) }");
    assert_eq!(err.found(), ")");
    assert_eq!(err.column(), 7);
}

#[test]
fn multiline_error_position() {
    let err = parse_err("query {\n  a\n  b(\n}");
    assert_eq!(err.found(), "}");
    assert_eq!((err.line(), err.column()), (4, 1));
}

// =============================================================================
// Spreads
// =============================================================================

#[test]
fn named_fragment_spread() {
    let doc = parse_ok("{ ...UserParts @include(if: $x) }");
    match &only_operation(&doc).selections[0] {
        Selection::Spread(Spread::Named(spread)) => {
            assert_eq!(spread.name.text(), "UserParts");
            assert_eq!(spread.directives[0].name.text(), "include");
        },
        other => panic!("expected a named spread, got {other:?}"),
    }
}

#[test]
fn spread_of_fragment_named_like_a_keyword() {
    let doc = parse_ok("{ ...query }");
    let spread = only_operation(&doc).selections[0].as_spread().unwrap();
    assert!(matches!(spread, Spread::Named(s) if s.name.text() == "query"));
}

#[test]
fn inline_spread_with_type_condition() {
    let doc = parse_ok("{ ... on User { id } }");
    match &only_operation(&doc).selections[0] {
        Selection::Spread(Spread::Inline(inline)) => {
            assert_eq!(inline.type_condition.as_ref().map(|t| t.text()), Some("User"));
            assert_eq!(field_names(&inline.selections), vec!["id"]);
        },
        other => panic!("expected an inline spread, got {other:?}"),
    }
}

#[test]
fn inline_spread_without_type_condition() {
    let doc = parse_ok("{ ...@include(if: true) { id } }");
    match &only_operation(&doc).selections[0] {
        Selection::Spread(Spread::Inline(inline)) => {
            assert!(inline.type_condition.is_none());
            assert_eq!(inline.directives.len(), 1);
            assert_eq!(field_names(&inline.selections), vec!["id"]);
        },
        other => panic!("expected an inline spread, got {other:?}"),
    }
}

#[test]
fn spread_span_starts_at_dots() {
    let doc = parse_ok("{ x ... on T { y } }");
    let spread = &only_operation(&doc).selections[1];
    assert_eq!(spread.span().begin_column(), 5);
    assert_eq!(spread.span().end_column(), 18);
}

#[test]
fn inline_spread_requires_selection_set() {
    let err = parse_err("{ ... on User }");
    assert_eq!(err.found(), "}");
    assert_eq!(err.column(), 15);
}

#[test]
fn inline_spread_selection_set_cannot_be_empty() {
    let err = parse_err("{ ... {} }");
    assert!(matches!(
        err.kind(),
        GraphQLParseErrorKind::InvalidEmptyConstruct { .. },
    ));
    assert_eq!(err.column(), 8);
}

#[test]
fn spread_needs_exactly_three_dots() {
    let err = parse_err("{ .... F }");
    assert_eq!(err.found(), ".");
    assert_eq!(err.column(), 3);

    let err = parse_err("{ .. F }");
    assert_eq!(err.found(), ".");
}
