//! Tests for `GraphQLScanner`.

use crate::scanner::GraphQLScanner;
use crate::token::GraphQLToken;
use crate::token::Lexeme;

/// Collects the lexemes of the raw scan path (comments included).
fn lexemes(source: &str) -> Vec<Lexeme> {
    GraphQLScanner::new(source).map(|t| t.lexeme()).collect()
}

fn tokens(source: &str) -> Vec<GraphQLToken<'_>> {
    GraphQLScanner::new(source).collect()
}

// =============================================================================
// Punctuation and atoms
// =============================================================================

#[test]
fn punctuators_and_sigils() {
    assert_eq!(
        lexemes("{ } ( ) [ ] : = . $ @"),
        vec![
            Lexeme::CurlyOpen,
            Lexeme::CurlyClose,
            Lexeme::ParenOpen,
            Lexeme::ParenClose,
            Lexeme::SquareBracketOpen,
            Lexeme::SquareBracketClose,
            Lexeme::Colon,
            Lexeme::Equals,
            Lexeme::Period,
            Lexeme::Variable,
            Lexeme::Directive,
            Lexeme::Eof,
        ],
    );
}

/// Names are never upgraded to keywords by the scanner.
#[test]
fn names_stay_names() {
    let toks = tokens("_a1 B2 query true");
    let texts: Vec<_> = toks.iter().map(|t| (t.lexeme(), t.text())).collect();
    assert_eq!(
        texts,
        vec![
            (Lexeme::Name, "_a1"),
            (Lexeme::Name, "B2"),
            (Lexeme::Name, "query"),
            (Lexeme::Name, "true"),
            (Lexeme::Eof, ""),
        ],
    );
}

/// Commas, form feeds and backspaces are ignorable like whitespace.
#[test]
fn commas_and_control_whitespace_are_ignored() {
    assert_eq!(
        lexemes("a,\u{0C}\u{08}\tb,,"),
        vec![Lexeme::Name, Lexeme::Name, Lexeme::Eof],
    );
}

#[test]
fn byte_order_mark_is_ignored() {
    let toks = tokens("\u{FEFF}query");
    assert_eq!(toks[0].lexeme(), Lexeme::Name);
    assert_eq!(toks[0].text(), "query");
    assert_eq!(toks[0].begin_line(), 1);
    assert_eq!(toks[0].begin_column(), 1);
    assert_eq!(toks[0].end_column(), 5);
}

/// The cursor sits just past the last consumed byte.
#[test]
fn cursor_position_tracks_consumed_input() {
    let mut scanner = GraphQLScanner::new("{\n  name");
    assert_eq!(scanner.cursor_position().column(), 1);

    scanner.advance();
    let pos = scanner.cursor_position();
    assert_eq!((pos.line(), pos.column(), pos.byte_offset()), (1, 2, 1));

    assert_eq!(scanner.advance(), Lexeme::Name);
    let pos = scanner.cursor_position();
    assert_eq!((pos.line(), pos.column(), pos.byte_offset()), (2, 7, 8));
    assert_eq!(pos, scanner.current_span().end_exclusive);
}

// =============================================================================
// Comments
// =============================================================================

/// The raw scan path yields comments; the text excludes the line break.
#[test]
fn comments_are_yielded_by_raw_scan() {
    let toks = tokens("# hello\nname");
    assert_eq!(toks[0].lexeme(), Lexeme::Comment);
    assert_eq!(toks[0].text(), "# hello");
    assert_eq!(toks[1].lexeme(), Lexeme::Name);
    assert_eq!(toks[1].begin_line(), 2);
}

#[test]
fn advance_no_comments_skips_comments() {
    let mut scanner = GraphQLScanner::new("# one\n# two\r\nname # three");
    assert_eq!(scanner.advance_no_comments(), Lexeme::Name);
    assert_eq!(scanner.current_text(), "name");
    assert_eq!(scanner.current_span().begin_line(), 3);
    assert_eq!(scanner.advance_no_comments(), Lexeme::Eof);
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn integers_and_floats() {
    assert_eq!(
        lexemes("0 -1 42 1.5 -0.25 1e10 2E-3 1.5e+2 0.5"),
        vec![
            Lexeme::Int,
            Lexeme::Int,
            Lexeme::Int,
            Lexeme::Float,
            Lexeme::Float,
            Lexeme::Float,
            Lexeme::Float,
            Lexeme::Float,
            Lexeme::Float,
            Lexeme::Eof,
        ],
    );
}

#[test]
fn number_text_is_the_whole_literal() {
    let toks = tokens("-12.5e-3");
    assert_eq!(toks[0].lexeme(), Lexeme::Float);
    assert_eq!(toks[0].text(), "-12.5e-3");
}

/// A leading zero followed by another digit is not a number.
#[test]
fn leading_zero_is_unknown() {
    assert_eq!(lexemes("01"), vec![Lexeme::Unknown]);
    assert_eq!(lexemes("-007"), vec![Lexeme::Unknown]);
}

#[test]
fn incomplete_numbers_are_unknown() {
    assert_eq!(lexemes("-"), vec![Lexeme::Unknown]);
    assert_eq!(lexemes("1."), vec![Lexeme::Unknown]);
    assert_eq!(lexemes("1e"), vec![Lexeme::Unknown]);
    assert_eq!(lexemes("1e+"), vec![Lexeme::Unknown]);
    assert_eq!(lexemes("1.5e"), vec![Lexeme::Unknown]);
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn simple_strings() {
    let toks = tokens(r#""abc" "" """""""#);
    assert_eq!(toks[0].lexeme(), Lexeme::String);
    assert_eq!(toks[0].text(), r#""abc""#);
    assert_eq!(toks[1].lexeme(), Lexeme::String);
    assert_eq!(toks[1].text(), r#""""#);
    assert_eq!(toks[2].lexeme(), Lexeme::String);
    assert_eq!(toks[2].text(), r#""""""""#);
    assert_eq!(toks[3].lexeme(), Lexeme::Eof);
}

#[test]
fn escaped_quote_does_not_close_string() {
    let toks = tokens(r#""a\"b" x"#);
    assert_eq!(toks[0].lexeme(), Lexeme::String);
    assert_eq!(toks[0].text(), r#""a\"b""#);
    assert_eq!(toks[1].text(), "x");
}

/// Opening runs of 4, 5 or more than 6 quotes are never valid.
#[test]
fn invalid_quote_runs_are_unknown() {
    assert_eq!(lexemes(r#""""" "#), vec![Lexeme::Unknown]);
    assert_eq!(lexemes(r#"""""" "#), vec![Lexeme::Unknown]);
    assert_eq!(lexemes(r#""""""""x"#), vec![Lexeme::Unknown]);
}

#[test]
fn unterminated_string_is_unknown() {
    let toks = tokens(r#"  "abc"#);
    assert_eq!(toks.len(), 1);
    assert_eq!(toks[0].lexeme(), Lexeme::Unknown);
    assert_eq!(toks[0].text(), r#""abc"#);
    assert_eq!(toks[0].begin_column(), 3);
}

/// A block string spanning lines is one token whose end position is on its
/// last line, and an escaped `\"""` inside it does not close it.
#[test]
fn multiline_block_string() {
    let source = "\"\"\"line1\nline \\\"\"\" two\n end\"\"\" next";
    let toks = tokens(source);

    assert_eq!(toks[0].lexeme(), Lexeme::BlockString);
    assert_eq!(toks[0].text(), "\"\"\"line1\nline \\\"\"\" two\n end\"\"\"");
    assert_eq!(toks[0].begin_line(), 1);
    assert_eq!(toks[0].begin_column(), 1);
    assert_eq!(toks[0].end_line(), 3);
    assert_eq!(toks[0].end_column(), 7);

    assert_eq!(toks[1].text(), "next");
    assert_eq!(toks[1].begin_line(), 3);
    assert_eq!(toks[1].begin_column(), 9);
}

#[test]
fn unterminated_block_string_is_unknown() {
    assert_eq!(lexemes("\"\"\"never\nclosed\"\""), vec![Lexeme::Unknown]);
}

// =============================================================================
// Positions
// =============================================================================

/// `\n`, `\r\n` and a lone `\r` each end exactly one line.
#[test]
fn line_and_column_tracking() {
    let toks = tokens("a\n  b\r\n c\rd");
    let positions: Vec<_> = toks
        .iter()
        .map(|t| (t.text(), t.begin_line(), t.begin_column()))
        .collect();
    assert_eq!(
        positions,
        vec![
            ("a", 1, 1),
            ("b", 2, 3),
            ("c", 3, 2),
            ("d", 4, 1),
            ("", 4, 2),
        ],
    );
}

/// End columns are inclusive: they name the last character of the token.
#[test]
fn end_column_is_inclusive() {
    let toks = tokens("  query");
    assert_eq!(toks[0].begin_column(), 3);
    assert_eq!(toks[0].end_column(), 7);
    assert_eq!(toks[0].end_line(), 1);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn unknown_character_stops_the_raw_scan() {
    let toks = tokens("a ? b");
    assert_eq!(toks.len(), 2);
    assert_eq!(toks[1].lexeme(), Lexeme::Unknown);
    assert_eq!(toks[1].text(), "?");
    assert_eq!(toks[1].begin_column(), 3);
    assert_eq!(toks[1].end_column(), 3);
}

#[test]
fn failure_text_at_end_of_input_is_eof() {
    let mut scanner = GraphQLScanner::new("   ");
    assert_eq!(scanner.advance(), Lexeme::Eof);
    assert_eq!(scanner.failure_text(), "EOF");
    assert_eq!(scanner.failure_span().begin_column(), 4);
}

// =============================================================================
// Grammar-directed scanning
// =============================================================================

#[test]
fn sigil_name_excludes_sigil_from_text_but_not_span() {
    let mut scanner = GraphQLScanner::new("$userId");
    assert_eq!(scanner.advance(), Lexeme::Variable);
    assert_eq!(scanner.scan_sigil_name(), Lexeme::Name);
    assert_eq!(scanner.current_text(), "userId");
    assert_eq!(scanner.current_span().begin_column(), 1);
    assert_eq!(scanner.current_span().end_column(), 7);
}

#[test]
fn sigil_must_be_followed_immediately_by_a_name() {
    let mut scanner = GraphQLScanner::new("@ skip");
    assert_eq!(scanner.advance(), Lexeme::Directive);
    assert_eq!(scanner.scan_sigil_name(), Lexeme::Unknown);
    assert_eq!(scanner.failure_text(), " ");
    assert_eq!(scanner.failure_span().begin_column(), 2);
}

#[test]
fn spread_requires_exactly_three_dots() {
    let mut scanner = GraphQLScanner::new("...x");
    assert_eq!(scanner.advance(), Lexeme::Period);
    assert!(scanner.scan_spread_tail());
    assert_eq!(scanner.current_text(), "...");
    assert_eq!(scanner.advance(), Lexeme::Name);

    let mut scanner = GraphQLScanner::new("....x");
    scanner.advance();
    assert!(!scanner.scan_spread_tail());

    let mut scanner = GraphQLScanner::new(". ..x");
    scanner.advance();
    assert!(!scanner.scan_spread_tail());
}

/// Braces inside strings do not count towards an object literal's balance.
#[test]
fn object_block_is_balanced_around_strings() {
    let mut scanner = GraphQLScanner::new(r#"{a: "}", b: {c: 1}} rest"#);
    assert_eq!(scanner.advance(), Lexeme::CurlyOpen);
    assert_eq!(scanner.scan_object_block(), Lexeme::Object);
    assert_eq!(scanner.current_text(), r#"{a: "}", b: {c: 1}}"#);
    assert_eq!(scanner.advance(), Lexeme::Name);
    assert_eq!(scanner.current_text(), "rest");
}

#[test]
fn object_block_spanning_lines() {
    let mut scanner = GraphQLScanner::new("{\n  a: 1\n}");
    scanner.advance();
    assert_eq!(scanner.scan_object_block(), Lexeme::Object);
    let span = scanner.current_span();
    assert_eq!((span.begin_line(), span.begin_column()), (1, 1));
    assert_eq!((span.end_line(), span.end_column()), (3, 1));
}

#[test]
fn unbalanced_object_block_is_unknown() {
    let mut scanner = GraphQLScanner::new("{a: {b: 1}");
    scanner.advance();
    assert_eq!(scanner.scan_object_block(), Lexeme::Unknown);
}

#[test]
fn block_string_inside_object_block_is_unknown() {
    let mut scanner = GraphQLScanner::new(r#"{a: """x"""}"#);
    scanner.advance();
    assert_eq!(scanner.scan_object_block(), Lexeme::Unknown);
}
