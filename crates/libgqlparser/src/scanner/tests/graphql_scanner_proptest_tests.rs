//! Property tests for `GraphQLScanner`.

use crate::scanner::GraphQLScanner;
use crate::token::GraphQLToken;
use crate::token::Lexeme;
use proptest::prelude::*;

fn tokens(source: &str) -> Vec<GraphQLToken<'_>> {
    GraphQLScanner::new(source).collect()
}

proptest! {
    #[test]
    fn any_identifier_scans_as_one_name(input in "[A-Za-z_][A-Za-z0-9_]{0,40}") {
        let toks = tokens(&input);
        prop_assert_eq!(toks.len(), 2);
        prop_assert_eq!(toks[0].lexeme(), Lexeme::Name);
        prop_assert_eq!(toks[0].text(), input.as_str());
        prop_assert_eq!(toks[1].lexeme(), Lexeme::Eof);
    }

    #[test]
    fn any_integer_scans_as_one_int(value in any::<i64>()) {
        let input = value.to_string();
        let toks = tokens(&input);
        prop_assert_eq!(toks[0].lexeme(), Lexeme::Int);
        prop_assert_eq!(toks[0].text(), input.as_str());
        prop_assert_eq!(toks[1].lexeme(), Lexeme::Eof);
    }

    #[test]
    fn well_formed_floats_scan_as_one_float(
        input in "-?(0|[1-9][0-9]{0,6})(\\.[0-9]{1,6}([eE][+-]?[0-9]{1,3})?|[eE][+-]?[0-9]{1,3})"
    ) {
        let toks = tokens(&input);
        prop_assert_eq!(toks[0].lexeme(), Lexeme::Float);
        prop_assert_eq!(toks[0].text(), input.as_str());
        prop_assert_eq!(toks[1].lexeme(), Lexeme::Eof);
    }

    /// Any content without quotes, backslashes or line breaks forms one
    /// string, multi-byte characters included.
    #[test]
    fn quoted_text_scans_as_one_string(content in "[^\"\\\\\n\r]{1,60}") {
        let input = format!("\"{content}\"");
        let toks = tokens(&input);
        prop_assert_eq!(toks[0].lexeme(), Lexeme::String);
        prop_assert_eq!(toks[0].text(), input.as_str());
        prop_assert_eq!(toks[0].end_column(), input.len());
    }

    /// Each name on its own line starts at column 1 of the expected line,
    /// whichever line terminator separates them.
    #[test]
    fn lines_are_counted_per_terminator(
        names in prop::collection::vec("[a-z]{1,8}", 1..12),
        terminator in prop::sample::select(vec!["\n", "\r\n", "\r"]),
    ) {
        let source = names.join(terminator);
        let toks = tokens(&source);
        for (idx, name) in names.iter().enumerate() {
            prop_assert_eq!(toks[idx].text(), name.as_str());
            prop_assert_eq!(toks[idx].begin_line(), idx + 1);
            prop_assert_eq!(toks[idx].begin_column(), 1);
        }
    }
}
