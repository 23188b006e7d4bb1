use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::ast::ListValue;
use crate::ast::Value;
use crate::scanner::GraphQLScanner;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenType;
use crate::token::Lexeme;
use crate::token::VALUE_KEYWORDS;

/// What [`GraphQLValueReader::read_value`] found in a value position.
#[derive(Debug)]
pub(crate) enum ValueOrVariable<'src> {
    Value(Value<'src>),

    /// A `$` sigil. The caller reads the variable name itself.
    Variable,
}

/// Reads literal values on top of a [`GraphQLScanner`].
///
/// On success the scanner is left on the value's last lexeme (the literal
/// itself, or the closing `]` or `}`) so the caller decides when to advance.
pub(crate) struct GraphQLValueReader<'a, 'src> {
    scanner: &'a mut GraphQLScanner<'src>,
    list_depth: usize,
}

impl<'a, 'src> GraphQLValueReader<'a, 'src> {
    const MAX_LIST_DEPTH: usize = 64;

    pub(crate) fn new(scanner: &'a mut GraphQLScanner<'src>) -> Self {
        Self {
            scanner,
            list_depth: 0,
        }
    }

    /// Skips comments and reads the value that starts at the next lexeme.
    ///
    /// With `accept_variable`, a `$` is reported as
    /// [`ValueOrVariable::Variable`] instead of failing.
    pub(crate) fn read_value(
        &mut self,
        accept_variable: bool,
    ) -> Result<ValueOrVariable<'src>, GraphQLParseError> {
        self.scanner.advance_no_comments();
        if accept_variable && self.scanner.lexeme() == Lexeme::Variable {
            return Ok(ValueOrVariable::Variable);
        }
        self.read_current().map(ValueOrVariable::Value)
    }

    /// Skips comments and reads a value that may not reference variables.
    pub(crate) fn read_const_value(&mut self) -> Result<Value<'src>, GraphQLParseError> {
        self.scanner.advance_no_comments();
        self.read_current()
    }

    /// Reads the value starting at the scanner's current lexeme.
    fn read_current(&mut self) -> Result<Value<'src>, GraphQLParseError> {
        match self.scanner.lexeme() {
            Lexeme::Name => Ok(match VALUE_KEYWORDS.upgrade(self.scanner.current_text()) {
                Lexeme::True => Value::Boolean(true),
                Lexeme::False => Value::Boolean(false),
                Lexeme::Null => Value::Null,
                _ => self.typed_scalar(Lexeme::Enum),
            }),

            Lexeme::SquareBracketOpen => self.read_list().map(Value::List),

            Lexeme::CurlyOpen => {
                let open_span = self.scanner.current_span();
                if self.scanner.scan_object_block() == Lexeme::Unknown {
                    let mut error = if self.scanner.peek_byte().is_none() {
                        self.scanner.error(GraphQLParseErrorKind::UnclosedDelimiter {
                            delimiter: "{".to_string(),
                        })
                    } else {
                        self.scanner.error(GraphQLParseErrorKind::LexerError)
                    };
                    error.add_note_with_span("object literal opened here", open_span);
                    return Err(error);
                }
                Ok(self.typed_scalar(Lexeme::Object))
            },

            lexeme @ (Lexeme::Int | Lexeme::Float | Lexeme::String | Lexeme::BlockString) => {
                Ok(self.typed_scalar(lexeme))
            },

            Lexeme::Unknown => Err(self.scanner.error(GraphQLParseErrorKind::LexerError)),

            Lexeme::Eof => Err(self.scanner.error(GraphQLParseErrorKind::UnexpectedEof {
                expected: vec!["a value".to_string()],
            })),

            _ => Err(self.scanner.error(GraphQLParseErrorKind::UnexpectedToken {
                expected: vec!["a value".to_string()],
                found: self.scanner.failure_text().to_string(),
            })),
        }
    }

    /// Wraps the current lexeme as a token classified as `lexeme` and
    /// stamped with the matching type tag.
    fn typed_scalar(&self, lexeme: Lexeme) -> Value<'src> {
        let token = GraphQLToken::new(
            lexeme,
            self.scanner.current_text(),
            self.scanner.current_span(),
        );
        Value::Scalar(match GraphQLTokenType::from_lexeme(lexeme) {
            Some(token_type) => token.with_type(token_type),
            None => token,
        })
    }

    fn read_list(&mut self) -> Result<ListValue<'src>, GraphQLParseError> {
        let open_span = self.scanner.current_span();
        if self.list_depth >= Self::MAX_LIST_DEPTH {
            return Err(GraphQLParseError::new(
                "maximum nesting depth exceeded",
                "[",
                open_span,
                GraphQLParseErrorKind::InvalidSyntax,
            ));
        }
        self.list_depth += 1;

        let mut items = vec![];
        loop {
            match self.scanner.advance_no_comments() {
                Lexeme::SquareBracketClose => break,
                Lexeme::Eof => {
                    let mut error = self.scanner.error(GraphQLParseErrorKind::UnclosedDelimiter {
                        delimiter: "[".to_string(),
                    });
                    error.add_note_with_span("list opened here", open_span);
                    return Err(error);
                },
                _ => items.push(self.read_current()?),
            }
        }

        self.list_depth -= 1;
        Ok(ListValue {
            items,
            span: open_span.to(&self.scanner.current_span()),
        })
    }
}
