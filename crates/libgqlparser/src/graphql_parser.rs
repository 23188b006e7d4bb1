use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use crate::ast;
use crate::graphql_value_reader::GraphQLValueReader;
use crate::graphql_value_reader::ValueOrVariable;
use crate::scanner::GraphQLScanner;
use crate::scanner::is_ignorable;
use crate::token::DEFINITION_KEYWORDS;
use crate::token::EXECUTION_KEYWORDS;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenType;
use crate::token::Lexeme;
use std::path::Path;
use std::path::PathBuf;

/// A recursive-descent parser for GraphQL execution documents.
///
/// Every production is entered with the scanner positioned on its first
/// lexeme and returns with the scanner positioned on the first lexeme after
/// it. Failure is an `Err` that short-circuits all the way up: there is no
/// error recovery, so the first violation ends the parse.
///
/// # Usage
///
/// ```
/// use libgqlparser::GraphQLParser;
///
/// let doc = GraphQLParser::new("query Q { hero { name } }")
///     .parse_execution_document()
///     .unwrap();
/// assert_eq!(doc.operations.len(), 1);
/// ```
pub struct GraphQLParser<'src> {
    scanner: GraphQLScanner<'src>,
    file_path: Option<PathBuf>,

    /// End of the last lexeme consumed by a production. Node spans end here.
    last_end: SourcePosition,

    selection_depth: usize,
}

impl<'src> GraphQLParser<'src> {
    /// Maximum nesting of selection sets and list type wrappers.
    const MAX_RECURSION_DEPTH: usize = 64;

    pub fn new(source: &'src str) -> Self {
        Self {
            scanner: GraphQLScanner::new(source),
            file_path: None,
            last_end: SourcePosition::start_of_document(),
            selection_depth: 0,
        }
    }

    /// Attributes errors produced by this parser to the file at `path`.
    pub fn with_file_path(mut self, path: impl AsRef<Path>) -> Self {
        self.file_path = Some(path.as_ref().to_path_buf());
        self
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Parses the whole source as an execution document.
    pub fn parse_execution_document(
        mut self,
    ) -> Result<ast::ExecutionDocument<'src>, GraphQLParseError> {
        let result = self.parse_document_impl();
        self.attach_file_path(result)
    }

    /// Parses the whole source as a single type annotation, such as
    /// `[[Int!]]!`.
    pub fn parse_type_annotation(
        mut self,
    ) -> Result<ast::TypeAnnotation<'src>, GraphQLParseError> {
        let result = self.parse_standalone_type();
        self.attach_file_path(result)
    }

    /// Parses the whole source as a single literal value. Variables are not
    /// allowed.
    pub fn parse_value(mut self) -> Result<ast::Value<'src>, GraphQLParseError> {
        let result = self.parse_standalone_value();
        self.attach_file_path(result)
    }

    fn attach_file_path<T>(
        &mut self,
        result: Result<T, GraphQLParseError>,
    ) -> Result<T, GraphQLParseError> {
        match self.file_path.take() {
            Some(path) => result.map_err(|err| err.with_file_path(path)),
            None => result,
        }
    }

    // =========================================================================
    // Scanner helpers
    // =========================================================================

    /// Consumes the current lexeme and loads the next non-comment lexeme.
    fn advance(&mut self) -> Result<Lexeme, GraphQLParseError> {
        let end = self.scanner.current_span().end_exclusive;
        self.advance_after(end)
    }

    /// Loads the next non-comment lexeme, recording `end` as the end of
    /// what has been consumed so far.
    fn advance_after(&mut self, end: SourcePosition) -> Result<Lexeme, GraphQLParseError> {
        self.last_end = end;
        match self.scanner.advance_no_comments() {
            Lexeme::Unknown => Err(self.scanner.error(GraphQLParseErrorKind::LexerError)),
            lexeme => Ok(lexeme),
        }
    }

    fn lexeme(&self) -> Lexeme {
        self.scanner.lexeme()
    }

    fn span_from(&self, start: SourcePosition) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(start, self.last_end)
    }

    /// Builds the error for a lexeme that is not one of `expected`.
    fn unexpected(&self, expected: &[&str]) -> GraphQLParseError {
        let expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
        let kind = match self.lexeme() {
            Lexeme::Eof => GraphQLParseErrorKind::UnexpectedEof {
                expected: expected.clone(),
            },
            Lexeme::Unknown => GraphQLParseErrorKind::LexerError,
            _ => GraphQLParseErrorKind::UnexpectedToken {
                expected: expected.clone(),
                found: self.scanner.failure_text().to_string(),
            },
        };
        let mut error = self.scanner.error(kind);
        error.add_note(format!("expected {}", expected.join(" or ")));
        error
    }

    /// Takes the current `Name` lexeme as a token and advances past it.
    fn expect_name(&mut self, what: &str) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        if self.lexeme() != Lexeme::Name {
            return Err(self.unexpected(&[what]));
        }
        let token = self.scanner.current_token();
        self.advance()?;
        Ok(token)
    }

    /// Reads the name right after a `$` or `@` sigil. Does not advance.
    fn scan_sigil_name(&mut self, what: &str) -> Result<GraphQLToken<'src>, GraphQLParseError> {
        if self.scanner.scan_sigil_name() != Lexeme::Name {
            return Err(self.unexpected(&[what]));
        }
        Ok(self.scanner.current_token())
    }

    fn expect_end_of_input(&mut self) -> Result<(), GraphQLParseError> {
        if self.lexeme() != Lexeme::Eof {
            return Err(self.unexpected(&["end of input"]));
        }
        Ok(())
    }

    fn enter_selection_set(&mut self) -> Result<(), GraphQLParseError> {
        if self.selection_depth >= Self::MAX_RECURSION_DEPTH {
            return Err(GraphQLParseError::new(
                "maximum nesting depth exceeded",
                self.scanner.current_text(),
                self.scanner.current_span(),
                GraphQLParseErrorKind::InvalidSyntax,
            ));
        }
        self.selection_depth += 1;
        Ok(())
    }

    fn exit_selection_set(&mut self) {
        self.selection_depth -= 1;
    }

    // =========================================================================
    // Document
    // =========================================================================

    fn parse_document_impl(&mut self) -> Result<ast::ExecutionDocument<'src>, GraphQLParseError> {
        log::debug!(
            "Parsing execution document ({} bytes)...",
            self.scanner.source().len(),
        );

        let mut operations = vec![];
        let mut fragments = vec![];

        self.advance()?;
        loop {
            let lexeme = match self.lexeme() {
                Lexeme::Name => EXECUTION_KEYWORDS.upgrade(self.scanner.current_text()),
                other => other,
            };

            match lexeme {
                Lexeme::Eof => break,

                Lexeme::CurlyOpen | Lexeme::Query | Lexeme::Mutation | Lexeme::Subscription => {
                    let operation = self.parse_operation(lexeme)?;
                    log::trace!(
                        "Parsed {} operation {:?} at {}.",
                        operation.kind,
                        operation.name.as_ref().map(|n| n.text()),
                        operation.span.start_inclusive,
                    );
                    operations.push(operation);
                },

                Lexeme::Fragment => {
                    let fragment = self.parse_fragment()?;
                    log::trace!(
                        "Parsed fragment `{}` at {}.",
                        fragment.name.text(),
                        fragment.span.start_inclusive,
                    );
                    fragments.push(fragment);
                },

                Lexeme::Name => {
                    let keyword = DEFINITION_KEYWORDS.upgrade(self.scanner.current_text());
                    return Err(match keyword.as_keyword_str() {
                        Some(keyword) => {
                            let mut error = self.scanner.error(
                                GraphQLParseErrorKind::SchemaDefinitionNotSupported {
                                    keyword: keyword.to_string(),
                                },
                            );
                            error.add_note(
                                "execution documents may only contain operations and fragments",
                            );
                            error
                        },
                        None => self.unexpected(&["an operation", "a fragment"]),
                    });
                },

                _ => return Err(self.unexpected(&["an operation", "a fragment"])),
            }
        }

        log::debug!(
            "Parsed {} operations and {} fragments.",
            operations.len(),
            fragments.len(),
        );

        Ok(ast::ExecutionDocument {
            operations,
            fragments,
            span: GraphQLSourceSpan::new(
                SourcePosition::start_of_document(),
                self.scanner.current_span().end_exclusive,
            ),
        })
    }

    // =========================================================================
    // Operations and fragments
    // =========================================================================

    /// `lexeme` is the upgraded current lexeme: an operation keyword or `{`.
    fn parse_operation(
        &mut self,
        lexeme: Lexeme,
    ) -> Result<ast::Operation<'src>, GraphQLParseError> {
        let start = self.scanner.current_span().start_inclusive;
        let mut kind = ast::OperationKind::Query;
        let mut keyword = None;
        let mut name = None;
        let mut variables = vec![];
        let mut directives = vec![];
        let mut selections = vec![];

        if let Some(operation_kind) = ast::OperationKind::from_lexeme(lexeme) {
            kind = operation_kind;
            keyword = Some(GraphQLToken::new(
                lexeme,
                self.scanner.current_text(),
                self.scanner.current_span(),
            ));
            self.advance()?;

            if self.lexeme() == Lexeme::Name {
                name = Some(self.scanner.current_token());
                self.advance()?;
            }
            if self.lexeme() == Lexeme::ParenOpen {
                variables = self.parse_variable_definitions()?;
            }
            if self.lexeme() == Lexeme::Directive {
                directives = self.parse_directives()?;
            }
        }

        if self.lexeme() == Lexeme::CurlyOpen {
            selections = self.parse_selection_set(true)?;
        } else if keyword.is_none() {
            return Err(self.unexpected(&["{"]));
        }

        Ok(ast::Operation {
            kind,
            keyword,
            name,
            variables,
            directives,
            selections,
            span: self.span_from(start),
        })
    }

    /// Parses `fragment Name on Type @dirs { ... }` starting at `fragment`.
    fn parse_fragment(&mut self) -> Result<ast::Fragment<'src>, GraphQLParseError> {
        let start = self.scanner.current_span().start_inclusive;
        self.advance()?;

        if self.lexeme() == Lexeme::Name
            && EXECUTION_KEYWORDS.upgrade(self.scanner.current_text()) == Lexeme::On
        {
            let mut error = self.scanner.error(GraphQLParseErrorKind::ReservedName {
                name: "on".to_string(),
            });
            error.add_note("a fragment cannot be named `on`");
            error.add_spec("https://spec.graphql.org/September2025/#FragmentName");
            return Err(error);
        }
        let name = self.expect_name("a fragment name")?;

        if self.lexeme() != Lexeme::Name
            || EXECUTION_KEYWORDS.upgrade(self.scanner.current_text()) != Lexeme::On
        {
            return Err(self.unexpected(&["on"]));
        }
        self.advance()?;
        let type_condition = self.expect_name("a type name")?;

        let directives = if self.lexeme() == Lexeme::Directive {
            self.parse_directives()?
        } else {
            vec![]
        };

        let selections = if self.lexeme() == Lexeme::CurlyOpen {
            self.parse_selection_set(true)?
        } else {
            vec![]
        };

        Ok(ast::Fragment {
            name,
            type_condition,
            directives,
            selections,
            span: self.span_from(start),
        })
    }

    // =========================================================================
    // Variables
    // =========================================================================

    /// Parses `( $a: T ... )`. Empty parentheses are accepted.
    fn parse_variable_definitions(
        &mut self,
    ) -> Result<Vec<ast::VariableDefinition<'src>>, GraphQLParseError> {
        let open_span = self.scanner.current_span();
        self.advance()?;

        let mut variables = vec![];
        while self.lexeme() != Lexeme::ParenClose {
            if self.lexeme() == Lexeme::Eof {
                return Err(self.unclosed("(", open_span));
            }
            variables.push(self.parse_variable_definition()?);
        }
        self.advance()?;
        Ok(variables)
    }

    fn parse_variable_definition(
        &mut self,
    ) -> Result<ast::VariableDefinition<'src>, GraphQLParseError> {
        let start = self.scanner.current_span().start_inclusive;
        if self.lexeme() != Lexeme::Variable {
            return Err(self.unexpected(&["$", ")"]));
        }
        let name = self.scan_sigil_name("a variable name")?;
        self.advance()?;

        if self.lexeme() != Lexeme::Colon {
            return Err(self.unexpected(&[":"]));
        }
        self.advance()?;

        if !matches!(self.lexeme(), Lexeme::SquareBracketOpen | Lexeme::Name) {
            return Err(self.unexpected(&["a type"]));
        }
        let var_type = self.parse_type()?;

        let mut default_value = None;
        if self.lexeme() == Lexeme::Equals {
            default_value = Some(GraphQLValueReader::new(&mut self.scanner).read_const_value()?);
            self.advance()?;
        }

        let directives = if self.lexeme() == Lexeme::Directive {
            self.parse_directives()?
        } else {
            vec![]
        };

        Ok(ast::VariableDefinition {
            name,
            var_type,
            default_value,
            directives,
            span: self.span_from(start),
        })
    }

    // =========================================================================
    // Types
    // =========================================================================

    /// Parses a type annotation starting at a `[` or a name.
    ///
    /// Leading `[`s (ignorable input allowed between them) count list
    /// dimensions. After the name, the run of `]`, `!` and ignorable input is
    /// scanned character by character: each `!` sets the nullability bit for
    /// the number of lists still open, and each `]` closes one list.
    fn parse_type(&mut self) -> Result<ast::TypeAnnotation<'src>, GraphQLParseError> {
        let start_span = self.scanner.current_span();
        let mut list_dimensions: u32 = 0;

        if self.lexeme() == Lexeme::SquareBracketOpen {
            list_dimensions = 1;
            while let Some(byte) = self.scanner.peek_byte() {
                if byte == b'[' {
                    list_dimensions += 1;
                } else if !is_ignorable(byte) {
                    break;
                }
                self.scanner.consume_byte();
            }
            if list_dimensions as usize >= Self::MAX_RECURSION_DEPTH {
                return Err(GraphQLParseError::new(
                    "maximum nesting depth exceeded",
                    "[",
                    start_span,
                    GraphQLParseErrorKind::InvalidSyntax,
                ));
            }
            self.advance()?;
        }

        if self.lexeme() != Lexeme::Name {
            return Err(self.unexpected(&["a type name"]));
        }
        let name = self.scanner.current_token();

        let mut end = self.scanner.current_span().end_exclusive;
        let mut open_lists = list_dimensions;
        let mut nullability: u64 = 0;
        while let Some(byte) = self.scanner.peek_byte() {
            match byte {
                b'!' => nullability |= 1 << open_lists,
                b']' if open_lists == 0 => {
                    self.scanner.mark_unknown_here();
                    return Err(self.scanner.error(GraphQLParseErrorKind::UnexpectedToken {
                        expected: vec!["!".to_string()],
                        found: "]".to_string(),
                    }));
                },
                b']' => open_lists -= 1,
                _ if is_ignorable(byte) => {
                    self.scanner.consume_byte();
                    continue;
                },
                _ => break,
            }
            self.scanner.consume_byte();
            end = self.scanner.cursor_position();
        }

        if open_lists > 0 {
            self.scanner.mark_unknown_here();
            let mut error = self.scanner.error(GraphQLParseErrorKind::UnclosedDelimiter {
                delimiter: "[".to_string(),
            });
            error.add_note_with_span("list type opened here", start_span);
            return Err(error);
        }

        self.advance_after(end)?;
        Ok(ast::TypeAnnotation {
            name,
            list_dimensions,
            nullability,
            span: GraphQLSourceSpan::new(start_span.start_inclusive, end),
        })
    }

    fn parse_standalone_type(&mut self) -> Result<ast::TypeAnnotation<'src>, GraphQLParseError> {
        self.advance()?;
        if !matches!(self.lexeme(), Lexeme::SquareBracketOpen | Lexeme::Name) {
            return Err(self.unexpected(&["a type"]));
        }
        let type_annotation = self.parse_type()?;
        self.expect_end_of_input()?;
        Ok(type_annotation)
    }

    fn parse_standalone_value(&mut self) -> Result<ast::Value<'src>, GraphQLParseError> {
        let value = GraphQLValueReader::new(&mut self.scanner).read_const_value()?;
        self.advance()?;
        self.expect_end_of_input()?;
        Ok(value)
    }

    // =========================================================================
    // Directives and arguments
    // =========================================================================

    /// Parses one or more consecutive `@name(args)` annotations.
    fn parse_directives(&mut self) -> Result<Vec<ast::Directive<'src>>, GraphQLParseError> {
        let mut directives = vec![];
        while self.lexeme() == Lexeme::Directive {
            let start = self.scanner.current_span().start_inclusive;
            let name = self.scan_sigil_name("a directive name")?;
            self.advance()?;

            let arguments = if self.lexeme() == Lexeme::ParenOpen {
                self.parse_arguments()?
            } else {
                vec![]
            };

            directives.push(ast::Directive {
                name,
                arguments,
                span: self.span_from(start),
            });
        }
        Ok(directives)
    }

    /// Parses `( name: value ... )`. Empty parentheses are accepted.
    fn parse_arguments(&mut self) -> Result<Vec<ast::Argument<'src>>, GraphQLParseError> {
        let open_span = self.scanner.current_span();
        self.advance()?;

        let mut arguments = vec![];
        while self.lexeme() != Lexeme::ParenClose {
            if self.lexeme() == Lexeme::Eof {
                return Err(self.unclosed("(", open_span));
            }
            arguments.push(self.parse_argument()?);
        }
        self.advance()?;
        Ok(arguments)
    }

    fn parse_argument(&mut self) -> Result<ast::Argument<'src>, GraphQLParseError> {
        let start = self.scanner.current_span().start_inclusive;
        let name = self.expect_name("an argument name")?;
        if self.lexeme() != Lexeme::Colon {
            return Err(self.unexpected(&[":"]));
        }

        let value = match GraphQLValueReader::new(&mut self.scanner).read_value(true)? {
            ValueOrVariable::Value(value) => ast::ArgumentValue::Value(value),
            ValueOrVariable::Variable => {
                let name = self.scan_sigil_name("a variable name")?;
                ast::ArgumentValue::Variable(name.with_type(GraphQLTokenType::Variable))
            },
        };
        self.advance()?;

        Ok(ast::Argument {
            name,
            value,
            span: self.span_from(start),
        })
    }

    // =========================================================================
    // Selections
    // =========================================================================

    /// Parses `{ ... }` starting at the `{`. An empty set fails unless
    /// `allow_empty`.
    fn parse_selection_set(
        &mut self,
        allow_empty: bool,
    ) -> Result<Vec<ast::Selection<'src>>, GraphQLParseError> {
        let open_span = self.scanner.current_span();
        self.enter_selection_set()?;
        self.advance()?;

        let mut selections = vec![];
        loop {
            match self.lexeme() {
                Lexeme::CurlyClose => break,
                Lexeme::Eof => return Err(self.unclosed("{", open_span)),
                Lexeme::Period => selections.push(ast::Selection::Spread(self.parse_spread()?)),
                _ => selections.push(ast::Selection::Field(self.parse_field()?)),
            }
        }

        if selections.is_empty() && !allow_empty {
            let mut error = self.scanner.error(GraphQLParseErrorKind::InvalidEmptyConstruct {
                construct: "selection set".to_string(),
            });
            error.add_note_with_span("selection set opened here", open_span);
            error.add_help("remove the braces or select at least one field");
            return Err(error);
        }

        self.advance()?;
        self.exit_selection_set();
        Ok(selections)
    }

    /// Parses `alias: name(args) @dirs { ... }`.
    fn parse_field(&mut self) -> Result<ast::Field<'src>, GraphQLParseError> {
        let start = self.scanner.current_span().start_inclusive;
        let first_name = self.expect_name("a field name")?;

        let (alias, name) = if self.lexeme() == Lexeme::Colon {
            self.advance()?;
            (Some(first_name), self.expect_name("a field name")?)
        } else {
            (None, first_name)
        };

        let arguments = if self.lexeme() == Lexeme::ParenOpen {
            self.parse_arguments()?
        } else {
            vec![]
        };
        let directives = if self.lexeme() == Lexeme::Directive {
            self.parse_directives()?
        } else {
            vec![]
        };
        let selections = if self.lexeme() == Lexeme::CurlyOpen {
            self.parse_selection_set(false)?
        } else {
            vec![]
        };

        Ok(ast::Field {
            alias,
            name,
            arguments,
            directives,
            selections,
            span: self.span_from(start),
        })
    }

    /// Parses a `...` spread starting at its first `.`.
    ///
    /// After the dots, a name of `on` introduces an inline spread with a type
    /// condition, any other name references a fragment, and no name at all
    /// is an inline spread without a type condition. Inline spreads require
    /// a non-empty selection set.
    fn parse_spread(&mut self) -> Result<ast::Spread<'src>, GraphQLParseError> {
        let start = self.scanner.current_span().start_inclusive;
        if !self.scanner.scan_spread_tail() {
            return Err(self.unexpected(&["..."]));
        }
        self.advance()?;

        let mut type_condition = None;
        if self.lexeme() == Lexeme::Name {
            if EXECUTION_KEYWORDS.upgrade(self.scanner.current_text()) == Lexeme::On {
                self.advance()?;
                type_condition = Some(self.expect_name("a type name")?);
            } else {
                let name = self.scanner.current_token();
                self.advance()?;
                let directives = if self.lexeme() == Lexeme::Directive {
                    self.parse_directives()?
                } else {
                    vec![]
                };
                return Ok(ast::Spread::Named(ast::FragmentSpread {
                    name,
                    directives,
                    span: self.span_from(start),
                }));
            }
        }

        let directives = if self.lexeme() == Lexeme::Directive {
            self.parse_directives()?
        } else {
            vec![]
        };
        if self.lexeme() != Lexeme::CurlyOpen {
            return Err(self.unexpected(&["{"]));
        }
        let selections = self.parse_selection_set(false)?;

        Ok(ast::Spread::Inline(ast::InlineSpread {
            type_condition,
            directives,
            selections,
            span: self.span_from(start),
        }))
    }

    fn unclosed(&self, delimiter: &str, open_span: GraphQLSourceSpan) -> GraphQLParseError {
        let mut error = self.scanner.error(GraphQLParseErrorKind::UnclosedDelimiter {
            delimiter: delimiter.to_string(),
        });
        error.add_note_with_span(format!("`{delimiter}` opened here"), open_span);
        error
    }
}
