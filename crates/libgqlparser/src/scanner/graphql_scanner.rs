use crate::GraphQLParseError;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use crate::SourcePosition;
use crate::token::GraphQLToken;
use crate::token::Lexeme;

const BYTE_ORDER_MARK: &[u8] = "\u{FEFF}".as_bytes();

/// A cursor over GraphQL source text that classifies one lexeme at a time.
///
/// The scanner knows nothing about the grammar. [`advance`](Self::advance)
/// skips ignorable input (whitespace, commas, line terminators and a byte
/// order mark), then classifies and consumes the next lexeme and records
/// its span. The parser drives it through `&mut` and reaches for the
/// byte-level helpers where the grammar is sensitive to exact characters
/// (spread dots, sigil names, type suffixes and object literals).
///
/// Iterating a scanner yields every lexeme as a [`GraphQLToken`], comments
/// included, and stops after the end-of-input token or the first
/// [`Lexeme::Unknown`].
///
/// # Positions
///
/// Lines and columns are 1-based; columns count bytes from the start of the
/// line. `\n`, `\r` and `\r\n` each end exactly one line.
pub struct GraphQLScanner<'src> {
    source: &'src str,
    curr_byte_offset: usize,
    curr_line: usize,

    /// Byte offset where the current line starts. Columns are measured from
    /// here.
    line_start_offset: usize,

    /// Whether the last consumed byte was `\r`, so that a following `\n`
    /// completes the same line break.
    last_byte_was_cr: bool,

    lexeme: Lexeme,
    lexeme_start: SourcePosition,
    lexeme_end: SourcePosition,

    /// Where the text of the current lexeme begins. This differs from
    /// `lexeme_start` only for sigil names, whose text excludes the `$` or
    /// `@`.
    text_start_offset: usize,

    finished: bool,
}

impl<'src> GraphQLScanner<'src> {
    pub fn new(source: &'src str) -> Self {
        let start = SourcePosition::start_of_document();
        Self {
            source,
            curr_byte_offset: 0,
            curr_line: 1,
            line_start_offset: 0,
            last_byte_was_cr: false,
            lexeme: Lexeme::Unknown,
            lexeme_start: start,
            lexeme_end: start,
            text_start_offset: 0,
            finished: false,
        }
    }

    // =========================================================================
    // Current lexeme
    // =========================================================================

    pub fn source(&self) -> &'src str {
        self.source
    }

    /// The classification of the most recently scanned lexeme.
    pub fn lexeme(&self) -> Lexeme {
        self.lexeme
    }

    /// The source text of the most recently scanned lexeme.
    pub fn current_text(&self) -> &'src str {
        self.slice(self.text_start_offset, self.lexeme_end.byte_offset())
    }

    pub fn current_span(&self) -> GraphQLSourceSpan {
        GraphQLSourceSpan::new(self.lexeme_start, self.lexeme_end)
    }

    pub fn current_token(&self) -> GraphQLToken<'src> {
        GraphQLToken::new(self.lexeme, self.current_text(), self.current_span())
    }

    /// The position of the cursor: just past the most recently consumed
    /// byte.
    pub fn cursor_position(&self) -> SourcePosition {
        SourcePosition::new(
            self.curr_line,
            self.curr_byte_offset - self.line_start_offset + 1,
            self.curr_byte_offset,
        )
    }

    /// The text a failure at the current lexeme reports: the lexeme's text if
    /// any was consumed, otherwise the single character under the cursor, or
    /// `EOF` at the end of input.
    pub fn failure_text(&self) -> &'src str {
        if self.curr_byte_offset > self.text_start_offset {
            return self.slice(self.text_start_offset, self.curr_byte_offset);
        }
        match self.char_at(self.text_start_offset) {
            Some(ch) => self.slice(
                self.text_start_offset,
                self.text_start_offset + ch.len_utf8(),
            ),
            None => "EOF",
        }
    }

    /// The span covering [`failure_text`](Self::failure_text).
    pub fn failure_span(&self) -> GraphQLSourceSpan {
        if self.curr_byte_offset > self.text_start_offset {
            return GraphQLSourceSpan::new(self.lexeme_start, self.cursor_position());
        }
        let start = self.lexeme_start;
        match self.char_at(self.text_start_offset) {
            Some(ch) => GraphQLSourceSpan::new(
                start,
                SourcePosition::new(
                    start.line(),
                    start.column() + ch.len_utf8(),
                    start.byte_offset() + ch.len_utf8(),
                ),
            ),
            None => GraphQLSourceSpan::empty_at(start),
        }
    }

    /// Builds an error reporting the current lexeme as unexpected.
    pub fn error(&self, kind: GraphQLParseErrorKind) -> GraphQLParseError {
        GraphQLParseError::unexpected(
            self.failure_text(),
            self.failure_span(),
            kind,
        )
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn slice(&self, start: usize, end: usize) -> &'src str {
        self.source.get(start..end).unwrap_or_default()
    }

    fn char_at(&self, byte_offset: usize) -> Option<char> {
        self.source.get(byte_offset..)?.chars().next()
    }

    fn remaining_bytes(&self) -> &'src [u8] {
        self.source.as_bytes().get(self.curr_byte_offset..).unwrap_or_default()
    }

    pub(crate) fn peek_byte(&self) -> Option<u8> {
        self.peek_byte_nth(0)
    }

    pub(crate) fn peek_byte_nth(&self, n: usize) -> Option<u8> {
        self.source.as_bytes().get(self.curr_byte_offset + n).copied()
    }

    /// Consumes one byte, tracking line breaks.
    pub(crate) fn consume_byte(&mut self) -> Option<u8> {
        let byte = self.peek_byte()?;
        self.curr_byte_offset += 1;
        match byte {
            b'\n' => {
                // The `\n` of a `\r\n` pair was already counted at the `\r`.
                if !self.last_byte_was_cr {
                    self.curr_line += 1;
                }
                self.line_start_offset = self.curr_byte_offset;
                self.last_byte_was_cr = false;
            },
            b'\r' => {
                self.curr_line += 1;
                self.line_start_offset = self.curr_byte_offset;
                self.last_byte_was_cr = true;
            },
            _ => self.last_byte_was_cr = false,
        }
        Some(byte)
    }

    fn consume_while(&mut self, pred: impl Fn(u8) -> bool) {
        while self.peek_byte().is_some_and(&pred) {
            self.consume_byte();
        }
    }

    /// Skips whitespace, commas, line terminators and byte order marks.
    pub(crate) fn skip_ignorables(&mut self) {
        loop {
            match self.peek_byte() {
                Some(byte) if is_ignorable(byte) => {
                    self.consume_byte();
                },
                Some(0xEF) if self.remaining_bytes().starts_with(BYTE_ORDER_MARK) => {
                    // A mark at the start of a line does not shift columns.
                    let at_line_start = self.curr_byte_offset == self.line_start_offset;
                    self.curr_byte_offset += BYTE_ORDER_MARK.len();
                    if at_line_start {
                        self.line_start_offset = self.curr_byte_offset;
                    }
                    self.last_byte_was_cr = false;
                },
                _ => break,
            }
        }
    }

    fn begin_lexeme(&mut self) {
        let pos = self.cursor_position();
        self.lexeme_start = pos;
        self.lexeme_end = pos;
        self.text_start_offset = pos.byte_offset();
    }

    fn finish_lexeme(&mut self, lexeme: Lexeme) -> Lexeme {
        self.lexeme = lexeme;
        self.lexeme_end = self.cursor_position();
        lexeme
    }

    /// Marks a failure at the cursor, so that the failure text becomes the
    /// character under the cursor (or `EOF`).
    pub(crate) fn mark_unknown_here(&mut self) -> Lexeme {
        self.begin_lexeme();
        self.finish_lexeme(Lexeme::Unknown)
    }

    // =========================================================================
    // Lexeme classification
    // =========================================================================

    /// Skips ignorable input and scans the next lexeme, comments included.
    pub fn advance(&mut self) -> Lexeme {
        self.skip_ignorables();
        self.begin_lexeme();

        let lexeme = match self.peek_byte() {
            None => Lexeme::Eof,
            Some(b'#') => self.scan_comment(),
            Some(b'$') => self.scan_single(Lexeme::Variable),
            Some(b'@') => self.scan_single(Lexeme::Directive),
            Some(b'{') => self.scan_single(Lexeme::CurlyOpen),
            Some(b'}') => self.scan_single(Lexeme::CurlyClose),
            Some(b'(') => self.scan_single(Lexeme::ParenOpen),
            Some(b')') => self.scan_single(Lexeme::ParenClose),
            Some(b'[') => self.scan_single(Lexeme::SquareBracketOpen),
            Some(b']') => self.scan_single(Lexeme::SquareBracketClose),
            Some(b':') => self.scan_single(Lexeme::Colon),
            Some(b'=') => self.scan_single(Lexeme::Equals),
            Some(b'.') => self.scan_single(Lexeme::Period),
            Some(b'"') => self.scan_string(true),
            Some(b'-' | b'0'..=b'9') => self.scan_number(),
            Some(byte) if is_name_start(byte) => self.scan_name(),
            Some(_) => Lexeme::Unknown,
        };

        self.finish_lexeme(lexeme)
    }

    /// Like [`advance`](Self::advance), but silently skips comments.
    pub fn advance_no_comments(&mut self) -> Lexeme {
        loop {
            let lexeme = self.advance();
            if lexeme != Lexeme::Comment {
                return lexeme;
            }
        }
    }

    fn scan_single(&mut self, lexeme: Lexeme) -> Lexeme {
        self.consume_byte();
        lexeme
    }

    /// A comment runs from `#` up to (not including) the end of the line.
    fn scan_comment(&mut self) -> Lexeme {
        self.consume_byte();
        let rest = self.remaining_bytes();
        let len = memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
        // No line break inside, so columns stay anchored to this line.
        self.curr_byte_offset += len;
        Lexeme::Comment
    }

    fn scan_name(&mut self) -> Lexeme {
        self.consume_byte();
        self.consume_while(is_name_continue);
        Lexeme::Name
    }

    /// Scans `-?(0|[1-9][0-9]*)` followed by an optional fraction and/or
    /// exponent. A `0` followed by another digit is rejected.
    fn scan_number(&mut self) -> Lexeme {
        if self.peek_byte() == Some(b'-') {
            self.consume_byte();
        }

        match self.peek_byte() {
            Some(b'0') => {
                self.consume_byte();
                if self.peek_byte().is_some_and(|b| b.is_ascii_digit()) {
                    return Lexeme::Unknown;
                }
            },
            Some(b) if b.is_ascii_digit() => self.consume_while(|b| b.is_ascii_digit()),
            _ => return Lexeme::Unknown,
        }

        match self.peek_byte() {
            Some(b'.' | b'e' | b'E') => self.scan_float_suffix(),
            _ => Lexeme::Int,
        }
    }

    /// Scans `.digits` or `[eE][+-]?digits`. A fraction may itself be
    /// followed by an exponent.
    fn scan_float_suffix(&mut self) -> Lexeme {
        let at_fraction = self.peek_byte() == Some(b'.');
        self.consume_byte();

        if !at_fraction && matches!(self.peek_byte(), Some(b'+' | b'-')) {
            self.consume_byte();
        }

        if !self.peek_byte().is_some_and(|b| b.is_ascii_digit()) {
            return Lexeme::Unknown;
        }
        self.consume_while(|b| b.is_ascii_digit());

        if at_fraction && matches!(self.peek_byte(), Some(b'e' | b'E')) {
            return self.scan_float_suffix();
        }
        Lexeme::Float
    }

    /// Scans a string starting at a run of `"`.
    ///
    /// The length of the opening run decides the shape:
    /// - 1: a string, closed by the next unescaped `"`
    /// - 2 or 6: the empty string
    /// - 3: a block string closed by `"""` (only when `allow_block_string`)
    /// - anything else: [`Lexeme::Unknown`]
    ///
    /// A backslash always consumes the byte after it, so escaped quotes never
    /// close the string. Line breaks inside strings are tracked.
    pub(crate) fn scan_string(&mut self, allow_block_string: bool) -> Lexeme {
        let mut opening_quotes = 0;
        while self.peek_byte() == Some(b'"') {
            self.consume_byte();
            opening_quotes += 1;
        }

        match opening_quotes {
            2 | 6 => return Lexeme::String,
            1 => (),
            3 if allow_block_string => (),
            _ => return Lexeme::Unknown,
        }

        let mut closing_quotes = 0;
        while closing_quotes < opening_quotes {
            match self.consume_byte() {
                None => return Lexeme::Unknown,
                Some(b'"') => closing_quotes += 1,
                Some(b'\\') => {
                    closing_quotes = 0;
                    if self.consume_byte().is_none() {
                        return Lexeme::Unknown;
                    }
                },
                Some(_) => closing_quotes = 0,
            }
        }

        if opening_quotes == 3 {
            Lexeme::BlockString
        } else {
            Lexeme::String
        }
    }

    // =========================================================================
    // Grammar-directed scanning
    // =========================================================================

    /// Extends the current `{` lexeme to the end of its balanced `}` and
    /// classifies the whole block as [`Lexeme::Object`].
    ///
    /// Braces inside string literals do not count towards the balance. Block
    /// strings are not accepted inside an object literal. Reaching the end
    /// of input first yields [`Lexeme::Unknown`].
    pub(crate) fn scan_object_block(&mut self) -> Lexeme {
        let mut depth = 1usize;
        let lexeme = loop {
            match self.peek_byte() {
                None => break Lexeme::Unknown,
                Some(b'"') => {
                    if self.scan_string(false) == Lexeme::Unknown {
                        break Lexeme::Unknown;
                    }
                },
                Some(b'{') => {
                    self.consume_byte();
                    depth += 1;
                },
                Some(b'}') => {
                    self.consume_byte();
                    depth -= 1;
                    if depth == 0 {
                        break Lexeme::Object;
                    }
                },
                Some(_) => {
                    self.consume_byte();
                },
            }
        };
        self.finish_lexeme(lexeme)
    }

    /// Reads the name that must immediately follow a `$` or `@` sigil.
    ///
    /// On success the lexeme becomes a [`Lexeme::Name`] whose text excludes
    /// the sigil while its span still starts at the sigil. No ignorable input
    /// is allowed between the sigil and the name.
    pub(crate) fn scan_sigil_name(&mut self) -> Lexeme {
        if !self.peek_byte().is_some_and(is_name_start) {
            return self.mark_unknown_here();
        }
        self.text_start_offset = self.curr_byte_offset;
        let lexeme = self.scan_name();
        self.finish_lexeme(lexeme)
    }

    /// With the cursor just past a `.`, consumes the remaining two dots of a
    /// spread. Fails (consuming nothing) unless exactly three dots are
    /// present.
    pub(crate) fn scan_spread_tail(&mut self) -> bool {
        let is_spread = self.peek_byte_nth(0) == Some(b'.')
            && self.peek_byte_nth(1) == Some(b'.')
            && self.peek_byte_nth(2) != Some(b'.');
        if is_spread {
            self.consume_byte();
            self.consume_byte();
            self.lexeme_end = self.cursor_position();
        }
        is_spread
    }
}

// =============================================================================
// Raw scan path
// =============================================================================

impl<'src> Iterator for GraphQLScanner<'src> {
    type Item = GraphQLToken<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let token = match self.advance() {
            Lexeme::Eof => {
                self.finished = true;
                self.current_token()
            },
            Lexeme::Unknown => {
                self.finished = true;
                GraphQLToken::new(
                    Lexeme::Unknown,
                    self.failure_text(),
                    self.failure_span(),
                )
            },
            _ => self.current_token(),
        };
        Some(token)
    }
}

// =============================================================================
// Character classification
// =============================================================================

/// Space, comma, line feed, carriage return, tab, form feed and backspace.
pub(crate) fn is_ignorable(byte: u8) -> bool {
    matches!(byte, b' ' | b',' | b'\n' | b'\r' | b'\t' | 0x0C | 0x08)
}

fn is_name_start(byte: u8) -> bool {
    byte.is_ascii_alphabetic() || byte == b'_'
}

fn is_name_continue(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
