use crate::GraphQLErrorNote;
use crate::GraphQLErrorNoteKind;
use crate::GraphQLErrorNotes;
use crate::GraphQLParseErrorKind;
use crate::GraphQLSourceSpan;
use std::path::Path;
use std::path::PathBuf;

/// The error produced when a document fails to parse.
///
/// Parsing stops at the first structural violation, so a failed parse yields
/// exactly one of these. It records the text that could not be parsed (the
/// offending token, the single offending character, or `EOF`) together with
/// the line and column where that text begins.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{}", self.format_oneline())]
pub struct GraphQLParseError {
    /// Human-readable primary error message, e.g. `unexpected "}"`.
    message: String,

    /// The offending text: a token, a single character or `EOF`.
    found: String,

    /// Where the offending text was found.
    span: GraphQLSourceSpan,

    kind: GraphQLParseErrorKind,
    notes: GraphQLErrorNotes,

    /// The file the document was read from, when known.
    file_path: Option<PathBuf>,
}

impl GraphQLParseError {
    pub fn new(
        message: impl Into<String>,
        found: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        Self {
            message: message.into(),
            found: found.into(),
            span,
            kind,
            notes: GraphQLErrorNotes::new(),
            file_path: None,
        }
    }

    /// Creates an error whose message reports `found` as unexpected.
    pub fn unexpected(
        found: impl Into<String>,
        span: GraphQLSourceSpan,
        kind: GraphQLParseErrorKind,
    ) -> Self {
        let found = found.into();
        Self::new(format!("unexpected \"{found}\""), found, span, kind)
    }

    /// Returns this error attributed to the file at `path`.
    pub fn with_file_path(mut self, path: impl AsRef<Path>) -> Self {
        self.file_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending text: the failing token, the single offending character,
    /// or `EOF` at the end of input.
    pub fn found(&self) -> &str {
        &self.found
    }

    pub fn span(&self) -> &GraphQLSourceSpan {
        &self.span
    }

    /// The 1-based line where the offending text begins.
    pub fn line(&self) -> usize {
        self.span.begin_line()
    }

    /// The 1-based column where the offending text begins.
    pub fn column(&self) -> usize {
        self.span.begin_column()
    }

    pub fn kind(&self) -> &GraphQLParseErrorKind {
        &self.kind
    }

    pub fn notes(&self) -> &GraphQLErrorNotes {
        &self.notes
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Adds a general note without a span.
    pub fn add_note(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::new(GraphQLErrorNoteKind::General, message));
    }

    /// Adds a general note pointing at a related location.
    pub fn add_note_with_span(&mut self, message: impl Into<String>, span: GraphQLSourceSpan) {
        self.notes
            .push(GraphQLErrorNote::new(GraphQLErrorNoteKind::General, message).at(span));
    }

    pub fn add_help(&mut self, message: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::new(GraphQLErrorNoteKind::Help, message));
    }

    /// Adds a spec reference note.
    pub fn add_spec(&mut self, url: impl Into<String>) {
        self.notes.push(GraphQLErrorNote::new(GraphQLErrorNoteKind::Spec, url));
    }

    /// Formats this error as a diagnostic string for CLI output.
    ///
    /// Produces output like:
    /// ```text
    /// error: unexpected "}"
    ///   --> query.graphql:1:13
    ///    |
    ///  1 | query { a { } }
    ///    |             ^
    ///    = note: a selection set cannot be empty
    /// ```
    ///
    /// Snippets are omitted when `source` is `None`.
    pub fn format_detailed(&self, source: Option<&str>) -> String {
        let mut output = String::new();

        output.push_str("error: ");
        output.push_str(&self.message);
        output.push('\n');

        let file_name = self.display_file_name();
        output.push_str(&format!(
            "  --> {file_name}:{}:{}\n",
            self.line(),
            self.column(),
        ));

        if let Some(src) = source
            && let Some(snippet) = self.format_source_snippet(src)
        {
            output.push_str(&snippet);
        }

        for note in &self.notes {
            output.push_str(&format!("   = {}: {}\n", note.kind.label(), note.message));

            if let (Some(note_span), Some(src)) = (&note.span, source)
                && let Some(snippet) = Self::format_note_snippet(src, note_span)
            {
                output.push_str(&snippet);
            }
        }

        output
    }

    /// Formats this error as a single-line summary:
    ///
    /// ```text
    /// query.graphql:1:13: error: unexpected "}"
    /// ```
    pub fn format_oneline(&self) -> String {
        format!(
            "{}:{}:{}: error: {}",
            self.display_file_name(),
            self.line(),
            self.column(),
            self.message,
        )
    }

    fn display_file_name(&self) -> String {
        self.file_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<input>".to_string())
    }

    fn format_source_snippet(&self, source: &str) -> Option<String> {
        let line_num = self.line();
        let line_content = source_line(source, line_num)?;
        let line_num_width = line_num.to_string().len().max(2);

        let mut output = String::new();
        output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
        output.push_str(&format!("{line_num:>line_num_width$} | {line_content}\n"));

        let padding = self.column().saturating_sub(1);
        let underline_len = if self.span.is_empty()
            || self.span.end_line() != self.span.begin_line()
        {
            1
        } else {
            self.span.end_column() + 1 - self.span.begin_column()
        };
        output.push_str(&format!(
            "{:>width$} | {:>padding$}{}\n",
            "",
            "",
            "^".repeat(underline_len),
            width = line_num_width,
            padding = padding,
        ));

        Some(output)
    }

    fn format_note_snippet(source: &str, span: &GraphQLSourceSpan) -> Option<String> {
        let line_num = span.begin_line();
        let line_content = source_line(source, line_num)?;
        let line_num_width = line_num.to_string().len().max(2);

        let mut output = String::new();
        output.push_str(&format!(
            "     {line_num:>line_num_width$} | {line_content}\n"
        ));
        output.push_str(&format!(
            "     {:>width$} | {:>padding$}-\n",
            "",
            "",
            width = line_num_width,
            padding = span.begin_column().saturating_sub(1),
        ));

        Some(output)
    }
}

/// The text of 1-based line `line_num`, split on the same line terminators
/// the scanner counts (`\n`, `\r` and `\r\n`).
fn source_line(source: &str, line_num: usize) -> Option<&str> {
    let mut rest = source;
    for _ in 0..line_num.checked_sub(1)? {
        let line_break = rest.find(['\r', '\n'])?;
        let break_len = if rest[line_break..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[line_break + break_len..];
    }
    let line_end = rest.find(['\r', '\n']).unwrap_or(rest.len());
    Some(&rest[..line_end])
}
