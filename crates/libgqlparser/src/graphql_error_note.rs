use crate::GraphQLErrorNoteKind;
use crate::GraphQLSourceSpan;
use crate::SmallVec;

/// Extra context attached to a [`GraphQLParseError`](crate::GraphQLParseError),
/// such as the location of the `{` a malformed selection set was opened with.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphQLErrorNote {
    pub kind: GraphQLErrorNoteKind,
    pub message: String,

    /// Rendered as a second snippet under the note when source is available.
    pub span: Option<GraphQLSourceSpan>,
}

impl GraphQLErrorNote {
    pub fn new(kind: GraphQLErrorNoteKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            span: None,
        }
    }

    /// Points this note at a related location.
    pub fn at(mut self, span: GraphQLSourceSpan) -> Self {
        self.span = Some(span);
        self
    }
}

/// Errors carry at most a couple of notes, so they live inline.
pub type GraphQLErrorNotes = SmallVec<[GraphQLErrorNote; 2]>;
