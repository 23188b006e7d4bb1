/// How a [`GraphQLErrorNote`](crate::GraphQLErrorNote) is labelled when
/// rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQLErrorNoteKind {
    /// `= note: ...`
    General,

    /// `= help: ...`, an actionable suggestion.
    Help,

    /// `= spec: ...`, a link into the GraphQL specification.
    Spec,
}

impl GraphQLErrorNoteKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "note",
            Self::Help => "help",
            Self::Spec => "spec",
        }
    }
}
