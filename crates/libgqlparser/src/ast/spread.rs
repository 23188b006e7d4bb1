use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Selection;
use crate::token::GraphQLToken;
use inherent::inherent;

/// A `...` selection.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Spread<'src> {
    /// `...FragmentName @dirs`
    Named(FragmentSpread<'src>),

    /// `... on Type @dirs { ... }` or `... @dirs { ... }`
    Inline(InlineSpread<'src>),
}

/// A reference to a fragment defined elsewhere in the document.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FragmentSpread<'src> {
    pub name: GraphQLToken<'src>,
    pub directives: Vec<Directive<'src>>,
    pub span: GraphQLSourceSpan,
}

/// An inline fragment. Its selection set is never empty.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct InlineSpread<'src> {
    /// The type named after `on`, absent for `... @dirs { ... }`.
    pub type_condition: Option<GraphQLToken<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selections: Vec<Selection<'src>>,
    pub span: GraphQLSourceSpan,
}

impl<'src> Spread<'src> {
    pub fn directives(&self) -> &[Directive<'src>] {
        match self {
            Self::Named(spread) => &spread.directives,
            Self::Inline(spread) => &spread.directives,
        }
    }
}

#[inherent]
impl AstNode for Spread<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Self::Named(spread) => spread.span,
            Self::Inline(spread) => spread.span,
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);
    pub fn to_source(&self, source: &str) -> String;
}
