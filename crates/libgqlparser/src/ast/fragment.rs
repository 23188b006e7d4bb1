use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Selection;
use crate::token::GraphQLToken;
use inherent::inherent;

/// A fragment definition: `fragment Name on Type @dirs { ... }`.
///
/// The selection set may be absent or empty.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Fragment<'src> {
    pub name: GraphQLToken<'src>,
    pub type_condition: GraphQLToken<'src>,
    pub directives: Vec<Directive<'src>>,
    pub selections: Vec<Selection<'src>>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for Fragment<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }

    pub fn append_source(&self, sink: &mut String, source: &str);
    pub fn to_source(&self, source: &str) -> String;
}
