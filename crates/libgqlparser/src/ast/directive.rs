use crate::GraphQLSourceSpan;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::token::GraphQLToken;
use inherent::inherent;

/// A directive annotation: `@name(args)`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Directive<'src> {
    /// The directive's name, without the `@`.
    pub name: GraphQLToken<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for Directive<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }

    pub fn append_source(&self, sink: &mut String, source: &str);
    pub fn to_source(&self, source: &str) -> String;
}
