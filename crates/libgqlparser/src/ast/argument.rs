use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::Value;
use crate::token::GraphQLToken;
use inherent::inherent;

/// A `name: value` argument of a field or directive.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Argument<'src> {
    pub name: GraphQLToken<'src>,
    pub value: ArgumentValue<'src>,
    pub span: GraphQLSourceSpan,
}

/// The payload of an [`Argument`]: exactly one of a literal or a variable
/// reference.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum ArgumentValue<'src> {
    Value(Value<'src>),

    /// The referenced variable's bare name (the `$` is excluded from the
    /// text but included in the span), tagged
    /// [`GraphQLTokenType::Variable`](crate::token::GraphQLTokenType::Variable).
    Variable(GraphQLToken<'src>),
}

#[inherent]
impl AstNode for Argument<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }

    pub fn append_source(&self, sink: &mut String, source: &str);
    pub fn to_source(&self, source: &str) -> String;
}
