use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::token::GraphQLToken;
use inherent::inherent;

/// An operation variable: `$name: Type = default @dirs`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct VariableDefinition<'src> {
    /// The variable's name, without the `$`.
    pub name: GraphQLToken<'src>,
    pub var_type: TypeAnnotation<'src>,
    pub default_value: Option<Value<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for VariableDefinition<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }

    pub fn append_source(&self, sink: &mut String, source: &str);
    pub fn to_source(&self, source: &str) -> String;
}
