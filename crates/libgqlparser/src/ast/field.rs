use crate::GraphQLSourceSpan;
use crate::ast::Argument;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Selection;
use crate::token::GraphQLToken;
use inherent::inherent;

/// A field selection, optionally aliased, with arguments, directives and a
/// nested selection set.
///
/// `selections` is empty when the field has no `{ ... }` body. A body that
/// is opened but left empty is a parse error, so an empty `selections`
/// always means "no body".
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Field<'src> {
    pub alias: Option<GraphQLToken<'src>>,
    pub name: GraphQLToken<'src>,
    pub arguments: Vec<Argument<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selections: Vec<Selection<'src>>,
    pub span: GraphQLSourceSpan,
}

impl<'src> Field<'src> {
    /// The key this field's result is reported under: the alias if present,
    /// otherwise the field name.
    pub fn response_key(&self) -> &'src str {
        self.alias.as_ref().unwrap_or(&self.name).text()
    }
}

#[inherent]
impl AstNode for Field<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }

    pub fn append_source(&self, sink: &mut String, source: &str);
    pub fn to_source(&self, source: &str) -> String;
}
