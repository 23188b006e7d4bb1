use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::Fragment;
use crate::ast::Operation;
use inherent::inherent;

/// A parsed execution document: its operations and fragments, each in
/// source order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ExecutionDocument<'src> {
    pub operations: Vec<Operation<'src>>,
    pub fragments: Vec<Fragment<'src>>,
    pub span: GraphQLSourceSpan,
}

impl<'src> ExecutionDocument<'src> {
    /// Finds a fragment definition by name.
    pub fn fragment(&self, name: &str) -> Option<&Fragment<'src>> {
        self.fragments.iter().find(|f| f.name.text() == name)
    }

    /// Finds a named operation.
    pub fn operation(&self, name: &str) -> Option<&Operation<'src>> {
        self.operations
            .iter()
            .find(|op| op.name.as_ref().is_some_and(|n| n.text() == name))
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty() && self.fragments.is_empty()
    }
}

#[inherent]
impl AstNode for ExecutionDocument<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }

    pub fn append_source(&self, sink: &mut String, source: &str);
    pub fn to_source(&self, source: &str) -> String;
}
