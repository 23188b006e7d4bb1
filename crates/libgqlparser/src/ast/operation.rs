use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::Directive;
use crate::ast::Selection;
use crate::ast::VariableDefinition;
use crate::token::GraphQLToken;
use crate::token::Lexeme;
use inherent::inherent;

/// The type of an operation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// Maps an operation keyword lexeme to its kind.
    pub fn from_lexeme(lexeme: Lexeme) -> Option<Self> {
        match lexeme {
            Lexeme::Query => Some(Self::Query),
            Lexeme::Mutation => Some(Self::Mutation),
            Lexeme::Subscription => Some(Self::Subscription),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query, mutation or subscription.
///
/// A shorthand `{ ... }` operation has no `keyword` and is always a
/// [`OperationKind::Query`]; only operations introduced by a keyword may
/// carry a name, variables and directives. An operation with a keyword may
/// omit its selection set entirely.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Operation<'src> {
    pub kind: OperationKind,

    /// The `query`/`mutation`/`subscription` keyword, absent for the
    /// shorthand form.
    pub keyword: Option<GraphQLToken<'src>>,

    pub name: Option<GraphQLToken<'src>>,
    pub variables: Vec<VariableDefinition<'src>>,
    pub directives: Vec<Directive<'src>>,
    pub selections: Vec<Selection<'src>>,
    pub span: GraphQLSourceSpan,
}

impl Operation<'_> {
    pub fn is_shorthand(&self) -> bool {
        self.keyword.is_none()
    }
}

#[inherent]
impl AstNode for Operation<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }

    pub fn append_source(&self, sink: &mut String, source: &str);
    pub fn to_source(&self, source: &str) -> String;
}
