use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenType;
use inherent::inherent;

/// A literal value: an argument payload, a variable default or a list
/// element.
///
/// `true`, `false` and `null` are produced as bare [`Value::Boolean`] and
/// [`Value::Null`] without a token, and so carry no location. Every other
/// literal is a [`GraphQLToken`] stamped with its [`GraphQLTokenType`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Value<'src> {
    Boolean(bool),
    Null,

    /// An int, float, string, block string or enum literal, or an object
    /// literal kept as its raw `{...}` text.
    Scalar(GraphQLToken<'src>),

    List(ListValue<'src>),
}

impl<'src> Value<'src> {
    /// The semantic type tag of this value. `null` has none.
    pub fn token_type(&self) -> Option<GraphQLTokenType> {
        match self {
            Self::Boolean(_) => Some(GraphQLTokenType::Boolean),
            Self::Null => None,
            Self::Scalar(token) => token.token_type(),
            Self::List(_) => Some(GraphQLTokenType::Array),
        }
    }

    pub fn as_token(&self) -> Option<&GraphQLToken<'src>> {
        match self {
            Self::Scalar(token) => Some(token),
            _ => None,
        }
    }

    /// The source range of this value, if it has one.
    pub fn span(&self) -> Option<GraphQLSourceSpan> {
        match self {
            Self::Boolean(_) | Self::Null => None,
            Self::Scalar(token) => Some(*token.span()),
            Self::List(list) => Some(list.span),
        }
    }
}

/// A `[...]` list literal. Its span runs from the opening `[` through the
/// closing `]`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ListValue<'src> {
    pub items: Vec<Value<'src>>,
    pub span: GraphQLSourceSpan,
}

#[inherent]
impl AstNode for ListValue<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }

    pub fn append_source(&self, sink: &mut String, source: &str);
    pub fn to_source(&self, source: &str) -> String;
}
