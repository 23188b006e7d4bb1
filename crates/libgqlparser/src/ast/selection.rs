use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::Spread;
use inherent::inherent;

/// One entry of a selection set.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum Selection<'src> {
    Field(Field<'src>),
    Spread(Spread<'src>),
}

impl<'src> Selection<'src> {
    pub fn as_field(&self) -> Option<&Field<'src>> {
        match self {
            Self::Field(field) => Some(field),
            Self::Spread(_) => None,
        }
    }

    pub fn as_spread(&self) -> Option<&Spread<'src>> {
        match self {
            Self::Field(_) => None,
            Self::Spread(spread) => Some(spread),
        }
    }
}

#[inherent]
impl AstNode for Selection<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        match self {
            Self::Field(field) => field.span,
            Self::Spread(spread) => spread.span(),
        }
    }

    pub fn append_source(&self, sink: &mut String, source: &str);
    pub fn to_source(&self, source: &str) -> String;
}
