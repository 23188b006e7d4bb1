use crate::GraphQLSourceSpan;
use crate::ast::AstNode;
use crate::token::GraphQLToken;
use inherent::inherent;

/// A variable's type, such as `Int`, `[Int!]` or `[[ID]!]!`.
///
/// List wrapping is flattened into a dimension count. Non-null markers are
/// kept in `nullability`, a bitmask with one bit per nesting level: while the
/// trailing `]`/`!` run is scanned, each `!` sets the bit whose index is the
/// number of lists still open at that point, and each `]` closes one list.
/// So bit `list_dimensions` belongs to the named type itself and bit `0` to
/// the outermost list.
///
/// | Type       | `list_dimensions` | `nullability` |
/// |------------|-------------------|---------------|
/// | `Int`      | 0                 | `0b0`         |
/// | `Int!`     | 0                 | `0b1`         |
/// | `[Int]!`   | 1                 | `0b01`        |
/// | `[Int!]`   | 1                 | `0b10`        |
/// | `[Int!]!`  | 1                 | `0b11`        |
/// | `[[Int!]]` | 2                 | `0b100`       |
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TypeAnnotation<'src> {
    pub name: GraphQLToken<'src>,
    pub list_dimensions: u32,
    pub nullability: u64,
    pub span: GraphQLSourceSpan,
}

impl TypeAnnotation<'_> {
    pub fn is_list(&self) -> bool {
        self.list_dimensions > 0
    }

    /// Whether the type at nesting `level` is non-null, where level `0` is
    /// the outermost type and level `list_dimensions` is the named type.
    pub fn is_non_null_at(&self, level: u32) -> bool {
        level <= self.list_dimensions
            && 1u64.checked_shl(level).is_some_and(|bit| self.nullability & bit != 0)
    }

    /// Whether the outermost type is non-null (`Int!`, `[Int]!`).
    pub fn is_non_null(&self) -> bool {
        self.is_non_null_at(0)
    }
}

#[inherent]
impl AstNode for TypeAnnotation<'_> {
    pub fn span(&self) -> GraphQLSourceSpan {
        self.span
    }

    pub fn append_source(&self, sink: &mut String, source: &str);
    pub fn to_source(&self, source: &str) -> String;
}
