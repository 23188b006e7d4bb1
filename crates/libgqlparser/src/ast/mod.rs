//! The syntax tree produced by parsing an execution document.
//!
//! Nodes are built bottom-up and never mutated afterwards. Every node owns
//! its children and borrows its text from the source (`'src`).

mod argument;
mod ast_node;
mod directive;
mod document;
mod field;
mod fragment;
mod operation;
mod selection;
mod spread;
mod type_annotation;
mod value;
mod variable_definition;

pub use argument::Argument;
pub use argument::ArgumentValue;
pub use ast_node::AstNode;
pub use directive::Directive;
pub use document::ExecutionDocument;
pub use field::Field;
pub use fragment::Fragment;
pub use operation::Operation;
pub use operation::OperationKind;
pub use selection::Selection;
pub use spread::FragmentSpread;
pub use spread::InlineSpread;
pub use spread::Spread;
pub use type_annotation::TypeAnnotation;
pub use value::ListValue;
pub use value::Value;
pub use variable_definition::VariableDefinition;
