use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use libgqlparser::ast::TypeAnnotation;

#[derive(Debug, clap::Args)]
pub(crate) struct TypeCmd {
    #[arg(
        help="The type annotation to parse, such as `[[Int!]]!`.",
        name="TYPE",
    )]
    text: String,
}

/// Describes each nesting level of `ty`, outermost first.
fn describe_levels(ty: &TypeAnnotation<'_>) -> Vec<String> {
    (0..=ty.list_dimensions)
        .map(|level| {
            let what = if level < ty.list_dimensions {
                "list".to_string()
            } else {
                format!("`{}`", ty.name.text())
            };
            let nullability = if ty.is_non_null_at(level) {
                "non-null"
            } else {
                "nullable"
            };
            format!("  level {level}: {nullability} {what}")
        })
        .collect()
}

#[inherent::inherent]
impl RunnableCommand for TypeCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        match libgqlparser::parse_type(&self.text) {
            Ok(ty) => CommandResult::stdout(format_args!(
                "name: {}\nlist dimensions: {}\nnullability: {:#b}\n{}",
                ty.name.text(),
                ty.list_dimensions,
                ty.nullability,
                describe_levels(&ty).join("\n"),
            )),
            Err(err) => CommandResult::stderr(format_args!(
                "{}{} Invalid type annotation.",
                err.format_detailed(Some(&self.text)),
                output_utils::RED_X,
            )),
        }
    }
}
