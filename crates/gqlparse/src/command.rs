use crate::Cli;
use crate::CommandResult;

/// A subcommand that runs to completion and reports what to print and how
/// to exit.
pub(crate) trait RunnableCommand: std::fmt::Debug {
    async fn run(self, cli: Cli) -> CommandResult;
}
