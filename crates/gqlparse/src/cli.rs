use crate::commands;
use clap::CommandFactory;

/// Parse and inspect GraphQL execution documents.
#[derive(clap::Parser, Debug)]
#[command(name = "gqlparse", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        help="Enable verbose (debug-level) logging.",
        global=true,
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) async fn run_default(self) -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
