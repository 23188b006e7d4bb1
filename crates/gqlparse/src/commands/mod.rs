mod parse;
mod tokens;
mod type_cmd;

use crate::Cli;
use crate::CommandResult;
use parse::ParseCmd;
use tokens::TokensCmd;
use type_cmd::TypeCmd;

#[derive(Debug, clap::Subcommand)]
pub(crate) enum CommandEnum {
    /// Parse GraphQL files as execution documents and summarize them.
    Parse(Box<ParseCmd>),

    /// Print the raw lexeme stream of a GraphQL file.
    Tokens(TokensCmd),

    /// Parse a single type annotation, such as `[[Int!]]!`.
    Type(TypeCmd),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Parse(cmd) => cmd.run(cli).await,
            Self::Tokens(cmd) => cmd.run(cli).await,
            Self::Type(cmd) => cmd.run(cli).await,
        }
    }
}
