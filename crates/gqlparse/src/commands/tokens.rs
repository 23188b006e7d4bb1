use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use libgqlparser::GraphQLParseError;
use libgqlparser::GraphQLParseErrorKind;
use libgqlparser::scanner::GraphQLScanner;
use libgqlparser::token::Lexeme;
use std::fmt::Write;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct TokensCmd {
    #[arg(
        help="Leave comments out of the listing.",
        long,
    )]
    skip_comments: bool,

    #[arg(
        help="Path to the GraphQL file to scan.",
        name="FILE",
    )]
    file: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for TokensCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match std::fs::read_to_string(&self.file) {
            Ok(source) => source,
            Err(err) => return CommandResult::stderr(format_args!(
                "{} Failed to read {}: {err}",
                output_utils::RED_X,
                self.file.display(),
            )),
        };

        let mut listing = String::new();
        let mut num_tokens = 0;
        for token in GraphQLScanner::new(&source) {
            match token.lexeme() {
                Lexeme::Unknown => {
                    let err = GraphQLParseError::unexpected(
                        token.text(),
                        *token.span(),
                        GraphQLParseErrorKind::LexerError,
                    )
                    .with_file_path(&self.file);
                    return CommandResult::partial(
                        listing,
                        err.format_detailed(Some(&source)),
                    );
                },
                Lexeme::Comment if self.skip_comments => continue,
                lexeme => {
                    num_tokens += 1;
                    let _ = writeln!(
                        listing,
                        "{:>4}:{:<4} {:<18} {:?}",
                        token.begin_line(),
                        token.begin_column(),
                        format!("{lexeme:?}"),
                        token.text(),
                    );
                },
            }
        }

        log::debug!("Scanned {num_tokens} tokens from {:#?}.", self.file);
        CommandResult::stdout(format_args!("{}", listing.trim_end()))
    }
}
