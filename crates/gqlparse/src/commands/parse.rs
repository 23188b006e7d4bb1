use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use crate::output_utils;
use anyhow::Context;
use libgqlparser::GraphQLParser;
use libgqlparser::ast;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ParseCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long,
        value_delimiter = ',',
    )]
    graphql_file_exts: Vec<String>,

    #[arg(
        help="Only report failures; skip the per-file summary lines.",
        long,
        short='q',
    )]
    quiet: bool,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be parsed.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

/// What a successfully parsed file contains.
#[derive(Debug, Default)]
struct DocumentSummary {
    operations: usize,
    fragments: usize,
    fields: usize,
}

impl DocumentSummary {
    fn of(doc: &ast::ExecutionDocument<'_>) -> Self {
        let operation_fields: usize = doc
            .operations
            .iter()
            .map(|op| count_fields(&op.selections))
            .sum();
        let fragment_fields: usize = doc
            .fragments
            .iter()
            .map(|fragment| count_fields(&fragment.selections))
            .sum();
        Self {
            operations: doc.operations.len(),
            fragments: doc.fragments.len(),
            fields: operation_fields + fragment_fields,
        }
    }

    fn add(&mut self, other: &Self) {
        self.operations += other.operations;
        self.fragments += other.fragments;
        self.fields += other.fields;
    }
}

/// Counts field selections at every nesting level, including those inside
/// inline spreads.
fn count_fields(selections: &[ast::Selection<'_>]) -> usize {
    selections
        .iter()
        .map(|selection| match selection {
            ast::Selection::Field(field) => 1 + count_fields(&field.selections),
            ast::Selection::Spread(ast::Spread::Inline(inline)) => {
                count_fields(&inline.selections)
            },
            ast::Selection::Spread(ast::Spread::Named(_)) => 0,
        })
        .sum()
}

/// Reads and parses one file. `Ok(Err(..))` is a GraphQL syntax error
/// already rendered as a diagnostic.
fn parse_file(path: &Path) -> anyhow::Result<Result<DocumentSummary, String>> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let result = GraphQLParser::new(&source)
        .with_file_path(path)
        .parse_execution_document();
    Ok(match result {
        Ok(doc) => Ok(DocumentSummary::of(&doc)),
        Err(err) => Err(err.format_detailed(Some(&source))),
    })
}

impl ParseCmd {
    /// Finds all GraphQL files recursively located at or under each path
    /// argument.
    fn collect_file_paths(
        &self,
        errors: &mut Vec<anyhow::Error>,
    ) -> (Vec<PathBuf>, usize) {
        let graphql_file_exts: HashSet<&str> = self
            .graphql_file_exts
            .iter()
            .map(|ext| ext.trim_start_matches('.'))
            .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(err.into());
                        continue;
                    },
                };

                let entry_path = entry.path();
                if !entry.file_type().is_file() {
                    log::trace!("Skipping non-file: {entry_path:#?}.");
                    continue;
                }

                let has_graphql_ext = entry_path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| graphql_file_exts.contains(ext));
                if has_graphql_ext {
                    log::trace!("Found GraphQL file at {entry_path:#?}.");
                    file_paths.push(entry_path.to_path_buf());
                } else {
                    num_skipped_files += 1;
                }
            }
        }

        // A single explicit file argument is parsed even when its extension
        // is not in `graphql_file_exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file()
        {
            log::warn!(
                "Proceeding to parse {first_arg_path:#?} even though it \
                doesn't match any of the --graphql-file-exts ({}).",
                graphql_file_exts
                    .iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            num_skipped_files = 0;
            file_paths.push(first_arg_path.clone());
        }

        (file_paths, num_skipped_files)
    }
}

#[inherent::inherent]
impl RunnableCommand for ParseCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<anyhow::Error> = vec![];
        let (file_paths, num_skipped_files) = self.collect_file_paths(&mut errors);
        log::debug!("Found {} GraphQL files to be parsed.", file_paths.len());

        // Each file gets its own parser, so files are parsed independently.
        let tasks: Vec<_> = file_paths
            .iter()
            .cloned()
            .map(|path| tokio::task::spawn_blocking(move || parse_file(&path)))
            .collect();

        let mut totals = DocumentSummary::default();
        let mut report = String::new();
        let mut diagnostics = vec![];
        for (path, task) in file_paths.iter().zip(tasks) {
            match task.await {
                Ok(Ok(Ok(summary))) => {
                    log::debug!("Parsed {path:#?}: {summary:?}.");
                    if !self.quiet {
                        report.push_str(&format!(
                            "{} {}: {} operations, {} fragments, {} fields\n",
                            output_utils::GREEN_CHECK,
                            path.display(),
                            summary.operations,
                            summary.fragments,
                            summary.fields,
                        ));
                    }
                    totals.add(&summary);
                },
                Ok(Ok(Err(diagnostic))) => diagnostics.push(diagnostic),
                Ok(Err(err)) => errors.push(err),
                Err(join_err) => errors.push(
                    anyhow::Error::new(join_err)
                        .context(format!("parse task for {} failed", path.display())),
                ),
            }
        }

        if !diagnostics.is_empty() || !errors.is_empty() {
            let mut stderr = diagnostics.join("\n");
            for err in &errors {
                stderr.push_str(&format!("error: {err:#}\n"));
            }
            stderr.push_str(&format!(
                "{} {} of {} files failed to parse.",
                output_utils::RED_X,
                diagnostics.len() + errors.len(),
                file_paths.len(),
            ));
            return CommandResult::partial(report, stderr);
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{}{} All GraphQL parsed successfully:\n",
                "  * Parsed {} files.\n",
                "  * Skipped {} non-graphql files.\n",
                "  * Found {} operations.\n",
                "  * Found {} fragments.\n",
                "  * Found {} field selections.",
            ),
            report,
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped_files,
            totals.operations,
            totals.fragments,
            totals.fields,
        ))
    }
}
