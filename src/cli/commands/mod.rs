//! CLI command dispatch and handlers.
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod check;
pub mod compile;
pub mod list;

use std::path::Path;

use crate::cli::args::{Cli, Commands, OutputFormat};
use crate::compiler::BatchReport;
use crate::config::GroupsConfig;
use crate::error::FaqForgeError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub async fn dispatch(cli: Cli) -> Result<(), FaqForgeError> {
    match cli.command {
        Commands::Compile(args) => compile::run(&args).await,
        Commands::Check(args) => check::run(&args).await,
        Commands::List(args) => list::run(&args).await,
    }
}

/// Loads the groups file when one was given.
pub(crate) fn load_groups(path: Option<&Path>) -> Result<Option<GroupsConfig>, FaqForgeError> {
    match path {
        Some(path) => {
            tracing::debug!(groups = %path.display(), "loading groups file");
            Ok(Some(GroupsConfig::load(path)?))
        }
        None => Ok(None),
    }
}

/// Logs navigation mismatches between the groups file and the compiled
/// categories. Warnings only: a half-filled group is a content problem,
/// not a compile failure.
pub(crate) fn cross_check_groups(groups: &GroupsConfig, report: &BatchReport) {
    let ids = report.category_ids();
    for id in groups.unclaimed(&ids) {
        tracing::warn!(category = id, "compiled category not claimed by any group");
    }
    for (group, member) in groups.missing_members(&ids) {
        tracing::warn!(group = %group, category = %member, "group member has no compiled fragment");
    }
}

/// Prints a batch report to stdout in the requested format.
///
/// # Errors
///
/// Returns a JSON error if serialization fails (it cannot for these
/// types, but the signature keeps the boundary honest).
pub(crate) fn print_report(
    report: &BatchReport,
    format: OutputFormat,
    verb: &str,
) -> Result<(), FaqForgeError> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Human => {
            for written in &report.written {
                println!(
                    "{verb} {} ({} pairs) -> {}",
                    written.category_id,
                    written.pair_count,
                    written.path.display()
                );
            }
            for skipped in &report.skipped {
                println!("skipped {}: {}", skipped.file, skipped.reason);
            }
            println!(
                "{} fragment(s), {} skipped",
                report.written.len(),
                report.skipped.len()
            );
        }
    }
    Ok(())
}
