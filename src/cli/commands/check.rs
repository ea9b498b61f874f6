//! `check` command handler.
//!
//! Runs the full compile pipeline against the source directory but
//! writes nothing — the batch report shows what a real run would do.

use crate::cli::args::CheckArgs;
use crate::cli::commands::{cross_check_groups, load_groups, print_report};
use crate::compiler::{self, CompilerOptions, EmptyPolicy};
use crate::error::FaqForgeError;

/// Validate all sources without writing fragments.
///
/// # Errors
///
/// Returns an error if the source directory cannot be read or the
/// groups file is invalid.
pub async fn run(args: &CheckArgs) -> Result<(), FaqForgeError> {
    let groups = load_groups(args.groups.as_deref())?;

    let mut options = CompilerOptions::new(&args.source, &args.source);
    options.dry_run = true;
    if args.emit_empty {
        options.empty_policy = EmptyPolicy::Emit;
    }

    tracing::info!(source = %options.source_dir.display(), "checking sources");

    let report = compiler::compile(&options).await?;

    if let Some(groups) = &groups {
        cross_check_groups(groups, &report);
    }

    print_report(&report, args.format, "would write")
}
