//! `compile` command handler.

use crate::cli::args::CompileArgs;
use crate::cli::commands::{cross_check_groups, load_groups, print_report};
use crate::compiler::{self, CompilerOptions, EmptyPolicy};
use crate::error::FaqForgeError;

/// Compile every source file and write fragments.
///
/// Skipped files are report entries, not failures: the command exits
/// zero as long as the batch itself could run.
///
/// # Errors
///
/// Returns an error for batch-fatal problems only: unreadable source
/// directory, unusable output directory, invalid groups file.
pub async fn run(args: &CompileArgs) -> Result<(), FaqForgeError> {
    let groups = load_groups(args.groups.as_deref())?;

    let out_dir = args.output.clone().unwrap_or_else(|| args.source.clone());
    let mut options = CompilerOptions::new(&args.source, out_dir);
    if let Some(jobs) = args.jobs {
        options.jobs = jobs;
    }
    if args.emit_empty {
        options.empty_policy = EmptyPolicy::Emit;
    }

    tracing::info!(
        source = %options.source_dir.display(),
        output = %options.out_dir.display(),
        jobs = options.jobs,
        "compiling"
    );

    let report = compiler::compile(&options).await?;

    if let Some(groups) = &groups {
        cross_check_groups(groups, &report);
    }

    print_report(&report, args.format, "wrote")
}
