//! CLI argument definitions.
//!
//! All Clap derive structs for `faqforge` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

// ============================================================================
// Root CLI
// ============================================================================

/// Compile plain-text Q&A sources into HTML accordion fragments.
#[derive(Parser, Debug)]
#[command(name = "faqforge", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-error output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "FAQFORGE_COLOR")]
    pub color: ColorChoice,

    /// Log output format on stderr.
    #[arg(
        long,
        default_value = "human",
        global = true,
        env = "FAQFORGE_LOG_FORMAT"
    )]
    pub log_format: LogFormatChoice,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compile all sources and write fragments.
    Compile(CompileArgs),

    /// Run the full pipeline without writing anything.
    Check(CheckArgs),

    /// List discovered categories, grouped when a groups file is given.
    List(ListArgs),
}

/// Arguments for `compile`.
#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Directory containing *.txt source files.
    #[arg(short, long, env = "FAQFORGE_SOURCE")]
    pub source: PathBuf,

    /// Destination directory for fragments (defaults to the source
    /// directory).
    #[arg(short, long, env = "FAQFORGE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Maximum number of files compiled concurrently (defaults to
    /// available parallelism).
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Emit a fragment shell for sources with zero Q&A pairs instead of
    /// skipping them.
    #[arg(long)]
    pub emit_empty: bool,

    /// Path to the YAML groups file for navigation cross-checks.
    #[arg(short, long, env = "FAQFORGE_GROUPS")]
    pub groups: Option<PathBuf>,

    /// Output format for the batch report.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `check`.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Directory containing *.txt source files.
    #[arg(short, long, env = "FAQFORGE_SOURCE")]
    pub source: PathBuf,

    /// Emit-empty policy to check under.
    #[arg(long)]
    pub emit_empty: bool,

    /// Path to the YAML groups file for navigation cross-checks.
    #[arg(short, long, env = "FAQFORGE_GROUPS")]
    pub groups: Option<PathBuf>,

    /// Output format for the report.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Directory containing *.txt source files.
    #[arg(short, long, env = "FAQFORGE_SOURCE")]
    pub source: PathBuf,

    /// Path to the YAML groups file.
    #[arg(short, long, env = "FAQFORGE_GROUPS")]
    pub groups: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Log output format choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormatChoice {
    /// Human-readable log lines.
    #[default]
    Human,
    /// Newline-delimited JSON log lines.
    Json,
}

// ============================================================================
// Tests
// ============================================================================
