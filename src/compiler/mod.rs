//! The Q&A compiler: a deterministic batch transform from a directory
//! of plain-text source files to a directory of HTML accordion
//! fragments, one per valid source, plus a report of every skipped
//! file and why.
//!
//! Pipeline per file: read → [`source::parse`] → [`segment::segment`] →
//! [`render::render`] → [`writer::write_fragment`]. Files are
//! independent units: one file's failure never aborts another's
//! processing, and only a directory-level failure aborts the batch.
//!
//! Parsing and rendering run on bounded parallel workers; the commit
//! phase (duplicate detection and fragment writes) runs sequentially in
//! sorted file order so results are deterministic regardless of worker
//! completion order.

pub mod escape;
pub mod render;
pub mod segment;
pub mod source;
pub mod writer;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::compiler::render::CompiledFragment;
use crate::compiler::source::HeaderError;
use crate::error::CompileError;

// ============================================================================
// Options
// ============================================================================

/// Source file extension the compiler looks for.
pub const SOURCE_EXTENSION: &str = "txt";

/// What to do with a source file that parses cleanly but contains zero
/// question/answer pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyPolicy {
    /// Skip the file with an `EmptyContent` report entry. An accordion
    /// with no items is not useful output.
    #[default]
    Skip,
    /// Emit the fragment shell anyway: section, heading, empty
    /// accordion container.
    Emit,
}

/// Options for one compiler run.
#[derive(Debug, Clone)]
pub struct CompilerOptions {
    /// Directory containing `*.txt` source files.
    pub source_dir: PathBuf,

    /// Destination directory for fragments. Defaults to the source
    /// directory at the CLI layer.
    pub out_dir: PathBuf,

    /// Maximum number of files parsed/rendered concurrently.
    pub jobs: usize,

    /// Zero-pair policy.
    pub empty_policy: EmptyPolicy,

    /// Analyze only: run the full pipeline but write nothing.
    pub dry_run: bool,
}

impl CompilerOptions {
    /// Options for compiling `source_dir` into `out_dir` with defaults
    /// for everything else.
    #[must_use]
    pub fn new(source_dir: impl Into<PathBuf>, out_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            out_dir: out_dir.into(),
            jobs: default_jobs(),
            empty_policy: EmptyPolicy::default(),
            dry_run: false,
        }
    }
}

/// Default worker count: available parallelism, floored at 1.
#[must_use]
pub fn default_jobs() -> usize {
    std::thread::available_parallelism().map_or(1, std::num::NonZeroUsize::get)
}

// ============================================================================
// Batch Report
// ============================================================================

/// Why a source file produced no fragment. Every skip is attributable;
/// nothing is silently swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipReason {
    /// Fewer than two header lines.
    MissingHeader,

    /// A header line present but not matching the required syntax.
    MalformedHeader {
        /// Which header key failed
        key: String,
        /// What was wrong with it
        detail: String,
    },

    /// Declared category id unusable as a DOM id / file stem.
    InvalidCategoryId {
        /// The offending id
        id: String,
    },

    /// Valid headers but zero pairs, under [`EmptyPolicy::Skip`].
    EmptyContent,

    /// Another file already claimed this category id.
    DuplicateCategory {
        /// The contested category id
        category_id: String,
        /// The file that won the address
        first_file: String,
    },

    /// The source file could not be read.
    Unreadable {
        /// I/O error text
        message: String,
    },

    /// The fragment could not be written.
    WriteFailed {
        /// I/O error text
        message: String,
    },
}

impl From<HeaderError> for SkipReason {
    fn from(err: HeaderError) -> Self {
        match err {
            HeaderError::MissingHeader => Self::MissingHeader,
            HeaderError::MalformedHeader { key, detail } => Self::MalformedHeader {
                key: key.to_string(),
                detail,
            },
            HeaderError::InvalidCategoryId { id } => Self::InvalidCategoryId { id },
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "missing header line(s)"),
            Self::MalformedHeader { key, detail } => {
                write!(f, "malformed {key} header: {detail}")
            }
            Self::InvalidCategoryId { id } => write!(f, "invalid category id '{id}'"),
            Self::EmptyContent => write!(f, "no question/answer pairs"),
            Self::DuplicateCategory {
                category_id,
                first_file,
            } => write!(
                f,
                "category '{category_id}' already compiled from {first_file}"
            ),
            Self::Unreadable { message } => write!(f, "unreadable: {message}"),
            Self::WriteFailed { message } => write!(f, "write failed: {message}"),
        }
    }
}

/// One successfully compiled fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenFragment {
    /// Category id the fragment is addressed by.
    pub category_id: String,

    /// Display title from the source header.
    pub title: String,

    /// Number of accordion items in the fragment.
    pub pair_count: usize,

    /// Destination path (the would-be path on a dry run).
    pub path: PathBuf,
}

/// One skipped source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedFile {
    /// Source file name relative to the source directory.
    pub file: String,

    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Result of a compiler run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Fragments produced, sorted by category id.
    pub written: Vec<WrittenFragment>,

    /// Files skipped, sorted by file name.
    pub skipped: Vec<SkippedFile>,
}

impl BatchReport {
    /// Category ids of every written fragment, in report order.
    #[must_use]
    pub fn category_ids(&self) -> Vec<&str> {
        self.written
            .iter()
            .map(|w| w.category_id.as_str())
            .collect()
    }
}

// ============================================================================
// Discovery
// ============================================================================

/// Enumerates `*.txt` files in the source directory, sorted by file
/// name for deterministic processing order.
///
/// # Errors
///
/// Returns [`CompileError::SourceDir`] if the directory cannot be
/// enumerated at all. This is batch-fatal.
pub fn discover(source_dir: &Path) -> Result<Vec<PathBuf>, CompileError> {
    let entries = std::fs::read_dir(source_dir).map_err(|source| CompileError::SourceDir {
        path: source_dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| CompileError::SourceDir {
            path: source_dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        let extension = path.extension().and_then(std::ffi::OsStr::to_str);
        if path.is_file() && extension == Some(SOURCE_EXTENSION) {
            files.push(path);
        }
    }

    files.sort();
    tracing::debug!(
        dir = %source_dir.display(),
        count = files.len(),
        "discovered source files"
    );
    Ok(files)
}

// ============================================================================
// Per-File Pipeline
// ============================================================================

/// Output of the parallel stage for one file, before the commit phase.
#[derive(Debug)]
enum FileOutcome {
    /// Parsed and rendered, pending duplicate check and write.
    Rendered {
        fragment: CompiledFragment,
        title: String,
        pair_count: usize,
    },
    /// Skipped during read/parse/segment.
    Skipped(SkipReason),
}

/// Read → parse → segment → policy → render for one source file.
/// Pure with respect to the output directory: no writes happen here.
fn compile_file(path: &Path, empty_policy: EmptyPolicy) -> FileOutcome {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            return FileOutcome::Skipped(SkipReason::Unreadable {
                message: e.to_string(),
            });
        }
    };

    let doc = match source::parse(&raw) {
        Ok(doc) => doc,
        Err(e) => return FileOutcome::Skipped(e.into()),
    };

    let pairs = segment::segment(&doc.body);
    if pairs.is_empty() && empty_policy == EmptyPolicy::Skip {
        return FileOutcome::Skipped(SkipReason::EmptyContent);
    }

    let pair_count = pairs.len();
    let fragment = render::render(&doc, &pairs);
    FileOutcome::Rendered {
        fragment,
        title: doc.title,
        pair_count,
    }
}

// ============================================================================
// Batch Orchestration
// ============================================================================

/// Compiles every discovered source file independently and returns the
/// batch report.
///
/// File-scoped failures become report entries; only source/output
/// directory failures (or a worker panic) abort the run.
///
/// # Errors
///
/// Returns [`CompileError`] for directory-level failures.
pub async fn compile(options: &CompilerOptions) -> Result<BatchReport, CompileError> {
    let files = discover(&options.source_dir)?;
    if !options.dry_run {
        writer::prepare_out_dir(&options.out_dir)?;
    }

    let outcomes = run_workers(&files, options).await?;
    Ok(commit(&files, outcomes, options))
}

/// Parallel stage: parse and render each file on a blocking worker,
/// bounded by a semaphore. Returns outcomes in discovery order.
async fn run_workers(
    files: &[PathBuf],
    options: &CompilerOptions,
) -> Result<Vec<FileOutcome>, CompileError> {
    let jobs = options.jobs.max(1);
    let semaphore = Arc::new(Semaphore::new(jobs));
    let mut join_set = JoinSet::new();

    for (index, path) in files.iter().enumerate() {
        let permit = semaphore
            .clone()
            .acquire_owned()
            .await
            .map_err(|e| CompileError::TaskFailed(e.to_string()))?;
        let path = path.clone();
        let empty_policy = options.empty_policy;
        join_set.spawn_blocking(move || {
            let outcome = compile_file(&path, empty_policy);
            drop(permit);
            (index, outcome)
        });
    }

    let mut outcomes: Vec<Option<FileOutcome>> = files.iter().map(|_| None).collect();
    while let Some(joined) = join_set.join_next().await {
        let (index, outcome) = joined.map_err(|e| CompileError::TaskFailed(e.to_string()))?;
        outcomes[index] = Some(outcome);
    }

    // Every slot was filled by exactly one worker
    Ok(outcomes.into_iter().flatten().collect())
}

/// Sequential commit phase: duplicate-category detection and fragment
/// writes, in sorted file order, then report ordering.
fn commit(files: &[PathBuf], outcomes: Vec<FileOutcome>, options: &CompilerOptions) -> BatchReport {
    let mut report = BatchReport::default();
    let mut claimed: Vec<(String, String)> = Vec::new(); // (category_id, file)

    for (path, outcome) in files.iter().zip(outcomes) {
        let file = file_name(path);
        match outcome {
            FileOutcome::Skipped(reason) => {
                tracing::warn!(%file, %reason, "skipping source file");
                report.skipped.push(SkippedFile { file, reason });
            }
            FileOutcome::Rendered {
                fragment,
                title,
                pair_count,
            } => {
                if let Some((_, first_file)) = claimed
                    .iter()
                    .find(|(id, _)| *id == fragment.category_id)
                {
                    let reason = SkipReason::DuplicateCategory {
                        category_id: fragment.category_id.clone(),
                        first_file: first_file.clone(),
                    };
                    tracing::warn!(%file, %reason, "skipping source file");
                    report.skipped.push(SkippedFile { file, reason });
                    continue;
                }
                claimed.push((fragment.category_id.clone(), file.clone()));

                let path = if options.dry_run {
                    writer::fragment_path(&options.out_dir, &fragment.category_id)
                } else {
                    match writer::write_fragment(&options.out_dir, &fragment) {
                        Ok(path) => path,
                        Err(e) => {
                            let reason = SkipReason::WriteFailed {
                                message: e.to_string(),
                            };
                            tracing::warn!(%file, %reason, "skipping source file");
                            report.skipped.push(SkippedFile { file, reason });
                            continue;
                        }
                    }
                };

                tracing::info!(
                    category = %fragment.category_id,
                    pairs = pair_count,
                    dest = %path.display(),
                    "compiled fragment"
                );
                report.written.push(WrittenFragment {
                    category_id: fragment.category_id,
                    title,
                    pair_count,
                    path,
                });
            }
        }
    }

    report.written.sort_by(|a, b| a.category_id.cmp(&b.category_id));
    report.skipped.sort_by(|a, b| a.file.cmp(&b.file));
    report
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

// ============================================================================
// Tests
// ============================================================================
