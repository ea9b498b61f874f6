//! Atomic fragment persistence.
//!
//! Fragments land in a shared directory that a template engine may read
//! at any moment, so a reader must never observe a half-written file.
//! Each write goes to a temp file in the destination directory and is
//! renamed over the final path; rename within one directory is atomic
//! on POSIX filesystems.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::compiler::render::CompiledFragment;
use crate::error::CompileError;

/// File extension for compiled fragments.
pub const FRAGMENT_EXTENSION: &str = "html";

/// Destination path for a fragment: `<out_dir>/<category_id>.html`.
///
/// The declared category id is the authoritative address — never the
/// source file name.
#[must_use]
pub fn fragment_path(out_dir: &Path, category_id: &str) -> PathBuf {
    out_dir.join(format!("{category_id}.{FRAGMENT_EXTENSION}"))
}

/// Ensures the output directory exists and is usable.
///
/// # Errors
///
/// Returns [`CompileError::OutputDir`] if the directory cannot be
/// created. This is batch-fatal: no fragment can be written anywhere.
pub fn prepare_out_dir(out_dir: &Path) -> Result<(), CompileError> {
    std::fs::create_dir_all(out_dir).map_err(|source| CompileError::OutputDir {
        path: out_dir.to_path_buf(),
        source,
    })
}

/// Writes one fragment atomically, fully replacing any prior artifact
/// at the same address.
///
/// # Errors
///
/// Returns the underlying I/O error; the caller records it as a
/// file-scoped skip rather than aborting the batch.
pub fn write_fragment(out_dir: &Path, fragment: &CompiledFragment) -> std::io::Result<PathBuf> {
    let dest = fragment_path(out_dir, &fragment.category_id);

    let mut tmp = NamedTempFile::new_in(out_dir)?;
    tmp.write_all(fragment.html.as_bytes())?;
    tmp.flush()?;
    tmp.persist(&dest).map_err(|e| e.error)?;

    Ok(dest)
}
