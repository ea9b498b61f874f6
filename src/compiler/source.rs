//! Source document header parsing.
//!
//! A source file opens with two mandatory header lines:
//!
//! ```text
//! ##CATEGORY_ID=rhinoplasty
//! ##TITLE=Rhinoplasty FAQ
//! ```
//!
//! Header keys are case-sensitive and exact-match; the value is
//! everything after `=` to end of line, trimmed. Everything after the
//! two headers is the body, handed to the segmenter untouched.

use thiserror::Error;

use crate::compiler::escape::is_valid_category_id;

/// Header key for the category id line.
pub const CATEGORY_ID_KEY: &str = "CATEGORY_ID";

/// Header key for the title line.
pub const TITLE_KEY: &str = "TITLE";

/// Prefix that marks a header line.
pub const HEADER_PREFIX: &str = "##";

/// A parsed source file: two headers plus the body lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Declared category id — the DOM id and destination address of the
    /// compiled fragment.
    pub category_id: String,

    /// Human-readable section heading.
    pub title: String,

    /// Trimmed, non-empty lines following the two headers.
    pub body: Vec<String>,
}

/// Header-level parse failures. All of these are file-scoped: the file
/// is skipped and the batch continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// Fewer than two non-empty lines in the file.
    #[error("missing header line(s): expected {HEADER_PREFIX}{CATEGORY_ID_KEY}= and {HEADER_PREFIX}{TITLE_KEY}=")]
    MissingHeader,

    /// A header line is present but does not match the required syntax,
    /// or its value is empty.
    #[error("malformed {key} header: {detail}")]
    MalformedHeader {
        /// Which header key failed
        key: &'static str,
        /// What was wrong with it
        detail: String,
    },

    /// The declared category id cannot be used as a DOM id / file stem.
    #[error("invalid category id '{id}'")]
    InvalidCategoryId {
        /// The offending id value
        id: String,
    },
}

/// Parses full file contents into a [`SourceDocument`].
///
/// Lines are trimmed and blank lines dropped before any structural
/// interpretation; blank lines are insignificant everywhere in the
/// grammar.
///
/// # Errors
///
/// Returns a [`HeaderError`] identifying which header failed when the
/// first two surviving lines are not a valid `CATEGORY_ID` and `TITLE`
/// pair.
pub fn parse(raw: &str) -> Result<SourceDocument, HeaderError> {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.len() < 2 {
        return Err(HeaderError::MissingHeader);
    }

    let category_id = header_value(lines[0], CATEGORY_ID_KEY)?;
    let title = header_value(lines[1], TITLE_KEY)?;

    if !is_valid_category_id(&category_id) {
        return Err(HeaderError::InvalidCategoryId { id: category_id });
    }

    let body = lines[2..].iter().map(|l| (*l).to_string()).collect();

    Ok(SourceDocument {
        category_id,
        title,
        body,
    })
}

/// Extracts the value of a `##KEY=value` header line, requiring an exact
/// key match and a non-empty trimmed value.
fn header_value(line: &str, key: &'static str) -> Result<String, HeaderError> {
    let Some(rest) = line.strip_prefix(HEADER_PREFIX) else {
        return Err(HeaderError::MalformedHeader {
            key,
            detail: format!("line does not start with '{HEADER_PREFIX}'"),
        });
    };

    let Some((found_key, value)) = rest.split_once('=') else {
        return Err(HeaderError::MalformedHeader {
            key,
            detail: "missing '='".to_string(),
        });
    };

    if found_key.trim() != key {
        return Err(HeaderError::MalformedHeader {
            key,
            detail: format!("expected key '{key}', found '{}'", found_key.trim()),
        });
    }

    let value = value.trim();
    if value.is_empty() {
        return Err(HeaderError::MalformedHeader {
            key,
            detail: "empty value".to_string(),
        });
    }

    Ok(value.to_string())
}
