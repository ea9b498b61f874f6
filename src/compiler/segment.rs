//! Numbered-block segmentation.
//!
//! The body of a source document is a flat list of lines in which a
//! marker line (`1. Some question?`) opens a question and every
//! following non-marker line extends its answer. Only the anchored
//! marker pattern opens a new pair — digit-period sequences anywhere
//! else in a line are ordinary answer text.

use std::sync::LazyLock;

use regex::Regex;

/// One parsed question/answer unit.
///
/// Pairs exist only while a single document is being compiled; they are
/// never persisted on their own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QnAPair {
    /// Question text following the numeric marker. Never empty.
    pub question: String,

    /// All subsequent non-marker lines joined with single spaces,
    /// trimmed. May be empty for a question with no answer lines.
    pub answer: String,
}

/// Anchored marker pattern: digits, a period, whitespace, then
/// non-empty question text. A bare `12.` line has no question text and
/// therefore is NOT a marker — it flows into the surrounding answer
/// like any other line.
static MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s+(\S.*)$").expect("marker pattern is valid"));

/// Returns the question text if `line` is a marker line.
#[must_use]
pub fn marker_question(line: &str) -> Option<&str> {
    MARKER
        .captures(line)
        .and_then(|c| c.get(2))
        .map(|m| m.as_str())
}

/// Counts marker lines in a body. Used for diagnostics only.
#[must_use]
pub fn marker_count<S: AsRef<str>>(body: &[S]) -> usize {
    body.iter()
        .filter(|l| marker_question(l.as_ref()).is_some())
        .count()
}

/// Scans body lines in order and produces one [`QnAPair`] per marker
/// line, preserving source order.
///
/// The marker's numeric value is not validated: gaps and duplicate
/// numbers are tolerated, only the presence of the pattern matters.
/// Non-marker lines before the first marker are preamble and are
/// discarded.
#[must_use]
pub fn segment<S: AsRef<str>>(body: &[S]) -> Vec<QnAPair> {
    let mut pairs = Vec::new();
    let mut open: Option<QnAPair> = None;

    for line in body {
        let line = line.as_ref().trim();
        if line.is_empty() {
            continue;
        }

        if let Some(question) = marker_question(line) {
            if let Some(pair) = open.take() {
                pairs.push(finalize(pair));
            }
            open = Some(QnAPair {
                question: question.trim().to_string(),
                answer: String::new(),
            });
        } else if let Some(pair) = open.as_mut() {
            if !pair.answer.is_empty() {
                pair.answer.push(' ');
            }
            pair.answer.push_str(line);
        }
        // No open pair: preamble line, discarded.
    }

    if let Some(pair) = open.take() {
        pairs.push(finalize(pair));
    }

    pairs
}

fn finalize(mut pair: QnAPair) -> QnAPair {
    pair.answer = pair.answer.trim().to_string();
    pair
}
