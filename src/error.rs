//! Fatal and non-fatal error types.
//!
//! The decoder has exactly two error tiers, per the project's error-handling
//! policy: a [`ParseFailure`] aborts the whole decode with no partial data,
//! while a [`RecognizerError`] only rejects a single token and is logged at
//! `warn` by the scanner that produced it; the scan continues.

use std::fmt;

use annotate_snippets::{Level, Renderer, Snippet};
use chumsky::error::Rich;

/// The exhaustive set of fatal envelope failures.
///
/// These are the only messages the decoder ever returns to a caller; every
/// other problem in the input is absorbed as a silent, logged token skip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    message: &'static str,
    raw: String,
}

impl ParseFailure {
    pub(crate) fn empty_input(raw: &str) -> Self {
        Self {
            message: "Raw data cannot be null or empty",
            raw: raw.to_string(),
        }
    }

    pub(crate) fn not_a_metar(raw: &str) -> Self {
        Self {
            message: "Data is not a valid METAR report",
            raw: raw.to_string(),
        }
    }

    pub(crate) fn no_station_id(raw: &str) -> Self {
        Self {
            message: "Could not extract station ID from METAR",
            raw: raw.to_string(),
        }
    }

    /// The exhaustive, fixed failure message for this kind of envelope
    /// rejection.
    pub fn message(&self) -> &'static str {
        self.message
    }

    /// Render a caret-annotated view of the input that failed to parse.
    pub fn render(&self) -> String {
        let renderer = Renderer::plain();
        let message = Level::Error
            .title(self.message)
            .snippet(Snippet::source(&self.raw).line_start(1).fold(true));
        renderer.render(message).to_string()
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message)
    }
}

impl std::error::Error for ParseFailure {}

/// Reason a single recognizer rejected a token it otherwise matched the
/// shape of, or failed to match at all. Never surfaced to callers; only
/// used for the `warn` log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognizerError(String);

impl RecognizerError {
    /// The token's shape matched but a semantic bound was violated
    /// (e.g. a pressure-tendency change greater than 50.0 hPa).
    pub fn semantic(reason: impl Into<String>) -> Self {
        Self(reason.into())
    }

    /// The token did not match any recognizer's shape at all.
    pub fn unrecognized() -> Self {
        Self("no recognizer matched".to_string())
    }
}

impl fmt::Display for RecognizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'a> From<Vec<Rich<'a, char>>> for RecognizerError {
    fn from(errs: Vec<Rich<'a, char>>) -> Self {
        errs.first()
            .map(|e| Self(e.to_string()))
            .unwrap_or_else(Self::unrecognized)
    }
}

/// Log a skipped token at `warn`, per the decoder's non-fatal error policy.
pub(crate) fn warn_skip(token: &str, reason: &RecognizerError) {
    log::warn!("skipping token {token:?}: {reason}");
}
