//! Shared parsing helpers used by both the main-body scanner and the
//! value-type recognizers: whitespace combinators for `chumsky` grammars,
//! and scoped OCR-normalization helpers.

use chumsky::error::Rich;
use chumsky::extra;
use chumsky::prelude::*;

/// One or more whitespace characters, as used between main-body tokens.
pub fn some_whitespace<'src>() -> impl Parser<'src, &'src str, (), extra::Err<Rich<'src, char>>> {
    text::whitespace().at_least(1)
}

/// Zero or more whitespace characters.
pub fn any_whitespace<'src>() -> impl Parser<'src, &'src str, (), extra::Err<Rich<'src, char>>> {
    text::whitespace()
}

/// Replace `O` with `0` inside a numeric substring, an OCR confusion
/// introduced by legacy teleprinter/OCR transcription of METAR tape.
///
/// Applied only within a recognizer's own semantic scope, never globally,
/// so a genuine `0` is never mistaken for a misread `O`.
pub fn normalize_digits(s: &str) -> String {
    s.chars()
        .map(|c| if c == 'O' { '0' } else { c })
        .collect()
}

/// Fix up a handful of known letter-prefix OCR confusions (`0VC` -> `OVC`,
/// `A01`/`A02` -> `AO1`/`AO2`, `SCK` -> `SKC`).
pub fn normalize_prefix(s: &str) -> String {
    match s {
        "0VC" => "OVC".to_string(),
        "A01" => "AO1".to_string(),
        "A02" => "AO2".to_string(),
        "SCK" => "SKC".to_string(),
        other => other.to_string(),
    }
}

/// Parse a METAR fractional distance: `a b/c`, `b/c`, or a bare integer,
/// returning the decoded decimal value. Used by visibility recognizers.
pub fn parse_fraction(s: &str) -> Option<f64> {
    let mut total = 0.0f64;
    let mut saw_digit = false;
    for part in s.split_whitespace() {
        if let Some((n, d)) = part.split_once('/') {
            let n: f64 = n.parse().ok()?;
            let d: f64 = d.parse().ok()?;
            if d == 0.0 {
                return None;
            }
            total += n / d;
        } else {
            total += part.parse::<f64>().ok()?;
        }
        saw_digit = true;
    }
    saw_digit.then_some(total)
}
