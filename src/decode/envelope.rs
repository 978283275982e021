//! Report envelope extraction: the date prefix, report-type keyword,
//! station ID, observation timestamp, report modifier, and the RMK split.

use std::sync::LazyLock;

use chrono::{DateTime, Datelike, NaiveDate, TimeZone, Utc};
use regex::Regex;

use crate::error::ParseFailure;
use crate::observation::{ReportModifier, ReportType};

static DATE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})/(\d{2})/(\d{2}) \d{2}:\d{2} ").unwrap());

static STATION_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9]{3}$").unwrap());

static TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2})(\d{2})(\d{2})Z$").unwrap());

/// Everything the envelope stage recovers before the main-body scanner and
/// remarks scanner ever see a token.
pub struct Envelope<'a> {
    pub report_type: ReportType,
    pub report_modifier: Option<ReportModifier>,
    pub station_id: String,
    pub observation_time: DateTime<Utc>,
    pub body_text: &'a str,
    pub remarks_text: Option<&'a str>,
    pub no_significant_change: bool,
}

/// Cheap prefix check: does `raw` look like the start of a METAR/SPECI
/// report, without validating the timestamp or anything past it?
///
/// True when, after stripping the optional `yyyy/mm/dd hh:mm ` date prefix,
/// the `METAR`/`SPECI` keyword is present, or a bare 4-character station ID
/// is found in its place. False for null, empty, or whitespace-only input.
pub(crate) fn looks_like_metar(raw: &str) -> bool {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return false;
    }

    let rest = match DATE_PREFIX.captures(trimmed) {
        Some(caps) => &trimmed[caps.get(0).unwrap().end()..],
        None => trimmed,
    };

    if rest.starts_with("METAR ") || rest.starts_with("SPECI ") {
        return true;
    }
    rest.split_whitespace()
        .next()
        .is_some_and(|tok| STATION_ID.is_match(tok))
}

/// Run the 8-step envelope algorithm over a trimmed raw report string.
pub fn extract(raw: &str) -> Result<Envelope<'_>, ParseFailure> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ParseFailure::empty_input(raw));
    }

    let now = Utc::now();
    let (issue_year, issue_month, issue_day, rest) = match DATE_PREFIX.captures(trimmed) {
        Some(caps) => {
            let year: i32 = caps[1].parse().unwrap();
            let month: u32 = caps[2].parse().unwrap();
            let day: u32 = caps[3].parse().unwrap();
            let rest = &trimmed[caps.get(0).unwrap().end()..];
            (year, month, day, rest)
        }
        None => (now.year(), now.month(), now.day(), trimmed),
    };

    let (report_type, rest) = if let Some(rest) = rest.strip_prefix("METAR ") {
        (ReportType::Metar, rest)
    } else if let Some(rest) = rest.strip_prefix("SPECI ") {
        (ReportType::Speci, rest)
    } else {
        let looks_like_station = rest
            .split_whitespace()
            .next()
            .is_some_and(|tok| STATION_ID.is_match(tok));
        if looks_like_station {
            (ReportType::Metar, rest)
        } else {
            return Err(ParseFailure::not_a_metar(raw));
        }
    };

    let (station_tok, rest) = pop_token(rest);
    if !STATION_ID.is_match(station_tok) {
        return Err(ParseFailure::no_station_id(raw));
    }
    let station_id = station_tok.to_string();

    let (timestamp_tok, rest) = pop_token(rest);
    let caps = TIMESTAMP
        .captures(timestamp_tok)
        .ok_or_else(|| ParseFailure::not_a_metar(raw))?;
    let day: u32 = caps[1].parse().unwrap();
    let hour: u32 = caps[2].parse().unwrap();
    let minute: u32 = caps[3].parse().unwrap();
    let observation_time = resolve_instant(issue_year, issue_month, issue_day, day, hour, minute);

    let (lookahead, after_modifier) = pop_token(rest);
    let (report_modifier, remainder) = match modifier_from_token(lookahead) {
        Some(modifier) => (Some(modifier), after_modifier),
        None => (None, rest),
    };

    let (body_and_nosig, remarks_text) = split_remarks(remainder);
    let (body_text, no_significant_change) = strip_nosig(body_and_nosig);

    Ok(Envelope {
        report_type,
        report_modifier,
        station_id,
        observation_time,
        body_text,
        remarks_text,
        no_significant_change,
    })
}

/// Split off the first whitespace-delimited token, returning it and the
/// trimmed remainder. Empty input yields an empty token and remainder.
fn pop_token(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.split_once(char::is_whitespace) {
        Some((tok, rest)) => (tok, rest.trim_start()),
        None => (text, ""),
    }
}

fn modifier_from_token(tok: &str) -> Option<ReportModifier> {
    match tok {
        "AUTO" => Some(ReportModifier::Auto),
        "COR" => Some(ReportModifier::Cor),
        "AMD" => Some(ReportModifier::Amd),
        "RTD" => Some(ReportModifier::Rtd),
        _ => None,
    }
}

fn split_remarks(text: &str) -> (&str, Option<&str>) {
    if let Some(idx) = text.find(" RMK ") {
        let body = &text[..idx];
        let remarks = text[idx + 5..].trim();
        (body, (!remarks.is_empty()).then_some(remarks))
    } else if let Some(body) = text.strip_suffix(" RMK") {
        (body, None)
    } else if text == "RMK" {
        ("", None)
    } else {
        (text, None)
    }
}

fn strip_nosig(body: &str) -> (&str, bool) {
    match body.trim_end().strip_suffix("NOSIG") {
        Some(stripped) => (stripped.trim_end(), true),
        None => (body, false),
    }
}

/// Resolve a `ddhhmmZ` timestamp against an issue date, rolling back one
/// calendar month when the observation's day-of-month is later than the
/// issue date's (the report tape was generated near a month boundary).
fn resolve_instant(
    issue_year: i32,
    issue_month: u32,
    issue_day: u32,
    day: u32,
    hour: u32,
    minute: u32,
) -> DateTime<Utc> {
    let (mut year, mut month) = (issue_year, issue_month);
    if day > issue_day {
        if month == 1 {
            year -= 1;
            month = 12;
        } else {
            month -= 1;
        }
    }
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(issue_year, issue_month, issue_day).unwrap());
    let naive = date.and_hms_opt(hour, minute, 0).unwrap_or_else(|| date.and_hms_opt(0, 0, 0).unwrap());
    Utc.from_utc_datetime(&naive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_simple_envelope() {
        let env = extract("METAR KJFK 121851Z 24008KT 10SM FEW250 23/14 A3012 RMK AO2 SLP201").unwrap();
        assert_eq!(env.station_id, "KJFK");
        assert_eq!(env.report_type, ReportType::Metar);
        assert_eq!(env.body_text, "24008KT 10SM FEW250 23/14 A3012");
        assert_eq!(env.remarks_text, Some("AO2 SLP201"));
    }

    #[test]
    fn defaults_to_metar_without_keyword() {
        let env = extract("KJFK 121851Z 24008KT 10SM").unwrap();
        assert_eq!(env.report_type, ReportType::Metar);
    }

    #[test]
    fn recognises_speci() {
        let env = extract("SPECI KJFK 251651Z 19005KT 10SM FEW250").unwrap();
        assert_eq!(env.report_type, ReportType::Speci);
    }

    #[test]
    fn strips_nosig_flag() {
        let env = extract("METAR KJFK 121851Z 24008KT 10SM NOSIG").unwrap();
        assert!(env.no_significant_change);
        assert_eq!(env.body_text, "24008KT 10SM");
    }

    #[test]
    fn empty_input_fails() {
        assert!(extract("").is_err());
        assert!(extract("   ").is_err());
    }

    #[test]
    fn non_metar_keyword_fails() {
        assert!(extract("TAF KJFK 251651Z 2517/2618").is_err());
    }

    #[test]
    fn month_rolls_back_across_year_boundary() {
        let env = extract("2024/01/02 00:00 METAR KJFK 311851Z 24008KT 10SM").unwrap();
        assert_eq!(env.observation_time.year(), 2023);
        assert_eq!(env.observation_time.month(), 12);
        assert_eq!(env.observation_time.day(), 31);
    }
}
