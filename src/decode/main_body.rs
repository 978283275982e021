//! The main-body scanner: walks whitespace-separated tokens of the body
//! text and dispatches each to the first matching recognizer, in priority
//! order (wind, visibility, RVR, present weather, sky condition,
//! temperature, pressure).

use crate::error::warn_skip;
use crate::observation::Observation;
use crate::traits::Parsable;
use crate::types::{Pressure, PresentWeather, RunwayVisualRange, SkyCondition, Temperature, Visibility, Wind};

/// Mutable accumulator for the main-body scan; finalized into the fields
/// [`crate::decode::builder::ObservationBuilder`] copies onto the
/// [`Observation`](crate::observation::Observation) it produces.
#[derive(Default)]
pub struct MainBodyFields {
    pub wind: Option<Wind>,
    pub visibility: Option<Visibility>,
    pub temperature: Option<Temperature>,
    pub pressure: Option<Pressure>,
    pub present_weather: Vec<PresentWeather>,
    pub sky_conditions: Vec<SkyCondition>,
    pub runway_visual_ranges: Vec<RunwayVisualRange>,
}

/// Scan `body_text`, joining a bare digit token with a following
/// `[MP]?\d/\dSM` token (e.g. `1` `1/2SM`) before dispatch, since
/// [`Visibility::parser`] expects the mixed fraction as one slice.
pub fn scan(body_text: &str) -> MainBodyFields {
    let mut fields = MainBodyFields::default();
    let raw_tokens: Vec<&str> = body_text.split_whitespace().collect();
    let mut joined: Vec<String> = Vec::with_capacity(raw_tokens.len());
    let mut i = 0;
    while i < raw_tokens.len() {
        let tok = raw_tokens[i];
        if let Some(next) = raw_tokens.get(i + 1) {
            if is_bare_integer(tok) && is_fraction_sm(next) {
                joined.push(format!("{tok} {next}"));
                i += 2;
                continue;
            }
        }
        joined.push(tok.to_string());
        i += 1;
    }

    for token in &joined {
        dispatch(token, &mut fields);
    }
    fields
}

fn dispatch(token: &str, fields: &mut MainBodyFields) {
    if token == "NOSIG" || token == "RVRNO" {
        return;
    }
    if let Ok(wind) = Wind::parse(token) {
        fields.wind = Some(wind);
        return;
    }
    if let Ok(vis) = Visibility::parse(token) {
        fields.visibility = Some(vis);
        return;
    }
    if let Ok(rvr) = RunwayVisualRange::parse(token) {
        fields.runway_visual_ranges.push(rvr);
        return;
    }
    if let Ok(wx) = PresentWeather::parse(token) {
        fields.present_weather.push(wx);
        return;
    }
    if let Ok(sky) = SkyCondition::parse(token) {
        fields.sky_conditions.push(sky);
        return;
    }
    if let Ok(temp) = Temperature::parse(token) {
        fields.temperature = Some(temp);
        return;
    }
    match Pressure::parse(token) {
        Ok(pressure) => {
            fields.pressure = Some(pressure);
        }
        Err(reason) => warn_skip(token, &reason),
    }
}

fn is_bare_integer(tok: &str) -> bool {
    !tok.is_empty() && tok.bytes().all(|b| b.is_ascii_digit())
}

fn is_fraction_sm(tok: &str) -> bool {
    let tok = tok.strip_prefix(['M', 'P']).unwrap_or(tok);
    let Some(body) = tok.strip_suffix("SM") else {
        return false;
    };
    let mut parts = body.split('/');
    let (Some(n), Some(d), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !n.is_empty() && !d.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) && d.bytes().all(|b| b.is_ascii_digit())
}

/// Apply the scanned fields onto an [`Observation`]-shaped set of builder
/// fields. Exists only to keep [`scan`] free of `Observation` construction
/// concerns.
pub fn apply(fields: MainBodyFields, obs: &mut Observation) {
    obs.wind = fields.wind;
    obs.visibility = fields.visibility;
    obs.temperature = fields.temperature;
    obs.pressure = fields.pressure;
    obs.present_weather = fields.present_weather;
    obs.sky_conditions = fields.sky_conditions;
    obs.runway_visual_ranges = fields.runway_visual_ranges;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_simple_body() {
        let f = scan("24008KT 10SM FEW250 23/14 A3012");
        assert!(f.wind.is_some());
        assert!(f.visibility.is_some());
        assert_eq!(f.sky_conditions.len(), 1);
        assert!(f.temperature.is_some());
        assert!(f.pressure.is_some());
    }

    #[test]
    fn joins_mixed_fraction_visibility() {
        let f = scan("28016G22KT 1 1/2SM BKN008");
        let vis = f.visibility.unwrap();
        assert_eq!(vis.to_statute_miles(), 1.5);
    }

    #[test]
    fn unmatched_tokens_are_skipped() {
        let f = scan("24008KT ZZZZZZ 10SM");
        assert!(f.wind.is_some());
        assert!(f.visibility.is_some());
    }

    #[test]
    fn pressure_is_last_match_wins() {
        let f = scan("24008KT Q1013 A3012");
        assert_eq!(f.pressure.unwrap().unit, crate::types::PressureUnit::InchesHg);
    }

    #[test]
    fn collects_multiple_weather_and_sky_in_order() {
        let f = scan("-TSRA FEW010 BKN020 SHRA");
        assert_eq!(f.present_weather.len(), 2);
        assert_eq!(f.sky_conditions.len(), 2);
    }
}
