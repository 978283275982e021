//! Wires the three decode stages into a single [`Observation`].

use super::{envelope, main_body, remarks_scan};
use crate::error::ParseFailure;
use crate::observation::Observation;

/// Run the full decode pipeline over a raw METAR/SPECI report string.
pub fn build(raw: &str) -> Result<Observation, ParseFailure> {
    let env = envelope::extract(raw)?;

    let fields = main_body::scan(env.body_text);
    let remarks = env.remarks_text.map(remarks_scan::scan);

    let mut obs = Observation {
        station_id: env.station_id,
        report_type: env.report_type,
        report_modifier: env.report_modifier,
        observation_time: env.observation_time,
        raw_data: raw.trim().to_string(),
        wind: None,
        visibility: None,
        temperature: None,
        pressure: None,
        present_weather: Vec::new(),
        sky_conditions: Vec::new(),
        runway_visual_ranges: Vec::new(),
        no_significant_change: env.no_significant_change,
        remarks,
    };
    main_body::apply(fields, &mut obs);
    Ok(obs)
}
