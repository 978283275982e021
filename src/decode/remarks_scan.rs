//! The remarks scanner: an order-independent, consumed-token-mask pass
//! over the whitespace-split RMK tail. Each recognizer is tried, in
//! priority order, against the unconsumed tokens starting at the current
//! position; the first to match claims a span of tokens. Recognizers
//! whose shape matches but whose value fails a semantic bound log a
//! `warn` and leave their token unconsumed, so it survives into
//! `free_text` per the scanner's silent-recovery contract.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{warn_skip, RecognizerError};
use crate::parsers::{normalize_prefix, parse_fraction};
use crate::remarks::{
    AutomatedStationType, CeilingSecondSite, CloudTypeRemark, ConvectiveCloudCode,
    LocationQualifier, MaintenanceIndicator, ObscurationLayer, PeakWind, PrecipitationAmount,
    PressureTendency, Remarks, ThunderstormLocation, VariableCeiling, VariableVisibility,
    WeatherEvent, WeatherEventMark, WeatherEventMarkKind, WindShift,
};
use crate::remarks::{decode_sea_level_pressure, decode_signed_tenths};
use crate::types::{CompassDirection, Pressure, PressureUnit, SkyCoverage, Temperature, WeatherPhenomenon};

type Recognizer = fn(&[&str], &mut Remarks) -> Option<usize>;

const RECOGNIZERS: &[Recognizer] = &[
    peak_wind,
    wind_shift,
    tower_visibility,
    surface_visibility,
    variable_visibility,
    variable_ceiling,
    ceiling_second_site,
    obscuration_layer,
    thunderstorm_location,
    cloud_type,
    automated_maintenance,
    automated_station,
    sea_level_pressure,
    precise_temperature,
    hourly_precip,
    six_hour_precip,
    twenty_four_hour_precip,
    pressure_tendency,
    six_hour_max_temp,
    six_hour_min_temp,
    twenty_four_hour_max_min,
    hail,
    weather_event,
];

/// Run the full recognizer catalogue over a trimmed RMK tail.
pub fn scan(text: &str) -> Remarks {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    let mut consumed = vec![false; tokens.len()];
    let mut remarks = Remarks::default();

    for i in 0..tokens.len() {
        if consumed[i] {
            continue;
        }
        for recognizer in RECOGNIZERS {
            if let Some(span) = recognizer(&tokens[i..], &mut remarks) {
                for slot in consumed.iter_mut().skip(i).take(span) {
                    *slot = true;
                }
                break;
            }
        }
    }

    let residue = tokens
        .iter()
        .zip(consumed.iter())
        .filter(|(_, c)| !**c)
        .map(|(t, _)| *t)
        .collect::<Vec<_>>()
        .join(" ");
    remarks.free_text = (!residue.trim().is_empty()).then_some(residue);
    remarks
}

fn is_plain_int(tok: &str) -> bool {
    !tok.is_empty() && tok.bytes().all(|b| b.is_ascii_digit())
}

fn is_fraction_token(tok: &str) -> bool {
    let mut parts = tok.split('/');
    matches!((parts.next(), parts.next(), parts.next()), (Some(n), Some(d), None)
        if !n.is_empty() && !d.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) && d.bytes().all(|b| b.is_ascii_digit()))
}

/// Parse a remarks-style fraction (`1`, `1/2`, or the two-token `1 1/2`)
/// starting at `rest[0]`, returning the value and tokens consumed.
fn parse_frac(rest: &[&str]) -> Option<(f64, usize)> {
    if rest.len() >= 2 && is_plain_int(rest[0]) && is_fraction_token(rest[1]) {
        let combined = format!("{} {}", rest[0], rest[1]);
        return parse_fraction(&combined).map(|v| (v, 2));
    }
    let first = *rest.first()?;
    if is_fraction_token(first) || is_plain_int(first) {
        return parse_fraction(first).map(|v| (v, 1));
    }
    None
}

fn is_dir_range(tok: &str) -> bool {
    match tok.split_once('-') {
        Some((a, b)) => CompassDirection::from_code(a).is_some() && CompassDirection::from_code(b).is_some(),
        None => false,
    }
}

static PEAK_WIND_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{3})P?(\d{2,3})/(\d{2}|\d{4})?$").unwrap());

fn peak_wind(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    if rest.first() != Some(&"PK") || rest.get(1) != Some(&"WND") {
        return None;
    }
    let caps = PEAK_WIND_RE.captures(rest.get(2)?)?;
    let direction_degrees: u16 = caps[1].parse().ok()?;
    let speed_kt: u16 = caps[2].parse().ok()?;
    let (hour, minute) = match caps.get(3).map(|m| m.as_str()) {
        Some(t) if t.len() == 4 => (Some(t[..2].parse().ok()?), Some(t[2..].parse().ok()?)),
        Some(t) if t.len() == 2 => (None, Some(t.parse().ok()?)),
        _ => (None, None),
    };
    if b.peak_wind.is_none() {
        b.peak_wind = Some(PeakWind { direction_degrees, speed_kt, hour, minute });
    }
    Some(3)
}

static TIME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{2}|\d{4})$").unwrap());

fn wind_shift(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    if rest.first() != Some(&"WSHFT") {
        return None;
    }
    let time_tok = rest.get(1)?;
    let caps = TIME_RE.captures(time_tok)?;
    let t = &caps[1];
    let (hour, minute) = if t.len() == 4 {
        (Some(t[..2].parse().ok()?), t[2..].parse().ok()?)
    } else {
        (None, t.parse().ok()?)
    };
    let frontal_passage = rest.get(2) == Some(&"FROPA");
    if b.wind_shift.is_none() {
        b.wind_shift = Some(WindShift { hour, minute, frontal_passage });
    }
    Some(if frontal_passage { 3 } else { 2 })
}

fn tower_visibility(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    if rest.first() != Some(&"TWR") || rest.get(1) != Some(&"VIS") {
        return None;
    }
    let (value, used) = parse_frac(&rest[2..])?;
    if b.tower_visibility.is_none() {
        b.tower_visibility = Some(crate::types::Visibility {
            distance_value: value,
            unit: crate::types::VisibilityUnit::StatuteMiles,
            less_than: false,
            greater_than: false,
            is_cavok: false,
            special_condition: None,
        });
    }
    Some(2 + used)
}

fn surface_visibility(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    if rest.first() != Some(&"SFC") || rest.get(1) != Some(&"VIS") {
        return None;
    }
    let (value, used) = parse_frac(&rest[2..])?;
    if b.surface_visibility.is_none() {
        b.surface_visibility = Some(crate::types::Visibility {
            distance_value: value,
            unit: crate::types::VisibilityUnit::StatuteMiles,
            less_than: false,
            greater_than: false,
            is_cavok: false,
            special_condition: None,
        });
    }
    Some(2 + used)
}

static VARIABLE_FRAC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(?:/\d+)?)V(\d+(?:/\d+)?)$").unwrap());

fn variable_visibility(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    if rest.first() != Some(&"VIS") {
        return None;
    }
    let mut idx = 1;
    let direction = rest.get(idx).and_then(|t| CompassDirection::from_code(t));
    if direction.is_some() {
        idx += 1;
    }
    let tok = rest.get(idx)?;
    let caps = VARIABLE_FRAC_RE.captures(tok)?;
    let min = parse_fraction(&caps[1])?;
    let max = parse_fraction(&caps[2])?;
    if min >= max {
        warn_skip(tok, &RecognizerError::semantic("variable visibility min must be less than max"));
        return None;
    }
    if b.variable_visibility.is_none() {
        b.variable_visibility = Some(VariableVisibility { min, max, direction });
    }
    Some(idx + 1)
}

static CIG_VARIABLE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{3})V(\d{3})$").unwrap());
static CIG_HEIGHT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\d{3})$").unwrap());

fn variable_ceiling(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    if rest.first() != Some(&"CIG") {
        return None;
    }
    let caps = CIG_VARIABLE_RE.captures(rest.get(1)?)?;
    let min_feet: u32 = caps[1].parse().ok()?;
    let max_feet: u32 = caps[2].parse().ok()?;
    let (min_feet, max_feet) = (min_feet * 100, max_feet * 100);
    if min_feet >= max_feet {
        warn_skip(rest[1], &RecognizerError::semantic("variable ceiling min must be less than max"));
        return None;
    }
    if b.variable_ceiling.is_none() {
        b.variable_ceiling = Some(VariableCeiling { min_feet, max_feet });
    }
    Some(2)
}

fn looks_like_location(tok: &str) -> bool {
    !tok.is_empty() && tok.len() <= 12 && tok.bytes().all(|b| b.is_ascii_uppercase())
}

fn ceiling_second_site(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    if rest.first() != Some(&"CIG") {
        return None;
    }
    let height_tok = rest.get(1)?;
    let caps = CIG_HEIGHT_RE.captures(height_tok)?;
    let height_feet: u32 = caps[1].parse::<u32>().ok()? * 100;
    let mut idx = 2;
    let location = rest.get(2).filter(|t| looks_like_location(t)).map(|t| {
        idx += 1;
        t.to_string()
    });
    if b.ceiling_second_site.is_none() {
        b.ceiling_second_site = Some(CeilingSecondSite { height_feet, location });
    }
    Some(idx)
}

static OBSCURATION_PHEN: &[(&str, WeatherPhenomenon)] = &[
    ("FG", WeatherPhenomenon::Fog),
    ("BR", WeatherPhenomenon::Mist),
    ("FU", WeatherPhenomenon::Smoke),
    ("HZ", WeatherPhenomenon::Haze),
    ("DU", WeatherPhenomenon::WidespreadDust),
    ("SA", WeatherPhenomenon::Sand),
    ("VA", WeatherPhenomenon::VolcanicAsh),
    ("PY", WeatherPhenomenon::Spray),
];

fn obscuration_layer(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    let coverage = match rest.first()? {
        &"FEW" => SkyCoverage::Few,
        &"SCT" => SkyCoverage::Sct,
        &"BKN" => SkyCoverage::Bkn,
        &"OVC" => SkyCoverage::Ovc,
        _ => return None,
    };
    let phen_tok = rest.get(1)?;
    let phenomenon = OBSCURATION_PHEN.iter().find(|(code, _)| code == phen_tok).map(|(_, p)| *p)?;
    let height_tok = rest.get(2)?;
    if !is_plain_int(height_tok) || height_tok.len() != 3 {
        return None;
    }
    let height_feet: u32 = height_tok.parse::<u32>().ok()? * 100;
    b.obscuration_layers.push(ObscurationLayer { coverage, phenomenon, height_feet });
    Some(3)
}

fn convective_cloud_code(tok: &str) -> Option<ConvectiveCloudCode> {
    Some(match tok {
        "TS" => ConvectiveCloudCode::Ts,
        "CB" => ConvectiveCloudCode::Cb,
        "TCU" => ConvectiveCloudCode::Tcu,
        "ACC" => ConvectiveCloudCode::Acc,
        "CBMAM" => ConvectiveCloudCode::Cbmam,
        "VIRGA" => ConvectiveCloudCode::Virga,
        _ => return None,
    })
}

fn location_qualifier(tok: &str) -> Option<LocationQualifier> {
    match tok {
        "OHD" => Some(LocationQualifier::Overhead),
        "VC" => Some(LocationQualifier::InVicinity),
        "DSNT" => Some(LocationQualifier::Distant),
        "DSIPTD" => Some(LocationQualifier::Dissipated),
        "TOP" => Some(LocationQualifier::Top),
        "TR" => Some(LocationQualifier::Tornado),
        _ => None,
    }
}

/// `(TS|CB|TCU|ACC|CBMAM|VIRGA) (qualifier)? (dir(-dir)?)? (MOV dir)?`.
///
/// `CB`/`TCU`/`ACC` also name plain cloud-type codes; a bare occurrence
/// with no qualifier, direction, or movement is left for [`cloud_type`] to
/// claim instead, since in practice a location-free mention of those three
/// codes is almost always just a cloud-type annotation.
fn thunderstorm_location(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    let code = *rest.first()?;
    let cloud_code = convective_cloud_code(code)?;
    let mut idx = 1;
    let mut matched_extra = false;

    let qualifier = rest.get(idx).and_then(|t| location_qualifier(t));
    if qualifier.is_some() {
        idx += 1;
        matched_extra = true;
    }

    let mut direction = None;
    let mut direction_range = None;
    if let Some(tok) = rest.get(idx) {
        if let Some((a, c)) = tok.split_once('-') {
            if let (Some(da), Some(dc)) = (CompassDirection::from_code(a), CompassDirection::from_code(c)) {
                direction_range = Some((da, dc));
                idx += 1;
                matched_extra = true;
            }
        } else if let Some(d) = CompassDirection::from_code(tok) {
            direction = Some(d);
            idx += 1;
            matched_extra = true;
        }
    }

    let mut moving_direction = None;
    if rest.get(idx) == Some(&"MOV") {
        if let Some(d) = rest.get(idx + 1).and_then(|t| CompassDirection::from_code(t)) {
            moving_direction = Some(d);
            idx += 2;
            matched_extra = true;
        }
    }

    if !matched_extra && !matches!(cloud_code, ConvectiveCloudCode::Ts | ConvectiveCloudCode::Cbmam | ConvectiveCloudCode::Virga) {
        return None;
    }

    b.thunderstorm_locations.push(ThunderstormLocation {
        cloud_code,
        qualifier,
        direction,
        direction_range,
        moving_direction,
    });
    Some(idx)
}

static CLOUD_TYPE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([+-])?(CB|TCU|CU|SC|AC|AS|NS|CI|CS|CC|SF|ACC)(\d)?$").unwrap()
});

fn cloud_type(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    let caps = CLOUD_TYPE_RE.captures(rest.first()?)?;
    let intensity = caps.get(1).and_then(|m| m.as_str().chars().next());
    let code = caps[2].to_string();
    let oktas = caps.get(3).and_then(|m| m.as_str().parse().ok());

    let mut idx = 1;
    let mut location = None;
    if let Some(tok) = rest.get(idx) {
        if matches!(*tok, "OHD" | "TR" | "DSNT" | "VC") || CompassDirection::from_code(tok).is_some() || is_dir_range(tok) {
            location = Some((*tok).to_string());
            idx += 1;
        }
    }

    let mut movement = None;
    if rest.get(idx) == Some(&"MOVG") {
        if let Some(dir) = rest.get(idx + 1) {
            movement = Some(format!("MOVG {dir}"));
            idx += 2;
        }
    }

    b.cloud_types.push(CloudTypeRemark { code, oktas, intensity, location, movement });
    Some(idx)
}

fn automated_maintenance(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    match rest.first()? {
        &"RVRNO" => {
            b.automated_maintenance_indicators.push(MaintenanceIndicator::Rvrno);
            Some(1)
        }
        &"PWINO" => {
            b.automated_maintenance_indicators.push(MaintenanceIndicator::Pwino);
            Some(1)
        }
        &"PNO" => {
            b.automated_maintenance_indicators.push(MaintenanceIndicator::Pno);
            Some(1)
        }
        &"FZRANO" => {
            b.automated_maintenance_indicators.push(MaintenanceIndicator::Fzrano);
            Some(1)
        }
        &"TSNO" => {
            b.automated_maintenance_indicators.push(MaintenanceIndicator::Tsno);
            Some(1)
        }
        &"$" => {
            b.automated_maintenance_indicators.push(MaintenanceIndicator::Dollar);
            b.maintenance_required = true;
            Some(1)
        }
        &"VISNO" => {
            let mut idx = 1;
            let loc = rest.get(1).filter(|t| looks_like_location(t)).map(|t| {
                idx += 1;
                t.to_string()
            });
            b.automated_maintenance_indicators
                .push(MaintenanceIndicator::Visno(loc.unwrap_or_default()));
            Some(idx)
        }
        &"CHINO" => {
            let mut idx = 1;
            let loc = rest.get(1).filter(|t| looks_like_location(t)).map(|t| {
                idx += 1;
                t.to_string()
            });
            b.automated_maintenance_indicators
                .push(MaintenanceIndicator::Chino(loc.unwrap_or_default()));
            Some(idx)
        }
        _ => None,
    }
}

fn automated_station(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    let raw = *rest.first()?;
    let normalized = normalize_prefix(raw);
    if !normalized.starts_with("AO") || normalized.len() != 3 {
        return None;
    }
    match normalized.as_bytes()[2] {
        b'1' => {
            if b.automated_station_type.is_none() {
                b.automated_station_type = Some(AutomatedStationType::Ao1);
            }
            Some(1)
        }
        b'2' => {
            if b.automated_station_type.is_none() {
                b.automated_station_type = Some(AutomatedStationType::Ao2);
            }
            Some(1)
        }
        d if d.is_ascii_digit() => {
            warn_skip(raw, &RecognizerError::semantic("unknown automated station type"));
            None
        }
        _ => None,
    }
}

static SLP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^SLP(\d{3})$").unwrap());

fn sea_level_pressure(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    let tok = *rest.first()?;
    if tok == "SLPNO" {
        return Some(1);
    }
    let caps = SLP_RE.captures(tok)?;
    let xyz: u16 = caps[1].parse().ok()?;
    if b.sea_level_pressure.is_none() {
        b.sea_level_pressure = Some(Pressure {
            value: decode_sea_level_pressure(xyz),
            unit: PressureUnit::Hectopascals,
        });
    }
    Some(1)
}

static T_GROUP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^T(\d)(\d{3})(?:(\d)(\d{3}))?$").unwrap());

fn precise_temperature(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    let tok = *rest.first()?;
    let caps = T_GROUP_RE.captures(tok)?;
    let sign1: u8 = caps[1].parse().ok()?;
    let tenths1: u16 = caps[2].parse().ok()?;
    let celsius = decode_signed_tenths(sign1, tenths1);
    let dewpoint_celsius = match (caps.get(3), caps.get(4)) {
        (Some(s), Some(t)) => {
            let sign2: u8 = s.as_str().parse().ok()?;
            let tenths2: u16 = t.as_str().parse().ok()?;
            Some(decode_signed_tenths(sign2, tenths2))
        }
        _ => None,
    };
    if b.precise_temperature.is_none() {
        b.precise_temperature = Some(Temperature { celsius, dewpoint_celsius });
    }
    Some(1)
}

fn decode_precip(digits: &str) -> Option<(Option<f64>, bool)> {
    if digits == "////" {
        return Some((None, true));
    }
    let n: u32 = digits.parse().ok()?;
    Some((Some(n as f64 / 100.0), false))
}

static HOURLY_PRECIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^P(\d{4}|////)$").unwrap());

fn hourly_precip(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    let caps = HOURLY_PRECIP_RE.captures(rest.first()?)?;
    let (inches, is_trace) = decode_precip(&caps[1])?;
    if b.hourly_precipitation.is_none() {
        b.hourly_precipitation = Some(PrecipitationAmount { inches, is_trace, period_hours: 1 });
    }
    Some(1)
}

static SIX_HOUR_PRECIP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^6(\d{4}|////)$").unwrap());

fn six_hour_precip(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    let caps = SIX_HOUR_PRECIP_RE.captures(rest.first()?)?;
    let (inches, is_trace) = decode_precip(&caps[1])?;
    if b.six_hour_precipitation.is_none() {
        b.six_hour_precipitation = Some(PrecipitationAmount { inches, is_trace, period_hours: 6 });
    }
    Some(1)
}

static TWENTY_FOUR_HOUR_PRECIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^7(\d{4}|////)$").unwrap());

fn twenty_four_hour_precip(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    let caps = TWENTY_FOUR_HOUR_PRECIP_RE.captures(rest.first()?)?;
    let (inches, is_trace) = decode_precip(&caps[1])?;
    if b.twenty_four_hour_precipitation.is_none() {
        b.twenty_four_hour_precipitation = Some(PrecipitationAmount { inches, is_trace, period_hours: 24 });
    }
    Some(1)
}

static PRESSURE_TENDENCY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^5([0-8])(\d{3})$").unwrap());

fn pressure_tendency(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    let tok = *rest.first()?;
    let caps = PRESSURE_TENDENCY_RE.captures(tok)?;
    let code: u8 = caps[1].parse().ok()?;
    let tenths: u32 = caps[2].parse().ok()?;
    let change_hpa = tenths as f64 / 10.0;
    if change_hpa > 50.0 {
        warn_skip(tok, &RecognizerError::semantic("pressure tendency change exceeds 50.0 hPa"));
        return None;
    }
    if b.pressure_tendency.is_none() {
        b.pressure_tendency = Some(PressureTendency { code, change_hpa });
    }
    Some(1)
}

static SIX_HOUR_MAX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^1(\d)(\d{3})$").unwrap());

fn six_hour_max_temp(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    let caps = SIX_HOUR_MAX_RE.captures(rest.first()?)?;
    let sign: u8 = caps[1].parse().ok()?;
    let tenths: u16 = caps[2].parse().ok()?;
    if b.six_hour_max_temperature.is_none() {
        b.six_hour_max_temperature = Some(decode_signed_tenths(sign, tenths));
    }
    Some(1)
}

static SIX_HOUR_MIN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^2(\d)(\d{3})$").unwrap());

fn six_hour_min_temp(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    let caps = SIX_HOUR_MIN_RE.captures(rest.first()?)?;
    let sign: u8 = caps[1].parse().ok()?;
    let tenths: u16 = caps[2].parse().ok()?;
    if b.six_hour_min_temperature.is_none() {
        b.six_hour_min_temperature = Some(decode_signed_tenths(sign, tenths));
    }
    Some(1)
}

static TWENTY_FOUR_HOUR_MAXMIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^4(\d)(\d{3})(\d)(\d{3})$").unwrap());

fn twenty_four_hour_max_min(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    let caps = TWENTY_FOUR_HOUR_MAXMIN_RE.captures(rest.first()?)?;
    let max_sign: u8 = caps[1].parse().ok()?;
    let max_tenths: u16 = caps[2].parse().ok()?;
    let min_sign: u8 = caps[3].parse().ok()?;
    let min_tenths: u16 = caps[4].parse().ok()?;
    if b.twenty_four_hour_max_temperature.is_none() {
        b.twenty_four_hour_max_temperature = Some(decode_signed_tenths(max_sign, max_tenths));
    }
    if b.twenty_four_hour_min_temperature.is_none() {
        b.twenty_four_hour_min_temperature = Some(decode_signed_tenths(min_sign, min_tenths));
    }
    Some(1)
}

fn hail(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    if rest.first() != Some(&"GR") {
        return None;
    }
    let (value, used) = parse_frac(&rest[1..])?;
    if b.hail_size_inches.is_none() {
        b.hail_size_inches = Some(value);
    }
    Some(1 + used)
}

/// Parse a single `([-+]|VC)?<code>([BE]\d{2,4})+` token into its
/// intensity, code, and marks, without touching `b` or neighboring tokens.
fn weather_event_token(
    tok: &str,
) -> Option<(Option<crate::types::WeatherIntensity>, String, Vec<WeatherEventMark>)> {
    let mut s = tok;
    let intensity = if let Some(stripped) = s.strip_prefix('-') {
        s = stripped;
        Some(crate::types::WeatherIntensity::Light)
    } else if let Some(stripped) = s.strip_prefix('+') {
        s = stripped;
        Some(crate::types::WeatherIntensity::Heavy)
    } else if let Some(stripped) = s.strip_prefix("VC") {
        s = stripped;
        Some(crate::types::WeatherIntensity::InVicinity)
    } else {
        None
    };

    if s.len() < 2 || !s.as_bytes()[..2].iter().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    let code = s[..2].to_string();
    let mut tail = &s[2..];
    let mut marks = Vec::new();
    while !tail.is_empty() {
        let kind = match tail.as_bytes()[0] {
            b'B' => WeatherEventMarkKind::Begin,
            b'E' => WeatherEventMarkKind::End,
            _ => return None,
        };
        tail = &tail[1..];
        let digit_len = tail.bytes().take_while(u8::is_ascii_digit).count();
        if digit_len != 2 && digit_len != 4 {
            return None;
        }
        let digits = &tail[..digit_len];
        tail = &tail[digit_len..];
        let (hour, minute) = if digit_len == 4 {
            (Some(digits[..2].parse().ok()?), digits[2..].parse().ok()?)
        } else {
            (None, digits.parse().ok()?)
        };
        marks.push(WeatherEventMark { kind, hour, minute });
    }
    if marks.is_empty() {
        return None;
    }
    Some((intensity, code, marks))
}

/// `([-+]|VC)?<code>([BE]\d{2,4})+` chained across consecutive tokens: a
/// following token that itself matches the same grammar continues the
/// chain, reusing the position left off by the previous token's last mark
/// rather than starting an unrelated event.
fn weather_event(rest: &[&str], b: &mut Remarks) -> Option<usize> {
    let (intensity, code, mut marks) = weather_event_token(rest.first()?)?;
    let mut used = 1;
    while let Some((_, _, more)) = rest.get(used).and_then(|tok| weather_event_token(tok)) {
        marks.extend(more);
        used += 1;
    }
    b.weather_events.push(WeatherEvent {
        intensity,
        code,
        marks,
    });
    Some(used)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn automated_station_type_recognized() {
        let r = scan("AO2 SLP201");
        assert_eq!(r.automated_station_type, Some(AutomatedStationType::Ao2));
    }

    #[test]
    fn invalid_automated_station_skipped_to_free_text() {
        let r = scan("AO9 SLP210");
        assert_eq!(r.automated_station_type, None);
        assert_eq!(r.free_text.as_deref(), Some("AO9"));
    }

    #[test]
    fn precise_temperature_decoded() {
        let r = scan("T02330139");
        let t = r.precise_temperature.unwrap();
        assert!((t.celsius - 23.3).abs() < 1e-9);
        assert_eq!(t.dewpoint_celsius, Some(13.9));
    }

    #[test]
    fn peak_wind_and_wind_shift() {
        let r = scan("PK WND 28045/1528 WSHFT 1530 FROPA");
        let pk = r.peak_wind.unwrap();
        assert_eq!(pk.direction_degrees, 280);
        assert_eq!(pk.speed_kt, 45);
        assert_eq!(pk.hour, Some(15));
        assert_eq!(pk.minute, Some(28));
        let ws = r.wind_shift.unwrap();
        assert_eq!(ws.minute, 30);
        assert!(ws.frontal_passage);
    }

    #[test]
    fn surface_visibility_disambiguated_from_cloud_type() {
        let r = scan("SFC VIS 1 1/2");
        assert_eq!(r.surface_visibility.unwrap().distance_value, 1.5);
    }

    #[test]
    fn pressure_tendency_rejects_large_change() {
        let r = scan("58501");
        assert!(r.pressure_tendency.is_none());
        assert_eq!(r.free_text.as_deref(), Some("58501"));
    }

    #[test]
    fn sea_level_pressure_decoded() {
        let r = scan("SLP201");
        assert_eq!(r.sea_level_pressure.unwrap().value, 1020.1);
    }
}
