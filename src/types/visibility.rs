use std::fmt;

use chumsky::error::Rich;
use chumsky::extra;
use chumsky::prelude::*;

use crate::parsers::parse_fraction;
use crate::traits::Parsable;

const METERS_PER_STATUTE_MILE: f64 = 1609.344;

/// The unit prevailing visibility (and several remark visibilities) is
/// reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VisibilityUnit {
    /// Statute miles, the North American default.
    StatuteMiles,
    /// Meters, the ICAO default outside North America.
    Meters,
}

/// Horizontal surface visibility.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Visibility {
    /// The reported distance. Meaningless (and zero) when `is_cavok`.
    pub distance_value: f64,
    /// The unit `distance_value` is expressed in.
    pub unit: VisibilityUnit,
    /// True if the value was prefixed `M` (less than).
    pub less_than: bool,
    /// True if the value was prefixed `P` (greater than).
    pub greater_than: bool,
    /// `CAVOK` — ceiling and visibility OK; excludes a distance value.
    pub is_cavok: bool,
    /// A qualifier such as `NDV` (no directional variation).
    pub special_condition: Option<String>,
}

impl Visibility {
    /// Distance in statute miles, converting from meters if needed.
    pub fn to_statute_miles(&self) -> f64 {
        match self.unit {
            VisibilityUnit::StatuteMiles => self.distance_value,
            VisibilityUnit::Meters => self.distance_value / METERS_PER_STATUTE_MILE,
        }
    }

    /// Distance in meters, converting from statute miles if needed.
    pub fn to_meters(&self) -> f64 {
        match self.unit {
            VisibilityUnit::Meters => self.distance_value,
            VisibilityUnit::StatuteMiles => self.distance_value * METERS_PER_STATUTE_MILE,
        }
    }

    fn cavok() -> Self {
        Self {
            distance_value: 0.0,
            unit: VisibilityUnit::Meters,
            less_than: false,
            greater_than: false,
            is_cavok: true,
            special_condition: None,
        }
    }

    fn ndv() -> Self {
        Self {
            distance_value: 0.0,
            unit: VisibilityUnit::Meters,
            less_than: false,
            greater_than: false,
            is_cavok: false,
            special_condition: Some("NDV".to_string()),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_cavok {
            return f.write_str("CAVOK");
        }
        if let Some(cond) = &self.special_condition {
            return f.write_str(cond);
        }
        if self.less_than {
            f.write_str("M")?;
        } else if self.greater_than {
            f.write_str("P")?;
        }
        match self.unit {
            VisibilityUnit::StatuteMiles => write!(f, "{}SM", self.distance_value),
            VisibilityUnit::Meters => write!(f, "{:04.0}", self.distance_value),
        }
    }
}

impl Parsable for Visibility {
    fn parser<'src>() -> impl Parser<'src, &'src str, Self, extra::Err<Rich<'src, char>>> {
        let unknown = just("////").map(|_| None);

        let statute_miles = group((
            one_of("MP").or_not(),
            text::digits(10).at_least(1).to_slice().or_not(),
            group((
                text::whitespace().at_least(1),
                one_of("0123456789"),
                just("/"),
                one_of("0123456789"),
            ))
            .to_slice()
            .or_not(),
            just("SM"),
        ))
        .try_map(|(prefix, whole, frac, _): (Option<char>, Option<&str>, Option<&str>, &str), span| {
            let mut text = String::new();
            if let Some(w) = whole {
                text.push_str(w);
            }
            if let Some(f) = frac {
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(f.trim());
            }
            if text.is_empty() {
                return Err(Rich::custom(span, "visibility missing distance"));
            }
            let value =
                parse_fraction(&text).ok_or_else(|| Rich::custom(span, "bad fraction"))?;
            Ok(Some(Visibility {
                distance_value: value,
                unit: VisibilityUnit::StatuteMiles,
                less_than: prefix == Some('M'),
                greater_than: prefix == Some('P'),
                is_cavok: false,
                special_condition: None,
            }))
        });

        let bare_fraction_sm = group((
            one_of("MP").or_not(),
            one_of("0123456789"),
            just("/"),
            one_of("0123456789"),
            just("SM"),
        ))
        .try_map(|(prefix, n, _, d, _), span| {
            let text = format!("{n}/{d}");
            let value =
                parse_fraction(&text).ok_or_else(|| Rich::custom(span, "bad fraction"))?;
            Ok(Some(Visibility {
                distance_value: value,
                unit: VisibilityUnit::StatuteMiles,
                less_than: prefix == Some('M'),
                greater_than: prefix == Some('P'),
                is_cavok: false,
                special_condition: None,
            }))
        });

        let meters = text::digits(10)
            .exactly(4)
            .to_slice()
            .map(|d: &str| {
                Some(Visibility {
                    distance_value: d.parse().unwrap(),
                    unit: VisibilityUnit::Meters,
                    less_than: false,
                    greater_than: false,
                    is_cavok: false,
                    special_condition: None,
                })
            });

        choice((
            just("CAVOK").map(|_| Some(Visibility::cavok())),
            just("NDV").map(|_| Some(Visibility::ndv())),
            statute_miles,
            bare_fraction_sm,
            meters,
            unknown,
        ))
        .try_map(|v, span| v.ok_or_else(|| Rich::custom(span, "unknown visibility")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cavok() {
        let v = Visibility::parse("CAVOK").unwrap();
        assert!(v.is_cavok);
    }

    #[test]
    fn parses_statute_miles_whole() {
        let v = Visibility::parse("10SM").unwrap();
        assert_eq!(v.to_statute_miles(), 10.0);
    }

    #[test]
    fn parses_statute_miles_mixed_fraction() {
        let v = Visibility::parse("1 1/2SM").unwrap();
        assert_eq!(v.to_statute_miles(), 1.5);
    }

    #[test]
    fn parses_statute_miles_bare_fraction() {
        let v = Visibility::parse("1/2SM").unwrap();
        assert_eq!(v.to_statute_miles(), 0.5);
    }

    #[test]
    fn parses_meters() {
        let v = Visibility::parse("0800").unwrap();
        assert_eq!(v.to_meters(), 800.0);
    }

    #[test]
    fn round_trips_to_meters() {
        let v = Visibility {
            distance_value: 1.0,
            unit: VisibilityUnit::StatuteMiles,
            less_than: false,
            greater_than: false,
            is_cavok: false,
            special_condition: None,
        };
        assert!((v.to_meters() - METERS_PER_STATUTE_MILE).abs() < 0.001);
    }
}
