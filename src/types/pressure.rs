use std::fmt;

use chumsky::error::Rich;
use chumsky::extra;
use chumsky::prelude::*;

use crate::traits::Parsable;

/// The unit an altimeter/QNH setting is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PressureUnit {
    /// Inches of mercury, the North American default.
    InchesHg,
    /// Hectopascals, the ICAO default outside North America.
    Hectopascals,
}

/// Station-level atmospheric pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pressure {
    /// The reported value, in `unit`'s units.
    pub value: f64,
    /// Unit the value is reported in.
    pub unit: PressureUnit,
}

impl Pressure {
    /// Value in inches of mercury, converting from hectopascals if needed.
    pub fn to_inches_hg(&self) -> f64 {
        match self.unit {
            PressureUnit::InchesHg => self.value,
            PressureUnit::Hectopascals => self.value / 33.863_9,
        }
    }

    /// Value in hectopascals, converting from inches of mercury if needed.
    pub fn to_hectopascals(&self) -> f64 {
        match self.unit {
            PressureUnit::Hectopascals => self.value,
            PressureUnit::InchesHg => self.value * 33.863_9,
        }
    }
}

impl fmt::Display for Pressure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            PressureUnit::InchesHg => write!(f, "A{:04.0}", self.value * 100.0),
            PressureUnit::Hectopascals => write!(f, "Q{:04.0}", self.value),
        }
    }
}

impl Parsable for Pressure {
    fn parser<'src>() -> impl Parser<'src, &'src str, Self, extra::Err<Rich<'src, char>>> {
        let inches_hg = choice((just("AA"), just("A")))
            .ignore_then(text::digits(10).exactly(4).to_slice())
            .map(|d: &str| Pressure {
                value: d.parse::<f64>().unwrap() / 100.0,
                unit: PressureUnit::InchesHg,
            });

        let hectopascals = choice((just("QNH"), just("Q")))
            .ignore_then(text::digits(10).at_least(3).at_most(4).to_slice())
            .map(|d: &str| Pressure {
                value: d.parse().unwrap(),
                unit: PressureUnit::Hectopascals,
            });

        let inches_hg_suffixed = text::digits(10)
            .exactly(4)
            .to_slice()
            .then_ignore(just("INS"))
            .map(|d: &str| Pressure {
                value: d.parse::<f64>().unwrap() / 100.0,
                unit: PressureUnit::InchesHg,
            });

        let bare_hectopascals = text::digits(10)
            .exactly(3)
            .to_slice()
            .map(|d: &str| Pressure {
                value: d.parse().unwrap(),
                unit: PressureUnit::Hectopascals,
            });

        choice((inches_hg, hectopascals, inches_hg_suffixed, bare_hectopascals))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_altimeter() {
        let p = Pressure::parse("A3012").unwrap();
        assert_eq!(p.unit, PressureUnit::InchesHg);
        assert!((p.value - 30.12).abs() < 1e-9);
    }

    #[test]
    fn parses_qnh() {
        let p = Pressure::parse("Q1013").unwrap();
        assert_eq!(p.unit, PressureUnit::Hectopascals);
        assert_eq!(p.value, 1013.0);
    }

    #[test]
    fn round_trips_units() {
        for p in [25.0, 29.92, 35.0] {
            let pr = Pressure {
                value: p,
                unit: PressureUnit::InchesHg,
            };
            let back = pr.to_hectopascals() / 33.8639;
            assert!((back - p).abs() < 0.1);
        }
    }
}
