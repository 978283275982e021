use std::fmt;

use chumsky::error::Rich;
use chumsky::extra;
use chumsky::prelude::*;

use crate::traits::Parsable;

/// The unit wind speed and gust speed are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WindUnit {
    /// Knots (nautical miles per hour), the North American default.
    Knots,
    /// Metres per second.
    MetresPerSecond,
    /// Kilometres per hour.
    KilometresPerHour,
}

impl fmt::Display for WindUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            WindUnit::Knots => "KT",
            WindUnit::MetresPerSecond => "MPS",
            WindUnit::KilometresPerHour => "KMH",
        })
    }
}

/// Surface wind: direction, speed, optional gust, and reporting unit.
///
/// `direction_degrees` is `None` both for a variable (`VRB`) direction and
/// for a calm (`00000`) report; `is_calm` disambiguates the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wind {
    /// Direction the wind is blowing *from*, in degrees true. `None` for
    /// `VRB` or for a calm report.
    pub direction_degrees: Option<u16>,
    /// Sustained wind speed.
    pub speed_value: u16,
    /// Gust speed, when reported; always greater than `speed_value`.
    pub gust_value: Option<u16>,
    /// Whether the direction was reported as variable (`VRB`) rather than
    /// simply calm.
    pub is_variable: bool,
    /// The unit `speed_value`/`gust_value` are expressed in.
    pub unit: WindUnit,
}

impl Wind {
    /// True for the calm report `00000KT` (direction and speed both zero).
    pub fn is_calm(&self) -> bool {
        !self.is_variable && self.direction_degrees.is_none() && self.speed_value == 0
    }

    /// Wind speed in knots, regardless of the unit it was reported in.
    pub fn speed_kt(&self) -> f64 {
        match self.unit {
            WindUnit::Knots => f64::from(self.speed_value),
            WindUnit::MetresPerSecond => f64::from(self.speed_value) * 1.943_844,
            WindUnit::KilometresPerHour => f64::from(self.speed_value) * 0.539_957,
        }
    }

    /// Wind speed in statute miles per hour.
    pub fn speed_mph(&self) -> f64 {
        self.speed_kt() * 1.150_779
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_variable {
            f.write_str("VRB")?;
        } else {
            write!(f, "{:03}", self.direction_degrees.unwrap_or(0))?;
        }
        write!(f, "{:02}", self.speed_value)?;
        if let Some(gust) = self.gust_value {
            write!(f, "G{gust:02}")?;
        }
        write!(f, "{}", self.unit)
    }
}

impl Parsable for Wind {
    fn parser<'src>() -> impl Parser<'src, &'src str, Self, extra::Err<Rich<'src, char>>> {
        let direction = choice((
            just("VRB").map(|_| (None, true)),
            text::digits(10)
                .exactly(3)
                .to_slice()
                .map(|d: &str| (Some(d.parse().unwrap()), false)),
        ));

        let speed = text::digits(10).at_least(2).at_most(3).to_slice();

        let gust = just("G")
            .ignore_then(text::digits(10).at_least(2).at_most(3).to_slice())
            .or_not();

        let unit = choice((
            just("KT").to(WindUnit::Knots),
            just("MPS").to(WindUnit::MetresPerSecond),
            just("KMH").to(WindUnit::KilometresPerHour),
        ));

        group((direction, speed, gust, unit)).try_map(
            |((direction_degrees, is_variable), speed, gust, unit): (
                (Option<u16>, bool),
                &str,
                Option<&str>,
                WindUnit,
            ),
             span| {
                let speed_value: u16 = speed
                    .parse()
                    .map_err(|_| Rich::custom(span, "invalid wind speed"))?;
                let gust_value = match gust {
                    Some(g) => {
                        let g: u16 = g
                            .parse()
                            .map_err(|_| Rich::custom(span, "invalid gust speed"))?;
                        if g <= speed_value {
                            return Err(Rich::custom(span, "gust must exceed sustained speed"));
                        }
                        Some(g)
                    }
                    None => None,
                };
                Ok(Wind {
                    direction_degrees,
                    speed_value,
                    gust_value,
                    is_variable,
                    unit,
                })
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_wind() {
        let w = Wind::parse("24008KT").unwrap();
        assert_eq!(w.direction_degrees, Some(240));
        assert_eq!(w.speed_value, 8);
        assert_eq!(w.gust_value, None);
        assert_eq!(w.unit, WindUnit::Knots);
    }

    #[test]
    fn parses_gusting_wind() {
        let w = Wind::parse("28016G22KT").unwrap();
        assert_eq!(w.speed_value, 16);
        assert_eq!(w.gust_value, Some(22));
    }

    #[test]
    fn parses_variable_wind() {
        let w = Wind::parse("VRB02KT").unwrap();
        assert_eq!(w.direction_degrees, None);
        assert!(w.is_variable);
    }

    #[test]
    fn calm_wind_is_calm() {
        let w = Wind::parse("00000KT").unwrap();
        assert!(w.is_calm());
    }
}
