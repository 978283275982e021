use chumsky::error::Rich;
use chumsky::extra;
use chumsky::prelude::*;

use crate::traits::Parsable;

/// Air temperature and, where reported, dewpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Temperature {
    /// Air temperature in whole degrees Celsius (or tenths, for the
    /// remarks `T`-group precision).
    pub celsius: f64,
    /// Dewpoint in degrees Celsius, when reported alongside temperature.
    pub dewpoint_celsius: Option<f64>,
}

impl Temperature {
    /// Air temperature in degrees Fahrenheit.
    pub fn to_fahrenheit(&self) -> f64 {
        self.celsius * 9.0 / 5.0 + 32.0
    }

    /// Dewpoint in degrees Fahrenheit, when known.
    pub fn dewpoint_fahrenheit(&self) -> Option<f64> {
        self.dewpoint_celsius.map(|c| c * 9.0 / 5.0 + 32.0)
    }
}

fn signed_whole<'src>() -> impl Parser<'src, &'src str, Option<i32>, extra::Err<Rich<'src, char>>>
{
    choice((
        just("//").to(None),
        group((
            just("M").or_not(),
            text::digits(10).exactly(2).to_slice(),
        ))
        .map(|(sign, digits): (Option<&str>, &str)| {
            let v: i32 = digits.parse().unwrap();
            Some(if sign.is_some() { -v } else { v })
        }),
    ))
}

impl Parsable for Temperature {
    fn parser<'src>() -> impl Parser<'src, &'src str, Self, extra::Err<Rich<'src, char>>> {
        group((signed_whole(), just("/"), signed_whole().or_not()))
            .try_map(|(temp, _, dewp), span| {
                let celsius = match temp {
                    Some(c) => f64::from(c),
                    None => return Err(Rich::custom(span, "temperature missing")),
                };
                let dewpoint_celsius = dewp.flatten().map(f64::from);
                Ok(Temperature {
                    celsius,
                    dewpoint_celsius,
                })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_temperature() {
        let t = Temperature::parse("23/14").unwrap();
        assert_eq!(t.celsius, 23.0);
        assert_eq!(t.dewpoint_celsius, Some(14.0));
    }

    #[test]
    fn parses_negative_temperature() {
        let t = Temperature::parse("M05/M10").unwrap();
        assert_eq!(t.celsius, -5.0);
        assert_eq!(t.dewpoint_celsius, Some(-10.0));
    }

    #[test]
    fn missing_dewpoint() {
        let t = Temperature::parse("M05/").unwrap();
        assert_eq!(t.dewpoint_celsius, None);
    }

    #[test]
    fn fahrenheit_round_trip() {
        for c in [-50.0, -12.5, 0.0, 20.0, 50.0] {
            let t = Temperature {
                celsius: c,
                dewpoint_celsius: None,
            };
            let f = t.to_fahrenheit();
            let back = (f - 32.0) * 5.0 / 9.0;
            assert!((back - c).abs() < 0.01);
        }
    }
}
