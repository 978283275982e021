use std::fmt;

use chumsky::error::Rich;
use chumsky::extra;
use chumsky::prelude::*;

use crate::traits::Parsable;

/// Whether an RVR value was prefixed `P` (greater than) or `M` (less than).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RvrPrefix {
    /// `P` — the actual value is greater than the reported figure.
    GreaterThan,
    /// `M` — the actual value is less than the reported figure.
    LessThan,
}

/// The trend annotation on an RVR reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RvrTrend {
    /// `U` — the range is trending upward.
    Upward,
    /// `D` — the range is trending downward.
    Downward,
    /// `N` — the range is steady.
    NoChange,
}

/// Runway visual range for a single runway.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunwayVisualRange {
    /// Runway designator, e.g. `27L`.
    pub runway: String,
    /// Single reported range in feet, when not variable or cleared.
    pub visual_range_feet: Option<u32>,
    /// Lower bound of a variable range.
    pub variable_low: Option<u32>,
    /// Upper bound of a variable range.
    pub variable_high: Option<u32>,
    /// `P`/`M` qualifier on the reported value, when present.
    pub prefix: Option<RvrPrefix>,
    /// Trend annotation, when reported.
    pub trend: Option<RvrTrend>,
    /// `CLRD` — the RVR condition has cleared; no range is reported.
    pub is_cleared: bool,
}

impl RunwayVisualRange {
    /// True when the range was reported as a `low V high` variable pair.
    pub fn is_variable(&self) -> bool {
        self.variable_low.is_some() && self.variable_high.is_some()
    }

    /// True when the `CLRD` sentinel was reported instead of a range.
    pub fn is_cleared(&self) -> bool {
        self.is_cleared
    }
}

impl fmt::Display for RunwayVisualRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R{}/", self.runway)?;
        if self.is_cleared {
            return f.write_str("CLRD");
        }
        let prefix_str = |p: Option<RvrPrefix>| match p {
            Some(RvrPrefix::GreaterThan) => "P",
            Some(RvrPrefix::LessThan) => "M",
            None => "",
        };
        if self.is_variable() {
            write!(
                f,
                "{}{:04}V{:04}",
                prefix_str(self.prefix),
                self.variable_low.unwrap(),
                self.variable_high.unwrap()
            )?;
        } else if let Some(v) = self.visual_range_feet {
            write!(f, "{}{v:04}", prefix_str(self.prefix))?;
        }
        if let Some(t) = self.trend {
            f.write_str(match t {
                RvrTrend::Upward => "U",
                RvrTrend::Downward => "D",
                RvrTrend::NoChange => "N",
            })?;
        }
        Ok(())
    }
}

impl Parsable for RunwayVisualRange {
    fn parser<'src>() -> impl Parser<'src, &'src str, Self, extra::Err<Rich<'src, char>>> {
        let runway = group((
            text::digits(10).exactly(2).to_slice(),
            one_of("LCR").or_not(),
        ))
        .map(|(d, lcr): (&str, Option<char>)| match lcr {
            Some(c) => format!("{d}{c}"),
            None => d.to_string(),
        });

        let prefix = one_of("MP").or_not().map(|c| match c {
            Some('M') => Some(RvrPrefix::LessThan),
            Some('P') => Some(RvrPrefix::GreaterThan),
            _ => None,
        });

        let four_digits = text::digits(10)
            .exactly(4)
            .to_slice()
            .map(|d: &str| d.parse::<u32>().unwrap());

        let cleared = group((just("/"), just("CLRD"), text::digits(10).repeated().at_most(2)))
            .map(|_| RunwayVisualRange {
                runway: String::new(),
                visual_range_feet: None,
                variable_low: None,
                variable_high: None,
                prefix: None,
                trend: None,
                is_cleared: true,
            });

        let ranged = group((
            just("/"),
            prefix,
            four_digits,
            group((just("V"), one_of("MP").or_not(), four_digits)).or_not(),
            // A trailing numeric suffix with no `V` separator (e.g. `/040070`)
            // is a malformed variant seen in the wild; the leading four
            // digits are the range and any further digits are ignored.
            text::digits(10).repeated().collect::<Vec<_>>(),
            just("FT").or_not(),
            one_of("UDN").or_not(),
        ))
        .map(|(_, prefix, v1, variable, _extra_digits, _, trend)| {
            let trend = trend.map(|c| match c {
                'U' => RvrTrend::Upward,
                'D' => RvrTrend::Downward,
                _ => RvrTrend::NoChange,
            });
            match variable {
                Some((_, p2, v2)) => RunwayVisualRange {
                    runway: String::new(),
                    visual_range_feet: None,
                    variable_low: Some(v1),
                    variable_high: Some(v2),
                    prefix: prefix.or(p2.map(|c| {
                        if c == 'P' {
                            RvrPrefix::GreaterThan
                        } else {
                            RvrPrefix::LessThan
                        }
                    })),
                    trend,
                    is_cleared: false,
                },
                None => RunwayVisualRange {
                    runway: String::new(),
                    visual_range_feet: Some(v1),
                    variable_low: None,
                    variable_high: None,
                    prefix,
                    trend,
                    is_cleared: false,
                },
            }
        });

        just("R")
            .ignore_then(group((runway, choice((cleared, ranged)))))
            .map(|(runway, mut rvr)| {
                rvr.runway = runway;
                rvr
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_rvr() {
        let r = RunwayVisualRange::parse("R27L/4000FT").unwrap();
        assert_eq!(r.runway, "27L");
        assert_eq!(r.visual_range_feet, Some(4000));
    }

    #[test]
    fn parses_variable_rvr() {
        let r = RunwayVisualRange::parse("R06/1800V3000FT").unwrap();
        assert!(r.is_variable());
        assert_eq!(r.variable_low, Some(1800));
        assert_eq!(r.variable_high, Some(3000));
    }

    #[test]
    fn parses_cleared_rvr() {
        let r = RunwayVisualRange::parse("R24/CLRD").unwrap();
        assert!(r.is_cleared());
        assert_eq!(r.visual_range_feet, None);
    }

    #[test]
    fn parses_trend() {
        let r = RunwayVisualRange::parse("R27/4000FTD").unwrap();
        assert_eq!(r.trend, Some(RvrTrend::Downward));
    }
}
