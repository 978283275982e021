use std::fmt;

use chumsky::error::Rich;
use chumsky::extra;
use chumsky::prelude::*;

use crate::traits::Parsable;

/// Sky coverage (oktas, bucketed the way METAR reports them).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SkyCoverage {
    /// Sky clear, observed by a human (`SKC`).
    Skc,
    /// Sky clear, reported by an automated station (`CLR`).
    Clr,
    /// No significant cloud below 5000ft. Also produced for the ICAO `NCD`
    /// ("no cloud detected") code, an explicit coercion carried over from
    /// the source this crate's decoding rules were distilled from.
    Nsc,
    /// Few clouds, 1-2 oktas.
    Few,
    /// Scattered clouds, 3-4 oktas.
    Sct,
    /// Broken clouds, 5-7 oktas.
    Bkn,
    /// Overcast, 8 oktas.
    Ovc,
    /// Vertical visibility into an indefinite ceiling.
    Vv,
}

impl fmt::Display for SkyCoverage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SkyCoverage::Skc => "SKC",
            SkyCoverage::Clr => "CLR",
            SkyCoverage::Nsc => "NSC",
            SkyCoverage::Few => "FEW",
            SkyCoverage::Sct => "SCT",
            SkyCoverage::Bkn => "BKN",
            SkyCoverage::Ovc => "OVC",
            SkyCoverage::Vv => "VV",
        })
    }
}

/// A convective cloud type annotation on a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CloudType {
    /// Cumulonimbus.
    Cb,
    /// Towering cumulus.
    Tcu,
}

impl fmt::Display for CloudType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CloudType::Cb => "CB",
            CloudType::Tcu => "TCU",
        })
    }
}

/// A single reported sky layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkyCondition {
    /// The oktas bucket (or `Vv` for indefinite ceiling).
    pub coverage: SkyCoverage,
    /// Height in feet AGL, a multiple of 100. `None` for clear/unknown sky,
    /// required for `Vv`.
    pub height_feet: Option<u32>,
    /// Convective cloud type, when annotated.
    pub cloud_type: Option<CloudType>,
}

impl SkyCondition {
    /// True for coverage amounts FMH-1 treats as a reportable ceiling
    /// (broken, overcast, or an indefinite vertical-visibility ceiling).
    pub fn is_ceiling(&self) -> bool {
        matches!(
            self.coverage,
            SkyCoverage::Bkn | SkyCoverage::Ovc | SkyCoverage::Vv
        )
    }
}

impl fmt::Display for SkyCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.coverage)?;
        match self.height_feet {
            Some(h) => write!(f, "{:03}", h / 100)?,
            None => f.write_str("///")?,
        }
        if let Some(t) = self.cloud_type {
            write!(f, "{t}")?;
        }
        Ok(())
    }
}

impl Parsable for SkyCondition {
    fn parser<'src>() -> impl Parser<'src, &'src str, Self, extra::Err<Rich<'src, char>>> {
        let clear = choice((
            just("SKC").to(SkyCoverage::Skc),
            just("CLR").to(SkyCoverage::Clr),
            just("NSC").to(SkyCoverage::Nsc),
            just("NCD").to(SkyCoverage::Nsc),
        ))
        .map(|coverage| SkyCondition {
            coverage,
            height_feet: None,
            cloud_type: None,
        });

        let coverage = choice((
            just("FEW").to(SkyCoverage::Few),
            just("SCT").to(SkyCoverage::Sct),
            just("BKN").to(SkyCoverage::Bkn),
            just("OVC").to(SkyCoverage::Ovc),
            just("VV").to(SkyCoverage::Vv),
        ));

        let height = choice((
            just("///").map(|_| None),
            text::digits(10)
                .exactly(3)
                .to_slice()
                .map(|d: &str| Some(d.parse::<u32>().unwrap() * 100)),
        ));

        let cloud_type = choice((
            just("TCU").map(|_| Some(CloudType::Tcu)),
            just("CB").map(|_| Some(CloudType::Cb)),
            empty().map(|()| None),
        ));

        let layer = group((coverage, height, cloud_type)).try_map(
            |(coverage, height_feet, cloud_type), span| {
                if coverage == SkyCoverage::Vv && height_feet.is_none() {
                    return Err(Rich::custom(
                        span,
                        "vertical visibility requires a height",
                    ));
                }
                Ok(SkyCondition {
                    coverage,
                    height_feet,
                    cloud_type,
                })
            },
        );

        choice((clear, layer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_few_layer() {
        let s = SkyCondition::parse("FEW250").unwrap();
        assert_eq!(s.coverage, SkyCoverage::Few);
        assert_eq!(s.height_feet, Some(25000));
    }

    #[test]
    fn parses_ncd_as_nsc() {
        let s = SkyCondition::parse("NCD").unwrap();
        assert_eq!(s.coverage, SkyCoverage::Nsc);
    }

    #[test]
    fn vertical_visibility_requires_height() {
        assert!(SkyCondition::parse("VV///").is_err());
        let s = SkyCondition::parse("VV003").unwrap();
        assert_eq!(s.height_feet, Some(300));
        assert!(s.is_ceiling());
    }

    #[test]
    fn cloud_type_annotation() {
        let s = SkyCondition::parse("BKN020CB").unwrap();
        assert_eq!(s.cloud_type, Some(CloudType::Cb));
        assert!(s.is_ceiling());
    }
}
