use std::fmt;

use chumsky::error::Rich;
use chumsky::extra;
use chumsky::prelude::*;

use crate::traits::Parsable;

/// Intensity/proximity qualifier on a weather phenomenon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeatherIntensity {
    /// `-` prefix — light intensity.
    Light,
    /// `+` prefix — heavy intensity.
    Heavy,
    /// `VC` prefix — observed in the vicinity of the station, not at it.
    InVicinity,
}

/// The descriptor slot (`MI`, `BC`, `TS`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeatherDescriptor {
    /// `MI` — shallow.
    Shallow,
    /// `PR` — partial.
    Partial,
    /// `BC` — patches.
    Patches,
    /// `DR` — low drifting.
    LowDrifting,
    /// `BL` — blowing.
    Blowing,
    /// `SH` — showers.
    Showers,
    /// `TS` — thunderstorm.
    Thunderstorm,
    /// `FZ` — freezing.
    Freezing,
}

/// A precipitation, obscuration, or "other" phenomenon code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeatherPhenomenon {
    /// `DZ` — drizzle.
    Drizzle,
    /// `RA` — rain.
    Rain,
    /// `SN` — snow.
    Snow,
    /// `SG` — snow grains.
    SnowGrains,
    /// `IC` — ice crystals.
    IceCrystals,
    /// `PL` — ice pellets.
    IcePellets,
    /// `GR` — hail.
    Hail,
    /// `GS` — small hail or snow pellets.
    SmallHail,
    /// `UP` — unknown precipitation, typically from an automated station.
    UnknownPrecipitation,
    /// `BR` — mist.
    Mist,
    /// `FG` — fog.
    Fog,
    /// `FU` — smoke.
    Smoke,
    /// `VA` — volcanic ash.
    VolcanicAsh,
    /// `DU` — widespread dust.
    WidespreadDust,
    /// `SA` — sand.
    Sand,
    /// `HZ` — haze.
    Haze,
    /// `PY` — spray.
    Spray,
    /// `PO` — dust or sand whirls.
    DustOrSandWhirls,
    /// `SQ` — squall.
    Squall,
    /// `FC` — funnel cloud (or tornado/waterspout).
    FunnelCloud,
    /// `SS` — sandstorm.
    Sandstorm,
    /// `DS` — duststorm.
    Duststorm,
}

/// A single present-weather code, e.g. `+TSRA` or the `NSW` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PresentWeather {
    /// Leading intensity/proximity marker, when reported.
    pub intensity: Option<WeatherIntensity>,
    /// Descriptor slot (`MI`, `BC`, `TS`, ...), when reported.
    pub descriptor: Option<WeatherDescriptor>,
    /// Precipitation-type code, when the phenomenon is a precipitation.
    pub precipitation: Option<WeatherPhenomenon>,
    /// Obscuration-type code, when the phenomenon is an obscuration.
    pub obscuration: Option<WeatherPhenomenon>,
    /// "Other" phenomenon code (squall, funnel cloud, sand/dust storm).
    pub other: Option<WeatherPhenomenon>,
    /// The distinguished `NSW` ("no significant weather") sentinel.
    pub is_nsw: bool,
}

impl fmt::Display for PresentWeather {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nsw {
            return f.write_str("NSW");
        }
        if let Some(i) = self.intensity {
            f.write_str(match i {
                WeatherIntensity::Light => "-",
                WeatherIntensity::Heavy => "+",
                WeatherIntensity::InVicinity => "VC",
            })?;
        }
        if let Some(d) = self.descriptor {
            f.write_str(descriptor_code(d))?;
        }
        for phen in [self.precipitation, self.obscuration, self.other]
            .into_iter()
            .flatten()
        {
            f.write_str(phenomenon_code(phen))?;
        }
        Ok(())
    }
}

fn descriptor_code(d: WeatherDescriptor) -> &'static str {
    match d {
        WeatherDescriptor::Shallow => "MI",
        WeatherDescriptor::Partial => "PR",
        WeatherDescriptor::Patches => "BC",
        WeatherDescriptor::LowDrifting => "DR",
        WeatherDescriptor::Blowing => "BL",
        WeatherDescriptor::Showers => "SH",
        WeatherDescriptor::Thunderstorm => "TS",
        WeatherDescriptor::Freezing => "FZ",
    }
}

fn phenomenon_code(p: WeatherPhenomenon) -> &'static str {
    match p {
        WeatherPhenomenon::Drizzle => "DZ",
        WeatherPhenomenon::Rain => "RA",
        WeatherPhenomenon::Snow => "SN",
        WeatherPhenomenon::SnowGrains => "SG",
        WeatherPhenomenon::IceCrystals => "IC",
        WeatherPhenomenon::IcePellets => "PL",
        WeatherPhenomenon::Hail => "GR",
        WeatherPhenomenon::SmallHail => "GS",
        WeatherPhenomenon::UnknownPrecipitation => "UP",
        WeatherPhenomenon::Mist => "BR",
        WeatherPhenomenon::Fog => "FG",
        WeatherPhenomenon::Smoke => "FU",
        WeatherPhenomenon::VolcanicAsh => "VA",
        WeatherPhenomenon::WidespreadDust => "DU",
        WeatherPhenomenon::Sand => "SA",
        WeatherPhenomenon::Haze => "HZ",
        WeatherPhenomenon::Spray => "PY",
        WeatherPhenomenon::DustOrSandWhirls => "PO",
        WeatherPhenomenon::Squall => "SQ",
        WeatherPhenomenon::FunnelCloud => "FC",
        WeatherPhenomenon::Sandstorm => "SS",
        WeatherPhenomenon::Duststorm => "DS",
    }
}

fn precip_code<'src>() -> impl Parser<'src, &'src str, WeatherPhenomenon, extra::Err<Rich<'src, char>>>
{
    choice((
        just("DZ").to(WeatherPhenomenon::Drizzle),
        just("RA").to(WeatherPhenomenon::Rain),
        just("SN").to(WeatherPhenomenon::Snow),
        just("SG").to(WeatherPhenomenon::SnowGrains),
        just("IC").to(WeatherPhenomenon::IceCrystals),
        just("PL").to(WeatherPhenomenon::IcePellets),
        just("GR").to(WeatherPhenomenon::Hail),
        just("GS").to(WeatherPhenomenon::SmallHail),
        just("UP").to(WeatherPhenomenon::UnknownPrecipitation),
    ))
}

fn obs_code<'src>() -> impl Parser<'src, &'src str, WeatherPhenomenon, extra::Err<Rich<'src, char>>>
{
    choice((
        just("BR").to(WeatherPhenomenon::Mist),
        just("FG").to(WeatherPhenomenon::Fog),
        just("FU").to(WeatherPhenomenon::Smoke),
        just("VA").to(WeatherPhenomenon::VolcanicAsh),
        just("DU").to(WeatherPhenomenon::WidespreadDust),
        just("SA").to(WeatherPhenomenon::Sand),
        just("HZ").to(WeatherPhenomenon::Haze),
        just("PY").to(WeatherPhenomenon::Spray),
    ))
}

fn other_code<'src>() -> impl Parser<'src, &'src str, WeatherPhenomenon, extra::Err<Rich<'src, char>>>
{
    choice((
        just("PO").to(WeatherPhenomenon::DustOrSandWhirls),
        just("SQ").to(WeatherPhenomenon::Squall),
        just("FC").to(WeatherPhenomenon::FunnelCloud),
        just("SS").to(WeatherPhenomenon::Sandstorm),
        just("DS").to(WeatherPhenomenon::Duststorm),
    ))
}

impl Parsable for PresentWeather {
    fn parser<'src>() -> impl Parser<'src, &'src str, Self, extra::Err<Rich<'src, char>>> {
        let intensity = choice((
            just("-").to(Some(WeatherIntensity::Light)),
            just("+").to(Some(WeatherIntensity::Heavy)),
            just("VC").to(Some(WeatherIntensity::InVicinity)),
            empty().to(None),
        ));

        let descriptor = choice((
            just("MI").to(Some(WeatherDescriptor::Shallow)),
            just("PR").to(Some(WeatherDescriptor::Partial)),
            just("BC").to(Some(WeatherDescriptor::Patches)),
            just("DR").to(Some(WeatherDescriptor::LowDrifting)),
            just("BL").to(Some(WeatherDescriptor::Blowing)),
            just("SH").to(Some(WeatherDescriptor::Showers)),
            just("TS").to(Some(WeatherDescriptor::Thunderstorm)),
            just("FZ").to(Some(WeatherDescriptor::Freezing)),
            empty().to(None),
        ));

        let nsw = just("NSW").map(|_| PresentWeather {
            intensity: None,
            descriptor: None,
            precipitation: None,
            obscuration: None,
            other: None,
            is_nsw: true,
        });

        let general = group((
            intensity,
            descriptor,
            precip_code().or_not(),
            obs_code().or_not(),
            other_code().or_not(),
        ))
        .try_map(
            |(intensity, descriptor, precipitation, obscuration, other), span| {
                if intensity.is_none()
                    && descriptor.is_none()
                    && precipitation.is_none()
                    && obscuration.is_none()
                    && other.is_none()
                {
                    return Err(Rich::custom(span, "no present-weather capture matched"));
                }
                Ok(PresentWeather {
                    intensity,
                    descriptor,
                    precipitation,
                    obscuration,
                    other,
                    is_nsw: false,
                })
            },
        );

        choice((nsw, general))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_thunderstorm_rain() {
        let w = PresentWeather::parse("TSRA").unwrap();
        assert_eq!(w.descriptor, Some(WeatherDescriptor::Thunderstorm));
        assert_eq!(w.precipitation, Some(WeatherPhenomenon::Rain));
    }

    #[test]
    fn parses_light_drizzle() {
        let w = PresentWeather::parse("-DZ").unwrap();
        assert_eq!(w.intensity, Some(WeatherIntensity::Light));
        assert_eq!(w.precipitation, Some(WeatherPhenomenon::Drizzle));
    }

    #[test]
    fn nsw_is_distinguished() {
        let w = PresentWeather::parse("NSW").unwrap();
        assert!(w.is_nsw);
    }

    #[test]
    fn empty_capture_rejected() {
        assert!(PresentWeather::parse("").is_err());
    }
}
