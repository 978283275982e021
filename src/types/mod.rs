//! Immutable value types that make up a decoded [`crate::Observation`].
//!
//! Each type here owns its own [`crate::traits::Parsable`] implementation,
//! exposing a per-type `parser()` associated function.

mod compass;
mod pressure;
mod rvr;
mod sky;
mod temperature;
mod visibility;
mod weather;
mod wind;

pub use compass::CompassDirection;
pub use pressure::{Pressure, PressureUnit};
pub use rvr::{RunwayVisualRange, RvrPrefix, RvrTrend};
pub use sky::{CloudType, SkyCondition, SkyCoverage};
pub use temperature::Temperature;
pub use visibility::{Visibility, VisibilityUnit};
pub use weather::{PresentWeather, WeatherDescriptor, WeatherIntensity, WeatherPhenomenon};
pub use wind::{Wind, WindUnit};

use std::fmt;

/// Data that is present in the report grammar but whose value the station
/// could not measure (rendered as slashes, e.g. `////`).
///
/// This differs from `Option<T>`, which this crate uses when a whole field
/// is simply absent from the report; `Data<T>` is for fields the grammar
/// *does* include a slot for, but the slot was filled with `/` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Data<T> {
    /// The data is known and given.
    Known(T),
    /// The data isn't or cannot be known.
    #[default]
    Unknown,
}

impl<T> Data<T> {
    /// Converts to an `Option`, discarding the "explicitly unknown" vs
    /// "simply absent" distinction.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            Data::Known(v) => Some(v),
            Data::Unknown => None,
        }
    }

    /// True if this slot carries a known value.
    pub fn is_known(&self) -> bool {
        matches!(self, Data::Known(_))
    }
}

impl<T: fmt::Display> fmt::Display for Data<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Data::Known(v) => v.fmt(f),
            Data::Unknown => f.write_str("//"),
        }
    }
}
