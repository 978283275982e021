/// Automated station type (`AO1` lacks a precipitation discriminator,
/// `AO2` has one). `AO9` and other digits are semantically invalid and are
/// silently skipped by the recognizer, never reaching this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AutomatedStationType {
    /// `AO1` — automated station without a precipitation discriminator.
    Ao1,
    /// `AO2` — automated station with a precipitation discriminator.
    Ao2,
}

/// Decode a sea-level-pressure remark's three digits (`SLPxyz`) into
/// hectopascals: treat `xyz` as tenths; if `xyz >= 500`, prepend `9`,
/// else prepend `10`.
pub fn decode_sea_level_pressure(xyz: u16) -> f64 {
    if xyz >= 500 {
        (9000 + xyz) as f64 / 10.0
    } else {
        (10000 + xyz) as f64 / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_high_tenths_with_nine_prefix() {
        assert_eq!(decode_sea_level_pressure(201), 1020.1);
    }

    #[test]
    fn decodes_low_tenths_with_nine_prefix_boundary() {
        assert_eq!(decode_sea_level_pressure(500), 950.0);
        assert_eq!(decode_sea_level_pressure(999), 999.9);
    }

    #[test]
    fn decodes_with_ten_prefix_below_five_hundred() {
        assert_eq!(decode_sea_level_pressure(0), 1000.0);
        assert_eq!(decode_sea_level_pressure(499), 1049.9);
    }
}
