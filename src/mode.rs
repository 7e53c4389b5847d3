//! Location mode values mirrored from the host settings store.
//!
//! The mode is owned and mutated externally; the monitor only reads and
//! mirrors it. Raw integer values match the host's settings enumeration.

use serde::{Deserialize, Serialize};

/// Positioning accuracy mode of the current user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationMode {
    /// Positioning disabled entirely.
    Off,
    /// GPS sensors only, no network assistance.
    SensorsOnly,
    /// Network-based positioning only; the GPS receiver stays off.
    BatterySaving,
    /// GPS plus network assistance.
    HighAccuracy,
}

impl LocationMode {
    /// Decode a raw settings value. Unknown values are treated as [`Off`].
    ///
    /// [`Off`]: LocationMode::Off
    #[must_use]
    pub const fn from_raw(raw: i32) -> Self {
        match raw {
            1 => Self::SensorsOnly,
            2 => Self::BatterySaving,
            3 => Self::HighAccuracy,
            _ => Self::Off,
        }
    }

    /// Raw settings value for this mode.
    #[must_use]
    pub const fn raw(self) -> i32 {
        match self {
            Self::Off => 0,
            Self::SensorsOnly => 1,
            Self::BatterySaving => 2,
            Self::HighAccuracy => 3,
        }
    }

    /// Whether the GPS subsystem counts as enabled in this mode.
    #[must_use]
    pub const fn gps_enabled(self) -> bool {
        matches!(self, Self::HighAccuracy | Self::SensorsOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_maps_known_values() {
        assert_eq!(LocationMode::from_raw(0), LocationMode::Off);
        assert_eq!(LocationMode::from_raw(1), LocationMode::SensorsOnly);
        assert_eq!(LocationMode::from_raw(2), LocationMode::BatterySaving);
        assert_eq!(LocationMode::from_raw(3), LocationMode::HighAccuracy);
    }

    #[test]
    fn from_raw_treats_unknown_values_as_off() {
        assert_eq!(LocationMode::from_raw(-1), LocationMode::Off);
        assert_eq!(LocationMode::from_raw(4), LocationMode::Off);
        assert_eq!(LocationMode::from_raw(i32::MAX), LocationMode::Off);
    }

    #[test]
    fn raw_round_trips_all_modes() {
        for mode in [
            LocationMode::Off,
            LocationMode::SensorsOnly,
            LocationMode::BatterySaving,
            LocationMode::HighAccuracy,
        ] {
            assert_eq!(LocationMode::from_raw(mode.raw()), mode);
        }
    }

    #[test]
    fn gps_enabled_only_for_high_accuracy_and_sensors_only() {
        assert!(LocationMode::HighAccuracy.gps_enabled());
        assert!(LocationMode::SensorsOnly.gps_enabled());
        assert!(!LocationMode::BatterySaving.gps_enabled());
        assert!(!LocationMode::Off.gps_enabled());
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&LocationMode::HighAccuracy).unwrap();
        assert_eq!(json, "\"high_accuracy\"");

        let mode: LocationMode = serde_json::from_str("\"sensors_only\"").unwrap();
        assert_eq!(mode, LocationMode::SensorsOnly);
    }
}
