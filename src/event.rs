//! Hardware event and identifier types.
//!
//! These types are intentionally serializable so host notification layers
//! can carry them across delivery boundaries.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete events delivered by the GPS status source while tracking is
/// active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GpsEvent {
    /// The GPS engine started searching. Informational only.
    Started,
    /// The GPS engine stopped. Any held fix is lost.
    Stopped,
    /// A first position fix was acquired.
    FirstFix,
}

/// Identifier of the user whose settings the monitor reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    /// The device owner.
    pub const OWNER: Self = Self(0);

    /// Wrap a raw user id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Raw user id value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "user:{}", self.0)
    }
}

/// Capabilities a user may be restricted from using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Sharing the device location with apps and services.
    ShareLocation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gps_event_serde_tag_format() {
        let json = serde_json::to_string(&GpsEvent::FirstFix).unwrap();
        assert_eq!(json, "{\"type\":\"first_fix\"}");

        let event: GpsEvent = serde_json::from_str("{\"type\":\"stopped\"}").unwrap();
        assert_eq!(event, GpsEvent::Stopped);
    }

    #[test]
    fn user_id_display_and_raw() {
        let user = UserId::new(10);
        assert_eq!(user.raw(), 10);
        assert_eq!(user.to_string(), "user:10");
        assert_eq!(UserId::OWNER.raw(), 0);
    }
}
