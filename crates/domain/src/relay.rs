//! Relay — a switchable output on the remote device, addressed over CoAP.
//!
//! The device firmware exposes one CoAP resource per relay and action,
//! named `relay<N><action>` (e.g. `relay1on`, `relay4off`).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

/// A relay number in `1..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RelayNumber(u8);

impl RelayNumber {
    /// Lowest valid relay number.
    pub const MIN: u8 = 1;
    /// Highest valid relay number.
    pub const MAX: u8 = 4;

    /// Validate and wrap a relay number.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::RelayOutOfRange`] outside `1..=4`.
    pub fn new(value: u8) -> Result<Self, ValidationError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::RelayOutOfRange)
        }
    }

    /// Every relay on the device, in ascending order.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self(1), Self(2), Self(3), Self(4)]
    }

    /// The raw number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl FromStr for RelayNumber {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s.parse().map_err(|_| ValidationError::RelayOutOfRange)?;
        let value = u8::try_from(value).map_err(|_| ValidationError::RelayOutOfRange)?;
        Self::new(value)
    }
}

impl fmt::Display for RelayNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What to do with a relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RelayAction {
    On,
    Off,
}

impl RelayAction {
    /// Lowercase wire name, as used in URLs and CoAP endpoints.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl FromStr for RelayAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            _ => Err(ValidationError::UnknownAction),
        }
    }
}

impl fmt::Display for RelayAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CoAP resource name for `relay` and `action`.
#[must_use]
pub fn endpoint(relay: RelayNumber, action: RelayAction) -> String {
    format!("relay{relay}{action}")
}

/// The CoAP server on the remote device.
///
/// `host` is kept in URL-literal form, so IPv6 addresses carry their
/// square brackets (`[fd12::1]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoapTarget {
    pub host: String,
    pub port: u16,
}

impl CoapTarget {
    /// Create a target from a URL-literal host and a UDP port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Full `coap://` URL of `endpoint` on this target.
    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!("coap://{}:{}/{endpoint}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_relays_one_through_four() {
        for n in 1..=4 {
            assert_eq!(RelayNumber::new(n).unwrap().get(), n);
        }
    }

    #[test]
    fn should_reject_relay_zero_and_five() {
        assert_eq!(RelayNumber::new(0), Err(ValidationError::RelayOutOfRange));
        assert_eq!(RelayNumber::new(5), Err(ValidationError::RelayOutOfRange));
    }

    #[test]
    fn should_parse_relay_from_path_segment() {
        assert_eq!("3".parse::<RelayNumber>().unwrap().get(), 3);
    }

    #[test]
    fn should_reject_negative_large_and_non_numeric_segments() {
        for raw in ["-1", "300", "99999999999999999999", "two", "", "1.5"] {
            assert_eq!(
                raw.parse::<RelayNumber>(),
                Err(ValidationError::RelayOutOfRange),
                "segment {raw:?}"
            );
        }
    }

    #[test]
    fn should_list_all_relays_in_order() {
        let all: Vec<u8> = RelayNumber::all().iter().map(|r| r.get()).collect();
        assert_eq!(all, vec![1, 2, 3, 4]);
    }

    #[test]
    fn should_parse_actions_case_sensitively() {
        assert_eq!("on".parse::<RelayAction>(), Ok(RelayAction::On));
        assert_eq!("off".parse::<RelayAction>(), Ok(RelayAction::Off));
        assert_eq!(
            "ON".parse::<RelayAction>(),
            Err(ValidationError::UnknownAction)
        );
        assert_eq!(
            "toggle".parse::<RelayAction>(),
            Err(ValidationError::UnknownAction)
        );
    }

    #[test]
    fn should_build_endpoint_name() {
        let relay = RelayNumber::new(1).unwrap();
        assert_eq!(endpoint(relay, RelayAction::On), "relay1on");
        let relay = RelayNumber::new(4).unwrap();
        assert_eq!(endpoint(relay, RelayAction::Off), "relay4off");
    }

    #[test]
    fn should_build_coap_url_with_bracketed_host() {
        let target = CoapTarget::new("[fd12::1]", 5683);
        assert_eq!(target.url("relay2on"), "coap://[fd12::1]:5683/relay2on");
    }
}
