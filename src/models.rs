use serde::{Serialize, Serializer};
use std::fmt;

use crate::secrets::{NUM_SUB_TOPICS, NUM_TOPICS};

/// Serialize a secret as `***` so dumps never leak it. Empty stays empty.
#[allow(clippy::ptr_arg)]
fn mask_secret<S: Serializer>(secret: &String, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(masked(secret))
}

fn masked(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        "***"
    }
}

#[derive(Serialize, Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    pub ssid: String,
    #[serde(serialize_with = "mask_secret")]
    pub password: String,
}

impl fmt::Debug for WifiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiCredentials")
            .field("ssid", &self.ssid)
            .field("password", &masked(&self.password))
            .finish()
    }
}

#[derive(Serialize, Clone, PartialEq, Eq)]
pub struct BrokerEndpoint {
    pub host: String,
    pub port: u16,
    pub username: String,
    #[serde(serialize_with = "mask_secret")]
    pub password: String,
}

impl BrokerEndpoint {
    /// The broker only gets a login when both halves of it are filled in.
    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Debug for BrokerEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrokerEndpoint")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &masked(&self.password))
            .finish()
    }
}

/// One controllable property of the LED strip.
///
/// The discriminant order is the order of `SUB_TOPICS`, so a signal can be used
/// to index either topic sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    LightIntensity,
    DelayBetweenPix,
    LedOnDuration,
    LedColor,
    LedEnabled,
    LedStateRequest,
}

impl Signal {
    pub const ALL: [Signal; NUM_SUB_TOPICS] = [
        Signal::LightIntensity,
        Signal::DelayBetweenPix,
        Signal::LedOnDuration,
        Signal::LedColor,
        Signal::LedEnabled,
        Signal::LedStateRequest,
    ];

    pub fn sub_index(self) -> usize {
        self as usize
    }

    /// Position in `TOPICS`. A state request is only ever received, never published.
    pub fn pub_index(self) -> Option<usize> {
        match self {
            Signal::LedStateRequest => None,
            other => Some(other as usize).filter(|i| *i < NUM_TOPICS),
        }
    }

    pub fn from_sub_index(index: usize) -> Option<Signal> {
        Self::ALL.get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(username: &str, password: &str) -> BrokerEndpoint {
        BrokerEndpoint {
            host: "broker.local".to_string(),
            port: 1883,
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn credentials_need_both_username_and_password() {
        assert!(endpoint("strip", "hunter2").has_credentials());
        assert!(!endpoint("strip", "").has_credentials());
        assert!(!endpoint("", "hunter2").has_credentials());
        assert!(!endpoint("", "").has_credentials());
    }

    #[test]
    fn address_joins_host_and_port() {
        assert_eq!(endpoint("", "").address(), "broker.local:1883");
    }

    #[test]
    fn passwords_are_masked_in_debug_and_json() {
        let broker = endpoint("strip", "hunter2");
        assert!(!format!("{:?}", broker).contains("hunter2"));

        let json = serde_json::to_value(&broker).unwrap();
        assert_eq!(json["password"], "***");
        assert_eq!(json["username"], "strip");

        let wifi = WifiCredentials {
            ssid: "home".to_string(),
            password: String::new(),
        };
        let json = serde_json::to_value(&wifi).unwrap();
        assert_eq!(json["password"], "");
    }

    #[test]
    fn signal_positions_follow_topic_order() {
        for (i, signal) in Signal::ALL.iter().enumerate() {
            assert_eq!(signal.sub_index(), i);
            assert_eq!(Signal::from_sub_index(i), Some(*signal));
        }
        assert_eq!(Signal::from_sub_index(NUM_SUB_TOPICS), None);
    }

    #[test]
    fn state_request_has_no_publish_topic() {
        assert_eq!(Signal::LedStateRequest.pub_index(), None);
        assert_eq!(Signal::LedEnabled.pub_index(), Some(4));
        assert_eq!(Signal::LightIntensity.pub_index(), Some(0));
    }
}
