//! Compiled-in credentials and topic names.
//!
//! Fill in the empty values before building the firmware, or leave them empty
//! and provide the same names through the environment / a `.env` file (see
//! [`crate::config::Config::from_env`]). Do not commit real credentials.

// WiFi
pub const WIFI_SSID: &str = "";
pub const WIFI_PASSWORD: &str = "";

// MQTT broker
pub const MQTT_BROKER: &str = "";
pub const MQTT_USERNAME: &str = "";
pub const MQTT_PASSWORD: &str = "";
pub const MQTT_PORT: u16 = 1883;

// Topics the strip listens on
pub const SUB_TOPIC_LIGHT_INTENSITY: &str = "";
pub const SUB_TOPIC_DELAY_BETWEEN_PIX: &str = "";
pub const SUB_TOPIC_LED_ON_DURATION: &str = "";
pub const SUB_TOPIC_LED_COLOR: &str = "";
pub const SUB_TOPIC_LED_ENABLED: &str = "";
pub const SUB_TOPIC_LED_STATE_REQUEST: &str = "";

// Topics the strip reports its state on
pub const PUB_TOPIC_LIGHT_INTENSITY: &str = "";
pub const PUB_TOPIC_DELAY_BETWEEN_PIX: &str = "";
pub const PUB_TOPIC_LED_ON_DURATION: &str = "";
pub const PUB_TOPIC_LED_COLOR: &str = "";
pub const PUB_TOPIC_LED_ENABLED: &str = "";

/// Every subscribe topic, in channel order.
pub const SUB_TOPICS: &[&str] = &[
    SUB_TOPIC_LIGHT_INTENSITY,
    SUB_TOPIC_DELAY_BETWEEN_PIX,
    SUB_TOPIC_LED_ON_DURATION,
    SUB_TOPIC_LED_COLOR,
    SUB_TOPIC_LED_ENABLED,
    SUB_TOPIC_LED_STATE_REQUEST,
];
pub const NUM_SUB_TOPICS: usize = SUB_TOPICS.len();

/// Every publish topic, in channel order. There is no state-request channel here.
pub const TOPICS: &[&str] = &[
    PUB_TOPIC_LIGHT_INTENSITY,
    PUB_TOPIC_DELAY_BETWEEN_PIX,
    PUB_TOPIC_LED_ON_DURATION,
    PUB_TOPIC_LED_COLOR,
    PUB_TOPIC_LED_ENABLED,
];
pub const NUM_TOPICS: usize = TOPICS.len();

/// Environment variable names matching `SUB_TOPICS`, position for position.
pub(crate) const SUB_TOPIC_NAMES: [&str; NUM_SUB_TOPICS] = [
    "SUB_TOPIC_LIGHT_INTENSITY",
    "SUB_TOPIC_DELAY_BETWEEN_PIX",
    "SUB_TOPIC_LED_ON_DURATION",
    "SUB_TOPIC_LED_COLOR",
    "SUB_TOPIC_LED_ENABLED",
    "SUB_TOPIC_LED_STATE_REQUEST",
];

/// Environment variable names matching `TOPICS`, position for position.
pub(crate) const TOPIC_NAMES: [&str; NUM_TOPICS] = [
    "PUB_TOPIC_LIGHT_INTENSITY",
    "PUB_TOPIC_DELAY_BETWEEN_PIX",
    "PUB_TOPIC_LED_ON_DURATION",
    "PUB_TOPIC_LED_COLOR",
    "PUB_TOPIC_LED_ENABLED",
];
