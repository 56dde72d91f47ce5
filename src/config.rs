use dotenvy::dotenv;
use log::{debug, info, warn};
use serde::Serialize;
use std::collections::HashMap;
use std::env::{self, VarError};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{BrokerEndpoint, Signal, WifiCredentials};
use crate::secrets;

/// Non-topic settings that can be overridden from the environment.
const SETTING_NAMES: [&str; 7] = [
    "WIFI_SSID",
    "WIFI_PASSWORD",
    "MQTT_BROKER",
    "MQTT_USERNAME",
    "MQTT_PASSWORD",
    "MQTT_PORT",
    "MQTT_ROOT_TOPIC",
];

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub wifi: WifiCredentials,
    pub broker: BrokerEndpoint,

    pub sub_topics: Vec<String>,
    pub topics: Vec<String>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Environment variable {0} is missing or invalid.")]
    MissingOrInvalid(String),
    #[error("Parsing error: {0}")]
    ParsingError(String),
    #[error("Topic {name} = '{topic}' may not contain MQTT wildcards.")]
    InvalidTopic { name: String, topic: String },
    #[error("Failed to load .env file: {0}")]
    DotEnv(String),
}

/// Prefix `topic` with `root`, keeping exactly one `/` at the seam.
fn prepend_root_topic(root: &str, topic: &str) -> String {
    let root = root.trim_matches('/');
    if root.is_empty() || topic.is_empty() {
        topic.to_string()
    } else {
        format!("{}/{}", root, topic.trim_start_matches('/'))
    }
}

/// A missing `.env` is fine, anything else it fails with is not.
fn check_dotenv(result: Result<PathBuf, dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(path) => {
            info!("Loaded environment from {}", path.display());
            Ok(())
        }
        Err(e) if e.not_found() => {
            debug!("No .env file found, using process environment only.");
            Ok(())
        }
        Err(e) => Err(ConfigError::DotEnv(e.to_string())),
    }
}

/// Unset is `None`. A value that isn't UTF-8 is reported rather than skipped.
fn env_value(key: &str, result: Result<String, VarError>) -> Result<Option<String>, ConfigError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => {
            warn!("Environment variable {} is not valid UTF-8", key);
            Err(ConfigError::MissingOrInvalid(key.to_string()))
        }
    }
}

impl Default for Config {
    /// The compiled-in table, untouched.
    fn default() -> Self {
        Self {
            wifi: WifiCredentials {
                ssid: secrets::WIFI_SSID.to_string(),
                password: secrets::WIFI_PASSWORD.to_string(),
            },
            broker: BrokerEndpoint {
                host: secrets::MQTT_BROKER.to_string(),
                port: secrets::MQTT_PORT,
                username: secrets::MQTT_USERNAME.to_string(),
                password: secrets::MQTT_PASSWORD.to_string(),
            },
            sub_topics: secrets::SUB_TOPICS.iter().map(|t| t.to_string()).collect(),
            topics: secrets::TOPICS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load `.env` from the working directory (or a parent), then the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        check_dotenv(dotenv())?;
        Self::from_process_env()
    }

    /// Same as [`Config::from_env`] with an explicit `.env` path.
    pub fn from_env_file(path: &Path) -> Result<Self, ConfigError> {
        check_dotenv(dotenvy::from_path(path).map(|_| path.to_path_buf()))?;
        Self::from_process_env()
    }

    fn from_process_env() -> Result<Self, ConfigError> {
        let mut values = HashMap::new();
        let names = SETTING_NAMES
            .iter()
            .chain(secrets::SUB_TOPIC_NAMES.iter())
            .chain(secrets::TOPIC_NAMES.iter());
        for name in names {
            if let Some(value) = env_value(name, env::var(name))? {
                values.insert(*name, value);
            }
        }

        Self::from_lookup(|key| values.get(key).cloned())
    }

    /// Build the configuration from `lookup`, falling back to the compiled-in
    /// value for every key it doesn't know.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, fallback: &str| {
            lookup(key).unwrap_or_else(|| fallback.to_string())
        };

        let mqtt_port = match lookup("MQTT_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                ConfigError::ParsingError("MQTT_PORT must be a valid number".to_string())
            })?,
            None => secrets::MQTT_PORT,
        };

        let root_topic = lookup("MQTT_ROOT_TOPIC").unwrap_or_default();
        if root_topic.contains(['+', '#']) {
            return Err(ConfigError::InvalidTopic {
                name: "MQTT_ROOT_TOPIC".to_string(),
                topic: root_topic,
            });
        }
        if !root_topic.is_empty() {
            debug!("Prepending root topic '{}'", root_topic);
        }

        let sub_topics = secrets::SUB_TOPIC_NAMES
            .into_iter()
            .zip(secrets::SUB_TOPICS.iter().copied())
            .map(|(name, fallback)| prepend_root_topic(&root_topic, &text(name, fallback)))
            .collect();
        let topics = secrets::TOPIC_NAMES
            .into_iter()
            .zip(secrets::TOPICS.iter().copied())
            .map(|(name, fallback)| prepend_root_topic(&root_topic, &text(name, fallback)))
            .collect();

        let config = Self {
            // WiFi
            wifi: WifiCredentials {
                ssid: text("WIFI_SSID", secrets::WIFI_SSID),
                password: text("WIFI_PASSWORD", secrets::WIFI_PASSWORD),
            },

            // MQTT broker
            broker: BrokerEndpoint {
                host: text("MQTT_BROKER", secrets::MQTT_BROKER),
                port: mqtt_port,
                username: text("MQTT_USERNAME", secrets::MQTT_USERNAME),
                password: text("MQTT_PASSWORD", secrets::MQTT_PASSWORD),
            },

            sub_topics,
            topics,
        };

        debug!(
            "Configuration loaded: {} subscribe topics, {} publish topics",
            config.num_sub_topics(),
            config.num_topics()
        );

        Ok(config)
    }

    pub fn num_sub_topics(&self) -> usize {
        self.sub_topics.len()
    }

    pub fn num_topics(&self) -> usize {
        self.topics.len()
    }

    pub fn sub_topic(&self, signal: Signal) -> Option<&str> {
        self.sub_topics.get(signal.sub_index()).map(String::as_str)
    }

    pub fn pub_topic(&self, signal: Signal) -> Option<&str> {
        signal
            .pub_index()
            .and_then(|i| self.topics.get(i))
            .map(String::as_str)
    }

    /// Check that the placeholders have been filled in with something usable.
    ///
    /// Loading never rejects empty values, so callers decide whether to run this.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.wifi.ssid.is_empty() {
            return Err(ConfigError::MissingOrInvalid("WIFI_SSID".to_string()));
        }
        if self.broker.host.is_empty() {
            return Err(ConfigError::MissingOrInvalid("MQTT_BROKER".to_string()));
        }
        if self.broker.port == 0 {
            return Err(ConfigError::ParsingError(
                "MQTT_PORT must be between 1 and 65535".to_string(),
            ));
        }

        for (name, topic) in secrets::SUB_TOPIC_NAMES.iter().zip(&self.sub_topics) {
            if topic.is_empty() {
                return Err(ConfigError::MissingOrInvalid(name.to_string()));
            }
        }
        for (name, topic) in secrets::TOPIC_NAMES.iter().zip(&self.topics) {
            if topic.is_empty() {
                return Err(ConfigError::MissingOrInvalid(name.to_string()));
            }
            if topic.contains(['+', '#']) {
                return Err(ConfigError::InvalidTopic {
                    name: name.to_string(),
                    topic: topic.clone(),
                });
            }
        }

        Ok(())
    }
}
