//! WiFi and MQTT settings for the LED strip firmware.
//!
//! [`secrets`] holds the compiled-in template. [`config::Config`] is the same
//! table loaded at runtime with environment overrides, and [`broker`] turns it
//! into client options.

pub mod broker;
pub mod config;
pub mod models;
pub mod secrets;

pub use config::{Config, ConfigError};
pub use models::{BrokerEndpoint, Signal, WifiCredentials};
