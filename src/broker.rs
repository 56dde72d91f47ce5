use log::debug;
use rumqttc::MqttOptions;
use std::time::Duration;
use uuid::Uuid;

use crate::config::Config;

pub const KEEP_ALIVE: Duration = Duration::from_secs(10);

/// A fresh, unique MQTT client id for this strip.
pub fn client_id() -> String {
    format!("ledstrip_{}", Uuid::new_v4())
}

/// Connection options for the configured broker. Nothing is connected here.
pub fn mqtt_options(config: &Config, client_id: &str) -> MqttOptions {
    let broker = &config.broker;
    debug!("Configuring MQTT broker at {}...", broker.address());

    let mut mqtt_options = MqttOptions::new(client_id, broker.host.as_str(), broker.port);
    mqtt_options.set_keep_alive(KEEP_ALIVE);
    mqtt_options.set_clean_session(true);

    if broker.has_credentials() {
        mqtt_options.set_credentials(&broker.username, &broker.password);
    }

    mqtt_options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_login(username: &str, password: &str) -> Config {
        let mut config = Config::default();
        config.broker.host = "broker.local".to_string();
        config.broker.username = username.to_string();
        config.broker.password = password.to_string();
        config
    }

    #[test]
    fn client_ids_are_unique_and_prefixed() {
        let a = client_id();
        let b = client_id();
        assert!(a.starts_with("ledstrip_"));
        assert_ne!(a, b);
    }

    #[test]
    fn options_carry_endpoint_and_session_settings() {
        let config = config_with_login("", "");
        let options = mqtt_options(&config, "ledstrip_test");

        assert_eq!(options.broker_address(), ("broker.local".to_string(), 1883));
        assert_eq!(options.client_id(), "ledstrip_test");
        assert_eq!(options.keep_alive(), KEEP_ALIVE);
        assert!(options.clean_session());
        assert_eq!(options.credentials(), None);
    }

    #[test]
    fn credentials_only_set_when_complete() {
        let options = mqtt_options(&config_with_login("strip", "s3cret"), "id");
        assert_eq!(
            options.credentials(),
            Some(("strip".to_string(), "s3cret".to_string()))
        );

        let options = mqtt_options(&config_with_login("strip", ""), "id");
        assert_eq!(options.credentials(), None);
    }
}
