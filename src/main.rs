use ledstrip_secrets::broker::{client_id, mqtt_options};
use ledstrip_secrets::Config;
use std::process::ExitCode;
use tracing::{error, info, warn};

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Error loading configuration: {:?}", e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "Configuration loaded: {} subscribe topics, {} publish topics, broker {}",
        config.num_sub_topics(),
        config.num_topics(),
        config.broker.address()
    );

    if let Err(e) = config.validate() {
        warn!("Configuration still has placeholders: {}", e);
    } else {
        let options = mqtt_options(&config, &client_id());
        info!("MQTT client id would be '{}'", options.client_id());
    }

    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Failed to serialize configuration: {:?}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
