use std::time::Duration;

use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::analytics::AnalyticsClient;
use crate::relay_client::RelayClient;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formspree.io/f/YOUR_FORMSPREE_ID";

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub relay: RelaySettings,
    pub analytics: Option<AnalyticsSettings>,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    pub base_url: String,
    pub hmac_secret: Secret<String>,
}

#[derive(serde::Deserialize, Clone)]
pub struct RelaySettings {
    #[serde(default = "default_relay_endpoint")]
    pub endpoint: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
    /// Report relay failures to callers of the JSON endpoint instead of
    /// logging them and answering with success.
    #[serde(default)]
    pub surface_failures: bool,
}

fn default_relay_endpoint() -> String {
    DEFAULT_RELAY_ENDPOINT.to_owned()
}

impl RelaySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    pub fn client(&self) -> Result<RelayClient, anyhow::Error> {
        let endpoint = reqwest::Url::parse(&self.endpoint)?;
        Ok(RelayClient::new(endpoint, self.timeout())?)
    }
}

#[derive(serde::Deserialize, Clone)]
pub struct AnalyticsSettings {
    pub endpoint: String,
    pub measurement_id: String,
    pub api_secret: Secret<String>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl AnalyticsSettings {
    pub fn client(&self) -> Result<AnalyticsClient, anyhow::Error> {
        let endpoint = reqwest::Url::parse(&self.endpoint)?;
        Ok(AnalyticsClient::new(
            endpoint,
            self.measurement_id.clone(),
            self.api_secret.clone(),
            Duration::from_millis(self.timeout_milliseconds),
        )?)
    }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // E.g. `APP_RELAY__ENDPOINT=https://formspree.io/f/abc` sets `Settings.relay.endpoint`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
