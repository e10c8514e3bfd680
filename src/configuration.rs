use crate::domain::MailboxAddress;
use crate::email_client::EmailClient;
use secrecy::{ExposeSecret, SecretBox, SecretString};
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::time::Duration;

#[derive(serde::Deserialize, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(serde::Deserialize, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    /// Path prefix the contact route is mounted under, e.g. `/api`.
    pub base_path: String,
}

#[derive(serde::Deserialize, Debug)]
pub struct EmailClientSettings {
    pub base_url: String,
    /// Fixed destination of every contact message.
    pub recipient: MailboxAddress,
    pub username: String,
    pub password: SecretBox<String>,
    #[serde(
        rename = "timeout_milliseconds",
        deserialize_with = "deserialize_duration_from_millis"
    )]
    pub timeout: Duration,
}

impl EmailClientSettings {
    pub fn client(&self) -> Result<EmailClient, reqwest::Error> {
        EmailClient::new(
            self.base_url.clone(),
            self.username.clone(),
            SecretString::from(self.password.expose_secret().clone()),
            self.timeout,
        )
    }
}

fn deserialize_duration_from_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let millis = u64::deserialize(deserializer)?;
    Ok(Duration::from_millis(millis))
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
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!("{} is not a valid environment", other)),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(
            configuration_directory.join("base.yaml"),
        ))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        // Provider credentials keep their conventional deployment names.
        .set_override_option("email_client.username", std::env::var("EMAIL_USERNAME").ok())?
        .set_override_option("email_client.password", std::env::var("EMAIL_PASSWORD").ok())?
        .build()?;

    settings.try_deserialize::<Settings>()
}
