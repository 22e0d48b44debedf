use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::domain::ContactEmail;

#[derive(serde::Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(serde::Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(serde::Deserialize, Clone)]
pub struct EmailClientSettings {
    pub base_url: String,
    pub sender_email: String,
    pub recipient_email: String,
    /// Provider credential. Never stored in the config file; supplied via
    /// `APP_EMAIL_CLIENT__AUTHORIZATION_TOKEN`. When absent the relay runs in
    /// "not configured" mode and answers 503.
    pub authorization_token: Option<Secret<String>>,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
}

impl EmailClientSettings {
    pub fn sender(&self) -> Result<ContactEmail, String> {
        ContactEmail::parse(self.sender_email.clone())
    }

    pub fn recipient(&self) -> Result<ContactEmail, String> {
        ContactEmail::parse(self.recipient_email.clone())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.timeout_milliseconds)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let mut settings = config::Config::default();

    // Read config file
    settings.merge(config::File::with_name("config"))?;

    // Environment overrides, e.g. APP_APPLICATION__PORT=8001
    settings.merge(config::Environment::with_prefix("app").separator("__"))?;

    // Parse config file into Setting struct
    settings.try_into()
}
