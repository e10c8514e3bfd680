use crate::domain::EmailMessage;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("No credentials are configured for the email provider")]
    MissingCredentials,
    #[error("The email provider did not accept the message")]
    Delivery(#[from] reqwest::Error),
}

pub struct EmailClient {
    http_client: reqwest::Client,
    base_url: String,
    username: String,
    password: SecretString,
}

impl EmailClient {
    pub fn new(
        base_url: String,
        username: String,
        password: SecretString,
        timeout_duration: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout_duration)
            .build()?;

        Ok(Self {
            http_client,
            base_url,
            username,
            password,
        })
    }

    fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.expose_secret().is_empty()
    }

    /// Asks the provider to deliver exactly one message.
    #[tracing::instrument(name = "Dispatching an email", skip(self, message))]
    pub async fn send_email(&self, message: &EmailMessage) -> Result<(), DispatchError> {
        if !self.has_credentials() {
            return Err(DispatchError::MissingCredentials);
        }

        let url = format!("{}/api/send", self.base_url);
        let request_body = SendEmailRequest {
            from: EmailInfo {
                email: &message.from,
            },
            to: vec![EmailInfo { email: &message.to }],
            subject: message.subject.as_str().into(),
            text: message.body.as_str().into(),
        };
        self.http_client
            .post(&url)
            .basic_auth(&self.username, Some(self.password.expose_secret()))
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct EmailInfo<'a> {
    pub email: &'a str,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SendEmailRequest<'a> {
    #[serde(borrow)]
    pub from: EmailInfo<'a>,
    #[serde(borrow)]
    pub to: Vec<EmailInfo<'a>>,
    #[serde(borrow)]
    pub subject: Cow<'a, str>,
    #[serde(borrow)]
    pub text: Cow<'a, str>,
}
