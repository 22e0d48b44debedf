use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

use crate::domain::ContactEmail;

/// Thin client for the transactional email provider. The only part of the
/// provider contract consumed here is "HTTP 2xx means accepted for delivery".
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: ContactEmail,
    recipient: ContactEmail,
    authorization_token: Option<Secret<String>>,
}

#[derive(thiserror::Error, Debug)]
pub enum EmailClientError {
    #[error("no provider authorization token is configured")]
    MissingAuthorizationToken,
    #[error("request to the email provider failed")]
    Request(#[from] reqwest::Error),
}

impl EmailClient {
    pub fn new(
        base_url: String,
        sender: ContactEmail,
        recipient: ContactEmail,
        authorization_token: Option<Secret<String>>,
        timeout: std::time::Duration,
    ) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap();
        Self {
            http_client,
            base_url,
            sender,
            recipient,
            authorization_token,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.authorization_token.is_some()
    }

    /// Forward one contact message to the provider. `reply_to` carries the
    /// submitter's address so the recipient can answer them directly.
    pub async fn send_contact_email(
        &self,
        reply_to: &ContactEmail,
        subject: &str,
        html_content: &str,
    ) -> Result<(), EmailClientError> {
        let authorization_token = self
            .authorization_token
            .as_ref()
            .ok_or(EmailClientError::MissingAuthorizationToken)?;
        let url = format!("{}/emails", self.base_url);
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: self.recipient.as_ref(),
            reply_to: reply_to.as_ref(),
            subject,
            html: html_content,
        };
        self.http_client
            .post(&url)
            .bearer_auth(authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    reply_to: &'a str,
    subject: &'a str,
    html: &'a str,
}
