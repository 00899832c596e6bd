use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    infra::http_client,
    use_cases::waitlist::EmailSender,
};

/// Sends transactional email through the Resend HTTP API from one fixed sender.
#[derive(Clone)]
pub struct ResendEmailSender {
    client: Client,
    endpoint: Url,
    api_key: SecretString,
    from: String,
}

impl ResendEmailSender {
    /// `api_url` is the API root, e.g. `https://api.resend.com`.
    pub fn new(api_url: &Url, api_key: SecretString, from: String) -> AppResult<Self> {
        let mut endpoint = api_url.clone();
        endpoint
            .path_segments_mut()
            .map_err(|_| AppError::NotificationFailure(format!("Invalid email API URL: {api_url}")))?
            .pop_if_empty()
            .push("emails");

        Ok(Self {
            client: http_client::build_client(),
            endpoint,
            api_key,
            from,
        })
    }
}

#[derive(Serialize)]
struct ResendReq<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        let body = ResendReq {
            from: &self.from,
            to: [to],
            subject,
            html,
        };

        self.client
            .post(self.endpoint.clone())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::NotificationFailure(format!("Failed to send email: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::NotificationFailure(format!("Email API error: {e}")))?;

        tracing::debug!(to = %to, "Email accepted by Resend");
        Ok(())
    }
}
