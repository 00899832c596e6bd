use std::net::SocketAddr;

use axum::http::HeaderValue;
use env_helpers::{get_env, get_env_default};
use secrecy::SecretString;
use url::Url;

use crate::domain::entities::notification_failure_policy::NotificationFailurePolicy;

pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub resend_api_key: SecretString,
    /// Resend API root, overridable for local testing.
    pub resend_api_url: Url,
    /// Sender address of every outgoing email.
    pub email_from: String,
    pub airtable_api_key: SecretString,
    pub airtable_base_id: String,
    pub airtable_table_name: String,
    /// Airtable API root including the version segment.
    pub airtable_api_url: Url,
    pub notification_failure_policy: NotificationFailurePolicy,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url: String = get_env("DATABASE_URL");
        let bind_addr: SocketAddr =
            get_env_default("BIND_ADDR", SocketAddr::from(([127, 0, 0, 1], 3001)));
        let cors_origin: HeaderValue =
            get_env_default("CORS_ORIGIN", String::from("http://localhost:3000"))
                .parse()
                .expect("CORS_ORIGIN must be a valid header value");

        let resend_api_key = SecretString::new(get_env::<String>("RESEND_API_KEY").into());
        let resend_api_url: Url =
            get_env_default("RESEND_API_URL", String::from("https://api.resend.com"))
                .parse()
                .expect("RESEND_API_URL must be a valid URL");
        let email_from: String = get_env("EMAIL_FROM");

        let airtable_api_key = SecretString::new(get_env::<String>("AIRTABLE_API_KEY").into());
        let airtable_base_id: String = get_env("AIRTABLE_BASE_ID");
        let airtable_table_name: String = get_env("AIRTABLE_TABLE_NAME");
        let airtable_api_url: Url =
            get_env_default("AIRTABLE_API_URL", String::from("https://api.airtable.com/v0"))
                .parse()
                .expect("AIRTABLE_API_URL must be a valid URL");

        let notification_failure_policy: NotificationFailurePolicy =
            get_env_default("NOTIFICATION_FAILURE_POLICY", NotificationFailurePolicy::BestEffort);

        Self {
            database_url,
            bind_addr,
            cors_origin,
            resend_api_key,
            resend_api_url,
            email_from,
            airtable_api_key,
            airtable_base_id,
            airtable_table_name,
            airtable_api_url,
            notification_failure_policy,
        }
    }
}
