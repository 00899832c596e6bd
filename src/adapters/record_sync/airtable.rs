use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use url::Url;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    infra::http_client,
    use_cases::waitlist::RecordSync,
};

/// `MM/DD/YYYY hh:mm:ss AM|PM`, the layout the Airtable date column expects.
const JOIN_DATE_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// Appends one row per waitlist entry to an Airtable table.
#[derive(Clone)]
pub struct AirtableRecordSync {
    client: Client,
    endpoint: Url,
    api_key: SecretString,
}

impl AirtableRecordSync {
    /// `api_url` is the versioned API root, e.g. `https://api.airtable.com/v0`.
    pub fn new(
        api_url: &Url,
        api_key: SecretString,
        base_id: &str,
        table_name: &str,
    ) -> AppResult<Self> {
        let mut endpoint = api_url.clone();
        endpoint
            .path_segments_mut()
            .map_err(|_| AppError::SyncFailure(format!("Invalid Airtable API URL: {api_url}")))?
            .pop_if_empty()
            .push(base_id)
            .push(table_name);

        Ok(Self {
            client: http_client::build_client(),
            endpoint,
            api_key,
        })
    }
}

#[derive(Serialize)]
struct CreateRecordReq<'a> {
    fields: RecordFields<'a>,
}

#[derive(Serialize)]
struct RecordFields<'a> {
    #[serde(rename = "Full Name")]
    full_name: &'a str,
    #[serde(rename = "Email")]
    email: &'a str,
    #[serde(rename = "Join Date")]
    join_date: String,
}

pub fn format_join_date(join_date: &NaiveDateTime) -> String {
    join_date.format(JOIN_DATE_FORMAT).to_string()
}

#[async_trait]
impl RecordSync for AirtableRecordSync {
    async fn push(&self, entry: &WaitlistEntry) -> AppResult<()> {
        let body = CreateRecordReq {
            fields: RecordFields {
                full_name: &entry.full_name,
                email: &entry.email,
                join_date: format_join_date(&entry.join_date),
            },
        };

        self.client
            .post(self.endpoint.clone())
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::SyncFailure(format!("Failed to reach Airtable: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::SyncFailure(format!("Airtable API error: {e}")))?;

        tracing::debug!(entry_id = %entry.id, "Entry mirrored to Airtable");
        Ok(())
    }
}
