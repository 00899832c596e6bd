use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use tracing::instrument;

use crate::{
    app_error::{AppError, AppResult},
    application::{
        email_templates::WELCOME_SUBJECT,
        validators::{is_valid_email, is_valid_full_name},
    },
    domain::entities::{
        notification_failure_policy::NotificationFailurePolicy, waitlist_entry::WaitlistEntry,
    },
};

pub const INVALID_EMAIL_MESSAGE: &str =
    "Invalid email format. Please provide a valid email address.";
pub const MISSING_FULL_NAME_MESSAGE: &str = "Full name is required.";

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    /// Stores a new entry under a freshly generated id.
    async fn create(
        &self,
        full_name: &str,
        email: &str,
        join_date: NaiveDateTime,
    ) -> AppResult<WaitlistEntry>;
}

/// Mirrors stored entries into an external table.
#[async_trait]
pub trait RecordSync: Send + Sync {
    async fn push(&self, entry: &WaitlistEntry) -> AppResult<()>;
}

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()>;
}

pub trait WelcomeTemplate: Send + Sync {
    fn render(&self, full_name: &str) -> String;
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    record_sync: Arc<dyn RecordSync>,
    email: Arc<dyn EmailSender>,
    template: Arc<dyn WelcomeTemplate>,
    notification_policy: NotificationFailurePolicy,
}

impl WaitlistUseCases {
    pub fn new(
        repo: Arc<dyn WaitlistRepo>,
        record_sync: Arc<dyn RecordSync>,
        email: Arc<dyn EmailSender>,
        template: Arc<dyn WelcomeTemplate>,
        notification_policy: NotificationFailurePolicy,
    ) -> Self {
        Self {
            repo,
            record_sync,
            email,
            template,
            notification_policy,
        }
    }

    /// Validate, store, mirror to the record-sync table, then send the welcome email.
    ///
    /// A record-sync failure fails the submission even though the entry has
    /// already been stored. Email failures follow the configured
    /// [`NotificationFailurePolicy`].
    #[instrument(skip(self, full_name))]
    pub async fn submit(
        &self,
        full_name: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<WaitlistEntry> {
        let email = email
            .filter(|e| is_valid_email(e))
            .ok_or_else(|| AppError::InvalidInput(INVALID_EMAIL_MESSAGE.into()))?;
        let full_name = full_name
            .filter(|n| is_valid_full_name(n))
            .ok_or_else(|| AppError::InvalidInput(MISSING_FULL_NAME_MESSAGE.into()))?;

        let join_date = Utc::now().naive_utc();
        let entry = self.repo.create(full_name, email, join_date).await?;
        tracing::info!(entry_id = %entry.id, "Waitlist entry stored");

        if let Err(err) = self.record_sync.push(&entry).await {
            tracing::error!(
                entry_id = %entry.id,
                error = %err,
                "Record sync failed, entry is only stored locally"
            );
            return Err(err);
        }

        self.send_welcome(&entry).await?;
        Ok(entry)
    }

    async fn send_welcome(&self, entry: &WaitlistEntry) -> AppResult<()> {
        let html = self.template.render(&entry.full_name);
        match self.email.send(&entry.email, WELCOME_SUBJECT, &html).await {
            Ok(()) => {
                tracing::info!(entry_id = %entry.id, "Welcome email sent");
                Ok(())
            }
            Err(err) if self.notification_policy.is_fatal() => Err(err),
            Err(err) => {
                tracing::warn!(
                    entry_id = %entry.id,
                    error = %err,
                    "Welcome email failed, keeping signup"
                );
                Ok(())
            }
        }
    }
}
