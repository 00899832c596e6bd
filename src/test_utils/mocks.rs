//! In-memory implementations of the waitlist ports.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::sync::Mutex;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    domain::entities::waitlist_entry::WaitlistEntry,
    use_cases::waitlist::{EmailSender, RecordSync, WaitlistRepo},
};

// ============================================================================
// InMemoryWaitlistRepo
// ============================================================================

/// In-memory implementation of WaitlistRepo for testing.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    pub entries: Mutex<Vec<WaitlistEntry>>,
    fail: bool,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repo whose writes always fail, as if the db were unreachable.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Get all entries in insertion order (for test assertions).
    pub fn get_all(&self) -> Vec<WaitlistEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn create(
        &self,
        full_name: &str,
        email: &str,
        join_date: NaiveDateTime,
    ) -> AppResult<WaitlistEntry> {
        if self.fail {
            return Err(AppError::Database("Database operation failed".into()));
        }

        let entry = WaitlistEntry {
            id: Uuid::new_v4(),
            full_name: full_name.to_string(),
            email: email.to_string(),
            join_date,
        };
        self.entries.lock().unwrap().push(entry.clone());
        Ok(entry)
    }
}

// ============================================================================
// RecordingRecordSync
// ============================================================================

/// Records successfully pushed entries instead of calling Airtable.
#[derive(Default)]
pub struct RecordingRecordSync {
    pushed: Mutex<Vec<WaitlistEntry>>,
    fail: bool,
}

impl RecordingRecordSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every push fails like a non-2xx Airtable response.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn pushed(&self) -> Vec<WaitlistEntry> {
        self.pushed.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordSync for RecordingRecordSync {
    async fn push(&self, entry: &WaitlistEntry) -> AppResult<()> {
        if self.fail {
            return Err(AppError::SyncFailure(
                "Airtable API error: 500 Internal Server Error".into(),
            ));
        }
        self.pushed.lock().unwrap().push(entry.clone());
        Ok(())
    }
}

// ============================================================================
// InMemoryEmailSender
// ============================================================================

#[derive(Clone, Debug)]
pub struct SentEmail {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Collects outgoing emails instead of calling Resend.
#[derive(Default)]
pub struct InMemoryEmailSender {
    sent: Mutex<Vec<SentEmail>>,
    fail: bool,
}

impl InMemoryEmailSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every send fails like a rejected Resend request.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<SentEmail> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl EmailSender for InMemoryEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        if self.fail {
            return Err(AppError::NotificationFailure(
                "Email API error: 422 Unprocessable Entity".into(),
            ));
        }
        self.sent.lock().unwrap().push(SentEmail {
            to: to.to_string(),
            subject: subject.to_string(),
            html: html.to_string(),
        });
        Ok(())
    }
}
