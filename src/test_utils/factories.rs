//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use axum::http::HeaderValue;
use chrono::{NaiveDate, NaiveDateTime};
use secrecy::SecretString;
use std::net::SocketAddr;
use url::Url;
use uuid::Uuid;

use crate::{
    domain::entities::{
        notification_failure_policy::NotificationFailurePolicy, waitlist_entry::WaitlistEntry,
    },
    infra::config::AppConfig,
};

/// Create a test waitlist entry with sensible defaults.
pub fn create_test_entry(overrides: impl FnOnce(&mut WaitlistEntry)) -> WaitlistEntry {
    let mut entry = WaitlistEntry {
        id: Uuid::new_v4(),
        full_name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        join_date: test_datetime(),
    };
    overrides(&mut entry);
    entry
}

/// Config pointing at unroutable provider URLs; tests never reach them.
pub fn create_test_config(notification_failure_policy: NotificationFailurePolicy) -> AppConfig {
    AppConfig {
        database_url: "postgres://localhost/waitlist_test".to_string(),
        bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        resend_api_key: SecretString::new("re_test_key".into()),
        resend_api_url: Url::parse("http://resend.invalid").unwrap(),
        email_from: "hello@example.com".to_string(),
        airtable_api_key: SecretString::new("pat_test_key".into()),
        airtable_base_id: "appTest".to_string(),
        airtable_table_name: "Waitlist".to_string(),
        airtable_api_url: Url::parse("http://airtable.invalid/v0").unwrap(),
        notification_failure_policy,
    }
}

/// Fixed timestamp for reproducible tests.
pub fn test_datetime() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 1, 15)
        .unwrap()
        .and_hms_opt(10, 30, 0)
        .unwrap()
}
