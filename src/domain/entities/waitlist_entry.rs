use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

/// A single waitlist signup as stored in the db.
///
/// `id` and `join_date` are assigned server-side and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    /// UTC
    pub join_date: NaiveDateTime,
}
