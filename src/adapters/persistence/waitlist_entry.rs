use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    adapters::persistence::PostgresPersistence, app_error::AppResult,
    domain::entities::waitlist_entry::WaitlistEntry, use_cases::waitlist::WaitlistRepo,
};

#[async_trait]
impl WaitlistRepo for PostgresPersistence {
    async fn create(
        &self,
        full_name: &str,
        email: &str,
        join_date: NaiveDateTime,
    ) -> AppResult<WaitlistEntry> {
        let entry = sqlx::query_as::<_, WaitlistEntry>(
            r#"
            INSERT INTO waitlist_entries (id, full_name, email, join_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, full_name, email, join_date
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(full_name)
        .bind(email)
        .bind(join_date)
        .fetch_one(self.pool())
        .await?;

        Ok(entry)
    }
}
