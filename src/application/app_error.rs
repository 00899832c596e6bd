use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Record sync failed: {0}")]
    SyncFailure(String),

    #[error("Notification failed: {0}")]
    NotificationFailure(String),
}

pub type AppResult<T> = Result<T, AppError>;
