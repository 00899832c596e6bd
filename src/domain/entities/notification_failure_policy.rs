use serde::{Deserialize, Serialize};

/// What a failed confirmation email means for the submission that triggered it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotificationFailurePolicy {
    /// Log the failure and still report the signup as successful.
    #[default]
    BestEffort,
    /// Fail the submission.
    Fatal,
}

impl NotificationFailurePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationFailurePolicy::BestEffort => "best_effort",
            NotificationFailurePolicy::Fatal => "fatal",
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, NotificationFailurePolicy::Fatal)
    }
}

impl std::fmt::Display for NotificationFailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NotificationFailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "best_effort" | "best-effort" => Ok(NotificationFailurePolicy::BestEffort),
            "fatal" => Ok(NotificationFailurePolicy::Fatal),
            other => Err(format!(
                "unknown notification failure policy '{other}' (expected 'fatal' or 'best_effort')"
            )),
        }
    }
}
