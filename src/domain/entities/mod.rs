pub mod notification_failure_policy;
pub mod waitlist_entry;
