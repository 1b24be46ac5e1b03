use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScheduleError {
    /// Malformed frequency or time. Rejected synchronously, never persisted.
    #[error("Invalid reminder request: {0}")]
    InvalidRequest(String),
    /// The durable store failed; the reminder is not scheduled.
    #[error("Durable store error: {0}")]
    Store(#[from] anyhow::Error),
    /// The scheduler process is not running
    #[error("The notification scheduler is unavailable")]
    Unavailable,
}
