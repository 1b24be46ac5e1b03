mod dispatcher;
mod engine;
mod error;
mod relay;
mod timers;

pub use engine::start_notification_scheduler;
pub use error::ScheduleError;
pub use relay::SchedulerHandle;
