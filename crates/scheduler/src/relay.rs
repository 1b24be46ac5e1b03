use crate::error::ScheduleError;
use routinely_domain::{ReminderRequest, ScheduledNotification, ID};
use tokio::sync::{mpsc, oneshot};

/// Messages accepted by the scheduler process. `Schedule` and `Cancel` form
/// the external protocol; `TimerElapsed` arrives from armed timers.
#[derive(Debug)]
pub(crate) enum SchedulerCommand {
    Schedule {
        request: ReminderRequest,
        respond_to: oneshot::Sender<Result<Option<ScheduledNotification>, ScheduleError>>,
    },
    Cancel {
        reminder_id: ID,
        respond_to: oneshot::Sender<Result<(), ScheduleError>>,
    },
    TimerElapsed {
        reminder_id: ID,
        fire_time: i64,
    },
    Pending {
        respond_to: oneshot::Sender<Vec<ScheduledNotification>>,
    },
}

/// Foreground handle to the scheduler process. Builds the messages and hands
/// them to the process queue; holds no schedule state of its own. When the
/// process is gone every call surfaces `ScheduleError::Unavailable`.
#[derive(Clone, Debug)]
pub struct SchedulerHandle {
    sender: mpsc::UnboundedSender<SchedulerCommand>,
}

impl SchedulerHandle {
    pub(crate) fn new(sender: mpsc::UnboundedSender<SchedulerCommand>) -> Self {
        Self { sender }
    }

    /// Schedules the next occurrence for the reminder, superseding any
    /// existing schedule for the same id. Returns the stored occurrence, or
    /// `None` when the request is disabled.
    pub async fn schedule(
        &self,
        request: ReminderRequest,
    ) -> Result<Option<ScheduledNotification>, ScheduleError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SchedulerCommand::Schedule {
                request,
                respond_to,
            })
            .map_err(|_| ScheduleError::Unavailable)?;
        response.await.map_err(|_| ScheduleError::Unavailable)?
    }

    /// Cancels the schedule for the reminder. A no-op when nothing is
    /// scheduled.
    pub async fn cancel(&self, reminder_id: ID) -> Result<(), ScheduleError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SchedulerCommand::Cancel {
                reminder_id,
                respond_to,
            })
            .map_err(|_| ScheduleError::Unavailable)?;
        response.await.map_err(|_| ScheduleError::Unavailable)?
    }

    /// The occurrences currently counting down in the scheduler process.
    pub async fn pending(&self) -> Result<Vec<ScheduledNotification>, ScheduleError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(SchedulerCommand::Pending { respond_to })
            .map_err(|_| ScheduleError::Unavailable)?;
        response.await.map_err(|_| ScheduleError::Unavailable)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use routinely_domain::{Frequency, TimeOfDay};

    #[tokio::test]
    async fn it_surfaces_transport_error_when_process_is_gone() {
        let (sender, receiver) = mpsc::unbounded_channel();
        drop(receiver);
        let relay = SchedulerHandle::new(sender);

        let request = ReminderRequest {
            reminder_id: ID::new(),
            habit_id: ID::new(),
            frequency: Frequency::Daily,
            time_of_day: "08:00".parse::<TimeOfDay>().expect("To parse time"),
            enabled: true,
        };
        assert!(matches!(
            relay.schedule(request).await,
            Err(ScheduleError::Unavailable)
        ));
        assert!(matches!(
            relay.cancel(ID::new()).await,
            Err(ScheduleError::Unavailable)
        ));
        assert!(matches!(
            relay.pending().await,
            Err(ScheduleError::Unavailable)
        ));
    }
}
