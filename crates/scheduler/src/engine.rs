use crate::dispatcher::dispatch;
use crate::error::ScheduleError;
use crate::relay::{SchedulerCommand, SchedulerHandle};
use crate::timers::TimerRegistry;
use routinely_domain::{next_fire_time, ReminderRequest, ScheduledNotification, ID};
use routinely_infra::Context;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

/// Starts the notification scheduler process and returns the handle used to
/// talk to it.
///
/// The process is a single task owning the timer registry; every schedule,
/// cancel and elapsed-timer event is processed as its own non-overlapping
/// turn, in arrival order. A cancel can therefore never race a
/// near-simultaneous fire for the same reminder id. Before serving commands
/// the process reconciles its timers from the durable store.
pub fn start_notification_scheduler(ctx: Context) -> SchedulerHandle {
    let (sender, receiver) = mpsc::unbounded_channel();
    let handle = SchedulerHandle::new(sender.clone());
    tokio::spawn(run_scheduler(ctx, sender, receiver));
    handle
}

async fn run_scheduler(
    ctx: Context,
    sender: mpsc::UnboundedSender<SchedulerCommand>,
    mut receiver: mpsc::UnboundedReceiver<SchedulerCommand>,
) {
    let mut scheduler = Scheduler {
        ctx,
        sender,
        timers: TimerRegistry::new(),
    };
    scheduler.reconcile().await;
    while let Some(command) = receiver.recv().await {
        scheduler.handle_command(command).await;
    }
}

struct Scheduler {
    ctx: Context,
    sender: mpsc::UnboundedSender<SchedulerCommand>,
    timers: TimerRegistry,
}

impl Scheduler {
    async fn handle_command(&mut self, command: SchedulerCommand) {
        match command {
            SchedulerCommand::Schedule {
                request,
                respond_to,
            } => {
                let _ = respond_to.send(self.schedule(request).await);
            }
            SchedulerCommand::Cancel {
                reminder_id,
                respond_to,
            } => {
                let _ = respond_to.send(self.cancel(reminder_id).await);
            }
            SchedulerCommand::TimerElapsed {
                reminder_id,
                fire_time,
            } => self.fire(reminder_id, fire_time).await,
            SchedulerCommand::Pending { respond_to } => {
                let _ = respond_to.send(self.pending().await);
            }
        }
    }

    /// Unscheduled -> Armed. A request for an id that already has a schedule
    /// supersedes it: the old timer is cancelled before the new occurrence
    /// is stored and armed. A disabled request only cancels.
    async fn schedule(
        &mut self,
        request: ReminderRequest,
    ) -> Result<Option<ScheduledNotification>, ScheduleError> {
        if !request.frequency.is_valid() {
            return Err(ScheduleError::InvalidRequest(format!(
                "Frequency: {:?} is not valid",
                request.frequency
            )));
        }

        self.timers.cancel(&request.reminder_id);
        if !request.enabled {
            self.ctx
                .repos
                .scheduled_notifications
                .delete(&request.reminder_id)
                .await?;
            return Ok(None);
        }

        let now = self.ctx.sys.get_timestamp_millis();
        let fire_time = next_fire_time(
            &request.frequency,
            &request.time_of_day,
            now,
            &self.ctx.config.timezone,
        )
        .ok_or_else(|| {
            ScheduleError::InvalidRequest(format!(
                "Frequency: {:?} has no upcoming occurrence",
                request.frequency
            ))
        })?;

        let notification = ScheduledNotification {
            reminder_id: request.reminder_id.clone(),
            habit_id: request.habit_id.clone(),
            fire_time,
        };

        // Durable write first: if it fails the reminder is not scheduled.
        self.ctx
            .repos
            .scheduled_notifications
            .put(&notification)
            .await?;
        self.arm(&notification, now);

        info!(
            reminder_id = %notification.reminder_id,
            fire_time = notification.fire_time,
            "Armed reminder"
        );
        Ok(Some(notification))
    }

    /// Armed -> Cancelled -> Unscheduled. A no-op when nothing is armed for
    /// the id.
    async fn cancel(&mut self, reminder_id: ID) -> Result<(), ScheduleError> {
        self.timers.cancel(&reminder_id);
        self.ctx
            .repos
            .scheduled_notifications
            .delete(&reminder_id)
            .await?;
        Ok(())
    }

    /// Armed -> Fired -> Unscheduled. Elapsed events that no longer match an
    /// armed timer are stale: the reminder was cancelled or superseded after
    /// the timer entered its fire callback.
    async fn fire(&mut self, reminder_id: ID, fire_time: i64) {
        if !self.timers.is_armed_for(&reminder_id, fire_time) {
            debug!(reminder_id = %reminder_id, "Ignoring stale timer event");
            return;
        }
        self.timers.forget(&reminder_id);

        match self
            .ctx
            .repos
            .scheduled_notifications
            .find(&reminder_id)
            .await
        {
            Some(notification) => dispatch(&self.ctx, &notification).await,
            None => warn!(
                reminder_id = %reminder_id,
                "Timer elapsed for a reminder with no stored occurrence"
            ),
        }
    }

    /// The stored occurrences that currently have an armed countdown.
    async fn pending(&self) -> Vec<ScheduledNotification> {
        match self.ctx.repos.scheduled_notifications.get_all().await {
            Ok(notifications) => notifications
                .into_iter()
                .filter(|notification| self.timers.contains(&notification.reminder_id))
                .collect(),
            Err(e) => {
                error!("Unable to read scheduled notifications: {:?}", e);
                Vec::new()
            }
        }
    }

    /// Rebuilds volatile timers from the durable store after a process
    /// start. Rows still in the future are re-armed for their remaining
    /// delay; past-due rows are treated as fired-while-offline and
    /// dispatched immediately. Rows that already have a live timer are left
    /// alone, so running the pass again arms nothing twice.
    async fn reconcile(&mut self) {
        let notifications = match self.ctx.repos.scheduled_notifications.get_all().await {
            Ok(notifications) => notifications,
            Err(e) => {
                error!(
                    "Unable to read scheduled notifications, skipping reconciliation: {:?}",
                    e
                );
                return;
            }
        };

        let now = self.ctx.sys.get_timestamp_millis();
        for notification in notifications {
            if self.timers.contains(&notification.reminder_id) {
                continue;
            }
            if notification.fire_time > now {
                self.arm(&notification, now);
            } else {
                warn!(
                    reminder_id = %notification.reminder_id,
                    fire_time = notification.fire_time,
                    "Found stale scheduled notification, dispatching immediately"
                );
                dispatch(&self.ctx, &notification).await;
            }
        }
        info!("Reconciliation done, {} reminders armed", self.timers.len());
    }

    fn arm(&mut self, notification: &ScheduledNotification, now: i64) {
        let delay = Duration::from_millis((notification.fire_time - now).max(0) as u64);
        let sender = self.sender.clone();
        let reminder_id = notification.reminder_id.clone();
        let fire_time = notification.fire_time;
        self.timers.arm(
            notification.reminder_id.clone(),
            fire_time,
            delay,
            move || {
                let _ = sender.send(SchedulerCommand::TimerElapsed {
                    reminder_id,
                    fire_time,
                });
            },
        );
    }
}
