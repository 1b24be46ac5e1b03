use routinely_domain::ID;
use std::collections::HashMap;
use std::time::Duration;
use tokio::task::JoinHandle;

struct ArmedTimer {
    handle: JoinHandle<()>,
    fire_time: i64,
}

/// Volatile map of armed countdowns, owned by the scheduler process. At most
/// one live timer exists per reminder id. Handles die with the process and
/// are rebuilt from the durable store on the next start.
pub(crate) struct TimerRegistry {
    timers: HashMap<ID, ArmedTimer>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self {
            timers: HashMap::new(),
        }
    }

    /// Arms a countdown that runs `on_elapsed` once after `delay`. An
    /// existing timer for the same reminder id is cancelled first.
    pub fn arm<F>(&mut self, reminder_id: ID, fire_time: i64, delay: Duration, on_elapsed: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.cancel(&reminder_id);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            on_elapsed();
        });
        self.timers.insert(reminder_id, ArmedTimer { handle, fire_time });
    }

    /// No-op when no timer is armed for the id.
    pub fn cancel(&mut self, reminder_id: &ID) {
        if let Some(timer) = self.timers.remove(reminder_id) {
            timer.handle.abort();
        }
    }

    /// True when the armed timer for the id counts down to `fire_time`.
    /// Elapsed events from superseded timers carry an older fire time and
    /// will not match.
    pub fn is_armed_for(&self, reminder_id: &ID, fire_time: i64) -> bool {
        self.timers
            .get(reminder_id)
            .map(|timer| timer.fire_time == fire_time)
            .unwrap_or(false)
    }

    pub fn contains(&self, reminder_id: &ID) -> bool {
        self.timers.contains_key(reminder_id)
    }

    /// Drops the handle of a timer that already elapsed.
    pub fn forget(&mut self, reminder_id: &ID) {
        self.timers.remove(reminder_id);
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }
}

impl Drop for TimerRegistry {
    fn drop(&mut self) {
        for timer in self.timers.values() {
            timer.handle.abort();
        }
    }
}
