//! Deferred work keyed by navigation epoch.
//!
//! Each task is tagged with the epoch that scheduled it. Starting a new epoch
//! discards every task from older epochs, so a delayed action from a finished
//! navigation can never fire after a newer navigation has begun.

/// A task waiting for its due time.
#[derive(Clone, Debug, PartialEq)]
struct Scheduled<T> {
    epoch: u64,
    due_at: f64,
    payload: T,
}

/// Cancellable, clock-driven task list.
///
/// Time is whatever clock the caller passes to [`poll`](Self::poll); the list
/// never reads a wall clock itself.
#[derive(Clone, Debug)]
pub struct DeferredTasks<T> {
    tasks: Vec<Scheduled<T>>,
    epoch: u64,
}

impl<T> Default for DeferredTasks<T> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            epoch: 0,
        }
    }
}

impl<T> DeferredTasks<T> {
    /// Create an empty list at epoch 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current epoch.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Start a new epoch, dropping all pending tasks. Returns the new epoch
    /// and how many tasks were cancelled.
    pub fn advance_epoch(&mut self) -> (u64, usize) {
        self.epoch += 1;
        let cancelled = self.tasks.len();
        self.tasks.clear();
        (self.epoch, cancelled)
    }

    /// Schedule `payload` to become due at `due_at` under the current epoch.
    pub fn schedule(&mut self, due_at: f64, payload: T) {
        self.tasks.push(Scheduled {
            epoch: self.epoch,
            due_at,
            payload,
        });
    }

    /// Remove and return all payloads due at or before `now`, in scheduling
    /// order. Tasks from older epochs are discarded without firing.
    pub fn poll(&mut self, now: f64) -> Vec<T> {
        let epoch = self.epoch;
        self.tasks.retain(|t| t.epoch == epoch);

        let mut due = Vec::new();
        let mut i = 0;
        while i < self.tasks.len() {
            if self.tasks[i].due_at <= now {
                due.push(self.tasks.remove(i).payload);
            } else {
                i += 1;
            }
        }
        due
    }

    /// Number of tasks still waiting.
    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_fires_once_when_due() {
        let mut tasks = DeferredTasks::new();
        tasks.schedule(1.0, "reset");
        assert!(tasks.poll(0.5).is_empty());
        assert_eq!(tasks.poll(1.0), vec!["reset"]);
        assert!(tasks.poll(2.0).is_empty());
        assert!(tasks.is_empty());
    }

    #[test]
    fn test_new_epoch_cancels_pending() {
        let mut tasks = DeferredTasks::new();
        tasks.schedule(1.0, 1);
        tasks.schedule(2.0, 2);
        let (epoch, cancelled) = tasks.advance_epoch();
        assert_eq!(epoch, 1);
        assert_eq!(cancelled, 2);
        assert!(tasks.poll(10.0).is_empty());
    }

    #[test]
    fn test_only_current_epoch_fires() {
        let mut tasks = DeferredTasks::new();
        tasks.schedule(1.0, "stale");
        tasks.advance_epoch();
        tasks.schedule(1.5, "fresh");
        assert_eq!(tasks.poll(5.0), vec!["fresh"]);
    }

    #[test]
    fn test_due_tasks_keep_schedule_order() {
        let mut tasks = DeferredTasks::new();
        tasks.schedule(3.0, 'c');
        tasks.schedule(1.0, 'a');
        tasks.schedule(2.0, 'b');
        tasks.schedule(9.0, 'z');
        assert_eq!(tasks.poll(3.0), vec!['c', 'a', 'b']);
        assert_eq!(tasks.pending(), 1);
    }
}
