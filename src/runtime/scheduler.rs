use crate::runtime::event::FormEvent;
use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub enum SchedulerCommand {
    EmitNow(FormEvent),
    EmitAfter {
        key: String,
        delay: Duration,
        event: FormEvent,
    },
    Cancel {
        key: String,
    },
}

#[derive(Debug, Clone)]
struct Guard {
    key: String,
    version: u64,
}

#[derive(Debug, Clone)]
struct DelayedTask {
    due_at: Instant,
    guard: Guard,
    event: FormEvent,
}

/// Keyed timer queue. Cancelling a key bumps its version, which invalidates
/// every task scheduled under the old version.
#[derive(Debug, Default)]
pub struct Scheduler {
    ready: VecDeque<FormEvent>,
    delayed: Vec<DelayedTask>,
    key_versions: HashMap<String, u64>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, command: SchedulerCommand, now: Instant) {
        match command {
            SchedulerCommand::EmitNow(event) => {
                self.ready.push_back(event);
            }
            SchedulerCommand::EmitAfter { key, delay, event } => {
                let version = *self.key_versions.entry(key.clone()).or_insert(0);
                self.delayed.push(DelayedTask {
                    due_at: now + delay,
                    guard: Guard { key, version },
                    event,
                });
            }
            SchedulerCommand::Cancel { key } => {
                self.bump_version(&key);
                self.delayed.retain(|task| task.guard.key != key);
            }
        }
    }

    /// Returns the events due at `now`, earliest deadline first.
    pub fn drain_ready(&mut self, now: Instant) -> Vec<FormEvent> {
        let mut due = Vec::new();
        let mut idx = 0usize;
        while idx < self.delayed.len() {
            if self.delayed[idx].due_at <= now {
                let task = self.delayed.swap_remove(idx);
                if self.task_is_valid(&task) {
                    due.push(task);
                }
            } else {
                idx += 1;
            }
        }
        due.sort_by_key(|task| task.due_at);
        self.ready.extend(due.into_iter().map(|task| task.event));

        self.ready.drain(..).collect()
    }

    pub fn poll_timeout(&self, now: Instant, default_timeout: Duration) -> Duration {
        let mut next = default_timeout;

        for task in &self.delayed {
            let due_in = task.due_at.saturating_duration_since(now);
            if due_in < next {
                next = due_in;
            }
        }

        next
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.delayed
            .iter()
            .any(|task| task.guard.key == key && self.task_is_valid(task))
    }

    pub fn is_idle(&self) -> bool {
        self.ready.is_empty() && self.delayed.is_empty()
    }

    pub fn clear(&mut self) {
        let keys: Vec<String> = self.key_versions.keys().cloned().collect();
        for key in keys {
            self.bump_version(&key);
        }
        self.ready.clear();
        self.delayed.clear();
    }

    fn task_is_valid(&self, task: &DelayedTask) -> bool {
        let current = *self.key_versions.get(&task.guard.key).unwrap_or(&0);
        current == task.guard.version
    }

    fn bump_version(&mut self, key: &str) -> u64 {
        let entry = self.key_versions.entry(key.to_string()).or_insert(0);
        *entry = entry.saturating_add(1);
        *entry
    }
}
