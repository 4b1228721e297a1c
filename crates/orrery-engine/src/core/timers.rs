// core/timers.rs
//
// Deferred actions scheduled against the frame clock.
//
// Timers fire from the per-frame driver, never asynchronously. Each carries
// the generation of the focus session that scheduled it; the consumer
// compares generations on fire, so a timer left behind by a replaced
// session is harmless.

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u64);

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeferredAction {
    /// Hand the focus session over from approach to tracking.
    BeginTracking,
}

/// A pending deferred action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Deferred {
    pub id: TimerId,
    /// Frame timestamp at or after which the timer fires (milliseconds).
    pub due_ms: f64,
    /// Generation of the session that scheduled it.
    pub generation: u64,
    pub action: DeferredAction,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    pending: Vec<Deferred>,
    next_id: u64,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule an action. Returns its id.
    pub fn schedule(&mut self, due_ms: f64, generation: u64, action: DeferredAction) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.pending.push(Deferred {
            id,
            due_ms,
            generation,
            action,
        });
        id
    }

    /// Remove and return every timer due at `now_ms`, earliest first.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<Deferred> {
        let mut due = Vec::new();
        self.pending.retain(|d| {
            if d.due_ms <= now_ms {
                due.push(*d);
                false
            } else {
                true
            }
        });
        due.sort_by(|a, b| a.due_ms.total_cmp(&b.due_ms).then(a.id.0.cmp(&b.id.0)));
        due
    }

    /// Number of pending timers.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
