//! Virtual-time scheduler for post-judgment transitions.
//!
//! After a judgment, the engine wants a short pause before the next round
//! begins or the retry unlocks. Rather than spawning timers, it enqueues a
//! [`Transition`] with a due time on this scheduler and the host drives the
//! clock by calling [`Scheduler::advance`] with elapsed time. Tests pass a
//! large elapsed value to fast-forward instantly.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A pending state change waiting for its pause to elapse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Move to the next word after a correct answer.
    AdvanceRound,
    /// Unlock the current round for another attempt after a wrong answer.
    RetryRound,
}

/// Monotonic virtual clock plus a queue of due transitions.
///
/// Time only moves when the host reports it. Transitions fire in due-time
/// order; ties fire in the order they were scheduled.
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: Duration,
    pending: Vec<(Duration, Transition)>,
}

impl Scheduler {
    /// Create a scheduler at time zero with nothing pending.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// True if nothing is waiting to fire.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of transitions waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Enqueue `transition` to fire `delay` after the current time.
    pub fn schedule_after(&mut self, delay: Duration, transition: Transition) {
        self.pending.push((self.now + delay, transition));
    }

    /// Move the clock forward and collect everything that came due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Transition> {
        self.now += elapsed;
        let now = self.now;

        let mut due: Vec<(Duration, Transition)> = Vec::new();
        self.pending.retain(|&(at, transition)| {
            if at <= now {
                due.push((at, transition));
                false
            } else {
                true
            }
        });
        // Stable sort keeps scheduling order for equal due times.
        due.sort_by_key(|&(at, _)| at);
        due.into_iter().map(|(_, t)| t).collect()
    }

    /// Drop everything pending without firing it.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
