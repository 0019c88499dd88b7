use std::time::Duration;

/// Opaque id of a scheduled one-shot timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub const fn id(self) -> u64 {
        self.0
    }
}

/// What a timer is for. Each controller owns at most one timer of its role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerRole {
    /// Trailing-edge idle detector of the scroll tracker.
    ScrollStop,
    /// Auto-hide delay of the visibility controller.
    AutoHide,
}

/// The host's one-shot timer primitive.
///
/// When a timer expires the host delivers
/// [`Event::Timer`](crate::event::Event::Timer) with its handle. Cancelled
/// timers must never be delivered.
pub trait Scheduler {
    /// Current time on the host's clock.
    fn now(&self) -> Duration;

    fn schedule(&mut self, delay: Duration, role: TimerRole) -> TimerHandle;

    fn cancel(&mut self, handle: TimerHandle);
}

#[derive(Debug, Clone, Copy)]
struct PendingTimer {
    handle: TimerHandle,
    role: TimerRole,
    deadline: Duration,
}

/// A manual-clock timer queue.
///
/// Time only moves when the owner says so, which makes it suitable both for
/// tests and as the bookkeeping half of a real event loop.
#[derive(Debug, Default)]
pub struct TimerQueue {
    now: Duration,
    next_id: u64,
    pending: Vec<PendingTimer>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// The clock moves to that timer's deadline, so work done while handling
    /// it (like scheduling a follow-up timer) is anchored at the moment it
    /// fired. When nothing is due the clock moves to `until` and `None` is
    /// returned.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, TimerRole)> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.deadline <= until)
            .min_by_key(|(_, timer)| (timer.deadline, timer.handle))
            .map(|(index, _)| index);

        match index {
            Some(index) => {
                let timer = self.pending.remove(index);
                self.now = self.now.max(timer.deadline);
                Some((timer.handle, timer.role))
            }
            None => {
                self.now = self.now.max(until);
                None
            }
        }
    }

    /// Deadline of the earliest pending timer.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending.iter().map(|timer| timer.deadline).min()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.iter().any(|timer| timer.handle == handle)
    }

    /// Number of pending timers with the given role.
    pub fn pending_with_role(&self, role: TimerRole) -> usize {
        self.pending.iter().filter(|timer| timer.role == role).count()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl Scheduler for TimerQueue {
    fn now(&self) -> Duration {
        self.now
    }

    fn schedule(&mut self, delay: Duration, role: TimerRole) -> TimerHandle {
        let handle = TimerHandle(self.next_id);
        self.next_id += 1;
        self.pending.push(PendingTimer {
            handle,
            role,
            deadline: self.now + delay,
        });
        handle
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.pending.retain(|timer| timer.handle != handle);
    }
}
