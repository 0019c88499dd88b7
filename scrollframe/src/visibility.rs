use std::time::Duration;

use log::debug;

use crate::timer::{Scheduler, TimerHandle, TimerRole};

/// Auto-hide state of the tracks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisibilityState {
    Visible,
    Hidden,
    /// Still visible; hides at `deadline` on the host clock.
    PendingHide { deadline: Duration },
}

/// The auto-hide state machine.
///
/// Interaction (pointer over a track, dragging, scrolling) shows the tracks.
/// Once all three have ended, a hide timer starts; when it expires the tracks
/// hide. With auto-hide off the tracks are always visible.
#[derive(Debug)]
pub struct VisibilityController {
    auto_hide: bool,
    timeout: Duration,
    state: VisibilityState,
    hide_timer: Option<TimerHandle>,
    over_track: bool,
    dragging: bool,
    scrolling: bool,
}

impl VisibilityController {
    pub fn new(auto_hide: bool, timeout: Duration) -> Self {
        Self {
            auto_hide,
            timeout,
            state: if auto_hide {
                VisibilityState::Hidden
            } else {
                VisibilityState::Visible
            },
            hide_timer: None,
            over_track: false,
            dragging: false,
            scrolling: false,
        }
    }

    pub fn state(&self) -> VisibilityState {
        self.state
    }

    /// True unless the tracks are hidden.
    pub fn is_visible(&self) -> bool {
        self.state != VisibilityState::Hidden
    }

    pub fn is_pointer_over_track(&self) -> bool {
        self.over_track
    }

    /// Apply new auto-hide settings.
    pub fn configure<S>(&mut self, auto_hide: bool, timeout: Duration, scheduler: &mut S)
    where
        S: Scheduler + ?Sized,
    {
        let was_enabled = self.auto_hide;
        self.auto_hide = auto_hide;
        self.timeout = timeout;

        if !auto_hide {
            self.show(scheduler);
        } else if !was_enabled {
            // Tracks were forced visible until now
            self.arm_if_idle(scheduler);
        }
    }

    pub fn pointer_entered<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.over_track = true;
        self.show(scheduler);
    }

    pub fn pointer_left<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.over_track = false;
        self.arm_if_idle(scheduler);
    }

    pub fn drag_started<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.dragging = true;
        self.show(scheduler);
    }

    pub fn drag_ended<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.dragging = false;
        self.arm_if_idle(scheduler);
    }

    pub fn scroll_started<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.scrolling = true;
        self.show(scheduler);
    }

    pub fn scroll_stopped<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        self.scrolling = false;
        self.arm_if_idle(scheduler);
    }

    /// Handle an expired timer. Returns true if it was the hide timer.
    pub fn timer_fired(&mut self, handle: TimerHandle) -> bool {
        if self.hide_timer != Some(handle) {
            return false;
        }
        debug!("tracks hidden");
        self.hide_timer = None;
        self.state = VisibilityState::Hidden;
        true
    }

    /// Drop the pending hide timer and forget all interaction.
    pub fn cancel<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.hide_timer.take() {
            scheduler.cancel(handle);
        }
        if let VisibilityState::PendingHide { .. } = self.state {
            self.state = VisibilityState::Visible;
        }
        self.over_track = false;
        self.dragging = false;
        self.scrolling = false;
    }

    fn show<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.hide_timer.take() {
            scheduler.cancel(handle);
        }
        if self.state != VisibilityState::Visible {
            debug!("tracks visible");
        }
        self.state = VisibilityState::Visible;
    }

    fn arm_if_idle<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if !self.auto_hide || self.over_track || self.dragging || self.scrolling {
            return;
        }
        if self.state == VisibilityState::Hidden {
            return;
        }
        if let Some(handle) = self.hide_timer.take() {
            scheduler.cancel(handle);
        }
        self.hide_timer = Some(scheduler.schedule(self.timeout, TimerRole::AutoHide));
        self.state = VisibilityState::PendingHide {
            deadline: scheduler.now() + self.timeout,
        };
        debug!("tracks hide in {:?}", self.timeout);
    }
}
