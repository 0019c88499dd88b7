use std::time::Duration;

use log::{debug, trace};

use crate::callbacks::Callbacks;
use crate::metrics::ScrollMetrics;
use crate::region::ScrollRegion;
use crate::timer::{Scheduler, TimerHandle, TimerRole};

/// Idle time after the last scroll event before scrolling counts as stopped.
pub const SCROLL_STOP_DELAY: Duration = Duration::from_millis(100);

/// Whether a scroll event began a new scroll gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollEdge {
    Started,
    Continued,
}

/// Owns the authoritative metrics snapshot and the scrolling flag.
#[derive(Debug, Default)]
pub struct ScrollTracker {
    metrics: ScrollMetrics,
    scrolling: bool,
    stop_timer: Option<TimerHandle>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn metrics(&self) -> ScrollMetrics {
        self.metrics
    }

    pub fn is_scrolling(&self) -> bool {
        self.scrolling
    }

    /// Recompute after a resize or content change.
    pub fn update<R>(&mut self, region: &R, callbacks: &mut Callbacks) -> ScrollMetrics
    where
        R: ScrollRegion + ?Sized,
    {
        self.metrics = ScrollMetrics::measure(region);
        trace!("metrics updated: {:?}", self.metrics);
        callbacks.update(&self.metrics);
        self.metrics
    }

    /// Recompute after a scroll event and restart the stop timer.
    pub fn scroll<R, S>(
        &mut self,
        region: &R,
        callbacks: &mut Callbacks,
        scheduler: &mut S,
    ) -> ScrollEdge
    where
        R: ScrollRegion + ?Sized,
        S: Scheduler + ?Sized,
    {
        let metrics = self.update(region, callbacks);
        callbacks.scroll(&metrics);

        let edge = if self.scrolling {
            ScrollEdge::Continued
        } else {
            debug!("scroll started");
            self.scrolling = true;
            callbacks.scroll_start();
            ScrollEdge::Started
        };

        callbacks.scroll_frame(&metrics);

        if let Some(handle) = self.stop_timer.take() {
            scheduler.cancel(handle);
        }
        self.stop_timer = Some(scheduler.schedule(SCROLL_STOP_DELAY, TimerRole::ScrollStop));

        edge
    }

    /// Handle an expired timer. Returns true if it was this tracker's stop
    /// timer, in which case scrolling has stopped.
    pub fn timer_fired(&mut self, handle: TimerHandle, callbacks: &mut Callbacks) -> bool {
        if self.stop_timer != Some(handle) {
            return false;
        }
        debug!("scroll stopped");
        self.stop_timer = None;
        self.scrolling = false;
        callbacks.scroll_stop();
        true
    }

    /// Drop the pending stop timer without firing the stop callback.
    pub fn cancel<S: Scheduler + ?Sized>(&mut self, scheduler: &mut S) {
        if let Some(handle) = self.stop_timer.take() {
            scheduler.cancel(handle);
        }
        self.scrolling = false;
    }
}
