use std::fmt;

use crate::metrics::ScrollMetrics;

type EdgeCallback = Box<dyn FnMut()>;
type MetricsCallback = Box<dyn FnMut(&ScrollMetrics)>;

/// Host-supplied notifications.
///
/// ```
/// use scrollframe::Callbacks;
///
/// let callbacks = Callbacks::new()
///     .on_scroll_start(|| log::debug!("scrolling"))
///     .on_scroll_frame(|m| log::debug!("top fraction {}", m.top));
/// ```
#[derive(Default)]
pub struct Callbacks {
    on_scroll_start: Option<EdgeCallback>,
    on_scroll_stop: Option<EdgeCallback>,
    on_scroll: Option<MetricsCallback>,
    on_scroll_frame: Option<MetricsCallback>,
    on_update: Option<MetricsCallback>,
}

impl Callbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called on the first scroll event after an idle period.
    pub fn on_scroll_start(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_scroll_start = Some(Box::new(f));
        self
    }

    /// Called once scrolling has been idle for the stop delay.
    pub fn on_scroll_stop(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_scroll_stop = Some(Box::new(f));
        self
    }

    pub fn on_scroll(mut self, f: impl FnMut(&ScrollMetrics) + 'static) -> Self {
        self.on_scroll = Some(Box::new(f));
        self
    }

    /// Called on every scroll event, after any scroll-start notification.
    pub fn on_scroll_frame(mut self, f: impl FnMut(&ScrollMetrics) + 'static) -> Self {
        self.on_scroll_frame = Some(Box::new(f));
        self
    }

    /// Called whenever metrics are recomputed, for scrolls and resizes alike.
    pub fn on_update(mut self, f: impl FnMut(&ScrollMetrics) + 'static) -> Self {
        self.on_update = Some(Box::new(f));
        self
    }

    pub(crate) fn scroll_start(&mut self) {
        if let Some(f) = self.on_scroll_start.as_mut() {
            f();
        }
    }

    pub(crate) fn scroll_stop(&mut self) {
        if let Some(f) = self.on_scroll_stop.as_mut() {
            f();
        }
    }

    pub(crate) fn scroll(&mut self, metrics: &ScrollMetrics) {
        if let Some(f) = self.on_scroll.as_mut() {
            f(metrics);
        }
    }

    pub(crate) fn scroll_frame(&mut self, metrics: &ScrollMetrics) {
        if let Some(f) = self.on_scroll_frame.as_mut() {
            f(metrics);
        }
    }

    pub(crate) fn update(&mut self, metrics: &ScrollMetrics) {
        if let Some(f) = self.on_update.as_mut() {
            f(metrics);
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_scroll_start", &self.on_scroll_start.is_some())
            .field("on_scroll_stop", &self.on_scroll_stop.is_some())
            .field("on_scroll", &self.on_scroll.is_some())
            .field("on_scroll_frame", &self.on_scroll_frame.is_some())
            .field("on_update", &self.on_update.is_some())
            .finish()
    }
}
