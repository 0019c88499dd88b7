//! Widget configuration.

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use thiserror::Error;

use crate::element::Slot;
use crate::render::Renderer;
use crate::types::{Length, Style};

/// Options for a [`Scrollbar`](crate::shell::Scrollbar).
///
/// Every option has a default; nothing is derived from outside this struct.
#[derive(Clone)]
pub struct ScrollbarConfig {
    /// Fade the tracks out after a period without interaction.
    pub auto_hide: bool,
    /// Idle time before the tracks start hiding.
    pub auto_hide_timeout: Duration,
    /// Length of the fade-out.
    pub auto_hide_duration: Duration,
    /// Size the container to its content between the two bounds below.
    pub auto_height: bool,
    pub auto_height_min: Length,
    pub auto_height_max: Length,
    /// Smallest thumb length, in pixels.
    pub thumb_min_size: f64,
    /// Suppress a track entirely when its axis has nothing to scroll.
    pub hide_tracks_when_not_needed: bool,
    /// Keyboard navigation and accessibility attributes.
    pub a11y_enabled: bool,
    pub aria_label: String,
    /// Pixels scrolled per arrow key press.
    pub keyboard_scroll_amount: f64,
    /// Extra class for the container.
    pub class_name: Option<String>,
    /// Container style, layered over the defaults.
    pub style: Style,
    pub renderers: Renderers,
}

impl Default for ScrollbarConfig {
    fn default() -> Self {
        Self {
            auto_hide: false,
            auto_hide_timeout: Duration::from_millis(1000),
            auto_hide_duration: Duration::from_millis(200),
            auto_height: false,
            auto_height_min: Length::Px(0.0),
            auto_height_max: Length::Px(200.0),
            thumb_min_size: 30.0,
            hide_tracks_when_not_needed: false,
            a11y_enabled: true,
            aria_label: "Scrollable content".to_string(),
            keyboard_scroll_amount: 40.0,
            class_name: None,
            style: Style::default(),
            renderers: Renderers::default(),
        }
    }
}

impl ScrollbarConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn auto_hide(mut self, enabled: bool) -> Self {
        self.auto_hide = enabled;
        self
    }

    pub fn auto_hide_timeout(mut self, timeout: Duration) -> Self {
        self.auto_hide_timeout = timeout;
        self
    }

    pub fn auto_hide_duration(mut self, duration: Duration) -> Self {
        self.auto_hide_duration = duration;
        self
    }

    /// Enable auto-height between `min` and `max`.
    pub fn auto_height(mut self, min: impl Into<Length>, max: impl Into<Length>) -> Self {
        self.auto_height = true;
        self.auto_height_min = min.into();
        self.auto_height_max = max.into();
        self
    }

    pub fn thumb_min_size(mut self, px: f64) -> Self {
        self.thumb_min_size = px;
        self
    }

    pub fn hide_tracks_when_not_needed(mut self, hide: bool) -> Self {
        self.hide_tracks_when_not_needed = hide;
        self
    }

    pub fn a11y_enabled(mut self, enabled: bool) -> Self {
        self.a11y_enabled = enabled;
        self
    }

    pub fn aria_label(mut self, label: impl Into<String>) -> Self {
        self.aria_label = label.into();
        self
    }

    pub fn keyboard_scroll_amount(mut self, px: f64) -> Self {
        self.keyboard_scroll_amount = px;
        self
    }

    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Replace the renderer for one part.
    pub fn render_with(mut self, slot: Slot, renderer: impl Renderer + 'static) -> Self {
        self.renderers.set(slot, Rc::new(renderer));
        self
    }

    /// Check that the options describe a usable widget.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.thumb_min_size.is_finite() || self.thumb_min_size < 0.0 {
            return Err(ConfigError::ThumbMinSize(self.thumb_min_size));
        }
        if !self.keyboard_scroll_amount.is_finite() || self.keyboard_scroll_amount <= 0.0 {
            return Err(ConfigError::KeyboardScrollAmount(self.keyboard_scroll_amount));
        }
        if self.auto_height {
            for length in [self.auto_height_min, self.auto_height_max] {
                if let Length::Px(px) = length {
                    if !px.is_finite() || px < 0.0 {
                        return Err(ConfigError::AutoHeightBound(px));
                    }
                }
            }
            if let (Length::Px(min), Length::Px(max)) =
                (self.auto_height_min, self.auto_height_max)
            {
                if min > max {
                    return Err(ConfigError::AutoHeightRange { min, max });
                }
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ScrollbarConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollbarConfig")
            .field("auto_hide", &self.auto_hide)
            .field("auto_hide_timeout", &self.auto_hide_timeout)
            .field("auto_hide_duration", &self.auto_hide_duration)
            .field("auto_height", &self.auto_height)
            .field("auto_height_min", &self.auto_height_min)
            .field("auto_height_max", &self.auto_height_max)
            .field("thumb_min_size", &self.thumb_min_size)
            .field("hide_tracks_when_not_needed", &self.hide_tracks_when_not_needed)
            .field("a11y_enabled", &self.a11y_enabled)
            .field("aria_label", &self.aria_label)
            .field("keyboard_scroll_amount", &self.keyboard_scroll_amount)
            .field("class_name", &self.class_name)
            .field("style", &self.style)
            .field("renderers", &self.renderers)
            .finish()
    }
}

/// Optional renderer per part. `None` uses the default element.
#[derive(Clone, Default)]
pub struct Renderers {
    pub view: Option<Rc<dyn Renderer>>,
    pub track_horizontal: Option<Rc<dyn Renderer>>,
    pub track_vertical: Option<Rc<dyn Renderer>>,
    pub thumb_horizontal: Option<Rc<dyn Renderer>>,
    pub thumb_vertical: Option<Rc<dyn Renderer>>,
}

impl Renderers {
    pub fn get(&self, slot: Slot) -> Option<&Rc<dyn Renderer>> {
        match slot {
            Slot::View => self.view.as_ref(),
            Slot::TrackHorizontal => self.track_horizontal.as_ref(),
            Slot::TrackVertical => self.track_vertical.as_ref(),
            Slot::ThumbHorizontal => self.thumb_horizontal.as_ref(),
            Slot::ThumbVertical => self.thumb_vertical.as_ref(),
            Slot::Container => None,
        }
    }

    /// The container has no override; setting it is ignored.
    pub fn set(&mut self, slot: Slot, renderer: Rc<dyn Renderer>) {
        let target = match slot {
            Slot::View => &mut self.view,
            Slot::TrackHorizontal => &mut self.track_horizontal,
            Slot::TrackVertical => &mut self.track_vertical,
            Slot::ThumbHorizontal => &mut self.thumb_horizontal,
            Slot::ThumbVertical => &mut self.thumb_vertical,
            Slot::Container => {
                log::warn!("container renderer override is not supported");
                return;
            }
        };
        *target = Some(renderer);
    }
}

impl fmt::Debug for Renderers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Renderers")
            .field("view", &self.view.is_some())
            .field("track_horizontal", &self.track_horizontal.is_some())
            .field("track_vertical", &self.track_vertical.is_some())
            .field("thumb_horizontal", &self.thumb_horizontal.is_some())
            .field("thumb_vertical", &self.thumb_vertical.is_some())
            .finish()
    }
}

/// Invalid configuration values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("thumb minimum size must be a non-negative number, got {0}")]
    ThumbMinSize(f64),

    #[error("keyboard scroll amount must be a positive number, got {0}")]
    KeyboardScrollAmount(f64),

    #[error("auto-height bound must be a non-negative number, got {0}")]
    AutoHeightBound(f64),

    #[error("auto-height minimum {min} exceeds maximum {max}")]
    AutoHeightRange { min: f64, max: f64 },
}
