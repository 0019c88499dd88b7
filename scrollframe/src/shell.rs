//! The scrollbar widget.
//!
//! [`Scrollbar`] wraps a [`ScrollRegion`] and keeps a pair of synthetic tracks
//! in step with it. The host feeds it [`Event`]s and paints whatever
//! [`Scrollbar::render`] returns; the widget writes scroll positions straight
//! into the region, and the resulting scroll notification closes the loop.

use log::{debug, trace};

use crate::callbacks::Callbacks;
use crate::config::{ConfigError, ScrollbarConfig};
use crate::drag::DragController;
use crate::element::{Accessibility, Element, Handler, NodeRef, Role, Slot};
use crate::event::{Event, EventResult, Key, MouseButton};
use crate::geometry::{track_jump_target, ThumbGeometry};
use crate::host::{Host, ResizeTarget};
use crate::keyboard::KeyboardNavigator;
use crate::metrics::ScrollMetrics;
use crate::region::{MemoryRegion, ScrollRegion};
use crate::render::{self, RenderProps, SlotRenderer};
use crate::timer::TimerHandle;
use crate::tracker::{ScrollEdge, ScrollTracker};
use crate::transitions::Transition;
use crate::types::{Axis, Display, Length, Rect, Style};
use crate::visibility::{VisibilityController, VisibilityState};

/// Id given to the default view, referenced by the tracks' `controls`.
pub const VIEW_ID: &str = "scrollable-content";

const ROOT_CLASS: &str = "scrollframe";

#[derive(Debug)]
pub struct Scrollbar<V: ScrollRegion = MemoryRegion> {
    config: ScrollbarConfig,
    callbacks: Callbacks,
    children: Vec<Element>,
    view: Option<V>,
    track_horizontal: Option<Rect>,
    track_vertical: Option<Rect>,
    tracker: ScrollTracker,
    visibility: VisibilityController,
    drag: DragController,
    keyboard: KeyboardNavigator,
    focused: bool,
    mounted: bool,
}

impl<V: ScrollRegion> Scrollbar<V> {
    /// A widget with the given config. The config is not validated; use
    /// [`Scrollbar::try_new`] for untrusted input.
    pub fn new(config: ScrollbarConfig) -> Self {
        let visibility = VisibilityController::new(config.auto_hide, config.auto_hide_timeout);
        let keyboard = KeyboardNavigator::new(config.keyboard_scroll_amount);
        Self {
            config,
            callbacks: Callbacks::default(),
            children: Vec::new(),
            view: None,
            track_horizontal: None,
            track_vertical: None,
            tracker: ScrollTracker::new(),
            visibility,
            drag: DragController::new(),
            keyboard,
            focused: false,
            mounted: false,
        }
    }

    pub fn try_new(config: ScrollbarConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn with_callbacks(mut self, callbacks: Callbacks) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn set_callbacks(&mut self, callbacks: Callbacks) {
        self.callbacks = callbacks;
    }

    /// Content placed inside the view.
    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }

    pub fn set_children(&mut self, children: Vec<Element>) {
        self.children = children;
    }

    pub fn config(&self) -> &ScrollbarConfig {
        &self.config
    }

    /// Last computed metrics.
    pub fn metrics(&self) -> ScrollMetrics {
        self.tracker.metrics()
    }

    pub fn visibility(&self) -> VisibilityState {
        self.visibility.state()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    pub fn is_scrolling(&self) -> bool {
        self.tracker.is_scrolling()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn view(&self) -> Option<&V> {
        self.view.as_ref()
    }

    /// Mutable access to the view, e.g. to change its content. Report the
    /// change with [`Event::Resize`] afterwards.
    pub fn view_mut(&mut self) -> Option<&mut V> {
        self.view.as_mut()
    }

    /// Start observing sizes and take the first measurement.
    pub fn mount<H: Host + ?Sized>(&mut self, host: &mut H) {
        if self.mounted {
            return;
        }
        debug!("mounting scrollbar");
        self.mounted = true;
        host.observe(ResizeTarget::Container);
        if self.view.is_some() {
            host.observe(ResizeTarget::View);
        }
        self.update();
    }

    /// Attach the scrollable view. Until a view is attached every operation
    /// that needs it is a no-op.
    pub fn attach_view<H: Host + ?Sized>(&mut self, view: V, host: &mut H) {
        self.view = Some(view);
        if self.mounted {
            host.observe(ResizeTarget::View);
            self.update();
        }
    }

    /// Detach the view, ending any drag that depends on it.
    pub fn detach_view<H: Host + ?Sized>(&mut self, host: &mut H) -> Option<V> {
        self.end_drag(host);
        self.view.take()
    }

    /// Swap the configuration.
    pub fn set_config<H: Host + ?Sized>(&mut self, config: ScrollbarConfig, host: &mut H) {
        self.visibility
            .configure(config.auto_hide, config.auto_hide_timeout, host);
        self.keyboard = KeyboardNavigator::new(config.keyboard_scroll_amount);
        self.config = config;
        if self.mounted {
            self.update();
        }
    }

    pub fn try_set_config<H: Host + ?Sized>(
        &mut self,
        config: ScrollbarConfig,
        host: &mut H,
    ) -> Result<(), ConfigError> {
        config.validate()?;
        self.set_config(config, host);
        Ok(())
    }

    /// Record the measured box of a referenced element.
    ///
    /// Track boxes drive thumb geometry and track-click hit positions; other
    /// slots are not needed and are ignored.
    pub fn measure(&mut self, node_ref: NodeRef, rect: Rect) {
        match node_ref.slot() {
            Slot::TrackHorizontal => self.track_horizontal = Some(rect),
            Slot::TrackVertical => self.track_vertical = Some(rect),
            _ => {}
        }
    }

    /// Measured box of a track, if the host reported one.
    pub fn track_rect(&self, axis: Axis) -> Option<Rect> {
        match axis {
            Axis::X => self.track_horizontal,
            Axis::Y => self.track_vertical,
        }
    }

    /// Current thumb geometry, or `None` when the axis has nothing to scroll.
    pub fn thumb_geometry(&self, axis: Axis) -> Option<ThumbGeometry> {
        self.geometry_for(&self.tracker.metrics(), axis)
    }

    /// Whether a track takes part in rendering and input.
    pub fn is_track_active(&self, axis: Axis) -> bool {
        !self.config.hide_tracks_when_not_needed
            || self.tracker.metrics().axis(axis).has_overflow()
    }

    /// Dispatch one event. Events reaching an unmounted widget are ignored.
    pub fn handle_event<H: Host + ?Sized>(&mut self, event: Event, host: &mut H) -> EventResult {
        if !self.mounted {
            trace!("ignoring {:?} while unmounted", event);
            return EventResult::Ignored;
        }
        trace!("event: {:?}", event);
        let result = match event {
            Event::Scroll => self.on_scroll(host),
            Event::Resize(target) => {
                trace!("{:?} resized", target);
                self.update()
            }
            Event::PointerEnterTrack(axis) => {
                if !self.is_track_active(axis) {
                    return EventResult::Ignored;
                }
                self.visibility.pointer_entered(host);
                EventResult::Consumed
            }
            Event::PointerLeaveTrack(axis) => {
                if !self.visibility.is_pointer_over_track() {
                    return EventResult::Ignored;
                }
                trace!("pointer left {} track", axis.name());
                self.visibility.pointer_left(host);
                EventResult::Consumed
            }
            Event::ThumbPointerDown { axis, x, y, button } => {
                self.begin_drag(axis, x, y, button, host)
            }
            Event::PointerMove { x, y } => self.drag_to(x, y),
            Event::PointerUp { .. } => {
                if self.end_drag(host) {
                    EventResult::Consumed
                } else {
                    EventResult::Ignored
                }
            }
            Event::TrackClick { axis, x, y, button } => self.track_click(axis, x, y, button),
            Event::KeyDown { key, .. } => self.key_down(key),
            Event::Focus => {
                self.focused = true;
                EventResult::Consumed
            }
            Event::Blur => {
                self.focused = false;
                EventResult::Consumed
            }
            Event::Timer(handle) => self.timer_fired(handle, host),
        };

        self.flush_scroll(host);
        result
    }

    /// Stop everything: timers, drag capture, resize observation.
    pub fn unmount<H: Host + ?Sized>(&mut self, host: &mut H) {
        if !self.mounted {
            return;
        }
        debug!("unmounting scrollbar");
        self.tracker.cancel(host);
        self.visibility.cancel(host);
        self.drag.end(host);
        host.disconnect();
        self.focused = false;
        self.mounted = false;
    }

    /// Build the element tree for the current state.
    pub fn render(&self) -> Element {
        let metrics = self.tracker.metrics();
        let config = &self.config;

        let mut container_style = render::container_style();
        if config.auto_height {
            container_style = container_style.merge(
                Style::new()
                    .height(Length::Auto)
                    .min_height(config.auto_height_min)
                    .max_height(config.auto_height_max),
            );
        }
        container_style = container_style.merge(config.style.clone());

        let a11y = if config.a11y_enabled {
            Accessibility {
                role: Some(Role::Region),
                label: Some(config.aria_label.clone()),
                tab_index: Some(0),
                ..Default::default()
            }
        } else {
            Accessibility {
                tab_index: Some(-1),
                ..Default::default()
            }
        };

        let mut container = Element::box_()
            .id("scrollframe")
            .slot(Slot::Container)
            .node_ref(NodeRef::new(Slot::Container))
            .class(ROOT_CLASS)
            .style(container_style)
            .handler(Handler::KeyDown)
            .a11y(a11y);
        if let Some(class) = &config.class_name {
            container = container.class(class.clone());
        }

        container
            .child(self.render_view())
            .child(self.render_track(Axis::X, &metrics))
            .child(self.render_track(Axis::Y, &metrics))
    }

    fn render_view(&self) -> Element {
        let renderer = SlotRenderer::select(self.config.renderers.get(Slot::View));
        let props = RenderProps {
            style: renderer.base_style(render::view_style),
            handlers: vec![Handler::Scroll],
            children: self.children.clone(),
            node_ref: NodeRef::new(Slot::View),
        };
        let element = renderer.render(props);
        if renderer.is_default() {
            element.id(VIEW_ID)
        } else {
            element
        }
    }

    fn render_track(&self, axis: Axis, metrics: &ScrollMetrics) -> Element {
        let slot = Slot::track(axis);
        let renderer = SlotRenderer::select(self.config.renderers.get(slot));

        let opacity = if self.visibility.is_visible() { 1.0 } else { 0.0 };
        let display = if self.is_track_active(axis) {
            Display::Block
        } else {
            Display::None
        };
        let style = renderer.base_style(|| render::track_style(axis)).merge(
            Style::new()
                .opacity(opacity)
                .transition(Transition::ease_in_out(self.config.auto_hide_duration))
                .display(display),
        );

        let props = RenderProps {
            style,
            handlers: vec![Handler::PointerEnter, Handler::PointerLeave, Handler::Click(axis)],
            children: vec![self.render_thumb(axis, metrics)],
            node_ref: NodeRef::new(slot),
        };
        let element = renderer.render(props);

        if renderer.is_default() && self.config.a11y_enabled {
            let value = (metrics.fraction(axis) * 100.0).round().clamp(0.0, 100.0) as u8;
            element.a11y(Accessibility {
                role: Some(Role::Scrollbar),
                orientation: Some(axis),
                controls: Some(VIEW_ID.to_string()),
                value_min: Some(0),
                value_max: Some(100),
                value_now: Some(value),
                ..Default::default()
            })
        } else {
            element
        }
    }

    fn render_thumb(&self, axis: Axis, metrics: &ScrollMetrics) -> Element {
        let slot = Slot::thumb(axis);
        let renderer = SlotRenderer::select(self.config.renderers.get(slot));
        let geometry = self.geometry_for(metrics, axis).unwrap_or_default();

        let style = renderer
            .base_style(|| render::thumb_style(axis))
            .merge(Style::new().extent(axis, geometry.size).translate(axis, geometry.offset));

        renderer.render(RenderProps {
            style,
            handlers: vec![Handler::PointerDown(axis)],
            children: Vec::new(),
            node_ref: NodeRef::new(slot),
        })
    }

    fn geometry_for(&self, metrics: &ScrollMetrics, axis: Axis) -> Option<ThumbGeometry> {
        let axis_metrics = metrics.axis(axis);
        if !axis_metrics.has_overflow() {
            return None;
        }
        let track_len = self
            .track_rect(axis)
            .map(|rect| rect.length(axis))
            .unwrap_or(axis_metrics.viewport);
        Some(ThumbGeometry::for_axis(
            axis_metrics,
            track_len,
            self.config.thumb_min_size,
        ))
    }

    fn update(&mut self) -> EventResult {
        let Some(view) = self.view.as_ref() else {
            debug!("update skipped: no view attached");
            return EventResult::Ignored;
        };
        self.tracker.update(view, &mut self.callbacks);
        EventResult::Consumed
    }

    fn on_scroll<H: Host + ?Sized>(&mut self, host: &mut H) -> EventResult {
        let Some(view) = self.view.as_mut() else {
            debug!("scroll skipped: no view attached");
            return EventResult::Ignored;
        };
        // This event is the notification; don't deliver it twice
        view.take_scroll_notification();
        if self.tracker.scroll(&*view, &mut self.callbacks, host) == ScrollEdge::Started {
            self.visibility.scroll_started(host);
        }
        EventResult::Consumed
    }

    /// Deliver the view's own scroll notification, if it has one pending.
    fn flush_scroll<H: Host + ?Sized>(&mut self, host: &mut H) {
        let pending = self
            .view
            .as_mut()
            .is_some_and(|view| view.take_scroll_notification());
        if pending {
            self.on_scroll(host);
        }
    }

    fn begin_drag<H: Host + ?Sized>(
        &mut self,
        axis: Axis,
        x: f64,
        y: f64,
        button: MouseButton,
        host: &mut H,
    ) -> EventResult {
        if button != MouseButton::Left || !self.is_track_active(axis) {
            return EventResult::Ignored;
        }
        let Some(view) = self.view.as_ref() else {
            debug!("drag skipped: no view attached");
            return EventResult::Ignored;
        };
        let (left, top) = (view.scroll_left(), view.scroll_top());
        if !self.drag.begin(axis, x, y, left, top, host) {
            return EventResult::Ignored;
        }
        self.visibility.drag_started(host);
        EventResult::Consumed
    }

    fn drag_to(&mut self, x: f64, y: f64) -> EventResult {
        let Some(axis) = self.drag.session().map(|session| session.axis) else {
            return EventResult::Ignored;
        };
        let Some(view) = self.view.as_ref() else {
            return EventResult::Ignored;
        };
        let metrics = ScrollMetrics::measure(view);
        let Some(geometry) = self.geometry_for(&metrics, axis) else {
            return EventResult::Consumed;
        };
        let range = metrics.axis(axis).range();
        if let Some(position) = self.drag.pointer_move(x, y, geometry, range) {
            trace!("drag {} to {position}", axis.name());
            if let Some(view) = self.view.as_mut() {
                view.set_scroll_position(axis, position);
            }
        }
        EventResult::Consumed
    }

    fn end_drag<H: Host + ?Sized>(&mut self, host: &mut H) -> bool {
        if self.drag.end(host).is_none() {
            return false;
        }
        self.visibility.drag_ended(host);
        true
    }

    fn track_click(&mut self, axis: Axis, x: f64, y: f64, button: MouseButton) -> EventResult {
        if button != MouseButton::Left || !self.is_track_active(axis) {
            return EventResult::Ignored;
        }
        let Some(view) = self.view.as_ref() else {
            debug!("track click skipped: no view attached");
            return EventResult::Ignored;
        };
        let Some(track) = self.track_rect(axis) else {
            debug!("track click skipped: {} track not measured", axis.name());
            return EventResult::Ignored;
        };
        let metrics = ScrollMetrics::measure(view);
        let Some(geometry) = self.geometry_for(&metrics, axis) else {
            return EventResult::Ignored;
        };

        let click_offset = axis.pick(x, y) - track.start(axis);
        if geometry.contains(click_offset) {
            return EventResult::Ignored;
        }

        let target = track_jump_target(
            click_offset,
            geometry.track,
            geometry.size,
            metrics.axis(axis).range(),
        );
        debug!("track click on {} jumps to {target}", axis.name());
        if let Some(view) = self.view.as_mut() {
            view.set_scroll_position(axis, target);
        }
        EventResult::Consumed
    }

    fn key_down(&mut self, key: Key) -> EventResult {
        if !self.config.a11y_enabled || !self.focused {
            return EventResult::Ignored;
        }
        let Some(view) = self.view.as_mut() else {
            return EventResult::Ignored;
        };
        let metrics = ScrollMetrics::measure(&*view);
        let Some(command) = self.keyboard.navigate(key, &metrics) else {
            return EventResult::Ignored;
        };
        trace!("key {:?} scrolls {} to {}", key, command.axis.name(), command.position);
        view.set_scroll_position(command.axis, command.position);
        EventResult::Consumed
    }

    fn timer_fired<H: Host + ?Sized>(&mut self, handle: TimerHandle, host: &mut H) -> EventResult {
        if self.tracker.timer_fired(handle, &mut self.callbacks) {
            self.visibility.scroll_stopped(host);
            EventResult::Consumed
        } else if self.visibility.timer_fired(handle) {
            EventResult::Consumed
        } else {
            trace!("stale timer {:?}", handle);
            EventResult::Ignored
        }
    }
}

impl Default for Scrollbar<MemoryRegion> {
    fn default() -> Self {
        Self::new(ScrollbarConfig::default())
    }
}
