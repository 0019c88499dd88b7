mod common;

use common::{count, mounted, ms, recording_callbacks, TestHost};
use scrollframe::element::{find_element, find_slot};
use scrollframe::{
    Accessibility, Axis, Color, ConfigError, Display, Element, Event, Handler, Length,
    MemoryRegion, NodeRef, Rect, RenderProps, ResizeTarget, Role, ScrollRegion, Scrollbar,
    ScrollbarConfig, Slot, Style, TimerRole, Translate,
};

fn part(root: &Element, slot: Slot) -> &Element {
    find_slot(root, slot).unwrap_or_else(|| panic!("{slot:?} missing"))
}

// =============================================================================
// Render Structure
// =============================================================================

#[test]
fn test_render_tree_shape() {
    let (bar, _host) = mounted(ScrollbarConfig::default(), (100.0, 100.0), (100.0, 500.0));
    let root = bar.render();

    assert_eq!(root.slot, Some(Slot::Container));
    assert!(root.class_names.iter().any(|c| c == "scrollframe"));
    assert!(root.handles(Handler::KeyDown));

    let children = root.child_elements();
    assert_eq!(children.len(), 3);
    assert_eq!(children[0].slot, Some(Slot::View));
    assert_eq!(children[1].slot, Some(Slot::TrackHorizontal));
    assert_eq!(children[2].slot, Some(Slot::TrackVertical));

    assert_eq!(
        children[1].child_elements()[0].slot,
        Some(Slot::ThumbHorizontal)
    );
    assert_eq!(
        children[2].child_elements()[0].slot,
        Some(Slot::ThumbVertical)
    );
}

#[test]
fn test_render_node_refs_and_handlers() {
    let (bar, _host) = mounted(ScrollbarConfig::default(), (100.0, 100.0), (100.0, 500.0));
    let root = bar.render();

    let view = part(&root, Slot::View);
    assert_eq!(view.node_ref, Some(NodeRef::new(Slot::View)));
    assert!(view.handles(Handler::Scroll));

    let track = part(&root, Slot::TrackVertical);
    assert!(track.handles(Handler::PointerEnter));
    assert!(track.handles(Handler::PointerLeave));
    assert!(track.handles(Handler::Click(Axis::Y)));

    let thumb = part(&root, Slot::ThumbVertical);
    assert!(thumb.handles(Handler::PointerDown(Axis::Y)));
}

#[test]
fn test_view_children_are_rendered() {
    let (bar, _host) = mounted(ScrollbarConfig::default(), (100.0, 100.0), (100.0, 500.0));
    let bar = bar.with_children(vec![Element::text("hello").id("greeting")]);

    let root = bar.render();
    let view = part(&root, Slot::View);
    assert!(find_element(view, "greeting").is_some());
}

#[test]
fn test_thumb_style_follows_metrics() {
    let (mut bar, mut host) = mounted(
        ScrollbarConfig::new().thumb_min_size(10.0),
        (100.0, 100.0),
        (100.0, 500.0),
    );
    bar.view_mut().unwrap().set_scroll_top(100.0);
    bar.handle_event(Event::Scroll, &mut host);

    let root = bar.render();
    let thumb = part(&root, Slot::ThumbVertical);
    assert_eq!(thumb.style.height, Some(Length::Px(20.0)));
    assert_eq!(
        thumb.style.transform,
        Some(Translate {
            axis: Axis::Y,
            px: 20.0
        })
    );
    assert_eq!(thumb.style.background, Some(Color::rgba(0, 0, 0, 0.2)));
}

#[test]
fn test_thumb_uses_measured_track_length() {
    let (mut bar, _host) = mounted(
        ScrollbarConfig::new().thumb_min_size(0.0),
        (100.0, 100.0),
        (100.0, 400.0),
    );
    bar.measure(NodeRef::new(Slot::TrackVertical), Rect::new(96.0, 2.0, 6.0, 96.0));

    let geometry = bar.thumb_geometry(Axis::Y).unwrap();
    assert_eq!(geometry.size, 24.0);
    assert_eq!(geometry.track, 96.0);
    assert!(bar.thumb_geometry(Axis::X).is_none());
}

#[test]
fn test_track_accessibility() {
    let (mut bar, mut host) = mounted(ScrollbarConfig::default(), (100.0, 100.0), (100.0, 500.0));
    bar.view_mut().unwrap().set_scroll_top(200.0);
    bar.handle_event(Event::Scroll, &mut host);

    let root = bar.render();
    assert_eq!(root.a11y.role, Some(Role::Region));
    assert_eq!(root.a11y.label.as_deref(), Some("Scrollable content"));
    assert_eq!(root.a11y.tab_index, Some(0));

    let view = part(&root, Slot::View);
    let track = part(&root, Slot::TrackVertical);
    assert_eq!(track.a11y.role, Some(Role::Scrollbar));
    assert_eq!(track.a11y.orientation, Some(Axis::Y));
    assert_eq!(track.a11y.controls.as_deref(), Some(view.id.as_str()));
    assert_eq!(track.a11y.value_min, Some(0));
    assert_eq!(track.a11y.value_max, Some(100));
    assert_eq!(track.a11y.value_now, Some(50));

    let horizontal = part(&root, Slot::TrackHorizontal);
    assert_eq!(horizontal.a11y.value_now, Some(0));
}

#[test]
fn test_a11y_disabled() {
    let (bar, _host) = mounted(
        ScrollbarConfig::new().a11y_enabled(false),
        (100.0, 100.0),
        (100.0, 500.0),
    );
    let root = bar.render();

    assert_eq!(
        root.a11y,
        Accessibility {
            tab_index: Some(-1),
            ..Default::default()
        }
    );
    assert_eq!(part(&root, Slot::TrackVertical).a11y, Accessibility::default());
}

#[test]
fn test_aria_label() {
    let (bar, _host) = mounted(
        ScrollbarConfig::new().aria_label("Log output"),
        (100.0, 100.0),
        (100.0, 500.0),
    );
    assert_eq!(bar.render().a11y.label.as_deref(), Some("Log output"));
}

// =============================================================================
// Container Options
// =============================================================================

#[test]
fn test_class_name_and_style() {
    let config = ScrollbarConfig::new()
        .class_name("panel")
        .style(Style::new().background(Color::rgb(10, 20, 30)));
    let (bar, _host) = mounted(config, (100.0, 100.0), (100.0, 500.0));
    let root = bar.render();

    assert!(root.class_names.iter().any(|c| c == "scrollframe"));
    assert!(root.class_names.iter().any(|c| c == "panel"));
    assert_eq!(root.style.background, Some(Color::rgb(10, 20, 30)));
}

#[test]
fn test_auto_height_bounds() {
    let config = ScrollbarConfig::new().auto_height(50.0, 300.0);
    let (bar, _host) = mounted(config, (100.0, 100.0), (100.0, 500.0));
    let root = bar.render();

    assert_eq!(root.style.height, Some(Length::Auto));
    assert_eq!(root.style.min_height, Some(Length::Px(50.0)));
    assert_eq!(root.style.max_height, Some(Length::Px(300.0)));
}

#[test]
fn test_without_auto_height_fills_parent() {
    let (bar, _host) = mounted(ScrollbarConfig::default(), (100.0, 100.0), (100.0, 500.0));
    let root = bar.render();

    assert_eq!(root.style.height, Some(Length::Percent(100.0)));
    assert_eq!(root.style.min_height, None);
}

// =============================================================================
// Render Overrides
// =============================================================================

#[test]
fn test_thumb_override_skips_default_style() {
    let config = ScrollbarConfig::new()
        .thumb_min_size(10.0)
        .render_with(Slot::ThumbVertical, |props: RenderProps| {
            props.into_element().class("custom-thumb")
        });
    let (bar, _host) = mounted(config, (100.0, 100.0), (100.0, 500.0));
    let root = bar.render();

    let thumb = part(&root, Slot::ThumbVertical);
    assert!(thumb.class_names.iter().any(|c| c == "custom-thumb"));
    assert_eq!(thumb.style.background, None);
    assert_eq!(thumb.style.cursor, None);
    // Geometry is still supplied
    assert_eq!(thumb.style.height, Some(Length::Px(20.0)));
    assert!(thumb.handles(Handler::PointerDown(Axis::Y)));

    // The other thumb keeps its defaults
    let other = part(&root, Slot::ThumbHorizontal);
    assert_eq!(other.style.background, Some(Color::rgba(0, 0, 0, 0.2)));
}

#[test]
fn test_track_override_keeps_visibility_style() {
    let config = ScrollbarConfig::new().render_with(Slot::TrackVertical, |props: RenderProps| {
        Element::box_()
            .id("my-track")
            .style(props.style)
            .handlers(props.handlers)
            .node_ref(props.node_ref)
            .children(props.children)
    });
    let (bar, _host) = mounted(config, (100.0, 100.0), (100.0, 500.0));
    let root = bar.render();

    let track = find_element(&root, "my-track").unwrap();
    assert_eq!(track.style.position, None);
    assert_eq!(track.style.opacity, Some(1.0));
    assert_eq!(track.a11y.role, None);
    assert_eq!(track.node_ref, Some(NodeRef::new(Slot::TrackVertical)));
    assert!(find_slot(track, Slot::ThumbVertical).is_some());
}

#[test]
fn test_view_override_loses_default_id() {
    let config = ScrollbarConfig::new().render_with(Slot::View, |props: RenderProps| {
        props.into_element().id("custom-view")
    });
    let (bar, _host) = mounted(config, (100.0, 100.0), (100.0, 500.0));
    let root = bar.render();

    assert!(find_element(&root, "custom-view").is_some());
    assert!(find_element(&root, "scrollable-content").is_none());
}

// =============================================================================
// Hiding Unneeded Tracks
// =============================================================================

#[test]
fn test_unneeded_track_is_not_displayed() {
    let config = ScrollbarConfig::new().hide_tracks_when_not_needed(true);
    let (mut bar, mut host) = mounted(config, (100.0, 100.0), (100.0, 500.0));
    let root = bar.render();

    assert_eq!(
        part(&root, Slot::TrackHorizontal).style.display,
        Some(Display::None)
    );
    assert_eq!(
        part(&root, Slot::TrackVertical).style.display,
        Some(Display::Block)
    );

    assert!(!bar.is_track_active(Axis::X));
    assert!(!bar.handle_event(Event::PointerEnterTrack(Axis::X), &mut host).is_consumed());
    assert!(!bar
        .handle_event(
            Event::ThumbPointerDown {
                axis: Axis::X,
                x: 10.0,
                y: 98.0,
                button: scrollframe::MouseButton::Left,
            },
            &mut host,
        )
        .is_consumed());
    assert!(!host.captured);
}

#[test]
fn test_track_appears_when_content_grows() {
    let config = ScrollbarConfig::new().hide_tracks_when_not_needed(true);
    let (mut bar, mut host) = mounted(config, (100.0, 100.0), (100.0, 500.0));

    bar.view_mut().unwrap().resize_content(300.0, 500.0);
    bar.handle_event(Event::Resize(ResizeTarget::View), &mut host);

    assert!(bar.is_track_active(Axis::X));
    assert!(!bar.render().child_elements()[1].style.is_hidden());
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_mount_observes_and_measures() {
    let (bar, host) = mounted(ScrollbarConfig::default(), (100.0, 80.0), (300.0, 500.0));

    assert!(bar.is_mounted());
    assert_eq!(host.observed, vec![ResizeTarget::Container, ResizeTarget::View]);
    let metrics = bar.metrics();
    assert_eq!(metrics.client_width, 100.0);
    assert_eq!(metrics.client_height, 80.0);
    assert_eq!(metrics.scroll_width, 300.0);
    assert_eq!(metrics.scroll_height, 500.0);
}

#[test]
fn test_missing_view_is_a_no_op() {
    let mut host = TestHost::new();
    let (callbacks, log) = recording_callbacks();
    let mut bar: Scrollbar<MemoryRegion> = Scrollbar::default().with_callbacks(callbacks);
    bar.mount(&mut host);

    assert_eq!(host.observed, vec![ResizeTarget::Container]);
    assert!(!bar.handle_event(Event::Scroll, &mut host).is_consumed());
    assert!(!bar.handle_event(Event::Resize(ResizeTarget::Container), &mut host).is_consumed());
    assert!(log.borrow().is_empty());
    assert!(host.timers.is_empty());

    // Rendering without a view still works
    let root = bar.render();
    assert_eq!(root.child_elements().len(), 3);

    bar.attach_view(MemoryRegion::new(100.0, 100.0, 100.0, 500.0), &mut host);
    assert_eq!(host.observed, vec![ResizeTarget::Container, ResizeTarget::View]);
    assert_eq!(count(&log, "update"), 1);
    assert_eq!(bar.metrics().scroll_height, 500.0);
}

#[test]
fn test_unmount_cancels_timers() {
    let config = ScrollbarConfig::new()
        .auto_hide(true)
        .auto_hide_timeout(ms(300));
    let (mut bar, mut host) = mounted(config, (100.0, 100.0), (100.0, 500.0));
    let (callbacks, log) = recording_callbacks();
    bar.set_callbacks(callbacks);

    bar.view_mut().unwrap().set_scroll_top(10.0);
    bar.handle_event(Event::Scroll, &mut host);
    assert_eq!(host.timers.pending_with_role(TimerRole::ScrollStop), 1);

    bar.unmount(&mut host);
    assert!(host.timers.is_empty());
    assert!(host.observed.is_empty());
    assert!(!bar.is_mounted());

    host.advance(&mut bar, ms(10_000));
    assert_eq!(count(&log, "stop"), 0);
}

#[test]
fn test_events_after_unmount_are_ignored() {
    let (mut bar, mut host) = mounted(ScrollbarConfig::default(), (100.0, 100.0), (100.0, 500.0));
    bar.unmount(&mut host);

    bar.view_mut().unwrap().set_scroll_top(10.0);
    assert!(!bar.handle_event(Event::Scroll, &mut host).is_consumed());
    let down = Event::ThumbPointerDown {
        axis: Axis::Y,
        x: 98.0,
        y: 5.0,
        button: scrollframe::MouseButton::Left,
    };
    assert!(!bar.handle_event(down, &mut host).is_consumed());

    assert!(host.timers.is_empty());
    assert!(!host.captured);
    assert!(!bar.is_dragging());
    assert!(!bar.is_scrolling());
}

#[test]
fn test_events_before_mount_are_ignored() {
    let mut host = TestHost::new();
    let mut bar: Scrollbar<MemoryRegion> = Scrollbar::default();
    bar.attach_view(MemoryRegion::new(100.0, 100.0, 100.0, 500.0), &mut host);

    bar.view_mut().unwrap().set_scroll_top(10.0);
    assert!(!bar.handle_event(Event::Scroll, &mut host).is_consumed());
    assert!(!bar.handle_event(Event::Focus, &mut host).is_consumed());
    assert!(host.timers.is_empty());
    assert!(!bar.is_focused());

    bar.mount(&mut host);
    assert_eq!(bar.metrics().scroll_top, 10.0);
    assert!(bar.handle_event(Event::Focus, &mut host).is_consumed());
}

#[test]
fn test_stale_timer_is_ignored() {
    let (mut bar, mut host) = mounted(ScrollbarConfig::default(), (100.0, 100.0), (100.0, 500.0));

    let result = bar.handle_event(
        Event::Timer(scrollframe::TimerHandle::new(999)),
        &mut host,
    );
    assert!(!result.is_consumed());
}

#[test]
fn test_focus_tracking() {
    let (mut bar, mut host) = mounted(ScrollbarConfig::default(), (100.0, 100.0), (100.0, 500.0));

    bar.handle_event(Event::Focus, &mut host);
    assert!(bar.is_focused());
    bar.handle_event(Event::Blur, &mut host);
    assert!(!bar.is_focused());
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_default_config() {
    let config = ScrollbarConfig::default();

    assert!(!config.auto_hide);
    assert_eq!(config.auto_hide_timeout, ms(1000));
    assert_eq!(config.auto_hide_duration, ms(200));
    assert!(!config.auto_height);
    assert_eq!(config.auto_height_min, Length::Px(0.0));
    assert_eq!(config.auto_height_max, Length::Px(200.0));
    assert_eq!(config.thumb_min_size, 30.0);
    assert!(!config.hide_tracks_when_not_needed);
    assert!(config.a11y_enabled);
    assert_eq!(config.aria_label, "Scrollable content");
    assert_eq!(config.keyboard_scroll_amount, 40.0);
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_config_is_rejected() {
    let result = Scrollbar::<MemoryRegion>::try_new(ScrollbarConfig::new().thumb_min_size(-1.0));
    assert!(matches!(result, Err(ConfigError::ThumbMinSize(_))));

    let result =
        Scrollbar::<MemoryRegion>::try_new(ScrollbarConfig::new().keyboard_scroll_amount(0.0));
    assert!(matches!(result, Err(ConfigError::KeyboardScrollAmount(_))));

    let result =
        Scrollbar::<MemoryRegion>::try_new(ScrollbarConfig::new().auto_height(300.0, 100.0));
    assert!(matches!(
        result,
        Err(ConfigError::AutoHeightRange { min, max }) if min == 300.0 && max == 100.0
    ));

    let result =
        Scrollbar::<MemoryRegion>::try_new(ScrollbarConfig::new().auto_height(f64::NAN, 100.0));
    assert!(matches!(result, Err(ConfigError::AutoHeightBound(_))));
}

#[test]
fn test_try_set_config_keeps_old_config_on_error() {
    let (mut bar, mut host) = mounted(ScrollbarConfig::default(), (100.0, 100.0), (100.0, 500.0));

    let result = bar.try_set_config(ScrollbarConfig::new().thumb_min_size(f64::NAN), &mut host);
    assert!(result.is_err());
    assert_eq!(bar.config().thumb_min_size, 30.0);
}

#[test]
fn test_set_config_applies_auto_hide() {
    let (mut bar, mut host) = mounted(ScrollbarConfig::default(), (100.0, 100.0), (100.0, 500.0));

    bar.set_config(
        ScrollbarConfig::new().auto_hide(true).auto_hide_timeout(ms(250)),
        &mut host,
    );
    host.advance(&mut bar, ms(250));
    assert_eq!(bar.visibility(), scrollframe::VisibilityState::Hidden);
}

#[test]
fn test_config_error_messages() {
    assert_eq!(
        ConfigError::AutoHeightRange {
            min: 300.0,
            max: 100.0
        }
        .to_string(),
        "auto-height minimum 300 exceeds maximum 100"
    );
}
