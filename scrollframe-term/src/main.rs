mod app;
mod buffer;
mod error;
mod host;
mod input;
mod layout;
mod paint;
mod terminal;
mod view;

use std::env;
use std::fs::File;

use log::{debug, error, info};
use scrollframe::{
    Axis, Callbacks, Color, Element, Length, Position, RenderProps, Scrollbar, ScrollbarConfig,
    Slot, Style,
};
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::error::Result;
use crate::terminal::Terminal;
use crate::view::TextView;

const DEFAULT_LOG_FILE: &str = "scrollframe.log";

const TRACK_COLOR: Color = Color::rgba(255, 255, 255, 0.08);
const THUMB_COLOR: Color = Color::rgb(122, 162, 247);

#[tokio::main]
async fn main() -> Result<()> {
    let log_path = env::var("SCROLLFRAME_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    WriteLogger::init(LevelFilter::Debug, Config::default(), File::create(&log_path)?)?;

    let auto_hide = env::var("SCROLLFRAME_AUTO_HIDE")
        .map(|value| matches!(value.as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);
    info!("starting (auto_hide={auto_hide}, log={log_path})");

    let bar = Scrollbar::try_new(demo_config(auto_hide))?.with_callbacks(
        Callbacks::new()
            .on_scroll_start(|| debug!("scroll start"))
            .on_scroll_stop(|| debug!("scroll stop"))
            .on_update(|metrics| {
                log::trace!(
                    "update: top={:.3} left={:.3}",
                    metrics.top,
                    metrics.left
                )
            }),
    );

    let terminal = Terminal::new()?;
    let result = App::new(bar, TextView::new(demo_lines()), terminal)
        .run()
        .await;
    if let Err(e) = &result {
        error!("{}", e);
    }
    result
}

/// Widget config with one-cell tracks drawn by custom renderers.
pub(crate) fn demo_config(auto_hide: bool) -> ScrollbarConfig {
    ScrollbarConfig::new()
        .auto_hide(auto_hide)
        .thumb_min_size(1.0)
        .keyboard_scroll_amount(3.0)
        .aria_label("Demo text")
        .render_with(Slot::TrackHorizontal, track(Axis::X))
        .render_with(Slot::TrackVertical, track(Axis::Y))
        .render_with(Slot::ThumbHorizontal, thumb(Axis::X))
        .render_with(Slot::ThumbVertical, thumb(Axis::Y))
}

fn track(axis: Axis) -> impl Fn(RenderProps) -> Element {
    move |mut props: RenderProps| {
        let base = Style::new()
            .position(Position::Absolute)
            .background(TRACK_COLOR);
        // The two tracks leave the bottom-right corner to each other
        let base = match axis {
            Axis::X => base.left(0.0).right(1.0).bottom(0.0).height(1.0),
            Axis::Y => base.top(0.0).right(0.0).bottom(1.0).width(1.0),
        };
        props.style = base.merge(props.style);
        props.into_element()
    }
}

fn thumb(axis: Axis) -> impl Fn(RenderProps) -> Element {
    move |mut props: RenderProps| {
        let base = Style::new()
            .position(Position::Absolute)
            .background(THUMB_COLOR);
        let base = match axis {
            Axis::X => base.top(0.0).height(Length::Percent(100.0)),
            Axis::Y => base.left(0.0).width(Length::Percent(100.0)),
        };
        props.style = base.merge(props.style);
        props.into_element()
    }
}

/// Text long and wide enough to scroll both ways.
pub(crate) fn demo_lines() -> Vec<String> {
    let mut lines = vec![
        "scrollframe demo".to_string(),
        String::new(),
        "Wheel, drag a thumb, click a track, or click here and use the arrow keys.".to_string(),
        "Home/End/PageUp/PageDown work too. q or Esc quits.".to_string(),
        "Wide characters are measured by display width: 日本語のテキスト, 한국어, 中文.".to_string(),
        String::new(),
    ];
    for n in 1..=200 {
        let ruler = "----+----|".repeat(n % 12 + 1);
        lines.push(format!("{n:>4}  {ruler}"));
    }
    lines
}
