//! Conversions between scroll metrics and thumb geometry.
//!
//! Everything here is pure. Negative, NaN and infinite inputs are read as
//! zero, so a bad measurement yields an empty thumb at the track start.

use crate::metrics::AxisMetrics;

fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Thumb length for a track that spans the viewport.
///
/// `(track / content) * track`, but never below `min_size`. A `content_size`
/// of zero (or less) returns `min_size`. The result can exceed `track_size`
/// when `min_size` does; clamping is up to the caller.
pub fn thumb_size(track_size: f64, content_size: f64, min_size: f64) -> f64 {
    scaled_thumb_size(track_size, content_size, track_size, min_size)
}

/// Thumb offset within a track that spans the viewport.
///
/// Zero when the content fits (no scroll range). Otherwise scroll position is
/// mapped linearly from `[0, content - track]` onto `[0, track - thumb]`.
pub fn thumb_offset(
    thumb_size: f64,
    track_size: f64,
    content_size: f64,
    scroll_position: f64,
) -> f64 {
    scaled_thumb_offset(
        thumb_size,
        track_size,
        track_size,
        content_size,
        scroll_position,
    )
}

/// Content pixels per track pixel of thumb travel.
///
/// `None` when the thumb cannot move (it fills the track).
pub fn scroll_ratio(content_range: f64, track_size: f64, thumb_size: f64) -> Option<f64> {
    let travel = sanitize(track_size) - sanitize(thumb_size);
    if travel <= 0.0 {
        return None;
    }
    Some(sanitize(content_range) / travel)
}

/// Scroll position that centers the thumb under a click on the track.
///
/// `click_offset` is relative to the track start. The thumb is kept inside the
/// track, so the result always lies in `[0, content_range]`.
pub fn track_jump_target(
    click_offset: f64,
    track_size: f64,
    thumb_size: f64,
    content_range: f64,
) -> f64 {
    let track = sanitize(track_size);
    let thumb = sanitize(thumb_size).min(track);
    let Some(ratio) = scroll_ratio(content_range, track, thumb) else {
        return 0.0;
    };
    let click = if click_offset.is_finite() {
        click_offset
    } else {
        0.0
    };
    let thumb_start = (click - thumb / 2.0).clamp(0.0, track - thumb);
    (thumb_start * ratio).clamp(0.0, sanitize(content_range))
}

fn scaled_thumb_size(viewport: f64, content: f64, track: f64, min_size: f64) -> f64 {
    let min_size = sanitize(min_size);
    let content = sanitize(content);
    if content == 0.0 {
        return min_size;
    }
    (sanitize(viewport) / content * sanitize(track)).max(min_size)
}

fn scaled_thumb_offset(thumb: f64, track: f64, viewport: f64, content: f64, scroll: f64) -> f64 {
    let range = sanitize(content) - sanitize(viewport);
    if range <= 0.0 {
        return 0.0;
    }
    let travel = (sanitize(track) - sanitize(thumb)).max(0.0);
    sanitize(scroll) * travel / range
}

/// Size and offset of one thumb, in track pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ThumbGeometry {
    pub size: f64,
    pub offset: f64,
    /// Length of the track the thumb lives in.
    pub track: f64,
}

impl ThumbGeometry {
    /// Geometry for a rendered track of `track_len` pixels.
    ///
    /// When `track_len` equals the viewport this is exactly [`thumb_size`] and
    /// [`thumb_offset`]; otherwise the thumb keeps the viewport/content
    /// proportion of the track. Size is clamped to the track and the offset to
    /// `[0, track - size]`.
    pub fn for_axis(axis: AxisMetrics, track_len: f64, min_size: f64) -> Self {
        let track = sanitize(track_len);
        let size = scaled_thumb_size(axis.viewport, axis.content, track, min_size).min(track);
        let scroll = axis.scroll.min(axis.range());
        let offset = scaled_thumb_offset(size, track, axis.viewport, axis.content, scroll)
            .clamp(0.0, (track - size).max(0.0));
        Self {
            size,
            offset,
            track,
        }
    }

    /// Distance the thumb can move.
    pub fn travel(&self) -> f64 {
        (self.track - self.size).max(0.0)
    }

    /// Whether a track-relative position falls on the thumb.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.offset && position < self.offset + self.size
    }
}
