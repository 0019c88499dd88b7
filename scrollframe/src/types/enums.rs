/// Scroll axis. `X` is horizontal, `Y` is vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Pick the component of a point that lies along this axis.
    pub fn pick(self, x: f64, y: f64) -> f64 {
        match self {
            Axis::X => x,
            Axis::Y => y,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "horizontal",
            Axis::Y => "vertical",
        }
    }
}

/// A CSS-like length.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    Px(f64),
    Percent(f32),
    #[default]
    Auto,
}

impl Length {
    /// Resolve against the length of the containing box.
    pub fn resolve(self, parent: f64) -> Option<f64> {
        match self {
            Length::Px(px) => Some(px),
            Length::Percent(pct) => Some(parent * f64::from(pct) / 100.0),
            Length::Auto => None,
        }
    }
}

impl From<f64> for Length {
    fn from(px: f64) -> Self {
        Length::Px(px)
    }
}

impl From<u16> for Length {
    fn from(px: u16) -> Self {
        Length::Px(f64::from(px))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Position {
    #[default]
    Static,
    Relative,
    Absolute,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    #[default]
    Visible,
    Hidden,
    Scroll,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Block,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Radius {
    Px(f64),
    #[default]
    Inherit,
}

/// Pointer cursor requested from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Default,
    Pointer,
    Grabbing,
}
