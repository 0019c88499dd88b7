/// A measured box, in the host's pixel units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Start coordinate along an axis.
    pub fn start(&self, axis: super::Axis) -> f64 {
        axis.pick(self.x, self.y)
    }

    /// Extent along an axis.
    pub fn length(&self, axis: super::Axis) -> f64 {
        axis.pick(self.width, self.height)
    }
}
