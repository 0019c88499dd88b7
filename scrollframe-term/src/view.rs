use scrollframe::{MemoryRegion, ScrollRegion};
use unicode_width::UnicodeWidthStr;

/// Scrollable lines of text, measured in terminal cells.
#[derive(Debug, Clone)]
pub struct TextView {
    lines: Vec<String>,
    region: MemoryRegion,
}

impl TextView {
    pub fn new(lines: Vec<String>) -> Self {
        let width = lines.iter().map(|line| line.width()).max().unwrap_or(0);
        let region = MemoryRegion::new(0.0, 0.0, width as f64, lines.len() as f64);
        Self { lines, region }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Resize the visible box. Returns true if the size changed.
    pub fn set_viewport(&mut self, width: f64, height: f64) -> bool {
        if self.region.client_width() == width && self.region.client_height() == height {
            return false;
        }
        self.region.resize_viewport(width, height);
        true
    }

    pub fn scroll_by(&mut self, dx: f64, dy: f64) {
        self.region.scroll_by(dx, dy);
    }
}

impl ScrollRegion for TextView {
    fn scroll_left(&self) -> f64 {
        self.region.scroll_left()
    }

    fn scroll_top(&self) -> f64 {
        self.region.scroll_top()
    }

    fn scroll_width(&self) -> f64 {
        self.region.scroll_width()
    }

    fn scroll_height(&self) -> f64 {
        self.region.scroll_height()
    }

    fn client_width(&self) -> f64 {
        self.region.client_width()
    }

    fn client_height(&self) -> f64 {
        self.region.client_height()
    }

    fn set_scroll_left(&mut self, value: f64) {
        self.region.set_scroll_left(value);
    }

    fn set_scroll_top(&mut self, value: f64) {
        self.region.set_scroll_top(value);
    }

    fn take_scroll_notification(&mut self) -> bool {
        self.region.take_scroll_notification()
    }
}
