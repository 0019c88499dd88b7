//! Raw-mode terminal with a double-buffered diff flush.

use std::io::{self, Write};
use std::panic;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute, queue,
    style::{Color as CtColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use unicode_width::UnicodeWidthChar;

use crate::buffer::{Buffer, Rgb};

pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        // Restore the terminal before the panic message is printed
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore_terminal();
            original_hook(panic_info);
        }));

        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            EnterAlternateScreen,
            cursor::Hide,
            EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        Ok(Self {
            stdout,
            current_buffer: Buffer::new(width, height),
            previous_buffer: Buffer::new(width, height),
        })
    }

    /// Start a frame: pick up size changes and clear the back buffer.
    /// Returns the frame size.
    pub fn begin_frame(&mut self) -> io::Result<(u16, u16)> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            self.current_buffer = Buffer::new(width, height);
            self.previous_buffer = Buffer::new(width, height);
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
        }
        self.current_buffer.clear();
        Ok((width, height))
    }

    pub fn buffer_mut(&mut self) -> &mut Buffer {
        &mut self.current_buffer
    }

    /// Write the cells that changed since the last frame.
    pub fn end_frame(&mut self) -> io::Result<()> {
        self.flush_diff()?;
        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x.wrapping_add(last_char_width) {
                queue!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if last_fg != Some(cell.fg) {
                queue!(self.stdout, SetForegroundColor(to_crossterm(cell.fg)))?;
                last_fg = Some(cell.fg);
            }
            if last_bg != Some(cell.bg) {
                queue!(self.stdout, SetBackgroundColor(to_crossterm(cell.bg)))?;
                last_bg = Some(cell.bg);
            }

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = cell.char.width().unwrap_or(1).max(1) as u16;
        }

        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

fn to_crossterm(color: Rgb) -> CtColor {
    CtColor::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

fn restore_terminal() -> io::Result<()> {
    terminal::disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    Ok(())
}
