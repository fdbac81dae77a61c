//! In-place redraw of a small block of terminal lines.

use std::io::{self, Write};

use crossterm::{cursor, terminal, QueueableCommand};

/// Tracks how many lines were drawn last so the next draw replaces them.
#[derive(Debug, Default)]
pub struct LiveRegion {
    drawn_lines: u16,
}

impl LiveRegion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the previously drawn block with `content`.
    pub fn update(&mut self, out: &mut impl Write, content: &str) -> io::Result<()> {
        if self.drawn_lines > 0 {
            out.queue(cursor::MoveToPreviousLine(self.drawn_lines))?;
            out.queue(terminal::Clear(terminal::ClearType::FromCursorDown))?;
        }

        out.write_all(content.as_bytes())?;
        if !content.is_empty() && !content.ends_with('\n') {
            out.write_all(b"\n")?;
        }
        out.flush()?;

        let lines = content.lines().count();
        self.drawn_lines = lines.min(u16::MAX as usize) as u16;
        Ok(())
    }

    /// Forget the block so the next update starts below it.
    pub fn detach(&mut self) {
        self.drawn_lines = 0;
    }
}
