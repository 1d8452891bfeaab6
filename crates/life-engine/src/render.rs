//! Generation display.
//!
//! The run loop hands every generation to a [`Renderer`] exactly once.
//! Renderers only observe: they receive a shared reference and cannot
//! influence the simulation. Output failures are logged rather than
//! propagated, so a broken terminal never aborts a run.

use std::io::{self, Write};

use life_core::{Generation, Position};
use life_space::Grid;

/// ANSI sequence: clear the screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Receives each generation produced by a run.
pub trait Renderer {
    /// Display `grid` as generation `generation`.
    fn render(&mut self, grid: &Grid, generation: Generation);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, grid: &Grid, generation: Generation) {
        (**self).render(grid, generation);
    }
}

// ── NullRenderer ───────────────────────────────────────────────────

/// Discards every generation.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _grid: &Grid, _generation: Generation) {}
}

// ── ConsoleRenderer ────────────────────────────────────────────────

/// Draws each generation as a bordered text frame.
///
/// ```text
/// Generation: 3
/// Alive cells: 5
/// ┌─────┐
/// │·█···│
/// │··█··│
/// │███··│
/// └─────┘
/// ```
#[derive(Debug)]
pub struct ConsoleRenderer<W: Write = io::Stdout> {
    out: W,
    alive: char,
    dead: char,
    clear: bool,
}

impl ConsoleRenderer<io::Stdout> {
    /// A renderer for standard output that clears the terminal between frames.
    pub fn stdout() -> Self {
        Self::new(io::stdout()).with_clear(true)
    }
}

impl<W: Write> ConsoleRenderer<W> {
    /// A renderer writing to `out` with the default glyphs and no screen clearing.
    pub fn new(out: W) -> Self {
        Self {
            out,
            alive: '█',
            dead: '·',
            clear: false,
        }
    }

    /// Use `alive` and `dead` as the cell glyphs.
    pub fn with_glyphs(mut self, alive: char, dead: char) -> Self {
        self.alive = alive;
        self.dead = dead;
        self
    }

    /// Emit an ANSI clear before each frame.
    pub fn with_clear(mut self, clear: bool) -> Self {
        self.clear = clear;
        self
    }

    /// The underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Consume the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, grid: &Grid, generation: Generation) -> io::Result<()> {
        if self.clear {
            self.out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        writeln!(self.out, "Generation: {generation}")?;
        writeln!(self.out, "Alive cells: {}", grid.alive_count())?;

        let border = "─".repeat(grid.width() as usize);
        writeln!(self.out, "┌{border}┐")?;
        let mut line = String::with_capacity(grid.width() as usize * 3 + 8);
        for row in 0..grid.height() as i32 {
            line.clear();
            line.push('│');
            for col in 0..grid.width() as i32 {
                let glyph = if grid.alive_at(Position::new(row, col)) {
                    self.alive
                } else {
                    self.dead
                };
                line.push(glyph);
            }
            line.push('│');
            writeln!(self.out, "{line}")?;
        }
        writeln!(self.out, "└{border}┘")?;
        self.out.flush()
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn render(&mut self, grid: &Grid, generation: Generation) {
        if let Err(e) = self.write_frame(grid, generation) {
            log::warn!("failed to render generation {generation}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blinker() -> Grid {
        Grid::from_cells(3, 3, [(1, 0), (1, 1), (1, 2)].map(Position::from)).unwrap()
    }

    fn frame(renderer: ConsoleRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn frame_has_header_and_border() {
        let mut r = ConsoleRenderer::new(Vec::new());
        r.render(&blinker(), Generation(4));
        let text = frame(r);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Generation: 4");
        assert_eq!(lines[1], "Alive cells: 3");
        assert_eq!(lines[2], "┌───┐");
        assert_eq!(lines[3], "│···│");
        assert_eq!(lines[4], "│███│");
        assert_eq!(lines[5], "│···│");
        assert_eq!(lines[6], "└───┘");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn custom_glyphs() {
        let mut r = ConsoleRenderer::new(Vec::new()).with_glyphs('#', '.');
        r.render(&blinker(), Generation(0));
        assert!(frame(r).contains("│###│"));
    }

    #[test]
    fn clear_prefixes_ansi_sequence() {
        let mut r = ConsoleRenderer::new(Vec::new()).with_clear(true);
        r.render(&blinker(), Generation(0));
        assert!(frame(r).starts_with(CLEAR_SCREEN));
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_does_not_panic() {
        let mut r = ConsoleRenderer::new(BrokenPipe);
        r.render(&blinker(), Generation(1));
    }

    #[test]
    fn boxed_renderer_forwards() {
        let mut r: Box<dyn Renderer> = Box::new(NullRenderer);
        r.render(&blinker(), Generation(0));
    }
}
