//! Character-grid render surface.
//!
//! A fixed-size grid of cells, fully recomputed every tick and repainted
//! with no diffing. Writes are bounds-checked and silently dropped outside
//! the grid; entity lifecycle (a bullet dying at the edge) is the
//! simulation's business, never the painter's.

use std::io::{self, Write};

use crossterm::{cursor, queue, style};

use crate::constants::BULLET_SYMBOL;
use crate::ship::{Bullet, Ship};

/// The blank cell value.
const EMPTY: char = ' ';

/// A width × height grid of display characters.
pub struct Screen {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Screen {
    /// A blank screen of the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let width = usize::from(width);
        let height = usize::from(height);
        Self {
            width,
            height,
            cells: vec![EMPTY; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Reset every cell to blank. Called at the top of each tick.
    pub fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    /// Write `symbol` at (`row`, `col`). Out-of-grid writes are ignored.
    pub fn set_cell(&mut self, row: usize, col: usize, symbol: char) {
        if row < self.height && col < self.width {
            self.cells[row * self.width + col] = symbol;
        }
    }

    /// The cell at (`row`, `col`), or `None` outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        if row < self.height && col < self.width {
            Some(self.cells[row * self.width + col])
        } else {
            None
        }
    }

    /// Repaint the whole grid from the home position.
    ///
    /// Raw mode needs explicit `\r\n` row breaks; the last row gets none so
    /// the terminal does not scroll a fully-filled screen.
    pub fn present(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        for row in 0..self.height {
            let start = row * self.width;
            let line: String = self.cells[start..start + self.width].iter().collect();
            queue!(out, style::Print(line))?;
            if row + 1 < self.height {
                queue!(out, style::Print("\r\n"))?;
            }
        }
        out.flush()
    }
}

// ── Draw operations ──────────────────────────────────────────────────────────

/// Place a ship's glyph on the cell containing its position.
pub fn draw_ship(screen: &mut Screen, ship: &Ship, symbol: char) {
    screen.set_cell(ship.pos.y as usize, ship.pos.x as usize, symbol);
}

/// Place an in-flight bullet's glyph; inactive bullets leave no mark.
pub fn draw_bullet(screen: &mut Screen, bullet: &Bullet) {
    if bullet.active {
        screen.set_cell(bullet.pos.y as usize, bullet.pos.x as usize, BULLET_SYMBOL);
    }
}

/// Place the star on the grid midpoint cell.
pub fn draw_star(screen: &mut Screen, symbol: char) {
    screen.set_cell(screen.height() / 2, screen.width() / 2, symbol);
}

// ── Unit tests ───────────────────────────────────────────────────────────────
