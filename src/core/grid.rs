//! The board: a fixed-size matrix of cell owners.
//!
//! ## Cell
//!
//! Each cell is `Empty`, `Blocked` (a pre-seeded obstacle, immutable for
//! the round), or `Owned` by a player.
//!
//! ## Grid
//!
//! Row-major storage in an `im::Vector` so cloning a grid is cheap and
//! structurally shared; a committed claim writes into a clone without
//! touching the snapshot it came from.
//!
//! Within a round a cell only ever moves away from `Empty`: the two
//! mutators are [`block`](Grid::block) and [`claim`](Grid::claim), and
//! neither can write `Empty`.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::rect::Rect;

/// The owner of a single grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Unclaimed and claimable.
    Empty,
    /// Pre-seeded obstacle; never claimable, belongs to no player.
    Blocked,
    /// Claimed by a player.
    Owned(PlayerId),
}

impl Cell {
    /// Whether the cell is still claimable.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The owning player, if any.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            Cell::Owned(player) => Some(player),
            _ => None,
        }
    }
}

/// An H×W board of cell owners.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vector<Cell>,
    /// Cached count of `Empty` cells for O(1) termination checks.
    empty_cells: u32,
}

impl Grid {
    /// Create an all-empty grid. Dimensions must be at least 1×1.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width >= 1 && height >= 1, "Grid must be at least 1x1");

        let cell_count = width as usize * height as usize;
        Self {
            width,
            height,
            cells: std::iter::repeat(Cell::Empty).take(cell_count).collect(),
            empty_cells: cell_count as u32,
        }
    }

    /// Grid width in cells.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Grid height in cells.
    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub fn cell_count(&self) -> u32 {
        self.width as u32 * self.height as u32
    }

    /// Number of cells still `Empty`.
    #[must_use]
    pub fn empty_cells(&self) -> u32 {
        self.empty_cells
    }

    /// Whether no `Empty` cell remains (the round-ending condition).
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.empty_cells == 0
    }

    /// Whether `(x, y)` lies on the grid.
    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width as i32 && y < self.height as i32
    }

    /// Cell at `(x, y)`, or `None` out of bounds.
    #[must_use]
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if !self.in_bounds(x, y) {
            return None;
        }
        self.cells.get(self.index(x, y)).copied()
    }

    /// Whether `rect` is well-formed, fully on the grid, and all `Empty`.
    ///
    /// This is the structural half of selection legality: malformed and
    /// out-of-bounds rectangles return false rather than fault, since drag
    /// gestures may stray off the board.
    #[must_use]
    pub fn is_region_empty(&self, rect: Rect) -> bool {
        if !rect.is_well_formed() {
            return false;
        }
        if !self.in_bounds(rect.left, rect.top) || !self.in_bounds(rect.right, rect.bottom) {
            return false;
        }
        rect.cells()
            .all(|(x, y)| self.cells[self.index(x, y)].is_empty())
    }

    /// Mark `(x, y)` as a blocked obstacle.
    ///
    /// Re-blocking a non-empty cell is a no-op, so duplicate obstacle draws
    /// collapse harmlessly.
    pub fn block(&mut self, x: u16, y: u16) {
        let idx = self.index(x as i32, y as i32);
        if self.cells[idx].is_empty() {
            self.cells.set(idx, Cell::Blocked);
            self.empty_cells -= 1;
        }
    }

    /// Claim every cell of `rect` for `player`.
    ///
    /// Callers must have established emptiness via
    /// [`is_region_empty`](Grid::is_region_empty) first.
    pub fn claim(&mut self, rect: Rect, player: PlayerId) {
        debug_assert!(self.is_region_empty(rect), "claim of non-empty region {rect}");

        for (x, y) in rect.cells() {
            let idx = self.index(x, y);
            if self.cells[idx].is_empty() {
                self.cells.set(idx, Cell::Owned(player));
                self.empty_cells -= 1;
            }
        }
    }

    /// Iterate over `(x, y, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, Cell)> + '_ {
        self.cells.iter().enumerate().map(move |(i, &cell)| {
            let x = (i % self.width as usize) as u16;
            let y = (i / self.width as usize) as u16;
            (x, y, cell)
        })
    }

    fn index(&self, x: i32, y: i32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}
