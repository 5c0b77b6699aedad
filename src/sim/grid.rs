//! Mushroom field
//!
//! A fixed `COLS` x `ROWS` sparse map of destructible mushrooms. Every
//! lookup is total: coordinates outside the grid read as empty and writes
//! to them are ignored.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A destructible mushroom occupying one grid cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mushroom {
    pub col: i32,
    pub row: i32,
    pub hp: u8,
}

impl Mushroom {
    pub fn new(col: i32, row: i32, hp: u8) -> Self {
        Self { col, row, hp }
    }

    /// Take one hit. Returns true once the mushroom is worn down and should be removed.
    pub fn hit(&mut self) -> bool {
        self.hp = self.hp.saturating_sub(1);
        self.hp == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grid {
    /// Row-major cells, `ROWS * COLS` long
    cells: Vec<Option<Mushroom>>,
    /// Hit points given to newly placed mushrooms
    mushroom_hp: u8,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(MUSHROOM_MAX_HP)
    }
}

impl Grid {
    pub fn new(mushroom_hp: u8) -> Self {
        Self {
            cells: vec![None; (COLS * ROWS) as usize],
            mushroom_hp,
        }
    }

    #[inline]
    pub fn in_bounds(col: i32, row: i32) -> bool {
        (0..COLS).contains(&col) && (0..ROWS).contains(&row)
    }

    #[inline]
    fn index(col: i32, row: i32) -> Option<usize> {
        Self::in_bounds(col, row).then(|| (row * COLS + col) as usize)
    }

    pub fn cell_at(&self, col: i32, row: i32) -> Option<&Mushroom> {
        Self::index(col, row).and_then(|i| self.cells[i].as_ref())
    }

    pub fn cell_at_mut(&mut self, col: i32, row: i32) -> Option<&mut Mushroom> {
        Self::index(col, row).and_then(|i| self.cells[i].as_mut())
    }

    #[inline]
    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        self.cell_at(col, row).is_some()
    }

    /// Put a fresh full-health mushroom at (col, row), replacing any occupant.
    /// Returns false (and does nothing) outside the grid.
    pub fn place(&mut self, col: i32, row: i32) -> bool {
        match Self::index(col, row) {
            Some(i) => {
                self.cells[i] = Some(Mushroom::new(col, row, self.mushroom_hp));
                true
            }
            None => false,
        }
    }

    /// Empty a cell. Returns true if a mushroom was removed.
    pub fn clear(&mut self, col: i32, row: i32) -> bool {
        Self::index(col, row)
            .and_then(|i| self.cells[i].take())
            .is_some()
    }

    /// Hit the mushroom at (col, row), clearing the cell if it is worn down.
    ///
    /// Returns `None` when the cell is empty, otherwise whether the hit destroyed it.
    pub fn hit(&mut self, col: i32, row: i32) -> Option<bool> {
        let destroyed = self.cell_at_mut(col, row)?.hit();
        if destroyed {
            self.clear(col, row);
        }
        Some(destroyed)
    }

    /// Scatter mushrooms over the middle band, each cell independently with `density`
    pub fn populate<R: Rng>(&mut self, rng: &mut R, density: f64) {
        let density = density.clamp(0.0, 1.0);
        for row in MUSHROOM_ROW_START..MUSHROOM_ROW_END {
            for col in 0..COLS {
                if rng.random_bool(density) {
                    self.place(col, row);
                }
            }
        }
    }

    /// Live mushrooms in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Mushroom> {
        self.cells.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}
