//! Centipede segments
//!
//! Each segment walks the grid on its own under the same rule: step one
//! column along its heading, or, when the next column is off the field or
//! holds a mushroom, turn around and drop one row instead.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use crate::consts::*;
use crate::tile_center;

/// Horizontal heading of a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Heading {
    Left,
    Right,
}

impl Heading {
    /// Column delta (-1 or +1)
    #[inline]
    pub fn delta(self) -> i32 {
        match self {
            Heading::Left => -1,
            Heading::Right => 1,
        }
    }

    #[inline]
    pub fn reversed(self) -> Self {
        match self {
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

/// One link of the centipede
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub col: i32,
    pub row: i32,
    pub heading: Heading,
}

impl Segment {
    pub fn new(col: i32, row: i32, heading: Heading) -> Self {
        Self { col, row, heading }
    }

    /// Pixel center, derived from the grid cell
    #[inline]
    pub fn center(&self) -> Vec2 {
        tile_center(self.col, self.row)
    }

    /// Whether the next column along the heading is a wall or a mushroom
    pub fn is_blocked(&self, grid: &Grid) -> bool {
        let next = self.col + self.heading.delta();
        !(0..COLS).contains(&next) || grid.is_occupied(next, self.row)
    }

    /// Advance one movement step
    pub fn step(&mut self, grid: &Grid) {
        if self.is_blocked(grid) {
            self.heading = self.heading.reversed();
            self.row += 1;
        } else {
            self.col += self.heading.delta();
        }
    }
}

/// Build a chain of `length` segments along `row`, all heading right,
/// laid out from column 0 with the lead segment furthest right.
pub fn spawn_centipede(length: usize, row: i32) -> Vec<Segment> {
    (0..length.min(COLS as usize))
        .map(|i| Segment::new(i as i32, row, Heading::Right))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_left_wall_turns_and_drops() {
        let grid = Grid::default();
        let mut seg = Segment::new(0, 0, Heading::Left);
        seg.step(&grid);
        assert_eq!(seg, Segment::new(0, 1, Heading::Right));
    }

    #[test]
    fn test_right_wall_turns_and_drops() {
        let grid = Grid::default();
        let mut seg = Segment::new(COLS - 1, 6, Heading::Right);
        seg.step(&grid);
        assert_eq!(seg, Segment::new(COLS - 1, 7, Heading::Left));
    }

    #[test]
    fn test_mushroom_turns_and_drops() {
        let mut grid = Grid::default();
        grid.place(6, 3);
        let mut seg = Segment::new(5, 3, Heading::Right);
        seg.step(&grid);
        assert_eq!(seg, Segment::new(5, 4, Heading::Left));
    }

    #[test]
    fn test_open_cell_advances() {
        let mut grid = Grid::default();
        // Mushroom on a different row does not block
        grid.place(6, 4);
        let mut seg = Segment::new(5, 3, Heading::Right);
        seg.step(&grid);
        assert_eq!(seg, Segment::new(6, 3, Heading::Right));
    }

    #[test]
    fn test_spawn_centipede_layout() {
        let chain = spawn_centipede(CENTIPEDE_LENGTH, 0);
        assert_eq!(chain.len(), CENTIPEDE_LENGTH);
        assert!(chain.iter().all(|s| s.row == 0 && s.heading == Heading::Right));
        assert_eq!(chain.last().map(|s| s.col), Some(CENTIPEDE_LENGTH as i32 - 1));

        // Never wider than the field
        assert_eq!(spawn_centipede(1000, 0).len(), COLS as usize);
    }

    proptest! {
        #[test]
        fn prop_step_moves_sideways_xor_down(
            col in 0..COLS,
            row in 0..ROWS,
            right in any::<bool>(),
            mushrooms in proptest::collection::vec((0..COLS, 0..ROWS), 0..80),
        ) {
            let mut grid = Grid::default();
            for (c, r) in mushrooms {
                grid.place(c, r);
            }
            let heading = if right { Heading::Right } else { Heading::Left };
            let before = Segment::new(col, row, heading);
            let mut after = before.clone();
            after.step(&grid);

            let sideways = (after.col - before.col).abs() == 1
                && after.row == before.row
                && after.heading == before.heading;
            let down = after.col == before.col
                && after.row == before.row + 1
                && after.heading == before.heading.reversed();
            prop_assert!(sideways ^ down);
        }
    }
}
