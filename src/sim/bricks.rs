//! Brick grid
//!
//! A fixed rows x columns matrix stored row-major. Destroyed bricks are
//! flagged inactive and stay in place so (row, col) indices never shift.

use serde::{Deserialize, Serialize};

use super::arena::{Arena, Rect};
use crate::settings::Settings;

/// A single destructible brick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub row: u32,
    pub col: u32,
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

/// The full brick matrix plus its shared geometry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrickGrid {
    pub rows: u32,
    pub columns: u32,
    pub brick_width: f32,
    pub brick_height: f32,
    pub gap: f32,
    bricks: Vec<Brick>,
}

impl BrickGrid {
    /// Build a fully active grid sized to the arena width
    pub fn new(arena: &Arena, settings: &Settings) -> Self {
        let columns = settings.brick_columns.max(1);
        let rows = settings.brick_rows.max(1);
        let gap = settings.brick_gap;
        let brick_width = (arena.width / columns as f32 - gap).max(1.0);

        let mut grid = Self {
            rows,
            columns,
            brick_width,
            brick_height: settings.brick_height,
            gap,
            bricks: Vec::with_capacity((rows * columns) as usize),
        };
        grid.reset();
        grid
    }

    /// Reactivate every brick and recompute positions from grid indices
    pub fn reset(&mut self) {
        self.bricks.clear();
        for row in 0..self.rows {
            for col in 0..self.columns {
                self.bricks.push(Brick {
                    row,
                    col,
                    x: col as f32 * (self.brick_width + self.gap),
                    y: row as f32 * (self.brick_height + self.gap),
                    active: true,
                });
            }
        }
    }

    /// Total number of bricks (active or not)
    pub fn total(&self) -> u32 {
        self.rows * self.columns
    }

    pub fn active_count(&self) -> u32 {
        self.bricks.iter().filter(|b| b.active).count() as u32
    }

    pub fn get(&self, row: u32, col: u32) -> Option<&Brick> {
        if row >= self.rows || col >= self.columns {
            return None;
        }
        self.bricks.get((row * self.columns + col) as usize)
    }

    /// Bricks in row-major order
    pub fn iter(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Brick> {
        self.bricks.iter_mut()
    }

    pub fn iter_active(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.active)
    }

    /// Bounding box of a brick
    pub fn rect_of(&self, brick: &Brick) -> Rect {
        Rect::new(brick.x, brick.y, self.brick_width, self.brick_height)
    }

    /// Bottom edge of the lowest row
    pub fn bottom(&self) -> f32 {
        self.rows as f32 * (self.brick_height + self.gap) - self.gap
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> BrickGrid {
        BrickGrid::new(&Arena::new(800.0, 600.0), &Settings::default())
    }

    #[test]
    fn test_grid_layout() {
        let grid = grid();
        assert_eq!(grid.total(), 40);
        assert_eq!(grid.iter().count(), 40);
        assert_eq!(grid.active_count(), 40);
        assert_eq!(grid.brick_width, 95.0);

        let brick = grid.get(2, 3).unwrap();
        assert_eq!((brick.row, brick.col), (2, 3));
        assert_eq!(brick.x, 3.0 * 100.0);
        assert_eq!(brick.y, 2.0 * 35.0);

        assert!(grid.get(5, 0).is_none());
        assert!(grid.get(0, 8).is_none());
    }

    #[test]
    fn test_row_major_order() {
        let grid = grid();
        let order: Vec<(u32, u32)> = grid.iter().take(9).map(|b| (b.row, b.col)).collect();
        assert_eq!(order[0], (0, 0));
        assert_eq!(order[7], (0, 7));
        assert_eq!(order[8], (1, 0));
    }

    #[test]
    fn test_reset_reactivates_without_changing_shape() {
        let mut grid = grid();
        for brick in grid.iter_mut().step_by(3) {
            brick.active = false;
        }
        assert!(grid.active_count() < 40);
        assert_eq!(grid.iter().count(), 40);

        grid.reset();
        assert_eq!(grid.active_count(), 40);
        assert_eq!(grid.get(4, 7).unwrap().x, 700.0);
    }
}
