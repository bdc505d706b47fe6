//! Board geometry: the square playing field and its corner pockets
//!
//! All coordinates are in logical canvas space (y grows downward).

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A corner capture zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pocket {
    pub center: Vec2,
    pub radius: f32,
}

impl Pocket {
    /// True if a disc center at `pos` falls inside the capture radius
    #[inline]
    pub fn captures(&self, pos: Vec2) -> bool {
        pos.distance(self.center) < self.radius
    }
}

/// Static board layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    /// Top-left corner of the playing area
    pub origin: Vec2,
    /// Side length of the square playing area
    pub size: f32,
    /// Corner pockets: top-left, top-right, bottom-left, bottom-right
    pub pockets: [Pocket; 4],
    /// Where the striker sits between shots
    pub striker_home: Vec2,
    /// Where the queen is placed and the rings are centered
    pub formation_center: Vec2,
}

impl Default for Board {
    fn default() -> Self {
        Self::for_canvas(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

impl Board {
    /// Lay out a board centered horizontally in a canvas of the given size,
    /// with its side set by the canvas height minus the margins.
    pub fn for_canvas(width: f32, height: f32) -> Self {
        let size = height - 2.0 * BOARD_MARGIN;
        let origin = Vec2::new((width - size) / 2.0, BOARD_MARGIN);
        Self::new(
            origin,
            size,
            POCKET_RADIUS,
            Vec2::new(width / 2.0, origin.y + size - STRIKER_BASELINE_OFFSET),
            Vec2::new(width / 2.0, height / 2.0),
        )
    }

    /// Build a board from explicit geometry. Pockets are inset by their own
    /// radius from each corner.
    pub fn new(
        origin: Vec2,
        size: f32,
        pocket_radius: f32,
        striker_home: Vec2,
        formation_center: Vec2,
    ) -> Self {
        let near = pocket_radius;
        let far = size - pocket_radius;
        let pocket = |dx: f32, dy: f32| Pocket {
            center: origin + Vec2::new(dx, dy),
            radius: pocket_radius,
        };
        Self {
            origin,
            size,
            pockets: [
                pocket(near, near),
                pocket(far, near),
                pocket(near, far),
                pocket(far, far),
            ],
            striker_home,
            formation_center,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.origin.x + self.size
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.origin.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.origin.y + self.size
    }

    /// Check that a disc of `radius` centered at `pos` lies fully on the board
    pub fn contains_disc(&self, pos: Vec2, radius: f32) -> bool {
        pos.x - radius >= self.left()
            && pos.x + radius <= self.right()
            && pos.y - radius >= self.top()
            && pos.y + radius <= self.bottom()
    }

    /// Clamp an x coordinate so a disc of `radius` stays between the side walls
    pub fn clamp_x(&self, x: f32, radius: f32) -> f32 {
        x.max(self.left() + radius).min(self.right() - radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_matches_canvas() {
        let board = Board::default();
        assert_eq!(board.size, 440.0);
        assert_eq!(board.origin, Vec2::new(260.0, 50.0));
        assert_eq!(board.striker_home, Vec2::new(480.0, 420.0));
        assert_eq!(board.formation_center, Vec2::new(480.0, 270.0));
    }

    #[test]
    fn test_pockets_inset_at_corners() {
        let board = Board::default();
        assert_eq!(board.pockets[0].center, Vec2::new(285.0, 75.0));
        assert_eq!(board.pockets[1].center, Vec2::new(675.0, 75.0));
        assert_eq!(board.pockets[2].center, Vec2::new(285.0, 465.0));
        assert_eq!(board.pockets[3].center, Vec2::new(675.0, 465.0));
        assert!(board.pockets.iter().all(|p| p.radius == POCKET_RADIUS));
    }

    #[test]
    fn test_pocket_capture_is_strict() {
        let pocket = Pocket {
            center: Vec2::new(100.0, 100.0),
            radius: 25.0,
        };
        assert!(pocket.captures(Vec2::new(110.0, 110.0)));
        assert!(!pocket.captures(Vec2::new(125.0, 100.0)));
    }

    #[test]
    fn test_clamp_x() {
        let board = Board::default();
        assert_eq!(board.clamp_x(0.0, 18.0), 278.0);
        assert_eq!(board.clamp_x(2000.0, 18.0), 682.0);
        assert_eq!(board.clamp_x(500.0, 18.0), 500.0);
    }
}
