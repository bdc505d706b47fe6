//! Collision detection and response for discs on a square board
//!
//! Walls and pockets are checked per disc; disc pairs exchange velocity along
//! the line between their centers.

use glam::Vec2;

use super::board::{Board, Pocket};
use super::state::Disc;
use crate::consts::WALL_RESTITUTION;

/// Which walls a disc touched this step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHit {
    pub x: bool,
    pub y: bool,
}

impl WallHit {
    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Keep a disc inside the board.
///
/// Each axis is handled on its own: the edge is clamped onto the wall and that
/// velocity component is reversed and damped. A disc in a corner bounces on
/// both axes.
pub fn wall_collision(disc: &mut Disc, board: &Board) -> WallHit {
    let r = disc.radius;
    let mut hit = WallHit::default();

    if disc.pos.x - r < board.left() {
        disc.pos.x = board.left() + r;
        disc.vel.x *= -WALL_RESTITUTION;
        hit.x = true;
    }
    if disc.pos.x + r > board.right() {
        disc.pos.x = board.right() - r;
        disc.vel.x *= -WALL_RESTITUTION;
        hit.x = true;
    }
    if disc.pos.y - r < board.top() {
        disc.pos.y = board.top() + r;
        disc.vel.y *= -WALL_RESTITUTION;
        hit.y = true;
    }
    if disc.pos.y + r > board.bottom() {
        disc.pos.y = board.bottom() - r;
        disc.vel.y *= -WALL_RESTITUTION;
        hit.y = true;
    }

    hit
}

/// First pocket whose capture radius contains the disc center
pub fn pocket_collision<'a>(pos: Vec2, board: &'a Board) -> Option<&'a Pocket> {
    board.pockets.iter().find(|p| p.captures(pos))
}

/// Two discs overlap when their centers are closer than their radii combined
#[inline]
pub fn discs_overlap(a: &Disc, b: &Disc) -> bool {
    a.pos.distance(b.pos) < a.radius + b.radius
}

/// 1D elastic exchange along `normal`, using each radius as the mass.
///
/// Velocities are split into normal and tangential parts; only the normal
/// parts are exchanged. Returns the new (v1, v2).
pub fn elastic_exchange(v1: Vec2, r1: f32, v2: Vec2, r2: f32, normal: Vec2) -> (Vec2, Vec2) {
    let tangent = normal.perp();

    let n1 = v1.dot(normal);
    let t1 = v1.dot(tangent);
    let n2 = v2.dot(normal);
    let t2 = v2.dot(tangent);

    let total = r1 + r2;
    let n1_final = ((r1 - r2) * n1 + 2.0 * r2 * n2) / total;
    let n2_final = ((r2 - r1) * n2 + 2.0 * r1 * n1) / total;

    (
        normal * n1_final + tangent * t1,
        normal * n2_final + tangent * t2,
    )
}

/// Resolve a disc-disc contact. Returns true if the discs were touching.
///
/// Positions are left alone: overlapping discs separate on later steps
/// through their new velocities.
pub fn disc_collision(a: &mut Disc, b: &mut Disc) -> bool {
    if !discs_overlap(a, b) {
        return false;
    }

    // Coincident centers have no defined line of contact; push along +x
    let normal = (b.pos - a.pos).try_normalize().unwrap_or(Vec2::X);
    let (va, vb) = elastic_exchange(a.vel, a.radius, b.vel, b.radius, normal);
    a.vel = va;
    b.vel = vb;
    true
}
