//! One physics step over the striker and the coins still in play
//!
//! Fixed step, no delta time: one call is one rendered frame. The step is a
//! pure function of the discs and the board.

use glam::Vec2;

use super::board::Board;
use super::collision::{disc_collision, pocket_collision, wall_collision};
use super::state::{Disc, DiscKind};
use crate::consts::{FRICTION, VELOCITY_FLOOR};

/// What happened during a step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepOutcome {
    /// Some disc still had velocity after friction
    pub moving: bool,
    /// Coins that dropped this step, in board order
    pub pocketed: Vec<DiscKind>,
    /// The striker dropped and went back to its baseline
    pub striker_fouled: bool,
    /// Number of disc-disc contacts resolved
    pub contacts: u32,
}

/// Damp a velocity and snap tiny components to exactly zero
#[inline]
pub fn apply_friction(vel: Vec2) -> Vec2 {
    let damped = vel * FRICTION;
    let snap = |v: f32| if v.abs() < VELOCITY_FLOOR { 0.0 } else { v };
    Vec2::new(snap(damped.x), snap(damped.y))
}

/// Advance the striker and every active coin by one step
pub fn step(board: &Board, striker: &mut Disc, coins: &mut [Disc]) -> StepOutcome {
    let mut outcome = StepOutcome::default();

    let mut bodies: Vec<&mut Disc> = std::iter::once(striker)
        .chain(coins.iter_mut().filter(|c| c.active))
        .collect();

    for disc in bodies.iter_mut() {
        disc.vel = apply_friction(disc.vel);
        if disc.is_moving() {
            outcome.moving = true;
        }

        disc.pos += disc.vel;

        wall_collision(disc, board);

        if pocket_collision(disc.pos, board).is_some() {
            if disc.is_striker() {
                // Foul: the shot is voided, striker goes back to the baseline
                disc.reset_to(board.striker_home);
                outcome.striker_fouled = true;
            } else {
                disc.sink();
                outcome.pocketed.push(disc.kind);
            }
        }
    }

    // Coins pocketed above take no further part
    bodies.retain(|d| d.active);

    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let a = &mut *head[i];
        for b in tail.iter_mut() {
            if disc_collision(a, b) {
                outcome.contacts += 1;
            }
        }
    }

    outcome
}
