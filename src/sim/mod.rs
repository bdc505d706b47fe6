//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed step only (one call per rendered frame)
//! - Stable iteration order (striker first, then coins in formation order)
//! - No rendering, storage or platform dependencies

pub mod board;
pub mod collision;
pub mod physics;
pub mod state;
pub mod tick;
pub mod view;

pub use board::{Board, Pocket};
pub use collision::{WallHit, disc_collision, elastic_exchange, pocket_collision, wall_collision};
pub use physics::{StepOutcome, apply_friction, step};
pub use state::{Disc, DiscKind, GameEvent, GamePhase, Role, Session, opening_formation};
pub use tick::{Command, apply, shot_velocity, tick};
pub use view::{DiscView, RenderFrame};
