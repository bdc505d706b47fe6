//! Frame tick and command handling
//!
//! Input arrives as `Command`s applied between frames. `tick` then advances
//! the session by exactly one physics step.

use glam::Vec2;

use super::physics;
use super::state::{GameEvent, Session};
use crate::consts::*;

/// Player commands, already decoupled from whatever produced them
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Pointer moved to `point` (board/canvas coordinates)
    UpdateAim { point: Vec2 },
    /// Fire with an explicit aim vector (target minus striker position).
    /// The striker travels opposite to the vector.
    Shoot { aim: Vec2 },
    /// Pointer released: fire toward the latest aim point
    Release,
    TogglePause,
    Pause,
    Resume,
    Restart,
}

/// Striker velocity for an aim vector, or None for a zero-length aim
pub fn shot_velocity(aim: Vec2) -> Option<Vec2> {
    let dist = aim.length();
    if dist == 0.0 || !dist.is_finite() {
        return None;
    }
    let power = (dist / POWER_DIVISOR).min(MAX_POWER);
    Some(-aim / dist * power)
}

/// Apply a single command to the session
pub fn apply(session: &mut Session, command: Command) -> Option<GameEvent> {
    match command {
        Command::UpdateAim { point } => {
            session.aim_point = Some(point);
            None
        }
        Command::Shoot { aim } => shoot(session, aim),
        Command::Release => {
            let point = session.aim_point?;
            let aim = point - session.striker.pos;
            shoot(session, aim)
        }
        Command::TogglePause => {
            session.paused = !session.paused;
            log::debug!("Paused: {}", session.paused);
            None
        }
        Command::Pause => {
            session.paused = true;
            None
        }
        Command::Resume => {
            session.paused = false;
            None
        }
        Command::Restart => {
            session.restart();
            log::info!("Session restarted");
            None
        }
    }
}

fn shoot(session: &mut Session, aim: Vec2) -> Option<GameEvent> {
    if session.paused || session.game_over || session.shooting || session.striker_moving {
        return None;
    }
    let vel = shot_velocity(aim)?;

    session.striker.vel = vel;
    session.shooting = true;
    session.striker_moving = true;
    session.shots += 1;
    log::debug!(
        "Shot {} from ({:.1}, {:.1}) at speed {:.2}",
        session.shots,
        session.striker.pos.x,
        session.striker.pos.y,
        vel.length()
    );
    Some(GameEvent::ShotTaken {
        shots: session.shots,
    })
}

/// Advance the session by one frame
pub fn tick(session: &mut Session) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if session.paused || !session.running {
        return events;
    }

    // Idle striker slides along its baseline under the pointer
    if !session.shooting && !session.striker_moving {
        if let Some(point) = session.aim_point {
            let r = session.striker.radius;
            session.striker.pos.x = session.board.clamp_x(point.x, r);
        }
    }

    let outcome = physics::step(&session.board, &mut session.striker, &mut session.coins);

    if outcome.striker_fouled {
        session.striker_moving = false;
        log::debug!("Striker pocketed, back to baseline");
        events.push(GameEvent::StrikerFouled);
    }
    for kind in outcome.pocketed {
        log::debug!("{:?} pocketed, {} left", kind, session.coins_remaining());
        events.push(GameEvent::CoinPocketed { kind });
    }

    // Settlement: everything stopped after a shot
    if !outcome.moving && session.shooting {
        session.shooting = false;
        session.reset_striker();
        events.push(GameEvent::ShotSettled);
    }

    if !session.game_over && session.coins_remaining() == 0 {
        session.game_over = true;
        session.running = false;
        session.best_score = session.best_score.min(session.shots);
        log::info!(
            "Board cleared in {} shots (best {})",
            session.shots,
            session.best_score
        );
        events.push(GameEvent::SessionEnded {
            final_score: session.shots,
        });
    }

    events
}
