//! Session state and core simulation types
//!
//! A `Session` owns every disc on the board. Nothing here is global, so any
//! number of sessions can run side by side.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::consts::*;

/// What a disc is on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DiscKind {
    /// The player's disc
    Striker,
    /// The central coin
    Queen,
    Black,
    White,
}

/// Gameplay role of a disc
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Striker,
    Target,
}

impl DiscKind {
    pub fn role(&self) -> Role {
        match self {
            DiscKind::Striker => Role::Striker,
            DiscKind::Queen | DiscKind::Black | DiscKind::White => Role::Target,
        }
    }

    /// Fill color used by the renderer
    pub fn color(&self) -> &'static str {
        match self {
            DiscKind::Striker => "#3B82F6",
            DiscKind::Queen => "#e4340c",
            DiscKind::Black => "#222",
            DiscKind::White => "#f0d9b5",
        }
    }
}

/// A circular rigid body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disc {
    pub kind: DiscKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// False once pocketed. Only coins are ever deactivated.
    pub active: bool,
}

impl Disc {
    pub fn new(kind: DiscKind, pos: Vec2, radius: f32) -> Self {
        Self {
            kind,
            pos,
            vel: Vec2::ZERO,
            radius,
            active: true,
        }
    }

    pub fn striker(pos: Vec2) -> Self {
        Self::new(DiscKind::Striker, pos, STRIKER_RADIUS)
    }

    pub fn coin(kind: DiscKind, pos: Vec2) -> Self {
        Self::new(kind, pos, COIN_RADIUS)
    }

    #[inline]
    pub fn is_striker(&self) -> bool {
        self.kind.role() == Role::Striker
    }

    #[inline]
    pub fn is_moving(&self) -> bool {
        self.vel != Vec2::ZERO
    }

    /// Put the disc at `pos` with no velocity
    pub fn reset_to(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel = Vec2::ZERO;
    }

    /// Remove the disc from play. It keeps its last position.
    pub fn sink(&mut self) {
        self.active = false;
        self.vel = Vec2::ZERO;
    }
}

/// Current phase of gameplay, derived from the session flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Striker idle, following the pointer along its baseline
    Aiming,
    /// A shot is in flight
    Shooting,
    /// Simulation frozen
    Paused,
    /// Every coin pocketed
    GameOver,
}

/// Things that happened during a tick, for logging, audio and persistence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A valid shot was fired; `shots` is the new total
    ShotTaken { shots: u32 },
    /// A coin dropped into a pocket
    CoinPocketed { kind: DiscKind },
    /// The striker dropped into a pocket and went back to its baseline
    StrikerFouled,
    /// Everything stopped after a shot
    ShotSettled,
    /// Last coin pocketed; persistence should record `final_score`
    SessionEnded { final_score: u32 },
}

/// Complete session state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    /// Board geometry this session plays on
    pub board: Board,
    /// The one and only striker
    pub striker: Disc,
    /// Target coins, fixed set created at start/restart
    pub coins: Vec<Disc>,
    /// Shots fired this session
    pub shots: u32,
    /// Lowest shot count ever needed to clear the board (NO_BEST_SCORE = none)
    pub best_score: u32,
    pub paused: bool,
    pub game_over: bool,
    /// False once the session ends; physics stops advancing
    pub running: bool,
    /// A shot has been fired and has not settled yet
    pub shooting: bool,
    /// The striker is travelling under its own velocity
    pub striker_moving: bool,
    /// Latest pointer position (last value wins)
    pub aim_point: Option<Vec2>,
}

impl Session {
    /// Start a fresh session on `board`, carrying over a previously recorded best
    pub fn new(board: Board, best_score: u32) -> Self {
        let striker = Disc::striker(board.striker_home);
        let coins = opening_formation(&board);
        Self {
            board,
            striker,
            coins,
            shots: 0,
            best_score,
            paused: false,
            game_over: false,
            running: true,
            shooting: false,
            striker_moving: false,
            aim_point: None,
        }
    }

    pub fn phase(&self) -> GamePhase {
        if self.paused {
            GamePhase::Paused
        } else if self.game_over {
            GamePhase::GameOver
        } else if self.shooting || self.striker_moving {
            GamePhase::Shooting
        } else {
            GamePhase::Aiming
        }
    }

    /// Send the striker back to its baseline position
    pub fn reset_striker(&mut self) {
        self.striker.reset_to(self.board.striker_home);
        self.striker_moving = false;
    }

    /// Put the board back to its opening position
    pub fn restart(&mut self) {
        self.running = true;
        self.paused = false;
        self.game_over = false;
        self.shots = 0;
        self.shooting = false;
        self.coins = opening_formation(&self.board);
        self.reset_striker();
    }

    /// Coins still in play
    pub fn active_coins(&self) -> impl Iterator<Item = &Disc> {
        self.coins.iter().filter(|c| c.active)
    }

    pub fn coins_remaining(&self) -> usize {
        self.active_coins().count()
    }

    /// Recorded best, or None when nothing has been recorded yet
    pub fn best(&self) -> Option<u32> {
        (self.best_score != NO_BEST_SCORE).then_some(self.best_score)
    }
}

/// Queen in the middle, then rings of coins alternating black and white
/// ring by ring
pub fn opening_formation(board: &Board) -> Vec<Disc> {
    let center = board.formation_center;
    let mut coins = Vec::with_capacity(COIN_COUNT);
    coins.push(Disc::coin(DiscKind::Queen, center));

    for ring in 0..RING_COUNT {
        let kind = if ring % 2 == 0 {
            DiscKind::Black
        } else {
            DiscKind::White
        };
        let dist = COIN_RADIUS * RING_SPACING * (ring + 1) as f32;
        for j in 0..COINS_PER_RING {
            let angle = (j as f32 / COINS_PER_RING as f32) * std::f32::consts::TAU;
            let offset = Vec2::new(angle.cos(), angle.sin()) * dist;
            coins.push(Disc::coin(kind, center + offset));
        }
    }

    coins
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opening_formation() {
        let board = Board::default();
        let coins = opening_formation(&board);
        assert_eq!(coins.len(), 13);
        assert_eq!(coins[0].kind, DiscKind::Queen);
        assert_eq!(coins[0].pos, board.formation_center);
        assert_eq!(coins.iter().filter(|c| c.kind == DiscKind::Black).count(), 6);
        assert_eq!(coins.iter().filter(|c| c.kind == DiscKind::White).count(), 6);
        assert!(coins.iter().all(|c| c.active && c.vel == Vec2::ZERO));

        // Inner ring at 33, outer ring at 66 from the center
        for coin in &coins[1..7] {
            let d = coin.pos.distance(board.formation_center);
            assert!((d - 33.0).abs() < 0.001);
        }
        for coin in &coins[7..] {
            let d = coin.pos.distance(board.formation_center);
            assert!((d - 66.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_new_session() {
        let session = Session::new(Board::default(), NO_BEST_SCORE);
        assert_eq!(session.phase(), GamePhase::Aiming);
        assert_eq!(session.shots, 0);
        assert!(session.running);
        assert!(!session.game_over);
        assert_eq!(session.best(), None);
        assert!(session.striker.is_striker());
        assert_eq!(session.striker.pos, session.board.striker_home);
        assert_eq!(session.coins_remaining(), COIN_COUNT);
    }

    #[test]
    fn test_phase_priority() {
        let mut session = Session::new(Board::default(), 12);
        assert_eq!(session.best(), Some(12));

        session.shooting = true;
        assert_eq!(session.phase(), GamePhase::Shooting);
        session.game_over = true;
        assert_eq!(session.phase(), GamePhase::GameOver);
        session.paused = true;
        assert_eq!(session.phase(), GamePhase::Paused);
    }

    #[test]
    fn test_disc_roles() {
        assert_eq!(DiscKind::Striker.role(), Role::Striker);
        assert_eq!(DiscKind::Queen.role(), Role::Target);
        assert_eq!(DiscKind::White.role(), Role::Target);
    }
}
