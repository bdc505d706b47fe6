//! Per-frame render snapshot
//!
//! The renderer only ever sees a `RenderFrame`, never the live session.

use glam::Vec2;
use serde::Serialize;

use super::board::Pocket;
use super::state::{DiscKind, Session};
use crate::consts::CENTER_CIRCLE_RADIUS;

/// A disc as drawn
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscView {
    pub kind: DiscKind,
    pub pos: Vec2,
    pub radius: f32,
    pub color: &'static str,
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderFrame {
    pub board_origin: Vec2,
    pub board_size: f32,
    pub center: Vec2,
    pub center_radius: f32,
    pub pockets: [Pocket; 4],
    /// Active coins first, striker last so it draws on top
    pub discs: Vec<DiscView>,
    pub striker: Vec2,
    pub shots: u32,
    /// None when no best has been recorded
    pub best: Option<u32>,
    pub paused: bool,
    pub game_over: bool,
    /// Shot count to announce once the board is cleared
    pub final_score: Option<u32>,
    /// Line from the striker to the pointer while the player is pulling back
    pub aim_guide: Option<(Vec2, Vec2)>,
}

impl RenderFrame {
    /// Snapshot the session. `pointer_down` comes from the input layer and
    /// gates the aim guide.
    pub fn capture(session: &Session, pointer_down: bool) -> Self {
        let board = &session.board;

        let mut discs: Vec<DiscView> = session
            .active_coins()
            .map(|c| DiscView {
                kind: c.kind,
                pos: c.pos,
                radius: c.radius,
                color: c.kind.color(),
            })
            .collect();
        let striker = &session.striker;
        discs.push(DiscView {
            kind: striker.kind,
            pos: striker.pos,
            radius: striker.radius,
            color: striker.kind.color(),
        });

        let aim_guide = match session.aim_point {
            Some(point) if pointer_down && !session.striker_moving => Some((striker.pos, point)),
            _ => None,
        };

        Self {
            board_origin: board.origin,
            board_size: board.size,
            center: board.formation_center,
            center_radius: CENTER_CIRCLE_RADIUS,
            pockets: board.pockets,
            discs,
            striker: striker.pos,
            shots: session.shots,
            best: session.best(),
            paused: session.paused,
            game_over: session.game_over,
            final_score: session.game_over.then_some(session.shots),
            aim_guide,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::NO_BEST_SCORE;
    use crate::sim::board::Board;

    #[test]
    fn test_capture_fresh_session() {
        let session = Session::new(Board::default(), NO_BEST_SCORE);
        let frame = RenderFrame::capture(&session, false);

        assert_eq!(frame.discs.len(), 14);
        assert_eq!(frame.discs.last().map(|d| d.kind), Some(DiscKind::Striker));
        assert_eq!(frame.discs[0].color, "#e4340c");
        assert_eq!(frame.best, None);
        assert_eq!(frame.final_score, None);
        assert_eq!(frame.aim_guide, None);
        assert!(!frame.paused);
    }

    #[test]
    fn test_capture_skips_pocketed_coins() {
        let mut session = Session::new(Board::default(), 20);
        session.coins[3].sink();
        session.coins[8].sink();
        let frame = RenderFrame::capture(&session, false);
        assert_eq!(frame.discs.len(), 12);
        assert_eq!(frame.best, Some(20));
    }

    #[test]
    fn test_aim_guide_only_while_held_and_idle() {
        let mut session = Session::new(Board::default(), NO_BEST_SCORE);
        let point = Vec2::new(500.0, 470.0);
        session.aim_point = Some(point);

        let frame = RenderFrame::capture(&session, true);
        assert_eq!(frame.aim_guide, Some((session.striker.pos, point)));

        session.striker_moving = true;
        assert_eq!(RenderFrame::capture(&session, true).aim_guide, None);
        session.striker_moving = false;
        assert_eq!(RenderFrame::capture(&session, false).aim_guide, None);
    }

    #[test]
    fn test_game_over_reports_final_score() {
        let mut session = Session::new(Board::default(), NO_BEST_SCORE);
        session.shots = 17;
        session.game_over = true;
        let frame = RenderFrame::capture(&session, false);
        assert_eq!(frame.final_score, Some(17));
    }
}
