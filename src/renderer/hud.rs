//! HUD text for a frame

use crate::sim::RenderFrame;

/// Text overlays for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hud {
    /// Top-left counter
    pub shots: String,
    /// Top-right best score, `-` when none is recorded
    pub best: String,
    /// Big centered line (pause or win)
    pub banner: Option<String>,
    /// Smaller line under the banner
    pub detail: Option<String>,
}

impl Hud {
    pub fn for_frame(frame: &RenderFrame) -> Self {
        let best = frame
            .best
            .map(|b| b.to_string())
            .unwrap_or_else(|| "-".to_string());

        // Win screen takes precedence so a paused finished game still shows the result
        let (banner, detail) = match frame.final_score {
            Some(score) => (
                Some("YOU WIN!".to_string()),
                Some(format!("Final Score: {}. Press R to play again.", score)),
            ),
            None if frame.paused => (Some("PAUSED".to_string()), None),
            None => (None, None),
        };

        Self {
            shots: format!("Shots: {}", frame.shots),
            best: format!("Best: {}", best),
            banner,
            detail,
        }
    }
}
