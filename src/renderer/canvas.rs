//! Canvas 2D painter

use std::f64::consts::TAU;

use glam::Vec2;
use web_sys::CanvasRenderingContext2d;

use super::hud::Hud;
use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::sim::{DiscKind, RenderFrame};

const WOOD: &str = "#c7a17a";
const BORDER: &str = "#312e2b";
const POCKET: &str = "#000";
const COIN_OUTLINE: &str = "#555";
const STRIKER_OUTLINE: &str = "#fff";
const AIM_GUIDE: &str = "rgba(255, 255, 255, 0.5)";
const HUD_TEXT: &str = "rgba(255, 255, 255, 0.92)";
const HUD_FONT: &str = "20px Inter, Arial";
const BANNER_FONT: &str = "30px Inter, Arial";

/// Draws `RenderFrame`s onto a 2D context at logical resolution
pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
    /// Draw the aim line (from settings)
    pub aim_guide: bool,
}

impl CanvasRenderer {
    pub fn new(ctx: CanvasRenderingContext2d, aim_guide: bool) -> Self {
        Self { ctx, aim_guide }
    }

    pub fn render(&self, frame: &RenderFrame) {
        let w = CANVAS_WIDTH as f64;
        let h = CANVAS_HEIGHT as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);
        self.draw_board(frame);
        self.draw_discs(frame);
        self.draw_hud(&Hud::for_frame(frame), w, h);
    }

    fn circle(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
    }

    fn draw_board(&self, frame: &RenderFrame) {
        let ctx = &self.ctx;
        let (x, y, size) = (
            frame.board_origin.x as f64,
            frame.board_origin.y as f64,
            frame.board_size as f64,
        );

        ctx.set_fill_style_str(WOOD);
        ctx.fill_rect(x, y, size, size);
        ctx.set_stroke_style_str(BORDER);
        ctx.set_line_width(4.0);
        ctx.stroke_rect(x, y, size, size);

        ctx.set_fill_style_str(POCKET);
        for pocket in &frame.pockets {
            self.circle(pocket.center, pocket.radius);
            ctx.fill();
        }

        self.circle(frame.center, frame.center_radius);
        ctx.stroke();
    }

    fn draw_discs(&self, frame: &RenderFrame) {
        let ctx = &self.ctx;
        for disc in &frame.discs {
            ctx.set_fill_style_str(disc.color);
            self.circle(disc.pos, disc.radius);
            ctx.fill();
            ctx.set_stroke_style_str(if disc.kind == DiscKind::Striker {
                STRIKER_OUTLINE
            } else {
                COIN_OUTLINE
            });
            ctx.stroke();
        }

        if let Some((from, to)) = frame.aim_guide.filter(|_| self.aim_guide) {
            ctx.set_stroke_style_str(AIM_GUIDE);
            ctx.set_line_width(2.0);
            ctx.begin_path();
            ctx.move_to(from.x as f64, from.y as f64);
            ctx.line_to(to.x as f64, to.y as f64);
            ctx.stroke();
        }
    }

    fn draw_hud(&self, hud: &Hud, w: f64, h: f64) {
        let ctx = &self.ctx;
        ctx.set_fill_style_str(HUD_TEXT);
        ctx.set_font(HUD_FONT);
        ctx.set_text_align("left");
        let _ = ctx.fill_text(&hud.shots, 20.0, 30.0);
        let _ = ctx.fill_text(&hud.best, w - 100.0, 30.0);

        if let Some(banner) = &hud.banner {
            ctx.set_text_align("center");
            ctx.set_font(BANNER_FONT);
            let banner_y = if hud.detail.is_some() { h / 2.0 - 30.0 } else { h / 2.0 };
            let _ = ctx.fill_text(banner, w / 2.0, banner_y);
            if let Some(detail) = &hud.detail {
                ctx.set_font(HUD_FONT);
                let _ = ctx.fill_text(detail, w / 2.0, h / 2.0 + 10.0);
            }
            ctx.set_text_align("left");
        }
    }
}
