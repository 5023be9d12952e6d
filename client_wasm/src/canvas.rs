//! 2D canvas renderer

use game_core::{RectView, RenderSink, RenderSnapshot, SinkError};
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

fn js_err(e: JsValue) -> SinkError {
    SinkError::new("render", format!("{:?}", e))
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, SinkError> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_err)?
            .ok_or_else(|| SinkError::new("render", "2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| SinkError::new("render", "not a 2d context"))?;
        Ok(Self { ctx })
    }

    fn fill_rect(&self, rect: &RectView) {
        self.ctx.set_fill_style_str(rect.color);
        self.ctx.fill_rect(
            rect.x as f64,
            rect.y as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn draw_score(&self, score: u32, x: f32, y: f32) -> Result<(), SinkError> {
        self.ctx
            .fill_text(&score.to_string(), x as f64, y as f64)
            .map_err(js_err)
    }
}

impl RenderSink for CanvasRenderer {
    fn render(&mut self, snapshot: &RenderSnapshot) -> Result<(), SinkError> {
        self.fill_rect(&snapshot.background);
        self.fill_rect(&snapshot.net);

        self.ctx.set_fill_style_str(snapshot.score_color);
        self.ctx.set_font(snapshot.score_font);
        let (user_at, ai_at) = (snapshot.user_score_anchor, snapshot.ai_score_anchor);
        self.draw_score(snapshot.user.score, user_at.x, user_at.y)?;
        self.draw_score(snapshot.ai.score, ai_at.x, ai_at.y)?;

        self.fill_rect(&snapshot.user.rect);
        self.fill_rect(&snapshot.ai.rect);

        let ball = &snapshot.ball;
        self.ctx.set_fill_style_str(ball.color);
        self.ctx.begin_path();
        self.ctx
            .arc(ball.x as f64, ball.y as f64, ball.radius as f64, 0.0, TAU)
            .map_err(js_err)?;
        self.ctx.close_path();
        self.ctx.fill();

        Ok(())
    }
}
