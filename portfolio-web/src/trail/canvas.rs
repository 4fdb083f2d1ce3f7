use trail_engine::{Segment, StrokeStyle, Surface, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("no global `window` exists")]
    NoWindow,
    #[error("no document on window")]
    NoDocument,
    #[error("element #{0} not found")]
    NotFound(String),
    #[error("element #{0} is not a canvas")]
    NotCanvas(String),
    #[error("2d context unavailable: {0}")]
    NoContext(String),
}

/// The trail's [`Surface`] backed by a 2D canvas context.
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn from_element_id(id: &str) -> Result<Self, CanvasError> {
        let window = web_sys::window().ok_or(CanvasError::NoWindow)?;
        let document = window.document().ok_or(CanvasError::NoDocument)?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| CanvasError::NotFound(id.to_string()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| CanvasError::NotCanvas(id.to_string()))?;

        let ctx = canvas
            .get_context("2d")
            .map_err(|e| CanvasError::NoContext(format!("{e:?}")))?
            .ok_or_else(|| CanvasError::NoContext("getContext returned null".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| CanvasError::NoContext("not a 2d context".to_string()))?;

        Ok(Self { canvas, ctx })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl Surface for CanvasSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.canvas.set_width(viewport.width);
        self.canvas.set_height(viewport.height);
    }

    fn clear(&mut self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn stroke(&mut self, segment: &Segment, style: &StrokeStyle) {
        let from = segment.from();
        let to = segment.to();
        self.ctx.set_stroke_style_str(&style.css_color());
        self.ctx.set_line_width(style.width);
        self.ctx.set_line_cap("butt");
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }
}
