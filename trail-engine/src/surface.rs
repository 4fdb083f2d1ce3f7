use shared_types::ColorMode;

use crate::geometry::{Segment, Viewport};

/// Anything the trail can be painted onto. The browser host wraps a 2D
/// canvas context; tests use [`RecordingSurface`].
pub trait Surface {
    fn resize(&mut self, viewport: Viewport);
    fn clear(&mut self);
    fn stroke(&mut self, segment: &Segment, style: &StrokeStyle);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub rgb: (u8, u8, u8),
    pub alpha: f64,
    pub width: f64,
}

impl StrokeStyle {
    pub fn for_mode(mode: ColorMode, alpha: f64, width: f64) -> Self {
        let rgb = match mode {
            ColorMode::Dark => (238, 238, 238),
            ColorMode::Light => (51, 51, 51),
        };
        Self { rgb, alpha, width }
    }

    pub fn css_color(&self) -> String {
        let (r, g, b) = self.rgb;
        format!("rgba({}, {}, {}, {})", r, g, b, self.alpha)
    }
}

/// Clear the surface and stroke every live segment in draw order.
pub fn paint<S: Surface + ?Sized>(
    surface: &mut S,
    segments: &[Segment],
    mode: ColorMode,
    line_width: f64,
) {
    surface.clear();
    for segment in segments {
        let style = StrokeStyle::for_mode(mode, segment.opacity(), line_width);
        surface.stroke(segment, &style);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    Resize(Viewport),
    Clear,
    Stroke { segment: Segment, style: StrokeStyle },
}

/// Surface that only remembers what was asked of it.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Strokes issued since the most recent clear, i.e. what is on screen.
    pub fn visible_strokes(&self) -> Vec<(Segment, StrokeStyle)> {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, SurfaceOp::Clear | SurfaceOp::Resize(_)))
            .map(|i| i + 1)
            .unwrap_or(0);
        self.ops[start..]
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Stroke { segment, style } => Some((*segment, *style)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, viewport: Viewport) {
        self.ops.push(SurfaceOp::Resize(viewport));
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn stroke(&mut self, segment: &Segment, style: &StrokeStyle) {
        self.ops.push(SurfaceOp::Stroke {
            segment: *segment,
            style: *style,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    #[test]
    fn stroke_colors_follow_mode() {
        let dark = StrokeStyle::for_mode(ColorMode::Dark, 1.0, 0.8);
        let light = StrokeStyle::for_mode(ColorMode::Light, 0.5, 0.8);
        assert_eq!(dark.css_color(), "rgba(238, 238, 238, 1)");
        assert_eq!(light.css_color(), "rgba(51, 51, 51, 0.5)");
    }

    #[test]
    fn paint_clears_before_stroking() {
        let mut surface = RecordingSurface::new();
        let segs = vec![
            Segment::between(Point::new(0.0, 0.0), Point::new(50.0, 0.0)),
            Segment::between(Point::new(50.0, 0.0), Point::new(100.0, 0.0)),
        ];
        paint(&mut surface, &segs, ColorMode::Dark, 0.8);
        assert_eq!(surface.ops[0], SurfaceOp::Clear);
        assert_eq!(surface.visible_strokes().len(), 2);

        paint(&mut surface, &segs[..1], ColorMode::Dark, 0.8);
        assert_eq!(surface.visible_strokes().len(), 1);
    }
}
