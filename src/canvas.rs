//! Drawing-backend collaborator contract.
//!
//! The chart core computes everything in chart coordinates (Y-up, origin at
//! the bottom-left of the square) and issues stroke and text instructions
//! against this trait. The crate ships one implementation,
//! [`SvgCanvas`](crate::render::svg::SvgCanvas); callers may bring their own
//! backend (PDF, plotter, test recorder) by implementing it.

use glam::DVec2;

use crate::types::FontSize;

/// One background stroke primitive in chart coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stroke {
    Line {
        from: DVec2,
        to: DVec2,
    },
    Circle {
        center: DVec2,
        radius: f64,
    },
    /// Cubic Bezier from `from` to `to` with two control points.
    Curve {
        from: DVec2,
        to: DVec2,
        ctrl1: DVec2,
        ctrl2: DVec2,
    },
}

/// Sink for draw instructions plus the text metrics the layout depends on.
///
/// Width measurement lives here because it is font- and backend-dependent;
/// the font planner is only correct against the backend that will draw.
pub trait Canvas {
    fn stroke_line(&mut self, from: DVec2, to: DVec2);
    fn stroke_circle(&mut self, center: DVec2, radius: f64);
    fn stroke_curve(&mut self, from: DVec2, to: DVec2, ctrl1: DVec2, ctrl2: DVec2);

    /// Rendered width of `text` at `size`, in chart units.
    fn measure_width(&self, text: &str, size: FontSize) -> f64;

    /// Vertical advance between two lines of text at `size`.
    fn line_height(&self, size: FontSize) -> f64;

    /// Draw `text` with its baseline starting at `anchor`, in a frame rotated
    /// by `rotation_degrees` (counter-clockwise positive) about `origin`.
    fn draw_rotated_text(
        &mut self,
        text: &str,
        size: FontSize,
        anchor: DVec2,
        rotation_degrees: f64,
        origin: DVec2,
    );

    /// Dispatch one background primitive.
    fn stroke(&mut self, stroke: Stroke) {
        match stroke {
            Stroke::Line { from, to } => self.stroke_line(from, to),
            Stroke::Circle { center, radius } => self.stroke_circle(center, radius),
            Stroke::Curve {
                from,
                to,
                ctrl1,
                ctrl2,
            } => self.stroke_curve(from, to, ctrl1, ctrl2),
        }
    }
}
