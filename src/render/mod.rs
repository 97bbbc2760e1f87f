//! Chart rendering pipeline.
//!
//! [`render_chart`] wires the stages together in a fixed order: validate the
//! configuration, build the ancestor grid, stream the background strokes,
//! fit one font size per generation, then place the labels. Everything draws
//! through the [`Canvas`] trait; the backend is chosen by the caller.

pub mod fonts;
pub mod rings;
pub mod svg;
pub mod text;

pub use fonts::{FontPlan, plan_fonts};
pub use rings::{PetalRings, PlainRings, RingEngine, RingStyleEngine, background_strokes};
pub use svg::SvgCanvas;
pub use text::place_text;

use crate::canvas::Canvas;
use crate::errors::ChartError;
use crate::grid::build_grid;
use crate::records::RecordStore;
use crate::types::ChartConfig;

/// Render a full chart onto `canvas`.
pub fn render_chart<C: Canvas + ?Sized>(
    config: &ChartConfig,
    store: &dyn RecordStore,
    canvas: &mut C,
) -> Result<(), ChartError> {
    let geometry = config.geometry()?;
    let grid = build_grid(store, &config.root1, &config.root2, geometry.generations)?;
    crate::log::debug!(
        generations = geometry.generations,
        size = geometry.size,
        "rendering chart"
    );

    for stroke in background_strokes(config.style, &geometry) {
        canvas.stroke(stroke);
    }

    let plan = plan_fonts(&grid, &geometry, &*canvas);
    place_text(&grid, &geometry, &plan, canvas);
    Ok(())
}
