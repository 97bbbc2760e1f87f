//! Label placement inside the wedges.
//!
//! Every occupied slot gets a name line and a lifespan line one text row
//! below it. Both are laid out on the vertical axis and handed to the canvas
//! with the wedge's rotation; the canvas owns the actual coordinate
//! transform.

use glam::DVec2;

use crate::canvas::Canvas;
use crate::grid::AncestorGrid;
use crate::render::fonts::FontPlan;
use crate::types::ChartGeometry;

/// Year shown for a recorded date: its last four characters.
///
/// Dates are free-form strings that conventionally end in a four-digit year
/// ("12 JAN 1880", "ABT 1750"). Anything shorter than four characters has no
/// year to show and yields the empty string.
pub fn trailing_year(date: &str) -> &str {
    match date.char_indices().rev().nth(3) {
        Some((idx, _)) => &date[idx..],
        None => "",
    }
}

/// The lifespan line under a name. Unknown years render as empty strings,
/// so a fully dateless person still gets a bare `" - "` row.
fn lifespan(birth: Option<&str>, death: Option<&str>) -> String {
    let born = birth.map(trailing_year).unwrap_or("");
    let died = death.map(trailing_year).unwrap_or("");
    format!("{born} - {died}")
}

/// Draw the labels for every occupied slot of the grid.
pub fn place_text<C: Canvas + ?Sized>(
    grid: &AncestorGrid,
    geometry: &ChartGeometry,
    plan: &FontPlan,
    canvas: &mut C,
) {
    let origin = geometry.origin();
    for generation in 0..grid.generations() {
        let font = plan.size_for(generation);
        let increment_degrees = 360.0 / geometry.segment_count(generation) as f64;
        // Lines sit on the vertical axis, radially centered in the ring and
        // horizontally centered by their own width; the rotation swings them
        // into the wedge.
        let baseline = geometry.center + (generation as f64 + 0.5) * geometry.ring_width;

        for (position, person) in grid.occupied(generation) {
            let rotation = -(increment_degrees * position as f64 + increment_degrees / 2.0);
            let name = person.name.display();
            let anchor = DVec2::new(
                geometry.center - canvas.measure_width(&name, font) / 2.0,
                baseline,
            );
            canvas.draw_rotated_text(&name, font, anchor, rotation, origin);
            let line = lifespan(person.birth.as_deref(), person.death.as_deref());
            let below = DVec2::new(
                geometry.center - canvas.measure_width(&line, font) / 2.0,
                baseline - canvas.line_height(font),
            );
            canvas.draw_rotated_text(&line, font, below, rotation, origin);
        }
    }
}
