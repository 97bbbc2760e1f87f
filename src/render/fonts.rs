//! Per-generation font fitting.
//!
//! One size is chosen per generation ring: the largest whole point size at
//! which the widest label in the ring still fits its wedge, never larger than
//! the size already chosen for an inner ring. The upward linear search with a
//! single-step backoff is deliberate; it reproduces the historical stepping
//! exactly, so degenerate and tied cases resolve the same way.

use crate::canvas::Canvas;
use crate::grid::AncestorGrid;
use crate::types::{ChartGeometry, FontSize};

/// One font size per generation, non-increasing outward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontPlan {
    sizes: Vec<FontSize>,
}

impl FontPlan {
    pub fn size_for(&self, generation: usize) -> FontSize {
        self.sizes[generation]
    }

    pub fn sizes(&self) -> &[FontSize] {
        &self.sizes
    }

    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// Chord width available to a label in generation `g`.
///
/// Generation 0 is the center couple and gets a fixed fraction of the ring
/// width; outer generations get the chord at the radial midpoint of their
/// wedge.
pub fn allowed_width(geometry: &ChartGeometry, generation: usize) -> f64 {
    if generation == 0 {
        1.25 * geometry.ring_width
    } else {
        geometry.angle_increment(generation).sin()
            * (generation as f64 + 0.5)
            * geometry.ring_width
    }
}

/// Largest size whose measured width fits `allowed`, by upward linear search.
///
/// Starts at 1 and steps up while the label fits, backing off exactly one
/// step at the first overflow. A label too wide even at size 1 still gets
/// size 1; overflow there is accepted visual degradation, not an error.
fn fit_font<C: Canvas + ?Sized>(canvas: &C, label: &str, allowed: f64) -> FontSize {
    // A zero-width label fits at every size; the search would never stop.
    if canvas.measure_width(label, FontSize::MIN) <= 0.0 {
        return FontSize::MIN;
    }
    let mut size = 1u32;
    loop {
        let width = canvas.measure_width(label, FontSize::new(size));
        if width > allowed {
            size = size.saturating_sub(1);
            break;
        }
        size += 1;
    }
    FontSize::new(size).max(FontSize::MIN)
}

/// Widest label of one generation at the reference size, first position wins
/// ties. `None` when the generation has no occupied slot.
fn widest_label(grid: &AncestorGrid, generation: usize, reference: FontSize, canvas: &(impl Canvas + ?Sized)) -> Option<String> {
    let mut widest: Option<(f64, String)> = None;
    for (_, person) in grid.occupied(generation) {
        let label = person.name.display();
        let width = canvas.measure_width(&label, reference);
        match &widest {
            Some((max, _)) if width <= *max => {}
            _ => widest = Some((width, label)),
        }
    }
    widest.map(|(_, label)| label)
}

/// Choose a font size for every generation of the grid.
pub fn plan_fonts<C: Canvas + ?Sized>(
    grid: &AncestorGrid,
    geometry: &ChartGeometry,
    canvas: &C,
) -> FontPlan {
    let mut sizes = Vec::with_capacity(geometry.generations);
    let mut previous: Option<FontSize> = None;

    for generation in 0..geometry.generations {
        let chosen = match widest_label(grid, generation, geometry.base_font_size, canvas) {
            Some(label) => {
                let allowed = allowed_width(geometry, generation);
                let mut fitted = fit_font(canvas, &label, allowed);
                if canvas.measure_width(&label, fitted) > allowed {
                    crate::log::warn!(
                        generation,
                        label = label.as_str(),
                        "label overflows its wedge at the minimum font size"
                    );
                }
                // Rings must not get bigger outward.
                if let Some(prev) = previous {
                    fitted = fitted.min(prev);
                }
                crate::log::debug!(
                    generation,
                    widest = label.as_str(),
                    font = fitted.get(),
                    "fitted generation font"
                );
                fitted
            }
            // Empty ring: carry the inner ring's size forward unchanged.
            None => previous.unwrap_or(geometry.base_font_size),
        };
        sizes.push(chosen);
        previous = Some(chosen);
    }

    FontPlan { sizes }
}
