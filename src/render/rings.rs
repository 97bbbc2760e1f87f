//! Background ring geometry.
//!
//! Geometry is independent of grid occupancy: a ring is always fully drawn.
//! Strokes are produced generation by generation and handed straight to the
//! canvas; nothing is buffered beyond one generation's worth of primitives.
//!
//! Two engines share the segment-doubling layout. [`PlainRings`] draws
//! concentric circles with straight radial dividers. [`PetalRings`] replaces
//! the polygonal boundary with alternating long/short edges joined by cubic
//! Bezier "petal" curves from generation 1 outward. The petal offset and
//! bulge constants are visual tuning, not load-bearing math; what must hold
//! is that radius grows monotonically with generation and the curve point set
//! is rotationally symmetric within each ring.

use enum_dispatch::enum_dispatch;

use crate::canvas::Stroke;
use crate::types::{ChartGeometry, ChartStyle};

#[enum_dispatch]
pub trait RingEngine {
    /// Strokes drawn once, before the first generation ring.
    fn base_strokes(&self, geometry: &ChartGeometry) -> Vec<Stroke>;

    /// Strokes for one generation ring.
    fn ring_strokes(&self, geometry: &ChartGeometry, generation: usize) -> Vec<Stroke>;
}

/// Concentric circles with one straight radial divider per wedge.
#[derive(Debug, Clone, Copy)]
pub struct PlainRings;

/// Petal-style rings: asymmetric straight edges joined by smooth curves.
#[derive(Debug, Clone, Copy)]
pub struct PetalRings;

#[enum_dispatch(RingEngine)]
#[derive(Debug, Clone, Copy)]
pub enum RingStyleEngine {
    PlainRings,
    PetalRings,
}

impl From<ChartStyle> for RingStyleEngine {
    fn from(style: ChartStyle) -> Self {
        match style {
            ChartStyle::Plain => PlainRings.into(),
            ChartStyle::Petal => PetalRings.into(),
        }
    }
}

/// All background strokes for a chart, innermost generation first.
pub fn background_strokes(
    style: ChartStyle,
    geometry: &ChartGeometry,
) -> impl Iterator<Item = Stroke> + '_ {
    let engine = RingStyleEngine::from(style);
    engine
        .base_strokes(geometry)
        .into_iter()
        .chain((0..geometry.generations).flat_map(move |g| engine.ring_strokes(geometry, g)))
}

impl RingEngine for PlainRings {
    fn base_strokes(&self, _geometry: &ChartGeometry) -> Vec<Stroke> {
        Vec::new()
    }

    fn ring_strokes(&self, geometry: &ChartGeometry, generation: usize) -> Vec<Stroke> {
        let w = geometry.ring_width;
        let g = generation as f64;
        let segments = geometry.segment_count(generation);
        let inc = geometry.angle_increment(generation);

        let mut strokes = Vec::with_capacity(segments + 1);
        strokes.push(Stroke::Circle {
            center: geometry.origin(),
            radius: (g + 1.0) * w,
        });
        for seg in 1..=segments {
            let theta = inc * seg as f64;
            strokes.push(Stroke::Line {
                from: geometry.polar(theta, g * w),
                to: geometry.polar(theta, (g + 1.0) * w),
            });
        }
        strokes
    }
}

/// Radial offset of the short edge's inner end, per generation. The first
/// petal curves have forced radii, so the innermost short edges start a
/// little further out to meet them.
fn short_edge_offset(generation: usize) -> f64 {
    match generation {
        0 | 1 => 0.0,
        2 => 0.15,
        3 => 0.19,
        _ => 0.15,
    }
}

/// Petal curve bulge for one generation: the radius factor added to the
/// generation index for both control points, and the fractions of the
/// segment arc at which they sit.
fn petal_bulge(generation: usize) -> (f64, [f64; 2]) {
    match generation {
        1 => (1.5, [0.33, 0.66]),
        2 => (1.4, [0.33, 0.66]),
        _ => (1.33, [0.0, 1.0]),
    }
}

impl RingEngine for PetalRings {
    fn base_strokes(&self, geometry: &ChartGeometry) -> Vec<Stroke> {
        // A plain circle wraps the center couple; curves start one ring out.
        vec![Stroke::Circle {
            center: geometry.origin(),
            radius: geometry.ring_width,
        }]
    }

    fn ring_strokes(&self, geometry: &ChartGeometry, generation: usize) -> Vec<Stroke> {
        let w = geometry.ring_width;
        let g = generation as f64;
        let segments = geometry.segment_count(generation);
        let inc = geometry.angle_increment(generation);
        let offset = short_edge_offset(generation);
        let (bulge, arc_fractions) = petal_bulge(generation);

        let mut strokes = Vec::with_capacity(2 * segments);
        for seg in 1..=segments {
            let theta = inc * seg as f64;
            // Alternate a long and a short radial edge; the petal curve
            // spans the gap left by the short ones.
            let (inner, outer) = if seg % 2 == 0 {
                ((g - 0.1) * w, (g + 1.0) * w)
            } else {
                ((g + offset) * w, (g + 0.9) * w)
            };
            strokes.push(Stroke::Line {
                from: geometry.polar(theta, inner),
                to: geometry.polar(theta, outer),
            });

            if generation >= 1 {
                let next_theta = inc * (seg + 1) as f64;
                let curve_radius = (g + 0.9) * w;
                let bulge_radius = (g + bulge) * w;
                strokes.push(Stroke::Curve {
                    from: geometry.polar(theta, curve_radius),
                    to: geometry.polar(next_theta, curve_radius),
                    ctrl1: geometry.polar(theta + arc_fractions[0] * inc, bulge_radius),
                    ctrl2: geometry.polar(theta + arc_fractions[1] * inc, bulge_radius),
                });
            }
        }
        strokes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChartConfig;
    use glam::DVec2;
    use rstest::rstest;

    fn geometry() -> ChartGeometry {
        ChartConfig::new("a", "b").geometry().unwrap()
    }

    fn radius_of(geometry: &ChartGeometry, p: DVec2) -> f64 {
        (p - geometry.origin()).length()
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    fn plain_ring_has_one_circle_and_one_divider_per_wedge(#[case] generation: usize) {
        let geometry = geometry();
        let strokes = PlainRings.ring_strokes(&geometry, generation);
        let segments = geometry.segment_count(generation);
        let circles = strokes
            .iter()
            .filter(|s| matches!(s, Stroke::Circle { .. }))
            .count();
        let lines = strokes
            .iter()
            .filter(|s| matches!(s, Stroke::Line { .. }))
            .count();
        assert_eq!(circles, 1);
        assert_eq!(lines, segments);
    }

    #[test]
    fn plain_dividers_span_exactly_one_ring() {
        let geometry = geometry();
        for stroke in PlainRings.ring_strokes(&geometry, 2) {
            if let Stroke::Line { from, to } = stroke {
                assert!((radius_of(&geometry, from) - 2.0 * geometry.ring_width).abs() < 1e-9);
                assert!((radius_of(&geometry, to) - 3.0 * geometry.ring_width).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn plain_circle_radius_grows_monotonically() {
        let geometry = geometry();
        let mut last = 0.0;
        for g in 0..geometry.generations {
            for stroke in PlainRings.ring_strokes(&geometry, g) {
                if let Stroke::Circle { radius, .. } = stroke {
                    assert!(radius > last);
                    last = radius;
                }
            }
        }
    }

    #[test]
    fn petal_center_circle_precedes_generation_zero() {
        let geometry = geometry();
        let base = PetalRings.base_strokes(&geometry);
        assert_eq!(base.len(), 1);
        assert!(matches!(
            base[0],
            Stroke::Circle { radius, .. } if (radius - geometry.ring_width).abs() < 1e-9
        ));
    }

    #[test]
    fn petal_generation_zero_has_edges_but_no_curves() {
        let geometry = geometry();
        let strokes = PetalRings.ring_strokes(&geometry, 0);
        assert!(strokes.iter().all(|s| matches!(s, Stroke::Line { .. })));
        assert_eq!(strokes.len(), geometry.segment_count(0));
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(4)]
    fn petal_curves_join_consecutive_segment_ends(#[case] generation: usize) {
        let geometry = geometry();
        let inc = geometry.angle_increment(generation);
        let rim = (generation as f64 + 0.9) * geometry.ring_width;
        let strokes = PetalRings.ring_strokes(&geometry, generation);
        let curves: Vec<_> = strokes
            .iter()
            .filter_map(|s| match s {
                Stroke::Curve { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect();
        assert_eq!(curves.len(), geometry.segment_count(generation));
        for (i, (from, to)) in curves.iter().enumerate() {
            assert!((radius_of(&geometry, *from) - rim).abs() < 1e-9);
            assert!((radius_of(&geometry, *to) - rim).abs() < 1e-9);
            let theta = inc * (i + 1) as f64;
            let expected_from = geometry.polar(theta, rim);
            assert!((*from - expected_from).length() < 1e-9);
            // Each curve ends where the next one starts (mod full turn).
            let next_from = curves[(i + 1) % curves.len()].0;
            assert!((*to - next_from).length() < 1e-6);
        }
    }

    #[test]
    fn petal_curve_points_are_rotationally_symmetric() {
        let geometry = geometry();
        let generation = 2;
        let inc = geometry.angle_increment(generation);
        let strokes = PetalRings.ring_strokes(&geometry, generation);
        let points: Vec<DVec2> = strokes
            .iter()
            .filter_map(|s| match s {
                Stroke::Curve { from, .. } => Some(*from),
                _ => None,
            })
            .collect();
        // Rotating every curve start by one wedge angle lands on the set again.
        let origin = geometry.origin();
        let (sin, cos) = inc.sin_cos();
        for p in &points {
            let v = *p - origin;
            let rotated = origin + DVec2::new(v.x * cos + v.y * sin, -v.x * sin + v.y * cos);
            assert!(
                points.iter().any(|q| (*q - rotated).length() < 1e-6),
                "rotated point {rotated:?} not in curve set"
            );
        }
    }

    #[test]
    fn background_stream_covers_all_generations() {
        let geometry = geometry();
        let plain: Vec<_> = background_strokes(ChartStyle::Plain, &geometry).collect();
        let expected: usize = (0..geometry.generations)
            .map(|g| geometry.segment_count(g) + 1)
            .sum();
        assert_eq!(plain.len(), expected);

        let petal: Vec<_> = background_strokes(ChartStyle::Petal, &geometry).collect();
        // Center circle + per generation: one edge per wedge, plus one curve
        // per wedge from generation 1 outward.
        let expected: usize = 1 + (0..geometry.generations)
            .map(|g| geometry.segment_count(g) * if g >= 1 { 2 } else { 1 })
            .sum::<usize>();
        assert_eq!(petal.len(), expected);
    }
}
