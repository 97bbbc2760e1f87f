//! Strongly-typed primitives and chart configuration.
//!
//! Design goals:
//! - No raw `f64` in the public configuration surface
//! - Illegal states rejected before any geometry is computed
//! - All derived layout quantities flow from one immutable [`ChartGeometry`]

use std::f64::consts::PI;
use std::fmt;
use std::path::PathBuf;

use glam::DVec2;

use crate::errors::ChartError;

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericError {
    /// Value is NaN
    NaN,
    /// Value is infinite
    Infinite,
    /// Value is negative or zero when strictly positive required
    NotPositive,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::NaN => write!(f, "value is NaN"),
            NumericError::Infinite => write!(f, "value is infinite"),
            NumericError::NotPositive => write!(f, "value is not strictly positive"),
        }
    }
}

impl std::error::Error for NumericError {}

/// Length in chart units (one unit = one output pixel).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    /// Create a Length from chart units (const-friendly, unchecked).
    /// Use `try_positive` for user-provided values.
    #[inline]
    pub const fn units(val: f64) -> Length {
        Length(val)
    }

    /// Create a strictly positive Length with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Length, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else if val <= 0.0 {
            Err(NumericError::NotPositive)
        } else {
            Ok(Length(val))
        }
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer font size in points.
///
/// Font fitting steps through whole point sizes, so fractional sizes are
/// unrepresentable by construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct FontSize(pub u32);

impl FontSize {
    /// The smallest selectable size. Fitting never backs off below this.
    pub const MIN: FontSize = FontSize(1);

    #[inline]
    pub const fn new(points: u32) -> FontSize {
        FontSize(points)
    }

    #[inline]
    pub fn points(self) -> f64 {
        f64::from(self.0)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn min(self, other: FontSize) -> FontSize {
        FontSize(self.0.min(other.0))
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}pt", self.0)
    }
}

/// Background style for the generation rings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChartStyle {
    /// Straight radial dividers between concentric circles.
    #[default]
    Plain,
    /// Curved petal boundaries between rings, smooth from generation 1 outward.
    Petal,
}

/// Chart parameters supplied by the caller. Immutable once built; every
/// component receives the derived [`ChartGeometry`] rather than reading
/// ambient state.
#[derive(Clone, Debug)]
pub struct ChartConfig {
    /// Identifier of the first root individual (level 0, position 0).
    pub root1: String,
    /// Identifier of the second root individual (level 0, position 1).
    pub root2: String,
    /// Square chart dimension in chart units.
    pub size: Length,
    /// Number of generation rings to lay out.
    pub generations: usize,
    /// Reference size used when comparing label widths.
    pub base_font_size: FontSize,
    /// Background ring style.
    pub style: ChartStyle,
    /// Radial thickness of one ring. Defaults to `size / (2 * (generations + 1))`.
    pub ring_width: Option<Length>,
    /// Where `rose_to_file` writes the finished document.
    pub output: Option<PathBuf>,
}

impl ChartConfig {
    pub fn new(root1: impl Into<String>, root2: impl Into<String>) -> Self {
        Self {
            root1: root1.into(),
            root2: root2.into(),
            size: Length::units(600.0),
            generations: 5,
            base_font_size: FontSize::new(6),
            style: ChartStyle::Plain,
            ring_width: None,
            output: None,
        }
    }

    /// Validate and derive the layout quantities every component consumes.
    pub fn geometry(&self) -> Result<ChartGeometry, ChartError> {
        if self.generations == 0 {
            return Err(ChartError::InvalidConfig {
                reason: "generation count must be at least 1".into(),
            });
        }
        let size =
            Length::try_positive(self.size.raw()).map_err(|e| ChartError::InvalidConfig {
                reason: format!("chart size: {e}"),
            })?;
        let ring_width = match self.ring_width {
            Some(w) => Length::try_positive(w.raw()).map_err(|e| ChartError::InvalidConfig {
                reason: format!("ring width: {e}"),
            })?,
            None => Length::units(size.raw() / (2.0 * (self.generations as f64 + 1.0))),
        };
        Ok(ChartGeometry {
            size: size.raw(),
            center: size.raw() / 2.0,
            ring_width: ring_width.raw(),
            generations: self.generations,
            base_font_size: self.base_font_size,
        })
    }
}

/// Derived, immutable layout parameters.
///
/// Coordinates are chart units with the origin at the bottom-left and Y
/// growing upward; the SVG canvas flips to screen coordinates on output.
#[derive(Clone, Copy, Debug)]
pub struct ChartGeometry {
    pub size: f64,
    pub center: f64,
    pub ring_width: f64,
    pub generations: usize,
    pub base_font_size: FontSize,
}

impl ChartGeometry {
    /// Number of wedges in generation `g`: `2^(g+1)`.
    #[inline]
    pub fn segment_count(&self, generation: usize) -> usize {
        1usize << (generation + 1)
    }

    /// Angular width of one wedge in generation `g`, in radians.
    #[inline]
    pub fn angle_increment(&self, generation: usize) -> f64 {
        2.0 * PI / self.segment_count(generation) as f64
    }

    /// Polar to Cartesian, measured from the vertical axis, clockwise.
    #[inline]
    pub fn polar(&self, theta: f64, radius: f64) -> DVec2 {
        DVec2::new(
            self.center + theta.sin() * radius,
            self.center + theta.cos() * radius,
        )
    }

    /// Center of the chart as a point.
    #[inline]
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.center, self.center)
    }
}
