//! A pure Rust renderer for circular ancestor fan charts.
//!
//! A rose chart places a root couple at the center of a square and fans
//! their ancestors outward in concentric rings, one generation per ring,
//! doubling the wedge count each time. This crate builds the ancestor grid
//! from a caller-supplied [`RecordStore`], fits one font size per generation
//! so names stay inside their wedges, and emits the result as SVG.
//!
//! ```
//! use fanrose::{ChartConfig, MemoryStore, Person, rose_svg};
//!
//! let mut store = MemoryStore::new();
//! store.insert("I1", Person::new("Jane", "Doe").born("1 MAY 1901"));
//! store.insert("I2", Person::new("John", "Roe"));
//!
//! let config = ChartConfig::new("I1", "I2");
//! let svg = rose_svg(&config, &store)?;
//! assert!(svg.starts_with("<?xml"));
//! # Ok::<(), fanrose::ChartError>(())
//! ```
//!
//! Missing data never aborts a chart: an absent parent link leaves that
//! branch of the fan empty, and absent dates render as blank years in the
//! lifespan line. Only an unresolvable root id, an invalid configuration,
//! or an I/O failure is an error.

pub mod canvas;
pub mod errors;
pub mod grid;
pub mod log;
pub mod records;
pub mod render;
pub mod types;

pub use canvas::{Canvas, Stroke};
pub use errors::ChartError;
pub use grid::{AncestorGrid, build_grid};
pub use records::{MemoryStore, Name, ParentFamily, Person, RecordStore};
pub use render::{SvgCanvas, render_chart};
pub use types::{ChartConfig, ChartGeometry, ChartStyle, FontSize, Length};

/// Render a chart to an SVG document string.
pub fn rose_svg(config: &ChartConfig, store: &dyn RecordStore) -> Result<String, ChartError> {
    let geometry = config.geometry()?;
    let mut canvas = SvgCanvas::new(&geometry);
    render_chart(config, store, &mut canvas)?;
    Ok(canvas.svg())
}

/// Render a chart and write it to the configured output path.
pub fn rose_to_file(config: &ChartConfig, store: &dyn RecordStore) -> Result<(), ChartError> {
    let path = config.output.as_deref().ok_or(ChartError::MissingOutput)?;
    let geometry = config.geometry()?;
    let mut canvas = SvgCanvas::new(&geometry);
    render_chart(config, store, &mut canvas)?;
    canvas.render_to_file(path)
}
