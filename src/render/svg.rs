//! SVG drawing backend.
//!
//! The only coordinate transform in the crate lives here: chart coordinates
//! are Y-up with the origin at the bottom-left, SVG is Y-down with the origin
//! at the top-left, so every y is flipped against the document height and
//! every rotation changes sign on the way out.
//!
//! Text is measured with a proportional per-character width table rather than
//! a font rasterizer, so the same input always measures the same and the
//! output is deterministic across platforms.

use std::fmt::Write as _;
use std::path::Path;

use glam::DVec2;

use crate::canvas::Canvas;
use crate::errors::ChartError;
use crate::types::{ChartGeometry, FontSize};

/// Proportional character widths, in hundredths of an average character.
#[rustfmt::skip]
const AW_CHAR: [u8; 95] = [
    45,  55,  62, 115,  90, 132, 125,  40,
    55,  55,  71, 115,  45,  48,  45,  50,
    91,  91,  91,  91,  91,  91,  91,  91,
    91,  91,  50,  50, 120, 120, 120,  78,
   142, 102, 105, 110, 115, 105,  98, 105,
   125,  58,  58, 107,  95, 145, 125, 115,
    95, 115, 107,  95,  97, 118, 102, 150,
   100,  93, 100,  58,  50,  58, 119,  72,
    72,  86,  92,  80,  92,  85,  52,  92,
    92,  47,  47,  88,  48, 135,  92,  86,
    92,  92,  69,  75,  58,  92,  80, 121,
    81,  80,  76,  91,  49,  91, 118,
];

/// Average advance of one character as a fraction of the font size.
const CHAR_WIDTH_FACTOR: f64 = 0.6;

/// Vertical advance between text lines as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Summed proportional width of `text`, in hundredths of an average
/// character. Characters outside printable ASCII count as one full average
/// character.
fn aw_units(text: &str) -> u32 {
    let mut cnt: u32 = 0;
    for c in text.chars() {
        if (' '..='~').contains(&c) {
            cnt += AW_CHAR[(c as usize) - 0x20] as u32;
        } else {
            cnt += 100;
        }
    }
    cnt
}

/// Format a number matching C's %g (6 significant figures, trailing zeros
/// trimmed).
fn fmt_num(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let sig_figs = 6i32;
    let magnitude = value.abs().log10().floor() as i32;
    let scale = 10_f64.powi(sig_figs - 1 - magnitude);
    let rounded = (value * scale).round() / scale;
    let decimals = (sig_figs - 1 - magnitude).max(0) as usize;
    let mut s = format!("{rounded:.decimals$}");
    // Only fractional zeros are padding; integer zeros are significant.
    if s.contains('.') {
        s.truncate(s.trim_end_matches('0').trim_end_matches('.').len());
    }
    s
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// [`Canvas`] that accumulates SVG elements and assembles a standalone
/// document.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    size: f64,
    body: String,
}

impl SvgCanvas {
    pub fn new(geometry: &ChartGeometry) -> Self {
        Self {
            size: geometry.size,
            body: String::new(),
        }
    }

    fn flip_y(&self, y: f64) -> f64 {
        self.size - y
    }

    /// The finished SVG document.
    pub fn svg(&self) -> String {
        let dim = fmt_num(self.size);
        let mut out = String::with_capacity(self.body.len() + 256);
        out.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
        out.push('\n');
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{dim}" height="{dim}" viewBox="0 0 {dim} {dim}">"#,
        );
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }

    /// Write the finished document to `path`.
    pub fn render_to_file(&self, path: &Path) -> Result<(), ChartError> {
        std::fs::write(path, self.svg())?;
        Ok(())
    }
}

impl Canvas for SvgCanvas {
    fn stroke_line(&mut self, from: DVec2, to: DVec2) {
        let _ = writeln!(
            self.body,
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="black" fill="none"/>"#,
            fmt_num(from.x),
            fmt_num(self.flip_y(from.y)),
            fmt_num(to.x),
            fmt_num(self.flip_y(to.y)),
        );
    }

    fn stroke_circle(&mut self, center: DVec2, radius: f64) {
        let _ = writeln!(
            self.body,
            r#"<circle cx="{}" cy="{}" r="{}" stroke="black" fill="none"/>"#,
            fmt_num(center.x),
            fmt_num(self.flip_y(center.y)),
            fmt_num(radius),
        );
    }

    fn stroke_curve(&mut self, from: DVec2, to: DVec2, ctrl1: DVec2, ctrl2: DVec2) {
        let _ = writeln!(
            self.body,
            r#"<path d="M{},{} C{},{} {},{} {},{}" stroke="black" fill="none"/>"#,
            fmt_num(from.x),
            fmt_num(self.flip_y(from.y)),
            fmt_num(ctrl1.x),
            fmt_num(self.flip_y(ctrl1.y)),
            fmt_num(ctrl2.x),
            fmt_num(self.flip_y(ctrl2.y)),
            fmt_num(to.x),
            fmt_num(self.flip_y(to.y)),
        );
    }

    fn measure_width(&self, text: &str, size: FontSize) -> f64 {
        aw_units(text) as f64 * 0.01 * CHAR_WIDTH_FACTOR * size.points()
    }

    fn line_height(&self, size: FontSize) -> f64 {
        LINE_HEIGHT_FACTOR * size.points()
    }

    fn draw_rotated_text(
        &mut self,
        text: &str,
        size: FontSize,
        anchor: DVec2,
        rotation_degrees: f64,
        origin: DVec2,
    ) {
        // Chart rotations are counter-clockwise positive; SVG's rotate() is
        // clockwise positive in screen coordinates.
        let _ = writeln!(
            self.body,
            r#"<text x="{}" y="{}" font-family="sans-serif" font-size="{}" transform="rotate({} {} {})">{}</text>"#,
            fmt_num(anchor.x),
            fmt_num(self.flip_y(anchor.y)),
            size.get(),
            fmt_num(-rotation_degrees),
            fmt_num(origin.x),
            fmt_num(self.flip_y(origin.y)),
            escape_xml(text),
        );
    }
}
