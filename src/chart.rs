//! SVG line charts of ascending vs descending sort durations.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::info;
use serde::Serialize;

use crate::error::{Error, Result};

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 500.0;
const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 70.0;
const Y_TICKS: usize = 5;

const ASCENDING_COLOR: &str = "#1f77b4";
const DESCENDING_COLOR: &str = "#ff7f0e";

/// Timings of one element kind, one entry per input size.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Series {
    pub sizes: Vec<usize>,
    pub ascending_ms: Vec<f64>,
    pub descending_ms: Vec<f64>,
}

impl Series {
    pub fn push(&mut self, size: usize, ascending_ms: f64, descending_ms: f64) {
        self.sizes.push(size);
        self.ascending_ms.push(ascending_ms);
        self.descending_ms.push(descending_ms);
    }

    fn validate(&self, title: &str) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::EmptySeries(title.into()));
        }

        if self.ascending_ms.len() != self.sizes.len() || self.descending_ms.len() != self.sizes.len()
        {
            return Err(Error::SeriesLength {
                title: title.into(),
                sizes: self.sizes.len(),
                ascending: self.ascending_ms.len(),
                descending: self.descending_ms.len(),
            });
        }

        Ok(())
    }
}

struct Scale {
    x_min: f64,
    x_max: f64,
    y_max: f64,
}

impl Scale {
    fn new(series: &Series) -> Self {
        let x_min = series.sizes.iter().copied().min().unwrap_or(0) as f64;
        let x_max = series.sizes.iter().copied().max().unwrap_or(0) as f64;
        let y_max = series
            .ascending_ms
            .iter()
            .chain(&series.descending_ms)
            .copied()
            .filter(|ms| ms.is_finite())
            .fold(0.0, f64::max);

        Self {
            x_min,
            x_max,
            y_max: if y_max > 0.0 { y_max * 1.1 } else { 1.0 },
        }
    }

    fn x(&self, size: usize) -> f64 {
        let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
        if self.x_max == self.x_min {
            return MARGIN_LEFT + plot_width / 2.0;
        }

        MARGIN_LEFT + (size as f64 - self.x_min) / (self.x_max - self.x_min) * plot_width
    }

    fn y(&self, ms: f64) -> f64 {
        let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
        let ms = if ms.is_finite() { ms.max(0.0) } else { 0.0 };

        HEIGHT - MARGIN_BOTTOM - ms / self.y_max * plot_height
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders `series` as a standalone SVG document.
pub fn render_svg(title: &str, series: &Series) -> Result<String> {
    series.validate(title)?;

    let scale = Scale::new(series);
    let left = MARGIN_LEFT;
    let right = WIDTH - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = HEIGHT - MARGIN_BOTTOM;

    let mut svg = String::new();

    // Writing into a String can't fail.
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{HEIGHT}" viewBox="0 0 {WIDTH} {HEIGHT}" font-family="sans-serif" font-size="12">"#
    );
    let _ = writeln!(
        svg,
        r#"<rect width="{WIDTH}" height="{HEIGHT}" fill="white"/>"#
    );
    let _ = writeln!(
        svg,
        r#"<text x="{}" y="{}" text-anchor="middle" font-size="16">{}</text>"#,
        WIDTH / 2.0,
        top / 2.0 + 5.0,
        escape(title)
    );

    // Grid and tick labels.
    for i in 0..=Y_TICKS {
        let ms = scale.y_max * i as f64 / Y_TICKS as f64;
        let y = scale.y(ms);
        let _ = writeln!(
            svg,
            r##"<line x1="{left}" y1="{y:.1}" x2="{right}" y2="{y:.1}" stroke="#dddddd"/>"##
        );
        let _ = writeln!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end">{ms:.2}</text>"#,
            left - 6.0,
            y + 4.0
        );
    }
    for &size in &series.sizes {
        let x = scale.x(size);
        let _ = writeln!(
            svg,
            r##"<line x1="{x:.1}" y1="{top}" x2="{x:.1}" y2="{bottom}" stroke="#dddddd"/>"##
        );
        let _ = writeln!(
            svg,
            r#"<text x="{x:.1}" y="{:.1}" text-anchor="middle">{size}</text>"#,
            bottom + 18.0
        );
    }

    // Axes and labels.
    let _ = writeln!(
        svg,
        r#"<line x1="{left}" y1="{bottom}" x2="{right}" y2="{bottom}" stroke="black"/>"#
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{left}" y1="{top}" x2="{left}" y2="{bottom}" stroke="black"/>"#
    );
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">Input size (number of elements)</text>"#,
        (left + right) / 2.0,
        HEIGHT - 20.0
    );
    let _ = writeln!(
        svg,
        r#"<text x="20" y="{:.1}" text-anchor="middle" transform="rotate(-90 20 {:.1})">Execution time (ms)</text>"#,
        (top + bottom) / 2.0,
        (top + bottom) / 2.0
    );

    // Ascending: solid line, circle markers.
    let ascending_points = points(&scale, &series.sizes, &series.ascending_ms);
    let _ = writeln!(
        svg,
        r#"<polyline points="{}" fill="none" stroke="{ASCENDING_COLOR}" stroke-width="2"/>"#,
        polyline(&ascending_points)
    );
    for (x, y) in &ascending_points {
        let _ = writeln!(
            svg,
            r#"<circle cx="{x:.1}" cy="{y:.1}" r="4" fill="{ASCENDING_COLOR}"/>"#
        );
    }

    // Descending: dashed line, square markers.
    let descending_points = points(&scale, &series.sizes, &series.descending_ms);
    let _ = writeln!(
        svg,
        r#"<polyline points="{}" fill="none" stroke="{DESCENDING_COLOR}" stroke-width="2" stroke-dasharray="8 4"/>"#,
        polyline(&descending_points)
    );
    for (x, y) in &descending_points {
        let _ = writeln!(
            svg,
            r#"<rect x="{:.1}" y="{:.1}" width="8" height="8" fill="{DESCENDING_COLOR}"/>"#,
            x - 4.0,
            y - 4.0
        );
    }

    // Legend.
    let lx = left + 15.0;
    let ly = top + 15.0;
    let _ = writeln!(
        svg,
        r##"<rect x="{:.1}" y="{:.1}" width="130" height="48" fill="white" stroke="#999999"/>"##,
        lx - 8.0,
        ly - 12.0
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{lx}" y1="{ly}" x2="{:.1}" y2="{ly}" stroke="{ASCENDING_COLOR}" stroke-width="2"/>"#,
        lx + 25.0
    );
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}">Ascending</text>"#,
        lx + 32.0,
        ly + 4.0
    );
    let _ = writeln!(
        svg,
        r#"<line x1="{lx}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{DESCENDING_COLOR}" stroke-width="2" stroke-dasharray="8 4"/>"#,
        ly + 22.0,
        lx + 25.0,
        ly + 22.0
    );
    let _ = writeln!(
        svg,
        r#"<text x="{:.1}" y="{:.1}">Descending</text>"#,
        lx + 32.0,
        ly + 26.0
    );

    svg.push_str("</svg>\n");

    Ok(svg)
}

fn points(scale: &Scale, sizes: &[usize], ms: &[f64]) -> Vec<(f64, f64)> {
    sizes
        .iter()
        .zip(ms)
        .map(|(&size, &ms)| (scale.x(size), scale.y(ms)))
        .collect()
}

fn polyline(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Renders `series` and writes the SVG to `path`.
pub fn write_chart(path: &Path, title: &str, series: &Series) -> Result<()> {
    let svg = render_svg(title, series)?;
    fs::write(path, svg)?;
    info!("chart written to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Series {
        let mut series = Series::default();
        series.push(100, 0.05, 0.07);
        series.push(1_000, 0.9, 1.1);
        series.push(10_000, 12.5, 14.0);
        series
    }

    #[test]
    fn renders_both_series() {
        let svg = render_svg("Shell Sort - Numbers", &sample()).unwrap();

        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Shell Sort - Numbers"));
        assert_eq!(svg.matches("<polyline").count(), 2);
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains("stroke-dasharray"));
        assert!(svg.contains("Input size (number of elements)"));
        assert!(svg.contains("Execution time (ms)"));
        assert!(svg.contains(">10000<"));
    }

    #[test]
    fn escapes_title() {
        let svg = render_svg("a < b & c", &sample()).unwrap();
        assert!(svg.contains("a &lt; b &amp; c"));
    }

    #[test]
    fn single_point_and_zero_timings() {
        let mut series = Series::default();
        series.push(100, 0.0, 0.0);
        let svg = render_svg("one", &series).unwrap();
        assert!(!svg.contains("NaN"));
    }

    #[test]
    fn rejects_empty_series() {
        let err = render_svg("empty", &Series::default()).unwrap_err();
        assert!(matches!(err, Error::EmptySeries(_)));
    }

    #[test]
    fn rejects_mismatched_series() {
        let series = Series {
            sizes: vec![1, 2],
            ascending_ms: vec![1.0],
            descending_ms: vec![1.0, 2.0],
        };
        let err = render_svg("bad", &series).unwrap_err();
        assert!(matches!(
            err,
            Error::SeriesLength {
                sizes: 2,
                ascending: 1,
                ..
            }
        ));
    }

    #[test]
    fn writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.svg");
        write_chart(&path, "written", &sample()).unwrap();

        let svg = fs::read_to_string(path).unwrap();
        assert!(svg.contains("written"));
    }
}
