//! This module turns parsed numbers into something every renderer can draw.
//!
//! It pairs values with their X coordinates, resolves the plot title, and
//! computes the display ranges and line segments shared by the PNG, HTML and
//! window backends.

use std::ops::Range;
use std::path::Path;

/// The two chart styles the tool can draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotKind {
    /// Values connected in order, plotted against their index.
    Line,
    /// Unconnected (x, y) points.
    Scatter,
}

/// A container for all the data and configuration needed to draw a plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotData {
    pub kind: PlotKind,
    /// The title of the plot.
    pub title: String,
    /// Legend name of the single series.
    pub series_name: String,
    /// The (x, y) points in input order. Non-finite values are kept.
    pub points: Vec<(f64, f64)>,
}

/// Builds a line plot of `values` against their 0-based index.
pub fn prepare_line_plot(values: Vec<f64>, title: String) -> PlotData {
    let points = values
        .into_iter()
        .enumerate()
        .map(|(i, v)| (i as f64, v))
        .collect();

    PlotData {
        kind: PlotKind::Line,
        title,
        series_name: "values".to_string(),
        points,
    }
}

/// Builds a scatter plot from two parallel columns.
pub fn prepare_scatter_plot(xs: Vec<f64>, ys: Vec<f64>, title: String) -> PlotData {
    PlotData {
        kind: PlotKind::Scatter,
        title,
        series_name: "points".to_string(),
        points: xs.into_iter().zip(ys).collect(),
    }
}

/// Resolves the plot title: the user's choice, else the input file name.
pub fn resolve_title(custom: Option<&str>, file_path: &Path) -> String {
    custom.map(str::to_string).unwrap_or_else(|| {
        file_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    })
}

impl PlotData {
    /// Padded range covering every finite X value.
    pub fn x_range(&self) -> Range<f64> {
        padded_range(self.points.iter().map(|p| p.0))
    }

    /// Padded range covering every finite Y value.
    pub fn y_range(&self) -> Range<f64> {
        padded_range(self.points.iter().map(|p| p.1))
    }

    /// Points with both coordinates finite.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().copied().filter(|&p| is_finite(p))
    }

    /// Runs of consecutive finite points. A NaN or infinite value ends the
    /// current run, so line renderers leave a gap there.
    pub fn segments(&self) -> Vec<Vec<(f64, f64)>> {
        let mut segments = Vec::new();
        let mut current = Vec::new();

        for &p in &self.points {
            if is_finite(p) {
                current.push(p);
            } else if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            segments.push(current);
        }
        segments
    }
}

fn is_finite((x, y): (f64, f64)) -> bool {
    x.is_finite() && y.is_finite()
}

/// Min/max of the finite values, widened by 5% on each side.
///
/// No finite values gives `0..1`; a single distinct value gets a unit-wide
/// window centred on it. The width of the result is always finite: padding is
/// dropped when it would overflow, and data spanning more than `f64::MAX` gets
/// the widest finite window centred on it, which leaves the outermost points
/// outside.
fn padded_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if min > max {
        return 0.0..1.0;
    }
    if min == max {
        return (min - 0.5)..(max + 0.5);
    }
    let pad = max * 0.05 - min * 0.05;
    let (start, end) = (min - pad, max + pad);
    if (end - start).is_finite() {
        return start..end;
    }
    if (max - min).is_finite() {
        return min..max;
    }
    let centre = min / 2.0 + max / 2.0;
    let half = f64::MAX / 2.0;
    (centre - half)..(centre + half)
}
