//! PNG output through `plotters`' bitmap backend.
//!
//! The chart is drawn into an in-memory RGB buffer which is then encoded with
//! `image`. No font backend is compiled in and the bitmap backend cannot draw
//! text without one, so the image holds the grid and the series only: no
//! caption, no label areas.

use crate::error::AppError;
use crate::processing::{PlotData, PlotKind};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::ops::Range;
use std::path::Path;
use tracing::debug;

const SERIES_COLOR: RGBColor = RGBColor(31, 119, 180);

/// Renders `plot` and writes it to `path` as a PNG image.
pub fn render_png(plot: &PlotData, path: &Path, width: u32, height: u32) -> Result<(), AppError> {
    let buffer = rasterize(plot, width, height)?;
    let image = image::RgbImage::from_raw(width, height, buffer)
        .ok_or_else(|| AppError::Render("pixel buffer does not match the image size".into()))?;
    image.save_with_format(path, image::ImageFormat::Png)?;

    debug!(path = %path.display(), width, height, "wrote png");
    Ok(())
}

fn rasterize(plot: &PlotData, width: u32, height: u32) -> Result<Vec<u8>, AppError> {
    let len = (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(3))
        .ok_or_else(|| AppError::Render(format!("image size {width}x{height} is too large")))?;

    let (x_range, y_range) = (plot.x_range(), plot.y_range());
    let outside = |v: f64, r: &Range<f64>| v < r.start || v > r.end;
    if plot
        .finite_points()
        .any(|(x, y)| outside(x, &x_range) || outside(y, &y_range))
    {
        return Err(AppError::Render(
            "the data spans more than a chart axis can represent".into(),
        ));
    }

    let mut buffer = vec![0u8; len];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
        draw_chart(&root, plot, x_range, y_range).map_err(|e| AppError::Render(e.to_string()))?;
        root.present().map_err(|e| AppError::Render(e.to_string()))?;
    }
    Ok(buffer)
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    plot: &PlotData,
    x_range: Range<f64>,
    y_range: Range<f64>,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .margin(24)
        .build_cartesian_2d(x_range, y_range)?;

    chart.configure_mesh().draw()?;

    match plot.kind {
        PlotKind::Line => {
            for segment in plot.segments() {
                chart.draw_series(LineSeries::new(segment, SERIES_COLOR.stroke_width(2)))?;
            }
        }
        PlotKind::Scatter => {
            let points = plot.finite_points();
            chart.draw_series(points.map(|p| Circle::new(p, 3, SERIES_COLOR.filled())))?;
        }
    }

    Ok(())
}
