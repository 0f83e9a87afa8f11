//! Interactive chart window for line plots.
//!
//! Built on `eframe`/`egui_plot` when the `window` feature is enabled; the
//! call blocks until the window is closed.

use crate::error::AppError;
use crate::processing::PlotData;

#[cfg(feature = "window")]
pub fn show(plot: &PlotData, width: u32, height: u32) -> Result<(), AppError> {
    use eframe::egui;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width as f32, height as f32])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    tracing::info!(title = %plot.title, points = plot.points.len(), "opening chart window");

    let viewer = PlotViewer {
        plot: plot.clone(),
    };
    eframe::run_native(&plot.title, options, Box::new(|_cc| Ok(Box::new(viewer))))
        .map_err(|e| AppError::Display(e.to_string()))?;

    tracing::debug!("chart window closed");
    Ok(())
}

#[cfg(not(feature = "window"))]
pub fn show(_plot: &PlotData, _width: u32, _height: u32) -> Result<(), AppError> {
    Err(AppError::DisplayUnavailable)
}

#[cfg(feature = "window")]
struct PlotViewer {
    plot: PlotData,
}

#[cfg(feature = "window")]
impl eframe::App for PlotViewer {
    fn update(&mut self, ctx: &eframe::egui::Context, _frame: &mut eframe::Frame) {
        use eframe::egui::{self, Color32};
        use egui_plot::{Line, Plot, PlotPoints};

        let color = Color32::from_rgb(31, 119, 180);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(&self.plot.title);

            Plot::new("file_plot")
                .allow_boxed_zoom(true)
                .allow_drag(true)
                .allow_scroll(true)
                .allow_zoom(true)
                .show(ui, |plot_ui| {
                    for segment in self.plot.segments() {
                        let points: PlotPoints = segment.into_iter().map(|(x, y)| [x, y]).collect();
                        plot_ui.line(
                            Line::new(points)
                                .name(&self.plot.series_name)
                                .color(color)
                                .width(1.5),
                        );
                    }
                });
        });
    }
}
