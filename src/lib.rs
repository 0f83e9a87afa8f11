//! The main library for the `fileplot` application.
//!
//! This crate reads a text file of numbers and draws it either as a line plot
//! of one sequence against its index, or as a scatter plot of two columns.
//! The primary entry point is the `run` function, which takes the parsed CLI
//! arguments and executes the plotting process.
//!
//! The library is structured into several modules:
//! - `cli`: Defines the command-line interface and the input path prompt.
//! - `data_loader`: Reads the input file and parses its numbers.
//! - `processing`: Packages parsed numbers into a `PlotData` for the renderers.
//! - `render`: Draws a `PlotData` into a PNG file.
//! - `plotter`: Generates an interactive HTML/JavaScript plot.
//! - `viewer`: Shows a `PlotData` in a chart window.
//! - `error`: Defines the application's custom error type.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod cli;
pub mod data_loader;
pub mod error;
pub mod plotter;
pub mod processing;
pub mod render;
pub mod viewer;

use crate::cli::Cli;
use crate::processing::{PlotData, PlotKind};

/// The main entry point for the application logic.
///
/// This function orchestrates the entire process:
/// 1.  It takes the input path from the arguments, or prompts for it on stdin.
/// 2.  It reads and parses the file in line or scatter mode.
/// 3.  It writes the PNG or opens the chart window, then writes the HTML page.
///
/// An empty answer to the prompt ends the run without plotting.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if any output
/// cannot be written.
pub fn run(cli: &Cli) -> Result<()> {
    let input_path = match &cli.input_path {
        Some(path) => path.clone(),
        None => match cli::prompt_for_path(io::stdin().lock(), io::stdout())? {
            Some(path) => path,
            None => {
                info!("no input path given, nothing to plot");
                return Ok(());
            }
        },
    };

    let plot_data = load_plot_data(&input_path, cli)
        .with_context(|| format!("Failed to plot file: {}", input_path.display()))?;

    // PNG first: a failed render leaves no HTML page behind
    match plot_data.kind {
        PlotKind::Scatter => {
            let output_path = scatter_output_path(&input_path, cli);
            save_png(&plot_data, &output_path, cli)?;
        }
        PlotKind::Line => {
            if let Some(save_path) = &cli.save {
                save_png(&plot_data, save_path, cli)?;
            } else if cli.html.is_none() {
                viewer::show(&plot_data, cli.width, cli.height)?;
            }
        }
    }

    if let Some(html_path) = &cli.html {
        let html_content = plotter::generate_html_plot(&plot_data)?;
        create_parent_dir(html_path)?;
        fs::write(html_path, html_content)
            .with_context(|| format!("Failed to write output to {}", html_path.display()))?;
        println!("Plot saved to '{}'", html_path.display());
    }

    Ok(())
}

/// Reads the file and parses it according to the selected mode.
fn load_plot_data(input_path: &Path, cli: &Cli) -> Result<PlotData> {
    let text = data_loader::read_input(input_path)?;
    let title = processing::resolve_title(cli.title.as_deref(), input_path);

    let plot_data = if cli.scatter {
        let (xs, ys) = data_loader::parse_columns(&text)?;
        processing::prepare_scatter_plot(xs, ys, title)
    } else {
        processing::prepare_line_plot(data_loader::parse_sequence(&text)?, title)
    };

    debug!(
        kind = ?plot_data.kind,
        points = plot_data.points.len(),
        x_range = ?plot_data.x_range(),
        y_range = ?plot_data.y_range(),
        "prepared plot"
    );
    Ok(plot_data)
}

fn save_png(plot_data: &PlotData, path: &Path, cli: &Cli) -> Result<()> {
    create_parent_dir(path)?;
    render::render_png(plot_data, path, cli.width, cli.height)
        .with_context(|| format!("Failed to write output to {}", path.display()))?;
    println!("Plot saved to '{}'", path.display());
    Ok(())
}

fn create_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    Ok(())
}

/// Determines where a scatter plot is written: `<output-dir>/<label>.png`.
///
/// The label defaults to the stem of the input file.
fn scatter_output_path(input_path: &Path, cli: &Cli) -> PathBuf {
    let label = cli.label.clone().unwrap_or_else(|| {
        input_path
            .file_stem()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    });
    cli.output_dir.join(format!("{label}.png"))
}
