use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "A tool to plot the numbers in a text file as a line or scatter chart."
)]
pub struct Cli {
    /// The data file to plot.
    /// Prompted for on stdin when omitted.
    pub input_path: Option<PathBuf>,

    /// Name of the scatter image, saved as `<output-dir>/<LABEL>.png`.
    /// Defaults to the input file stem.
    #[arg(requires = "scatter")]
    pub label: Option<String>,

    /// Read two columns per line and draw a scatter plot instead of a line plot.
    #[arg(short, long, default_value_t = false)]
    pub scatter: bool,

    /// Directory to save scatter plots in.
    #[arg(short, long, default_value = "pics")]
    pub output_dir: PathBuf,

    /// Write the line plot to this PNG file instead of opening a window.
    #[arg(long, conflicts_with = "scatter")]
    pub save: Option<PathBuf>,

    /// Also write an interactive HTML chart to this file.
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// A custom title for the plot.
    /// Defaults to the input filename.
    #[arg(long)]
    pub title: Option<String>,

    /// Width of the image (and initial window) in pixels.
    #[arg(long, default_value_t = 1024, value_parser = pixel_size())]
    pub width: u32,

    /// Height of the image (and initial window) in pixels.
    #[arg(long, default_value_t = 768, value_parser = pixel_size())]
    pub height: u32,

    /// Print debug info about parsing and rendering
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

fn pixel_size() -> clap::builder::RangedI64ValueParser<u32> {
    clap::value_parser!(u32).range(16..=16384)
}

/// Asks for the input path on `output` and reads one line from `input`.
///
/// Returns `None` when the answer is empty or the input is already closed.
pub fn prompt_for_path<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> io::Result<Option<PathBuf>> {
    write!(output, "Enter file path: ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim_end_matches(['\r', '\n']);

    if answer.is_empty() {
        Ok(None)
    } else {
        Ok(Some(PathBuf::from(answer)))
    }
}
