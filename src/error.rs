use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to read input file: {}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid number '{token}' at position {position}")]
    InvalidNumber { token: String, position: usize },

    #[error("Invalid number '{token}' on line {line}")]
    InvalidNumberOnLine { token: String, line: usize },

    #[error("Line {line} has {found} value(s), expected two columns")]
    MissingColumn { line: usize, found: usize },

    #[error("Failed to encode image")]
    Image(#[from] image::ImageError),

    #[error("Chart rendering failed: {0}")]
    Render(String),

    #[error("Failed to serialize data to JSON")]
    JsonSerialization(#[from] serde_json::Error),

    #[error("Chart window failed: {0}")]
    Display(String),

    #[error("This build has no chart window; use --save or --html instead")]
    DisplayUnavailable,
}
