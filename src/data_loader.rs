use crate::error::AppError;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Reads the whole input file as text.
pub fn read_input(path: &Path) -> Result<String, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = text.len(), "read input file");
    Ok(text)
}

/// Parses whitespace-separated numbers into one sequence, in file order.
///
/// A comma is accepted as the decimal separator. Any token that is not a
/// number is an error; nothing is skipped.
pub fn parse_sequence(text: &str) -> Result<Vec<f64>, AppError> {
    let normalized = text.replace(',', ".");

    let values = normalized
        .split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token.parse::<f64>().map_err(|_| AppError::InvalidNumber {
                token: token.to_string(),
                position: i + 1,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(values = values.len(), "parsed single sequence");
    Ok(values)
}

/// Parses one `x y` pair per line into two parallel sequences.
///
/// Columns are separated by whitespace and a comma is accepted as the
/// decimal separator. Tokens after the second are ignored; a line with fewer
/// than two tokens (a blank line included) is an error.
pub fn parse_columns(text: &str) -> Result<(Vec<f64>, Vec<f64>), AppError> {
    let mut xs = Vec::new();
    let mut ys = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line_no = i + 1;
        let normalized = line.replace(',', ".");
        let tokens: Vec<&str> = normalized.split_whitespace().take(2).collect();

        let [x, y] = tokens[..] else {
            return Err(AppError::MissingColumn {
                line: line_no,
                found: tokens.len(),
            });
        };

        xs.push(parse_on_line(x, line_no)?);
        ys.push(parse_on_line(y, line_no)?);
    }

    debug!(rows = xs.len(), "parsed two columns");
    Ok((xs, ys))
}

fn parse_on_line(token: &str, line: usize) -> Result<f64, AppError> {
    token.parse::<f64>().map_err(|_| AppError::InvalidNumberOnLine {
        token: token.to_string(),
        line,
    })
}
