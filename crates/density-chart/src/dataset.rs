// File: crates/density-chart/src/dataset.rs
// Summary: Two-column density/generation table: strict parser and file loader.
//
// Layout: one header line (ignored), then `<density> <generation>` per line,
// whitespace separated. Density may use `,` as the decimal separator.

use std::num::{ParseFloatError, ParseIntError};
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("input is empty, expected a header line")]
    MissingHeader,
    #[error("line {line}: missing {field} column")]
    MissingField { line: usize, field: &'static str },
    #[error("line {line}: invalid density {token:?}")]
    InvalidDensity {
        line: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("line {line}: invalid generation {token:?}")]
    InvalidGeneration {
        line: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Parallel density/generation columns. Rows are only ever appended as pairs,
/// so both columns always have the same length and index `i` is input line `i + 2`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    density: Vec<f64>,
    generation: Vec<i64>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, density: f64, generation: i64) {
        self.density.push(density);
        self.generation.push(generation);
    }

    pub fn density(&self) -> &[f64] {
        &self.density
    }

    pub fn generation(&self) -> &[i64] {
        &self.generation
    }

    pub fn len(&self) -> usize {
        self.density.len()
    }

    pub fn is_empty(&self) -> bool {
        self.density.is_empty()
    }

    /// `(density, generation)` pairs in input order, ready to plot.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.density
            .iter()
            .zip(&self.generation)
            .map(|(&d, &g)| (d, g as f64))
            .collect()
    }
}

/// Parse a density token, accepting `,` as the decimal separator.
pub fn parse_density(token: &str) -> Result<f64, ParseFloatError> {
    token.replace(',', ".").parse::<f64>()
}

/// Parse the whole file contents. Any malformed row fails the parse.
pub fn parse_str(text: &str) -> Result<Dataset, ParseError> {
    let mut lines = text.lines();
    if lines.next().is_none() {
        return Err(ParseError::MissingHeader);
    }

    let mut data = Dataset::new();
    for (idx, raw) in lines.enumerate() {
        let (density, generation) = parse_row(raw, idx + 2)?;
        data.push(density, generation);
    }
    Ok(data)
}

fn parse_row(raw: &str, line: usize) -> Result<(f64, i64), ParseError> {
    let mut tokens = raw.split_whitespace();

    let token = tokens.next().ok_or(ParseError::MissingField { line, field: "density" })?;
    let density = parse_density(token).map_err(|source| ParseError::InvalidDensity {
        line,
        token: token.to_string(),
        source,
    })?;

    let token = tokens.next().ok_or(ParseError::MissingField { line, field: "generation" })?;
    let generation = token.parse::<i64>().map_err(|source| ParseError::InvalidGeneration {
        line,
        token: token.to_string(),
        source,
    })?;

    Ok((density, generation))
}

/// Read and parse `path`. The file is read in one call and closed before parsing.
pub fn load(path: &Path) -> Result<Dataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_str(&text)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_and_period_decimals() {
        assert_eq!(parse_density("0,75"), Ok(0.75));
        assert_eq!(parse_density("0.75"), Ok(0.75));
        assert_eq!(parse_density("1"), Ok(1.0));
        assert!(parse_density("0,7,5").is_err());
        assert!(parse_density("abc").is_err());
    }

    #[test]
    fn density_is_checked_before_generation() {
        let err = parse_row("abc", 2).unwrap_err();
        assert!(matches!(err, ParseError::InvalidDensity { line: 2, .. }));
    }

    #[test]
    fn points_pair_columns_by_index() {
        let mut d = Dataset::new();
        d.push(0.5, 3);
        d.push(0.25, 9);
        assert_eq!(d.points(), vec![(0.5, 3.0), (0.25, 9.0)]);
        assert_eq!(d.len(), 2);
    }
}
