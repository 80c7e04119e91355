//! Error types for diagram generation.
//!
//! Every failure mode of the pipeline is an enumerable variant so callers
//! can match on the kind instead of the message text. Errors are raised at
//! the point of detection and carried to the CLI boundary with `?`.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading leg data or rendering a diagram.
#[derive(Error, Debug)]
pub enum DiagramError {
    /// The input table could not be located.
    #[error("Input table not found: {0}")]
    MissingSource(PathBuf),

    /// The spreadsheet could not be opened or read.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    /// Required numeric columns are entirely empty or non-numeric.
    #[error("Schema error: {0}")]
    Schema(String),

    /// No rows exist for the requested tower type.
    #[error("No rows found for tower type '{tower}'")]
    TowerNotFound {
        /// The tower type that was requested.
        tower: String,
    },

    /// No square side value exists among the tower's rows.
    #[error("No square side value found for tower '{tower}'")]
    MissingSide {
        /// The tower type that was requested.
        tower: String,
    },

    /// No leg was selected; there is nothing to draw.
    #[error("No leg selected; nothing to draw")]
    NoSelection,

    /// A geometric quantity is missing or out of range.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The drawing document could not be produced.
    #[error("DXF error: {0}")]
    Dxf(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for diagram operations.
pub type Result<T> = std::result::Result<T, DiagramError>;
