//! Unified error types for the chart writer.
//!
//! Every fallible operation in the crate, from adding a series to assembling
//! the package parts at close time, reports through this single error type.
use thiserror::Error;

/// Main error type for chart and workbook operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while emitting a part
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The requested feature is not available for this chart or axis
    #[error("Feature not supported: {0}")]
    FeatureNotSupported(String),

    /// A required string argument was empty
    #[error("Parameter '{0}' must not be an empty string")]
    EmptyString(&'static str),

    /// A chart, series, or sheet handle does not refer to a live object
    #[error("Invalid handle: {0}")]
    InvalidHandle(String),

    /// A cell reference such as "E9" could not be parsed
    #[error("Invalid cell reference: {0}")]
    InvalidCellReference(String),

    /// Sheet name breaks Excel's naming rules
    #[error("Invalid sheet name '{name}': {reason}")]
    InvalidSheetName { name: String, reason: &'static str },

    /// Sheet name is already used in the workbook
    #[error("Sheet name '{0}' is already in use")]
    DuplicateSheetName(String),

    /// A chart can be embedded in exactly one place
    #[error("Chart {0} has already been inserted into a sheet")]
    ChartAlreadyPlaced(usize),

    /// Generated XML was not valid UTF-8
    #[error("XML error: {0}")]
    Xml(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for chart and workbook operations.
pub type Result<T> = std::result::Result<T, Error>;
