//! Error types for pattern export

use thiserror::Error;

/// Errors that can occur while writing a pattern to disk.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Writing the output file failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The DXF writer rejected the drawing
    #[error("DXF error: {0}")]
    Dxf(#[from] dxf::DxfError),

    /// Rasterising or encoding the PNG failed
    #[error("PNG error: {0}")]
    Png(String),

    /// The requested format name or file extension is not supported
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// An export option is outside its usable range
    #[error("Invalid export option '{name}': {reason}")]
    InvalidOption { name: String, reason: String },
}

impl ExportError {
    pub fn invalid_option(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
