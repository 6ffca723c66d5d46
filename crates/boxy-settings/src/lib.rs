//! # Boxy Settings
//!
//! Application configuration plus loading, saving and overriding box parameter files.

pub mod config;
pub mod error;
pub mod format;
pub mod persistence;

pub use config::{Config, DisplaySettings, ExportSettings, MeasurementSystem};
pub use error::{SettingsError, SettingsResult};
pub use format::FileFormat;
pub use persistence::{
    apply_overrides, load_parameters, parameters_to_string, parse_override, save_parameters,
};
