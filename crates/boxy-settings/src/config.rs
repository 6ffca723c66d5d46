//! Configuration for Boxy
//!
//! Supports JSON and TOML files, chosen by extension. Every field has a default, so a partial
//! file only overrides what it names, and a missing default file simply yields the defaults.
//!
//! Sections:
//! - Export defaults (format, raster density, SVG scale, arc tolerance, output directory)
//! - Display preferences (measurement system for reported sizes)

use std::path::{Path, PathBuf};

pub use boxy_core::units::MeasurementSystem;
use boxy_export::{ExportFormat, ExportOptions};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{SettingsError, SettingsResult};
use crate::format::{read_file, write_file};

/// Directory name under the platform config directory
pub const APP_DIR: &str = "boxy";
pub const CONFIG_FILE: &str = "config.toml";

/// Export defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Used when neither `--format` nor an output extension decides
    pub default_format: ExportFormat,
    pub png_dpi: f64,
    pub svg_scale: f64,
    /// Arc flattening tolerance for DXF output, in mm
    pub arc_tolerance: f64,
    pub output_dir: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        let options = ExportOptions::default();
        Self {
            default_format: ExportFormat::Svg,
            png_dpi: options.png_dpi,
            svg_scale: options.svg_scale,
            arc_tolerance: options.arc_tolerance,
            output_dir: PathBuf::from("."),
        }
    }
}

/// Display preferences
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    pub measurement_system: MeasurementSystem,
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub export: ExportSettings,
    pub display: DisplaySettings,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Platform config location, e.g. `~/.config/boxy/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let dir = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| SettingsError::ConfigDirectory("no config or home directory".into()))?;
        Ok(dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let config: Self = read_file(path)?;
        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path`, or the default location when `None`.
    ///
    /// An explicit path must exist; a missing default file yields the defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from_file(&path)
        } else {
            info!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML), creating parent directories.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        write_file(self, path)?;
        info!("Saved config to {}", path.display());
        Ok(())
    }

    pub fn validate(&self) -> SettingsResult<()> {
        for (key, value) in [
            ("export.png_dpi", self.export.png_dpi),
            ("export.svg_scale", self.export.svg_scale),
            ("export.arc_tolerance", self.export.arc_tolerance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::invalid(
                    key,
                    format!("must be > 0, got {}", value),
                ));
            }
        }
        Ok(())
    }

    /// Writer options for `boxy-export`
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            svg_scale: self.export.svg_scale,
            png_dpi: self.export.png_dpi,
            arc_tolerance: self.export.arc_tolerance,
        }
    }
}
