//! Text file formats shared by configuration and parameter files

use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{SettingsError, SettingsResult};

/// Serialisation format chosen from a file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Json,
    Toml,
}

impl FileFormat {
    pub fn from_path(path: &Path) -> SettingsResult<Self> {
        if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
            Ok(Self::Json)
        } else if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("toml")) {
            Ok(Self::Toml)
        } else {
            Err(SettingsError::UnsupportedFormat(path.display().to_string()))
        }
    }

    pub fn from_name(name: &str) -> SettingsResult<Self> {
        match name.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(SettingsError::UnsupportedFormat(name.to_string())),
        }
    }

    pub fn parse<T: DeserializeOwned>(&self, content: &str) -> SettingsResult<T> {
        Ok(match self {
            Self::Json => serde_json::from_str(content)?,
            Self::Toml => toml::from_str(content)?,
        })
    }

    pub fn to_string<T: Serialize>(&self, value: &T) -> SettingsResult<String> {
        Ok(match self {
            Self::Json => serde_json::to_string_pretty(value)?,
            Self::Toml => toml::to_string_pretty(value)?,
        })
    }
}

/// Read and parse a `.json` or `.toml` file.
pub fn read_file<T: DeserializeOwned>(path: &Path) -> SettingsResult<T> {
    let format = FileFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;
    format.parse(&content)
}

/// Serialise and write a `.json` or `.toml` file.
pub fn write_file<T: Serialize>(value: &T, path: &Path) -> SettingsResult<()> {
    let format = FileFormat::from_path(path)?;
    std::fs::write(path, format.to_string(value)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(
            FileFormat::from_path(Path::new("a/b.json")).unwrap(),
            FileFormat::Json
        );
        assert_eq!(
            FileFormat::from_path(Path::new("box.TOML")).unwrap(),
            FileFormat::Toml
        );
        assert!(matches!(
            FileFormat::from_path(Path::new("box.yaml")),
            Err(SettingsError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(FileFormat::from_name("JSON").unwrap(), FileFormat::Json);
        assert!(FileFormat::from_name("ini").is_err());
    }
}
