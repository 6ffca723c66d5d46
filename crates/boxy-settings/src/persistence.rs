//! Box parameter files and command-line overrides
//!
//! Parameter files hold one [`BoxParameters`] record tagged with its `style`. Fields left out
//! take the style defaults. A file without a tag is accepted when the caller says which style
//! it is for.

use std::path::Path;

use boxy_dielines::{BoxParameters, BoxStyle, DielineGenerator, PatternError};
use serde_json::Value;
use tracing::debug;

use crate::error::{SettingsError, SettingsResult};
use crate::format::{read_file, write_file, FileFormat};

const STYLE_KEY: &str = "style";

/// Build parameters from a parsed document, filling in or checking the style tag.
fn from_document(document: Value, style: Option<BoxStyle>) -> SettingsResult<BoxParameters> {
    let Value::Object(mut object) = document else {
        return Err(SettingsError::invalid(
            "parameters",
            "expected a table of parameter values",
        ));
    };

    let tagged = object
        .get(STYLE_KEY)
        .map(|v| {
            v.as_str()
                .ok_or_else(|| SettingsError::invalid(STYLE_KEY, "must be a string"))?
                .parse::<BoxStyle>()
                .map_err(|e: PatternError| SettingsError::invalid(STYLE_KEY, e.to_string()))
        })
        .transpose()?;

    let resolved = match (tagged, style) {
        (Some(found), Some(expected)) if found != expected => {
            return Err(SettingsError::StyleMismatch {
                expected: expected.key().to_string(),
                found: found.key().to_string(),
            });
        }
        (found, expected) => found.or(expected).ok_or_else(|| {
            SettingsError::invalid(STYLE_KEY, "parameter file does not name a box style")
        })?,
    };
    object.insert(STYLE_KEY.into(), Value::from(resolved.key()));

    Ok(serde_json::from_value(Value::Object(object))?)
}

/// Load a parameter file. `style`, when given, must match the file's tag.
pub fn load_parameters(path: &Path, style: Option<BoxStyle>) -> SettingsResult<BoxParameters> {
    let document: Value = read_file(path)?;
    let params = from_document(document, style)?;
    debug!("Loaded {} parameters from {}", params.style(), path.display());
    Ok(params)
}

/// Save parameters as JSON or TOML, by extension.
pub fn save_parameters(params: &BoxParameters, path: &Path) -> SettingsResult<()> {
    write_file(params, path)
}

/// Parameters rendered as a document, for `boxy defaults`
pub fn parameters_to_string(params: &BoxParameters, format: FileFormat) -> SettingsResult<String> {
    format.to_string(params)
}

/// Split a `key=value` override.
pub fn parse_override(text: &str) -> SettingsResult<(String, String)> {
    let (key, value) = text
        .split_once('=')
        .ok_or_else(|| SettingsError::invalid(text, "expected key=value"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(SettingsError::invalid(text, "missing key before '='"));
    }
    Ok((key.to_string(), value.trim().to_string()))
}

/// Value text as a JSON scalar: numbers and booleans keep their type, anything else is a string.
fn scalar(text: &str) -> Value {
    match serde_json::from_str::<Value>(text) {
        Ok(v @ (Value::Number(_) | Value::Bool(_) | Value::String(_))) => v,
        _ => Value::from(text),
    }
}

/// Apply `key=value` overrides on top of `params`, one at a time so a bad value names its key.
pub fn apply_overrides(
    params: &BoxParameters,
    overrides: &[(String, String)],
) -> SettingsResult<BoxParameters> {
    let style = params.style();
    let mut current = *params;
    for (key, text) in overrides {
        let Value::Object(mut object) = serde_json::to_value(current)? else {
            return Err(SettingsError::invalid(key, "parameters are not a table"));
        };
        if key == STYLE_KEY || !object.contains_key(key) {
            return Err(SettingsError::UnknownParameter {
                key: key.clone(),
                style: style.key().to_string(),
            });
        }
        object.insert(key.clone(), scalar(text));
        current = serde_json::from_value(Value::Object(object))
            .map_err(|e| SettingsError::invalid(key, e.to_string()))?;
        debug!("Override {} = {}", key, text);
    }
    Ok(current)
}
