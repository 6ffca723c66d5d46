//! Unit conversion utilities
//!
//! Pattern geometry is always in millimetres. These helpers format and parse lengths for
//! people who think in inches, including fractional inch input like `5 1/8`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::UnitError;

/// Millimetres per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Measurement system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementSystem {
    /// Metric system (mm)
    #[default]
    Metric,
    /// Imperial system (inches)
    Imperial,
}

impl fmt::Display for MeasurementSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Metric => write!(f, "Metric"),
            Self::Imperial => write!(f, "Imperial"),
        }
    }
}

impl FromStr for MeasurementSystem {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "mm" => Ok(Self::Metric),
            "imperial" | "inch" | "in" => Ok(Self::Imperial),
            _ => Err(UnitError::UnknownSystem(s.to_string())),
        }
    }
}

/// Format a length for display, without the unit label
///
/// * `value_mm` - Value in millimetres
/// * `system` - Target measurement system
pub fn format_length(value_mm: f64, system: MeasurementSystem) -> String {
    match system {
        MeasurementSystem::Metric => format!("{:.3}", value_mm),
        MeasurementSystem::Imperial => format!("{:.3}", value_mm / MM_PER_INCH),
    }
}

/// Parse a length string to millimetres
///
/// Empty input parses as zero. Imperial input may mix whole and fractional parts.
pub fn parse_length(input: &str, system: MeasurementSystem) -> Result<f64, UnitError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    let invalid = || UnitError::InvalidNumber {
        input: input.to_string(),
    };

    match system {
        MeasurementSystem::Metric => input.parse::<f64>().map_err(|_| invalid()),
        MeasurementSystem::Imperial => {
            if !input.contains('/') {
                let inches = input.parse::<f64>().map_err(|_| invalid())?;
                return Ok(inches * MM_PER_INCH);
            }

            let mut total_inches = 0.0;
            let mut negative = false;
            for part in input.split_whitespace() {
                if let Some((num, den)) = part.split_once('/') {
                    if den.contains('/') {
                        return Err(UnitError::InvalidFraction {
                            input: input.to_string(),
                        });
                    }
                    let num = num.parse::<f64>().map_err(|_| UnitError::InvalidFraction {
                        input: input.to_string(),
                    })?;
                    let den = den.parse::<f64>().map_err(|_| UnitError::InvalidFraction {
                        input: input.to_string(),
                    })?;
                    if den == 0.0 {
                        return Err(UnitError::DivisionByZero {
                            input: input.to_string(),
                        });
                    }
                    total_inches += num.abs() / den;
                    negative |= num.is_sign_negative();
                } else {
                    let whole = part.parse::<f64>().map_err(|_| invalid())?;
                    total_inches += whole.abs();
                    negative |= whole.is_sign_negative();
                }
            }

            let sign = if negative { -1.0 } else { 1.0 };
            Ok(sign * total_inches * MM_PER_INCH)
        }
    }
}

/// Unit label for the given system ("mm" or "in")
pub fn unit_label(system: MeasurementSystem) -> &'static str {
    match system {
        MeasurementSystem::Metric => "mm",
        MeasurementSystem::Imperial => "in",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_metric_conversion() {
        assert_eq!(format_length(10.5, MeasurementSystem::Metric), "10.500");
        assert_eq!(parse_length("10.5", MeasurementSystem::Metric).unwrap(), 10.5);
    }

    #[test]
    fn test_imperial_decimal() {
        assert_eq!(format_length(25.4, MeasurementSystem::Imperial), "1.000");
        assert!(approx(parse_length("1", MeasurementSystem::Imperial).unwrap(), 25.4));
        assert_eq!(format_length(12.7, MeasurementSystem::Imperial), "0.500");
    }

    #[test]
    fn test_imperial_fraction() {
        assert!(approx(
            parse_length("1 1/2", MeasurementSystem::Imperial).unwrap(),
            38.1
        ));
        assert!(approx(
            parse_length("5 1/8", MeasurementSystem::Imperial).unwrap(),
            130.175
        ));
        assert!(approx(
            parse_length("1/4", MeasurementSystem::Imperial).unwrap(),
            6.35
        ));
        assert!(approx(
            parse_length("-1 1/2", MeasurementSystem::Imperial).unwrap(),
            -38.1
        ));
    }

    #[test]
    fn test_unit_labels() {
        assert_eq!(unit_label(MeasurementSystem::Metric), "mm");
        assert_eq!(unit_label(MeasurementSystem::Imperial), "in");
    }

    #[test]
    fn test_system_from_str() {
        assert_eq!("mm".parse::<MeasurementSystem>().unwrap(), MeasurementSystem::Metric);
        assert_eq!("IN".parse::<MeasurementSystem>().unwrap(), MeasurementSystem::Imperial);
        assert!(matches!(
            "cubit".parse::<MeasurementSystem>(),
            Err(UnitError::UnknownSystem(_))
        ));
    }

    #[test]
    fn test_zero_and_whitespace() {
        assert_eq!(parse_length("", MeasurementSystem::Metric).unwrap(), 0.0);
        assert_eq!(parse_length("  10.5  ", MeasurementSystem::Metric).unwrap(), 10.5);
        assert!(approx(
            parse_length("  1  1/2  ", MeasurementSystem::Imperial).unwrap(),
            38.1
        ));
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(matches!(
            parse_length("abc", MeasurementSystem::Metric),
            Err(UnitError::InvalidNumber { .. })
        ));
        assert!(matches!(
            parse_length("1/0", MeasurementSystem::Imperial),
            Err(UnitError::DivisionByZero { .. })
        ));
        assert!(matches!(
            parse_length("1/2/3", MeasurementSystem::Imperial),
            Err(UnitError::InvalidFraction { .. })
        ));
    }
}
