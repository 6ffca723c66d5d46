//! Box styles and the generator contract they share

use std::fmt;
use std::str::FromStr;

use boxy_core::{BoundingSize, PatternLayout};
use serde::{Deserialize, Serialize};

use crate::error::{PatternError, PatternResult};
use crate::folding_lid::{LockingShoeBoxParameters, ShoeBoxParameters};
use crate::triangular_prism::PrismParameters;

/// Contract implemented by every box style.
///
/// `bounding_size` must return exactly the size embedded in `generate`'s layout for the same
/// parameters.
pub trait DielineGenerator {
    fn style(&self) -> BoxStyle;

    fn generate(&self) -> PatternResult<PatternLayout>;

    fn bounding_size(&self) -> PatternResult<BoundingSize>;
}

/// The supported box families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoxStyle {
    FoldingLid,
    LockingFoldingLid,
    TriangularPrism,
}

impl BoxStyle {
    pub const ALL: [BoxStyle; 3] = [
        BoxStyle::FoldingLid,
        BoxStyle::LockingFoldingLid,
        BoxStyle::TriangularPrism,
    ];

    /// Identifier used on the command line and in parameter files
    pub fn key(&self) -> &'static str {
        match self {
            Self::FoldingLid => "folding-lid",
            Self::LockingFoldingLid => "locking-folding-lid",
            Self::TriangularPrism => "triangular-prism",
        }
    }

    /// Human readable name
    pub fn name(&self) -> &'static str {
        match self {
            Self::FoldingLid => "Single Piece Folding Lid",
            Self::LockingFoldingLid => "Locking Folding Lid",
            Self::TriangularPrism => "Triangular Prism Box",
        }
    }

    /// Default output file name, without extension
    pub fn file_prefix(&self) -> &'static str {
        match self {
            Self::FoldingLid => "single-piece-folding-lid",
            Self::LockingFoldingLid => "locking-folding-lid",
            Self::TriangularPrism => "triangular-prism",
        }
    }

    pub fn default_parameters(&self) -> BoxParameters {
        match self {
            Self::FoldingLid => BoxParameters::FoldingLid(ShoeBoxParameters::default()),
            Self::LockingFoldingLid => {
                BoxParameters::LockingFoldingLid(LockingShoeBoxParameters::default())
            }
            Self::TriangularPrism => BoxParameters::TriangularPrism(PrismParameters::default()),
        }
    }
}

impl fmt::Display for BoxStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BoxStyle {
    type Err = PatternError;

    /// Accepts the style key or the file prefix
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| style.key() == s || style.file_prefix() == s)
            .ok_or_else(|| {
                PatternError::invalid(
                    "style",
                    format!(
                        "unknown box style '{}' (expected one of: folding-lid, locking-folding-lid, triangular-prism)",
                        s
                    ),
                )
            })
    }
}

/// Parameters for any supported style, tagged with the style key when serialised
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "kebab-case")]
pub enum BoxParameters {
    FoldingLid(ShoeBoxParameters),
    LockingFoldingLid(LockingShoeBoxParameters),
    TriangularPrism(PrismParameters),
}

impl BoxParameters {
    /// Copy with every clamped field replaced by the value the generator uses.
    pub fn clamped(&self) -> Self {
        match self {
            Self::FoldingLid(p) => Self::FoldingLid(p.clamped()),
            Self::LockingFoldingLid(p) => Self::LockingFoldingLid(p.clamped()),
            Self::TriangularPrism(p) => Self::TriangularPrism(p.clamped()),
        }
    }

    fn generator(&self) -> &dyn DielineGenerator {
        match self {
            Self::FoldingLid(p) => p,
            Self::LockingFoldingLid(p) => p,
            Self::TriangularPrism(p) => p,
        }
    }
}

impl From<ShoeBoxParameters> for BoxParameters {
    fn from(p: ShoeBoxParameters) -> Self {
        Self::FoldingLid(p)
    }
}

impl From<LockingShoeBoxParameters> for BoxParameters {
    fn from(p: LockingShoeBoxParameters) -> Self {
        Self::LockingFoldingLid(p)
    }
}

impl From<PrismParameters> for BoxParameters {
    fn from(p: PrismParameters) -> Self {
        Self::TriangularPrism(p)
    }
}

impl DielineGenerator for BoxParameters {
    fn style(&self) -> BoxStyle {
        self.generator().style()
    }

    fn generate(&self) -> PatternResult<PatternLayout> {
        self.generator().generate()
    }

    fn bounding_size(&self) -> PatternResult<BoundingSize> {
        self.generator().bounding_size()
    }
}
