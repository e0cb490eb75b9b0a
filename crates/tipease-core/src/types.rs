//! # Domain Types
//!
//! Value types shared by the split arithmetic and the presentation layer.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐                         │
//! │  │    TipRate      │   │   TipSelection      │                         │
//! │  │  ─────────────  │   │  ─────────────────  │                         │
//! │  │  bps (u32)      │   │  Preset(10|15|20)   │                         │
//! │  │  1500 = 15%     │   │  Custom             │                         │
//! │  └─────────────────┘   └─────────────────────┘                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::money::parse_fixed_point;
use crate::{DEFAULT_TIP_PERCENT, TIP_PRESETS};

// =============================================================================
// Tip Rate
// =============================================================================

/// Tip rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1500 bps = 15%, 1250 bps = 12.5%
///
/// A custom tip typed as `"12.5"` is held exactly; the product with a bill in
/// cents is then an exact integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TipRate(u32);

impl TipRate {
    /// Creates a tip rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TipRate(bps)
    }

    /// Creates a tip rate from a whole percentage.
    ///
    /// Percentages too large to hold in basis points saturate.
    #[inline]
    pub const fn from_percent(percent: u32) -> Self {
        TipRate(percent.saturating_mul(100))
    }

    /// Parses a percentage such as `"15"` or `"12.5"`.
    ///
    /// Digits beyond 0.01% round half away from zero. Negative, unparsable
    /// or out-of-range text yields `None`.
    ///
    /// ## Example
    /// ```rust
    /// use tipease_core::types::TipRate;
    ///
    /// assert_eq!(TipRate::parse_percentage("12.5"), Some(TipRate::from_bps(1250)));
    /// assert_eq!(TipRate::parse_percentage("-5"), None);
    /// ```
    pub fn parse_percentage(text: &str) -> Option<Self> {
        let bps = parse_fixed_point(text, 2)?;
        u32::try_from(bps).ok().map(TipRate)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Zero tip rate.
    #[inline]
    pub const fn zero() -> Self {
        TipRate(0)
    }

    /// Checks if tip rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TipRate {
    fn default() -> Self {
        TipRate::from_percent(DEFAULT_TIP_PERCENT)
    }
}

impl fmt::Display for TipRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 100 == 0 {
            write!(f, "{}%", self.0 / 100)
        } else {
            let text = format!("{}.{:02}", self.0 / 100, self.0 % 100);
            write!(f, "{}%", text.trim_end_matches('0'))
        }
    }
}

// =============================================================================
// Tip Selection
// =============================================================================

/// Which tip option the person picked.
///
/// The presets are the quick-pick buttons; `Custom` means the custom tip
/// text field is authoritative.
///
/// Serialized as its display text (`"15%"`, `"custom"`) and deserialized
/// through [`FromStr`], so stored forms are held to the same preset list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TipSelection {
    /// One of [`TIP_PRESETS`], as a whole percentage.
    Preset(u32),
    /// Use the custom tip text.
    Custom,
}

impl TipSelection {
    /// Returns true if this is the custom option.
    pub fn is_custom(&self) -> bool {
        matches!(self, TipSelection::Custom)
    }
}

impl Default for TipSelection {
    fn default() -> Self {
        TipSelection::Preset(DEFAULT_TIP_PERCENT)
    }
}

impl fmt::Display for TipSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TipSelection::Preset(percent) => write!(f, "{}%", percent),
            TipSelection::Custom => write!(f, "custom"),
        }
    }
}

impl From<TipSelection> for String {
    fn from(selection: TipSelection) -> Self {
        selection.to_string()
    }
}

impl TryFrom<String> for TipSelection {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for TipSelection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().trim_end_matches('%');
        if s.eq_ignore_ascii_case("custom") {
            return Ok(TipSelection::Custom);
        }
        match s.parse::<u32>() {
            Ok(percent) if TIP_PRESETS.contains(&percent) => Ok(TipSelection::Preset(percent)),
            _ => Err(ValidationError::NotAllowed {
                field: "tip".to_string(),
                allowed: TIP_PRESETS
                    .iter()
                    .map(|p| p.to_string())
                    .chain(std::iter::once("custom".to_string()))
                    .collect(),
            }),
        }
    }
}
