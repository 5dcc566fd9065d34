//! Variant discriminator
//!
//! Defines [`ComputerKind`], the closed set of variants the factory can
//! construct. Using an enum instead of raw tag strings makes every dispatch
//! site exhaustiveness-checked; only the boundary parse in [`FromStr`] deals
//! with unrecognized input.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FactoryError;

/// Closed set of computer variants
///
/// The set is fixed at compile time and not extensible at runtime.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum ComputerKind {
    /// Desktop PC variant
    #[serde(rename = "PC")]
    Pc,
    /// Server variant
    #[serde(rename = "Server")]
    Server,
}

impl ComputerKind {
    /// Every recognized variant, in canonical order
    pub const ALL: [Self; 2] = [Self::Pc, Self::Server];

    /// Canonical tag name (`"PC"` / `"Server"`)
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pc => "PC",
            Self::Server => "Server",
        }
    }
}

impl std::fmt::Display for ComputerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComputerKind {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Tags are case-sensitive: "pc" is not a recognized variant.
        match s {
            "PC" => Ok(Self::Pc),
            "Server" => Ok(Self::Server),
            other => Err(FactoryError::UnrecognizedVariant {
                tag: other.to_string(),
            }),
        }
    }
}
