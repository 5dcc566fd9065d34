//! Specification data model
//!
//! - [`HardwareProfile`]: the three read-only descriptive fields
//! - [`Computer`]: tagged union of structurally identical variants
//!
//! Field values are opaque display strings ("2 GB", "2.4 GHz"); nothing here
//! parses, validates, or normalizes them.

use serde::{Deserialize, Serialize};

use crate::kind::ComputerKind;

/// Immutable hardware description
///
/// Fields are private with read accessors only: once constructed, no exposed
/// operation can alter the record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HardwareProfile {
    memory: String,
    storage: String,
    processor: String,
}

impl HardwareProfile {
    /// Create a profile from three opaque display strings
    ///
    /// The strings are stored unchanged.
    #[inline]
    #[must_use]
    pub fn new(
        memory: impl Into<String>,
        storage: impl Into<String>,
        processor: impl Into<String>,
    ) -> Self {
        Self {
            memory: memory.into(),
            storage: storage.into(),
            processor: processor.into(),
        }
    }

    /// Memory size label
    #[inline]
    #[must_use]
    pub fn memory(&self) -> &str {
        &self.memory
    }

    /// Storage size label
    #[inline]
    #[must_use]
    pub fn storage(&self) -> &str {
        &self.storage
    }

    /// Processor speed label
    #[inline]
    #[must_use]
    pub fn processor(&self) -> &str {
        &self.processor
    }
}

/// A constructed computer specification
///
/// Variants carry identical payloads and differ only by tag. Equality is
/// field-wise; every construction yields an independently owned value (no
/// identity caching).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Computer {
    /// Desktop PC specification
    #[serde(rename = "PC")]
    Pc(HardwareProfile),
    /// Server specification
    #[serde(rename = "Server")]
    Server(HardwareProfile),
}

impl Computer {
    /// Discriminator of this specification
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ComputerKind {
        match self {
            Self::Pc(_) => ComputerKind::Pc,
            Self::Server(_) => ComputerKind::Server,
        }
    }

    /// The underlying hardware record
    #[inline]
    #[must_use]
    pub fn profile(&self) -> &HardwareProfile {
        match self {
            Self::Pc(profile) | Self::Server(profile) => profile,
        }
    }

    /// Memory size label
    #[inline]
    #[must_use]
    pub fn memory(&self) -> &str {
        self.profile().memory()
    }

    /// Storage size label
    #[inline]
    #[must_use]
    pub fn storage(&self) -> &str {
        self.profile().storage()
    }

    /// Processor speed label
    #[inline]
    #[must_use]
    pub fn processor(&self) -> &str {
        self.profile().processor()
    }
}

impl std::fmt::Display for Computer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (memory = {}, storage = {}, processor = {})",
            self.kind(),
            self.memory(),
            self.storage(),
            self.processor()
        )
    }
}
