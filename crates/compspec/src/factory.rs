//! Variant factory
//!
//! Maps a variant tag plus three opaque strings to a concrete [`Computer`].
//! Dispatch is a single discriminated step with no shared state; the three
//! strings pass through construction unchanged.

use crate::error::FactoryError;
use crate::kind::ComputerKind;
use crate::spec::{Computer, HardwareProfile};

/// Construct the variant named by `tag`
///
/// The tag is matched case-sensitively against the canonical names
/// (`"PC"`, `"Server"`); the three field strings are stored as supplied.
///
/// # Errors
/// Returns [`FactoryError::UnrecognizedVariant`] when `tag` is outside the
/// closed set. An unmatched tag is never converted into an absent value.
pub fn construct(
    tag: &str,
    memory: impl Into<String>,
    storage: impl Into<String>,
    processor: impl Into<String>,
) -> Result<Computer, FactoryError> {
    let kind = tag.parse::<ComputerKind>()?;
    Ok(construct_kind(kind, memory, storage, processor))
}

/// Construct a variant from an already-resolved discriminator
///
/// Infallible: the enum makes the dispatch exhaustive, so there is no
/// fallthrough branch to reach.
#[must_use]
pub fn construct_kind(
    kind: ComputerKind,
    memory: impl Into<String>,
    storage: impl Into<String>,
    processor: impl Into<String>,
) -> Computer {
    let profile = HardwareProfile::new(memory, storage, processor);
    match kind {
        ComputerKind::Pc => Computer::Pc(profile),
        ComputerKind::Server => Computer::Server(profile),
    }
}
