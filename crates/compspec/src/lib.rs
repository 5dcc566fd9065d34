//! Compspec
//!
//! Closed-variant computer specification construction.
//!
//! # Core Concepts
//!
//! - [`ComputerKind`]: the closed discriminator set (`PC`, `Server`)
//! - [`HardwareProfile`]: immutable memory/storage/processor record
//! - [`Computer`]: tagged union over [`HardwareProfile`], one variant per kind
//! - [`construct`]: tag-keyed factory operation
//!
//! # Example
//!
//! ```
//! use compspec::{construct, ComputerKind};
//!
//! let pc = construct("PC", "2 GB", "500 GB", "2.4 GHz")?;
//! assert_eq!(pc.kind(), ComputerKind::Pc);
//! assert_eq!(pc.memory(), "2 GB");
//! # Ok::<(), compspec::FactoryError>(())
//! ```

#![warn(unreachable_pub)]

mod error;
mod factory;
mod kind;
mod spec;

pub use error::FactoryError;
pub use factory::{construct, construct_kind};
pub use kind::ComputerKind;
pub use spec::{Computer, HardwareProfile};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
