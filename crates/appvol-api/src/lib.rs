//! Volume controller trait interfaces for appvol
//!
//! This crate defines the interface between the host-facing surface and
//! platform-specific adapters. It contains no platform code itself.

mod mock;
mod traits;
mod volume;

pub use mock::*;
pub use traits::*;
pub use volume::*;
