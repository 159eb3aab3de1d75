//! Platform-neutral session locator logic for appvol
//!
//! Provides:
//! - Process table snapshots (pid -> parent pid)
//! - Sibling-set computation for a target process
//! - First-match selection over an audio session list
//!
//! The platform adapters feed this with OS data; nothing here touches the
//! audio subsystem directly.

mod locator;
mod table;

pub use locator::*;
pub use table::*;
