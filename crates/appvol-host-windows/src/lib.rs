//! Windows host adapter for appvol
//!
//! Provides:
//! - Legacy master volume via waveOut
//! - Per-process session volume/mute via Core Audio (WASAPI), resolved
//!   through the sibling-set locator in appvol-core
//!
//! The whole crate is a no-op on other targets.

#[cfg(windows)]
mod com;
#[cfg(windows)]
mod master;
#[cfg(windows)]
mod session;

#[cfg(windows)]
pub use com::*;
#[cfg(windows)]
pub use master::*;
#[cfg(windows)]
pub use session::*;

/// Capabilities of the Windows adapter
#[cfg(windows)]
pub fn capabilities() -> appvol_api::VolumeCapabilities {
    appvol_api::VolumeCapabilities {
        master: true,
        per_process: true,
        backend: Some("wasapi".to_string()),
    }
}
