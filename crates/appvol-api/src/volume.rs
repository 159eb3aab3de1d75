//! Shared volume types
//!
//! Error taxonomy, status/capability types, and fraction clamping shared by
//! every platform adapter.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from volume control operations
#[derive(Debug, Error)]
pub enum VolumeError {
    #[error("Volume control not available: {0}")]
    NotAvailable(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

pub type VolumeResult<T> = Result<T, VolumeError>;

/// Clamp a volume fraction to [0.0, 1.0]
///
/// NaN maps to 0.0 so a garbage level can never be handed to an OS call.
pub fn clamp_fraction(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Per-process volume status
///
/// Defaults match an unresolved session: full volume, not muted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VolumeStatus {
    /// Volume fraction in [0.0, 1.0]
    pub level: f32,
    /// Whether the session is muted
    pub muted: bool,
}

impl Default for VolumeStatus {
    fn default() -> Self {
        Self {
            level: 1.0,
            muted: false,
        }
    }
}

/// Volume capabilities of a platform adapter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VolumeCapabilities {
    /// Whether legacy master volume control is available
    pub master: bool,
    /// Whether per-process session control is available
    pub per_process: bool,
    /// The backing audio subsystem (e.g., "wasapi"), if any
    pub backend: Option<String>,
}
