//! Volume controller traits
//!
//! Both traits are synchronous: every operation is one blocking OS call with
//! no background work, so there is nothing to await.

use crate::{VolumeResult, VolumeStatus};

/// Legacy master output volume - system-wide, not per-application
pub trait MasterVolume {
    /// Current master volume as a fraction in [0.0, 1.0]
    ///
    /// `None` where the platform has no master volume control or the
    /// underlying query fails.
    fn volume(&self) -> Option<f64>;

    /// Set master volume, clamping the level to [0.0, 1.0] first
    fn set_volume(&self, level: f64) -> VolumeResult<()>;
}

/// Per-process session volume control
///
/// Implementations resolve the backing audio session lazily on first access
/// and cache the result; resolution is attempted at most once. When no
/// session can be resolved, every operation degrades to a safe default
/// instead of failing, so a wrapper bound to a not-yet-started process is
/// harmless to use.
pub trait ProcessVolume {
    /// The process id this wrapper is bound to
    fn process_id(&self) -> u32;

    /// Session volume fraction in [0.0, 1.0]; 1.0 if unresolved
    fn volume(&self) -> f32;

    /// Set session volume, clamping to [0.0, 1.0]; no-op if unresolved
    fn set_volume(&self, level: f32);

    /// Whether the session is muted; false if unresolved
    fn muted(&self) -> bool;

    /// Set the session mute flag; no-op if unresolved
    fn set_muted(&self, muted: bool);

    /// Combined volume/mute snapshot
    fn status(&self) -> VolumeStatus {
        VolumeStatus {
            level: self.volume(),
            muted: self.muted(),
        }
    }
}
