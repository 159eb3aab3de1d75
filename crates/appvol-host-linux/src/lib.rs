//! Linux host adapter for appvol
//!
//! An intentional stub: no PulseAudio/PipeWire integration is wired up, so
//! every operation returns its fixed default regardless of input. Master
//! volume reads as unavailable, session volume reads 0.0 and unmuted, and
//! all setters discard their (clamped) input.

use appvol_api::{
    clamp_fraction, MasterVolume, ProcessVolume, VolumeCapabilities, VolumeResult,
};
use appvol_core::current_process_id;
use tracing::warn;

/// Capabilities of the stub adapter: nothing is controllable
pub fn capabilities() -> VolumeCapabilities {
    VolumeCapabilities {
        master: false,
        per_process: false,
        backend: None,
    }
}

/// Master volume accessor with no backend
pub struct LinuxMasterVolume;

impl LinuxMasterVolume {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LinuxMasterVolume {
    fn default() -> Self {
        Self::new()
    }
}

impl MasterVolume for LinuxMasterVolume {
    fn volume(&self) -> Option<f64> {
        None
    }

    fn set_volume(&self, level: f64) -> VolumeResult<()> {
        let _ = clamp_fraction(level);
        Ok(())
    }
}

/// Per-process volume wrapper with no backend
pub struct LinuxProcessVolume {
    pid: u32,
}

impl LinuxProcessVolume {
    /// Bind to `pid`, or to the calling process when `None`
    pub fn new(pid: Option<u32>) -> Self {
        warn!("Per-process volume control is not implemented on this platform");
        Self {
            pid: pid.unwrap_or_else(current_process_id),
        }
    }
}

impl ProcessVolume for LinuxProcessVolume {
    fn process_id(&self) -> u32 {
        self.pid
    }

    fn volume(&self) -> f32 {
        0.0
    }

    fn set_volume(&self, level: f32) {
        let _ = clamp_fraction(f64::from(level));
    }

    fn muted(&self) -> bool {
        false
    }

    fn set_muted(&self, _muted: bool) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_is_unavailable() {
        let master = LinuxMasterVolume::new();
        assert_eq!(master.volume(), None);
        // Setting is a silent no-op, not an error
        master.set_volume(0.5).unwrap();
        assert_eq!(master.volume(), None);
    }

    #[test]
    fn session_returns_fixed_defaults() {
        let app = LinuxProcessVolume::new(Some(1234));

        app.set_volume(0.5);
        app.set_muted(true);

        assert_eq!(app.process_id(), 1234);
        assert_eq!(app.volume(), 0.0);
        assert!(!app.muted());
    }

    #[test]
    fn defaults_to_current_process() {
        let app = LinuxProcessVolume::new(None);
        assert_eq!(app.process_id(), current_process_id());
    }

    #[test]
    fn capabilities_report_nothing() {
        let caps = capabilities();
        assert!(!caps.master);
        assert!(!caps.per_process);
        assert!(caps.backend.is_none());
    }
}
