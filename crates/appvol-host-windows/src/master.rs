//! Legacy master volume via waveOut
//!
//! System-wide output volume, not per-application. The level is scaled
//! across the full 32-bit volume word, matching the historical behavior of
//! this control.

use appvol_api::{clamp_fraction, MasterVolume, VolumeError, VolumeResult};
use tracing::debug;
use windows::Win32::Media::Audio::{waveOutGetVolume, waveOutSetVolume, HWAVEOUT, MMSYSERR_NOERROR};

const FULL_SCALE: f64 = u32::MAX as f64;

/// Master volume accessor backed by the waveOut API
///
/// Stateless; every call is one OS call against the default output device.
pub struct WindowsMasterVolume;

impl WindowsMasterVolume {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsMasterVolume {
    fn default() -> Self {
        Self::new()
    }
}

impl MasterVolume for WindowsMasterVolume {
    fn volume(&self) -> Option<f64> {
        let mut raw: u32 = 0;

        let rc = unsafe { waveOutGetVolume(HWAVEOUT::default(), &mut raw) };
        if rc != MMSYSERR_NOERROR {
            debug!(code = rc, "waveOutGetVolume failed");
            return None;
        }

        Some(f64::from(raw) / FULL_SCALE)
    }

    fn set_volume(&self, level: f64) -> VolumeResult<()> {
        let raw = (clamp_fraction(level) * FULL_SCALE) as u32;

        let rc = unsafe { waveOutSetVolume(HWAVEOUT::default(), raw) };
        if rc != MMSYSERR_NOERROR {
            return Err(VolumeError::Backend(format!(
                "waveOutSetVolume failed with code {rc}"
            )));
        }

        Ok(())
    }
}
