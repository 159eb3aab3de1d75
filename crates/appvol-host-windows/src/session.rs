//! Per-process session volume via Core Audio
//!
//! A wrapper instance holds the session manager for the default render
//! endpoint and lazily resolves the one session owned by the target
//! process's sibling set. Resolution happens at most once; a process with no
//! audio session degrades to safe defaults rather than erroring.

use std::cell::OnceCell;
use std::ptr;

use appvol_api::{clamp_fraction, ProcessVolume};
use appvol_core::{current_process_id, find_session, ProcessTable};
use tracing::debug;
use windows::core::Interface;
use windows::Win32::Foundation::BOOL;
use windows::Win32::Media::Audio::{
    eConsole, eRender, IAudioSessionControl2, IAudioSessionManager2, IMMDeviceEnumerator,
    ISimpleAudioVolume, MMDeviceEnumerator,
};
use windows::Win32::System::Com::{CoCreateInstance, CLSCTX_ALL};

use crate::ComGuard;

/// Session volume/mute control bound to one process
pub struct WindowsProcessVolume {
    pid: u32,
    manager: Option<IAudioSessionManager2>,
    session: OnceCell<Option<ISimpleAudioVolume>>,
    _com: ComGuard,
}

impl WindowsProcessVolume {
    /// Bind to `pid`, or to the calling process when `None`
    pub fn new(pid: Option<u32>) -> Self {
        let pid = pid.unwrap_or_else(current_process_id);
        let com = ComGuard::new();

        let manager = match unsafe { activate_manager() } {
            Ok(manager) => Some(manager),
            Err(e) => {
                debug!(error = %e, "No session manager for default render endpoint");
                None
            }
        };

        Self {
            pid,
            manager,
            session: OnceCell::new(),
            _com: com,
        }
    }

    /// The cached session handle, resolving it on first access
    fn session(&self) -> Option<&ISimpleAudioVolume> {
        self.session
            .get_or_init(|| {
                let manager = self.manager.as_ref()?;
                let family = ProcessTable::snapshot().siblings(self.pid);

                let sessions = match unsafe { enumerate_sessions(manager) } {
                    Ok(sessions) => sessions,
                    Err(e) => {
                        debug!(error = %e, "Session enumeration failed");
                        return None;
                    }
                };

                let matched = find_session(sessions, &family);
                if matched.is_none() {
                    debug!(pid = self.pid, "No audio session for process family");
                }
                matched
            })
            .as_ref()
    }
}

impl ProcessVolume for WindowsProcessVolume {
    fn process_id(&self) -> u32 {
        self.pid
    }

    fn volume(&self) -> f32 {
        let Some(session) = self.session() else {
            return 1.0;
        };

        unsafe { session.GetMasterVolume() }.unwrap_or(1.0)
    }

    fn set_volume(&self, level: f32) {
        let Some(session) = self.session() else {
            return;
        };

        let level = clamp_fraction(f64::from(level)) as f32;
        if let Err(e) = unsafe { session.SetMasterVolume(level, ptr::null()) } {
            debug!(error = %e, "SetMasterVolume failed");
        }
    }

    fn muted(&self) -> bool {
        let Some(session) = self.session() else {
            return false;
        };

        unsafe { session.GetMute() }
            .map(|b| b.as_bool())
            .unwrap_or(false)
    }

    fn set_muted(&self, muted: bool) {
        let Some(session) = self.session() else {
            return;
        };

        if let Err(e) = unsafe { session.SetMute(BOOL::from(muted), ptr::null()) } {
            debug!(error = %e, "SetMute failed");
        }
    }
}

/// Session manager for the current default audio render endpoint
unsafe fn activate_manager() -> windows::core::Result<IAudioSessionManager2> {
    let enumerator: IMMDeviceEnumerator = CoCreateInstance(&MMDeviceEnumerator, None, CLSCTX_ALL)?;
    let device = enumerator.GetDefaultAudioEndpoint(eRender, eConsole)?;
    device.Activate(CLSCTX_ALL, None)
}

/// Enumerate (owning pid, volume handle) pairs in endpoint order
///
/// Sessions that expose no process id or no volume interface (system
/// sessions) are skipped.
unsafe fn enumerate_sessions(
    manager: &IAudioSessionManager2,
) -> windows::core::Result<Vec<(u32, ISimpleAudioVolume)>> {
    let enumerator = manager.GetSessionEnumerator()?;
    let count = enumerator.GetCount()?;

    let mut sessions = Vec::with_capacity(count.max(0) as usize);
    for index in 0..count {
        let control = enumerator.GetSession(index)?;

        let Ok(control2) = control.cast::<IAudioSessionControl2>() else {
            continue;
        };
        let Ok(pid) = control2.GetProcessId() else {
            continue;
        };
        let Ok(volume) = control.cast::<ISimpleAudioVolume>() else {
            continue;
        };

        sessions.push((pid, volume));
    }

    Ok(sessions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_current_process() {
        let app = WindowsProcessVolume::new(None);
        assert_eq!(app.process_id(), current_process_id());
    }

    #[test]
    fn unresolvable_process_degrades_to_defaults() {
        // A pid that cannot exist has no session; everything is a safe no-op
        let app = WindowsProcessVolume::new(Some(u32::MAX));

        app.set_volume(0.5);
        app.set_muted(true);

        assert_eq!(app.volume(), 1.0);
        assert!(!app.muted());
    }
}
