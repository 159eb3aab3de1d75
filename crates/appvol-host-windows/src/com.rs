//! RAII guard for COM apartment initialization

use tracing::debug;
use windows::Win32::System::Com::{CoInitializeEx, CoUninitialize, COINIT_MULTITHREADED};

/// Initializes COM for the current thread and uninitializes it on drop
///
/// Every successful CoInitializeEx (including S_FALSE for an already
/// initialized thread) must be balanced by CoUninitialize; a failed
/// initialization must not be.
pub struct ComGuard {
    initialized: bool,
}

impl ComGuard {
    pub fn new() -> Self {
        let hr = unsafe { CoInitializeEx(None, COINIT_MULTITHREADED) };
        if hr.is_err() {
            debug!(hresult = ?hr, "CoInitializeEx failed");
        }

        Self {
            initialized: hr.is_ok(),
        }
    }
}

impl Default for ComGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        if self.initialized {
            unsafe { CoUninitialize() };
        }
    }
}
