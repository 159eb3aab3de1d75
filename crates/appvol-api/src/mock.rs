//! Mock volume controllers for testing

use std::cell::Cell;

use crate::{clamp_fraction, MasterVolume, ProcessVolume, VolumeError, VolumeResult};

/// Mock master volume for unit testing
///
/// Records the last applied level; `fail_set` simulates an OS call failure.
pub struct MockMaster {
    level: Cell<Option<f64>>,

    /// Configure set_volume to fail
    pub fail_set: Cell<bool>,
}

impl MockMaster {
    pub fn new() -> Self {
        Self {
            level: Cell::new(Some(1.0)),
            fail_set: Cell::new(false),
        }
    }

    /// A platform with no master volume control at all
    pub fn unavailable() -> Self {
        Self {
            level: Cell::new(None),
            fail_set: Cell::new(false),
        }
    }
}

impl Default for MockMaster {
    fn default() -> Self {
        Self::new()
    }
}

impl MasterVolume for MockMaster {
    fn volume(&self) -> Option<f64> {
        self.level.get()
    }

    fn set_volume(&self, level: f64) -> VolumeResult<()> {
        if self.fail_set.get() {
            return Err(VolumeError::Backend("Mock set failure".into()));
        }

        self.level.set(Some(clamp_fraction(level)));
        Ok(())
    }
}

/// Mock per-process volume for unit testing
///
/// Constructed either resolved (applies and records values) or unresolved
/// (degrades to defaults like a session that was never found).
pub struct MockProcessVolume {
    pid: u32,
    resolved: bool,
    level: Cell<f32>,
    muted: Cell<bool>,
}

impl MockProcessVolume {
    /// A wrapper whose session resolved successfully
    pub fn resolved(pid: u32) -> Self {
        Self {
            pid,
            resolved: true,
            level: Cell::new(1.0),
            muted: Cell::new(false),
        }
    }

    /// A wrapper bound to a process with no audio session
    pub fn unresolved(pid: u32) -> Self {
        Self {
            pid,
            resolved: false,
            level: Cell::new(1.0),
            muted: Cell::new(false),
        }
    }
}

impl ProcessVolume for MockProcessVolume {
    fn process_id(&self) -> u32 {
        self.pid
    }

    fn volume(&self) -> f32 {
        if self.resolved {
            self.level.get()
        } else {
            1.0
        }
    }

    fn set_volume(&self, level: f32) {
        if self.resolved {
            self.level.set(clamp_fraction(f64::from(level)) as f32);
        }
    }

    fn muted(&self) -> bool {
        self.resolved && self.muted.get()
    }

    fn set_muted(&self, muted: bool) {
        if self.resolved {
            self.muted.set(muted);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn master_set_clamps() {
        let master = MockMaster::new();

        master.set_volume(2.0).unwrap();
        assert_eq!(master.volume(), Some(1.0));

        master.set_volume(-1.0).unwrap();
        assert_eq!(master.volume(), Some(0.0));
    }

    #[test]
    fn master_set_failure() {
        let master = MockMaster::new();
        master.fail_set.set(true);

        assert!(master.set_volume(0.5).is_err());
        // Failed set leaves the previous level in place
        assert_eq!(master.volume(), Some(1.0));
    }

    #[test]
    fn master_unavailable() {
        let master = MockMaster::unavailable();
        assert_eq!(master.volume(), None);
    }

    #[test]
    fn resolved_records_values() {
        let app = MockProcessVolume::resolved(42);

        app.set_volume(0.5);
        app.set_muted(true);

        assert_eq!(app.process_id(), 42);
        assert_eq!(app.volume(), 0.5);
        assert!(app.muted());
    }

    #[test]
    fn resolved_set_clamps() {
        let app = MockProcessVolume::resolved(42);

        app.set_volume(2.0);
        assert_eq!(app.volume(), 1.0);

        app.set_volume(-1.0);
        assert_eq!(app.volume(), 0.0);
    }

    #[test]
    fn unresolved_degrades_to_defaults() {
        let app = MockProcessVolume::unresolved(42);

        app.set_volume(0.5);
        app.set_muted(true);

        assert_eq!(app.volume(), 1.0);
        assert!(!app.muted());

        let status = app.status();
        assert_eq!(status.level, 1.0);
        assert!(!status.muted);
    }
}
