//! Degrade-and-latch wrapper for the best-effort backup-status signal.

use crate::interface::BackupStatus;
use log::error;

/// Lazily queried backup-status capability that fails closed, permanently.
///
/// The first error from the underlying signal is logged once; from then on
/// the monitor reports `false` without ever touching the signal again, so a
/// broken integration cannot spam the log every tick.
pub struct BackupMonitor {
    signal: Option<Box<dyn BackupStatus>>,
    failed: bool,
}

impl BackupMonitor {
    pub fn new(signal: Box<dyn BackupStatus>) -> Self {
        Self {
            signal: Some(signal),
            failed: false,
        }
    }

    /// A monitor with no signal attached; always reports no backup running.
    pub fn disabled() -> Self {
        Self {
            signal: None,
            failed: false,
        }
    }

    /// Whether an external backup is currently in progress.
    pub fn is_backup_running(&mut self) -> bool {
        if self.failed {
            return false;
        }

        let Some(signal) = &self.signal else {
            return false;
        };

        match signal.is_backup_running() {
            Ok(running) => running,
            Err(err) => {
                self.failed = true;
                error!(
                    "Could not get backup running status, will ignore it from now on. \
                     Save-state changes may overlap running backups. ({err})"
                );
                false
            }
        }
    }
}

impl Default for BackupMonitor {
    fn default() -> Self {
        Self::disabled()
    }
}
