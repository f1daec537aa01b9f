//! Shared mock infrastructure for unit tests.
//!
//! Port-level fakes for [`LocalFs`], [`ServerLauncher`], and
//! [`ProgressReporter`] so each test file doesn't have to re-define the
//! same boilerplate. All fakes here are platform-neutral; the
//! `CommandRunner` mock lives in `launcher_tests.rs`, its only consumer.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use mongoprov::application::ports::{LocalFs, ProgressReporter, ServerHandle, ServerLauncher};
use mongoprov::domain::{InstanceLayout, ProvisionError};

// ── FakeFs ────────────────────────────────────────────────────────────────────

/// A `LocalFs` that records created directories without touching the disk.
#[derive(Default)]
pub struct FakeFs {
    /// Paths reported as already existing.
    pub existing: Vec<PathBuf>,
    /// Creation fails for any path starting with this prefix.
    pub fail_under: Option<PathBuf>,
    /// Every path passed to `create_dir_all`, in call order.
    pub created: RefCell<Vec<PathBuf>>,
}

impl LocalFs for FakeFs {
    fn exists(&self, path: &Path) -> bool {
        self.existing.iter().any(|p| p == path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), ProvisionError> {
        if let Some(prefix) = &self.fail_under
            && path.starts_with(prefix)
        {
            return Err(ProvisionError::Filesystem {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
            });
        }
        self.created.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

// ── FakeLauncher ──────────────────────────────────────────────────────────────

/// A `ServerLauncher` that records layouts and returns a canned handle.
#[derive(Default)]
pub struct FakeLauncher {
    /// When `true`, every launch fails with a spawn error.
    pub fail: bool,
    /// Every layout passed to `launch_detached`, in call order.
    pub launched: RefCell<Vec<InstanceLayout>>,
}

impl ServerLauncher for FakeLauncher {
    async fn launch_detached(
        &self,
        layout: &InstanceLayout,
    ) -> Result<ServerHandle, ProvisionError> {
        self.launched.borrow_mut().push(layout.clone());
        if self.fail {
            return Err(ProvisionError::Spawn {
                program: "mongod".to_owned(),
                reason: "No such file or directory".to_owned(),
            });
        }
        Ok(ServerHandle {
            program: "mongod".to_owned(),
            args: vec![
                "--dbpath".to_owned(),
                layout.data_dir().display().to_string(),
                "--logpath".to_owned(),
                layout.log_path().display().to_string(),
                "--fork".to_owned(),
            ],
            pid: Some(4242),
        })
    }
}

// ── RecordingReporter ─────────────────────────────────────────────────────────

/// A `ProgressReporter` that records every message.
#[derive(Default)]
pub struct RecordingReporter {
    pub events: RefCell<Vec<String>>,
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.events.borrow_mut().push(format!("step: {message}"));
    }

    fn success(&self, message: &str) {
        self.events.borrow_mut().push(format!("success: {message}"));
    }
}
