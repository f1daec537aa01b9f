//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` — never from `crate::infra`,
//! `crate::commands`, or `crate::output`.

use std::path::Path;

use crate::domain::{InstanceLayout, ProvisionError};

// ── Value Types ───────────────────────────────────────────────────────────────

/// Record of a successfully detached server launch.
///
/// The server runs independently after detaching; this handle exists so the
/// caller (and tests) can see exactly what was launched, not to control it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerHandle {
    /// Program that was invoked, e.g. `mongod`.
    pub program: String,
    /// Full argument list passed to the program.
    pub args: Vec<String>,
    /// Pid of the forked server process, when the launcher could determine it.
    pub pid: Option<u32>,
}

// ── Server Launcher Port ──────────────────────────────────────────────────────

/// Launches the database server detached from the controlling terminal.
///
/// The production implementation shells out to mongod; test doubles record
/// the layout and return a canned handle without spawning anything.
#[allow(async_fn_in_trait)]
pub trait ServerLauncher {
    /// Launch the server against `layout`, returning once it has detached.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::Spawn`] if the binary cannot be executed or
    /// exits non-zero before detaching.
    async fn launch_detached(
        &self,
        layout: &InstanceLayout,
    ) -> Result<ServerHandle, ProvisionError>;
}

// ── Filesystem Port ───────────────────────────────────────────────────────────

/// Abstracts local directory operations so filesystem failures can be
/// injected in tests.
pub trait LocalFs {
    /// Whether `path` exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create `path` and all missing parents. Idempotent: succeeds silently
    /// if the directory is already present.
    ///
    /// # Errors
    ///
    /// Returns [`ProvisionError::Filesystem`] on any OS-level failure.
    fn create_dir_all(&self, path: &Path) -> Result<(), ProvisionError>;
}

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// Abstracts progress reporting so services can emit events without
/// depending on the Presentation layer. Sync trait — no async needed.
pub trait ProgressReporter {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
}
