//! Application service — instance provisioning use-case.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through injected port traits.

use crate::application::ports::{LocalFs, ProgressReporter, ServerHandle, ServerLauncher};
use crate::domain::{InstanceLayout, ProvisionError};

/// Provision the instance directories and launch the server detached.
///
/// A single linear sequence: create the base directory, create the `data`
/// subdirectory, launch. Directory creation is idempotent, so re-invoking
/// with the same layout never fails merely because the tree already exists.
/// Nothing is cleaned up on failure; directories created before the error
/// remain.
///
/// # Errors
///
/// Returns [`ProvisionError::Filesystem`] if either directory cannot be
/// created, or [`ProvisionError::Spawn`] if the server fails to launch.
/// The launcher is never invoked after a filesystem failure.
pub async fn provision_instance(
    fs: &impl LocalFs,
    launcher: &impl ServerLauncher,
    reporter: &impl ProgressReporter,
    layout: &InstanceLayout,
) -> Result<ServerHandle, ProvisionError> {
    let base = layout.base_dir();
    if fs.exists(base) {
        reporter.step("instance directory already exists, reusing");
    }
    fs.create_dir_all(base)?;
    fs.create_dir_all(&layout.data_dir())?;

    reporter.step("starting mongod...");
    let handle = launcher.launch_detached(layout).await?;
    reporter.success("mongod started and detached");
    Ok(handle)
}
