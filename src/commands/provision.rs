//! Provision an instance directory and launch mongod detached.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;

use crate::application::services::provision::provision_instance;
use crate::domain::{InstanceLayout, ProvisionError};
use crate::infra::fs::LocalDirs;
use crate::infra::launcher::MongodLauncher;
use crate::output::{OutputContext, TerminalReporter};

/// Arguments for the provision command.
#[derive(Args, Default)]
pub struct ProvisionArgs {
    /// Instance identifier; forms the last segment of the instance directory
    pub identifier: Option<String>,

    /// Root directory under which instance directories are created
    #[arg(long, env = "SCRATCH", value_name = "PATH")]
    pub scratch_root: Option<PathBuf>,

    /// Server binary to launch
    #[arg(long, env = "MONGOD", default_value = "mongod", value_name = "PATH")]
    pub mongod_bin: String,
}

/// Run the provision command.
///
/// Validates the identifier before any side effect: a missing or empty
/// identifier produces the usage error with zero filesystem changes.
///
/// # Errors
///
/// Returns an error if the identifier or scratch root is missing, directory
/// creation fails, or mongod fails to launch.
pub async fn run(args: &ProvisionArgs, ctx: &OutputContext) -> Result<()> {
    let Some(identifier) = args.identifier.as_deref().filter(|s| !s.is_empty()) else {
        return Err(ProvisionError::Usage {
            program: invoked_as(),
        }
        .into());
    };
    let Some(scratch_root) = args.scratch_root.as_deref() else {
        return Err(ProvisionError::MissingScratchRoot.into());
    };

    let layout = InstanceLayout::new(scratch_root, identifier);
    let launcher = MongodLauncher::new(&args.mongod_bin);
    let reporter = TerminalReporter::new(ctx);

    let handle = provision_instance(&LocalDirs, &launcher, &reporter, &layout).await?;

    ctx.kv("Instance", &layout.base_dir().display().to_string());
    ctx.kv("Data", &layout.data_dir().display().to_string());
    ctx.kv("Log", &layout.log_path().display().to_string());
    if let Some(pid) = handle.pid {
        ctx.kv("PID", &pid.to_string());
    }
    Ok(())
}

/// Name this binary was invoked as, for the usage line.
fn invoked_as() -> String {
    std::env::args()
        .next()
        .as_deref()
        .map(Path::new)
        .and_then(Path::file_name)
        .and_then(OsStr::to_str)
        .unwrap_or(env!("CARGO_PKG_NAME"))
        .to_owned()
}
