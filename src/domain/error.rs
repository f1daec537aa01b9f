//! Typed domain error enum.
//!
//! One closed enumeration covering every way provisioning can fail, so
//! callers and tests can distinguish failure causes programmatically
//! instead of parsing diagnostic text. All variants implement
//! `thiserror::Error` and convert to `anyhow::Error` via the `?` operator.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while provisioning an instance directory and launching mongod.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Identifier missing or empty. The Display text is the usage line the
    /// caller prints to stdout.
    #[error("usage: {program} IDENTIFIER")]
    Usage { program: String },

    /// No scratch root supplied via `--scratch-root` or `SCRATCH`.
    #[error("scratch root not set: pass --scratch-root or set SCRATCH")]
    MissingScratchRoot,

    /// Directory creation failed. Carries the underlying OS error.
    #[error("creating directory {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The server binary could not be spawned, or exited non-zero before
    /// detaching.
    #[error("launching {program}: {reason}")]
    Spawn { program: String, reason: String },
}
