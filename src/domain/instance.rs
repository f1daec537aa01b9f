//! Instance directory layout — pure path construction, no I/O.

use std::path::{Path, PathBuf};

/// Fixed subpath between the scratch root and the identifier.
pub const INSTANCE_SUBPATH: [&str; 2] = ["mongodb", "fireworks"];

/// Name of the storage directory inside the instance directory.
pub const DATA_DIRNAME: &str = "data";

/// Name of the mongod log file inside the instance directory.
pub const LOG_FILENAME: &str = "mongo.log";

/// Filesystem layout of one instance.
///
/// All paths derive from `<scratch-root>/mongodb/fireworks/<identifier>`.
/// The identifier is treated as an opaque token; its contents are the
/// caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstanceLayout {
    base: PathBuf,
}

impl InstanceLayout {
    /// Build the layout for `identifier` under `scratch_root`.
    #[must_use]
    pub fn new(scratch_root: &Path, identifier: &str) -> Self {
        let [a, b] = INSTANCE_SUBPATH;
        Self {
            base: scratch_root.join(a).join(b).join(identifier),
        }
    }

    /// The instance directory itself.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    /// The mongod storage directory, `<base>/data`.
    #[must_use]
    pub fn data_dir(&self) -> PathBuf {
        self.base.join(DATA_DIRNAME)
    }

    /// The mongod log file, `<base>/mongo.log`. Created by mongod itself,
    /// not by the provisioner.
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.base.join(LOG_FILENAME)
    }
}
