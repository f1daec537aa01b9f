//! Filesystem infrastructure — production implementation of the `LocalFs` port.

use std::path::Path;

use crate::application::ports::LocalFs;
use crate::domain::ProvisionError;

/// Production `LocalFs` backed by `std::fs`.
pub struct LocalDirs;

impl LocalFs for LocalDirs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), ProvisionError> {
        // create_dir_all is already idempotent; a pre-existing directory is
        // not an error. A pre-existing FILE at the path is.
        std::fs::create_dir_all(path).map_err(|source| ProvisionError::Filesystem {
            path: path.to_path_buf(),
            source,
        })
    }
}
