//! Temporary holding area for inbound uploads.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::Result;

/// An upload sitting in the holding area, waiting to be moved into place.
///
/// The file on disk carries a UUID name; the client's original file name is
/// kept alongside and only becomes a path when the upload is installed.
#[derive(Debug)]
pub struct StagedUpload {
    /// Location of the staged file inside the holding area.
    pub path: PathBuf,
    /// File name the client supplied for the upload.
    pub original_name: String,
}

/// Holding area for uploads between receipt and relocation.
///
/// A staged file that is never installed stays behind; there is no orphan
/// cleanup.
#[derive(Debug, Clone)]
pub struct TempStore {
    /// Directory holding staged files.
    temp_root: PathBuf,
}

impl TempStore {
    /// Create a new holding area rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(temp_root: impl Into<PathBuf>) -> Result<Self> {
        let temp_root = temp_root.into();
        fs::create_dir_all(&temp_root)?;

        Ok(Self { temp_root })
    }

    /// Get the root directory of the holding area.
    pub fn temp_root(&self) -> &Path {
        &self.temp_root
    }

    /// Write upload content into the holding area under a fresh UUID name.
    pub fn stage(&self, original_name: &str, content: &[u8]) -> Result<StagedUpload> {
        let path = self.temp_root.join(Uuid::new_v4().to_string());
        fs::write(&path, content)?;

        Ok(StagedUpload {
            path,
            original_name: original_name.to_string(),
        })
    }
}
