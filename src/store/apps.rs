//! Per-application directory trees under the applications root.

use std::fs;
use std::path::{Component, Path, PathBuf};

use super::{StagedUpload, ENTRY_POINT};
use crate::{AppdockError, Result};

/// Result of looking up an asset inside an application's directory.
///
/// `DirectoryAbsent` and `AssetAbsent` are deliberately distinct: only the
/// latter is answered by this component's own not-found response, while the
/// former defers to whatever fallback sits behind the serving chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLookup {
    /// The asset exists at this path.
    Found(PathBuf),
    /// The application directory itself does not exist.
    DirectoryAbsent,
    /// The application directory exists but holds no such asset.
    AssetAbsent,
}

/// Storage tree holding one directory per application.
///
/// ```text
/// {apps_root}/
/// ├── demo/
/// │   ├── index.html
/// │   └── assets/logo.svg
/// └── intranet/
///     └── index.html
/// ```
///
/// Application directories are created lazily on first upload and never
/// deleted by this store.
#[derive(Debug, Clone)]
pub struct AppStore {
    /// Root directory for all application trees.
    apps_root: PathBuf,
}

impl AppStore {
    /// Create a new store rooted at the given directory.
    ///
    /// The root itself is not created here; the tree grows as uploads arrive.
    pub fn new(apps_root: impl Into<PathBuf>) -> Self {
        Self {
            apps_root: apps_root.into(),
        }
    }

    /// Get the applications root of this store.
    pub fn apps_root(&self) -> &Path {
        &self.apps_root
    }

    /// Get the directory belonging to an application.
    pub fn app_dir(&self, app_id: &str) -> Result<PathBuf> {
        validate_app_id(app_id)?;
        Ok(self.apps_root.join(app_id))
    }

    /// Get the path of an application's entry point (`index.html`).
    pub fn entry_path(&self, app_id: &str) -> Result<PathBuf> {
        Ok(self.app_dir(app_id)?.join(ENTRY_POINT))
    }

    /// Check that an upload destination is acceptable without touching disk.
    ///
    /// Called before any staging so that rejected requests leave the
    /// filesystem untouched.
    pub fn validate_target(&self, app_id: &str, file_path: Option<&str>) -> Result<()> {
        validate_app_id(app_id)?;
        if let Some(rel) = file_path {
            clean_relative(rel)?;
        }
        Ok(())
    }

    /// Move a staged upload into its final location.
    ///
    /// The target directory is `{apps_root}/{app_id}`, extended by the
    /// directory portion of `file_path` when one is supplied. Missing
    /// directories are created recursively; the staged file is then renamed
    /// to `{target_dir}/{original_name}`, silently overwriting any previous
    /// asset at that path.
    ///
    /// Directories created before a failing step are left in place.
    pub fn install(
        &self,
        staged: StagedUpload,
        app_id: &str,
        file_path: Option<&str>,
    ) -> Result<PathBuf> {
        let mut target_dir = self.app_dir(app_id)?;

        if let Some(rel) = file_path {
            if let Some(parent) = clean_relative(rel)?.parent() {
                target_dir.push(parent);
            }
        }

        let file_name = Path::new(&staged.original_name).file_name().ok_or_else(|| {
            AppdockError::PathRejected(format!(
                "file name {:?} is not usable as an asset name",
                staged.original_name
            ))
        })?;

        fs::create_dir_all(&target_dir)?;

        let destination = target_dir.join(file_name);
        fs::rename(&staged.path, &destination)?;

        Ok(destination)
    }

    /// Look up an asset at a relative path inside an application directory.
    ///
    /// Directory requests fall back to the directory's own `index.html`,
    /// matching conventional static-file semantics.
    pub fn resolve_asset(&self, app_id: &str, requested: &str) -> Result<AssetLookup> {
        let app_dir = self.app_dir(app_id)?;

        if !app_dir.is_dir() {
            return Ok(AssetLookup::DirectoryAbsent);
        }

        let candidate = app_dir.join(clean_relative(requested)?);
        if candidate.is_file() {
            return Ok(AssetLookup::Found(candidate));
        }

        let index = candidate.join(ENTRY_POINT);
        if index.is_file() {
            return Ok(AssetLookup::Found(index));
        }

        Ok(AssetLookup::AssetAbsent)
    }
}

/// Check that an application id is a single, plain path component.
///
/// Anything else (empty, `.`/`..`, separators, absolute paths) would let an
/// upload or lookup escape the applications root.
fn validate_app_id(app_id: &str) -> Result<()> {
    let mut components = Path::new(app_id).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(AppdockError::PathRejected(format!(
            "application id {app_id:?} is not a plain directory name"
        ))),
    }
}

/// Normalize a client-supplied relative path to nested normal components.
///
/// `.` segments are dropped; `..`, root, and prefix segments are rejected.
fn clean_relative(requested: &str) -> Result<PathBuf> {
    let mut cleaned = PathBuf::new();

    for component in Path::new(requested).components() {
        match component {
            Component::Normal(part) => cleaned.push(part),
            Component::CurDir => {}
            _ => {
                return Err(AppdockError::PathRejected(format!(
                    "path {requested:?} escapes the application directory"
                )))
            }
        }
    }

    Ok(cleaned)
}
