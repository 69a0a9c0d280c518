//! Template directory provider.
//!
//! Templates are resolved relative to a base directory laid out as
//! `<kind>/<page>.html`. Resolved paths must stay inside that directory.

use folio_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Loads templates from a directory on disk.
///
/// Absolute paths and paths that climb out of the base directory are refused
/// with `ResourceError::NotFound`, whether or not the target exists.
#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    /// Canonicalized base path for containment checks.
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    /// Creates a provider rooted at `base_path`. The directory does not have
    /// to exist yet; lookups simply fail until it does.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    /// Creates a provider for an existing template directory.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::NotFound` if `base_path` is not a directory.
    pub fn open<P: AsRef<Path>>(base_path: P) -> Result<Self, ResourceError> {
        let base = base_path.as_ref();
        if !base.is_dir() {
            return Err(ResourceError::NotFound(format!(
                "template directory {}",
                base.display()
            )));
        }
        log::debug!("Using template directory {}", base.display());
        Ok(Self::new(base))
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Returns `None` if the path would escape the base directory.
    fn resolve_path_safe(&self, path: &str) -> Option<PathBuf> {
        if Path::new(path).is_absolute() {
            return None;
        }

        let full_path = self.base_path.join(path);

        if let Ok(canonical) = full_path.canonicalize()
            && let Some(base) = &self.canonical_base
        {
            return canonical.starts_with(base).then_some(canonical);
        }

        // Not on disk (yet): fall back to a lexical check.
        if Path::new(path)
            .components()
            .any(|c| matches!(c, Component::ParentDir))
        {
            return None;
        }

        Some(full_path)
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self.resolve_path_safe(path).ok_or_else(|| {
            log::warn!("Refusing template path outside {}: {path}", self.base_path.display());
            ResourceError::NotFound(format!("{path} (outside template directory)"))
        })?;

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve_path_safe(path).is_some_and(|p| p.is_file())
    }

    fn base_path(&self) -> Option<&str> {
        self.base_path.to_str()
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}
