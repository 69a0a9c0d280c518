//! ResourceProvider trait for abstracting template loading.
//!
//! Page templates are plain text resources addressed by a relative path such
//! as `invoice/first_page.html`. Where they live (a directory, the binary, a
//! test fixture) is the provider's business.

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for resource loading operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

    #[error("Invalid resource format: {0}")]
    InvalidFormat(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ResourceError {
    fn from(err: std::io::Error) -> Self {
        ResourceError::Io(err.to_string())
    }
}

/// Shared resource data type (reference-counted bytes).
pub type SharedResourceData = Arc<Vec<u8>>;

/// A trait for loading read-only resources.
///
/// # Implementations
///
/// - `FilesystemResourceProvider`: a template directory on disk (`folio-resource`)
/// - `EmbeddedTemplates`: the default templates compiled into the binary (`folio-resource`)
/// - `InMemoryResourceProvider`: pre-populated memory (always available)
pub trait ResourceProvider: Send + Sync + Debug {
    /// Load a resource by its relative path.
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError>;

    /// Check if a resource exists.
    fn exists(&self, path: &str) -> bool;

    /// Load a resource and decode it as UTF-8 text.
    ///
    /// Returns `ResourceError::InvalidFormat` if the bytes are not valid UTF-8.
    fn load_text(&self, path: &str) -> Result<String, ResourceError> {
        let data = self.load(path)?;
        String::from_utf8(data.to_vec())
            .map_err(|e| ResourceError::InvalidFormat(format!("{path}: {e}")))
    }

    /// Get the base path for resolving relative resources.
    ///
    /// Returns `None` if the provider doesn't use path-based resolution.
    fn base_path(&self) -> Option<&str> {
        None
    }

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory resource provider.
///
/// Resources are stored in memory and must be pre-populated before use.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: RwLock<HashMap<String, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a resource to the in-memory store, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<String>, data: Vec<u8>) -> Result<(), ResourceError> {
        let path_string = path.into();
        let mut resources = self
            .resources
            .write()
            .map_err(|_| ResourceError::LoadFailed {
                path: path_string.clone(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources.insert(path_string, Arc::new(data));
        Ok(())
    }

    /// Add a text resource (a template) to the store.
    pub fn add_text(&self, path: impl Into<String>, text: &str) -> Result<(), ResourceError> {
        self.add(path, text.as_bytes().to_vec())
    }

    /// Remove a resource from the store.
    ///
    /// Returns `None` if the lock is poisoned or the resource doesn't exist.
    pub fn remove(&self, path: &str) -> Option<SharedResourceData> {
        self.resources.write().ok()?.remove(path)
    }

    /// Get the number of resources in the store.
    ///
    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.resources.read().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if the store is empty.
    ///
    /// Returns `true` if the lock is poisoned.
    pub fn is_empty(&self) -> bool {
        self.resources.read().map(|r| r.is_empty()).unwrap_or(true)
    }
}

impl ResourceProvider for InMemoryResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let resources = self
            .resources
            .read()
            .map_err(|_| ResourceError::LoadFailed {
                path: path.to_string(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.to_string()))
    }

    fn exists(&self, path: &str) -> bool {
        self.resources
            .read()
            .map(|r| r.contains_key(path))
            .unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_provider_add_and_load_text() {
        let provider = InMemoryResourceProvider::new();
        provider
            .add_text("invoice/single_page.html", "<p>{{PARTY_NAME}}</p>")
            .unwrap();

        let text = provider.load_text("invoice/single_page.html").unwrap();
        assert_eq!(text, "<p>{{PARTY_NAME}}</p>");
    }

    #[test]
    fn test_in_memory_provider_not_found() {
        let provider = InMemoryResourceProvider::new();
        let result = provider.load_text("invoice/footer_page.html");
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[test]
    fn test_load_text_rejects_invalid_utf8() {
        let provider = InMemoryResourceProvider::new();
        provider.add("broken.html", vec![0xff, 0xfe, 0x00]).unwrap();

        let result = provider.load_text("broken.html");
        assert!(matches!(result, Err(ResourceError::InvalidFormat(_))));
    }

    #[test]
    fn test_in_memory_provider_exists_and_remove() {
        let provider = InMemoryResourceProvider::new();
        provider.add_text("a.html", "").unwrap();

        assert!(provider.exists("a.html"));
        let removed = provider.remove("a.html");
        assert!(removed.is_some());
        assert!(!provider.exists("a.html"));
        assert!(provider.remove("a.html").is_none());
    }

    #[test]
    fn test_in_memory_provider_overwrite() {
        let provider = InMemoryResourceProvider::new();
        provider.add_text("page.html", "original").unwrap();
        provider.add_text("page.html", "updated").unwrap();

        assert_eq!(provider.load_text("page.html").unwrap(), "updated");
        assert_eq!(provider.len(), 1);
        assert!(!provider.is_empty());
    }

    #[test]
    fn test_in_memory_provider_metadata() {
        let provider = InMemoryResourceProvider::new();
        assert_eq!(provider.name(), "InMemoryResourceProvider");
        assert!(provider.base_path().is_none());
        assert!(provider.is_empty());
    }

    #[test]
    fn test_resource_error_display() {
        let err = ResourceError::NotFound("ledger/last_page.html".to_string());
        assert!(err.to_string().contains("ledger/last_page.html"));

        let err = ResourceError::LoadFailed {
            path: "file.html".to_string(),
            message: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("file.html"));
        assert!(err.to_string().contains("permission denied"));
    }

    #[test]
    fn test_resource_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let resource_err: ResourceError = io_err.into();
        assert!(matches!(resource_err, ResourceError::Io(_)));
        assert!(resource_err.to_string().contains("file not found"));
    }
}
