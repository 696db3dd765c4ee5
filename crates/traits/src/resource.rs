//! ResourceProvider trait for abstracting font file access.
//!
//! The registry reads font files and lists font directories through this
//! trait so that it can run against the local filesystem or an in-memory
//! store alike.

use std::collections::BTreeMap;
use std::fmt::Debug;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};
use thiserror::Error;

/// Error type for resource loading operations.
#[derive(Error, Debug, Clone)]
pub enum ResourceError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Failed to load resource '{path}': {message}")]
    LoadFailed { path: String, message: String },

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

/// A trait for reading font files and enumerating font directories.
///
/// # Implementations
///
/// - `FilesystemResourceProvider` (petty-resource): the local filesystem
/// - `InMemoryResourceProvider`: pre-populated memory (always available)
pub trait ResourceProvider: Send + Sync + Debug {
    /// Load a resource by its path.
    fn load(&self, path: &Path) -> Result<SharedResourceData, ResourceError>;

    /// Check if a resource exists.
    fn exists(&self, path: &Path) -> bool;

    /// List the files under `dir`, descending into subdirectories only when
    /// `recursive` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if `dir` is missing, is not a directory, or cannot be read.
    fn list_files(&self, dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, ResourceError>;

    /// Returns a human-readable name for this provider (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// An in-memory resource provider.
///
/// Files are keyed by path. A directory exists as long as at least one
/// stored file lives beneath it.
#[derive(Debug, Default)]
pub struct InMemoryResourceProvider {
    resources: RwLock<BTreeMap<PathBuf, SharedResourceData>>,
}

impl InMemoryResourceProvider {
    pub fn new() -> Self {
        Self {
            resources: RwLock::new(BTreeMap::new()),
        }
    }

    /// Add a file to the in-memory store, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add(&self, path: impl Into<PathBuf>, data: Vec<u8>) -> Result<(), ResourceError> {
        self.add_shared(path, Arc::new(data))
    }

    /// Add a file from shared data.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::LoadFailed` if the internal lock is poisoned.
    pub fn add_shared(
        &self,
        path: impl Into<PathBuf>,
        data: SharedResourceData,
    ) -> Result<(), ResourceError> {
        let path = path.into();
        let mut resources = self
            .resources
            .write()
            .map_err(|_| ResourceError::LoadFailed {
                path: path.display().to_string(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources.insert(path, data);
        Ok(())
    }

    /// Get the number of files in the store.
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
    fn load(&self, path: &Path) -> Result<SharedResourceData, ResourceError> {
        let resources = self
            .resources
            .read()
            .map_err(|_| ResourceError::LoadFailed {
                path: path.display().to_string(),
                message: "resource store lock poisoned".to_string(),
            })?;
        resources
            .get(path)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound(path.display().to_string()))
    }

    fn exists(&self, path: &Path) -> bool {
        self.resources
            .read()
            .map(|r| r.contains_key(path))
            .unwrap_or(false)
    }

    fn list_files(&self, dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, ResourceError> {
        let resources = self
            .resources
            .read()
            .map_err(|_| ResourceError::LoadFailed {
                path: dir.display().to_string(),
                message: "resource store lock poisoned".to_string(),
            })?;

        if resources.contains_key(dir) {
            return Err(ResourceError::NotADirectory(dir.display().to_string()));
        }

        let under_dir: Vec<&PathBuf> = resources
            .keys()
            .filter(|path| path.starts_with(dir) && path.as_path() != dir)
            .collect();
        if under_dir.is_empty() {
            return Err(ResourceError::NotFound(dir.display().to_string()));
        }

        Ok(under_dir
            .into_iter()
            .filter(|path| recursive || path.parent() == Some(dir))
            .cloned()
            .collect())
    }

    fn name(&self) -> &'static str {
        "InMemoryResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_provider_add_and_load() {
        let provider = InMemoryResourceProvider::new();
        provider.add("fonts/a.ttf", b"font bytes".to_vec()).unwrap();

        let data = provider.load(Path::new("fonts/a.ttf")).unwrap();
        assert_eq!(&*data, b"font bytes");
    }

    #[test]
    fn test_in_memory_provider_not_found() {
        let provider = InMemoryResourceProvider::new();
        let result = provider.load(Path::new("missing.ttf"));
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[test]
    fn test_in_memory_provider_exists() {
        let provider = InMemoryResourceProvider::new();
        provider.add("fonts/a.pfb", vec![]).unwrap();

        assert!(provider.exists(Path::new("fonts/a.pfb")));
        assert!(!provider.exists(Path::new("fonts/b.pfb")));
    }

    #[test]
    fn test_in_memory_provider_list_flat() {
        let provider = InMemoryResourceProvider::new();
        provider.add("fonts/a.ttf", vec![]).unwrap();
        provider.add("fonts/b.otf", vec![]).unwrap();
        provider.add("fonts/nested/c.ttf", vec![]).unwrap();
        provider.add("other/d.ttf", vec![]).unwrap();

        let files = provider.list_files(Path::new("fonts"), false).unwrap();
        assert_eq!(
            files,
            vec![PathBuf::from("fonts/a.ttf"), PathBuf::from("fonts/b.otf")]
        );
    }

    #[test]
    fn test_in_memory_provider_list_recursive() {
        let provider = InMemoryResourceProvider::new();
        provider.add("fonts/a.ttf", vec![]).unwrap();
        provider.add("fonts/nested/c.ttf", vec![]).unwrap();

        let files = provider.list_files(Path::new("fonts"), true).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.contains(&PathBuf::from("fonts/nested/c.ttf")));
    }

    #[test]
    fn test_in_memory_provider_list_missing_dir() {
        let provider = InMemoryResourceProvider::new();
        provider.add("fonts/a.ttf", vec![]).unwrap();

        let result = provider.list_files(Path::new("elsewhere"), false);
        assert!(matches!(result, Err(ResourceError::NotFound(_))));
    }

    #[test]
    fn test_in_memory_provider_list_file_is_not_a_directory() {
        let provider = InMemoryResourceProvider::new();
        provider.add("fonts/a.ttf", vec![]).unwrap();

        let result = provider.list_files(Path::new("fonts/a.ttf"), false);
        assert!(matches!(result, Err(ResourceError::NotADirectory(_))));
    }

    #[test]
    fn test_in_memory_provider_overwrite() {
        let provider = InMemoryResourceProvider::new();
        provider.add("a.ttf", b"original".to_vec()).unwrap();
        provider.add("a.ttf", b"updated".to_vec()).unwrap();

        let data = provider.load(Path::new("a.ttf")).unwrap();
        assert_eq!(&*data, b"updated");
        assert_eq!(provider.len(), 1);
        assert!(!provider.is_empty());
    }

    #[test]
    fn test_resource_error_display() {
        let err = ResourceError::LoadFailed {
            path: "file.ttf".to_string(),
            message: "permission denied".to_string(),
        };
        assert!(err.to_string().contains("file.ttf"));
        assert!(err.to_string().contains("permission denied"));

        let err = ResourceError::NotADirectory("a.ttf".to_string());
        assert!(err.to_string().contains("a.ttf"));
    }

    #[test]
    fn test_resource_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let resource_err: ResourceError = io_err.into();
        assert!(matches!(resource_err, ResourceError::Io(_)));
        assert!(resource_err.to_string().contains("denied"));
    }
}
