//! Filesystem-based resource provider for native platforms.
//!
//! Font files are read with blocking I/O and directories are listed with
//! `walkdir`. Listing takes a snapshot: files created while a scan runs are
//! not picked up, and files deleted meanwhile fail individually on `load`.

use petty_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

/// A resource provider backed by the local filesystem.
///
/// Paths are used as given; relative paths resolve against the process
/// working directory.
#[derive(Debug, Default, Clone)]
pub struct FilesystemResourceProvider {
    follow_links: bool,
}

impl FilesystemResourceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Follow symbolic links while listing directories.
    ///
    /// Off by default, so a link cycle inside a font directory cannot make a
    /// recursive scan loop.
    pub fn with_follow_links(mut self, follow_links: bool) -> Self {
        self.follow_links = follow_links;
        self
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &Path) -> Result<SharedResourceData, ResourceError> {
        std::fs::read(path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.display().to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.display().to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn list_files(&self, dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, ResourceError> {
        let metadata = std::fs::metadata(dir).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(dir.display().to_string())
            } else {
                ResourceError::from(e)
            }
        })?;
        if !metadata.is_dir() {
            return Err(ResourceError::NotADirectory(dir.display().to_string()));
        }

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(if recursive { usize::MAX } else { 1 })
            .follow_links(self.follow_links)
            .sort_by_file_name();

        let mut files = Vec::new();
        for entry in walker {
            match entry {
                Ok(entry)
                    if entry.file_type().is_file()
                        || (entry.path_is_symlink() && entry.path().is_file()) =>
                {
                    files.push(entry.into_path())
                }
                Ok(_) => {}
                // An unreadable subdirectory only hides its own files.
                Err(e) => log::warn!("Skipping unreadable entry under {}: {}", dir.display(), e),
            }
        }
        Ok(files)
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}
