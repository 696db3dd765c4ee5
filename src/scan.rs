//! Bulk registration of font directories.
//!
//! Files are picked by the last four characters of their path, compared
//! case-insensitively:
//!
//! - `.ttf`, `.otf`, `.ttc` are registered directly;
//! - `.afm`, `.pfm` are registered only when the Type 1 outline file with the
//!   same base name and a `.pfb` suffix sits next to them;
//! - anything else is ignored.
//!
//! A file that cannot be read or parsed is skipped without affecting the
//! rest of the scan.

use crate::error::FontSetError;
use crate::registry::FontSet;
use std::path::{Path, PathBuf};

/// How a directory scan treats a file, judged by its suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFileKind {
    /// TrueType, OpenType or a TrueType collection.
    Sfnt,
    /// Type 1 metrics, usable only alongside a `.pfb` outline file.
    Type1Metrics,
    Other,
}

/// Classifies `path` by its last four characters.
pub fn classify(path: &Path) -> FontFileKind {
    let path = path.to_string_lossy();
    let Some((start, _)) = path.char_indices().rev().nth(3) else {
        return FontFileKind::Other;
    };
    match path[start..].to_lowercase().as_str() {
        ".ttf" | ".otf" | ".ttc" => FontFileKind::Sfnt,
        ".afm" | ".pfm" => FontFileKind::Type1Metrics,
        _ => FontFileKind::Other,
    }
}

/// The `.pfb` outline file paired with a Type 1 metrics file.
pub fn type1_outline_path(metrics: &Path) -> PathBuf {
    metrics.with_extension("pfb")
}

#[derive(Debug, Clone)]
pub enum SkipReason {
    UnsupportedSuffix,
    /// A Type 1 metrics file without its outline file.
    MissingOutline(PathBuf),
    Failed(FontSetError),
}

#[derive(Debug, Clone)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// What a directory scan did with each listed file.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Files successfully registered, including ones already present.
    pub added: usize,
    pub skipped: Vec<SkippedFile>,
}

impl ScanReport {
    fn skip(&mut self, path: PathBuf, reason: SkipReason) {
        self.skipped.push(SkippedFile { path, reason });
    }

    /// Skipped files that looked like fonts but failed to register.
    pub fn failures(&self) -> impl Iterator<Item = &SkippedFile> {
        self.skipped
            .iter()
            .filter(|s| matches!(s.reason, SkipReason::Failed(_)))
    }
}

impl FontSet {
    /// Registers the fonts in `dir`, descending into subdirectories only if
    /// the configuration says so.
    ///
    /// Returns the number of files registered; 0 if `dir` cannot be listed.
    pub fn add_directory(&mut self, dir: impl AsRef<Path>) -> usize {
        let recursive = self.config.scan_subdirectories;
        self.add_directory_recursive(dir, recursive)
    }

    /// Registers the fonts in `dir`, and in its subdirectories if `recursive`.
    ///
    /// Returns the number of files registered; 0 if `dir` cannot be listed.
    pub fn add_directory_recursive(&mut self, dir: impl AsRef<Path>, recursive: bool) -> usize {
        self.scan_directory(dir, recursive).added
    }

    /// Registers the fonts in `dir` and reports what happened to every file.
    pub fn scan_directory(&mut self, dir: impl AsRef<Path>, recursive: bool) -> ScanReport {
        let dir = dir.as_ref();
        let mut report = ScanReport::default();

        let files = match self.resources.list_files(dir, recursive) {
            Ok(files) => files,
            Err(e) => {
                log::warn!("Cannot list font directory {}: {}", dir.display(), e);
                return report;
            }
        };

        let encoding = self.config.scan_encoding.clone();
        for file in files {
            match classify(&file) {
                FontFileKind::Sfnt => {}
                FontFileKind::Type1Metrics => {
                    let outline = type1_outline_path(&file);
                    if !self.resources.exists(&outline) {
                        log::debug!("Skipping {}: no {}", file.display(), outline.display());
                        report.skip(file, SkipReason::MissingOutline(outline));
                        continue;
                    }
                }
                FontFileKind::Other => {
                    report.skip(file, SkipReason::UnsupportedSuffix);
                    continue;
                }
            }

            match self.try_add_font_file(&file, encoding.as_deref()) {
                Ok(_) => report.added += 1,
                Err(e) if e.is_resource_local() => {
                    log::warn!("Skipping font file {}: {}", file.display(), e);
                    report.skip(file, SkipReason::Failed(e));
                }
                Err(e) => {
                    log::error!("Aborting scan of {} at {}: {}", dir.display(), file.display(), e);
                    report.skip(file, SkipReason::Failed(e));
                    break;
                }
            }
        }

        log::debug!(
            "Scanned {}: {} fonts added, {} files skipped",
            dir.display(),
            report.added,
            report.skipped.len()
        );
        report
    }
}
