use serde::{Deserialize, Serialize};

/// Settings for a [`FontSet`](crate::FontSet).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct FontSetConfig {
    /// Whether [`FontSet::add_directory`](crate::FontSet::add_directory) descends
    /// into subdirectories.
    ///
    /// Defaults to `false`.
    pub scan_subdirectories: bool,

    /// The encoding attached to every font registered by a directory scan.
    ///
    /// Defaults to `None`, the font's own encoding.
    pub scan_encoding: Option<String>,
}
