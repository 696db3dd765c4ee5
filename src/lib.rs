//! Font registry for the Petty layout engine.
//!
//! A [`FontSet`] holds the fonts one layout session may use. Fonts can be
//! registered as already parsed programs, as files, as raw byte buffers, or
//! in bulk from a directory. Registrations are deduplicated through a
//! [`ResourceCache`] that can be shared by many font sets, so a font file
//! used by every session is read and parsed once.
//!
//! ## Example
//!
//! ```ignore
//! use petty_fontset::{FontSelectorKey, FontSet, ResourceCache};
//! use std::sync::Arc;
//!
//! let cache = Arc::new(ResourceCache::new());
//! let mut fonts = FontSet::with_cache(cache.clone());
//! fonts.add_directory("assets/fonts");
//! fonts.add_font_file("assets/extra/Inter-Bold.otf", None);
//!
//! let selector = fonts.select(&FontSelectorKey::family("Inter"));
//! if let Some(best) = selector.best_match() {
//!     println!("{}", best.font_name());
//! }
//! ```

pub mod cache;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod parser;
pub mod registry;
pub mod scan;
pub mod selector;

pub use cache::ResourceCache;
pub use config::FontSetConfig;
pub use descriptor::{ContentDigest, DescriptorKey, FontDescriptor, FontIdentity};
pub use error::FontSetError;
pub use parser::FontParser;
pub use registry::{FontSet, FontSetBuilder};
pub use scan::{FontFileKind, ScanReport, SkipReason, SkippedFile};
pub use selector::{FontSelector, FontSelectorKey, SelectorCache};

// Re-export collaborator types that appear in the public API
pub use petty_resource::{FilesystemResourceProvider, InMemoryResourceProvider};
pub use petty_style::{FontStyle, FontWeight};
pub use petty_traits::{
    FontError, FontFormat, FontNames, FontProgram, FontProgramParser, ResourceError, ResourceProvider,
    SharedFontData,
};
