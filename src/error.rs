//! Error types for font registration.

use petty_traits::{FontError, ResourceError};
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum FontSetError {
    #[error("No font resource provided: a name, a byte buffer or a named program is required")]
    NoResource,
    #[error("Failed to read font resource: {0}")]
    Resource(#[from] ResourceError),
    #[error("Failed to parse font resource: {0}")]
    Font(#[from] FontError),
    #[error("Shared font cache lock poisoned")]
    LockPoisoned,
}

impl FontSetError {
    /// Errors that only disqualify the one resource being registered.
    ///
    /// A directory scan skips files failing with these and keeps going.
    pub fn is_resource_local(&self) -> bool {
        matches!(self, FontSetError::Resource(_) | FontSetError::Font(_))
    }
}
