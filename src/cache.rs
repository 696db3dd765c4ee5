//! The shared descriptor cache.
//!
//! One `ResourceCache` is typically shared (through an `Arc`) by every
//! `FontSet` of a process, so that a font file registered by many layout
//! sessions is parsed once and resolves to the same descriptor everywhere.
//! Entries are never removed.

use crate::descriptor::{DescriptorKey, FontDescriptor};
use crate::error::FontSetError;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Debug, Default)]
pub struct ResourceCache {
    entries: RwLock<HashMap<DescriptorKey, Arc<FontDescriptor>>>,
}

impl ResourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the descriptor stored under `key`, creating it with `factory`
    /// if there is none.
    ///
    /// The factory runs without holding the lock, so two threads missing on
    /// the same key may both build a descriptor. Only the first one to insert
    /// is kept; the other is dropped and both callers receive the stored one.
    /// A failing factory inserts nothing, so a later call may still succeed.
    ///
    /// # Errors
    ///
    /// Propagates the factory's error, or `FontSetError::LockPoisoned`.
    pub fn get_or_create<F>(&self, key: &DescriptorKey, factory: F) -> Result<Arc<FontDescriptor>, FontSetError>
    where
        F: FnOnce() -> Result<FontDescriptor, FontSetError>,
    {
        // Fast path
        {
            let entries = self.entries.read().map_err(|_| FontSetError::LockPoisoned)?;
            if let Some(descriptor) = entries.get(key) {
                log::debug!("Font cache hit for '{}'", key);
                return Ok(descriptor.clone());
            }
        }

        let created = Arc::new(factory()?);

        let mut entries = self.entries.write().map_err(|_| FontSetError::LockPoisoned)?;
        let stored = entries.entry(key.clone()).or_insert_with(|| {
            log::debug!("Caching font descriptor '{}'", key);
            created
        });
        Ok(stored.clone())
    }

    /// Returns the descriptor stored under `key`, if any.
    ///
    /// Returns `None` if the lock is poisoned.
    pub fn get(&self, key: &DescriptorKey) -> Option<Arc<FontDescriptor>> {
        self.entries.read().ok()?.get(key).cloned()
    }

    pub fn contains(&self, key: &DescriptorKey) -> bool {
        self.entries
            .read()
            .map(|e| e.contains_key(key))
            .unwrap_or(false)
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().map(|e| e.is_empty()).unwrap_or(true)
    }
}
