//! Resource providers for the petty font registry.
//!
//! This crate provides platform-specific implementations of the
//! `ResourceProvider` trait from petty-traits.
//!
//! ## Available Providers
//!
//! - [`FilesystemResourceProvider`]: Reads and lists fonts on the local filesystem
//!
//! ## Re-exports
//!
//! For convenience, we also re-export the in-memory provider from petty-traits:
//! - [`InMemoryResourceProvider`]: Pre-populated in-memory storage

mod filesystem;

pub use filesystem::FilesystemResourceProvider;

// Re-export the in-memory provider from petty-traits for convenience
pub use petty_traits::InMemoryResourceProvider;
