//! Font descriptors and the keys they are deduplicated by.
//!
//! A descriptor names one font resource: either by the name it was
//! registered under (usually a file path) or, for anonymous byte buffers, by
//! a SHA-256 digest of the content. The optional encoding is part of the
//! identity, so the same file registered under two encodings yields two
//! descriptors.

use crate::error::FontSetError;
use petty_traits::{FontError, FontFormat, FontNames, FontProgram};
use sha2::{Digest, Sha256};
use std::fmt;
use std::hash::{Hash, Hasher};

/// SHA-256 digest of a font buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentDigest([u8; 32]);

impl ContentDigest {
    pub fn of(data: &[u8]) -> Self {
        Self(Sha256::digest(data).into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

/// Where a descriptor's identity comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontIdentity {
    /// A registration name: a file path, or a program's own font name.
    Named(String),
    /// The digest of an anonymous byte buffer.
    ContentHashed(ContentDigest),
}

impl fmt::Display for FontIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontIdentity::Named(name) => f.write_str(name),
            FontIdentity::ContentHashed(digest) => fmt::Display::fmt(digest, f),
        }
    }
}

/// The key descriptors are deduplicated by: identity plus encoding.
///
/// Displays as the identity string immediately followed by the encoding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DescriptorKey {
    identity: FontIdentity,
    encoding: Option<String>,
}

impl DescriptorKey {
    pub fn new(identity: FontIdentity, encoding: Option<&str>) -> Self {
        Self {
            identity,
            encoding: normalize_encoding(encoding),
        }
    }

    pub fn named(name: impl Into<String>, encoding: Option<&str>) -> Self {
        Self::new(FontIdentity::Named(name.into()), encoding)
    }

    pub fn content(data: &[u8], encoding: Option<&str>) -> Self {
        Self::new(FontIdentity::ContentHashed(ContentDigest::of(data)), encoding)
    }

    /// Derives the key for a name and/or byte buffer.
    ///
    /// The name wins when both are present. An empty buffer counts as absent.
    ///
    /// # Errors
    ///
    /// Returns `FontSetError::NoResource` when neither is provided.
    pub fn for_source(
        name: Option<&str>,
        data: Option<&[u8]>,
        encoding: Option<&str>,
    ) -> Result<Self, FontSetError> {
        match (name, data.filter(|d| !d.is_empty())) {
            (Some(name), _) => Ok(Self::named(name, encoding)),
            (None, Some(data)) => Ok(Self::content(data, encoding)),
            (None, None) => Err(FontSetError::NoResource),
        }
    }

    pub fn identity(&self) -> &FontIdentity {
        &self.identity
    }

    pub fn encoding(&self) -> Option<&str> {
        self.encoding.as_deref()
    }
}

impl fmt::Display for DescriptorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.identity, self.encoding.as_deref().unwrap_or(""))
    }
}

/// An empty encoding means "no encoding".
fn normalize_encoding(encoding: Option<&str>) -> Option<String> {
    encoding.filter(|e| !e.is_empty()).map(str::to_string)
}

/// An immutable record identifying one font resource.
///
/// Equality and hashing only consider the [`DescriptorKey`]; the parsed names
/// are carried along for selection and diagnostics.
#[derive(Debug, Clone)]
pub struct FontDescriptor {
    key: DescriptorKey,
    names: FontNames,
    format: FontFormat,
}

impl FontDescriptor {
    pub fn new(key: DescriptorKey, program: &FontProgram) -> Self {
        Self {
            key,
            names: program.names.clone(),
            format: program.format,
        }
    }

    /// Builds a descriptor from a parsed program, identified by the program's
    /// own font name.
    ///
    /// # Errors
    ///
    /// Returns `FontError::MissingName` when the program has no font name.
    pub fn from_program(program: &FontProgram, encoding: Option<&str>) -> Result<Self, FontSetError> {
        let name = program.font_name().trim();
        if name.is_empty() {
            return Err(FontError::MissingName.into());
        }
        Ok(Self::new(DescriptorKey::named(name, encoding), program))
    }

    pub fn key(&self) -> &DescriptorKey {
        &self.key
    }

    pub fn identity(&self) -> &FontIdentity {
        self.key.identity()
    }

    pub fn encoding(&self) -> Option<&str> {
        self.key.encoding()
    }

    pub fn names(&self) -> &FontNames {
        &self.names
    }

    pub fn font_name(&self) -> &str {
        &self.names.font_name
    }

    pub fn format(&self) -> FontFormat {
        self.format
    }
}

impl PartialEq for FontDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for FontDescriptor {}

impl Hash for FontDescriptor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}
