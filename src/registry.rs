//! The per-session font registry.
//!
//! A `FontSet` is the set of fonts one layout session can choose from. It
//! resolves every registration through the shared [`ResourceCache`], keeps
//! the resulting descriptors in registration order, and owns the selector
//! cache derived from them.

use crate::cache::ResourceCache;
use crate::config::FontSetConfig;
use crate::descriptor::{DescriptorKey, FontDescriptor};
use crate::error::FontSetError;
use crate::parser::FontParser;
use crate::selector::{FontSelector, FontSelectorKey, SelectorCache};
use indexmap::IndexSet;
use petty_resource::FilesystemResourceProvider;
use petty_traits::{FontProgram, FontProgramParser, ResourceProvider, SharedFontData};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a `FontSet`.
pub struct FontSetBuilder {
    cache: Option<Arc<ResourceCache>>,
    parser: Option<Arc<dyn FontProgramParser>>,
    resources: Option<Arc<dyn ResourceProvider>>,
    config: FontSetConfig,
}

impl Default for FontSetBuilder {
    fn default() -> Self {
        Self {
            cache: None,
            parser: None,
            resources: None,
            config: FontSetConfig::default(),
        }
    }
}

impl FontSetBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    /// Shares descriptor deduplication with every other `FontSet` built on the
    /// same cache. Without this, the font set gets a private cache.
    pub fn with_cache(mut self, cache: Arc<ResourceCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Replaces the default [`FontParser`].
    pub fn with_parser(mut self, parser: Arc<dyn FontProgramParser>) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Replaces the default [`FilesystemResourceProvider`].
    pub fn with_resource_provider(mut self, resources: Arc<dyn ResourceProvider>) -> Self {
        self.resources = Some(resources);
        self
    }

    pub fn with_config(mut self, config: FontSetConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> FontSet {
        FontSet {
            fonts: IndexSet::new(),
            programs: HashMap::new(),
            selector_cache: SelectorCache::new(),
            cache: self.cache.unwrap_or_default(),
            parser: self.parser.unwrap_or_else(|| Arc::new(FontParser::new())),
            resources: self
                .resources
                .unwrap_or_else(|| Arc::new(FilesystemResourceProvider::new())),
            config: self.config,
        }
    }
}

/// One session's registered fonts.
///
/// Registration never removes anything. Every successful registration clears
/// the selector cache, because any cached selection may now be missing the
/// font that was just added.
///
/// A `FontSet` is not synchronized; share it between threads behind a
/// `Mutex` so that a registration and its cache invalidation are observed
/// together.
#[derive(Debug)]
pub struct FontSet {
    fonts: IndexSet<Arc<FontDescriptor>>,
    /// Programs registered already parsed, by their descriptor.
    programs: HashMap<Arc<FontDescriptor>, Arc<FontProgram>>,
    selector_cache: SelectorCache,
    pub(crate) cache: Arc<ResourceCache>,
    parser: Arc<dyn FontProgramParser>,
    pub(crate) resources: Arc<dyn ResourceProvider>,
    pub(crate) config: FontSetConfig,
}

impl Default for FontSet {
    fn default() -> Self {
        Self::new()
    }
}

impl FontSet {
    /// Creates an empty font set with a private cache, reading from the
    /// local filesystem.
    pub fn new() -> Self {
        FontSetBuilder::new().build()
    }

    pub fn builder() -> FontSetBuilder {
        FontSetBuilder::new()
    }

    /// Creates an empty font set deduplicating through `cache`.
    pub fn with_cache(cache: Arc<ResourceCache>) -> Self {
        FontSetBuilder::new().with_cache(cache).build()
    }

    /// Registers an already parsed font program, identified by its own font
    /// name. The program is kept and can be looked up with
    /// [`font_program`](Self::font_program).
    ///
    /// # Errors
    ///
    /// Returns `FontSetError::NoResource` without a program, and
    /// `FontError::MissingName` for a program with no font name to identify
    /// it by.
    pub fn try_add_font_program(
        &mut self,
        program: Option<Arc<FontProgram>>,
        encoding: Option<&str>,
    ) -> Result<Arc<FontDescriptor>, FontSetError> {
        let program = program.ok_or(FontSetError::NoResource)?;
        let descriptor = self.insert(Arc::new(FontDescriptor::from_program(&program, encoding)?));
        self.programs.insert(descriptor.clone(), program);
        Ok(descriptor)
    }

    /// Registers a font file by path.
    ///
    /// The path string is the font's identity: registering the same path and
    /// encoding again, from any font set sharing the cache, resolves to the
    /// same descriptor without reading the file again.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a usable font.
    pub fn try_add_font_file(
        &mut self,
        path: impl AsRef<Path>,
        encoding: Option<&str>,
    ) -> Result<Arc<FontDescriptor>, FontSetError> {
        let path = path.as_ref();
        let key = DescriptorKey::named(path.to_string_lossy(), encoding);
        self.register(key, |resources| Ok(resources.load(path)?))
    }

    /// Registers an anonymous font buffer, identified by a digest of its
    /// content.
    ///
    /// # Errors
    ///
    /// Returns `FontSetError::NoResource` for an empty buffer, or an error if
    /// the data is not a usable font.
    pub fn try_add_font_data(
        &mut self,
        data: &[u8],
        encoding: Option<&str>,
    ) -> Result<Arc<FontDescriptor>, FontSetError> {
        if data.is_empty() {
            return Err(FontSetError::NoResource);
        }
        let key = DescriptorKey::content(data, encoding);
        self.register(key, |_| Ok(Arc::new(data.to_vec())))
    }

    /// Registers a font by name and/or content.
    ///
    /// With a name, the name is the identity; the font is parsed from `data`
    /// when given, otherwise read from the path `name`. Without a name, the
    /// content digest is the identity.
    ///
    /// # Errors
    ///
    /// Returns `FontSetError::NoResource` when neither is provided.
    pub fn try_add_font_source(
        &mut self,
        name: Option<&str>,
        data: Option<&[u8]>,
        encoding: Option<&str>,
    ) -> Result<Arc<FontDescriptor>, FontSetError> {
        let key = DescriptorKey::for_source(name, data, encoding)?;
        let data = data.filter(|d| !d.is_empty());
        self.register(key, |resources| match (data, name) {
            (Some(data), _) => Ok(Arc::new(data.to_vec())),
            (None, Some(name)) => Ok(resources.load(Path::new(name))?),
            (None, None) => Err(FontSetError::NoResource),
        })
    }

    /// Like [`try_add_font_program`](Self::try_add_font_program), reporting
    /// only success.
    pub fn add_font_program(&mut self, program: Option<Arc<FontProgram>>, encoding: Option<&str>) -> bool {
        log_outcome(self.try_add_font_program(program, encoding))
    }

    /// Like [`try_add_font_file`](Self::try_add_font_file), reporting only
    /// success.
    pub fn add_font_file(&mut self, path: impl AsRef<Path>, encoding: Option<&str>) -> bool {
        log_outcome(self.try_add_font_file(path, encoding))
    }

    /// Like [`try_add_font_data`](Self::try_add_font_data), reporting only
    /// success.
    pub fn add_font_data(&mut self, data: &[u8], encoding: Option<&str>) -> bool {
        log_outcome(self.try_add_font_data(data, encoding))
    }

    /// Like [`try_add_font_source`](Self::try_add_font_source), reporting
    /// only success.
    pub fn add_font_source(&mut self, name: Option<&str>, data: Option<&[u8]>, encoding: Option<&str>) -> bool {
        log_outcome(self.try_add_font_source(name, data, encoding))
    }

    /// Resolves `key` through the shared cache, loading and parsing the
    /// resource only on a miss, and adds the result to this set.
    fn register<F>(&mut self, key: DescriptorKey, load: F) -> Result<Arc<FontDescriptor>, FontSetError>
    where
        F: FnOnce(&dyn ResourceProvider) -> Result<SharedFontData, FontSetError>,
    {
        let resources = self.resources.as_ref();
        let parser = self.parser.as_ref();
        let descriptor = self.cache.get_or_create(&key, || {
            let data = load(resources)?;
            let program = parser.parse(data)?;
            log::debug!(
                "Parsed '{}' as {} ({:?}) with {}",
                key,
                program.font_name(),
                program.format,
                parser.name()
            );
            Ok(FontDescriptor::new(key.clone(), &program))
        })?;
        Ok(self.insert(descriptor))
    }

    /// Adds a descriptor (keeping an equal one already present) and drops
    /// every cached selection.
    fn insert(&mut self, descriptor: Arc<FontDescriptor>) -> Arc<FontDescriptor> {
        let (index, added) = self.fonts.insert_full(descriptor);
        self.selector_cache.clear();

        let stored = self.fonts[index].clone();
        if added {
            log::debug!("Registered font '{}'. Font set now has {} fonts", stored.key(), self.fonts.len());
        } else {
            log::debug!("Font '{}' already registered", stored.key());
        }
        stored
    }

    /// Returns the fonts that best match `key`, best first.
    ///
    /// Results are cached until the next registration.
    pub fn select(&mut self, key: &FontSelectorKey) -> Arc<FontSelector> {
        let fonts = &self.fonts;
        self.selector_cache
            .get_or_insert_with(key, || FontSelector::resolve(key, fonts))
    }

    /// All registered fonts, in registration order.
    pub fn fonts(&self) -> &IndexSet<Arc<FontDescriptor>> {
        &self.fonts
    }

    /// Programs registered through [`add_font_program`](Self::add_font_program).
    pub fn font_programs(&self) -> &HashMap<Arc<FontDescriptor>, Arc<FontProgram>> {
        &self.programs
    }

    pub fn font_program(&self, descriptor: &FontDescriptor) -> Option<&Arc<FontProgram>> {
        self.programs.get(descriptor)
    }

    pub fn selector_cache(&self) -> &SelectorCache {
        &self.selector_cache
    }

    pub fn resource_cache(&self) -> &Arc<ResourceCache> {
        &self.cache
    }

    pub fn config(&self) -> &FontSetConfig {
        &self.config
    }

    pub fn contains(&self, descriptor: &FontDescriptor) -> bool {
        self.fonts.contains(descriptor)
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

fn log_outcome(result: Result<Arc<FontDescriptor>, FontSetError>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            log::warn!("Font registration failed: {}", e);
            false
        }
    }
}
