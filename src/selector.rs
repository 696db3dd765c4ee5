//! Font selection queries and the per-registry selector cache.
//!
//! A selector is the ranked list of registered fonts answering one query.
//! Selectors are derived from the registry's font set, so the cache holding
//! them is only valid until the next registration and is cleared wholesale
//! whenever a font is added.

use crate::descriptor::FontDescriptor;
use petty_style::{FontStyle, FontWeight};
use std::collections::HashMap;
use std::sync::Arc;

/// A font selection query: candidate families in order of preference plus
/// the wanted weight and style.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FontSelectorKey {
    families: Vec<String>,
    weight: FontWeight,
    style: FontStyle,
}

impl FontSelectorKey {
    /// Family names are compared case-insensitively; blank entries are dropped.
    pub fn new<I, S>(families: I, weight: FontWeight, style: FontStyle) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            families: families
                .into_iter()
                .map(|f| f.as_ref().trim().to_lowercase())
                .filter(|f| !f.is_empty())
                .collect(),
            weight,
            style,
        }
    }

    pub fn family(family: &str) -> Self {
        Self::new([family], FontWeight::Regular, FontStyle::Normal)
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn families(&self) -> &[String] {
        &self.families
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }
}

/// Registered fonts matching a [`FontSelectorKey`], best match first.
#[derive(Debug, Clone, Default)]
pub struct FontSelector {
    fonts: Vec<Arc<FontDescriptor>>,
}

impl FontSelector {
    /// Ranks `candidates` against `key`.
    ///
    /// Fonts not named by any requested family are left out. The rest are
    /// ordered by family preference, then style, then weight distance; the
    /// sort is stable, so ties keep registration order.
    pub fn resolve<'a, I>(key: &FontSelectorKey, candidates: I) -> Self
    where
        I: IntoIterator<Item = &'a Arc<FontDescriptor>>,
    {
        let mut ranked: Vec<((usize, u8, u16), Arc<FontDescriptor>)> = candidates
            .into_iter()
            .filter_map(|descriptor| {
                let names = descriptor.names();
                let family_rank = key
                    .families
                    .iter()
                    .position(|family| names.matches_family(family))?;
                let style_rank = style_rank(key.style, names.style);
                let weight_rank = key.weight.distance(&names.weight);
                Some(((family_rank, style_rank, weight_rank), descriptor.clone()))
            })
            .collect();

        ranked.sort_by_key(|(rank, _)| *rank);

        Self {
            fonts: ranked.into_iter().map(|(_, descriptor)| descriptor).collect(),
        }
    }

    pub fn best_match(&self) -> Option<&Arc<FontDescriptor>> {
        self.fonts.first()
    }

    pub fn fonts(&self) -> &[Arc<FontDescriptor>] {
        &self.fonts
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

fn style_rank(wanted: FontStyle, actual: FontStyle) -> u8 {
    if wanted == actual {
        0
    } else if wanted.is_slanted() && actual.is_slanted() {
        1
    } else {
        2
    }
}

/// Query → selector map owned by one registry.
#[derive(Debug, Default)]
pub struct SelectorCache {
    entries: HashMap<FontSelectorKey, Arc<FontSelector>>,
}

impl SelectorCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &FontSelectorKey) -> Option<Arc<FontSelector>> {
        self.entries.get(key).cloned()
    }

    pub fn insert(&mut self, key: FontSelectorKey, selector: Arc<FontSelector>) {
        self.entries.insert(key, selector);
    }

    /// Plain lookup with insert-on-miss.
    pub fn get_or_insert_with<F>(&mut self, key: &FontSelectorKey, resolve: F) -> Arc<FontSelector>
    where
        F: FnOnce() -> FontSelector,
    {
        self.entries
            .entry(key.clone())
            .or_insert_with(|| Arc::new(resolve()))
            .clone()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
