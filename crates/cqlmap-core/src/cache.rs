// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Process-wide descriptor cache.
//!
//! Descriptors are keyed by the canonical class name. A descriptor is built
//! outside the map and published through the entry API, so a reader never
//! observes a half-built descriptor. When two callers race on the same
//! class, both parse, the first to publish wins and the other receives the
//! published value.

use std::sync::Arc;

use dashmap::{DashMap, mapref::entry::Entry};
use tracing::{info, warn};

use crate::{config::MapperConfig, descriptor::EntityDescriptor, error::Result, meta::ClassMeta, parse::EntityParser};

/// Concurrent map from class identity to its parsed descriptor.
#[derive(Debug, Default)]
pub struct EntityCache {
    entries: DashMap<String, Arc<EntityDescriptor>>
}

impl EntityCache {
    /// Empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached descriptor of the class named `canonical_name`.
    #[must_use]
    pub fn get(&self, canonical_name: &str) -> Option<Arc<EntityDescriptor>> {
        self.entries
            .get(canonical_name)
            .map(|entry| Arc::clone(entry.value()))
    }

    /// Whether a descriptor is cached for `canonical_name`.
    #[must_use]
    pub fn contains(&self, canonical_name: &str) -> bool {
        self.entries.contains_key(canonical_name)
    }

    /// Number of cached descriptors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached descriptor of `class`, parsing and publishing it on a miss.
    ///
    /// Parse failures are not cached.
    ///
    /// # Errors
    ///
    /// Returns the parse error of the class.
    pub fn get_or_parse(&self, class: &ClassMeta, config: &MapperConfig) -> Result<Arc<EntityDescriptor>> {
        if let Some(descriptor) = self.get(&class.canonical_name) {
            return Ok(descriptor);
        }

        let parsed = Arc::new(EntityParser::parse(class, config)?);

        match self.entries.entry(class.canonical_name.clone()) {
            Entry::Occupied(entry) => {
                warn!(class = %class.canonical_name, "entity parsed concurrently, keeping published descriptor");
                Ok(Arc::clone(entry.get()))
            }
            Entry::Vacant(entry) => {
                info!(
                    class = %class.canonical_name,
                    table = %parsed.qualified_table_name(),
                    "entity descriptor published"
                );
                entry.insert(Arc::clone(&parsed));
                Ok(parsed)
            }
        }
    }
}
