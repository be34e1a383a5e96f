// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity descriptors.

use super::{
    key::{ClusteringComponent, CompoundKey},
    property::PropertyDescriptor
};
use crate::config::{ConsistencyLevel, InsertStrategy};

/// Primary key structure of an entity.
#[derive(Debug, Clone)]
pub enum IdDescriptor {
    /// Single-column key.
    Simple(PropertyDescriptor),

    /// Multi-column key.
    Compound {
        /// Property holding the embedded key; `None` for keys declared on
        /// the entity itself.
        embedded: Option<PropertyDescriptor>,
        /// Key components.
        key:      CompoundKey
    }
}

impl IdDescriptor {
    /// Whether the key has more than one column.
    #[must_use]
    pub fn is_compound(&self) -> bool {
        matches!(self, Self::Compound { .. })
    }

    /// Compound key components.
    #[must_use]
    pub fn compound_key(&self) -> Option<&CompoundKey> {
        match self {
            Self::Simple(_) => None,
            Self::Compound { key, .. } => Some(key)
        }
    }

    /// Every column-bearing key property, partition first.
    #[must_use]
    pub fn columns(&self) -> Vec<&PropertyDescriptor> {
        match self {
            Self::Simple(property) => vec![property],
            Self::Compound { key, .. } => key.properties().collect()
        }
    }
}

/// Everything known about a mapped table.
#[derive(Debug, Clone)]
pub struct EntityDescriptor {
    pub(crate) class_name:        String,
    pub(crate) keyspace:          String,
    pub(crate) table:             String,
    pub(crate) id:                IdDescriptor,
    pub(crate) properties:        Vec<PropertyDescriptor>,
    pub(crate) read_consistency:  ConsistencyLevel,
    pub(crate) write_consistency: ConsistencyLevel,
    pub(crate) insert_strategy:   InsertStrategy,
    pub(crate) schema_update:     bool,
    pub(crate) description:       Option<String>
}

impl EntityDescriptor {
    /// Canonical name of the entity class.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Keyspace.
    #[must_use]
    pub fn keyspace(&self) -> &str {
        &self.keyspace
    }

    /// Table name.
    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    /// `keyspace.table`.
    #[must_use]
    pub fn qualified_table_name(&self) -> String {
        format!("{}.{}", self.keyspace, self.table)
    }

    /// Primary key.
    #[must_use]
    pub fn id(&self) -> &IdDescriptor {
        &self.id
    }

    /// Non-key properties in field order.
    #[must_use]
    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    /// Property by source name, key components included.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.id
            .columns()
            .into_iter()
            .chain(self.properties.iter())
            .find(|p| p.name() == name)
    }

    /// Every column name, key columns first.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.id
            .columns()
            .into_iter()
            .chain(self.properties.iter())
            .map(PropertyDescriptor::column)
            .collect()
    }

    /// Partition key properties.
    #[must_use]
    pub fn partition_keys(&self) -> Vec<&PropertyDescriptor> {
        match &self.id {
            IdDescriptor::Simple(property) => vec![property],
            IdDescriptor::Compound { key, .. } => key.partition().components().iter().collect()
        }
    }

    /// Clustering components.
    #[must_use]
    pub fn clustering_keys(&self) -> &[ClusteringComponent] {
        match &self.id {
            IdDescriptor::Simple(_) => &[],
            IdDescriptor::Compound { key, .. } => key.clustering().components()
        }
    }

    /// Static columns.
    #[must_use]
    pub fn static_columns(&self) -> Vec<&PropertyDescriptor> {
        self.properties.iter().filter(|p| p.is_static()).collect()
    }

    /// Counter columns.
    #[must_use]
    pub fn counters(&self) -> Vec<&PropertyDescriptor> {
        self.properties.iter().filter(|p| p.is_counter()).collect()
    }

    /// Whether the table holds counters.
    #[must_use]
    pub fn is_counter_table(&self) -> bool {
        self.properties.iter().any(PropertyDescriptor::is_counter)
    }

    /// Default read consistency.
    #[must_use]
    pub fn read_consistency(&self) -> ConsistencyLevel {
        self.read_consistency
    }

    /// Default write consistency.
    #[must_use]
    pub fn write_consistency(&self) -> ConsistencyLevel {
        self.write_consistency
    }

    /// Insert strategy.
    #[must_use]
    pub fn insert_strategy(&self) -> InsertStrategy {
        self.insert_strategy
    }

    /// Whether schema updates are allowed.
    #[must_use]
    pub fn schema_update(&self) -> bool {
        self.schema_update
    }

    /// Doc comment of the entity.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
