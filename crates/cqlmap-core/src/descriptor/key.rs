// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Compound key components.

use std::fmt;

use super::property::PropertyDescriptor;
use crate::meta::TypeRef;

/// Sort direction of a clustering column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClusteringOrder {
    /// Ascending.
    #[default]
    Asc,
    /// Descending.
    Desc
}

impl ClusteringOrder {
    /// Order for a `reversed` flag.
    #[must_use]
    pub const fn from_reversed(reversed: bool) -> Self {
        if reversed { Self::Desc } else { Self::Asc }
    }
}

impl fmt::Display for ClusteringOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Asc => f.write_str("ASC"),
            Self::Desc => f.write_str("DESC")
        }
    }
}

/// Partition key components in key order.
#[derive(Debug, Clone, Default)]
pub struct PartitionComponents {
    pub(crate) components: Vec<PropertyDescriptor>
}

impl PartitionComponents {
    /// Components in key order.
    #[must_use]
    pub fn components(&self) -> &[PropertyDescriptor] {
        &self.components
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether there is no component.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Property names in key order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.components.iter().map(PropertyDescriptor::name).collect()
    }

    /// Column names in key order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.components.iter().map(PropertyDescriptor::column).collect()
    }

    /// Declared types in key order.
    #[must_use]
    pub fn types(&self) -> Vec<&TypeRef> {
        self.components
            .iter()
            .map(PropertyDescriptor::declared_type)
            .collect()
    }
}

/// A clustering column with its sort direction.
#[derive(Debug, Clone)]
pub struct ClusteringComponent {
    /// Component property.
    pub property: PropertyDescriptor,
    /// Sort direction.
    pub order:    ClusteringOrder
}

/// Clustering components in key order.
#[derive(Debug, Clone, Default)]
pub struct ClusteringComponents {
    pub(crate) components: Vec<ClusteringComponent>
}

impl ClusteringComponents {
    /// Components in key order.
    #[must_use]
    pub fn components(&self) -> &[ClusteringComponent] {
        &self.components
    }

    /// Number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether there is no component.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Property names in key order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.property.name()).collect()
    }

    /// Column names in key order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.property.column()).collect()
    }

    /// Declared types in key order.
    #[must_use]
    pub fn types(&self) -> Vec<&TypeRef> {
        self.components
            .iter()
            .map(|c| c.property.declared_type())
            .collect()
    }

    /// Sort directions in key order.
    #[must_use]
    pub fn orders(&self) -> Vec<ClusteringOrder> {
        self.components.iter().map(|c| c.order).collect()
    }

    /// `(column, direction)` pairs in key order.
    #[must_use]
    pub fn clustering_order(&self) -> Vec<(&str, ClusteringOrder)> {
        self.components
            .iter()
            .map(|c| (c.property.column(), c.order))
            .collect()
    }
}

/// A multi-column primary key.
#[derive(Debug, Clone)]
pub struct CompoundKey {
    pub(crate) key_class:  Option<String>,
    pub(crate) partition:  PartitionComponents,
    pub(crate) clustering: ClusteringComponents
}

impl CompoundKey {
    /// Canonical name of the embedded key class; `None` when the key fields
    /// are declared on the entity itself.
    #[must_use]
    pub fn key_class(&self) -> Option<&str> {
        self.key_class.as_deref()
    }

    /// Partition components.
    #[must_use]
    pub fn partition(&self) -> &PartitionComponents {
        &self.partition
    }

    /// Clustering components.
    #[must_use]
    pub fn clustering(&self) -> &ClusteringComponents {
        &self.clustering
    }

    /// Total number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.partition.len() + self.clustering.len()
    }

    /// Whether the key has no component.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every component property, partition first.
    pub fn properties(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.partition
            .components
            .iter()
            .chain(self.clustering.components.iter().map(|c| &c.property))
    }
}
