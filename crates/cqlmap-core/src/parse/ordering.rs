// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Compound key component ordering.
//!
//! Two annotation dialects describe key order:
//!
//! | Dialect | Partition | Clustering |
//! |---------|-----------|------------|
//! | [`OrderingDialect::Default`] | `PartitionKey(n)` | `ClusteringColumn(n)` |
//! | [`OrderingDialect::Legacy`] | `Order(n)` + `PartitionKey` marker | `Order(n)` |
//!
//! The dialect is chosen once per class and the two are never merged.

mod default;
mod legacy;

use std::collections::BTreeMap;

pub use default::DefaultOrderingParser;
pub use legacy::LegacyOrderingParser;

use crate::{
    descriptor::ClusteringOrder,
    error::{KeyPart, MappingError},
    meta::{AnnotationsExt, ClassMeta, DeclaredField},
    naming::{NamingStrategy, resolve_column_name}
};

/// A key field with its declared position.
#[derive(Debug, Clone, Copy)]
pub struct OrderedComponent<'a> {
    /// The field and its declaring class.
    pub field:            DeclaredField<'a>,
    /// Declared order value.
    pub order:            i32,
    /// Sort direction; always ascending for partition components.
    pub clustering_order: ClusteringOrder
}

impl OrderedComponent<'_> {
    /// Field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.field.field.name
    }
}

/// Ordered partition and clustering fields of a key.
#[derive(Debug, Clone, Default)]
pub struct ComponentsOrdering<'a> {
    /// Partition fields in key order.
    pub partition:  Vec<OrderedComponent<'a>>,
    /// Clustering fields in key order.
    pub clustering: Vec<OrderedComponent<'a>>
}

impl<'a> ComponentsOrdering<'a> {
    /// Total number of components.
    #[must_use]
    pub fn len(&self) -> usize {
        self.partition.len() + self.clustering.len()
    }

    /// Whether no key field was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.partition.is_empty() && self.clustering.is_empty()
    }

    /// Merged position, starting at 1 with the partition, to field.
    #[must_use]
    pub fn positions(&self) -> BTreeMap<usize, DeclaredField<'a>> {
        self.partition
            .iter()
            .chain(self.clustering.iter())
            .enumerate()
            .map(|(index, component)| (index + 1, component.field))
            .collect()
    }
}

/// Extraction of key components from a class.
pub trait ComponentsOrderingParser {
    /// Ordered partition and clustering fields of `class`, its ancestors
    /// included.
    ///
    /// # Errors
    ///
    /// Returns a mapping error when an order is invalid, duplicated or
    /// leaves a gap, or when a key field is static.
    fn extract_components_ordering<'a>(
        &self,
        class: &'a ClassMeta
    ) -> Result<ComponentsOrdering<'a>, MappingError>;

    /// Clustering column names with their sort direction, in key order.
    ///
    /// # Errors
    ///
    /// Same as [`ComponentsOrderingParser::extract_components_ordering`].
    fn extract_clustering_order(
        &self,
        class: &ClassMeta,
        naming: NamingStrategy
    ) -> Result<Vec<(String, ClusteringOrder)>, MappingError> {
        let ordering = self.extract_components_ordering(class)?;
        Ok(ordering
            .clustering
            .iter()
            .map(|component| {
                let field = component.field.field;
                let naming = field.annotations.naming().unwrap_or(naming);
                let column = resolve_column_name(field.annotations.column_name(), &field.name, naming);
                (column, component.clustering_order)
            })
            .collect())
    }
}

/// Ordering dialect of a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderingDialect {
    /// `PartitionKey(n)` / `ClusteringColumn(n)`.
    Default,
    /// `Order(n)` with a `PartitionKey` marker.
    Legacy
}

impl OrderingDialect {
    /// Select the dialect of `class` from the annotations of its fields.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::MixedAnnotations`] when `Order` appears
    /// together with `ClusteringColumn` or an ordered `PartitionKey`.
    pub fn determine(class: &ClassMeta) -> Result<Self, MappingError> {
        let mut legacy = false;
        let mut modern = false;
        for declared in class.flatten_fields() {
            let annotations = &declared.field.annotations;
            legacy |= annotations.order().is_some();
            modern |= annotations.clustering_column().is_some()
                || matches!(annotations.partition_key(), Some(Some(_)));
        }

        match (legacy, modern) {
            (true, true) => Err(MappingError::MixedAnnotations {
                class: class.canonical_name.clone()
            }),
            (true, false) => Ok(Self::Legacy),
            _ => Ok(Self::Default)
        }
    }

    /// See [`ComponentsOrderingParser::extract_components_ordering`].
    ///
    /// # Errors
    ///
    /// Fails like the dialect's parser.
    pub fn extract_components_ordering<'a>(
        &self,
        class: &'a ClassMeta
    ) -> Result<ComponentsOrdering<'a>, MappingError> {
        match self {
            Self::Default => DefaultOrderingParser.extract_components_ordering(class),
            Self::Legacy => LegacyOrderingParser.extract_components_ordering(class)
        }
    }

    /// See [`ComponentsOrderingParser::extract_clustering_order`].
    ///
    /// # Errors
    ///
    /// Fails like the dialect's parser.
    pub fn extract_clustering_order(
        &self,
        class: &ClassMeta,
        naming: NamingStrategy
    ) -> Result<Vec<(String, ClusteringOrder)>, MappingError> {
        match self {
            Self::Default => DefaultOrderingParser.extract_clustering_order(class, naming),
            Self::Legacy => LegacyOrderingParser.extract_clustering_order(class, naming)
        }
    }
}

pub(super) fn reject_static(class: &ClassMeta, declared: &DeclaredField<'_>) -> Result<(), MappingError> {
    if declared.field.annotations.is_static() {
        return Err(MappingError::StaticKeyComponent {
            class: class.canonical_name.clone(),
            field: declared.field.name.clone()
        });
    }
    Ok(())
}

fn reject_non_positive(class: &ClassMeta, components: &[OrderedComponent<'_>]) -> Result<(), MappingError> {
    match components.iter().find(|c| c.order < 1) {
        Some(component) => Err(MappingError::InvalidOrder {
            class: class.canonical_name.clone(),
            field: component.name().to_string(),
            order: component.order
        }),
        None => Ok(())
    }
}

/// Sort `components` and check that their orders run from `start` without
/// duplicates or gaps.
fn sort_and_validate(
    class: &ClassMeta,
    part: KeyPart,
    components: &mut [OrderedComponent<'_>],
    start: i32
) -> Result<(), MappingError> {
    components.sort_by_key(|c| c.order);

    if let Some(pair) = components.windows(2).find(|w| w[0].order == w[1].order) {
        return Err(MappingError::DuplicateOrder {
            class:  class.canonical_name.clone(),
            part,
            order:  pair[0].order,
            first:  pair[0].name().to_string(),
            second: pair[1].name().to_string()
        });
    }

    for (expected, component) in (start..).zip(components.iter()) {
        if component.order != expected {
            return Err(MappingError::OrderingGap {
                class: class.canonical_name.clone(),
                part,
                expected,
                found: component.order
            });
        }
    }
    Ok(())
}
