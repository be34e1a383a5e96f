// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `PartitionKey(n)` / `ClusteringColumn(n)` dialect.
//!
//! Partition and clustering orders are numbered independently, each from 1.
//! A `PartitionKey` without an order counts as order 1.

use super::{
    ComponentsOrdering, ComponentsOrderingParser, OrderedComponent, reject_non_positive,
    reject_static, sort_and_validate
};
use crate::{
    descriptor::ClusteringOrder,
    error::{KeyPart, MappingError},
    meta::{AnnotationsExt, ClassMeta}
};

/// Parser for the default dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOrderingParser;

impl ComponentsOrderingParser for DefaultOrderingParser {
    fn extract_components_ordering<'a>(
        &self,
        class: &'a ClassMeta
    ) -> Result<ComponentsOrdering<'a>, MappingError> {
        let mut ordering = ComponentsOrdering::default();

        for field in class.flatten_fields() {
            let annotations = &field.field.annotations;
            if let Some(order) = annotations.partition_key() {
                reject_static(class, &field)?;
                ordering.partition.push(OrderedComponent {
                    field,
                    order: order.unwrap_or(1),
                    clustering_order: ClusteringOrder::Asc
                });
            } else if let Some((order, reversed)) = annotations.clustering_column() {
                reject_static(class, &field)?;
                ordering.clustering.push(OrderedComponent {
                    field,
                    order,
                    clustering_order: ClusteringOrder::from_reversed(reversed)
                });
            }
        }

        if ordering.partition.is_empty() && !ordering.clustering.is_empty() {
            return Err(MappingError::MissingPartitionKey {
                class: class.canonical_name.clone()
            });
        }

        reject_non_positive(class, &ordering.partition)?;
        reject_non_positive(class, &ordering.clustering)?;
        sort_and_validate(class, KeyPart::Partition, &mut ordering.partition, 1)?;
        sort_and_validate(class, KeyPart::Clustering, &mut ordering.clustering, 1)?;
        Ok(ordering)
    }
}
