// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `Order(n)` dialect.
//!
//! One numbering is shared by the whole key: partition fields take
//! `1..=p` and clustering fields continue at `p + 1`. Partition fields carry
//! a `PartitionKey` marker; without any marker the field ordered 1 is the
//! partition key.

use super::{
    ComponentsOrdering, ComponentsOrderingParser, OrderedComponent, reject_non_positive,
    reject_static, sort_and_validate
};
use crate::{
    descriptor::ClusteringOrder,
    error::{KeyPart, MappingError},
    meta::{AnnotationsExt, ClassMeta}
};

/// Parser for the legacy dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyOrderingParser;

impl ComponentsOrderingParser for LegacyOrderingParser {
    fn extract_components_ordering<'a>(
        &self,
        class: &'a ClassMeta
    ) -> Result<ComponentsOrdering<'a>, MappingError> {
        let mut marked = Vec::new();
        let mut unmarked = Vec::new();

        for field in class.flatten_fields() {
            let annotations = &field.field.annotations;
            let is_partition = annotations.partition_key().is_some();
            let Some((order, reversed)) = annotations.order() else {
                if is_partition {
                    return Err(MappingError::MissingOrder {
                        class: class.canonical_name.clone(),
                        field: field.field.name.clone()
                    });
                }
                continue;
            };
            reject_static(class, &field)?;

            let component = OrderedComponent {
                field,
                order,
                clustering_order: ClusteringOrder::from_reversed(reversed)
            };
            if is_partition {
                marked.push(component);
            } else {
                unmarked.push(component);
            }
        }

        reject_non_positive(class, &marked)?;
        reject_non_positive(class, &unmarked)?;

        let (mut partition, mut clustering) = if marked.is_empty() {
            unmarked.into_iter().partition(|c: &OrderedComponent<'_>| c.order == 1)
        } else {
            (marked, unmarked)
        };

        if partition.is_empty()
            && let Some(first) = clustering.iter().min_by_key(|c| c.order)
        {
            return Err(MappingError::OrderingGap {
                class:    class.canonical_name.clone(),
                part:     KeyPart::Partition,
                expected: 1,
                found:    first.order
            });
        }

        for component in &mut partition {
            component.clustering_order = ClusteringOrder::Asc;
        }

        sort_and_validate(class, KeyPart::Partition, &mut partition, 1)?;
        let next = i32::try_from(partition.len()).map_or(i32::MAX, |p| p + 1);
        sort_and_validate(class, KeyPart::Clustering, &mut clustering, next)?;

        Ok(ComponentsOrdering {
            partition,
            clustering
        })
    }
}
