// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Immutable parse results.
//!
//! ```text
//! EntityDescriptor
//! ├── keyspace, table, defaults
//! ├── IdDescriptor
//! │   ├── Simple(PropertyDescriptor)
//! │   └── Compound { embedded?, CompoundKey { partition, clustering } }
//! └── properties: Vec<PropertyDescriptor>
//! ```
//!
//! Descriptors are built once by the parsers and never mutated; they are
//! shared behind [`std::sync::Arc`] by the entity cache.

mod entity;
mod key;
mod property;

pub use entity::{EntityDescriptor, IdDescriptor};
pub use key::{ClusteringComponent, ClusteringComponents, ClusteringOrder, CompoundKey, PartitionComponents};
pub use property::{Accessor, Accessors, PropertyDescriptor, PropertyType};
