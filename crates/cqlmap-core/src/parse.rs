// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Metadata parsers.
//!
//! # Pipeline
//!
//! ```text
//! ClassMeta
//!    │
//!    ▼
//! EntityContext ─── keyspace, table, naming, defaults
//!    │
//!    ├── PropertyParser ──── one field → PropertyDescriptor
//!    │      ├── naming::resolve_column_name
//!    │      └── CodecFactory (+ inference for collections)
//!    │
//!    ├── CompoundKeyParser ── OrderingDialect → ComponentsOrdering
//!    │                        → PartitionComponents / ClusteringComponents
//!    ▼
//! EntityParser ──────────── EntityDescriptor
//! ```
//!
//! Every parser is a pure function of the class metadata and the
//! configuration. The first violated rule aborts the parse.

mod compound;
mod context;
mod entity;
mod ordering;
mod property;

pub use compound::CompoundKeyParser;
pub use context::{EntityContext, PropertyContext, PropertyRole};
pub use entity::EntityParser;
pub use ordering::{
    ComponentsOrdering, ComponentsOrderingParser, DefaultOrderingParser, LegacyOrderingParser,
    OrderedComponent, OrderingDialect
};
pub use property::PropertyParser;
