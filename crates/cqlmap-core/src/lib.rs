// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity metadata parsing and codec derivation for wide-column tables.
//!
//! This crate turns annotated class metadata into immutable
//! [`EntityDescriptor`]s: keyspace and table, primary key structure, column
//! names, consistency levels and one bidirectional [`Codec`] per property.
//! It is the runtime half of `cqlmap`; the derive macros produce the
//! [`ClassMeta`](meta::ClassMeta) it consumes, but metadata can also be built
//! by hand.
//!
//! # Overview
//!
//! - [`meta`] — Class, field and type metadata, annotations
//! - [`naming`] — Naming strategies and column name resolution
//! - [`codec`] — Codecs, the codec factory and custom codec registry
//! - [`inference`] — Collection element type inference
//! - [`parse`] — Property, key ordering, compound key and entity parsers
//! - [`descriptor`] — Parsed descriptors
//! - [`cache`] / [`Mapper`] — Process-wide descriptor cache
//! - [`explorer`] — Entity discovery by package
//! - [`config`] — Mapper configuration
//! - [`value`] — Dynamic values transcoded by codecs
//!
//! # Example
//!
//! ```rust
//! use cqlmap_core::{
//!     MapperConfig,
//!     meta::{Annotation, ClassMeta, FieldMeta, NativeType, TypeRef},
//!     naming::NamingStrategy,
//!     parse::EntityParser
//! };
//!
//! let class = ClassMeta::new("app::UserEvent")
//!     .annotated(Annotation::Naming(NamingStrategy::SnakeCase))
//!     .field(
//!         FieldMeta::new("userId", TypeRef::native(NativeType::BigInt))
//!             .annotated(Annotation::PartitionKey { order: None })
//!     )
//!     .field(
//!         FieldMeta::new("createdAt", TypeRef::native(NativeType::Timestamp))
//!             .annotated(Annotation::ClusteringColumn { order: 1, reversed: true })
//!     );
//!
//! let config = MapperConfig::builder().keyspace("app").build();
//! let entity = EntityParser::parse(&class, &config).unwrap();
//!
//! assert_eq!(entity.qualified_table_name(), "app.user_event");
//! assert_eq!(entity.column_names(), ["user_id", "created_at"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod codec;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod explorer;
pub mod inference;
pub mod mapper;
pub mod meta;
pub mod naming;
pub mod parse;
pub mod prelude;
pub mod value;

pub use cache::EntityCache;
pub use codec::{Codec, CodecRegistry, CustomCodec};
pub use config::{ConsistencyLevel, InsertStrategy, MapperConfig, MapperSettings, TableOverride};
pub use descriptor::{EntityDescriptor, IdDescriptor, PropertyDescriptor, PropertyType};
pub use error::{CodecError, Error, InstantiationError, MappingError, Result};
pub use explorer::EntityExplorer;
pub use mapper::Mapper;
pub use value::{Counter, Decimal, Value};
