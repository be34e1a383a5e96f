// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ## Struct-Level
//!
//! ```rust,ignore
//! #[derive(Entity)]
//! #[entity(
//!     keyspace = "app",                 // Optional: configured keyspace otherwise
//!     table = "user_events",            // Optional: derived from the struct name
//!     naming = "snake_case",            // Optional: "snake_case" | "lower_case" | "case_sensitive"
//!     insert = "not_null_fields",       // Optional: "all_fields" | "not_null_fields"
//!     read_consistency = "LOCAL_ONE",   // Optional
//!     write_consistency = "QUORUM",     // Optional
//!     accessors                         // Optional: get_x/set_x for non-pub fields
//! )]
//! pub struct UserEvent { /* ... */ }
//!
//! #[derive(Mapped, Default)]
//! #[mapped(naming = "snake_case", accessors)]
//! pub struct EventKey { /* ... */ }
//! ```
//!
//! ## Field-Level
//!
//! ```rust,ignore
//! pub struct UserEvent {
//!     #[partition_key]                  // Partition component, order 1
//!     pub user_id: i64,
//!
//!     #[clustering_column(1, reversed)] // Clustering component, descending
//!     pub created_at: DateTime<Utc>,
//!
//!     #[static_column]                  // Shared by the partition
//!     pub owner: String,
//!
//!     #[enumerated(ordinal)]            // Enum as its position; targets map values
//!     pub states: HashMap<String, State>,
//!
//!     #[json]                           // Serialized as JSON text
//!     pub profile: Profile,
//!
//!     #[codec("money")]                 // Custom codec from the registry
//!     pub price: String,
//!
//!     #[transient]                      // Not mapped
//!     pub scratch: String,
//! }
//! ```
//!
//! Key structs use the same markers; `#[order(n)]` selects the legacy
//! dialect, where one numbering is shared by partition and clustering
//! fields.

mod entity;
mod mapped;
mod utils;

use proc_macro::TokenStream;

/// Derive macro describing a table entity.
///
/// Generates `MappedClass` and `MappedType` for a struct with named fields.
/// The class metadata is built on first use and shared afterwards; mapping
/// errors surface when `cqlmap_core` parses it.
///
/// # Example
///
/// ```rust,ignore
/// use cqlmap::{Entity, Mapper, MapperConfig};
///
/// #[derive(Entity)]
/// #[entity(keyspace = "app", naming = "snake_case")]
/// pub struct User {
///     #[id]
///     pub user_id: Uuid,
///     pub display_name: String,
/// }
///
/// let mapper = Mapper::new(MapperConfig::default());
/// let user = mapper.entity::<User>()?;
/// assert_eq!(user.qualified_table_name(), "app.user");
/// ```
#[proc_macro_derive(
    Entity,
    attributes(
        entity,
        parent,
        id,
        embedded_id,
        partition_key,
        clustering_column,
        order,
        column,
        static_column,
        counter,
        index,
        enumerated,
        json,
        codec,
        time_uuid,
        naming,
        consistency,
        transient
    )
)]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive(input)
}

/// Derive macro for key structs, parent structs and unit enums.
///
/// Structs get the same impls as [`Entity`](macro@Entity) without being
/// tables. Unit enums get an enum `MappedType` whose variants, in
/// declaration order, define the ordinal encoding.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Mapped, Default)]
/// pub struct EventKey {
///     #[partition_key]
///     pub user_id: i64,
///     #[clustering_column(1)]
///     pub time: i64,
/// }
///
/// #[derive(Mapped)]
/// pub enum Status {
///     Active,
///     Suspended,
/// }
/// ```
#[proc_macro_derive(
    Mapped,
    attributes(
        mapped,
        parent,
        id,
        embedded_id,
        partition_key,
        clustering_column,
        order,
        column,
        static_column,
        counter,
        index,
        enumerated,
        json,
        codec,
        time_uuid,
        naming,
        consistency,
        transient
    )
)]
pub fn derive_mapped(input: TokenStream) -> TokenStream {
    mapped::derive(input)
}
