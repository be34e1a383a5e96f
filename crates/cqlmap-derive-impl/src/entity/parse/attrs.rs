// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Struct-level attributes.
//!
//! # Example
//!
//! ```rust,ignore
//! #[entity(
//!     keyspace = "app",
//!     table = "user_events",
//!     naming = "snake_case",
//!     insert = "not_null_fields",
//!     read_consistency = "LOCAL_QUORUM",
//!     write_consistency = "QUORUM",
//!     accessors
//! )]
//! ```

use darling::FromDeriveInput;
use syn::{Ident, Visibility};

use super::options::{ConsistencyOption, InsertOption, NamingOption};

/// Attributes parsed from `#[entity(...)]`.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity), supports(struct_named))]
pub struct EntityAttrs {
    pub ident: Ident,

    pub vis: Visibility,

    /// Keyspace; the configured keyspace applies when absent.
    #[darling(default)]
    pub keyspace: Option<String>,

    /// Table name; derived from the struct name when absent.
    #[darling(default)]
    pub table: Option<String>,

    #[darling(default)]
    pub naming: Option<NamingOption>,

    #[darling(default)]
    pub insert: Option<InsertOption>,

    #[darling(default)]
    pub read_consistency: Option<ConsistencyOption>,

    #[darling(default)]
    pub write_consistency: Option<ConsistencyOption>,

    /// Generate `get_x`/`set_x` for non-`pub` fields.
    #[darling(default)]
    pub accessors: bool
}

/// Attributes parsed from `#[mapped(...)]`.
///
/// Key structs, parent structs and unit enums derive `Mapped`; only
/// structs take options.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(mapped), supports(struct_named, enum_unit))]
pub struct MappedAttrs {
    pub ident: Ident,

    pub vis: Visibility,

    #[darling(default)]
    pub naming: Option<NamingOption>,

    #[darling(default)]
    pub accessors: bool
}
