// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute option values.
//!
//! Each option parses from its attribute spelling and expands to the
//! matching `cqlmap_core` constant:
//!
//! | Option | Spellings | Expands to |
//! |--------|-----------|------------|
//! | [`NamingOption`] | `snake_case`, `lower_case`, `case_sensitive` | `NamingStrategy` |
//! | [`InsertOption`] | `all_fields`, `not_null_fields` | `InsertStrategy` |
//! | [`ConsistencyOption`] | `ONE`, `LOCAL_QUORUM`, ... | `ConsistencyLevel` |
//! | [`IndexOption`] | `simple`, `collection`, `keys`, `values`, `entries` | `IndexKind` |
//! | [`EncodingOption`] | `name`, `ordinal` | `EnumEncoding` |

use darling::FromMeta;
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

fn normalize(value: &str) -> String {
    value.trim().to_ascii_lowercase().replace('-', "_")
}

/// Column naming strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingOption {
    SnakeCase,
    LowerCase,
    CaseSensitive
}

impl NamingOption {
    pub fn parse(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "snake_case" | "snake" => Some(Self::SnakeCase),
            "lower_case" | "lowercase" | "lower" => Some(Self::LowerCase),
            "case_sensitive" | "sensitive" => Some(Self::CaseSensitive),
            _ => None
        }
    }
}

impl FromMeta for NamingOption {
    fn from_string(value: &str) -> darling::Result<Self> {
        Self::parse(value).ok_or_else(|| darling::Error::unknown_value(value))
    }
}

impl ToTokens for NamingOption {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let variant = match self {
            Self::SnakeCase => quote!(SnakeCase),
            Self::LowerCase => quote!(LowerCase),
            Self::CaseSensitive => quote!(CaseSensitive)
        };
        tokens.extend(quote!(::cqlmap_core::naming::NamingStrategy::#variant));
    }
}

/// Insert strategy of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOption {
    AllFields,
    NotNullFields
}

impl FromMeta for InsertOption {
    fn from_string(value: &str) -> darling::Result<Self> {
        match normalize(value).as_str() {
            "all_fields" | "all" => Ok(Self::AllFields),
            "not_null_fields" | "not_null" => Ok(Self::NotNullFields),
            _ => Err(darling::Error::unknown_value(value))
        }
    }
}

impl ToTokens for InsertOption {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let variant = match self {
            Self::AllFields => quote!(AllFields),
            Self::NotNullFields => quote!(NotNullFields)
        };
        tokens.extend(quote!(::cqlmap_core::config::InsertStrategy::#variant));
    }
}

/// Consistency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyOption {
    Any,
    One,
    Two,
    Three,
    Quorum,
    All,
    LocalQuorum,
    EachQuorum,
    Serial,
    LocalSerial,
    LocalOne
}

impl ConsistencyOption {
    pub fn parse(value: &str) -> Option<Self> {
        let level = match normalize(value).as_str() {
            "any" => Self::Any,
            "one" => Self::One,
            "two" => Self::Two,
            "three" => Self::Three,
            "quorum" => Self::Quorum,
            "all" => Self::All,
            "local_quorum" => Self::LocalQuorum,
            "each_quorum" => Self::EachQuorum,
            "serial" => Self::Serial,
            "local_serial" => Self::LocalSerial,
            "local_one" => Self::LocalOne,
            _ => return None
        };
        Some(level)
    }
}

impl FromMeta for ConsistencyOption {
    fn from_string(value: &str) -> darling::Result<Self> {
        Self::parse(value).ok_or_else(|| darling::Error::unknown_value(value))
    }
}

impl ToTokens for ConsistencyOption {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let variant = match self {
            Self::Any => quote!(Any),
            Self::One => quote!(One),
            Self::Two => quote!(Two),
            Self::Three => quote!(Three),
            Self::Quorum => quote!(Quorum),
            Self::All => quote!(All),
            Self::LocalQuorum => quote!(LocalQuorum),
            Self::EachQuorum => quote!(EachQuorum),
            Self::Serial => quote!(Serial),
            Self::LocalSerial => quote!(LocalSerial),
            Self::LocalOne => quote!(LocalOne)
        };
        tokens.extend(quote!(::cqlmap_core::config::ConsistencyLevel::#variant));
    }
}

/// Secondary index kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexOption {
    #[default]
    Simple,
    Collection,
    MapKey,
    MapValue,
    MapEntry
}

impl IndexOption {
    pub fn parse(value: &str) -> Option<Self> {
        match normalize(value).as_str() {
            "simple" => Some(Self::Simple),
            "collection" => Some(Self::Collection),
            "keys" | "map_key" => Some(Self::MapKey),
            "values" | "map_value" => Some(Self::MapValue),
            "entries" | "map_entry" => Some(Self::MapEntry),
            _ => None
        }
    }
}

impl ToTokens for IndexOption {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let variant = match self {
            Self::Simple => quote!(Simple),
            Self::Collection => quote!(Collection),
            Self::MapKey => quote!(MapKey),
            Self::MapValue => quote!(MapValue),
            Self::MapEntry => quote!(MapEntry)
        };
        tokens.extend(quote!(::cqlmap_core::meta::IndexKind::#variant));
    }
}

/// Enum wire encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EncodingOption {
    #[default]
    Name,
    Ordinal
}

impl ToTokens for EncodingOption {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let variant = match self {
            Self::Name => quote!(Name),
            Self::Ordinal => quote!(Ordinal)
        };
        tokens.extend(quote!(::cqlmap_core::meta::EnumEncoding::#variant));
    }
}
