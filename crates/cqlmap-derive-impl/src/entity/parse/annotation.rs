// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parsed annotations and their expansion to `cqlmap_core::meta::Annotation`.

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

use super::options::{ConsistencyOption, EncodingOption, IndexOption, InsertOption, NamingOption};

/// One annotation read from a derive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationDef {
    Entity {
        keyspace: Option<String>,
        table:    Option<String>
    },
    Naming(NamingOption),
    Insert(InsertOption),
    Consistency {
        read:  Option<ConsistencyOption>,
        write: Option<ConsistencyOption>
    },
    Id,
    EmbeddedId,
    PartitionKey(Option<i32>),
    ClusteringColumn {
        order:    i32,
        reversed: bool
    },
    Order {
        value:    i32,
        reversed: bool
    },
    Column(Option<String>),
    Static,
    Counter,
    Index(IndexOption),
    Enumerated(EncodingOption),
    Json,
    Codec(String),
    TimeUuid
}

fn optional<T: ToTokens>(value: Option<&T>) -> TokenStream {
    match value {
        Some(value) => quote!(::core::option::Option::Some(#value)),
        None => quote!(::core::option::Option::None)
    }
}

fn optional_string(value: Option<&String>) -> TokenStream {
    match value {
        Some(value) => quote!(::core::option::Option::Some(::std::string::String::from(#value))),
        None => quote!(::core::option::Option::None)
    }
}

impl ToTokens for AnnotationDef {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let body = match self {
            Self::Entity { keyspace, table } => {
                let keyspace = optional_string(keyspace.as_ref());
                let table = optional_string(table.as_ref());
                quote!(Entity { keyspace: #keyspace, table: #table })
            }
            Self::Naming(naming) => quote!(Naming(#naming)),
            Self::Insert(insert) => quote!(Insert(#insert)),
            Self::Consistency { read, write } => {
                let read = optional(read.as_ref());
                let write = optional(write.as_ref());
                quote!(Consistency { read: #read, write: #write })
            }
            Self::Id => quote!(Id),
            Self::EmbeddedId => quote!(EmbeddedId),
            Self::PartitionKey(order) => {
                let order = optional(order.as_ref());
                quote!(PartitionKey { order: #order })
            }
            Self::ClusteringColumn { order, reversed } => {
                quote!(ClusteringColumn { order: #order, reversed: #reversed })
            }
            Self::Order { value, reversed } => quote!(Order { value: #value, reversed: #reversed }),
            Self::Column(name) => {
                let name = optional_string(name.as_ref());
                quote!(Column { name: #name })
            }
            Self::Static => quote!(Static),
            Self::Counter => quote!(Counter),
            Self::Index(kind) => quote!(Index(#kind)),
            Self::Enumerated(encoding) => quote!(Enumerated(#encoding)),
            Self::Json => quote!(Json),
            Self::Codec(path) => quote!(Codec { path: ::std::string::String::from(#path) }),
            Self::TimeUuid => quote!(TimeUuid)
        };
        tokens.extend(quote!(::cqlmap_core::meta::Annotation::#body));
    }
}
