// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parsing of derive input into a class definition.
//!
//! # Module Structure
//!
//! ```text
//! parse/
//! ├── attrs.rs       — #[entity(...)] and #[mapped(...)] via darling
//! ├── annotation.rs  — AnnotationDef and its expansion
//! ├── field.rs       — FieldDef and field markers
//! └── options.rs     — Option values (naming, consistency, ...)
//! ```

mod annotation;
mod attrs;
mod field;
mod options;

use darling::FromDeriveInput;
use syn::{DeriveInput, Ident, Visibility};

pub use self::{
    annotation::AnnotationDef,
    attrs::MappedAttrs,
    field::{FieldDef, TypeTarget}
};
use self::attrs::EntityAttrs;
use crate::utils::docs::extract_doc_comments;

/// A struct described as class metadata.
#[derive(Debug)]
pub struct ClassDef {
    pub ident: Ident,

    pub vis: Visibility,

    /// Class annotations.
    pub annotations: Vec<AnnotationDef>,

    /// Generate accessors for non-`pub` fields.
    pub accessors: bool,

    /// Field marked `#[parent]`.
    pub parent: Option<FieldDef>,

    /// Remaining fields in declaration order.
    pub fields: Vec<FieldDef>,

    pub doc: Option<String>
}

impl ClassDef {
    /// Parse a `#[derive(Entity)]` input.
    ///
    /// # Errors
    ///
    /// Returns an error for generic or non-struct inputs, invalid options
    /// and malformed field markers.
    pub fn from_entity_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = EntityAttrs::from_derive_input(input)?;
        reject_generics(input)?;

        let mut annotations = vec![AnnotationDef::Entity {
            keyspace: attrs.keyspace,
            table:    attrs.table
        }];
        if let Some(naming) = attrs.naming {
            annotations.push(AnnotationDef::Naming(naming));
        }
        if let Some(insert) = attrs.insert {
            annotations.push(AnnotationDef::Insert(insert));
        }
        if attrs.read_consistency.is_some() || attrs.write_consistency.is_some() {
            annotations.push(AnnotationDef::Consistency {
                read:  attrs.read_consistency,
                write: attrs.write_consistency
            });
        }

        let (parent, fields) = parse_fields(input)?;
        Ok(Self {
            ident: attrs.ident,
            vis: attrs.vis,
            annotations,
            accessors: attrs.accessors,
            parent,
            fields,
            doc: extract_doc_comments(&input.attrs)
        })
    }

    /// Parse a `#[derive(Mapped)]` struct input.
    ///
    /// # Errors
    ///
    /// Same as [`ClassDef::from_entity_input`].
    pub fn from_mapped_input(input: &DeriveInput, attrs: MappedAttrs) -> darling::Result<Self> {
        reject_generics(input)?;

        let annotations = attrs.naming.map(AnnotationDef::Naming).into_iter().collect();
        let (parent, fields) = parse_fields(input)?;
        Ok(Self {
            ident: attrs.ident,
            vis: attrs.vis,
            annotations,
            accessors: attrs.accessors,
            parent,
            fields,
            doc: extract_doc_comments(&input.attrs)
        })
    }

    /// Fields that get generated accessors.
    pub fn accessor_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields
            .iter()
            .filter(move |f| self.accessors && f.is_mapped() && !f.is_pub)
    }

    /// Fields holding an embedded key.
    pub fn embedded_ids(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_embedded_id())
    }
}

pub(crate) fn reject_generics(input: &DeriveInput) -> darling::Result<()> {
    if input.generics.params.is_empty() {
        return Ok(());
    }
    Err(
        darling::Error::custom("mapped classes cannot be generic; describe a concrete type")
            .with_span(&input.generics)
    )
}

fn parse_fields(input: &DeriveInput) -> darling::Result<(Option<FieldDef>, Vec<FieldDef>)> {
    let named = match &input.data {
        syn::Data::Struct(data) => match &data.fields {
            syn::Fields::Named(named) => &named.named,
            _ => {
                return Err(
                    darling::Error::custom("mapped structs require named fields").with_span(&input.ident)
                );
            }
        },
        _ => {
            return Err(darling::Error::custom("expected a struct").with_span(&input.ident));
        }
    };

    let mut errors = darling::Error::accumulator();
    let mut parent: Option<FieldDef> = None;
    let mut fields = Vec::new();

    for field in named {
        let Some(def) = errors.handle(FieldDef::from_field(field)) else {
            continue;
        };
        if !def.parent {
            fields.push(def);
        } else if parent.is_some() {
            errors.push(darling::Error::custom("only one #[parent] field is allowed").with_span(field));
        } else {
            parent = Some(def);
        }
    }

    errors.finish_with((parent, fields))
}
