// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level parsing.
//!
//! Field markers are plain attributes read one by one:
//!
//! | Attribute | Annotation |
//! |-----------|------------|
//! | `#[id]` | single-column primary key |
//! | `#[embedded_id]` | key held by a `Mapped` key struct |
//! | `#[partition_key]`, `#[partition_key(2)]` | partition component |
//! | `#[clustering_column(1, reversed)]` | clustering component |
//! | `#[order(1)]` | legacy key position |
//! | `#[column(name = "x")]` | explicit column name |
//! | `#[static_column]`, `#[counter]`, `#[time_uuid]` | flags |
//! | `#[index]`, `#[index(keys)]` | secondary index |
//! | `#[enumerated(ordinal)]`, `#[json(value)]`, `#[codec("path")]` | codec selection |
//! | `#[naming("snake_case")]` | field naming strategy |
//! | `#[consistency(read = "QUORUM")]` | field consistency |
//! | `#[transient]` | not mapped |
//! | `#[parent]` | composed parent class |
//!
//! Every mapped field carries a column annotation, so unannotated fields of
//! a derived struct are mapped with the resolved default column name.

use syn::{
    Attribute, Field, Ident, LitInt, LitStr, Meta, Token, Type, Visibility,
    ext::IdentExt,
    parse::ParseStream
};

use super::{
    annotation::AnnotationDef,
    options::{ConsistencyOption, EncodingOption, IndexOption, NamingOption}
};
use crate::utils::{
    docs::extract_doc_comments,
    types::{Shape, shape}
};

/// Where a type-use annotation applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeTarget {
    /// The field itself.
    Field,
    /// Element of a list or set.
    Element,
    /// Key of a map.
    Key,
    /// Value of a map.
    Value
}

impl TypeTarget {
    fn parse(ident: &Ident) -> Option<Self> {
        match ident.to_string().as_str() {
            "field" => Some(Self::Field),
            "element" => Some(Self::Element),
            "key" => Some(Self::Key),
            "value" => Some(Self::Value),
            _ => None
        }
    }

    /// Position of the targeted generic argument.
    #[must_use]
    pub fn arg_index(self) -> Option<usize> {
        match self {
            Self::Field => None,
            Self::Element | Self::Key => Some(0),
            Self::Value => Some(1)
        }
    }
}

/// A parsed struct field.
#[derive(Debug)]
pub struct FieldDef {
    /// Field name.
    pub ident: Ident,

    /// Declared Rust type.
    pub ty: Type,

    /// Whether the field is `pub`; private fields are read through accessors.
    pub is_pub: bool,

    /// Doc comment, emitted as the field's description.
    pub doc: Option<String>,

    /// Field annotations, in attribute order.
    pub annotations: Vec<AnnotationDef>,

    /// Annotations on a generic argument of the field type.
    pub type_annotations: Vec<(TypeTarget, AnnotationDef)>,

    /// `#[transient]`: skipped by the mapping.
    pub transient: bool,

    /// `#[parent]`: the composed parent class whose fields are inherited.
    pub parent: bool
}

impl FieldDef {
    /// Parse a named field and its markers.
    ///
    /// # Errors
    ///
    /// Returns an error for tuple fields, malformed markers, markers on a
    /// `#[transient]` or `#[parent]` field, and unknown option values.
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("mapped fields must be named").with_span(field)
        })?;

        let mut def = Self {
            ident,
            ty: field.ty.clone(),
            is_pub: matches!(field.vis, Visibility::Public(_)),
            doc: extract_doc_comments(&field.attrs),
            annotations: Vec::new(),
            type_annotations: Vec::new(),
            transient: false,
            parent: false
        };
        let mut marker_span: Option<&Attribute> = None;

        for attr in &field.attrs {
            let path = attr.path();
            if path.is_ident("transient") {
                def.transient = true;
                continue;
            }
            if path.is_ident("parent") {
                def.parent = true;
                continue;
            }

            let annotation = if path.is_ident("id") {
                AnnotationDef::Id
            } else if path.is_ident("embedded_id") {
                AnnotationDef::EmbeddedId
            } else if path.is_ident("partition_key") {
                let (order, reversed) = parse_order_args(attr)?;
                if reversed {
                    return Err(darling::Error::custom("partition key components cannot be reversed")
                        .with_span(attr));
                }
                AnnotationDef::PartitionKey(order)
            } else if path.is_ident("clustering_column") {
                let (order, reversed) = parse_order_args(attr)?;
                AnnotationDef::ClusteringColumn {
                    order: order.unwrap_or(1),
                    reversed
                }
            } else if path.is_ident("order") {
                let (order, reversed) = parse_order_args(attr)?;
                let value = order.ok_or_else(|| {
                    darling::Error::custom("#[order] requires a position, e.g. #[order(1)]").with_span(attr)
                })?;
                AnnotationDef::Order { value, reversed }
            } else if path.is_ident("column") {
                AnnotationDef::Column(parse_column_name(attr)?)
            } else if path.is_ident("static_column") {
                AnnotationDef::Static
            } else if path.is_ident("counter") {
                AnnotationDef::Counter
            } else if path.is_ident("time_uuid") {
                AnnotationDef::TimeUuid
            } else if path.is_ident("index") {
                AnnotationDef::Index(parse_index(attr)?)
            } else if path.is_ident("naming") {
                AnnotationDef::Naming(parse_naming(attr)?)
            } else if path.is_ident("consistency") {
                parse_consistency(attr)?
            } else if path.is_ident("enumerated") {
                let (encoding, target) = parse_enumerated(attr)?;
                let target = target.unwrap_or_else(|| match shape(&def.ty) {
                    Shape::Sequence => TypeTarget::Element,
                    Shape::Map => TypeTarget::Value,
                    Shape::Scalar => TypeTarget::Field
                });
                def.push(target, AnnotationDef::Enumerated(encoding));
                marker_span.get_or_insert(attr);
                continue;
            } else if path.is_ident("json") {
                let target = parse_target_only(attr)?;
                def.push(target, AnnotationDef::Json);
                marker_span.get_or_insert(attr);
                continue;
            } else if path.is_ident("codec") {
                let (codec, target) = parse_codec(attr)?;
                def.push(target, AnnotationDef::Codec(codec));
                marker_span.get_or_insert(attr);
                continue;
            } else {
                continue;
            };

            def.annotations.push(annotation);
            marker_span.get_or_insert(attr);
        }

        if let Some(attr) = marker_span {
            if def.transient {
                return Err(darling::Error::custom("#[transient] fields take no mapping attributes")
                    .with_span(attr));
            }
            if def.parent {
                return Err(
                    darling::Error::custom("#[parent] fields take no mapping attributes").with_span(attr)
                );
            }
        }

        if def.is_mapped() && !def.annotations.iter().any(|a| matches!(a, AnnotationDef::Column(_))) {
            def.annotations.push(AnnotationDef::Column(None));
        }

        Ok(def)
    }

    fn push(&mut self, target: TypeTarget, annotation: AnnotationDef) {
        if target == TypeTarget::Field {
            self.annotations.push(annotation);
        } else {
            self.type_annotations.push((target, annotation));
        }
    }

    /// Field name as recorded in metadata (`r#type` becomes `type`).
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.unraw().to_string()
    }

    /// Whether the field is described in class metadata.
    #[must_use]
    pub fn is_mapped(&self) -> bool {
        !self.transient && !self.parent
    }

    /// Whether the field carries `#[embedded_id]`.
    #[must_use]
    pub fn is_embedded_id(&self) -> bool {
        self.annotations.contains(&AnnotationDef::EmbeddedId)
    }
}

fn parse_i32(input: ParseStream<'_>) -> syn::Result<i32> {
    let negative = input.peek(Token![-]);
    if negative {
        input.parse::<Token![-]>()?;
    }
    let value = input.parse::<LitInt>()?.base10_parse::<i32>()?;
    Ok(if negative { -value } else { value })
}

/// Position and reversed flag of a key marker.
///
/// Accepts `#[marker]`, `#[marker(2)]`, `#[marker(order = 2)]`,
/// `#[marker(value = 2)]` and a trailing `reversed`.
fn parse_order_args(attr: &Attribute) -> syn::Result<(Option<i32>, bool)> {
    if matches!(attr.meta, Meta::Path(_)) {
        return Ok((None, false));
    }

    attr.parse_args_with(|input: ParseStream<'_>| {
        let mut order = None;
        let mut reversed = false;

        while !input.is_empty() {
            if input.peek(LitInt) || input.peek(Token![-]) {
                order = Some(parse_i32(input)?);
            } else {
                let ident: Ident = input.parse()?;
                if ident == "order" || ident == "value" {
                    input.parse::<Token![=]>()?;
                    order = Some(parse_i32(input)?);
                } else if ident == "reversed" {
                    reversed = true;
                } else {
                    return Err(syn::Error::new(
                        ident.span(),
                        "expected a position, `order = N` or `reversed`"
                    ));
                }
            }

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok((order, reversed))
    })
}

fn parse_column_name(attr: &Attribute) -> syn::Result<Option<String>> {
    if matches!(attr.meta, Meta::Path(_)) {
        return Ok(None);
    }

    attr.parse_args_with(|input: ParseStream<'_>| {
        if input.peek(LitStr) {
            return Ok(Some(input.parse::<LitStr>()?.value()));
        }
        let ident: Ident = input.parse()?;
        if ident != "name" {
            return Err(syn::Error::new(ident.span(), "expected `name = \"...\"`"));
        }
        input.parse::<Token![=]>()?;
        Ok(Some(input.parse::<LitStr>()?.value()))
    })
}

fn parse_index(attr: &Attribute) -> syn::Result<IndexOption> {
    if matches!(attr.meta, Meta::Path(_)) {
        return Ok(IndexOption::Simple);
    }
    let ident: Ident = attr.parse_args()?;
    IndexOption::parse(&ident.to_string()).ok_or_else(|| {
        syn::Error::new(
            ident.span(),
            "expected one of `simple`, `collection`, `keys`, `values`, `entries`"
        )
    })
}

fn parse_naming(attr: &Attribute) -> syn::Result<NamingOption> {
    let lit: LitStr = attr.parse_args()?;
    NamingOption::parse(&lit.value()).ok_or_else(|| {
        syn::Error::new(
            lit.span(),
            "expected one of \"snake_case\", \"lower_case\", \"case_sensitive\""
        )
    })
}

fn parse_consistency(attr: &Attribute) -> syn::Result<AnnotationDef> {
    let mut read = None;
    let mut write = None;

    attr.parse_nested_meta(|meta| {
        let slot = if meta.path.is_ident("read") {
            &mut read
        } else if meta.path.is_ident("write") {
            &mut write
        } else {
            return Err(meta.error("expected `read` or `write`"));
        };
        let lit: LitStr = meta.value()?.parse()?;
        let level = ConsistencyOption::parse(&lit.value())
            .ok_or_else(|| syn::Error::new(lit.span(), "unknown consistency level"))?;
        *slot = Some(level);
        Ok(())
    })?;

    Ok(AnnotationDef::Consistency { read, write })
}

fn parse_enumerated(attr: &Attribute) -> syn::Result<(EncodingOption, Option<TypeTarget>)> {
    let mut encoding = EncodingOption::default();
    let mut target = None;

    if matches!(attr.meta, Meta::Path(_)) {
        return Ok((encoding, target));
    }

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("name") {
            encoding = EncodingOption::Name;
        } else if meta.path.is_ident("ordinal") {
            encoding = EncodingOption::Ordinal;
        } else if let Some(ident) = meta.path.get_ident()
            && let Some(parsed) = TypeTarget::parse(ident)
        {
            target = Some(parsed);
        } else {
            return Err(meta.error("expected `name`, `ordinal` or a target (`field`, `element`, `key`, `value`)"));
        }
        Ok(())
    })?;

    Ok((encoding, target))
}

fn parse_target_only(attr: &Attribute) -> syn::Result<TypeTarget> {
    if matches!(attr.meta, Meta::Path(_)) {
        return Ok(TypeTarget::Field);
    }
    let ident: Ident = attr.parse_args()?;
    TypeTarget::parse(&ident).ok_or_else(|| {
        syn::Error::new(ident.span(), "expected `field`, `element`, `key` or `value`")
    })
}

/// `#[codec("path")]`, `#[codec(path = "path")]`, optionally followed by a
/// target.
fn parse_codec(attr: &Attribute) -> syn::Result<(String, TypeTarget)> {
    attr.parse_args_with(|input: ParseStream<'_>| {
        let mut path = None;
        let mut target = TypeTarget::Field;

        while !input.is_empty() {
            if input.peek(LitStr) {
                path = Some(input.parse::<LitStr>()?.value());
            } else {
                let ident: Ident = input.parse()?;
                if ident == "path" {
                    input.parse::<Token![=]>()?;
                    path = Some(input.parse::<LitStr>()?.value());
                } else if let Some(parsed) = TypeTarget::parse(&ident) {
                    target = parsed;
                } else {
                    return Err(syn::Error::new(ident.span(), "expected a codec path or a target"));
                }
            }

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        let path = path.ok_or_else(|| input.error("#[codec] requires a codec path"))?;
        Ok((path, target))
    })
}

#[cfg(test)]
mod tests;
