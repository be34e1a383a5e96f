// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Shape inspection of field types.
//!
//! Only the syntax is available to a derive, so shapes are recognized by the
//! last path segment: `Vec`, `VecDeque`, `HashSet` and `BTreeSet` are
//! sequences, `HashMap` and `BTreeMap` are maps. Type aliases are opaque.

use syn::{GenericArgument, PathArguments, Type, TypePath};

/// Syntactic shape of a field type, `Option` stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Scalar,
    Sequence,
    Map
}

fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
    match ty {
        Type::Path(TypePath { qself: None, path }) => path.segments.last(),
        _ => None
    }
}

fn generic_args(segment: &syn::PathSegment) -> Vec<&Type> {
    match &segment.arguments {
        PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .filter_map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None
            })
            .collect(),
        _ => Vec::new()
    }
}

/// `T` for `Option<T>`, otherwise `ty` itself.
#[must_use]
pub fn strip_option(ty: &Type) -> &Type {
    if let Some(segment) = last_segment(ty)
        && segment.ident == "Option"
        && let [inner] = generic_args(segment).as_slice()
    {
        return *inner;
    }
    ty
}

/// Whether the type is `Vec<u8>` or `Option<Vec<u8>>`.
#[must_use]
pub fn is_bytes(ty: &Type) -> bool {
    let Some(segment) = last_segment(strip_option(ty)) else {
        return false;
    };
    segment.ident == "Vec"
        && matches!(
            generic_args(segment).as_slice(),
            [inner] if last_segment(inner).is_some_and(|s| s.ident == "u8")
        )
}

/// Shape of the type.
#[must_use]
pub fn shape(ty: &Type) -> Shape {
    if is_bytes(ty) {
        return Shape::Scalar;
    }
    match last_segment(strip_option(ty)) {
        Some(segment) if ["Vec", "VecDeque", "HashSet", "BTreeSet"].iter().any(|s| segment.ident == s) => {
            Shape::Sequence
        }
        Some(segment) if segment.ident == "HashMap" || segment.ident == "BTreeMap" => Shape::Map,
        _ => Shape::Scalar
    }
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::*;

    #[test]
    fn strips_option() {
        let ty: Type = parse_quote!(Option<String>);
        let expected: Type = parse_quote!(String);
        assert_eq!(strip_option(&ty), &expected);

        let ty: Type = parse_quote!(String);
        assert_eq!(strip_option(&ty), &ty);
    }

    #[test]
    fn detects_bytes() {
        assert!(is_bytes(&parse_quote!(Vec<u8>)));
        assert!(is_bytes(&parse_quote!(Option<Vec<u8>>)));
        assert!(!is_bytes(&parse_quote!(Vec<i8>)));
        assert!(!is_bytes(&parse_quote!(String)));
    }

    #[test]
    fn shapes() {
        assert_eq!(shape(&parse_quote!(Vec<String>)), Shape::Sequence);
        assert_eq!(shape(&parse_quote!(Option<std::collections::BTreeSet<i32>>)), Shape::Sequence);
        assert_eq!(shape(&parse_quote!(HashMap<String, Status>)), Shape::Map);
        assert_eq!(shape(&parse_quote!(Vec<u8>)), Shape::Scalar);
        assert_eq!(shape(&parse_quote!(Status)), Shape::Scalar);
    }
}
