// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generic argument resolution for collection and map fields.

use crate::{
    error::MappingError,
    meta::{AnnotationsExt, TypeKind, TypeRef}
};

/// Element type of a list or set.
///
/// A parameterized element (`Vec<Class<Void>>`) is returned as declared; its
/// raw type is the element's `name` (`Class`).
///
/// # Errors
///
/// - [`MappingError::RawCollection`] when the collection has no argument
/// - [`MappingError::NestedCollection`] when the element is itself a
///   collection not redirected to JSON or a custom codec
pub fn infer_element_type<'a>(
    ty: &'a TypeRef,
    declaring_class: &str,
    field: &str
) -> Result<&'a TypeRef, MappingError> {
    let [element] = ty.args.as_slice() else {
        return Err(MappingError::RawCollection {
            class: declaring_class.to_string(),
            field: field.to_string(),
            kind:  kind_label(&ty.kind)
        });
    };
    reject_nested(element, declaring_class, field)?;
    Ok(element)
}

/// Key and value types of a map.
///
/// # Errors
///
/// - [`MappingError::RawCollection`] when the map is not parameterized
/// - [`MappingError::NestedCollection`] when the key or the value is a
///   collection not redirected to JSON or a custom codec
pub fn infer_map_key_value_types<'a>(
    ty: &'a TypeRef,
    declaring_class: &str,
    field: &str
) -> Result<(&'a TypeRef, &'a TypeRef), MappingError> {
    let [key, value] = ty.args.as_slice() else {
        return Err(MappingError::RawCollection {
            class: declaring_class.to_string(),
            field: field.to_string(),
            kind:  "map"
        });
    };
    reject_nested(key, declaring_class, field)?;
    reject_nested(value, declaring_class, field)?;
    Ok((key, value))
}

fn reject_nested(ty: &TypeRef, declaring_class: &str, field: &str) -> Result<(), MappingError> {
    let redirected = ty.annotations.is_json() || ty.annotations.codec().is_some();
    if ty.kind.is_collection() && !redirected {
        return Err(MappingError::NestedCollection {
            class:  declaring_class.to_string(),
            field:  field.to_string(),
            nested: ty.to_string()
        });
    }
    Ok(())
}

fn kind_label(kind: &TypeKind) -> &'static str {
    match kind {
        TypeKind::Set => "set",
        TypeKind::Map => "map",
        _ => "list"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::{Annotation, NativeType};

    const CLASS: &str = "app::Entity";

    #[test]
    fn element_of_list() {
        let ty = TypeRef::list(TypeRef::native(NativeType::Text));
        let element = infer_element_type(&ty, CLASS, "tags").unwrap();
        assert_eq!(element, &TypeRef::native(NativeType::Text));
    }

    #[test]
    fn parameterized_element_yields_raw_type() {
        let class_of_void = TypeRef::object("Class").with_args([TypeRef::object("Void")]);
        let ty = TypeRef::list(class_of_void);
        let element = infer_element_type(&ty, CLASS, "types").unwrap();
        assert_eq!(element.name, "Class");
    }

    #[test]
    fn key_and_value_of_map() {
        let ty = TypeRef::map(
            TypeRef::native(NativeType::Int),
            TypeRef::native(NativeType::Text)
        );
        let (key, value) = infer_map_key_value_types(&ty, CLASS, "labels").unwrap();
        assert_eq!(key.native_type(), Some(NativeType::Int));
        assert_eq!(value.native_type(), Some(NativeType::Text));
    }

    #[test]
    fn raw_collections_fail() {
        let err = infer_element_type(&TypeRef::raw("HashSet", TypeKind::Set), CLASS, "tags")
            .unwrap_err();
        assert_eq!(
            err,
            MappingError::RawCollection {
                class: CLASS.to_string(),
                field: "tags".to_string(),
                kind:  "set"
            }
        );

        let err = infer_map_key_value_types(&TypeRef::raw("HashMap", TypeKind::Map), CLASS, "m")
            .unwrap_err();
        assert!(matches!(err, MappingError::RawCollection { kind: "map", .. }));
    }

    #[test]
    fn nested_collection_fails_without_json() {
        let ty = TypeRef::map(
            TypeRef::native(NativeType::Int),
            TypeRef::list(TypeRef::native(NativeType::Text))
        );
        let err = infer_map_key_value_types(&ty, CLASS, "groups").unwrap_err();
        assert_eq!(
            err,
            MappingError::NestedCollection {
                class:  CLASS.to_string(),
                field:  "groups".to_string(),
                nested: "Vec<String>".to_string()
            }
        );
    }

    #[test]
    fn nested_collection_redirected_to_json() {
        let ty = TypeRef::map(
            TypeRef::native(NativeType::Int),
            TypeRef::list(TypeRef::native(NativeType::Text)).annotated(Annotation::Json)
        );
        assert!(infer_map_key_value_types(&ty, CLASS, "groups").is_ok());
    }
}
