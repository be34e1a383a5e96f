// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Getter and setter resolution.
//!
//! Public fields are read and written directly. Private fields need
//! accessor methods with exact signatures:
//!
//! | Accessor | Candidates | Signature |
//! |----------|------------|-----------|
//! | getter | `name`, `get_name`, `is_name` (bool only) | `fn(&self) -> T` |
//! | setter | `set_name` | `fn(&mut self, T)` |

use crate::{
    descriptor::{Accessor, Accessors},
    error::MappingError,
    meta::{ClassMeta, FieldMeta, MethodMeta, NativeType, TypeRef, Visibility}
};

/// Resolve the accessors of `field`, looking methods up on `owner` and its
/// ancestors. Errors name `declaring_class`.
pub(crate) fn resolve(
    owner: &ClassMeta,
    field: &FieldMeta,
    declaring_class: &str
) -> Result<Accessors, MappingError> {
    if field.visibility == Visibility::Public {
        return Ok(Accessors {
            getter: Accessor::Field(field.name.clone()),
            setter: Accessor::Field(field.name.clone())
        });
    }

    Ok(Accessors {
        getter: find_getter(owner, field, declaring_class)?,
        setter: find_setter(owner, field, declaring_class)?
    })
}

fn getter_candidates(field: &FieldMeta) -> Vec<String> {
    let mut names = vec![field.name.clone(), format!("get_{}", field.name)];
    if field.ty.native_type() == Some(NativeType::Boolean) {
        names.push(format!("is_{}", field.name));
    }
    names
}

fn getter_signature(name: &str, ty: &TypeRef) -> String {
    format!("fn {name}(&self) -> {ty}")
}

fn setter_signature(name: &str, ty: &TypeRef) -> String {
    format!("fn {name}(&mut self, value: {ty})")
}

fn is_getter_of(method: &MethodMeta, ty: &TypeRef) -> bool {
    method.params.is_empty() && method.returns.as_ref() == Some(ty)
}

fn is_setter_of(method: &MethodMeta, ty: &TypeRef) -> bool {
    method.returns.is_none() && method.params.as_slice() == std::slice::from_ref(ty)
}

fn find_getter(
    owner: &ClassMeta,
    field: &FieldMeta,
    declaring_class: &str
) -> Result<Accessor, MappingError> {
    let candidates = getter_candidates(field);
    let mut mismatched: Option<&str> = None;

    for name in &candidates {
        let mut methods = owner.methods_named(name).peekable();
        if methods.peek().is_none() {
            continue;
        }
        if methods.any(|m| is_getter_of(m, &field.ty)) {
            return Ok(Accessor::Method(name.clone()));
        }
        mismatched.get_or_insert(name);
    }

    match mismatched {
        Some(method) => Err(MappingError::AccessorMismatch {
            class:     declaring_class.to_string(),
            field:     field.name.clone(),
            method:    method.to_string(),
            signature: getter_signature(method, &field.ty)
        }),
        None => Err(MappingError::MissingGetter {
            class:     declaring_class.to_string(),
            field:     field.name.clone(),
            signature: getter_signature(&format!("get_{}", field.name), &field.ty)
        })
    }
}

fn find_setter(
    owner: &ClassMeta,
    field: &FieldMeta,
    declaring_class: &str
) -> Result<Accessor, MappingError> {
    let name = format!("set_{}", field.name);
    let (declared, matching) = owner
        .methods_named(&name)
        .fold((false, false), |(_, matching), m| (true, matching || is_setter_of(m, &field.ty)));

    if !declared {
        return Err(MappingError::MissingSetter {
            class:     declaring_class.to_string(),
            field:     field.name.clone(),
            signature: setter_signature(&name, &field.ty)
        });
    }
    if matching {
        return Ok(Accessor::Method(name));
    }
    Err(MappingError::AccessorMismatch {
        class:     declaring_class.to_string(),
        field:     field.name.clone(),
        signature: setter_signature(&name, &field.ty),
        method:    name
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASS: &str = "app::Account";

    fn text() -> TypeRef {
        TypeRef::native(NativeType::Text)
    }

    fn flag() -> TypeRef {
        TypeRef::native(NativeType::Boolean)
    }

    #[test]
    fn public_field_is_accessed_directly() {
        let field = FieldMeta::new("name", text());
        let owner = ClassMeta::new(CLASS).field(field.clone());
        let accessors = resolve(&owner, &field, CLASS).unwrap();
        assert_eq!(accessors.getter, Accessor::Field("name".into()));
        assert_eq!(accessors.setter, Accessor::Field("name".into()));
    }

    #[test]
    fn private_field_uses_methods() {
        let field = FieldMeta::new("name", text()).private();
        let owner = ClassMeta::new(CLASS)
            .field(field.clone())
            .method(MethodMeta::getter("get_name", text()))
            .method(MethodMeta::setter("set_name", text()));
        let accessors = resolve(&owner, &field, CLASS).unwrap();
        assert_eq!(accessors.getter, Accessor::Method("get_name".into()));
        assert_eq!(accessors.setter, Accessor::Method("set_name".into()));
    }

    #[test]
    fn plain_name_getter_is_preferred() {
        let field = FieldMeta::new("name", text()).private();
        let owner = ClassMeta::new(CLASS)
            .method(MethodMeta::getter("name", text()))
            .method(MethodMeta::getter("get_name", text()))
            .method(MethodMeta::setter("set_name", text()));
        let accessors = resolve(&owner, &field, CLASS).unwrap();
        assert_eq!(accessors.getter, Accessor::Method("name".into()));
    }

    #[test]
    fn boolean_getter_may_use_is_prefix() {
        let field = FieldMeta::new("active", flag()).private();
        let owner = ClassMeta::new(CLASS)
            .method(MethodMeta::getter("is_active", flag()))
            .method(MethodMeta::setter("set_active", flag()));
        let accessors = resolve(&owner, &field, CLASS).unwrap();
        assert_eq!(accessors.getter, Accessor::Method("is_active".into()));
    }

    #[test]
    fn is_prefix_is_only_for_booleans() {
        let field = FieldMeta::new("name", text()).private();
        let owner = ClassMeta::new(CLASS)
            .method(MethodMeta::getter("is_name", text()))
            .method(MethodMeta::setter("set_name", text()));
        let err = resolve(&owner, &field, CLASS).unwrap_err();
        assert_eq!(
            err,
            MappingError::MissingGetter {
                class:     CLASS.into(),
                field:     "name".into(),
                signature: "fn get_name(&self) -> String".into()
            }
        );
    }

    #[test]
    fn getter_with_wrong_return_type() {
        let field = FieldMeta::new("name", text()).private();
        let owner = ClassMeta::new(CLASS)
            .method(MethodMeta::getter("get_name", flag()))
            .method(MethodMeta::setter("set_name", text()));
        let err = resolve(&owner, &field, CLASS).unwrap_err();
        assert_eq!(
            err,
            MappingError::AccessorMismatch {
                class:     CLASS.into(),
                field:     "name".into(),
                method:    "get_name".into(),
                signature: "fn get_name(&self) -> String".into()
            }
        );
    }

    #[test]
    fn missing_setter() {
        let field = FieldMeta::new("name", text()).private();
        let owner = ClassMeta::new(CLASS).method(MethodMeta::getter("get_name", text()));
        let err = resolve(&owner, &field, CLASS).unwrap_err();
        assert_eq!(
            err,
            MappingError::MissingSetter {
                class:     CLASS.into(),
                field:     "name".into(),
                signature: "fn set_name(&mut self, value: String)".into()
            }
        );
    }

    #[test]
    fn setter_with_wrong_parameter() {
        let field = FieldMeta::new("name", text()).private();
        let owner = ClassMeta::new(CLASS)
            .method(MethodMeta::getter("get_name", text()))
            .method(MethodMeta::setter("set_name", flag()));
        assert!(matches!(
            resolve(&owner, &field, CLASS),
            Err(MappingError::AccessorMismatch { .. })
        ));
    }

    #[test]
    fn setter_is_named_in_result_and_mismatch() {
        let field = FieldMeta::new("name", text()).private();
        let owner = ClassMeta::new(CLASS)
            .method(MethodMeta::getter("get_name", text()))
            .method(MethodMeta::setter("set_name", flag()))
            .method(MethodMeta::setter("set_name", text()));
        let accessors = resolve(&owner, &field, CLASS).unwrap();
        assert_eq!(accessors.setter, Accessor::Method("set_name".into()));

        let owner = ClassMeta::new(CLASS)
            .method(MethodMeta::getter("get_name", text()))
            .method(MethodMeta::setter("set_name", flag()));
        assert_eq!(
            resolve(&owner, &field, CLASS).unwrap_err(),
            MappingError::AccessorMismatch {
                class:     CLASS.into(),
                field:     "name".into(),
                method:    "set_name".into(),
                signature: "fn set_name(&mut self, value: String)".into()
            }
        );
    }

    #[test]
    fn accessors_found_on_parent() {
        let field = FieldMeta::new("name", text()).private();
        let parent = ClassMeta::new("app::Base")
            .method(MethodMeta::getter("get_name", text()))
            .method(MethodMeta::setter("set_name", text()));
        let owner = ClassMeta::new(CLASS).with_parent(parent);
        assert!(resolve(&owner, &field, CLASS).is_ok());
    }
}
