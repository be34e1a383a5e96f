// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Class metadata consumed by the parsers.
//!
//! The parsers never look at Rust items directly. They read a description of
//! a class made of plain data:
//!
//! - [`ClassMeta`] — name, parent, class annotations, fields, methods
//! - [`FieldMeta`] — name, declared [`TypeRef`], visibility, annotations
//! - [`MethodMeta`] — accessor signatures used to resolve getters/setters
//! - [`TypeRef`] — a declared type with its generic arguments and the
//!   annotations attached to that type use (map key, collection element)
//!
//! `#[derive(Entity)]` and `#[derive(Mapped)]` produce this metadata at
//! compile time through [`MappedClass`] and [`MappedType`]; it can also be
//! assembled by hand with the builders.

mod annotation;
mod class;
mod traits;
mod types;

pub use annotation::{Annotation, AnnotationsExt, EnumEncoding, IndexKind};
pub use class::{ClassMeta, DeclaredField, FieldMeta, MethodMeta, Visibility};
pub use traits::{MappedClass, MappedType};
pub use types::{NativeType, TypeKind, TypeRef};
