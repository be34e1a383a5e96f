// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Classes, fields and methods.

use std::sync::Arc;

use super::{annotation::Annotation, types::TypeRef};

/// Field visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Visibility {
    /// Readable and writable directly.
    #[default]
    Public,

    /// Reachable only through accessor methods.
    Private
}

/// A declared field.
#[derive(Debug, Clone)]
pub struct FieldMeta {
    /// Source identifier.
    pub name:        String,
    /// Declared type.
    pub ty:          TypeRef,
    /// Visibility.
    pub visibility:  Visibility,
    /// Field annotations.
    pub annotations: Vec<Annotation>,
    /// Doc comment.
    pub doc:         Option<String>
}

impl FieldMeta {
    /// Public field without annotations.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            visibility: Visibility::Public,
            annotations: Vec::new(),
            doc: None
        }
    }

    /// Add an annotation.
    #[must_use]
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Mark the field private.
    #[must_use]
    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    /// Attach a doc comment.
    #[must_use]
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// A declared method, reduced to its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodMeta {
    /// Method name.
    pub name:    String,
    /// Parameter types, receiver excluded.
    pub params:  Vec<TypeRef>,
    /// Return type, `None` for unit.
    pub returns: Option<TypeRef>
}

impl MethodMeta {
    /// `fn name(&self) -> ty`.
    #[must_use]
    pub fn getter(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name:    name.into(),
            params:  Vec::new(),
            returns: Some(ty)
        }
    }

    /// `fn name(&mut self, value: ty)`.
    #[must_use]
    pub fn setter(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name:    name.into(),
            params:  vec![ty],
            returns: None
        }
    }
}

/// A field together with the class that declares it.
#[derive(Debug, Clone, Copy)]
pub struct DeclaredField<'a> {
    /// The field.
    pub field:           &'a FieldMeta,
    /// The class in the inheritance chain that declares it.
    pub declaring_class: &'a ClassMeta
}

/// A class description.
///
/// ```rust
/// use cqlmap_core::meta::{Annotation, ClassMeta, FieldMeta, NativeType, TypeRef};
///
/// let base = ClassMeta::new("app::Base")
///     .field(FieldMeta::new("id", TypeRef::native(NativeType::BigInt)).annotated(Annotation::Id));
/// let user = ClassMeta::new("app::User")
///     .with_parent(base)
///     .field(FieldMeta::new("name", TypeRef::native(NativeType::Text)));
///
/// let names: Vec<_> = user.flatten_fields().iter().map(|f| f.field.name.as_str()).collect();
/// assert_eq!(names, ["id", "name"]);
/// ```
#[derive(Debug, Clone)]
pub struct ClassMeta {
    /// Unqualified name.
    pub simple_name:    String,
    /// Fully qualified name, used as the class identity.
    pub canonical_name: String,
    /// Parent class whose fields are inherited.
    pub parent:         Option<Arc<ClassMeta>>,
    /// Class annotations.
    pub annotations:    Vec<Annotation>,
    /// Fields declared by this class only.
    pub fields:         Vec<FieldMeta>,
    /// Methods declared by this class only.
    pub methods:        Vec<MethodMeta>,
    /// Whether the class can be constructed without arguments.
    pub instantiable:   bool,
    /// Doc comment.
    pub doc:            Option<String>
}

impl ClassMeta {
    /// Empty, instantiable class.
    ///
    /// The simple name is the last `::` or `.` segment of the canonical name.
    #[must_use]
    pub fn new(canonical_name: impl Into<String>) -> Self {
        let canonical_name = canonical_name.into();
        let simple_name = canonical_name
            .rsplit([':', '.'])
            .next()
            .unwrap_or(canonical_name.as_str())
            .to_string();
        Self {
            simple_name,
            canonical_name,
            parent: None,
            annotations: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
            instantiable: true,
            doc: None
        }
    }

    /// Set the parent class.
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<Arc<ClassMeta>>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Add a class annotation.
    #[must_use]
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Add a field.
    #[must_use]
    pub fn field(mut self, field: FieldMeta) -> Self {
        self.fields.push(field);
        self
    }

    /// Add a method.
    #[must_use]
    pub fn method(mut self, method: MethodMeta) -> Self {
        self.methods.push(method);
        self
    }

    /// Mark the class as lacking a no-argument constructor.
    #[must_use]
    pub fn not_instantiable(mut self) -> Self {
        self.instantiable = false;
        self
    }

    /// Attach a doc comment.
    #[must_use]
    pub fn doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    /// This class followed by its ancestors, nearest first.
    pub fn lineage(&self) -> impl Iterator<Item = &ClassMeta> {
        std::iter::successors(Some(self), |class| class.parent.as_deref())
    }

    /// Every field of the inheritance chain, ancestors first, each tagged
    /// with its declaring class.
    #[must_use]
    pub fn flatten_fields(&self) -> Vec<DeclaredField<'_>> {
        let chain: Vec<&ClassMeta> = self.lineage().collect();
        chain
            .into_iter()
            .rev()
            .flat_map(|class| {
                class.fields.iter().map(move |field| DeclaredField {
                    field,
                    declaring_class: class
                })
            })
            .collect()
    }

    /// Methods named `name` declared anywhere in the chain, nearest first.
    pub fn methods_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a MethodMeta> {
        self.lineage()
            .flat_map(|class| class.methods.iter())
            .filter(move |method| method.name == name)
    }
}
