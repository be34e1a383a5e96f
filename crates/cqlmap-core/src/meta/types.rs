// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declared types.

use std::{fmt, sync::Arc};

use super::{annotation::Annotation, class::ClassMeta};

/// Column types passed through without transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeType {
    /// `boolean`
    Boolean,
    /// `tinyint`
    TinyInt,
    /// `smallint`
    SmallInt,
    /// `int`
    Int,
    /// `bigint`
    BigInt,
    /// `float`
    Float,
    /// `double`
    Double,
    /// `decimal`
    Decimal,
    /// `varint`
    Varint,
    /// `text`
    Text,
    /// `uuid` and `timeuuid`
    Uuid,
    /// `timestamp`
    Timestamp,
    /// `date`
    Date,
    /// `time`
    Time,
    /// `blob`
    Blob,
    /// `inet`
    Inet
}

impl NativeType {
    /// CQL name of the type.
    #[must_use]
    pub const fn cql_name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::TinyInt => "tinyint",
            Self::SmallInt => "smallint",
            Self::Int => "int",
            Self::BigInt => "bigint",
            Self::Float => "float",
            Self::Double => "double",
            Self::Decimal => "decimal",
            Self::Varint => "varint",
            Self::Text => "text",
            Self::Uuid => "uuid",
            Self::Timestamp => "timestamp",
            Self::Date => "date",
            Self::Time => "time",
            Self::Blob => "blob",
            Self::Inet => "inet"
        }
    }

    /// Rust type name used when the type is built by hand.
    #[must_use]
    pub const fn rust_name(&self) -> &'static str {
        match self {
            Self::Boolean => "bool",
            Self::TinyInt => "i8",
            Self::SmallInt => "i16",
            Self::Int => "i32",
            Self::BigInt => "i64",
            Self::Float => "f32",
            Self::Double => "f64",
            Self::Decimal => "Decimal",
            Self::Varint => "i128",
            Self::Text => "String",
            Self::Uuid => "Uuid",
            Self::Timestamp => "DateTime<Utc>",
            Self::Date => "NaiveDate",
            Self::Time => "NaiveTime",
            Self::Blob => "Blob",
            Self::Inet => "IpAddr"
        }
    }
}

/// Structural category of a declared type.
#[derive(Debug, Clone)]
pub enum TypeKind {
    /// Natively supported scalar.
    Native(NativeType),

    /// Unit enum with its constants in declaration order.
    Enum(Vec<String>),

    /// In-memory byte array.
    ByteArray,

    /// Ordered collection.
    List,

    /// Unordered collection.
    Set,

    /// Key/value mapping.
    Map,

    /// Counter column value.
    Counter,

    /// Any other type, with its class metadata when it is mapped.
    Object(Option<Arc<ClassMeta>>)
}

impl TypeKind {
    /// Short label used in diagnostics.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Native(_) => "native",
            Self::Enum(_) => "enum",
            Self::ByteArray => "byte array",
            Self::List => "list",
            Self::Set => "set",
            Self::Map => "map",
            Self::Counter => "counter",
            Self::Object(_) => "object"
        }
    }

    /// Whether the kind is a list, set or map.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::List | Self::Set | Self::Map)
    }
}

/// A declared type with its generic arguments.
///
/// Annotations attached to a type use (`Map<K, @Enumerated V>`) travel on
/// the argument they apply to. Equality compares the type only: name and
/// arguments, never annotations.
#[derive(Debug, Clone)]
pub struct TypeRef {
    /// Type name without arguments (`HashMap`, `i64`, `app::Status`).
    pub name:        String,
    /// Structural category.
    pub kind:        TypeKind,
    /// Generic arguments.
    pub args:        Vec<TypeRef>,
    /// Annotations on this type use.
    pub annotations: Vec<Annotation>
}

impl TypeRef {
    /// Type with an explicit name and kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            args: Vec::new(),
            annotations: Vec::new()
        }
    }

    /// Native scalar named after its Rust type.
    #[must_use]
    pub fn native(native: NativeType) -> Self {
        Self::new(native.rust_name(), TypeKind::Native(native))
    }

    /// `Vec<element>`.
    #[must_use]
    pub fn list(element: TypeRef) -> Self {
        Self::new("Vec", TypeKind::List).with_args([element])
    }

    /// `HashSet<element>`.
    #[must_use]
    pub fn set(element: TypeRef) -> Self {
        Self::new("HashSet", TypeKind::Set).with_args([element])
    }

    /// `HashMap<key, value>`.
    #[must_use]
    pub fn map(key: TypeRef, value: TypeRef) -> Self {
        Self::new("HashMap", TypeKind::Map).with_args([key, value])
    }

    /// Unparameterized collection or map.
    #[must_use]
    pub fn raw(name: impl Into<String>, kind: TypeKind) -> Self {
        Self::new(name, kind)
    }

    /// Unit enum with constants in declaration order.
    #[must_use]
    pub fn enumeration<I, S>(name: impl Into<String>, constants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        let constants = constants.into_iter().map(Into::into).collect();
        Self::new(name, TypeKind::Enum(constants))
    }

    /// `Vec<u8>`.
    #[must_use]
    pub fn bytes() -> Self {
        Self::new("Vec<u8>", TypeKind::ByteArray)
    }

    /// Counter value.
    #[must_use]
    pub fn counter() -> Self {
        Self::new("Counter", TypeKind::Counter)
    }

    /// Unmapped object type.
    #[must_use]
    pub fn object(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Object(None))
    }

    /// Mapped class type.
    #[must_use]
    pub fn class(meta: Arc<ClassMeta>) -> Self {
        let name = meta.canonical_name.clone();
        Self::new(name, TypeKind::Object(Some(meta)))
    }

    /// Replace the generic arguments.
    #[must_use]
    pub fn with_args(mut self, args: impl IntoIterator<Item = TypeRef>) -> Self {
        self.args = args.into_iter().collect();
        self
    }

    /// Attach an annotation to this type use.
    #[must_use]
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Native scalar kind, if any.
    #[must_use]
    pub fn native_type(&self) -> Option<NativeType> {
        match self.kind {
            TypeKind::Native(native) => Some(native),
            _ => None
        }
    }

    /// Enum constants, if the type is an enum.
    #[must_use]
    pub fn enum_constants(&self) -> Option<&[String]> {
        match &self.kind {
            TypeKind::Enum(constants) => Some(constants),
            _ => None
        }
    }

    /// Class metadata of a mapped object type.
    #[must_use]
    pub fn class_meta(&self) -> Option<&Arc<ClassMeta>> {
        match &self.kind {
            TypeKind::Object(meta) => meta.as_ref(),
            _ => None
        }
    }
}

impl PartialEq for TypeRef {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.args == other.args
    }
}

impl Eq for TypeRef {}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if let Some((first, rest)) = self.args.split_first() {
            write!(f, "<{first}")?;
            for arg in rest {
                write!(f, ", {arg}")?;
            }
            f.write_str(">")?;
        }
        Ok(())
    }
}
