// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Property descriptors.

use std::fmt;

use crate::{
    codec::Codec,
    config::ConsistencyLevel,
    meta::{IndexKind, TypeRef}
};

/// Semantic category of a property.
///
/// Declaration order is significant: it is the ordinal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    /// Single-column primary key or compound key component.
    Id,
    /// Embedded compound key.
    EmbeddedId,
    /// Scalar, enum, JSON or custom-codec column.
    Simple,
    /// `list` column.
    List,
    /// `set` column.
    Set,
    /// `map` column.
    Map,
    /// `counter` column.
    Counter
}

impl PropertyType {
    /// Whether the property is part of the primary key.
    #[must_use]
    pub const fn is_id(&self) -> bool {
        matches!(self, Self::Id | Self::EmbeddedId)
    }

    /// Whether the property is a list, set or map.
    #[must_use]
    pub const fn is_collection(&self) -> bool {
        matches!(self, Self::List | Self::Set | Self::Map)
    }

    /// Lower-case label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::EmbeddedId => "embedded id",
            Self::Simple => "simple",
            Self::List => "list",
            Self::Set => "set",
            Self::Map => "map",
            Self::Counter => "counter"
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How a property value is read or written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Accessor {
    /// Direct field access.
    Field(String),
    /// Accessor method.
    Method(String)
}

impl Accessor {
    /// Field or method name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Field(name) | Self::Method(name) => name
        }
    }
}

/// Getter and setter of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessors {
    /// Reads the value.
    pub getter: Accessor,
    /// Writes the value.
    pub setter: Accessor
}

/// One mapped field.
#[derive(Debug, Clone)]
pub struct PropertyDescriptor {
    pub(crate) name:              String,
    pub(crate) column:            String,
    pub(crate) property_type:     PropertyType,
    pub(crate) declared_type:     TypeRef,
    pub(crate) value_type:        TypeRef,
    pub(crate) key_type:          Option<TypeRef>,
    pub(crate) accessors:         Accessors,
    pub(crate) codec:             Codec,
    pub(crate) read_consistency:  ConsistencyLevel,
    pub(crate) write_consistency: ConsistencyLevel,
    pub(crate) static_column:     bool,
    pub(crate) index:             Option<IndexKind>,
    pub(crate) time_uuid:         bool,
    pub(crate) declaring_class:   String,
    pub(crate) description:       Option<String>
}

impl PropertyDescriptor {
    /// Source identifier.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolved column name.
    #[must_use]
    pub fn column(&self) -> &str {
        &self.column
    }

    /// Semantic category.
    #[must_use]
    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    /// Type as declared on the field.
    #[must_use]
    pub fn declared_type(&self) -> &TypeRef {
        &self.declared_type
    }

    /// Element type of lists and sets, value type of maps, declared type
    /// otherwise.
    #[must_use]
    pub fn value_type(&self) -> &TypeRef {
        &self.value_type
    }

    /// Key type of maps.
    #[must_use]
    pub fn key_type(&self) -> Option<&TypeRef> {
        self.key_type.as_ref()
    }

    /// Getter and setter.
    #[must_use]
    pub fn accessors(&self) -> &Accessors {
        &self.accessors
    }

    /// Value codec.
    #[must_use]
    pub fn codec(&self) -> &Codec {
        &self.codec
    }

    /// Read consistency.
    #[must_use]
    pub fn read_consistency(&self) -> ConsistencyLevel {
        self.read_consistency
    }

    /// Write consistency.
    #[must_use]
    pub fn write_consistency(&self) -> ConsistencyLevel {
        self.write_consistency
    }

    /// Whether the column is static.
    #[must_use]
    pub fn is_static(&self) -> bool {
        self.static_column
    }

    /// Whether the column is indexed.
    #[must_use]
    pub fn is_indexed(&self) -> bool {
        self.index.is_some()
    }

    /// Requested index kind.
    #[must_use]
    pub fn index(&self) -> Option<IndexKind> {
        self.index
    }

    /// Whether the uuid is time based.
    #[must_use]
    pub fn is_time_uuid(&self) -> bool {
        self.time_uuid
    }

    /// Whether the property is a counter.
    #[must_use]
    pub fn is_counter(&self) -> bool {
        self.property_type == PropertyType::Counter
    }

    /// Canonical name of the declaring class.
    #[must_use]
    pub fn declaring_class(&self) -> &str {
        &self.declaring_class
    }

    /// Doc comment of the field.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}
