// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types raised while deriving entity metadata and transcoding values.
//!
//! Parsing failures are deterministic functions of the class definition:
//! they are raised once, synchronously, while the entity is parsed, and are
//! never retried.
//!
//! | Type | Raised by | Meaning |
//! |------|-----------|---------|
//! | [`MappingError`] | parsers | The annotated class itself is invalid |
//! | [`InstantiationError`] | parsers | A required constructor is missing or failed |
//! | [`CodecError`] | codecs | A runtime value does not fit its codec |
//!
//! Every [`MappingError`] names the offending class by its canonical name and,
//! where one is involved, the offending field.

use std::fmt;

use thiserror::Error as ThisError;

/// Result alias used throughout the parsing pipeline.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Part of a compound primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPart {
    /// Partition components.
    Partition,

    /// Clustering components.
    Clustering
}

impl fmt::Display for KeyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Partition => f.write_str("partition"),
            Self::Clustering => f.write_str("clustering")
        }
    }
}

/// Which side of a codec a declared type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecSide {
    /// In-memory representation.
    Source,

    /// Wire representation.
    Target
}

impl fmt::Display for CodecSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Source => f.write_str("source"),
            Self::Target => f.write_str("target")
        }
    }
}

/// Top-level parse error.
#[derive(Debug, ThisError)]
pub enum Error {
    /// The class definition violates a mapping rule.
    #[error(transparent)]
    Mapping(#[from] MappingError),

    /// A class that must be constructed cannot be.
    #[error(transparent)]
    Instantiation(#[from] InstantiationError)
}

impl Error {
    /// Canonical name of the class that caused the error.
    #[must_use]
    pub fn class_name(&self) -> &str {
        match self {
            Self::Mapping(e) => e.class_name(),
            Self::Instantiation(e) => e.class_name()
        }
    }

    /// Returns the mapping error, if this is one.
    #[must_use]
    pub fn as_mapping(&self) -> Option<&MappingError> {
        match self {
            Self::Mapping(e) => Some(e),
            Self::Instantiation(_) => None
        }
    }
}

/// Invalid mapping definition.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum MappingError {
    /// No id, embedded id or key field was declared.
    #[error("the entity '{class}' must declare a primary key")]
    MissingId { class: String },

    /// More than one id-bearing structure was declared.
    #[error("the entity '{class}' declares more than one primary key structure ({found})")]
    MultipleIds { class: String, found: String },

    /// Two properties resolve to the same column.
    #[error("the column name '{column}' is declared more than once in entity '{class}'")]
    DuplicateColumn { class: String, column: String },

    /// Neither the class nor the configuration names a keyspace.
    #[error("no keyspace is declared for entity '{class}' and none is configured")]
    MissingKeyspace { class: String },

    /// Key order values are not contiguous.
    #[error(
        "the {part} components ordering is wrong for class '{class}': expected order {expected} but found {found}"
    )]
    OrderingGap {
        class:    String,
        part:     KeyPart,
        expected: i32,
        found:    i32
    },

    /// The same key order value is used twice.
    #[error(
        "the {part} components of class '{class}' declare order {order} on both '{first}' and '{second}'"
    )]
    DuplicateOrder {
        class:  String,
        part:   KeyPart,
        order:  i32,
        first:  String,
        second: String
    },

    /// A key order value is zero or negative.
    #[error("the order {order} of field '{field}' in class '{class}' must be greater than 0")]
    InvalidOrder {
        class: String,
        field: String,
        order: i32
    },

    /// A legacy partition marker was used without an order.
    #[error("the field '{field}' of class '{class}' is a partition key but declares no order")]
    MissingOrder { class: String, field: String },

    /// A compound key declares clustering columns but no partition key.
    #[error("the compound key '{class}' must declare at least one partition key component")]
    MissingPartitionKey { class: String },

    /// A compound key holds fewer than two components.
    #[error("the compound key '{class}' must have at least 2 components, found {found}")]
    TooFewComponents { class: String, found: usize },

    /// Legacy and modern ordering annotations appear on the same class.
    #[error(
        "the class '{class}' is mixing old and new annotations: use either order or clustering column, not both"
    )]
    MixedAnnotations { class: String },

    /// A static column exists but the entity has no clustering column.
    #[error(
        "the entity '{class}' cannot have static column '{field}' because it declares no clustering column"
    )]
    StaticWithoutClustering { class: String, field: String },

    /// A key component is marked static.
    #[error(
        "the property '{field}' of class '{class}' cannot be a static column because it belongs to the primary key"
    )]
    StaticKeyComponent { class: String, field: String },

    /// A collection or counter is used as a key component.
    #[error(
        "the property '{field}' of class '{class}' cannot be a {kind} because it belongs to the {part} key"
    )]
    InvalidKeyComponent {
        class: String,
        field: String,
        kind:  &'static str,
        part:  KeyPart
    },

    /// The declared type has no codec.
    #[error("the type '{type_name}' of field '{field}' in class '{class}' is not supported")]
    UnsupportedType {
        class:     String,
        field:     String,
        type_name: String
    },

    /// A collection or map is declared without type arguments.
    #[error("the {kind} field '{field}' of class '{class}' must declare its type arguments")]
    RawCollection {
        class: String,
        field: String,
        kind:  &'static str
    },

    /// A collection nests another collection without JSON transcoding.
    #[error(
        "the field '{field}' of class '{class}' nests '{nested}' inside a collection; annotate the nested type as JSON"
    )]
    NestedCollection {
        class:  String,
        field:  String,
        nested: String
    },

    /// A counter property requests the ANY consistency level.
    #[error("the counter property '{field}' of class '{class}' cannot use consistency level ANY")]
    CounterAnyConsistency { class: String, field: String },

    /// A counter annotation sits on a non-counter type.
    #[error("the field '{field}' of class '{class}' is a counter but has type '{type_name}'")]
    InvalidCounter {
        class:     String,
        field:     String,
        type_name: String
    },

    /// Counter and regular columns are mixed in one table.
    #[error(
        "the entity '{class}' mixes counter column '{counter}' with regular column '{regular}'"
    )]
    CounterMix {
        class:   String,
        counter: String,
        regular: String
    },

    /// An enum encoding was requested for a non-enum type.
    #[error("the field '{field}' of class '{class}' requests an enum encoding but '{type_name}' is not an enum")]
    InvalidEnumerated {
        class:     String,
        field:     String,
        type_name: String
    },

    /// A time-based uuid marker on a non-uuid field.
    #[error("the field '{field}' of class '{class}' is marked as time uuid but has type '{type_name}'")]
    InvalidTimeUuid {
        class:     String,
        field:     String,
        type_name: String
    },

    /// An embedded id does not reference a mapped class.
    #[error("the embedded id '{field}' of class '{class}' must reference a mapped key class, found '{type_name}'")]
    InvalidEmbeddedId {
        class:     String,
        field:     String,
        type_name: String
    },

    /// A codec annotation names no codec.
    #[error("the field '{field}' of class '{class}' declares a codec annotation without a codec")]
    CodecNotDeclared { class: String, field: String },

    /// A codec annotation names something that is not a registered codec.
    #[error("the codec '{codec}' declared on field '{field}' of class '{class}' is not a registered codec")]
    UnknownCodec {
        class: String,
        field: String,
        codec: String
    },

    /// A codec reports no source or target type.
    #[error("the codec '{codec}' declared on field '{field}' of class '{class}' has no {side} type")]
    CodecMissingType {
        class: String,
        field: String,
        codec: String,
        side:  CodecSide
    },

    /// A codec source type does not match the field type.
    #[error(
        "the codec '{codec}' declared on field '{field}' of class '{class}' has source type '{found}' but the field is '{expected}'"
    )]
    CodecTypeMismatch {
        class:    String,
        field:    String,
        codec:    String,
        expected: String,
        found:    String
    },

    /// A codec target type has no column representation.
    #[error(
        "the codec '{codec}' declared on field '{field}' of class '{class}' has target type '{target}', which is not a column type"
    )]
    CodecTargetNotColumn {
        class:  String,
        field:  String,
        codec:  String,
        target: String
    },

    /// No getter was found for a private field.
    #[error("cannot find getter for field '{field}' in class '{class}', expected '{signature}'")]
    MissingGetter {
        class:     String,
        field:     String,
        signature: String
    },

    /// No setter was found for a private field.
    #[error("cannot find setter for field '{field}' in class '{class}', expected '{signature}'")]
    MissingSetter {
        class:     String,
        field:     String,
        signature: String
    },

    /// An accessor exists but its signature does not match the field type.
    #[error(
        "the accessor '{method}' of field '{field}' in class '{class}' does not match, expected '{signature}'"
    )]
    AccessorMismatch {
        class:     String,
        field:     String,
        method:    String,
        signature: String
    }
}

impl MappingError {
    /// Canonical name of the offending class.
    #[must_use]
    pub fn class_name(&self) -> &str {
        match self {
            Self::MissingId { class }
            | Self::MultipleIds { class, .. }
            | Self::DuplicateColumn { class, .. }
            | Self::MissingKeyspace { class }
            | Self::OrderingGap { class, .. }
            | Self::DuplicateOrder { class, .. }
            | Self::InvalidOrder { class, .. }
            | Self::MissingOrder { class, .. }
            | Self::MissingPartitionKey { class }
            | Self::TooFewComponents { class, .. }
            | Self::MixedAnnotations { class }
            | Self::StaticWithoutClustering { class, .. }
            | Self::StaticKeyComponent { class, .. }
            | Self::InvalidKeyComponent { class, .. }
            | Self::UnsupportedType { class, .. }
            | Self::RawCollection { class, .. }
            | Self::NestedCollection { class, .. }
            | Self::CounterAnyConsistency { class, .. }
            | Self::InvalidCounter { class, .. }
            | Self::CounterMix { class, .. }
            | Self::InvalidEnumerated { class, .. }
            | Self::InvalidTimeUuid { class, .. }
            | Self::InvalidEmbeddedId { class, .. }
            | Self::CodecNotDeclared { class, .. }
            | Self::UnknownCodec { class, .. }
            | Self::CodecMissingType { class, .. }
            | Self::CodecTypeMismatch { class, .. }
            | Self::CodecTargetNotColumn { class, .. }
            | Self::MissingGetter { class, .. }
            | Self::MissingSetter { class, .. }
            | Self::AccessorMismatch { class, .. } => class
        }
    }
}

/// A class that must be constructed cannot be.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum InstantiationError {
    /// An embedded key or JSON target lacks a usable constructor.
    #[error("cannot instantiate class '{class}': it has no default constructor")]
    MissingConstructor { class: String },

    /// A registered codec constructor failed.
    #[error("cannot instantiate codec '{codec}' for field '{field}' of class '{class}': {reason}")]
    Codec {
        class:  String,
        field:  String,
        codec:  String,
        reason: String
    }
}

impl InstantiationError {
    /// Canonical name of the offending class.
    #[must_use]
    pub fn class_name(&self) -> &str {
        match self {
            Self::MissingConstructor { class } | Self::Codec { class, .. } => class
        }
    }
}

/// Runtime transcoding failure.
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum CodecError {
    /// The value does not have the shape the codec expects.
    #[error("expected a value of type '{expected}' but got {found}")]
    TypeMismatch {
        expected: String,
        found:    &'static str
    },

    /// An enum name that the enum does not declare.
    #[error("'{constant}' is not a constant of enum '{enum_type}'")]
    UnknownConstant { enum_type: String, constant: String },

    /// An ordinal outside the declared constants.
    #[error("ordinal {ordinal} is out of range for enum '{enum_type}'")]
    OrdinalOutOfRange { enum_type: String, ordinal: i64 },

    /// JSON serialization or deserialization failed.
    #[error("JSON transcoding of '{target}' failed: {reason}")]
    Json { target: String, reason: String },

    /// A user codec reported a failure.
    #[error("codec '{codec}' failed: {reason}")]
    Custom { codec: String, reason: String }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_part_display() {
        assert_eq!(KeyPart::Partition.to_string(), "partition");
        assert_eq!(KeyPart::Clustering.to_string(), "clustering");
    }

    #[test]
    fn ordering_gap_message_names_class() {
        let err = MappingError::OrderingGap {
            class:    "app::model::Key".to_string(),
            part:     KeyPart::Partition,
            expected: 2,
            found:    3
        };
        let message = err.to_string();
        assert!(message.contains("the partition components ordering is wrong for class 'app::model::Key'"));
        assert_eq!(err.class_name(), "app::model::Key");
    }

    #[test]
    fn static_key_component_message() {
        let err = MappingError::StaticKeyComponent {
            class: "app::Ranking".to_string(),
            field: "rank".to_string()
        };
        assert!(err.to_string().contains(
            "the property 'rank' of class 'app::Ranking' cannot be a static column because it belongs to the primary key"
        ));
    }

    #[test]
    fn top_level_error_forwards_class_name() {
        let err: Error = InstantiationError::MissingConstructor {
            class: "app::Key".to_string()
        }
        .into();
        assert_eq!(err.class_name(), "app::Key");
        assert!(err.as_mapping().is_none());
    }
}
