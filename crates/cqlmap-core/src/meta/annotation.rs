// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mapping annotations.

use serde::{Deserialize, Serialize};

use crate::{
    config::{ConsistencyLevel, InsertStrategy},
    naming::NamingStrategy
};

/// Kind of secondary index requested on a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexKind {
    /// Plain column index.
    Simple,
    /// Index over the values of a list or set.
    Collection,
    /// Index over the keys of a map.
    MapKey,
    /// Index over the values of a map.
    MapValue,
    /// Index over the entries of a map.
    MapEntry
}

/// How an enum travels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnumEncoding {
    /// Constant name as text.
    #[default]
    Name,

    /// Zero-based declaration position as int.
    Ordinal
}

/// One mapping annotation on a class, field or type use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Marks a class as a table entity.
    Entity {
        /// Explicit keyspace.
        keyspace: Option<String>,
        /// Explicit table name.
        table:    Option<String>
    },

    /// Naming strategy for the class or a single field.
    Naming(NamingStrategy),

    /// Insert strategy of the entity.
    Insert(InsertStrategy),

    /// Consistency levels of the entity or a single property.
    Consistency {
        /// Read level.
        read:  Option<ConsistencyLevel>,
        /// Write level.
        write: Option<ConsistencyLevel>
    },

    /// Single-column primary key.
    Id,

    /// Primary key held by a dedicated key class.
    EmbeddedId,

    /// Partition key component, with an order for composite partitions.
    PartitionKey {
        /// One-based position among partition components.
        order: Option<i32>
    },

    /// Clustering column.
    ClusteringColumn {
        /// One-based position among clustering components.
        order:    i32,
        /// Descending sort.
        reversed: bool
    },

    /// Legacy key component position, shared by partition and clustering.
    Order {
        /// One-based position in the whole key.
        value:    i32,
        /// Descending sort.
        reversed: bool
    },

    /// Column mapping, optionally with an explicit name.
    Column {
        /// Column name used verbatim.
        name: Option<String>
    },

    /// Static column.
    Static,

    /// Counter column.
    Counter,

    /// Secondary index.
    Index(IndexKind),

    /// Enum encoding.
    Enumerated(EnumEncoding),

    /// JSON transcoding.
    Json,

    /// Custom codec registered under `path`.
    Codec {
        /// Registry key of the codec.
        path: String
    },

    /// Time-based uuid.
    TimeUuid
}

impl Annotation {
    /// Whether the annotation places a field in the primary key.
    #[must_use]
    pub const fn is_key_marker(&self) -> bool {
        matches!(
            self,
            Self::Id | Self::PartitionKey { .. } | Self::ClusteringColumn { .. } | Self::Order { .. }
        )
    }
}

/// Lookup helpers over an annotation list.
pub trait AnnotationsExt {
    /// Keyspace and table of an entity annotation.
    fn entity(&self) -> Option<(Option<&str>, Option<&str>)>;
    /// Naming strategy.
    fn naming(&self) -> Option<NamingStrategy>;
    /// Insert strategy.
    fn insert_strategy(&self) -> Option<InsertStrategy>;
    /// Read and write consistency.
    fn consistency(&self) -> Option<(Option<ConsistencyLevel>, Option<ConsistencyLevel>)>;
    /// Single-column id marker.
    fn has_id(&self) -> bool;
    /// Embedded id marker.
    fn has_embedded_id(&self) -> bool;
    /// Partition key marker and its optional order.
    fn partition_key(&self) -> Option<Option<i32>>;
    /// Clustering column order and reversed flag.
    fn clustering_column(&self) -> Option<(i32, bool)>;
    /// Legacy order value and reversed flag.
    fn order(&self) -> Option<(i32, bool)>;
    /// Explicit column name.
    fn column_name(&self) -> Option<&str>;
    /// Static column marker.
    fn is_static(&self) -> bool;
    /// Counter marker.
    fn is_counter(&self) -> bool;
    /// Index kind.
    fn index(&self) -> Option<IndexKind>;
    /// Enum encoding.
    fn enumerated(&self) -> Option<EnumEncoding>;
    /// JSON marker.
    fn is_json(&self) -> bool;
    /// Custom codec path.
    fn codec(&self) -> Option<&str>;
    /// Time uuid marker.
    fn is_time_uuid(&self) -> bool;
    /// Whether any annotation places the field in the primary key.
    fn has_key_marker(&self) -> bool;
}

impl AnnotationsExt for [Annotation] {
    fn entity(&self) -> Option<(Option<&str>, Option<&str>)> {
        self.iter().find_map(|a| match a {
            Annotation::Entity { keyspace, table } => {
                Some((keyspace.as_deref(), table.as_deref()))
            }
            _ => None
        })
    }

    fn naming(&self) -> Option<NamingStrategy> {
        self.iter().find_map(|a| match a {
            Annotation::Naming(strategy) => Some(*strategy),
            _ => None
        })
    }

    fn insert_strategy(&self) -> Option<InsertStrategy> {
        self.iter().find_map(|a| match a {
            Annotation::Insert(strategy) => Some(*strategy),
            _ => None
        })
    }

    fn consistency(&self) -> Option<(Option<ConsistencyLevel>, Option<ConsistencyLevel>)> {
        self.iter().find_map(|a| match a {
            Annotation::Consistency { read, write } => Some((*read, *write)),
            _ => None
        })
    }

    fn has_id(&self) -> bool {
        self.iter().any(|a| matches!(a, Annotation::Id))
    }

    fn has_embedded_id(&self) -> bool {
        self.iter().any(|a| matches!(a, Annotation::EmbeddedId))
    }

    fn partition_key(&self) -> Option<Option<i32>> {
        self.iter().find_map(|a| match a {
            Annotation::PartitionKey { order } => Some(*order),
            _ => None
        })
    }

    fn clustering_column(&self) -> Option<(i32, bool)> {
        self.iter().find_map(|a| match a {
            Annotation::ClusteringColumn { order, reversed } => Some((*order, *reversed)),
            _ => None
        })
    }

    fn order(&self) -> Option<(i32, bool)> {
        self.iter().find_map(|a| match a {
            Annotation::Order { value, reversed } => Some((*value, *reversed)),
            _ => None
        })
    }

    fn column_name(&self) -> Option<&str> {
        self.iter().find_map(|a| match a {
            Annotation::Column { name } => name.as_deref(),
            _ => None
        })
    }

    fn is_static(&self) -> bool {
        self.iter().any(|a| matches!(a, Annotation::Static))
    }

    fn is_counter(&self) -> bool {
        self.iter().any(|a| matches!(a, Annotation::Counter))
    }

    fn index(&self) -> Option<IndexKind> {
        self.iter().find_map(|a| match a {
            Annotation::Index(kind) => Some(*kind),
            _ => None
        })
    }

    fn enumerated(&self) -> Option<EnumEncoding> {
        self.iter().find_map(|a| match a {
            Annotation::Enumerated(encoding) => Some(*encoding),
            _ => None
        })
    }

    fn is_json(&self) -> bool {
        self.iter().any(|a| matches!(a, Annotation::Json))
    }

    fn codec(&self) -> Option<&str> {
        self.iter().find_map(|a| match a {
            Annotation::Codec { path } => Some(path.as_str()),
            _ => None
        })
    }

    fn is_time_uuid(&self) -> bool {
        self.iter().any(|a| matches!(a, Annotation::TimeUuid))
    }

    fn has_key_marker(&self) -> bool {
        self.iter().any(Annotation::is_key_marker)
    }
}
