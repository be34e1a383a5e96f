// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Mapper configuration.
//!
//! [`MapperConfig`] carries the defaults every entity falls back to when its
//! annotations are silent, plus per-table overrides that win over the entity
//! annotations.
//!
//! # Precedence
//!
//! ```text
//! consistency:  field annotation > table override > class annotation > config default
//! insert:       table override > class annotation > config default
//! keyspace:     class annotation > config keyspace > error
//! naming:       field annotation > class annotation > config default
//! ```
//!
//! # Example
//!
//! ```rust
//! use cqlmap_core::config::{ConsistencyLevel, MapperConfig, TableOverride};
//!
//! let config = MapperConfig::builder()
//!     .keyspace("analytics")
//!     .read_consistency(ConsistencyLevel::LocalQuorum)
//!     .table_override(
//!         "analytics.events",
//!         TableOverride {
//!             write_consistency: Some(ConsistencyLevel::All),
//!             ..TableOverride::default()
//!         }
//!     )
//!     .build();
//!
//! assert_eq!(config.keyspace(), Some("analytics"));
//! ```

use std::{collections::HashMap, fmt, sync::Arc};

use serde::{Deserialize, Serialize};

use crate::{
    codec::{CodecRegistry, JsonMapperFactory, SerdeJsonMapperFactory},
    naming::NamingStrategy
};

/// Consistency level of a read or write.
///
/// Declaration order matches the wire protocol numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConsistencyLevel {
    /// A write must be written to at least one node, hints included.
    Any,
    /// One replica.
    One,
    /// Two replicas.
    Two,
    /// Three replicas.
    Three,
    /// A majority of replicas.
    Quorum,
    /// All replicas.
    All,
    /// A majority of replicas in the local datacenter.
    LocalQuorum,
    /// A majority of replicas in each datacenter.
    EachQuorum,
    /// Serial (lightweight transaction) consistency.
    Serial,
    /// Local serial consistency.
    LocalSerial,
    /// One replica in the local datacenter.
    LocalOne
}

impl ConsistencyLevel {
    /// Parse a level from its attribute spelling (`"LOCAL_QUORUM"`,
    /// `"local_quorum"`).
    #[must_use]
    pub fn from_name(value: &str) -> Option<Self> {
        let level = match value.to_ascii_uppercase().replace('-', "_").as_str() {
            "ANY" => Self::Any,
            "ONE" => Self::One,
            "TWO" => Self::Two,
            "THREE" => Self::Three,
            "QUORUM" => Self::Quorum,
            "ALL" => Self::All,
            "LOCAL_QUORUM" => Self::LocalQuorum,
            "EACH_QUORUM" => Self::EachQuorum,
            "SERIAL" => Self::Serial,
            "LOCAL_SERIAL" => Self::LocalSerial,
            "LOCAL_ONE" => Self::LocalOne,
            _ => return None
        };
        Some(level)
    }

    /// Protocol name of the level.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Any => "ANY",
            Self::One => "ONE",
            Self::Two => "TWO",
            Self::Three => "THREE",
            Self::Quorum => "QUORUM",
            Self::All => "ALL",
            Self::LocalQuorum => "LOCAL_QUORUM",
            Self::EachQuorum => "EACH_QUORUM",
            Self::Serial => "SERIAL",
            Self::LocalSerial => "LOCAL_SERIAL",
            Self::LocalOne => "LOCAL_ONE"
        }
    }
}

impl fmt::Display for ConsistencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which columns an insert statement binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsertStrategy {
    /// Every mapped column, nulls included.
    #[default]
    AllFields,

    /// Only columns whose value is not null.
    NotNullFields
}

impl InsertStrategy {
    /// Parse a strategy from its attribute spelling.
    #[must_use]
    pub fn from_name(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().replace('-', "_").as_str() {
            "all_fields" | "all" => Some(Self::AllFields),
            "not_null_fields" | "not_null" => Some(Self::NotNullFields),
            _ => None
        }
    }
}

/// Per-table settings keyed by qualified table name (`keyspace.table`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOverride {
    /// Read consistency for the table.
    pub read_consistency: Option<ConsistencyLevel>,

    /// Write consistency for the table.
    pub write_consistency: Option<ConsistencyLevel>,

    /// Insert strategy for the table.
    pub insert_strategy: Option<InsertStrategy>,

    /// Whether schema updates are allowed for the table.
    pub schema_update: Option<bool>
}

/// Plain, file-loadable part of the configuration.
///
/// ```rust
/// use cqlmap_core::config::{ConsistencyLevel, MapperSettings};
///
/// let settings: MapperSettings = serde_json::from_str(
///     r#"{ "keyspace": "shop", "read_consistency": "LOCAL_ONE" }"#
/// )
/// .unwrap();
/// assert_eq!(settings.read_consistency, ConsistencyLevel::LocalOne);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperSettings {
    /// Keyspace used when an entity declares none.
    pub keyspace: Option<String>,

    /// Default read consistency.
    pub read_consistency: ConsistencyLevel,

    /// Default write consistency.
    pub write_consistency: ConsistencyLevel,

    /// Default naming strategy.
    pub naming: NamingStrategy,

    /// Default insert strategy.
    pub insert_strategy: InsertStrategy,

    /// Whether schema updates are allowed by default.
    pub schema_update: bool,

    /// Overrides keyed by `keyspace.table`.
    pub tables: HashMap<String, TableOverride>
}

impl Default for MapperSettings {
    fn default() -> Self {
        Self {
            keyspace:          None,
            read_consistency:  ConsistencyLevel::One,
            write_consistency: ConsistencyLevel::One,
            naming:            NamingStrategy::default(),
            insert_strategy:   InsertStrategy::default(),
            schema_update:     false,
            tables:            HashMap::new()
        }
    }
}

/// Complete mapper configuration.
#[derive(Clone)]
pub struct MapperConfig {
    settings:     MapperSettings,
    json_mappers: Arc<dyn JsonMapperFactory>,
    codecs:       CodecRegistry
}

impl MapperConfig {
    /// Start building a configuration.
    #[must_use]
    pub fn builder() -> MapperConfigBuilder {
        MapperConfigBuilder::default()
    }

    /// Build a configuration from loaded settings with the default JSON
    /// mapper and an empty codec registry.
    #[must_use]
    pub fn from_settings(settings: MapperSettings) -> Self {
        Self {
            settings,
            json_mappers: Arc::new(SerdeJsonMapperFactory),
            codecs: CodecRegistry::new()
        }
    }

    /// Keyspace used when an entity declares none.
    #[must_use]
    pub fn keyspace(&self) -> Option<&str> {
        self.settings.keyspace.as_deref()
    }

    /// Default read consistency.
    #[must_use]
    pub fn read_consistency(&self) -> ConsistencyLevel {
        self.settings.read_consistency
    }

    /// Default write consistency.
    #[must_use]
    pub fn write_consistency(&self) -> ConsistencyLevel {
        self.settings.write_consistency
    }

    /// Default naming strategy.
    #[must_use]
    pub fn naming(&self) -> NamingStrategy {
        self.settings.naming
    }

    /// Default insert strategy.
    #[must_use]
    pub fn insert_strategy(&self) -> InsertStrategy {
        self.settings.insert_strategy
    }

    /// Whether schema updates are allowed by default.
    #[must_use]
    pub fn schema_update(&self) -> bool {
        self.settings.schema_update
    }

    /// Override registered for a qualified table name.
    #[must_use]
    pub fn table_override(&self, qualified_table: &str) -> Option<&TableOverride> {
        self.settings.tables.get(qualified_table)
    }

    /// JSON mapper factory.
    #[must_use]
    pub fn json_mappers(&self) -> &Arc<dyn JsonMapperFactory> {
        &self.json_mappers
    }

    /// Registered custom codecs.
    #[must_use]
    pub fn codecs(&self) -> &CodecRegistry {
        &self.codecs
    }

    /// Loaded settings.
    #[must_use]
    pub fn settings(&self) -> &MapperSettings {
        &self.settings
    }
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self::from_settings(MapperSettings::default())
    }
}

impl fmt::Debug for MapperConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapperConfig")
            .field("settings", &self.settings)
            .field("codecs", &self.codecs)
            .finish_non_exhaustive()
    }
}

/// Builder for [`MapperConfig`].
#[derive(Default)]
pub struct MapperConfigBuilder {
    settings:     MapperSettings,
    json_mappers: Option<Arc<dyn JsonMapperFactory>>,
    codecs:       CodecRegistry
}

impl MapperConfigBuilder {
    /// Start from loaded settings.
    #[must_use]
    pub fn settings(mut self, settings: MapperSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Keyspace used when an entity declares none.
    #[must_use]
    pub fn keyspace(mut self, keyspace: impl Into<String>) -> Self {
        self.settings.keyspace = Some(keyspace.into());
        self
    }

    /// Default read consistency.
    #[must_use]
    pub fn read_consistency(mut self, level: ConsistencyLevel) -> Self {
        self.settings.read_consistency = level;
        self
    }

    /// Default write consistency.
    #[must_use]
    pub fn write_consistency(mut self, level: ConsistencyLevel) -> Self {
        self.settings.write_consistency = level;
        self
    }

    /// Default naming strategy.
    #[must_use]
    pub fn naming(mut self, naming: NamingStrategy) -> Self {
        self.settings.naming = naming;
        self
    }

    /// Default insert strategy.
    #[must_use]
    pub fn insert_strategy(mut self, strategy: InsertStrategy) -> Self {
        self.settings.insert_strategy = strategy;
        self
    }

    /// Allow schema updates by default.
    #[must_use]
    pub fn schema_update(mut self, enabled: bool) -> Self {
        self.settings.schema_update = enabled;
        self
    }

    /// Register an override for `keyspace.table`.
    #[must_use]
    pub fn table_override(mut self, qualified_table: impl Into<String>, value: TableOverride) -> Self {
        self.settings.tables.insert(qualified_table.into(), value);
        self
    }

    /// Use a custom JSON mapper factory.
    #[must_use]
    pub fn json_mappers(mut self, factory: Arc<dyn JsonMapperFactory>) -> Self {
        self.json_mappers = Some(factory);
        self
    }

    /// Use a populated codec registry.
    #[must_use]
    pub fn codecs(mut self, codecs: CodecRegistry) -> Self {
        self.codecs = codecs;
        self
    }

    /// Finish the configuration.
    #[must_use]
    pub fn build(self) -> MapperConfig {
        MapperConfig {
            settings:     self.settings,
            json_mappers: self
                .json_mappers
                .unwrap_or_else(|| Arc::new(SerdeJsonMapperFactory)),
            codecs:       self.codecs
        }
    }
}
