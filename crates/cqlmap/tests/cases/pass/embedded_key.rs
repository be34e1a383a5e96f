// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use chrono::{DateTime, Utc};
use cqlmap::{Entity, Mapped, Mapper, MapperConfig, descriptor::ClusteringOrder};

#[derive(Mapped, Default)]
pub struct ReadingKey {
    #[partition_key]
    pub sensor: String,

    #[partition_key(order = 2)]
    pub day: i32,

    #[clustering_column(1, reversed)]
    pub taken_at: DateTime<Utc>,
}

#[derive(Entity)]
#[entity(keyspace = "telemetry")]
pub struct Reading {
    #[embedded_id]
    pub key: ReadingKey,

    pub celsius: f64,
}

fn main() {
    let readings = Mapper::new(MapperConfig::default()).entity::<Reading>().unwrap();
    let key = readings.id().compound_key().unwrap();

    assert_eq!(key.partition().names(), ["sensor", "day"]);
    assert_eq!(key.clustering().clustering_order(), [("taken_at", ClusteringOrder::Desc)]);
    assert_eq!(readings.column_names(), ["sensor", "day", "taken_at", "celsius"]);
}
