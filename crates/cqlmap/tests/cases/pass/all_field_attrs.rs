// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use std::collections::{BTreeSet, HashMap};

use chrono::{DateTime, Utc};
use cqlmap::{Entity, Mapped, Mapper, MapperConfig};
use uuid::Uuid;

#[derive(Mapped)]
pub enum Mood {
    Calm,
    Busy,
}

#[derive(Entity)]
#[entity(
    keyspace = "social",
    table = "timeline",
    naming = "snake_case",
    insert = "not_null_fields",
    read_consistency = "LOCAL_ONE",
    write_consistency = "LOCAL_QUORUM"
)]
pub struct Timeline {
    #[partition_key]
    pub owner_id: i64,

    #[clustering_column(order = 1, reversed)]
    #[time_uuid]
    pub post_id: Uuid,

    #[static_column]
    pub owner_name: String,

    #[enumerated(ordinal)]
    #[index]
    pub mood: Mood,

    #[enumerated]
    pub moods: BTreeSet<Mood>,

    #[enumerated(ordinal)]
    #[index(values)]
    pub reactions: HashMap<String, Mood>,

    #[json(value)]
    pub extras: HashMap<String, serde_json::Value>,

    #[naming("case_sensitive")]
    #[consistency(read = "QUORUM")]
    pub displayName: String,

    pub attachment: Vec<u8>,

    pub edited_at: Option<DateTime<Utc>>,
}

fn main() {
    let timeline = Mapper::new(MapperConfig::default()).entity::<Timeline>().unwrap();
    assert_eq!(timeline.qualified_table_name(), "social.timeline");
    assert_eq!(timeline.static_columns().len(), 1);
    assert_eq!(timeline.property("displayName").unwrap().column(), "\"displayName\"");
}
