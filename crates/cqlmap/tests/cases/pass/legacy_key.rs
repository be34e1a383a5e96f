// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cqlmap::{Entity, Mapped, Mapper, MapperConfig, descriptor::ClusteringOrder};

#[derive(Mapped, Default)]
pub struct LedgerKey {
    #[partition_key]
    #[order(1)]
    pub account: String,

    #[order(2)]
    pub year: i32,

    #[order(3, reversed)]
    pub seq: i64,
}

#[derive(Entity)]
pub struct Ledger {
    #[embedded_id]
    pub key: LedgerKey,

    pub amount: i64,
}

fn main() {
    let config = MapperConfig::builder().keyspace("bank").build();
    let ledger = Mapper::new(config).entity::<Ledger>().unwrap();
    let key = ledger.id().compound_key().unwrap();

    assert_eq!(key.partition().names(), ["account"]);
    assert_eq!(key.clustering().names(), ["year", "seq"]);
    assert_eq!(key.clustering().orders(), [ClusteringOrder::Asc, ClusteringOrder::Desc]);
}
