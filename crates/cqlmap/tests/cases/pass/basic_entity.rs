// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cqlmap::{Entity, Mapper, MapperConfig};
use uuid::Uuid;

/// Registered customer.
#[derive(Entity)]
#[entity(table = "customers", naming = "snake_case")]
pub struct Customer {
    #[id]
    pub customer_id: Uuid,

    pub full_name: String,

    #[column(name = "mail")]
    pub email: Option<String>,

    #[transient]
    pub session_token: String,
}

fn main() {
    let mapper = Mapper::new(MapperConfig::builder().keyspace("shop").build());
    let customers = mapper.entity::<Customer>().unwrap();

    assert_eq!(customers.qualified_table_name(), "shop.customers");
    assert_eq!(customers.column_names(), ["customer_id", "full_name", "mail"]);
    assert_eq!(customers.description(), Some("Registered customer."));
    assert!(customers.property("session_token").is_none());
}
