// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use cqlmap::{Entity, Mapper, MapperConfig, descriptor::Accessor};

#[derive(Entity)]
#[entity(keyspace = "bank", accessors)]
pub struct Wallet {
    #[id]
    pub id: i64,

    balance: i64,
}

fn main() {
    let mut wallet = Wallet { id: 1, balance: 10 };
    wallet.set_balance(25);
    assert_eq!(*wallet.get_balance(), 25);

    let wallets = Mapper::new(MapperConfig::default()).entity::<Wallet>().unwrap();
    let balance = wallets.property("balance").unwrap();
    assert_eq!(balance.accessors().getter, Accessor::Method("get_balance".into()));
    assert_eq!(balance.accessors().setter, Accessor::Method("set_balance".into()));
}
