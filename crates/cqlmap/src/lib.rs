// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # cqlmap
//!
//! One crate for users. Re-exports:
//! - [`Entity`] and [`Mapped`] derive macros from `cqlmap-derive-impl`
//! - Everything from `cqlmap-core` ([`Mapper`], [`MapperConfig`],
//!   [`EntityDescriptor`], [`Codec`], ...)

pub use cqlmap_core::*;
pub use cqlmap_derive_impl::{Entity, Mapped};
