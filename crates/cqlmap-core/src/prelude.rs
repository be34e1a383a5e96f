// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust
//! use cqlmap_core::prelude::*;
//! ```

pub use crate::{
    Codec, ConsistencyLevel, Counter, EntityDescriptor, Error, InsertStrategy, Mapper, MapperConfig,
    MappingError, PropertyDescriptor, Value,
    descriptor::ClusteringOrder,
    meta::{MappedClass, MappedType},
    naming::NamingStrategy
};
