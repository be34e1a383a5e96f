// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(Entity)]` implementation.
//!
//! # Architecture
//!
//! ```text
//! DeriveInput ── parse ──► ClassDef ── generate ──► MappedClass + MappedType
//! ```
//!
//! Parsing only checks attribute syntax. Mapping rules (key ordering,
//! column uniqueness, codec selection) are enforced when `cqlmap_core`
//! parses the generated metadata.

pub mod generate;
pub mod parse;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

use self::parse::ClassDef;

/// Main entry point for the Entity derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match ClassDef::from_entity_input(&input) {
        Ok(class) => generate::class(&class).into(),
        Err(err) => err.write_errors().into()
    }
}
