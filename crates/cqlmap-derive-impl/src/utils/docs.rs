// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Documentation extraction utilities.
//!
//! Doc comments (`///` and `/** */`) reach a derive as `#[doc = "..."]`
//! attributes. They are collected here and stored on the generated
//! `ClassMeta` and `FieldMeta`, where they become entity and property
//! descriptions.
//!
//! # Example
//!
//! ```rust,ignore
//! /// Account owned by a user.
//! ///
//! /// Balances are kept in minor units.
//! #[derive(Entity)]
//! pub struct Account { ... }
//!
//! // Extracts to: "Account owned by a user.\n\nBalances are kept in minor units."
//! ```

use syn::Attribute;

/// Extract doc comments from attributes.
///
/// Combines all `#[doc = "..."]` attributes into a single string,
/// trimming whitespace around each line.
///
/// # Returns
///
/// Combined doc string, or `None` if no doc comments present.
pub fn extract_doc_comments(attrs: &[Attribute]) -> Option<String> {
    let doc_lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| {
            if let syn::Meta::NameValue(meta) = &attr.meta
                && let syn::Expr::Lit(syn::ExprLit {
                    lit: syn::Lit::Str(lit_str),
                    ..
                }) = &meta.value
            {
                return Some(lit_str.value());
            }
            None
        })
        .collect();

    if doc_lines.is_empty() {
        return None;
    }

    let combined = doc_lines
        .iter()
        .map(|line| line.trim())
        .collect::<Vec<_>>()
        .join("\n");

    let trimmed = combined.trim().to_string();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}
