// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[derive(Mapped)]` implementation.
//!
//! Structs get the same impls as entities without the entity annotation.
//! Unit enums get a `MappedType` impl listing their variants in declaration
//! order, which is the ordinal encoding.

use darling::FromDeriveInput;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DataEnum, DeriveInput, parse_macro_input};

use crate::entity::{
    generate,
    parse::{ClassDef, MappedAttrs, reject_generics}
};

/// Main entry point for the Mapped derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

fn expand(input: &DeriveInput) -> darling::Result<TokenStream2> {
    let attrs = MappedAttrs::from_derive_input(input)?;

    match &input.data {
        Data::Enum(data) => {
            reject_generics(input)?;
            if attrs.naming.is_some() || attrs.accessors {
                return Err(
                    darling::Error::custom("`naming` and `accessors` apply to structs only")
                        .with_span(&input.ident)
                );
            }
            Ok(enumeration(&attrs.ident, data))
        }
        _ => ClassDef::from_mapped_input(input, attrs).map(|class| generate::class(&class))
    }
}

fn enumeration(ident: &syn::Ident, data: &DataEnum) -> TokenStream2 {
    let name = generate::canonical_name(ident);
    let variants: Vec<String> = data.variants.iter().map(|v| v.ident.to_string()).collect();
    let count = variants.len();

    quote! {
        impl ::cqlmap_core::meta::MappedType for #ident {
            fn type_ref() -> ::cqlmap_core::meta::TypeRef {
                let constants: [&str; #count] = [#(#variants),*];
                ::cqlmap_core::meta::TypeRef::enumeration(#name, constants)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_enum_lists_variants_in_order() {
        let input: DeriveInput = syn::parse_quote! {
            pub enum Status { Active, Suspended, Closed }
        };
        let code = expand(&input).unwrap().to_string();
        assert!(code.contains("impl :: cqlmap_core :: meta :: MappedType for Status"));
        assert!(code.contains("[\"Active\" , \"Suspended\" , \"Closed\"]"));
        assert!(code.contains("[& str ; 3usize]"));
        assert!(!code.contains("MappedClass for Status"));
    }

    #[test]
    fn struct_gets_class_impls() {
        let input: DeriveInput = syn::parse_quote! {
            pub struct EventKey {
                #[partition_key]
                pub user_id: i64,
            }
        };
        let code = expand(&input).unwrap().to_string();
        assert!(code.contains("MappedClass for EventKey"));
        assert!(!code.contains("Annotation :: Entity"));
    }

    #[test]
    fn enum_rejects_struct_options() {
        let input: DeriveInput = syn::parse_quote! {
            #[mapped(accessors)]
            pub enum Status { Active }
        };
        let message = expand(&input).unwrap_err().to_string();
        assert!(message.contains("apply to structs only"));
    }
}
