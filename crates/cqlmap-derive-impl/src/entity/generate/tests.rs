// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use syn::DeriveInput;

use super::*;

fn generate(input: DeriveInput) -> String {
    let class = ClassDef::from_entity_input(&input).unwrap();
    super::class(&class).to_string()
}

#[test]
fn implements_both_traits() {
    let code = generate(syn::parse_quote! {
        pub struct User {
            #[id]
            pub id: Uuid,
        }
    });

    assert!(code.contains("impl :: cqlmap_core :: meta :: MappedClass for User"));
    assert!(code.contains("impl :: cqlmap_core :: meta :: MappedType for User"));
    assert!(code.contains("OnceLock"));
    assert!(code.contains("stringify ! (User)"));
}

#[test]
fn fields_carry_annotations() {
    let code = generate(syn::parse_quote! {
        #[entity(keyspace = "app")]
        pub struct User {
            #[id]
            pub id: Uuid,
            #[column(name = "display")]
            name: String,
        }
    });

    assert!(code.contains("FieldMeta :: new (\"id\""));
    assert!(code.contains("Annotation :: Id"));
    assert!(code.contains("FieldMeta :: new (\"name\""));
    assert!(code.contains(". private ()"));
    assert!(code.contains("String :: from (\"app\")"));
    assert!(code.contains("String :: from (\"display\")"));
}

#[test]
fn byte_vectors_are_blobs() {
    let code = generate(syn::parse_quote! {
        pub struct Blob {
            #[id]
            pub id: i64,
            pub data: Vec<u8>,
        }
    });
    assert!(code.contains("TypeRef :: bytes ()"));
    assert!(!code.contains("< Vec < u8 > as"));
}

#[test]
fn type_use_annotations_target_arguments() {
    let code = generate(syn::parse_quote! {
        pub struct Board {
            #[id]
            pub id: i64,
            #[enumerated(ordinal)]
            pub states: HashMap<String, State>,
        }
    });
    assert!(code.contains("ty . args . get_mut (1usize)"));
    assert!(code.contains("EnumEncoding :: Ordinal"));
}

#[test]
fn accessors_are_generated_and_recorded() {
    let code = generate(syn::parse_quote! {
        #[entity(accessors)]
        pub struct Account {
            #[id]
            pub id: i64,
            balance: i64,
        }
    });

    assert!(code.contains("pub fn get_balance (& self) -> & i64"));
    assert!(code.contains("pub fn set_balance (& mut self , value : i64)"));
    assert!(code.contains("MethodMeta :: getter (\"get_balance\""));
    assert!(code.contains("MethodMeta :: setter (\"set_balance\""));
    assert!(!code.contains("get_id"));
}

#[test]
fn no_accessors_without_option() {
    let code = generate(syn::parse_quote! {
        pub struct Account {
            #[id]
            pub id: i64,
            balance: i64,
        }
    });
    assert!(!code.contains("get_balance"));
}

#[test]
fn parent_and_doc() {
    let code = generate(syn::parse_quote! {
        /// A post.
        pub struct Post {
            #[parent]
            pub audit: Audited,
            #[id]
            pub id: i64,
        }
    });
    assert!(code.contains("class . parent"));
    assert!(code.contains("< Audited as :: cqlmap_core :: meta :: MappedClass > :: class_meta ()"));
    assert!(!code.contains("FieldMeta :: new (\"audit\""));
    assert!(code.contains("\"A post.\""));
}

#[test]
fn embedded_id_requires_default() {
    let code = generate(syn::parse_quote! {
        pub struct Event {
            #[embedded_id]
            pub key: EventKey,
        }
    });
    assert!(code.contains("assert_default :: < EventKey > ()"));
}
