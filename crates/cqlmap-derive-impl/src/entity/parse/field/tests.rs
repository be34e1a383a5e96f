// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use quote::quote;
use syn::{Field, parse_quote};

use super::*;

fn parse_field(tokens: proc_macro2::TokenStream) -> FieldDef {
    let field: Field = parse_quote!(#tokens);
    FieldDef::from_field(&field).unwrap()
}

fn parse_error(tokens: proc_macro2::TokenStream) -> String {
    let field: Field = parse_quote!(#tokens);
    FieldDef::from_field(&field).unwrap_err().to_string()
}

#[test]
fn plain_field_gets_default_column() {
    let field = parse_field(quote! { pub name: String });
    assert_eq!(field.name_str(), "name");
    assert!(field.is_pub);
    assert!(field.is_mapped());
    assert_eq!(field.annotations, [AnnotationDef::Column(None)]);
}

#[test]
fn explicit_column_name() {
    let field = parse_field(quote! {
        #[column(name = "full_name")]
        name: String
    });
    assert!(!field.is_pub);
    assert_eq!(field.annotations, [AnnotationDef::Column(Some("full_name".into()))]);

    let field = parse_field(quote! {
        #[column("alias")]
        pub name: String
    });
    assert_eq!(field.annotations, [AnnotationDef::Column(Some("alias".into()))]);
}

#[test]
fn raw_identifier_is_unrawed() {
    let field = parse_field(quote! { pub r#type: String });
    assert_eq!(field.name_str(), "type");
}

#[test]
fn key_markers() {
    let field = parse_field(quote! {
        #[partition_key]
        pub user_id: i64
    });
    assert_eq!(field.annotations[0], AnnotationDef::PartitionKey(None));

    let field = parse_field(quote! {
        #[partition_key(order = 2)]
        pub bucket: i32
    });
    assert_eq!(field.annotations[0], AnnotationDef::PartitionKey(Some(2)));

    let field = parse_field(quote! {
        #[clustering_column(2, reversed)]
        pub created_at: i64
    });
    assert_eq!(
        field.annotations[0],
        AnnotationDef::ClusteringColumn {
            order:    2,
            reversed: true
        }
    );

    let field = parse_field(quote! {
        #[embedded_id]
        pub key: EventKey
    });
    assert!(field.is_embedded_id());
}

#[test]
fn bare_clustering_column_is_first() {
    let field = parse_field(quote! {
        #[clustering_column]
        pub time: i64
    });
    assert_eq!(
        field.annotations[0],
        AnnotationDef::ClusteringColumn {
            order:    1,
            reversed: false
        }
    );
}

#[test]
fn legacy_order_accepts_negative_positions() {
    let field = parse_field(quote! {
        #[order(-1)]
        pub id: i64
    });
    assert_eq!(
        field.annotations[0],
        AnnotationDef::Order {
            value:    -1,
            reversed: false
        }
    );

    let field = parse_field(quote! {
        #[partition_key]
        #[order(value = 1)]
        pub id: i64
    });
    assert_eq!(field.annotations[0], AnnotationDef::PartitionKey(None));
    assert_eq!(
        field.annotations[1],
        AnnotationDef::Order {
            value:    1,
            reversed: false
        }
    );
}

#[test]
fn order_requires_position() {
    let message = parse_error(quote! {
        #[order(reversed)]
        pub id: i64
    });
    assert!(message.contains("#[order] requires a position"));
}

#[test]
fn reversed_partition_key_is_rejected() {
    let message = parse_error(quote! {
        #[partition_key(1, reversed)]
        pub id: i64
    });
    assert!(message.contains("cannot be reversed"));
}

#[test]
fn flags_and_index() {
    let field = parse_field(quote! {
        #[static_column]
        #[index(keys)]
        pub tags: HashMap<String, i32>
    });
    assert_eq!(
        field.annotations,
        [
            AnnotationDef::Static,
            AnnotationDef::Index(IndexOption::MapKey),
            AnnotationDef::Column(None)
        ]
    );

    let field = parse_field(quote! {
        #[time_uuid]
        #[index]
        pub event: Uuid
    });
    assert_eq!(field.annotations[0], AnnotationDef::TimeUuid);
    assert_eq!(field.annotations[1], AnnotationDef::Index(IndexOption::Simple));
}

#[test]
fn naming_and_consistency() {
    let field = parse_field(quote! {
        #[naming("case_sensitive")]
        #[consistency(read = "LOCAL_QUORUM", write = "each_quorum")]
        pub displayName: String
    });
    assert_eq!(field.annotations[0], AnnotationDef::Naming(NamingOption::CaseSensitive));
    assert_eq!(
        field.annotations[1],
        AnnotationDef::Consistency {
            read:  Some(ConsistencyOption::LocalQuorum),
            write: Some(ConsistencyOption::EachQuorum)
        }
    );
}

#[test]
fn unknown_consistency_level() {
    let message = parse_error(quote! {
        #[consistency(read = "MOST")]
        pub name: String
    });
    assert!(message.contains("unknown consistency level"));
}

#[test]
fn enumerated_targets_follow_type_shape() {
    let field = parse_field(quote! {
        #[enumerated(ordinal)]
        pub status: Status
    });
    assert_eq!(field.annotations[0], AnnotationDef::Enumerated(EncodingOption::Ordinal));
    assert!(field.type_annotations.is_empty());

    let field = parse_field(quote! {
        #[enumerated]
        pub statuses: Vec<Status>
    });
    assert_eq!(
        field.type_annotations,
        [(TypeTarget::Element, AnnotationDef::Enumerated(EncodingOption::Name))]
    );

    let field = parse_field(quote! {
        #[enumerated(ordinal)]
        pub by_user: HashMap<i64, Status>
    });
    assert_eq!(
        field.type_annotations,
        [(TypeTarget::Value, AnnotationDef::Enumerated(EncodingOption::Ordinal))]
    );

    let field = parse_field(quote! {
        #[enumerated(key)]
        pub counts: BTreeMap<Status, i32>
    });
    assert_eq!(
        field.type_annotations,
        [(TypeTarget::Key, AnnotationDef::Enumerated(EncodingOption::Name))]
    );
}

#[test]
fn json_and_codec_targets() {
    let field = parse_field(quote! {
        #[json]
        pub profile: Profile
    });
    assert_eq!(field.annotations[0], AnnotationDef::Json);

    let field = parse_field(quote! {
        #[json(value)]
        pub settings: HashMap<String, Setting>
    });
    assert_eq!(field.type_annotations, [(TypeTarget::Value, AnnotationDef::Json)]);

    let field = parse_field(quote! {
        #[codec("app::codecs::Money")]
        pub price: String
    });
    assert_eq!(field.annotations[0], AnnotationDef::Codec("app::codecs::Money".into()));

    let field = parse_field(quote! {
        #[codec(path = "upper", element)]
        pub tags: Vec<String>
    });
    assert_eq!(
        field.type_annotations,
        [(TypeTarget::Element, AnnotationDef::Codec("upper".into()))]
    );
}

#[test]
fn codec_requires_path() {
    let message = parse_error(quote! {
        #[codec(value)]
        pub tags: HashMap<String, String>
    });
    assert!(message.contains("requires a codec path"));
}

#[test]
fn transient_field_is_unmapped() {
    let field = parse_field(quote! {
        #[transient]
        pub cached: String
    });
    assert!(!field.is_mapped());
    assert!(field.annotations.is_empty());

    let message = parse_error(quote! {
        #[transient]
        #[column(name = "x")]
        pub cached: String
    });
    assert!(message.contains("#[transient] fields take no mapping attributes"));
}

#[test]
fn parent_field_is_unmapped() {
    let field = parse_field(quote! {
        #[parent]
        pub base: Audited
    });
    assert!(field.parent);
    assert!(!field.is_mapped());
    assert!(field.annotations.is_empty());

    let message = parse_error(quote! {
        #[parent]
        #[id]
        pub base: Audited
    });
    assert!(message.contains("#[parent] fields take no mapping attributes"));
}

#[test]
fn doc_comment_is_kept() {
    let field = parse_field(quote! {
        /// Display name.
        pub name: String
    });
    assert_eq!(field.doc.as_deref(), Some("Display name."));
}

#[test]
fn foreign_attributes_are_ignored() {
    let field = parse_field(quote! {
        #[serde(rename = "n")]
        pub name: String
    });
    assert_eq!(field.annotations, [AnnotationDef::Column(None)]);
}
