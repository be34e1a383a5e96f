// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Code generation for mapped classes.
//!
//! For a struct `T` the output is:
//!
//! - `impl MappedClass for T`, building the `ClassMeta` once and sharing it
//! - `impl MappedType for T`, describing `T` as a class type
//! - accessor methods when `accessors` is set
//! - a `Default` assertion for every `#[embedded_id]` key type
//!
//! Generated code refers to `::cqlmap_core` by absolute path.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::parse::{AnnotationDef, ClassDef, FieldDef};
use crate::utils::types::is_bytes;

/// All impls for a class.
pub fn class(class: &ClassDef) -> TokenStream {
    let ident = &class.ident;
    let meta = class_meta(class);
    let accessors = accessor_methods(class);
    let assertions = embedded_id_assertions(class);

    quote! {
        #accessors
        #assertions

        impl ::cqlmap_core::meta::MappedClass for #ident {
            fn class_meta() -> ::std::sync::Arc<::cqlmap_core::meta::ClassMeta> {
                static META: ::std::sync::OnceLock<::std::sync::Arc<::cqlmap_core::meta::ClassMeta>> =
                    ::std::sync::OnceLock::new();
                ::std::sync::Arc::clone(META.get_or_init(|| ::std::sync::Arc::new(#meta)))
            }
        }

        impl ::cqlmap_core::meta::MappedType for #ident {
            fn type_ref() -> ::cqlmap_core::meta::TypeRef {
                ::cqlmap_core::meta::TypeRef::class(
                    <Self as ::cqlmap_core::meta::MappedClass>::class_meta()
                )
            }
        }
    }
}

/// Canonical name of the deriving type: its module path and identifier.
pub fn canonical_name(ident: &syn::Ident) -> TokenStream {
    quote!(::core::concat!(::core::module_path!(), "::", ::core::stringify!(#ident)))
}

fn class_meta(class: &ClassDef) -> TokenStream {
    let name = canonical_name(&class.ident);
    let annotations = &class.annotations;
    let parent = class.parent.as_ref().map(|parent| {
        let ty = &parent.ty;
        quote! {
            class.parent = ::core::option::Option::Some(
                <#ty as ::cqlmap_core::meta::MappedClass>::class_meta()
            );
        }
    });
    let fields = class.fields.iter().map(|field| field_meta(class, field));
    let doc = class.doc.as_ref().map(|doc| {
        quote!(class.doc = ::core::option::Option::Some(::std::string::String::from(#doc));)
    });

    quote! {{
        #[allow(unused_mut)]
        let mut class = ::cqlmap_core::meta::ClassMeta::new(#name);
        #parent
        #(class.annotations.push(#annotations);)*
        #(#fields)*
        #doc
        class
    }}
}

/// Declared type of a field, with type-use annotations applied.
fn type_ref(field: &FieldDef) -> TokenStream {
    let ty = &field.ty;
    let base = if is_bytes(ty) {
        quote!(::cqlmap_core::meta::TypeRef::bytes())
    } else {
        quote!(<#ty as ::cqlmap_core::meta::MappedType>::type_ref())
    };

    if field.type_annotations.is_empty() {
        return base;
    }

    let pushes = field
        .type_annotations
        .iter()
        .filter_map(|(target, annotation)| target.arg_index().map(|index| type_use(index, annotation)));
    quote! {{
        let mut ty = #base;
        #(#pushes)*
        ty
    }}
}

/// Annotate generic argument `index`, or the type itself when the argument
/// does not exist.
fn type_use(index: usize, annotation: &AnnotationDef) -> TokenStream {
    quote! {
        match ty.args.get_mut(#index) {
            ::core::option::Option::Some(arg) => arg.annotations.push(#annotation),
            ::core::option::Option::None => ty.annotations.push(#annotation)
        }
    }
}

fn field_meta(class: &ClassDef, field: &FieldDef) -> TokenStream {
    let name = field.name_str();
    let ty = type_ref(field);
    let annotations = &field.annotations;
    let private = (!field.is_pub).then(|| quote!(.private()));
    let doc = field.doc.as_ref().map(|doc| quote!(.doc(#doc)));

    let methods = (class.accessors && field.is_mapped() && !field.is_pub).then(|| {
        let getter = format!("get_{name}");
        let setter = format!("set_{name}");
        quote! {
            class.methods.push(::cqlmap_core::meta::MethodMeta::getter(#getter, ::core::clone::Clone::clone(&ty)));
            class.methods.push(::cqlmap_core::meta::MethodMeta::setter(#setter, ::core::clone::Clone::clone(&ty)));
        }
    });

    quote! {{
        let ty = #ty;
        #methods
        class.fields.push(
            ::cqlmap_core::meta::FieldMeta::new(#name, ty)
                #(.annotated(#annotations))*
                #private
                #doc
        );
    }}
}

fn accessor_methods(class: &ClassDef) -> TokenStream {
    let ident = &class.ident;
    let vis = &class.vis;
    let methods: Vec<TokenStream> = class
        .accessor_fields()
        .map(|field| {
            let member = &field.ident;
            let ty = &field.ty;
            let name = field.name_str();
            let getter = format_ident!("get_{}", name);
            let setter = format_ident!("set_{}", name);
            let getter_doc = format!("Value of `{name}`.");
            let setter_doc = format!("Replace `{name}`.");
            quote! {
                #[doc = #getter_doc]
                #[must_use]
                #vis fn #getter(&self) -> &#ty {
                    &self.#member
                }

                #[doc = #setter_doc]
                #vis fn #setter(&mut self, value: #ty) {
                    self.#member = value;
                }
            }
        })
        .collect();

    if methods.is_empty() {
        return TokenStream::new();
    }

    quote! {
        impl #ident {
            #(#methods)*
        }
    }
}

/// Key structs are instantiated through `Default`.
fn embedded_id_assertions(class: &ClassDef) -> TokenStream {
    let assertions = class.embedded_ids().map(|field| {
        let ty = &field.ty;
        quote! {
            const _: fn() = || {
                fn assert_default<T: ::core::default::Default>() {}
                assert_default::<#ty>();
            };
        }
    });
    quote!(#(#assertions)*)
}

#[cfg(test)]
mod tests;
