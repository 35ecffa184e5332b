// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Derive macros for typed ADEXP message projections.
//!
//! This crate allows to `derive` the `FromMapping` and `FromValue` traits of
//! the `adexp` crate and implements `TryFrom<&ParsedMessage>` too.
//!
//! # Example
//!
//! ```ignore
//! #[derive(Message)]
//! pub struct Flight {
//!     pub arcid: String,               // mandatory field ARCID
//!     pub adep: Option<String>,        // optional field ADEP
//!     #[adexp(rename = "RTEPTS", default)]
//!     pub route: Vec<RoutePoint>,      // empty if the list is absent
//! }
//! ```
//!
//! Each field reads the ADEXP field of its upper-cased name unless it's
//! renamed.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr};

#[derive(Default)]
struct FieldAttributes {
    rename: Option<String>,
    default: bool,
}

fn parse_field_attributes(field: &syn::Field) -> syn::Result<FieldAttributes> {
    let mut attributes = FieldAttributes::default();

    for attr in &field.attrs {
        if !attr.path().is_ident("adexp") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            // #[adexp(rename = "NAME")]
            if meta.path.is_ident("rename") {
                let name: LitStr = meta.value()?.parse()?;
                attributes.rename = Some(name.value());
                Ok(())
            // #[adexp(default)]
            } else if meta.path.is_ident("default") {
                attributes.default = true;
                Ok(())
            } else {
                Err(meta.error("expected `rename = \"...\"` or `default`"))
            }
        })?;
    }

    Ok(attributes)
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Message derive only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Message derive only supports structs",
            ))
        }
    };

    let mut field_readers = Vec::new();

    for field in fields {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let attributes = parse_field_attributes(field)?;

        let key = attributes.rename.unwrap_or_else(|| {
            ident
                .to_string()
                .trim_start_matches("r#")
                .to_uppercase()
        });

        let reader = if attributes.default {
            quote! {
                #ident: match mapping.get(#key) {
                    None => ::core::default::Default::default(),
                    value => ::adexp::FromValue::from_value(#key, value)?,
                }
            }
        } else {
            quote! {
                #ident: ::adexp::FromValue::from_value(#key, mapping.get(#key))?
            }
        };

        field_readers.push(reader);
    }

    Ok(quote! {
        impl #impl_generics ::adexp::FromMapping for #name #ty_generics #where_clause {
            fn from_mapping(
                mapping: &::adexp::Mapping,
            ) -> ::core::result::Result<Self, ::adexp::Error> {
                Ok(Self {
                    #(#field_readers),*
                })
            }
        }

        impl #impl_generics ::adexp::FromValue for #name #ty_generics #where_clause {
            fn from_value(
                field: &str,
                value: ::core::option::Option<&::adexp::ParsedValue>,
            ) -> ::core::result::Result<Self, ::adexp::Error> {
                ::adexp::from_structured(field, value)
            }
        }

        impl #impl_generics ::core::convert::TryFrom<&::adexp::ParsedMessage>
            for #name #ty_generics #where_clause
        {
            type Error = ::adexp::Error;

            fn try_from(
                msg: &::adexp::ParsedMessage,
            ) -> ::core::result::Result<Self, ::adexp::Error> {
                <Self as ::adexp::FromMapping>::from_mapping(msg.fields())
            }
        }
    })
}

/// Derive macro for typed projections of parsed messages.
///
/// Generates the `FromMapping`, `FromValue` and `TryFrom<&ParsedMessage>`
/// implementations.
#[proc_macro_derive(Message, attributes(adexp))]
pub fn derive_message(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
