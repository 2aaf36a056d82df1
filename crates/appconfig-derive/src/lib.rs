//! Derive macro for declaring an `appconfig` type's on-disk format.
//!
//! The derive replaces runtime inspection of the config type with a single
//! compile-time check: the struct names its format once in a
//! `#[config(...)]` attribute, and the macro emits the matching
//! `ConfigFormat` implementation. Everything that would be a runtime
//! detection failure (not a struct, no fields, unknown format) is a
//! compile error instead.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(unreachable_pub)]
#![deny(clippy::unwrap_used)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

extern crate proc_macro;

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{Data, DeriveInput, Error, Ident, parse_macro_input};

/// Recognized format flags, in priority order. When an attribute carries
/// several, the first match here wins.
const FORMATS: [&str; 3] = ["json", "yaml", "xml"];

/// Derives `appconfig::ConfigFormat` from a `#[config(...)]` attribute.
///
/// ```ignore
/// #[derive(Serialize, Deserialize, ConfigFormat)]
/// #[config(yaml)]
/// struct MyConfig {
///     user_name: String,
/// }
/// ```
///
/// The attribute accepts `json`, `yaml`, and `xml`. When several flags are
/// present the first in that fixed order is used, so `#[config(json, yaml)]`
/// selects JSON. Enums, unions, zero-field structs, and unrecognized
/// format names are rejected at compile time.
#[proc_macro_derive(ConfigFormat, attributes(config))]
pub fn derive_config_format(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> Result<proc_macro2::TokenStream, Error> {
    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) | Data::Union(_) => {
            return Err(Error::new_spanned(&input.ident, "config must be a struct"));
        },
    };

    if fields.iter().next().is_none() {
        return Err(Error::new_spanned(
            &input.ident,
            "config must have at least one field",
        ));
    }

    let format = selected_format(input)?;
    let variant = Ident::new(variant_name(format), Span::call_site());
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::appconfig::ConfigFormat for #name #ty_generics #where_clause {
            const FORMAT: ::appconfig::FormatKind = ::appconfig::FormatKind::#variant;
        }
    })
}

/// Collect the flags from every `#[config(...)]` attribute and resolve
/// them against the fixed priority order.
fn selected_format(input: &DeriveInput) -> Result<&'static str, Error> {
    let mut flags: Vec<String> = Vec::new();

    for attr in &input.attrs {
        if !attr.path().is_ident("config") {
            continue;
        }

        attr.parse_nested_meta(|meta| match meta.path.get_ident() {
            Some(ident) => {
                flags.push(ident.to_string());
                Ok(())
            },
            None => Err(meta.error("expected a format name")),
        })?;
    }

    for known in FORMATS {
        if flags.iter().any(|flag| flag == known) {
            return Ok(known);
        }
    }

    if let Some(unknown) = flags.first() {
        return Err(Error::new_spanned(
            &input.ident,
            format!("unsupported config format `{unknown}`: expected one of `json`, `yaml`, `xml`"),
        ));
    }

    Err(Error::new_spanned(
        &input.ident,
        "missing #[config(...)] attribute: expected one of `json`, `yaml`, `xml`",
    ))
}

fn variant_name(format: &str) -> &'static str {
    match format {
        "json" => "Json",
        "yaml" => "Yaml",
        _ => "Xml",
    }
}
