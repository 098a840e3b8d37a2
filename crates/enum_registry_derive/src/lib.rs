//! Derive macro for `enum_registry`.
//!
//! `#[derive(EnumMember)]` implements `enum_registry::EnumMember` for:
//! - single-field tuple structs (`struct Color(u8);`): the field is the representation, so out-of-set values can be
//!   constructed and later rejected by `validate`;
//! - fieldless enums: the representation is the `#[repr(...)]` integer (default `isize`).
//!
//! Identity is taken from `#[enum_member(uid = "...", name = "...")]`; both keys are optional. The default uid is the
//! type's module path plus its name, the default name is the type name.

use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Type, parse_macro_input};

const INT_REPRS: &[&str] = &[
    "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
];

/// Implements `enum_registry::EnumMember`.
///
/// # Example
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumMember)]
/// #[enum_member(uid = "paint.Color")]
/// struct Color(u8);
///
/// // Generates:
/// impl ::enum_registry::EnumMember for Color {
///     type Repr = u8;
///     const UID: &'static str = "paint.Color";
///     const NAME: &'static str = "Color";
///     fn repr(self) -> u8 { self.0 }
/// }
/// ```
#[proc_macro_derive(EnumMember, attributes(enum_member))]
pub fn derive_enum_member(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_enum_member(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand_enum_member(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let ident = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "EnumMember cannot be derived for generic types",
        ));
    }

    let attrs = MemberAttrs::parse(input)?;
    // The default uid always follows the type ident; `name` is only a label.
    let type_name = LitStr::new(&ident.to_string(), ident.span());
    let name = attrs.name.unwrap_or_else(|| type_name.clone());
    let uid = match attrs.uid {
        Some(uid) => quote! { #uid },
        None => quote! { ::core::concat!(::core::module_path!(), "::", #type_name) },
    };

    let (repr_ty, repr_body) = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                let ty = &fields.unnamed[0].ty;
                (quote! { #ty }, quote! { self.0 })
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    ident,
                    "EnumMember structs must be tuple structs with exactly one integer field, e.g. `struct Color(u8);`",
                ));
            }
        },
        Data::Enum(data) => {
            if let Some(variant) = data.variants.iter().find(|v| !matches!(v.fields, Fields::Unit)) {
                return Err(syn::Error::new_spanned(
                    variant,
                    "EnumMember enums must be fieldless",
                ));
            }
            let ty = enum_repr(input)?;
            (quote! { #ty }, quote! { self as #ty })
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(ident, "EnumMember cannot be derived for unions"));
        }
    };

    Ok(quote! {
        impl ::enum_registry::EnumMember for #ident {
            type Repr = #repr_ty;
            const UID: &'static str = #uid;
            const NAME: &'static str = #name;

            fn repr(self) -> Self::Repr {
                #repr_body
            }
        }
    })
}

#[derive(Default)]
struct MemberAttrs {
    uid: Option<LitStr>,
    name: Option<LitStr>,
}

impl MemberAttrs {
    fn parse(input: &DeriveInput) -> syn::Result<Self> {
        let mut attrs = MemberAttrs::default();
        for attr in input.attrs.iter().filter(|a| a.path().is_ident("enum_member")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("uid") {
                    attrs.uid = Some(non_empty(meta.value()?.parse()?)?);
                    Ok(())
                } else if meta.path.is_ident("name") {
                    attrs.name = Some(non_empty(meta.value()?.parse()?)?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported enum_member key; expected `uid` or `name`"))
                }
            })?;
        }
        Ok(attrs)
    }
}

fn non_empty(lit: LitStr) -> syn::Result<LitStr> {
    if lit.value().is_empty() {
        return Err(syn::Error::new(lit.span(), "value must not be empty"));
    }
    Ok(lit)
}

/// Find the integer named in `#[repr(...)]`, defaulting to `isize` like rustc does.
fn enum_repr(input: &DeriveInput) -> syn::Result<Type> {
    let mut found: Option<Ident> = None;
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident() {
                if INT_REPRS.contains(&ident.to_string().as_str()) {
                    found = Some(ident.clone());
                }
            }
            // `align(N)` / `packed(N)` carry arguments we don't care about.
            if meta.input.peek(syn::token::Paren) {
                let _args;
                syn::parenthesized!(_args in meta.input);
            }
            Ok(())
        })?;
    }
    let ident = found.unwrap_or_else(|| Ident::new("isize", Span::call_site()));
    Ok(syn::parse_quote! { #ident })
}
