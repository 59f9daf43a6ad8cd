//! Derive macro for `fieldcheck_shared::Validatable`.
//!
//! The derive turns `#[validate(...)]` field attributes into a `static`
//! constraint table, so nothing is looked up at runtime beyond reading the
//! field values themselves.
//!
//! ```ignore
//! #[derive(fieldcheck_validate_derive::Validatable)]
//! struct Gamer {
//!     #[validate(not_null)]
//!     username: Option<String>,
//!     #[validate(min = 12, max = 100)]
//!     age: i32,
//! }
//! ```
//!
//! Field keys: `not_null`, `length(min = N, max = N)`, `min = EXPR`,
//! `max = EXPR`, `field = "name"`. Container key: `name = "Owner"`.
//!
//! Declaring a constraint on a field whose type cannot satisfy it compiles;
//! the validator reports it at runtime as a type mismatch, separately from
//! bad data.

use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::{format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Ident, LitInt, LitStr};

/// Derive `fieldcheck_shared::Validatable` from field-level `#[validate]` attributes.
#[proc_macro_derive(Validatable, attributes(validate))]
pub fn derive_validatable(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand_validatable(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand_validatable(input: &DeriveInput) -> Result<proc_macro2::TokenStream, syn::Error> {
    let owner = parse_owner_name(&input.attrs)?.unwrap_or_else(|| input.ident.to_string());
    let Data::Struct(struct_data) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "Validatable can only be derived for structs",
        ));
    };

    let fields = match &struct_data.fields {
        Fields::Named(fields) => &fields.named,
        Fields::Unit | Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                &struct_data.fields,
                "Validatable requires named fields",
            ));
        },
    };

    let mut tables = Vec::new();
    let mut entries = Vec::new();
    let mut arms = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let (field_name, constraints) = parse_field_constraints(&field.attrs, ident)?;
        let table = format_ident!("FIELD_{}", index);
        let field_name = LitStr::new(&field_name, Span::call_site());
        let items = constraints.iter().map(ConstraintSpec::to_tokens);

        tables.push(quote! {
            const #table: &[::fieldcheck_shared::Constraint] = &[#(#items),*];
        });
        entries.push(quote! {
            ::fieldcheck_shared::FieldSchema::new(#field_name, #table)
        });
        if !constraints.is_empty() {
            arms.push(quote! {
                #index => ::fieldcheck_shared::AsFieldValue::as_field_value(&self.#ident),
            });
        }
    }

    let name = &input.ident;
    let owner = LitStr::new(&owner, Span::call_site());
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::fieldcheck_shared::Validatable for #name #ty_generics #where_clause {
            fn schema() -> &'static ::fieldcheck_shared::Schema {
                #(#tables)*
                const FIELDS: &[::fieldcheck_shared::FieldSchema] = &[#(#entries),*];
                static SCHEMA: ::fieldcheck_shared::Schema =
                    ::fieldcheck_shared::Schema::new(#owner, FIELDS);
                &SCHEMA
            }

            fn field_value(&self, index: usize) -> ::fieldcheck_shared::FieldValue<'_> {
                match index {
                    #(#arms)*
                    _ => ::fieldcheck_shared::FieldValue::Absent,
                }
            }
        }
    })
}

fn parse_owner_name(attrs: &[Attribute]) -> Result<Option<String>, syn::Error> {
    let mut owner: Option<String> = None;
    for attr in attrs {
        if !attr.path().is_ident("validate") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                if owner.is_some() {
                    return Err(meta.error("duplicate validate(name = ...)"));
                }
                owner = Some(value.value());
                return Ok(());
            }
            Err(meta.error("unsupported validate attribute on container"))
        })?;
    }
    Ok(owner)
}

fn parse_field_constraints(
    attrs: &[Attribute],
    ident: &Ident,
) -> Result<(String, Vec<ConstraintSpec>), syn::Error> {
    let mut constraints: Vec<ConstraintSpec> = Vec::new();
    let mut field_name_override: Option<String> = None;
    for attr in attrs {
        if !attr.path().is_ident("validate") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("field") {
                let value: LitStr = meta.value()?.parse()?;
                if field_name_override.is_some() {
                    return Err(meta.error("duplicate validate(field = ...)"));
                }
                field_name_override = Some(value.value());
                return Ok(());
            }
            let spec = if meta.path.is_ident("not_null") {
                ConstraintSpec::NotNull
            } else if meta.path.is_ident("min") {
                ConstraintSpec::MinValue(meta.value()?.parse()?)
            } else if meta.path.is_ident("max") {
                ConstraintSpec::MaxValue(meta.value()?.parse()?)
            } else if meta.path.is_ident("length") {
                let mut min: Option<LitInt> = None;
                let mut max: Option<LitInt> = None;
                meta.parse_nested_meta(|nested| {
                    let slot = if nested.path.is_ident("min") {
                        &mut min
                    } else if nested.path.is_ident("max") {
                        &mut max
                    } else {
                        return Err(nested.error("unsupported length attribute"));
                    };
                    if slot.is_some() {
                        return Err(nested.error("duplicate length bound"));
                    }
                    *slot = Some(nested.value()?.parse()?);
                    Ok(())
                })?;
                check_length_bounds(min.as_ref(), max.as_ref())?;
                ConstraintSpec::StringLength { min, max }
            } else {
                return Err(meta.error("unsupported validate attribute on field"));
            };
            if constraints.iter().any(|existing| existing.same_kind(&spec)) {
                return Err(meta.error(format!("duplicate validate({})", spec.key())));
            }
            constraints.push(spec);
            Ok(())
        })?;
    }
    let name = field_name_override.unwrap_or_else(|| ident.to_string());
    Ok((name, constraints))
}

fn check_length_bounds(min: Option<&LitInt>, max: Option<&LitInt>) -> Result<(), syn::Error> {
    let (Some(min), Some(max)) = (min, max) else {
        return Ok(());
    };
    let lower: usize = min.base10_parse()?;
    let upper: usize = max.base10_parse()?;
    if lower > upper {
        return Err(syn::Error::new_spanned(
            min,
            format!("length min ({lower}) must not exceed max ({upper})"),
        ));
    }
    Ok(())
}

#[derive(Debug)]
enum ConstraintSpec {
    NotNull,
    StringLength {
        min: Option<LitInt>,
        max: Option<LitInt>,
    },
    MinValue(Expr),
    MaxValue(Expr),
}

impl ConstraintSpec {
    const fn key(&self) -> &'static str {
        match self {
            Self::NotNull => "not_null",
            Self::StringLength { .. } => "length",
            Self::MinValue(_) => "min",
            Self::MaxValue(_) => "max",
        }
    }

    fn same_kind(&self, other: &Self) -> bool {
        self.key() == other.key()
    }

    fn to_tokens(&self) -> proc_macro2::TokenStream {
        match self {
            Self::NotNull => quote! { ::fieldcheck_shared::Constraint::NotNull },
            Self::StringLength { min, max } => {
                let min = min
                    .as_ref()
                    .map_or_else(|| quote! { 0 }, |value| quote! { #value });
                let max = max.as_ref().map_or_else(
                    || quote! { ::fieldcheck_shared::Constraint::LENGTH_UNBOUNDED },
                    |value| quote! { #value },
                );
                quote! {
                    ::fieldcheck_shared::Constraint::StringLength { min: #min, max: #max }
                }
            },
            Self::MinValue(bound) => quote! { ::fieldcheck_shared::Constraint::MinValue(#bound) },
            Self::MaxValue(bound) => quote! { ::fieldcheck_shared::Constraint::MaxValue(#bound) },
        }
    }
}
