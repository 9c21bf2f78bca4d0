//! Attribute parsing for `#[conf(...)]` annotations.
//!
//! This module extracts and validates binding attributes from struct fields
//! during macro expansion.

use syn::parse::{Parse, ParseStream};
use syn::punctuated::Punctuated;
use syn::{Field, Ident, LitStr, Token};

/// One argument inside `#[conf(...)]`.
enum ConfArg {
    /// `"VARIABLE[,default]"`
    Directive(LitStr),
    /// `nested`
    Nested,
}

impl Parse for ConfArg {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(LitStr) {
            return Ok(Self::Directive(input.parse()?));
        }

        let ident: Ident = input.parse()?;
        if ident == "nested" {
            Ok(Self::Nested)
        } else {
            Err(syn::Error::new(
                ident.span(),
                "unsupported conf attribute, expected a directive string or `nested`",
            ))
        }
    }
}

/// Parsed `#[conf(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Directive literal, validated to name a variable.
    pub directive: Option<LitStr>,

    /// The field must be a record, bound recursively. A directive next to
    /// it is kept but never resolved.
    pub nested: bool,
}

impl FieldAttrs {
    /// Extract and validate `#[conf(...)]` attributes from a struct field.
    ///
    /// Attributes other than `conf` are left to other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("conf") {
                continue;
            }

            let args = attr.parse_args_with(Punctuated::<ConfArg, Token![,]>::parse_terminated)?;
            for arg in args {
                match arg {
                    ConfArg::Directive(lit) => {
                        if attrs.directive.is_some() {
                            return Err(syn::Error::new(
                                lit.span(),
                                "a field takes a single conf directive",
                            ));
                        }
                        validate_directive(&lit)?;
                        attrs.directive = Some(lit);
                    }
                    ConfArg::Nested => attrs.nested = true,
                }
            }
        }

        Ok(attrs)
    }
}

/// Check that the part before the first comma names a variable.
fn validate_directive(lit: &LitStr) -> syn::Result<()> {
    let value = lit.value();
    let variable = value.split_once(',').map_or(value.as_str(), |(v, _)| v);
    if variable.is_empty() {
        return Err(syn::Error::new(
            lit.span(),
            "conf directive must start with a variable name, e.g. \"PORT,8080\"",
        ));
    }
    Ok(())
}
