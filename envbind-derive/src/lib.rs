//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields, GenericArgument, PathArguments, Type};

mod attrs;

use attrs::FieldAttrs;

/// How a field is bound, as far as its syntax tells.
#[derive(Debug, PartialEq, Eq)]
enum Coercion {
    /// A record or a `envbind::FromLiteral` type, told apart at compile time
    Value,
    /// No coercion rule; binding fails with the given kind
    Unsupported(&'static str),
}

/// Extract the first type argument of the last path segment (`Vec<T>` -> `T`)
fn first_type_argument(ty: &syn::TypePath) -> Option<&Type> {
    let seg = ty.path.segments.last()?;
    if let PathArguments::AngleBracketed(args) = &seg.arguments {
        if let Some(GenericArgument::Type(inner)) = args.args.first() {
            return Some(inner);
        }
    }
    None
}

fn is_string(ty: &Type) -> bool {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|seg| seg.ident == "String" && seg.arguments.is_empty())
            .unwrap_or(false),
        Type::Group(group) => is_string(&group.elem),
        Type::Paren(paren) => is_string(&paren.elem),
        _ => false,
    }
}

/// Decide the coercion of a field from its declared type.
///
/// Collections, optionals and indirections are recognised syntactically;
/// every other type is resolved through `envbind::__private::Dispatch`, so
/// a tagged field of an unrelated type is a compile error rather than a
/// runtime one.
fn classify(ty: &Type) -> Coercion {
    match ty {
        Type::Path(type_path) => {
            let Some(seg) = type_path.path.segments.last() else {
                return Coercion::Value;
            };
            match seg.ident.to_string().as_str() {
                "Vec" => match first_type_argument(type_path) {
                    Some(inner) if is_string(inner) => Coercion::Value,
                    _ => Coercion::Unsupported("sequence"),
                },
                "VecDeque" | "LinkedList" | "BinaryHeap" => Coercion::Unsupported("sequence"),
                "Option" => Coercion::Unsupported("option"),
                "HashMap" | "BTreeMap" => Coercion::Unsupported("map"),
                "HashSet" | "BTreeSet" => Coercion::Unsupported("set"),
                "Box" | "Rc" | "Arc" | "Cell" | "RefCell" => Coercion::Unsupported("pointer"),
                _ => Coercion::Value,
            }
        }
        Type::Group(group) => classify(&group.elem),
        Type::Paren(paren) => classify(&paren.elem),
        Type::Reference(_) => Coercion::Unsupported("reference"),
        Type::Ptr(_) => Coercion::Unsupported("pointer"),
        Type::Array(_) => Coercion::Unsupported("array"),
        Type::Slice(_) => Coercion::Unsupported("slice"),
        Type::Tuple(_) => Coercion::Unsupported("tuple"),
        Type::BareFn(_) => Coercion::Unsupported("function"),
        Type::TraitObject(_) | Type::ImplTrait(_) => Coercion::Unsupported("interface"),
        _ => Coercion::Unsupported("unknown"),
    }
}

/// `Bind` derive macro
///
/// Implements `envbind::Bind` by generating the struct's field table.
///
/// # Supported Attributes
///
/// **Field-level**:
/// - `#[conf("VARIABLE,default")]`: Bind the field to `VARIABLE`, falling back to `default`
/// - `#[conf("VARIABLE")]`: Bind with an empty default
/// - `#[conf(nested)]`: Recurse into a field that must be `Bind`
///
/// Fields whose type is `Bind` are recursed into with or without `#[conf]`;
/// a directive on them is ignored. Other fields without `#[conf]` are left
/// untouched.
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(Bind, attributes(conf))]
pub fn derive_bind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    // Struct name
    let struct_name = &input.ident;

    if let Some(attr) = input.attrs.iter().find(|attr| attr.path().is_ident("conf")) {
        return Err(syn::Error::new_spanned(
            attr,
            "Bind takes no struct-level conf attributes",
        ));
    }

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Bind cannot be derived for generic structs",
        ));
    }

    // Extract fields
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "Bind only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "Bind only supports structs",
            ));
        }
    };

    // Generate one table entry per bound field
    let mut entries = Vec::new();
    for field in fields {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let field_name = field_ident.unraw().to_string();
        let attrs = FieldAttrs::from_field(field)?;

        let field_ty = &field.ty;
        let dispatch = quote! {
            (&&&::envbind::__private::Dispatch::<#field_ty>::new())
        };

        let entry = match (attrs.nested, attrs.directive, classify(field_ty)) {
            (true, None, _) => quote! {
                fields.record(#field_name, |record| &mut record.#field_ident)
            },
            (true, Some(directive), _) => quote! {
                fields.record_with_directive(#field_name, #directive, |record| &mut record.#field_ident)
            },
            (false, Some(directive), Coercion::Value) => quote! {
                #dispatch.bind_field(fields, #field_name, #directive, |record| &mut record.#field_ident)
            },
            (false, Some(directive), Coercion::Unsupported(kind)) => quote! {
                fields.unsupported(#field_name, #directive, #kind)
            },
            (false, None, Coercion::Value) => quote! {
                #dispatch.bind_untagged(fields, #field_name, |record| &mut record.#field_ident)
            },
            (false, None, Coercion::Unsupported(_)) => continue,
        };
        entries.push(entry);
    }

    Ok(quote! {
        impl ::envbind::Bind for #struct_name {
            #[allow(clippy::let_and_return, clippy::needless_borrow)]
            fn fields() -> &'static ::envbind::Fields<Self> {
                #[allow(unused_imports)]
                use ::envbind::__private::{
                    RecordField as _, SkippedField as _, ValueField as _,
                };

                static FIELDS: ::std::sync::OnceLock<::envbind::Fields<#struct_name>> =
                    ::std::sync::OnceLock::new();
                FIELDS.get_or_init(|| {
                    let fields = ::envbind::Fields::<Self>::new();
                    #(let fields = #entries;)*
                    fields
                })
            }
        }
    })
}
