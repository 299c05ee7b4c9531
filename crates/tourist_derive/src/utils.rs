use quote::quote;
use syn::{
    AngleBracketedGenericArguments, Data, DeriveInput, Field, Fields, GenericArgument, Path,
    PathArguments, Type, TypePath, punctuated::Punctuated, spanned::Spanned, token::Comma,
};

/// Named fields of a struct, or a spanned error naming the derive that rejected it.
pub fn named_fields<'a>(
    input: &'a DeriveInput,
    derive: &str,
) -> syn::Result<&'a Punctuated<Field, Comma>> {
    let Data::Struct(data_struct) = &input.data else {
        return Err(syn::Error::new(
            input.span(),
            format!("{derive} can only be derived for structs"),
        ));
    };
    let Fields::Named(fields) = &data_struct.fields else {
        return Err(syn::Error::new(
            input.span(),
            format!("{derive} requires named fields"),
        ));
    };
    Ok(&fields.named)
}

pub fn inner_of_option(ty: &Type) -> Option<&Type> {
    let Type::Path(TypePath { qself: None, path }) = ty else {
        return None;
    };
    let is_option = match path.segments.len() {
        1 => path.segments[0].ident == "Option",
        3 => {
            (path.segments[0].ident == "std" || path.segments[0].ident == "core")
                && path.segments[1].ident == "option"
                && path.segments[2].ident == "Option"
        }
        _ => false,
    };
    if !is_option {
        return None;
    }

    if let Some(seg) = path.segments.last()
        && let PathArguments::AngleBracketed(AngleBracketedGenericArguments { args, .. }) =
            &seg.arguments
        && let Some(GenericArgument::Type(inner)) = args.first()
    {
        return Some(inner);
    }
    None
}

/// Expression turning the local `raw: String` into a value of `ty`.
/// Expects `name: &str` in scope for error messages.
pub fn build_cli_parse_expr(ty: &Type, parse_with: Option<&Path>) -> proc_macro2::TokenStream {
    match parse_with {
        Some(parse_with) => quote! { #parse_with(&raw)? },
        None => quote! {
            raw.parse::<#ty>()
                .map_err(|e| crate::Error::invalid_input(format!(
                    "Invalid value for --{name}: {raw} ({e})"
                )))?
        },
    }
}

pub fn to_kebab_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (idx, ch) in s.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if idx != 0 {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else if ch == '_' {
            out.push('-');
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use syn::parse_quote;

    use super::{inner_of_option, named_fields, to_kebab_case};

    #[test]
    fn inner_of_option_supports_short_std_and_core_paths() {
        let short_ty: syn::Type = parse_quote!(Option<String>);
        let std_ty: syn::Type = parse_quote!(std::option::Option<u8>);
        let core_ty: syn::Type = parse_quote!(core::option::Option<bool>);
        let non_opt: syn::Type = parse_quote!(Vec<String>);

        let short_inner = inner_of_option(&short_ty).expect("expected Option inner type");
        let std_inner = inner_of_option(&std_ty).expect("expected std Option inner type");
        let core_inner = inner_of_option(&core_ty).expect("expected core Option inner type");

        assert_eq!(quote::quote!(#short_inner).to_string(), "String");
        assert_eq!(quote::quote!(#std_inner).to_string(), "u8");
        assert_eq!(quote::quote!(#core_inner).to_string(), "bool");
        assert!(inner_of_option(&non_opt).is_none());
    }

    #[test]
    fn named_fields_rejects_enums_and_tuple_structs() {
        let en: syn::DeriveInput = parse_quote!(
            enum Format {
                Text,
            }
        );
        let tuple: syn::DeriveInput = parse_quote!(
            struct Pair(u8, u8);
        );
        let named: syn::DeriveInput = parse_quote!(
            struct Options {
                input: String,
            }
        );

        let Err(err) = named_fields(&en, "KvDisplay") else {
            panic!("enum should be rejected");
        };
        assert!(err.to_string().contains("KvDisplay can only be derived for structs"));
        let Err(err) = named_fields(&tuple, "CliOptions") else {
            panic!("tuple should be rejected");
        };
        assert!(err.to_string().contains("CliOptions requires named fields"));
        assert_eq!(named_fields(&named, "KvDisplay").expect("named").len(), 1);
    }

    #[test]
    fn to_kebab_case_handles_pascal_and_snake_names() {
        assert_eq!(to_kebab_case("OutputFormat"), "output-format");
        assert_eq!(to_kebab_case("max_expansions"), "max-expansions");
        assert_eq!(to_kebab_case("already-kebab"), "already-kebab");
        assert_eq!(to_kebab_case("X"), "x");
    }
}
