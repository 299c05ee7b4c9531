use proc_macro::TokenStream;
use proc_macro2::Span;
use quote::quote;
use syn::{DeriveInput, Field, LitStr, Path, parse_macro_input};

use crate::utils;

#[derive(Default)]
struct CliField {
    long: Option<String>,
    parse_with: Option<Path>,
}

impl CliField {
    fn from_field(field: &Field) -> syn::Result<Self> {
        let mut parsed = Self::default();
        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("cli")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("long") {
                    let lit: LitStr = meta.value()?.parse()?;
                    parsed.long = Some(lit.value());
                    return Ok(());
                }
                if meta.path.is_ident("parse_with") {
                    let lit: LitStr = meta.value()?.parse()?;
                    parsed.parse_with = Some(lit.parse()?);
                    return Ok(());
                }
                Err(meta.error("unsupported cli attribute; expected long/parse_with"))
            })?;
        }
        Ok(parsed)
    }
}

pub fn derive_cli_options_inner(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_ident = &input.ident;
    let fields = utils::named_fields(input, "CliOptions")?;

    let mut arms = Vec::new();
    let mut long_names = Vec::new();

    for field in fields {
        let Some(field_ident) = &field.ident else {
            continue;
        };
        let cli = CliField::from_field(field)?;
        let Some(long) = cli.long else {
            continue;
        };

        // `Option<T>` fields parse `T` and store `Some`.
        let assign = match utils::inner_of_option(&field.ty) {
            Some(inner) => {
                let parse_expr = utils::build_cli_parse_expr(inner, cli.parse_with.as_ref());
                quote! { self.#field_ident = Some(#parse_expr); }
            }
            None => {
                let parse_expr = utils::build_cli_parse_expr(&field.ty, cli.parse_with.as_ref());
                quote! { self.#field_ident = #parse_expr; }
            }
        };

        let long_lit = LitStr::new(&long, Span::call_site());
        arms.push(quote! {
            #long_lit => {
                let raw = value.ok_or_else(|| {
                    crate::Error::invalid_input(format!("Missing value for --{name}"))
                })?;
                #assign
                Ok(true)
            }
        });
        long_names.push(long_lit);
    }

    Ok(quote! {
        impl #struct_ident {
            /// Long option names handled by `apply_cli_option`.
            pub const CLI_LONG_NAMES: &'static [&'static str] = &[#(#long_names),*];

            fn split_arg(
                raw_name: &str,
                args: &mut std::iter::Peekable<impl Iterator<Item = String>>,
            ) -> (String, Option<String>) {
                if let Some((k, v)) = raw_name.split_once('=') {
                    return (k.to_string(), Some(v.to_string()));
                }

                let value = match args.peek() {
                    Some(next) if !next.starts_with("--") => args.next(),
                    _ => None,
                };

                (raw_name.to_string(), value)
            }

            fn apply_cli_option(
                &mut self,
                name: &str,
                value: Option<String>,
            ) -> crate::Result<bool> {
                match name {
                    #(#arms,)*
                    _ => Ok(false),
                }
            }
        }
    })
}
