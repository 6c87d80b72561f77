//! Render generated test files.
//!
//! A rendered file is one `use` line importing the entry point, a blank line, then one
//! `#[test] fn test_case_<i>()` per spec case, in spec order, separated by blank lines:
//!
//! ```rust,ignore
//! use solutions::arrays::has_duplicate::has_duplicate;
//!
//! #[test]
//! fn test_case_0() {
//!     let nums: Vec<i32> = vec![1, 2, 3, 1];
//!     assert_eq!(has_duplicate(nums), true);
//! }
//! ```
//!
//! Named inputs become `let` bindings named after the parameters and are passed in signature
//! order. Each item is built with `quote!`, checked by `syn` and printed by `prettyplease`, so the
//! same inputs always produce the same bytes.
//!
//! ## See also
//! - [`literal`]: value → literal rendering

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod errors;
pub mod literal;

pub use errors::RenderError;

use proc_macro2::{TokenStream, TokenTree};
use quote::{ToTokens, format_ident, quote};
use serde_json::Value;
use syn::{Ident, Type};

use crate::discovery::SolutionUnit;
use crate::specs::TestCase;
use crate::validate::{EntryPoint, Param};

use literal::{is_named, peel, render_value};

/// Render the complete test file for `unit`.
#[tracing::instrument(skip_all, fields(id = %unit.id, cases = cases.len()))]
pub fn render_test_file(
    unit: &SolutionUnit,
    entry: &EntryPoint,
    cases: &[TestCase],
    crate_name: &str,
) -> Result<String, RenderError> {
    let module = unit.module_path.qualified(crate_name);
    let module_path: syn::Path = syn::parse_str(&module).map_err(|_| RenderError::InvalidPath(module.clone()))?;
    let func = parse_ident(&entry.name)?;

    let mut sections = Vec::with_capacity(cases.len() + 1);
    sections.push(unparse_item(quote! { use #module_path::#func; })?);
    for (index, case) in cases.iter().enumerate() {
        let test_fn = render_case(index, &func, entry, case).map_err(|e| e.in_case(index))?;
        sections.push(unparse_item(test_fn)?);
    }

    Ok(sections.join("\n"))
}

/// Build the `#[test]` function for one case.
fn render_case(index: usize, func: &Ident, entry: &EntryPoint, case: &TestCase) -> Result<TokenStream, RenderError> {
    if let Some(extra) = case.input.keys().find(|k| entry.param(k).is_none()) {
        return Err(RenderError::UnexpectedArgument(extra.clone()));
    }

    let mut bindings = Vec::with_capacity(entry.params.len());
    let mut args = Vec::with_capacity(entry.params.len());
    for param in &entry.params {
        let value = case
            .input
            .get(&param.name)
            .ok_or_else(|| RenderError::MissingArgument(param.name.clone()))?;
        let (binding, arg) = bind_param(param, value, &entry.generics)?;
        bindings.push(binding);
        args.push(arg);
    }

    let expected = match (&entry.output, &case.output) {
        (None, Value::Null) => quote! { () },
        (output, value) => render_value(value, output.as_ref())?,
    };

    let test_name = format_ident!("test_case_{}", index);
    Ok(quote! {
        #[test]
        fn #test_name() {
            #(#bindings)*
            assert_eq!(#func(#(#args),*), #expected);
        }
    })
}

/// `let` statement for a parameter plus the argument expression passing it.
fn bind_param(param: &Param, value: &Value, generics: &[String]) -> Result<(TokenStream, TokenStream), RenderError> {
    let name = parse_ident(&param.name)?;
    match peel(&param.ty) {
        Type::Reference(reference) => {
            let referent = peel(&reference.elem);
            let init = render_value(value, Some(referent))?;
            if is_named(referent, "str") {
                return Ok((quote! { let #name = #init; }, quote! { #name }));
            }
            let annotation = annotation(referent, generics);
            if reference.mutability.is_some() {
                Ok((quote! { let mut #name #annotation = #init; }, quote! { &mut #name }))
            } else {
                Ok((quote! { let #name #annotation = #init; }, quote! { &#name }))
            }
        }
        ty => {
            let init = render_value(value, Some(ty))?;
            let annotation = annotation(ty, generics);
            Ok((quote! { let #name #annotation = #init; }, quote! { #name }))
        }
    }
}

/// `: T` when `ty` can be written inside the test body.
///
/// Slices, `impl Trait`, lifetimes and the entry point's own generic parameters cannot.
fn annotation(ty: &Type, generics: &[String]) -> Option<TokenStream> {
    match ty {
        Type::Slice(_) | Type::ImplTrait(_) | Type::Infer(_) => None,
        _ if mentions_generics(ty.to_token_stream(), generics) => None,
        _ => Some(quote! { : #ty }),
    }
}

fn mentions_generics(tokens: TokenStream, generics: &[String]) -> bool {
    tokens.into_iter().any(|tt| match tt {
        TokenTree::Group(g) => mentions_generics(g.stream(), generics),
        TokenTree::Ident(ident) => generics.iter().any(|g| ident == g),
        TokenTree::Punct(p) => p.as_char() == '\'',
        TokenTree::Literal(_) => false,
    })
}

fn parse_ident(name: &str) -> Result<Ident, RenderError> {
    syn::parse_str(name).map_err(|_| RenderError::InvalidPath(name.to_string()))
}

/// Pretty-print a single item.
fn unparse_item(tokens: TokenStream) -> Result<String, RenderError> {
    let item: syn::Item = syn::parse2(tokens).map_err(|e| RenderError::SynParse(e.to_string()))?;
    let file = syn::File {
        shebang: None,
        attrs: Vec::new(),
        items: vec![item],
    };
    Ok(prettyplease::unparse(&file))
}
