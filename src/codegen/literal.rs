//! Render spec values as Rust literals.
//!
//! Spec values are JSON, so the closed set is: integers, floats, strings, booleans, null and
//! arrays of those. Rendering is directed by the Rust type the value will meet (a parameter or
//! return type) when one is known:
//!
//! | value   | target type            | rendered as                          |
//! |---------|------------------------|--------------------------------------|
//! | string  | `String`               | `String::from("..")`                 |
//! | string  | `char` (one character) | `'c'`                                |
//! | integer | `f32` / `f64`          | `2.0`                                |
//! | null    | `Option<T>` or unknown | `None`                               |
//! | other   | `Option<T>`            | `Some(<T literal>)`                  |
//! | array   | `[T; N]`               | `[..]`                               |
//! | array   | `HashSet<T>` etc.      | `std::collections::HashSet::from([..])` |
//! | array   | `Vec<T>`, `[T]`, none  | `vec![..]`, `Vec::<T>::new()` if empty |
//!
//! Objects have no literal form and are rejected, as are `null` for a non-`Option` target and
//! strings that are not exactly one character for a `char` target.

use proc_macro2::{Literal, TokenStream};
use quote::{ToTokens, format_ident, quote};
use serde_json::{Number, Value};
use syn::{GenericArgument, PathArguments, Type};

use super::RenderError;

/// Std collections constructed with `From<[T; N]>`.
const COLLECTIONS: &[&str] = &["HashSet", "BTreeSet", "VecDeque", "BinaryHeap", "LinkedList"];

/// Render `value` as an expression, shaped for `ty` when given.
pub fn render_value(value: &Value, ty: Option<&Type>) -> Result<TokenStream, RenderError> {
    let ty = ty.map(peel);

    if let Some(inner) = ty.and_then(|t| single_generic(t, "Option")) {
        if value.is_null() {
            return Ok(quote! { None });
        }
        let inner = render_value(value, Some(inner))?;
        return Ok(quote! { Some(#inner) });
    }

    match value {
        // `null` only has a literal form when the target may be an `Option`.
        Value::Null if ty.is_none() => Ok(quote! { None }),
        Value::Null => Err(unsupported(value)),
        Value::Bool(b) => Ok(b.to_token_stream()),
        Value::Number(n) => render_number(n, ty.is_some_and(is_float)),
        Value::String(s) => {
            if ty.is_some_and(|t| is_named(t, "String")) {
                Ok(quote! { String::from(#s) })
            } else if ty.is_some_and(|t| is_named(t, "char")) {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Ok(Literal::character(c).to_token_stream()),
                    _ => Err(unsupported(value)),
                }
            } else {
                Ok(quote! { #s })
            }
        }
        Value::Array(items) => render_array(items, ty),
        Value::Object(_) => Err(unsupported(value)),
    }
}

fn unsupported(value: &Value) -> RenderError {
    RenderError::UnsupportedValue(value.to_string())
}

fn render_array(items: &[Value], ty: Option<&Type>) -> Result<TokenStream, RenderError> {
    let shape = ty.map(sequence_shape).unwrap_or(SequenceShape::Vec(None));
    let elem_ty = match &shape {
        SequenceShape::Vec(elem) | SequenceShape::Array(elem) => *elem,
        SequenceShape::Collection(_, elem) => *elem,
    };
    let elems = items
        .iter()
        .map(|item| render_value(item, elem_ty))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(match shape {
        SequenceShape::Array(_) => quote! { [#(#elems),*] },
        SequenceShape::Collection(name, elem) => {
            let name = format_ident!("{}", name);
            match (elems.is_empty(), elem) {
                (true, Some(elem)) => quote! { std::collections::#name::<#elem>::new() },
                _ => quote! { std::collections::#name::from([#(#elems),*]) },
            }
        }
        SequenceShape::Vec(Some(elem)) if elems.is_empty() => quote! { Vec::<#elem>::new() },
        SequenceShape::Vec(_) => quote! { vec![#(#elems),*] },
    })
}

fn render_number(n: &Number, as_float: bool) -> Result<TokenStream, RenderError> {
    // Negative numbers stay a single literal token so they print as `-1` inside macros.
    if !as_float {
        if let Some(u) = n.as_u64() {
            return Ok(Literal::u64_unsuffixed(u).to_token_stream());
        }
        if let Some(i) = n.as_i64() {
            return Ok(Literal::i64_unsuffixed(i).to_token_stream());
        }
    }
    let Some(f) = n.as_f64().filter(|f| f.is_finite()) else {
        return Err(RenderError::UnsupportedValue(n.to_string()));
    };
    let f = if f == 0.0 { 0.0 } else { f };
    Ok(Literal::f64_unsuffixed(f).to_token_stream())
}

enum SequenceShape<'a> {
    /// `vec![..]`, with the element type if known
    Vec(Option<&'a Type>),
    /// Fixed-size array literal
    Array(Option<&'a Type>),
    /// A std collection built from an array
    Collection(&'static str, Option<&'a Type>),
}

fn sequence_shape(ty: &Type) -> SequenceShape<'_> {
    match peel(ty) {
        Type::Slice(s) => SequenceShape::Vec(Some(&s.elem)),
        Type::Array(a) => SequenceShape::Array(Some(&a.elem)),
        Type::Reference(r) => sequence_shape(&r.elem),
        other => {
            if let Some(elem) = single_generic(other, "Vec") {
                return SequenceShape::Vec(Some(elem));
            }
            for name in COLLECTIONS {
                if let Some(elem) = single_generic(other, name) {
                    return SequenceShape::Collection(*name, Some(elem));
                }
            }
            SequenceShape::Vec(None)
        }
    }
}

/// Strip parentheses and invisible groups.
pub(super) fn peel(ty: &Type) -> &Type {
    match ty {
        Type::Paren(p) => peel(&p.elem),
        Type::Group(g) => peel(&g.elem),
        other => other,
    }
}

/// Whether `ty` is a path whose last segment is `name` (ignoring generics).
pub(super) fn is_named(ty: &Type, name: &str) -> bool {
    match peel(ty) {
        Type::Path(p) if p.qself.is_none() => p.path.segments.last().is_some_and(|s| s.ident == name),
        _ => false,
    }
}

fn is_float(ty: &Type) -> bool {
    is_named(ty, "f64") || is_named(ty, "f32")
}

/// `T` when `ty` is `name<T>`.
fn single_generic<'a>(ty: &'a Type, name: &str) -> Option<&'a Type> {
    let Type::Path(p) = peel(ty) else {
        return None;
    };
    let last = p.path.segments.last()?;
    if last.ident != name {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &last.arguments else {
        return None;
    };
    let mut types = args.args.iter().filter_map(|arg| match arg {
        GenericArgument::Type(t) => Some(t),
        _ => None,
    });
    types.next()
}
