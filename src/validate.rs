//! Entry-point validation
//!
//! A solution is only worth testing if the spec's entry point really exists in it. Each check
//! reads and parses the source file on its own (`syn::parse_file`, no state shared between
//! calls) and looks for a top-level `pub fn` with the requested name. A `pub use` re-export also
//! counts when its target is a function defined in the same file, possibly inside inline `mod`
//! blocks; the signature is then read from that function. Every failure, from a missing file to
//! a syntax error, ends here as a [`ValidationError`].

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

use std::fs;
use std::path::PathBuf;

use quote::ToTokens;
use syn::{FnArg, GenericParam, Item, ItemFn, Pat, ReturnType, Type, UseTree, Visibility};
use thiserror::Error;

use crate::discovery::SolutionUnit;

/// Why an entry point could not be validated
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("source file {} does not exist", .0.display())]
    SourceMissing(PathBuf),

    #[error("cannot read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: syn::Error,
    },

    #[error("no item named `{0}`")]
    EntryPointMissing(String),

    #[error("`{0}` is not a function")]
    NotAFunction(String),

    #[error("`{0}` is not public")]
    NotPublic(String),

    #[error("`{0}` is re-exported from outside this file")]
    UnresolvedReExport(String),

    #[error("parameter `{param}` of `{function}` is not a plain identifier")]
    UnsupportedParameter { function: String, param: String },
}

/// A declared function parameter.
#[derive(Debug, Clone)]
pub struct Param {
    pub name: String,
    pub ty: Type,
}

/// A located entry point and its signature.
#[derive(Debug, Clone)]
pub struct EntryPoint {
    pub name: String,
    /// Parameters in declaration order
    pub params: Vec<Param>,
    /// Declared return type; `None` for `()`
    pub output: Option<Type>,
    /// Names of the function's type and const generic parameters
    pub generics: Vec<String>,
}

impl EntryPoint {
    pub fn param(&self, name: &str) -> Option<&Param> {
        self.params.iter().find(|p| p.name == name)
    }
}

/// Check whether `unit` defines `entry_point`. Never fails; causes are dropped.
pub fn validate(unit: &SolutionUnit, entry_point: &str) -> bool {
    inspect(unit, entry_point).is_ok()
}

/// Locate `entry_point` in `unit` and return its signature.
#[tracing::instrument(skip_all, fields(id = %unit.id, entry_point = %entry_point))]
pub fn inspect(unit: &SolutionUnit, entry_point: &str) -> Result<EntryPoint, ValidationError> {
    let path = &unit.source_path;
    if !path.is_file() {
        return Err(ValidationError::SourceMissing(path.clone()));
    }
    let source = fs::read_to_string(path).map_err(|source| ValidationError::Read {
        path: path.clone(),
        source,
    })?;
    let file = syn::parse_file(&source).map_err(|source| ValidationError::Parse {
        path: path.clone(),
        source,
    })?;

    for item in &file.items {
        match item {
            Item::Fn(func) if func.sig.ident == entry_point => {
                if !matches!(func.vis, Visibility::Public(_)) {
                    return Err(ValidationError::NotPublic(entry_point.to_string()));
                }
                return entry_point_from_sig(&func.sig);
            }
            Item::Use(import) => {
                let Some((target, glob)) = use_target(&import.tree, entry_point, Vec::new()) else {
                    continue;
                };
                let public = matches!(import.vis, Visibility::Public(_));
                if glob {
                    // A glob only binds the name when its module really defines it.
                    match resolve_fn(&file.items, &target) {
                        Some(func) if public => return entry_point_from_sig(&func.sig),
                        _ => continue,
                    }
                }
                if !public {
                    return Err(ValidationError::NotPublic(entry_point.to_string()));
                }
                let func = resolve_fn(&file.items, &target)
                    .ok_or_else(|| ValidationError::UnresolvedReExport(entry_point.to_string()))?;
                let mut entry = entry_point_from_sig(&func.sig)?;
                entry.name = entry_point.to_string();
                return Ok(entry);
            }
            other if item_name(other).as_deref() == Some(entry_point) => {
                return Err(ValidationError::NotAFunction(entry_point.to_string()));
            }
            _ => {}
        }
    }

    Err(ValidationError::EntryPointMissing(entry_point.to_string()))
}

pub(crate) fn entry_point_from_sig(sig: &syn::Signature) -> Result<EntryPoint, ValidationError> {
    let name = sig.ident.to_string();
    let mut params = Vec::with_capacity(sig.inputs.len());
    for input in &sig.inputs {
        let unsupported = |param: String| ValidationError::UnsupportedParameter {
            function: name.clone(),
            param,
        };
        match input {
            FnArg::Typed(typed) => match typed.pat.as_ref() {
                Pat::Ident(ident) => params.push(Param {
                    name: ident.ident.to_string(),
                    ty: (*typed.ty).clone(),
                }),
                other => return Err(unsupported(other.to_token_stream().to_string())),
            },
            FnArg::Receiver(_) => return Err(unsupported("self".to_string())),
        }
    }
    let output = match &sig.output {
        ReturnType::Default => None,
        ReturnType::Type(_, ty) => Some((**ty).clone()),
    };
    let generics = sig
        .generics
        .params
        .iter()
        .filter_map(|param| match param {
            GenericParam::Type(t) => Some(t.ident.to_string()),
            GenericParam::Const(c) => Some(c.ident.to_string()),
            GenericParam::Lifetime(_) => None,
        })
        .collect();
    Ok(EntryPoint {
        name,
        params,
        output,
        generics,
    })
}

/// Name a top-level non-function, non-`use` item binds, if any.
fn item_name(item: &Item) -> Option<String> {
    let ident = match item {
        Item::Const(i) => &i.ident,
        Item::Static(i) => &i.ident,
        Item::Struct(i) => &i.ident,
        Item::Enum(i) => &i.ident,
        Item::Type(i) => &i.ident,
        Item::Mod(i) => &i.ident,
        Item::Trait(i) => &i.ident,
        Item::Macro(i) => i.ident.as_ref()?,
        _ => return None,
    };
    Some(ident.to_string())
}

/// Path a `use` tree binds `name` to, with groups expanded, and whether it came from a glob.
///
/// A glob yields its prefix followed by `name`.
fn use_target(tree: &UseTree, name: &str, mut prefix: Vec<String>) -> Option<(Vec<String>, bool)> {
    match tree {
        UseTree::Path(p) => {
            prefix.push(p.ident.to_string());
            use_target(&p.tree, name, prefix)
        }
        UseTree::Name(n) if n.ident == name => {
            prefix.push(n.ident.to_string());
            Some((prefix, false))
        }
        UseTree::Rename(r) if r.rename == name => {
            prefix.push(r.ident.to_string());
            Some((prefix, false))
        }
        UseTree::Glob(_) if !prefix.is_empty() => {
            prefix.push(name.to_string());
            Some((prefix, true))
        }
        UseTree::Group(g) => g.items.iter().find_map(|tree| use_target(tree, name, prefix.clone())),
        _ => None,
    }
}

/// Follow `path` through inline modules of `items` to a function.
fn resolve_fn<'a>(items: &'a [Item], path: &[String]) -> Option<&'a ItemFn> {
    let path = match path.split_first() {
        Some((head, rest)) if head == "self" => rest,
        _ => path,
    };
    match path {
        [name] => items.iter().find_map(|item| match item {
            Item::Fn(func) if func.sig.ident == name => Some(func),
            _ => None,
        }),
        [module, rest @ ..] => items.iter().find_map(|item| match item {
            Item::Mod(m) if m.ident == module => m.content.as_ref().and_then(|(_, inner)| resolve_fn(inner, rest)),
            _ => None,
        }),
        [] => None,
    }
}
