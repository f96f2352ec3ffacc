// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Type-name canonicalization.
//!
//! Rewrites a fully qualified, possibly nested generic type name into
//! shorthand:
//!
//! | Raw | Shorthand |
//! |-----|-----------|
//! | `Module.Foo` | `Foo` |
//! | `Module.Optional<Module.Foo>` | `Foo?` |
//! | `Module.Array<Module.Foo>` | `[Foo]` |
//! | `Module.Optional<Module.Array<Module.Foo>>` | `[Foo]?` |
//! | `Module.Dictionary<Module.String,Module.Int>` | `Dictionary<Module.String,Module.Int>` |
//! | `Module.Dictionary<Module.String,Module.Optional<Module.Int>>` | `Dictionary<Module.String,Module.Int?>` |
//!
//! Only `Optional` and `Array` are unwrapped, wherever they appear; their
//! arguments are canonicalized recursively. Every other generic, `Dictionary`
//! and `Set` included, only loses its outer qualifier: plain names among its
//! arguments keep their qualifiers (see [`RenderConfig::expand_collections`]
//! to opt out).
//!
//! Malformed names never fail: the input comes back with only its leading
//! qualifier stripped, or unchanged when even that is ambiguous.
//!
//! # Example
//!
//! ```rust
//! use mirror::canonical::{canonicalize, outer_wrapper, Wrapper};
//!
//! assert_eq!(canonicalize("Module.Array<Module.Optional<Module.Foo>>"), "[Foo?]");
//! assert_eq!(canonicalize("Optional<Foo"), "Optional<Foo");
//! assert_eq!(outer_wrapper("Module.Set<Module.Int>"), Some(Wrapper::Set));
//! ```

mod parser;

use crate::config::{RenderConfig, MAX_DEPTH_LIMIT};
use parser::{is_delimiter, is_identifier, TypeExpr};
use std::fmt;

/// Recognized generic container wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wrapper {
    Optional,
    Array,
    Dictionary,
    Set,
}

impl Wrapper {
    /// Exact outer identifier of the wrapper.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Optional => "Optional",
            Self::Array => "Array",
            Self::Dictionary => "Dictionary",
            Self::Set => "Set",
        }
    }

    /// Case-sensitive lookup by identifier.
    pub fn from_ident(ident: &str) -> Option<Self> {
        match ident {
            "Optional" => Some(Self::Optional),
            "Array" => Some(Self::Array),
            "Dictionary" => Some(Self::Dictionary),
            "Set" => Some(Self::Set),
            _ => None,
        }
    }
}

impl fmt::Display for Wrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonicalize with the default [`RenderConfig`].
pub fn canonicalize(raw: &str) -> String {
    canonicalize_with(raw, &RenderConfig::default())
}

/// Canonicalize a raw type name into shorthand.
///
/// `config.max_depth` is capped at [`MAX_DEPTH_LIMIT`].
pub fn canonicalize_with(raw: &str, config: &RenderConfig) -> String {
    let max_depth = config.max_depth.min(MAX_DEPTH_LIMIT);
    match parser::parse(raw, max_depth) {
        Ok(expr) => {
            let mut out = String::with_capacity(raw.len());
            render(&expr, config, false, &mut out);
            out
        }
        Err(e) => {
            log::trace!("[canonical] malformed type name {:?}: {}", raw, e);
            if config.strip_qualifiers {
                strip_leading_qualifier(raw).to_string()
            } else {
                raw.to_string()
            }
        }
    }
}

/// Drop the module qualifier from a plain qualified name: `A.B.Foo` is `Foo`.
///
/// Names carrying generic arguments are stripped on the outer name only.
pub fn strip_qualifier(name: &str) -> &str {
    strip_leading_qualifier(name)
}

/// Wrapper named by the raw descriptor's outer token, before any rewriting.
///
/// Shorthand such as `Foo?` or `[Foo]` is not a wrapper token and classifies
/// as `None`. Malformed names are classified by the name before their first `<`.
pub fn outer_wrapper(raw: &str) -> Option<Wrapper> {
    match parser::parse(raw, MAX_DEPTH_LIMIT) {
        Ok(expr @ TypeExpr::Named { args: Some(_), .. }) => {
            expr.ident().and_then(Wrapper::from_ident)
        }
        Ok(_) => None,
        Err(_) => scan_outer_wrapper(raw),
    }
}

fn scan_outer_wrapper(raw: &str) -> Option<Wrapper> {
    let raw = raw.trim_start();
    let open = raw.find('<')?;
    let head = raw[..open].trim_end();
    let ident = head.rsplit('.').next()?;
    Wrapper::from_ident(ident)
}

/// Strip the qualifier of the leading name when it is made of well-formed
/// identifiers; anything else is returned untouched.
fn strip_leading_qualifier(raw: &str) -> &str {
    let head_end = raw
        .find(|c: char| is_delimiter(c) && c != '.')
        .unwrap_or(raw.len());
    let head = &raw[..head_end];
    let Some(dot) = head.rfind('.') else {
        return raw;
    };

    let qualifier = &head[..dot];
    let tail = &head[dot + 1..];
    let tail_ok = tail.chars().next().is_some_and(|c| !c.is_whitespace());
    if tail_ok && qualifier.split('.').all(is_identifier) {
        &raw[dot + 1..]
    } else {
        raw
    }
}

/// Render `expr`. `in_args` is set inside the arguments of a generic that is
/// not rewritten: plain names there keep their qualifiers, while `Optional`
/// and `Array` are still unwrapped.
fn render(expr: &TypeExpr<'_>, config: &RenderConfig, in_args: bool, out: &mut String) {
    match expr {
        TypeExpr::Named { path, args } => {
            let wrapper = expr.ident().and_then(Wrapper::from_ident);
            let items = args.as_ref().map(|a| a.items.as_slice()).unwrap_or(&[]);
            match (wrapper, items) {
                (Some(Wrapper::Optional), [inner]) => {
                    render(inner, config, false, out);
                    out.push('?');
                }
                (Some(Wrapper::Array), [element]) => {
                    out.push('[');
                    render(element, config, false, out);
                    out.push(']');
                }
                (Some(Wrapper::Dictionary), [key, value]) if config.expand_collections => {
                    push_dictionary(key, value, config, out);
                }
                (Some(Wrapper::Set), [element]) if config.expand_collections => {
                    out.push_str("Set<");
                    render(element, config, false, out);
                    out.push('>');
                }
                _ => {
                    if in_args {
                        out.push_str(&path.join("."));
                    } else {
                        push_name(path, config, out);
                    }
                    if let Some(args) = args {
                        out.push('<');
                        for (i, item) in args.items.iter().enumerate() {
                            if i > 0 {
                                out.push(',');
                            }
                            render(item, config, true, out);
                        }
                        out.push('>');
                    }
                }
            }
        }
        TypeExpr::ArrayShorthand(element) => {
            out.push('[');
            render(element, config, false, out);
            out.push(']');
        }
        TypeExpr::DictionaryShorthand(key, value) => push_dictionary(key, value, config, out),
        TypeExpr::OptionalShorthand(inner) => {
            render(inner, config, false, out);
            out.push('?');
        }
    }
}

fn push_dictionary(
    key: &TypeExpr<'_>,
    value: &TypeExpr<'_>,
    config: &RenderConfig,
    out: &mut String,
) {
    out.push('[');
    render(key, config, false, out);
    out.push_str(": ");
    render(value, config, false, out);
    out.push(']');
}

fn push_name(path: &[&str], config: &RenderConfig, out: &mut String) {
    if config.strip_qualifiers {
        if let Some(last) = path.last() {
            out.push_str(last);
        }
    } else {
        out.push_str(&path.join("."));
    }
}
