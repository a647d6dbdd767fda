//! Helpers for walking ONVIF response trees
//!
//! `xmltree` matches child names by local name, so the helpers below work the
//! same whether a device prefixes elements with `tt:`, `trt:` or nothing.

use std::fmt::Display;
use std::str::FromStr;

pub use xmltree::Element;

use crate::error::{ApiError, Result};

/// Follow a path of child names from `el`
pub fn child<'a>(el: &'a Element, path: &[&str]) -> Option<&'a Element> {
    path.iter().try_fold(el, |current, name| current.get_child(*name))
}

/// Trimmed text content at `path`
pub fn text(el: &Element, path: &[&str]) -> Option<String> {
    child(el, path)
        .and_then(|e| e.get_text())
        .map(|t| t.trim().to_string())
}

pub fn text_or_default(el: &Element, path: &[&str]) -> String {
    text(el, path).unwrap_or_default()
}

/// Parse a numeric field, falling back to the type default when absent or garbled
pub fn parse_or_default<T: FromStr + Default>(el: &Element, path: &[&str]) -> T {
    text(el, path)
        .and_then(|t| t.parse().ok())
        .unwrap_or_default()
}

/// Parse an optional field strictly: absent is `None`, unparseable is an error
pub fn parse_at<T>(el: &Element, path: &[&str]) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match text(el, path) {
        None => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(|e| {
            ApiError::ParseError(format!("Invalid {} value '{}': {}", path.join("/"), raw, e))
        }),
    }
}

/// xsd:boolean - "true" or "1"
pub fn bool_or_default(el: &Element, path: &[&str]) -> bool {
    matches!(text(el, path).as_deref(), Some("true") | Some("1"))
}

pub fn attr(el: &Element, name: &str) -> Option<String> {
    el.attributes.get(name).cloned()
}

/// Parse an attribute, falling back to the type default
pub fn attr_or_default<T: FromStr + Default>(el: &Element, name: &str) -> T {
    el.attributes
        .get(name)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or_default()
}

/// All direct children with the given local name
pub fn children<'a>(el: &'a Element, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
    el.children
        .iter()
        .filter_map(|node| node.as_element())
        .filter(move |e| e.name == name)
}

pub fn required<'a>(el: &'a Element, path: &[&str]) -> Result<&'a Element> {
    child(el, path).ok_or_else(|| ApiError::missing(&path.join("/")))
}

/// Escape text for inclusion in a request payload
pub fn escape(value: &str) -> String {
    soap_client::security::escape_text(value)
}
