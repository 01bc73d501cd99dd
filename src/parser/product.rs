use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::catalog::{OutputRecord, DEFAULT_BADGE, DEFAULT_MODEL};

static NON_ALNUM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9]+").unwrap());

/// True when the node's `@type` is `ty`, either directly or as one entry of
/// a type array.
pub fn is_type(node: &Value, ty: &str) -> bool {
    match node.get("@type") {
        Some(Value::String(t)) => t == ty,
        Some(Value::Array(ts)) => ts.iter().any(|t| t.as_str() == Some(ty)),
        _ => false,
    }
}

/// Map a Product-like node into a catalog record. `None` when there is no
/// usable name.
pub fn map_product(node: &Value) -> Option<OutputRecord> {
    let name = non_empty_str(node, "name").or_else(|| non_empty_str(node, "title"))?;
    let url = non_empty_str(node, "url");

    let id = sku(node)
        .or_else(|| url.and_then(last_path_segment))
        .unwrap_or_else(|| slugify(name));

    Some(OutputRecord {
        id,
        name: name.to_string(),
        tagline: String::new(),
        href: url.unwrap_or_default().to_string(),
        badge: DEFAULT_BADGE.to_string(),
        model: DEFAULT_MODEL,
    })
}

fn non_empty_str<'a>(node: &'a Value, key: &str) -> Option<&'a str> {
    node.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn sku(node: &Value) -> Option<String> {
    match node.get("sku")? {
        Value::String(s) => Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_string),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Last non-empty `/`-separated segment of the URL path, ignoring any query
/// string or fragment.
pub fn last_path_segment(url: &str) -> Option<String> {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let path = match path.split_once("://") {
        Some((_, rest)) => rest.split_once('/').map(|(_, p)| p).unwrap_or(""),
        None => path,
    };
    path.rsplit('/')
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Lowercase, non-alphanumeric runs collapsed to one hyphen, outer hyphens
/// trimmed.
pub fn slugify(text: &str) -> String {
    let lower = text.to_lowercase();
    NON_ALNUM_RE
        .replace_all(&lower, "-")
        .trim_matches('-')
        .to_string()
}
