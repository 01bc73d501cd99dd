use std::collections::HashSet;

use reqwest::Url;
use serde_json::Value;

use super::product::is_type;

/// Product URLs listed by the first `ItemList` among `items`, resolved
/// against `site_root` and deduplicated in first-seen order. No `ItemList`
/// means no URLs.
pub fn listed_urls(items: &[&Value], site_root: &Url) -> Vec<String> {
    let Some(list) = items.iter().find(|item| is_type(item, "ItemList")) else {
        return Vec::new();
    };

    let entries: Vec<&Value> = match list.get("itemListElement") {
        Some(Value::Array(entries)) => entries.iter().collect(),
        Some(entry) => vec![entry],
        None => Vec::new(),
    };

    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter_map(entry_url)
        .filter_map(|raw| resolve(site_root, raw))
        .filter(|url| seen.insert(url.clone()))
        .collect()
}

/// A listing entry is either a bare URL string or a `ListItem` carrying
/// `url`, or an `item` that is itself a URL or a nested node.
fn entry_url(entry: &Value) -> Option<&str> {
    if let Some(s) = entry.as_str() {
        return Some(s);
    }
    if let Some(url) = entry.get("url").and_then(Value::as_str) {
        return Some(url);
    }
    match entry.get("item")? {
        Value::String(s) => Some(s.as_str()),
        item => item
            .get("url")
            .or_else(|| item.get("@id"))
            .and_then(Value::as_str),
    }
}

fn resolve(site_root: &Url, raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let url = site_root.join(raw).ok()?;
    matches!(url.scheme(), "http" | "https").then(|| url.to_string())
}
