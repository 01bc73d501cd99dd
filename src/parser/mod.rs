pub mod flatten;
pub mod jsonld;
pub mod listing;
pub mod product;

use serde_json::Value;

/// Two-pass pipeline: HTML → JSON-LD blocks → flattened candidate nodes.
/// The blocks own the data; `f` sees the flattened view.
pub fn with_candidates<T>(html: &str, f: impl FnOnce(&[&Value]) -> T) -> T {
    let blocks = jsonld::extract_blocks(html);
    let items = flatten::flatten(&blocks);
    f(&items)
}

/// First `Product` node on the page, mapped into a record.
pub fn page_product(html: &str) -> Option<crate::catalog::OutputRecord> {
    with_candidates(html, |items| {
        items
            .iter()
            .find(|item| product::is_type(item, "Product"))
            .and_then(|item| product::map_product(item))
    })
}
