use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static LD_JSON_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?is)<script\b[^>]*\btype\s*=\s*["']?application/ld\+json["']?[^>]*>(.*?)</script\s*>"#,
    )
    .unwrap()
});

/// Every `application/ld+json` script body in `html` that parses as JSON, in
/// document order. Malformed bodies are skipped.
pub fn extract_blocks(html: &str) -> Vec<Value> {
    LD_JSON_RE
        .captures_iter(html)
        .filter_map(|caps| {
            let body = caps.get(1)?.as_str().trim();
            if body.is_empty() {
                return None;
            }
            serde_json::from_str(body).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn no_blocks() {
        assert!(extract_blocks("<html><body><p>Rings</p></body></html>").is_empty());
        assert!(extract_blocks("").is_empty());
    }

    #[test]
    fn ignores_other_script_types() {
        let html = r#"<script type="application/json">{"a":1}</script><script>var x = 1;</script>"#;
        assert!(extract_blocks(html).is_empty());
    }

    #[test]
    fn attribute_order_and_case() {
        let html = r#"
            <SCRIPT id="ld" TYPE='Application/LD+JSON' data-x="1">{"@type":"Product","name":"A"}</SCRIPT>
            <script type="application/ld+json" nonce="abc">
              {"@type": "Product", "name": "B"}
            </script>
        "#;
        let blocks = extract_blocks(html);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0]["name"], "A");
        assert_eq!(blocks[1]["name"], "B");
    }

    #[test]
    fn non_greedy_between_blocks() {
        let html = r#"<script type="application/ld+json">[1]</script><p>x</p><script type="application/ld+json">[2]</script>"#;
        assert_eq!(extract_blocks(html), vec![json!([1]), json!([2])]);
    }

    #[test]
    fn malformed_body_skipped() {
        let html = r#"
            <script type="application/ld+json">{"name": "broken",</script>
            <script type="application/ld+json"></script>
            <script type="application/ld+json">{"name": "ok"}</script>
        "#;
        let blocks = extract_blocks(html);
        assert_eq!(blocks, vec![json!({"name": "ok"})]);
    }

    #[test]
    fn fixture_home_page() {
        let html = std::fs::read_to_string("tests/fixtures/home.html").unwrap();
        let blocks = extract_blocks(&html);
        assert_eq!(blocks.len(), 2);
    }
}
