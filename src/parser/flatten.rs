use serde_json::Value;

pub const GRAPH_KEY: &str = "@graph";

/// Depth-first flattening of JSON-LD trees into candidate objects.
///
/// Arrays are expanded, objects contribute their `@graph` contents followed by
/// themselves, and scalars or nulls contribute nothing. The container object is
/// kept alongside its graph children, so the output has duplicates and partial
/// nodes; callers dedupe on derived identity later.
pub fn flatten(blocks: &[Value]) -> Vec<&Value> {
    let mut out = Vec::new();
    for block in blocks {
        walk(block, &mut out);
    }
    out
}

fn walk<'a>(node: &'a Value, out: &mut Vec<&'a Value>) {
    match node {
        Value::Array(items) => {
            for item in items {
                walk(item, out);
            }
        }
        Value::Object(map) => {
            if let Some(graph) = map.get(GRAPH_KEY) {
                walk(graph, out);
            }
            out.push(node);
        }
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_and_nulls_dropped() {
        let blocks = vec![json!(null), json!(1), json!("x"), json!(true), json!([null, 2])];
        assert!(flatten(&blocks).is_empty());
    }

    #[test]
    fn arrays_expand_in_order() {
        let blocks = vec![json!([{"n": 1}, [{"n": 2}, {"n": 3}]]), json!({"n": 4})];
        let ns: Vec<_> = flatten(&blocks).iter().map(|v| v["n"].clone()).collect();
        assert_eq!(ns, vec![json!(1), json!(2), json!(3), json!(4)]);
    }

    #[test]
    fn graph_keeps_children_and_container() {
        let block = json!({
            "@context": "https://schema.org",
            "@graph": [
                {"@type": "Organization", "name": "Shop"},
                {"@type": "Product", "name": "Ring"}
            ]
        });
        let blocks = vec![block.clone()];
        let items = flatten(&blocks);
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["@type"], "Organization");
        assert_eq!(items[1]["@type"], "Product");
        assert_eq!(*items[2], block);
    }

    #[test]
    fn nested_graphs() {
        let blocks = vec![json!({
            "@graph": {"@graph": [{"id": "a"}], "id": "inner"},
            "id": "outer"
        })];
        let ids: Vec<_> = flatten(&blocks).iter().map(|v| v["id"].clone()).collect();
        assert_eq!(ids, vec![json!("a"), json!("inner"), json!("outer")]);
    }

    #[test]
    fn non_graph_children_not_descended() {
        let blocks = vec![json!({"@type": "ItemList", "itemListElement": [{"@type": "ListItem"}]})];
        assert_eq!(flatten(&blocks).len(), 1);
    }
}
