//! Expanded JSON-LD serializer for one node's outgoing triples.
//!
//! Produces a one-element `@graph`-less array holding a single node object:
//! `@id`, `@type` (from `rdf:type`), and one array per remaining predicate.
//! Objects are written as `{"@id": ...}` references or `{"@value": ...}`
//! literals; nested nodes are never embedded, so the snapshot carries no
//! structural context beyond the node itself.

use serde_json::{json, Map, Value};

use crate::error::Result;
use crate::graph::GraphStore;
use crate::namespaces::rdf;
use crate::node::Node;

/// Serializes the outgoing triples of `node` to an expanded JSON-LD `Value`.
///
/// # Errors
///
/// Returns an error if the store fails.
pub fn node_to_json_ld<G: GraphStore + ?Sized>(graph: &G, node: &Node) -> Result<Value> {
    let mut object = Map::new();
    object.insert("@id".to_owned(), json!(node_id(node)));

    let mut types: Vec<Value> = Vec::new();
    for (predicate, value) in graph.outgoing(node)? {
        if predicate == rdf::TYPE {
            if let Node::Iri(iri) = &value {
                types.push(json!(iri));
                continue;
            }
        }
        // Repeated predicates accumulate into the same array.
        let entry = object
            .entry(predicate)
            .or_insert_with(|| Value::Array(Vec::new()));
        if let Value::Array(values) = entry {
            values.push(object_to_json(&value));
        }
    }
    if !types.is_empty() {
        object.insert("@type".to_owned(), Value::Array(types));
    }

    Ok(Value::Array(vec![Value::Object(object)]))
}

fn node_id(node: &Node) -> String {
    match node {
        Node::Blank(id) => format!("_:{id}"),
        other => other.as_str().to_owned(),
    }
}

fn object_to_json(node: &Node) -> Value {
    match node {
        Node::Iri(_) | Node::Blank(_) => json!({ "@id": node_id(node) }),
        Node::Literal(lit) => {
            if let Some(language) = &lit.language {
                json!({ "@value": lit.lexical, "@language": language })
            } else if lit.datatype == rdf::XSD_STRING {
                json!({ "@value": lit.lexical })
            } else {
                json!({ "@value": lit.lexical, "@type": lit.datatype })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::ManifestGraph;

    const DOC: &str = r#"{
        "@id": "http://example.org/canvas/1",
        "@type": ["http://iiif.io/api/presentation/2#Canvas"],
        "http://www.w3.org/2000/01/rdf-schema#label": "1",
        "http://www.w3.org/2003/12/exif/ns#height": {"@value": "4700", "@type": "http://www.w3.org/2001/XMLSchema#integer"},
        "http://example.org/tag": [{"@value": "un", "@language": "fr"}, {"@value": "one", "@language": "en"}],
        "http://example.org/part": {"@id": "http://example.org/canvas/1/part", "http://example.org/x": "nested"}
    }"#;

    fn serialized() -> Value {
        let graph = ManifestGraph::from_jsonld(DOC).expect("fixture parses");
        node_to_json_ld(&graph, &Node::iri("http://example.org/canvas/1")).expect("serializes")
    }

    #[test]
    fn single_node_object() {
        let json = serialized();
        let nodes = json.as_array().expect("array");
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0]["@id"], "http://example.org/canvas/1");
        assert_eq!(nodes[0]["@type"], json!(["http://iiif.io/api/presentation/2#Canvas"]));
    }

    #[test]
    fn literals_keep_datatype_and_language() {
        let json = serialized();
        let node = &json[0];
        assert_eq!(
            node["http://www.w3.org/2000/01/rdf-schema#label"],
            json!([{ "@value": "1" }])
        );
        assert_eq!(
            node["http://www.w3.org/2003/12/exif/ns#height"],
            json!([{ "@value": "4700", "@type": "http://www.w3.org/2001/XMLSchema#integer" }])
        );
        assert_eq!(
            node["http://example.org/tag"].as_array().map(Vec::len),
            Some(2)
        );
    }

    #[test]
    fn nested_nodes_become_references() {
        let json = serialized();
        let node = &json[0];
        assert_eq!(
            node["http://example.org/part"],
            json!([{ "@id": "http://example.org/canvas/1/part" }])
        );
        assert!(node.get("http://example.org/x").is_none());
    }
}
