use serde_json::Value;

use crate::diagnostics::Report;
use crate::schema::{SchemaNode, value_kind};

/// Structural validation of a JSON document against a [`SchemaNode`] tree
///
/// Every problem is reported and checking continues with the siblings of the offending node, so a
/// single pass surfaces all structural issues of a document.
pub struct SchemaValidator<'a> {
    schema: &'a SchemaNode,
}

impl<'a> SchemaValidator<'a> {
    pub fn new(schema: &'a SchemaNode) -> Self {
        Self { schema }
    }

    pub fn validate(&self, value: &Value, report: &mut Report) {
        let mut path = Vec::new();
        check_node(value, self.schema, &mut path, report);
    }
}

fn key_str(path: &[String]) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.join(".")
    }
}

fn check_node(value: &Value, node: &SchemaNode, path: &mut Vec<String>, report: &mut Report) {
    if !node.matches_kind(value) {
        report.error(format!(
            "expected \"{}\" to be {}, but was {}",
            key_str(path),
            node.kind(),
            value_kind(value)
        ));
        return;
    }

    match (node, value) {
        (SchemaNode::Mapping(fields), Value::Object(map)) => {
            for (key, child) in map {
                path.push(key.clone());
                match node.field(key) {
                    Some(field) => check_node(child, &field.node, path, report),
                    None => report.warn(format!("unexpected key \"{}\"", key_str(path))),
                }
                path.pop();
            }
            for field in fields {
                if field.required && !map.contains_key(&field.name) {
                    path.push(field.name.clone());
                    report.error(format!("missing key \"{}\"", key_str(path)));
                    path.pop();
                }
            }
        }
        (SchemaNode::List(element), Value::Array(items)) => {
            for (index, item) in items.iter().enumerate() {
                path.push(index.to_string());
                check_node(item, element, path, report);
                path.pop();
            }
        }
        (SchemaNode::String, Value::String(s)) if s.is_empty() => {
            report.error(format!("\"{}\" cannot be empty string", key_str(path)));
        }
        _ => {}
    }
}
