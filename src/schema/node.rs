use serde_json::Value;

/// Expected shape of a JSON value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    /// A non-empty string
    String,
    Bool,
    /// An object with named fields
    Mapping(Vec<Field>),
    /// An array whose elements all share one shape
    List(Box<SchemaNode>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub node: SchemaNode,
    pub required: bool,
}

impl Field {
    pub fn required(name: impl Into<String>, node: SchemaNode) -> Self {
        Self {
            name: name.into(),
            node,
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>, node: SchemaNode) -> Self {
        Self {
            name: name.into(),
            node,
            required: false,
        }
    }
}

impl SchemaNode {
    pub fn mapping(fields: impl IntoIterator<Item = Field>) -> Self {
        SchemaNode::Mapping(fields.into_iter().collect())
    }

    pub fn list_of(element: SchemaNode) -> Self {
        SchemaNode::List(Box::new(element))
    }

    /// Look up a field of a mapping node
    pub fn field(&self, name: &str) -> Option<&Field> {
        match self {
            SchemaNode::Mapping(fields) => fields.iter().find(|f| f.name == name),
            _ => None,
        }
    }

    /// Human readable kind, used in type mismatch messages
    pub fn kind(&self) -> &'static str {
        match self {
            SchemaNode::String => "string",
            SchemaNode::Bool => "boolean",
            SchemaNode::Mapping(_) => "mapping",
            SchemaNode::List(_) => "list",
        }
    }

    pub fn matches_kind(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (SchemaNode::String, Value::String(_))
                | (SchemaNode::Bool, Value::Bool(_))
                | (SchemaNode::Mapping(_), Value::Object(_))
                | (SchemaNode::List(_), Value::Array(_))
        )
    }
}

/// Kind of a JSON value, named the same way as [`SchemaNode::kind`]
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "mapping",
    }
}
