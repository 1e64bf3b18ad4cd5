//! Typed access to the fields of one JSON node.

use serde_json::{Map, Value};

use crate::FrontendError;

/// A JSON object carrying a string `type` field.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Node<'j> {
    kind: &'j str,
    fields: &'j Map<String, Value>,
}

impl<'j> Node<'j> {
    pub(crate) fn new(value: &'j Value) -> Result<Self, FrontendError> {
        let Some(fields) = value.as_object() else {
            return Err(FrontendError::ExpectedNode {
                found: json_type_name(value),
            });
        };
        let kind = match fields.get("type") {
            Some(Value::String(kind)) => kind.as_str(),
            Some(_) => {
                return Err(FrontendError::WrongFieldType {
                    node: "node".to_string(),
                    field: "type",
                    expected: "a string",
                })
            }
            None => {
                return Err(FrontendError::MissingField {
                    node: "node".to_string(),
                    field: "type",
                })
            }
        };
        Ok(Node { kind, fields })
    }

    pub(crate) fn kind(&self) -> &'j str {
        self.kind
    }

    /// A present, non-null field.
    pub(crate) fn field(&self, field: &'static str) -> Result<&'j Value, FrontendError> {
        match self.fields.get(field) {
            Some(Value::Null) | None => Err(FrontendError::MissingField {
                node: self.kind.to_string(),
                field,
            }),
            Some(value) => Ok(value),
        }
    }

    /// A field that may be absent or `null`.
    pub(crate) fn optional(&self, field: &'static str) -> Option<&'j Value> {
        self.fields.get(field).filter(|value| !value.is_null())
    }

    pub(crate) fn child(&self, field: &'static str) -> Result<Node<'j>, FrontendError> {
        Node::new(self.field(field)?)
    }

    pub(crate) fn str_field(&self, field: &'static str) -> Result<&'j str, FrontendError> {
        self.field(field)?
            .as_str()
            .ok_or_else(|| self.wrong_type(field, "a string"))
    }

    pub(crate) fn array(&self, field: &'static str) -> Result<&'j [Value], FrontendError> {
        self.field(field)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| self.wrong_type(field, "an array"))
    }

    #[cold]
    pub(crate) fn wrong_type(&self, field: &'static str, expected: &'static str) -> FrontendError {
        FrontendError::WrongFieldType {
            node: self.kind.to_string(),
            field,
            expected,
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
