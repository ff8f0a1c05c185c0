use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};
use std::fmt;

// JSON kinds a contract field can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl FieldKind {
    pub fn matches(self, value: &Value) -> bool {
        match self {
            FieldKind::String => value.is_string(),
            FieldKind::Number => value.is_number(),
            FieldKind::Boolean => value.is_boolean(),
            FieldKind::Array => value.is_array(),
            FieldKind::Object => value.is_object(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Array => "array",
            FieldKind::Object => "object",
        }
    }
}

// Name of the JSON kind actually received, used in issue messages.
pub fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl Field {
    pub const fn required(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: true,
        }
    }

    pub const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    fn check(&self, object: &Map<String, Value>) -> Option<ValidationIssue> {
        match object.get(self.name) {
            None if self.required => Some(ValidationIssue {
                code: INVALID_TYPE.to_string(),
                path: vec![self.name.to_string()],
                message: "Required".to_string(),
                expected: Some(self.kind.as_str().to_string()),
                received: Some("undefined".to_string()),
            }),
            None => None,
            Some(value) if self.kind.matches(value) => None,
            Some(value) => Some(ValidationIssue::invalid_type(
                vec![self.name.to_string()],
                self.kind.as_str(),
                kind_name(value),
            )),
        }
    }
}

/// Declarative shape of a JSON object payload.
///
/// Only the listed fields are checked; unknown keys are accepted here and
/// dropped once the payload is deserialized into its typed contract.
#[derive(Debug, Clone, Copy)]
pub struct ObjectSchema {
    pub fields: &'static [Field],
}

impl ObjectSchema {
    /// Checks every field and reports all failures at once.
    pub fn check(&self, value: &Value) -> Result<(), SchemaError> {
        let Some(object) = value.as_object() else {
            return Err(SchemaError::new(vec![ValidationIssue::invalid_type(
                Vec::new(),
                FieldKind::Object.as_str(),
                kind_name(value),
            )]));
        };

        let issues: Vec<ValidationIssue> = self
            .fields
            .iter()
            .filter_map(|field| field.check(object))
            .collect();

        if issues.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::new(issues))
        }
    }
}

pub const INVALID_TYPE: &str = "invalid_type";
pub const CUSTOM: &str = "custom";

// Single reason a payload failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    pub code: String,
    #[serde(default)]
    pub path: Vec<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received: Option<String>,
}

impl ValidationIssue {
    pub fn invalid_type(path: Vec<String>, expected: &str, received: &str) -> Self {
        Self {
            code: INVALID_TYPE.to_string(),
            path,
            message: format!("Expected {expected}, received {received}"),
            expected: Some(expected.to_string()),
            received: Some(received.to_string()),
        }
    }

    pub fn custom(path: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            code: CUSTOM.to_string(),
            path,
            message: message.into(),
            expected: None,
            received: None,
        }
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path.join("."), self.message)
        }
    }
}

/// A payload did not match its contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaError {
    issues: Vec<ValidationIssue>,
}

impl SchemaError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        Self { issues }
    }

    // Serde failures surface after the shape check passed, e.g. nested items
    // that do not fit their typed representation.
    pub fn from_serde(err: serde_json::Error) -> Self {
        Self::new(vec![ValidationIssue::custom(Vec::new(), err.to_string())])
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema validation failed")?;
        for (index, issue) in self.issues.iter().enumerate() {
            let separator = if index == 0 { ": " } else { "; " };
            write!(f, "{separator}{issue}")?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

// Validation entry point stored by routes that want a checked response body.
pub type Validator = fn(Value) -> Result<Value, SchemaError>;

/// A typed payload with a declared JSON shape.
pub trait Contract: Serialize + DeserializeOwned {
    const SCHEMA: ObjectSchema;

    fn parse(value: Value) -> Result<Self, SchemaError> {
        Self::SCHEMA.check(&value)?;
        serde_json::from_value(value).map_err(SchemaError::from_serde)
    }

    /// Parses and re-serializes, yielding the normalized payload.
    fn validate(value: Value) -> Result<Value, SchemaError> {
        let parsed = Self::parse(value)?;
        serde_json::to_value(parsed).map_err(SchemaError::from_serde)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SAMPLE: ObjectSchema = ObjectSchema {
        fields: &[
            Field::required("name", FieldKind::String),
            Field::required("count", FieldKind::Number),
            Field::optional("tags", FieldKind::Array),
        ],
    };

    #[test]
    fn when_all_fields_match_then_check_passes() {
        let value = json!({ "name": "a", "count": 1, "tags": [] });
        assert!(SAMPLE.check(&value).is_ok());
    }

    #[test]
    fn when_optional_field_is_absent_then_check_passes() {
        let value = json!({ "name": "a", "count": 1 });
        assert!(SAMPLE.check(&value).is_ok());
    }

    #[test]
    fn when_several_fields_fail_then_every_issue_is_reported() {
        let value = json!({ "count": "one", "tags": {} });

        let err = SAMPLE.check(&value).unwrap_err();

        let paths: Vec<_> = err.issues().iter().map(|i| i.path.join(".")).collect();
        assert_eq!(paths, vec!["name", "count", "tags"]);
        assert_eq!(err.issues()[0].message, "Required");
        assert_eq!(err.issues()[1].message, "Expected number, received string");
        assert_eq!(err.issues()[2].received.as_deref(), Some("object"));
    }

    #[test]
    fn when_root_is_not_an_object_then_single_root_issue() {
        let err = SAMPLE.check(&json!([1, 2])).unwrap_err();

        assert_eq!(err.issues().len(), 1);
        assert!(err.issues()[0].path.is_empty());
        assert_eq!(err.issues()[0].message, "Expected object, received array");
    }

    #[test]
    fn schema_error_display_lists_issue_paths() {
        let err = SAMPLE.check(&json!({})).unwrap_err();
        assert_eq!(
            err.to_string(),
            "schema validation failed: name: Required; count: Required"
        );
    }
}
