//! Declarative shapes for every record the server returns.
//!
//! A [`Shape`] lists fields with their JSON kind and whether they are
//! required. Checking never coerces: a number where a string is declared is
//! a violation, not a conversion.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::partial::Partial;
use super::validation::{ValidationError, ValidationErrors};

/// JSON kind a field must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Boolean,
    StringArray,
    /// A string fixed to one tag value.
    Literal(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

const fn required(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        required: true,
    }
}

const fn optional(name: &'static str, kind: FieldKind) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        required: false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

pub const COMPONENT_TYPE: &str = "tailgrids:component";
pub const CATEGORY_TYPE: &str = "tailgrids:category";
pub const DOCUMENTATION_TYPE: &str = "documentation";

pub const COMPONENT: Shape = Shape {
    name: "Component",
    fields: &[
        required("name", FieldKind::String),
        required("type", FieldKind::String),
        optional("description", FieldKind::String),
        optional("category", FieldKind::String),
        optional("url", FieldKind::String),
    ],
};

pub const COMPONENT_DETAIL: Shape = Shape {
    name: "ComponentDetail",
    fields: &[
        required("name", FieldKind::String),
        required("type", FieldKind::String),
        required("category", FieldKind::String),
        required("description", FieldKind::String),
        required("usage", FieldKind::String),
        required("installation", FieldKind::String),
        required("features", FieldKind::StringArray),
        required("formats", FieldKind::StringArray),
        required("url", FieldKind::String),
    ],
};

pub const CATEGORY: Shape = Shape {
    name: "Category",
    fields: &[
        required("name", FieldKind::String),
        required("type", FieldKind::Literal(CATEGORY_TYPE)),
        required("description", FieldKind::String),
        required("components", FieldKind::StringArray),
        required("url", FieldKind::String),
    ],
};

pub const DOCUMENTATION_PAGE: Shape = Shape {
    name: "DocumentationPage",
    fields: &[
        required("name", FieldKind::String),
        required("type", FieldKind::Literal(DOCUMENTATION_TYPE)),
        required("description", FieldKind::String),
        required("content", FieldKind::String),
        required("url", FieldKind::String),
    ],
};

pub const SEARCH_RESULT: Shape = Shape {
    name: "SearchResult",
    fields: &[
        required("query", FieldKind::String),
        required("found", FieldKind::Boolean),
        required("description", FieldKind::String),
        required("url", FieldKind::String),
        required("suggestion", FieldKind::String),
    ],
};

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn check_field(spec: &FieldSpec, value: &Value, errors: &mut ValidationErrors) {
    match spec.kind {
        FieldKind::String => {
            if !value.is_string() {
                errors.add(ValidationError::wrong_type(spec.name, "string", kind_of(value)));
            }
        }
        FieldKind::Boolean => {
            if !value.is_boolean() {
                errors.add(ValidationError::wrong_type(spec.name, "boolean", kind_of(value)));
            }
        }
        FieldKind::StringArray => match value.as_array() {
            Some(items) => {
                if let Some(index) = items.iter().position(|item| !item.is_string()) {
                    errors.add(ValidationError::wrong_type(
                        &format!("{}[{}]", spec.name, index),
                        "string",
                        kind_of(&items[index]),
                    ));
                }
            }
            None => errors.add(ValidationError::wrong_type(
                spec.name,
                "array of strings",
                kind_of(value),
            )),
        },
        FieldKind::Literal(tag) => match value.as_str() {
            Some(found) if found == tag => {}
            Some(found) => errors.add(ValidationError::wrong_literal(
                spec.name,
                tag,
                &format!("\"{}\"", found),
            )),
            None => errors.add(ValidationError::wrong_literal(spec.name, tag, kind_of(value))),
        },
    }
}

/// Check `value` against `shape`, returning it unchanged on success.
///
/// Every violation is collected. Unknown extra fields are allowed; `null` in
/// an optional field counts as absent.
pub fn validate(shape: &Shape, value: Value) -> Result<Value, ValidationErrors> {
    let mut errors = ValidationErrors::new(shape.name);

    let Some(object) = value.as_object() else {
        errors.add(ValidationError::not_an_object(shape.name, kind_of(&value)));
        return Err(errors);
    };

    for spec in shape.fields {
        match object.get(spec.name) {
            None | Some(Value::Null) => {
                if spec.required {
                    errors.add(ValidationError::missing_field(spec.name));
                }
            }
            Some(field) => check_field(spec, field, &mut errors),
        }
    }

    errors.into_result().map(|_| value)
}

/// Validate then deserialize into the typed record.
pub fn validate_into<T: DeserializeOwned>(shape: &Shape, value: Value) -> Result<T, ValidationErrors> {
    let value = validate(shape, value)?;
    serde_json::from_value(value).map_err(|err| {
        let mut errors = ValidationErrors::new(shape.name);
        errors.add(ValidationError::new(shape.name, err.to_string()));
        errors
    })
}

/// Validate each candidate, keeping survivors in order and recording one
/// error line per dropped candidate.
pub fn validate_batch<T, I>(shape: &Shape, candidates: I) -> Partial<T>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = Value>,
{
    let mut partial = Partial::new();
    for (index, candidate) in candidates.into_iter().enumerate() {
        let label = candidate
            .get("name")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", index));

        match validate_into::<T>(shape, candidate) {
            Ok(item) => partial.push(item),
            Err(errors) => {
                log::debug!("dropping {} candidate {}: {}", shape.name, label, errors);
                partial.record(format!("{}: {}", label, errors));
            }
        }
    }
    partial
}
