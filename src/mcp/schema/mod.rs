//! Schema validation for tool payloads.
//!
//! Records built by the catalog are checked against a declared [`Shape`]
//! immediately before they are handed to the tool layer.

pub mod partial;
pub mod shape;
pub mod validation;

pub use partial::Partial;
pub use shape::{
    validate, validate_batch, validate_into, FieldKind, FieldSpec, Shape, CATEGORY, CATEGORY_TYPE,
    COMPONENT, COMPONENT_DETAIL, COMPONENT_TYPE, DOCUMENTATION_PAGE, DOCUMENTATION_TYPE,
    SEARCH_RESULT,
};
pub use validation::{ValidationError, ValidationErrors};
