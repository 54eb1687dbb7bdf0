use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A single report record, addressed by its caller-supplied `id`.
///
/// Only the identifier is required on decode; a missing `name` becomes the
/// empty string.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Report {
    #[schema(example = "42")]
    pub id: String,
    /// Free-form display label.
    #[schema(example = "nightly-regression")]
    #[serde(default)]
    pub name: String,
}
