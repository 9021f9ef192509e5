//! JSON Schema of the node's parameter bag.
//!
//! Hosts that validate parameters before running the node (required
//! fields, enum values of `resource` and `role`, …) can feed this schema
//! to their validator. The JSON is produced with [`schemars`].

use schemars::{
    JsonSchema,
    r#gen::{SchemaGenerator, SchemaSettings},
};
use serde_json::{self, Value};

use crate::error::Result;
use crate::parameters::NodeParameters;

/// Generate a JSON Schema for the given `T` **inline**, i.e. without
/// `$ref` pointers to external definitions.
///
/// # Example
///
/// ```
/// use keywordsai_core::schema_util::derive_schema;
/// use schemars::JsonSchema;
///
/// #[derive(JsonSchema)]
/// struct Foo { bar: String }
///
/// let schema = derive_schema::<Foo>().unwrap();
/// assert_eq!(schema["type"], "object");
/// ```
pub fn derive_schema<T>() -> Result<Value>
where
    T: JsonSchema + 'static,
{
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = SchemaGenerator::new(settings);
    let root = generator.into_root_schema_for::<T>();

    Ok(serde_json::to_value(root)?)
}

/// Schema of [`NodeParameters`] as the host sees it (camelCase names).
pub fn parameters_schema() -> Result<Value> {
    derive_schema::<NodeParameters>()
}
