use std::collections::HashMap;
use std::sync::Arc;

use arrow::datatypes::{Field, Schema, SchemaBuilder};

use super::constants::{FLOWFRAME_FORMAT_VERSION, KEY_FORMAT_VERSION, KEY_SCHEMA_DESCRIPTION};
use super::table;

/// Creates the particle table Arrow schema.
///
/// Fields appear in the export's declaration order with the Arrow type each
/// column's tag maps onto. All fields are nullable: the instrument declares
/// no nullability, and real exports omit columns whole rather than per cell.
///
/// # Example
///
/// ```
/// use flowframe::schema::create_particle_schema;
///
/// let schema = create_particle_schema();
/// assert_eq!(schema.fields().len(), 80);
/// ```
pub fn create_particle_schema() -> Schema {
    let mut builder = SchemaBuilder::new();

    for (name, column_type) in table::columns() {
        builder.push(Field::new(name, column_type.to_arrow(), true));
    }

    let mut schema = builder.finish();

    let mut metadata = HashMap::new();
    metadata.insert(
        KEY_FORMAT_VERSION.to_string(),
        FLOWFRAME_FORMAT_VERSION.to_string(),
    );
    metadata.insert(
        KEY_SCHEMA_DESCRIPTION.to_string(),
        "Imaging flow-cytometry particle table, one row per detected particle".to_string(),
    );

    schema = schema.with_metadata(metadata);
    log::debug!("built particle schema with {} fields", schema.fields().len());
    schema
}

/// Returns an Arc-wrapped particle schema for shared ownership
pub fn create_particle_schema_arc() -> Arc<Schema> {
    Arc::new(create_particle_schema())
}
