/// flowframe schema version - follows semantic versioning
pub const FLOWFRAME_FORMAT_VERSION: &str = "1.0.0";

/// Metadata key for the schema version in exported Arrow schemas
pub const KEY_FORMAT_VERSION: &str = "flowframe:format_version";

/// Metadata key for the human-readable schema description
pub const KEY_SCHEMA_DESCRIPTION: &str = "flowframe:schema_description";
