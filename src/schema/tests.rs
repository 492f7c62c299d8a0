use std::collections::HashSet;

use arrow::datatypes::{DataType, TimeUnit};

use super::*;

#[test]
fn test_column_count() {
    assert_eq!(columns().count(), COLUMN_COUNT);
    assert_eq!(COLUMN_COUNT, 80);
}

#[test]
fn test_no_duplicate_names() {
    let names: HashSet<&str> = columns().map(|(name, _)| name).collect();
    assert_eq!(names.len(), COLUMN_COUNT);
}

#[test]
fn test_lookup_matches_enumeration() {
    for (name, expected) in columns() {
        assert_eq!(column_type(name), Ok(expected));
    }
}

#[test]
fn test_timestamp_columns() {
    let timestamps: Vec<&str> = columns()
        .filter(|(_, ty)| *ty == ColumnType::Timestamp)
        .map(|(name, _)| name)
        .collect();
    assert_eq!(timestamps, vec![columns::DATE, columns::TIME, columns::TIMESTAMP]);
}

#[test]
fn test_uint64_columns() {
    let expected: HashSet<&str> = [
        columns::CAL_IMAGE,
        columns::GROUP_ID,
        columns::ID,
        columns::IMAGE_X,
        columns::IMAGE_Y,
        columns::IMAGE_H,
        columns::IMAGE_W,
        columns::PPC,
        columns::SRC_IMAGE,
        columns::SRC_X,
        columns::SRC_Y,
        columns::SPHERE_COMPLEMENT,
        columns::SPHERE_COUNT,
        columns::SPHERE_UNKNOWN,
        columns::SUM_INTENSITY,
    ]
    .into_iter()
    .collect();

    let actual: HashSet<&str> = columns()
        .filter(|(_, ty)| *ty == ColumnType::UInt64)
        .map(|(name, _)| name)
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_utf8_columns() {
    let expected: HashSet<&str> = [
        columns::NAME,
        columns::COLLAGE_FILE,
        columns::IMAGE_FILENAME,
        columns::UUID,
        columns::PREPROCESSING,
        columns::PREPROCESSING_TRUE,
        columns::LABEL_PREDICTED,
        columns::LABEL_TRUE,
    ]
    .into_iter()
    .collect();

    let actual: HashSet<&str> = columns()
        .filter(|(_, ty)| *ty == ColumnType::Utf8)
        .map(|(name, _)| name)
        .collect();
    assert_eq!(actual, expected);
}

#[test]
fn test_remaining_columns_are_float32() {
    let float_count = columns()
        .filter(|(_, ty)| *ty == ColumnType::Float32)
        .count();
    // 80 total, minus 15 uint64, 8 utf8, 3 timestamp
    assert_eq!(float_count, 54);
}

#[test]
fn test_unknown_column_errors() {
    let err = column_type("NotAColumn").unwrap_err();
    assert_eq!(err.name, "NotAColumn");
    assert_eq!(err.to_string(), "unknown column: 'NotAColumn'");

    // Lookup is case-sensitive
    assert!(column_type("abdarea").is_err());
    assert!(column_type("").is_err());
}

#[test]
fn test_enumeration_is_deterministic() {
    let first: Vec<(&str, ColumnType)> = columns().collect();
    let second: Vec<(&str, ColumnType)> = columns().collect();
    assert_eq!(first, second);
    assert_eq!(first.first().map(|(name, _)| *name), Some(columns::NAME));
    assert_eq!(
        first.last().map(|(name, _)| *name),
        Some(columns::LABEL_TRUE)
    );
}

#[test]
fn test_arrow_type_mapping() {
    assert_eq!(ColumnType::Float32.to_arrow(), DataType::Float32);
    assert_eq!(ColumnType::UInt64.to_arrow(), DataType::UInt64);
    assert_eq!(ColumnType::Utf8.to_arrow(), DataType::Utf8);
    assert_eq!(
        ColumnType::Timestamp.to_arrow(),
        DataType::Timestamp(TimeUnit::Nanosecond, None)
    );
}

#[test]
fn test_schema_creation() {
    let schema = create_particle_schema();
    assert_eq!(schema.fields().len(), COLUMN_COUNT);

    let abd_area = schema.field_with_name(columns::ABD_AREA).unwrap();
    assert_eq!(abd_area.data_type(), &DataType::Float32);

    let id = schema.field_with_name(columns::ID).unwrap();
    assert_eq!(id.data_type(), &DataType::UInt64);

    let date = schema.field_with_name(columns::DATE).unwrap();
    assert_eq!(
        date.data_type(),
        &DataType::Timestamp(TimeUnit::Nanosecond, None)
    );

    let label = schema.field_with_name(columns::LABEL_TRUE).unwrap();
    assert_eq!(label.data_type(), &DataType::Utf8);
}

#[test]
fn test_schema_metadata() {
    let schema = create_particle_schema();
    let metadata = schema.metadata();

    assert_eq!(
        metadata.get(KEY_FORMAT_VERSION),
        Some(&FLOWFRAME_FORMAT_VERSION.to_string())
    );
    assert!(metadata.contains_key(KEY_SCHEMA_DESCRIPTION));
}

#[test]
fn test_schema_arc() {
    let schema_arc = create_particle_schema_arc();
    assert_eq!(schema_arc.fields().len(), COLUMN_COUNT);
}

#[test]
fn test_column_type_display() {
    assert_eq!(ColumnType::Float32.to_string(), "float32");
    assert_eq!(ColumnType::UInt64.to_string(), "uint64");
    assert_eq!(ColumnType::Utf8.to_string(), "utf8");
    assert_eq!(ColumnType::Timestamp.to_string(), "timestamp");
}
