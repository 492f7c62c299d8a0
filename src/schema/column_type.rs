use std::fmt;

use arrow::datatypes::{DataType, TimeUnit};
use serde::{Deserialize, Serialize};

/// Declared scalar type of a particle table column.
///
/// The schema uses exactly four kinds: measurements are `Float32`,
/// identifiers and pixel coordinates are `UInt64`, names and file references
/// are `Utf8`, and the acquisition clock columns are `Timestamp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// 32-bit floating point measurement
    Float32,
    /// 64-bit unsigned integer identifier or pixel coordinate
    // snake_case would split this into "u_int64"; the tag vocabulary is "uint64"
    #[serde(rename = "uint64")]
    UInt64,
    /// UTF-8 string
    Utf8,
    /// Nanosecond-precision timestamp without timezone
    Timestamp,
}

impl ColumnType {
    /// Returns the Arrow [`DataType`] this tag maps onto.
    ///
    /// Timestamps map to nanosecond precision without a timezone, matching
    /// the instrument export's datetime declarations.
    pub fn to_arrow(self) -> DataType {
        match self {
            ColumnType::Float32 => DataType::Float32,
            ColumnType::UInt64 => DataType::UInt64,
            ColumnType::Utf8 => DataType::Utf8,
            ColumnType::Timestamp => DataType::Timestamp(TimeUnit::Nanosecond, None),
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Float32 => "float32",
            ColumnType::UInt64 => "uint64",
            ColumnType::Utf8 => "utf8",
            ColumnType::Timestamp => "timestamp",
        };
        f.write_str(name)
    }
}
