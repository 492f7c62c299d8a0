//! The column schema table itself: a process-lifetime constant mapping from
//! column name to declared [`ColumnType`].
//!
//! Enumeration preserves the instrument export's declaration order; lookups
//! go through a `OnceLock`-backed index built on first use. Both are safe to
//! use from any number of threads without coordination.

use std::collections::HashMap;
use std::sync::OnceLock;

use super::column_type::ColumnType;
use super::columns as column_names;

/// Number of columns declared in the particle table schema.
pub const COLUMN_COUNT: usize = 80;

/// The schema table, in the export's declaration order.
pub(super) const COLUMN_TABLE: [(&str, ColumnType); COLUMN_COUNT] = [
    (column_names::NAME, ColumnType::Utf8),
    (column_names::ABD_AREA, ColumnType::Float32),
    (column_names::FILLED_AREA, ColumnType::Float32),
    (column_names::ASPECT_RATIO, ColumnType::Float32),
    (column_names::AVG_BLUE, ColumnType::Float32),
    (column_names::AVG_GREEN, ColumnType::Float32),
    (column_names::AVG_RED, ColumnType::Float32),
    (column_names::BIOVOLUME_CYLINDER, ColumnType::Float32),
    (column_names::BIOVOLUME_P_SPHEROID, ColumnType::Float32),
    (column_names::BIOVOLUME_SPHERE, ColumnType::Float32),
    (column_names::CAL_CONST, ColumnType::Float32),
    (column_names::CAL_IMAGE, ColumnType::UInt64),
    (column_names::CH1_AREA, ColumnType::Float32),
    (column_names::CH1_PEAK, ColumnType::Float32),
    (column_names::CH1_WIDTH, ColumnType::Float32),
    (column_names::CH2_AREA, ColumnType::Float32),
    (column_names::CH2_PEAK, ColumnType::Float32),
    (column_names::CH2_WIDTH, ColumnType::Float32),
    (column_names::CH2_CH1_RATIO, ColumnType::Float32),
    (column_names::CIRCLE_FIT, ColumnType::Float32),
    (column_names::CIRCULARITY, ColumnType::Float32),
    (column_names::CIRCULARITY_HU, ColumnType::Float32),
    (column_names::COLLAGE_FILE, ColumnType::Utf8),
    (column_names::COMPACTNESS, ColumnType::Float32),
    (column_names::CONVEX_PERIMETER, ColumnType::Float32),
    (column_names::CONVEXITY, ColumnType::Float32),
    (column_names::DATE, ColumnType::Timestamp),
    (column_names::ABD_DIAMETER, ColumnType::Float32),
    (column_names::ESD_DIAMETER, ColumnType::Float32),
    (column_names::FD_DIAMETER, ColumnType::Float32),
    (column_names::EDGE_GRADIENT, ColumnType::Float32),
    (column_names::ELAPSED_TIME, ColumnType::Float32),
    (column_names::ELONGATION, ColumnType::Float32),
    (column_names::FERET_MAX_ANGLE, ColumnType::Float32),
    (column_names::FERET_MIN_ANGLE, ColumnType::Float32),
    (column_names::FIBER_CURL, ColumnType::Float32),
    (column_names::FIBER_STRAIGHTNESS, ColumnType::Float32),
    (column_names::FILTER_SCORE, ColumnType::Float32),
    (column_names::GEODESIC_ASPECT_RATIO, ColumnType::Float32),
    (column_names::GEODESIC_LENGTH, ColumnType::Float32),
    (column_names::GEODESIC_THICKNESS, ColumnType::Float32),
    (column_names::GROUP_ID, ColumnType::UInt64),
    (column_names::ID, ColumnType::UInt64),
    (column_names::IMAGE_FILENAME, ColumnType::Utf8),
    (column_names::IMAGE_X, ColumnType::UInt64),
    (column_names::IMAGE_Y, ColumnType::UInt64),
    (column_names::IMAGE_H, ColumnType::UInt64),
    (column_names::IMAGE_W, ColumnType::UInt64),
    (column_names::INTENSITY, ColumnType::Float32),
    (column_names::LENGTH, ColumnType::Float32),
    (column_names::PPC, ColumnType::UInt64),
    (column_names::PERIMETER, ColumnType::Float32),
    (column_names::RATIO_BLUE_GREEN, ColumnType::Float32),
    (column_names::RATIO_RED_BLUE, ColumnType::Float32),
    (column_names::RATIO_RED_GREEN, ColumnType::Float32),
    (column_names::ROUGHNESS, ColumnType::Float32),
    (column_names::SIGMA_INTENSITY, ColumnType::Float32),
    (column_names::SRC_IMAGE, ColumnType::UInt64),
    (column_names::SRC_X, ColumnType::UInt64),
    (column_names::SRC_Y, ColumnType::UInt64),
    (column_names::SPHERE_COMPLEMENT, ColumnType::UInt64),
    (column_names::SPHERE_COUNT, ColumnType::UInt64),
    (column_names::SPHERE_UNKNOWN, ColumnType::UInt64),
    (column_names::SPHERE_VOLUME, ColumnType::Float32),
    (column_names::SUM_INTENSITY, ColumnType::UInt64),
    (column_names::SYMMETRY, ColumnType::Float32),
    (column_names::TIME, ColumnType::Timestamp),
    (column_names::TIMESTAMP, ColumnType::Timestamp),
    (column_names::TRANSPARENCY, ColumnType::Float32),
    (column_names::UUID, ColumnType::Utf8),
    (column_names::ABD_VOLUME, ColumnType::Float32),
    (column_names::ESD_VOLUME, ColumnType::Float32),
    (column_names::WIDTH, ColumnType::Float32),
    (column_names::BIOVOLUME_H_SOSIK, ColumnType::Float32),
    (column_names::SURFACE_AREA_H_SOSIK, ColumnType::Float32),
    (column_names::PREPROCESSING, ColumnType::Utf8),
    (column_names::PREPROCESSING_TRUE, ColumnType::Utf8),
    (column_names::PROBABILITY_SCORE, ColumnType::Float32),
    (column_names::LABEL_PREDICTED, ColumnType::Utf8),
    (column_names::LABEL_TRUE, ColumnType::Utf8),
];

static COLUMN_INDEX: OnceLock<HashMap<&'static str, ColumnType>> = OnceLock::new();

fn column_index() -> &'static HashMap<&'static str, ColumnType> {
    COLUMN_INDEX.get_or_init(|| {
        log::trace!("materializing column index ({COLUMN_COUNT} entries)");
        COLUMN_TABLE.iter().copied().collect()
    })
}

/// Returns the declared type of the named column.
///
/// # Example
///
/// ```
/// use flowframe::schema::{column_type, ColumnType};
///
/// assert_eq!(column_type("Circularity")?, ColumnType::Float32);
/// assert_eq!(column_type("Id")?, ColumnType::UInt64);
/// # Ok::<(), flowframe::schema::UnknownColumnError>(())
/// ```
///
/// # Errors
///
/// Returns [`UnknownColumnError`] when the name is not declared in the
/// schema. Names are case-sensitive.
pub fn column_type(name: &str) -> Result<ColumnType, UnknownColumnError> {
    column_index()
        .get(name)
        .copied()
        .ok_or_else(|| UnknownColumnError {
            name: name.to_string(),
        })
}

/// Enumerates every declared column as `(name, type)` pairs, in declaration
/// order.
///
/// The iterator is finite and restartable; repeated calls yield identical
/// output. Order has no semantic meaning - it is preserved for stable
/// round-tripping of instrument exports.
pub fn columns() -> impl Iterator<Item = (&'static str, ColumnType)> {
    COLUMN_TABLE.iter().copied()
}

/// A requested column name is not declared in the schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown column: '{name}'")]
pub struct UnknownColumnError {
    /// The name that was looked up
    pub name: String,
}
