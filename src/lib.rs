//! # flowframe - Particle Table Schema for Imaging Flow Cytometry
//!
//! `flowframe` defines the canonical column schema for particle measurement
//! tables produced by imaging flow-cytometry instruments (FlowCam-style
//! collage exports, optionally enriched with classification columns).
//!
//! The crate is a passive lookup table: it declares which columns a particle
//! table contains and what scalar type each column carries. It performs no
//! parsing, validation, or coercion - downstream readers consult the schema
//! and apply their own policy.
//!
//! ## The Schema Table
//!
//! Exactly 80 columns are declared, each with one of four scalar type tags:
//!
//! | Type tag | Columns (examples) |
//! |----------|--------------------|
//! | Float32 | AbdArea, AspectRatio, Circularity, Length, Perimeter, ... |
//! | UInt64 | CalImage, GroupId, Id, ImageX, ImageY, Ppc, SrcImage, SumIntensity, ... |
//! | Utf8 | Name, CollageFile, ImageFilename, Uuid, Preprocessing, LabelPredicted, LabelTrue, ... |
//! | Timestamp | Date, Time, Timestamp |
//!
//! The table is a compile-time constant; the lookup index over it is built
//! once on first use. Neither is ever mutated, and both are safe to consult
//! from any number of threads without coordination.
//! Enumeration order is the declaration order of the instrument export and
//! carries no semantic meaning - lookup is by name.
//!
//! ## Quick Start
//!
//! ```
//! use flowframe::schema::{column_type, columns, ColumnType, COLUMN_COUNT};
//!
//! // Look up a single column's declared type
//! let ty = column_type("AbdDiameter")?;
//! assert_eq!(ty, ColumnType::Float32);
//!
//! // Enumerate every declared column in order
//! assert_eq!(columns().count(), COLUMN_COUNT);
//!
//! // Unknown names surface as errors for the caller to handle
//! assert!(column_type("NotAColumn").is_err());
//! # Ok::<(), flowframe::schema::UnknownColumnError>(())
//! ```
//!
//! ## Arrow Interop
//!
//! Tabular readers usually want the schema in Arrow form:
//!
//! ```
//! use flowframe::schema::create_particle_schema;
//!
//! let schema = create_particle_schema();
//! assert_eq!(schema.fields().len(), 80);
//! ```
//!
//! ## Architecture
//!
//! - [`schema`]: the column table, type tags, and Arrow schema builders

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod schema;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::schema::{
        column_type, columns, create_particle_schema, create_particle_schema_arc, ColumnType,
        UnknownColumnError, COLUMN_COUNT, FLOWFRAME_FORMAT_VERSION,
    };
}
