//! # Particle Table Schema Definition
//!
//! This module defines the canonical column schema for imaging flow-cytometry
//! particle tables.
//!
//! ## Design Rationale
//!
//! Instrument exports are wide tables with one row per detected particle and
//! a fixed set of measurement columns (morphology, optical channels, volume
//! estimates) plus bookkeeping and classification columns. The schema is
//! represented as a compile-time constant table of `(name, ColumnType)`
//! pairs, preserving the export's declaration order for enumeration while a
//! lazily built index serves name lookups.
//!
//! The four type tags mirror the source instrument's dtype declarations:
//! `Float32` for measurements, `UInt64` for identifiers and pixel
//! coordinates, `Utf8` for names and file references, and `Timestamp` for
//! the acquisition clock columns (Date, Time, Timestamp).

mod builders;
mod column_type;
/// Column name constants for the particle table.
pub mod columns;
mod constants;
mod table;

#[cfg(test)]
mod tests;

pub use builders::{create_particle_schema, create_particle_schema_arc};
pub use column_type::ColumnType;
pub use columns::*;
pub use constants::*;
pub use table::{column_type, columns, UnknownColumnError, COLUMN_COUNT};
