//! scalegen Scale Backend
//!
//! Builds the 11 × 21 note tables of every tuning in the catalog.
//!
//! # Overview
//!
//! Tunings are produced by one of three families of generators:
//!
//! - **Interval tiling** - a short ratio list repeated upward by an octave
//!   (or tritave) until the 21-note row is full
//! - **Pair spreads** - alternating steps of `a` and `b` fixed-size units
//! - **Closed forms** - shifted lists, harmonic series and equal-step ladders
//!
//! Every generator is a pure function of its parameters; building the
//! catalog twice yields identical tables.
//!
//! # Example
//!
//! ```
//! use scalegen_backend_scales::{build_tables, find};
//!
//! let table = find("bohlenpierce").unwrap().build().unwrap();
//! assert_eq!(table.frequency(0, 4), Some(32.7031956626 * 3.0));
//!
//! let all = build_tables(None).unwrap();
//! assert_eq!(all.len(), 21);
//! ```
//!
//! # Crate Structure
//!
//! - [`catalog`] - The built-in tunings, in emission order
//! - [`expand`] - Row expanders
//! - [`generator`] - Tuning definitions and table assembly

pub mod catalog;
pub mod expand;
pub mod generator;

pub use catalog::{build_tables, catalog, find, ids, select};
pub use expand::ExpandedRow;
pub use generator::{Generator, TuningDef};
