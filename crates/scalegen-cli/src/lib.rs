//! scalegen CLI library.
//!
//! Batch assembly, C++ source emission, and the command implementations
//! behind the `scalegen` binary.

pub mod batch;
pub mod commands;
pub mod emit;

pub use batch::{render_with_hash, Batch, TableOutput};
pub use emit::TableEmitter;
