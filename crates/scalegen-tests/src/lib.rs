//! scalegen End-to-End Test Infrastructure
//!
//! Integration tests for the full generation flow:
//!
//! - Catalog: every tuning builds and matches reference values
//! - Filters: ceiling fallback across the whole batch
//! - **Determinism**: byte-identical source text across runs
//! - CLI: command output written to disk
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p scalegen-tests
//! ```

pub mod determinism;
pub mod fixtures;

pub use determinism::{
    compute_hash, render_config, verify_determinism, verify_hash_determinism,
    DeterminismError, DeterminismFixture, DeterminismReport, DeterminismResult,
};
