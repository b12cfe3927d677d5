//! Determinism testing framework for scalegen.
//!
//! Every generation step is pure arithmetic, so re-running a batch with the
//! same configuration must give byte-identical source text. The tools here
//! run a generation function several times and report the first differing
//! byte.
//!
//! # Example
//!
//! ```rust,ignore
//! use scalegen_tests::determinism::{verify_determinism, DeterminismFixture};
//!
//! let result = verify_determinism(|| render(&config), 3);
//! assert!(result.is_deterministic);
//!
//! let report = DeterminismFixture::new()
//!     .add_config("default", GeneratorConfig::default())
//!     .runs(3)
//!     .run();
//! assert!(report.all_deterministic());
//! ```

use std::fmt;

use scalegen_cli::{render_with_hash, Batch};
use scalegen_spec::GeneratorConfig;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Size of the output in bytes.
    pub output_size: usize,
    /// BLAKE3 hash of the first run's output.
    pub hash: String,
    /// First difference, if any.
    pub diff_info: Option<DiffInfo>,
}

/// The first byte difference found between runs.
#[derive(Debug, Clone)]
pub struct DiffInfo {
    /// Byte offset of the difference.
    pub offset: usize,
    /// Value from the first run, 0 past its end.
    pub expected: u8,
    /// Value from the differing run, 0 past its end.
    pub actual: u8,
    /// Which run (0-indexed) differed.
    pub run_index: usize,
    /// Up to 8 bytes of the first run on either side.
    pub context: DiffContext,
}

/// Bytes around a difference.
#[derive(Debug, Clone)]
pub struct DiffContext {
    /// Bytes before the difference.
    pub before: Vec<u8>,
    /// Bytes after the difference.
    pub after: Vec<u8>,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at byte {}: expected 0x{:02X}, got 0x{:02X} (run {})",
            self.offset, self.expected, self.actual, self.run_index
        )?;
        if !self.context.before.is_empty() || !self.context.after.is_empty() {
            write!(
                f,
                "\n  Context: {}[{}]{}",
                String::from_utf8_lossy(&self.context.before),
                char::from(self.expected).escape_default(),
                String::from_utf8_lossy(&self.context.after)
            )?;
        }
        Ok(())
    }
}

impl DeterminismResult {
    /// A deterministic result.
    pub fn success(runs: usize, output_size: usize, hash: String) -> Self {
        Self {
            is_deterministic: true,
            runs,
            output_size,
            hash,
            diff_info: None,
        }
    }

    /// A non-deterministic result.
    pub fn failure(runs: usize, output_size: usize, hash: String, diff_info: DiffInfo) -> Self {
        Self {
            is_deterministic: false,
            runs,
            output_size,
            hash,
            diff_info: Some(diff_info),
        }
    }

    /// Panics with details if the runs differed.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Output size: {} bytes\n\
                 Hash: {}\n\
                 {}",
                self.runs, self.output_size, self.hash, diff
            );
        }
    }
}

/// Runs `generate_fn` `runs` times and compares every output to the first.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference_bytes = reference.as_ref();
    let reference_hash = compute_hash(reference_bytes);

    for run_index in 1..runs {
        let output = generate_fn();
        if let Some(diff) = find_first_difference(reference_bytes, output.as_ref(), run_index) {
            return DeterminismResult::failure(runs, reference_bytes.len(), reference_hash, diff);
        }
    }

    DeterminismResult::success(runs, reference_bytes.len(), reference_hash)
}

/// First differing byte, including a length mismatch.
fn find_first_difference(expected: &[u8], actual: &[u8], run_index: usize) -> Option<DiffInfo> {
    let offset = expected
        .iter()
        .zip(actual)
        .position(|(e, a)| e != a)
        .or_else(|| (expected.len() != actual.len()).then_some(expected.len().min(actual.len())))?;

    Some(DiffInfo {
        offset,
        expected: expected.get(offset).copied().unwrap_or(0),
        actual: actual.get(offset).copied().unwrap_or(0),
        run_index,
        context: extract_context(expected, offset),
    })
}

fn extract_context(data: &[u8], offset: usize) -> DiffContext {
    let before_start = offset.saturating_sub(8).min(data.len());
    let before_end = offset.min(data.len());
    let after_start = (offset + 1).min(data.len());
    let after_end = (offset + 9).min(data.len());

    DiffContext {
        before: data[before_start..before_end].to_vec(),
        after: data[after_start..after_end].to_vec(),
    }
}

/// True when all hashes match.
pub fn verify_hash_determinism(hashes: &[String]) -> bool {
    hashes.windows(2).all(|pair| pair[0] == pair[1])
}

/// BLAKE3 hash of data.
pub fn compute_hash(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Renders the batch for `config`, panicking on failure.
pub fn render_config(config: &GeneratorConfig) -> String {
    let batch = Batch::run(config).expect("batch should generate");
    render_with_hash(&batch).expect("batch should render").0
}

/// Runs determinism checks over several named configurations.
#[derive(Debug, Clone)]
pub struct DeterminismFixture {
    /// Named configurations to test.
    pub configs: Vec<(String, GeneratorConfig)>,
    /// Number of runs per configuration.
    pub runs: usize,
}

impl Default for DeterminismFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl DeterminismFixture {
    /// An empty fixture with 3 runs per configuration.
    pub fn new() -> Self {
        Self {
            configs: Vec::new(),
            runs: 3,
        }
    }

    /// Adds a configuration.
    pub fn add_config(mut self, label: impl Into<String>, config: GeneratorConfig) -> Self {
        self.configs.push((label.into(), config));
        self
    }

    /// Sets the number of runs per configuration.
    pub fn runs(mut self, runs: usize) -> Self {
        assert!(runs >= 2, "Must run at least 2 times");
        self.runs = runs;
        self
    }

    /// Runs every configuration.
    pub fn run(&self) -> DeterminismReport {
        let entries = self
            .configs
            .iter()
            .map(|(label, config)| DeterminismReportEntry {
                label: label.clone(),
                result: Batch::run(config)
                    .map_err(|e| DeterminismError::Generation(format!("{:#}", e)))
                    .map(|_| verify_determinism(|| render_config(config), self.runs)),
            })
            .collect();
        DeterminismReport { entries }
    }
}

/// Why a configuration could not be checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeterminismError {
    /// The batch failed to generate.
    Generation(String),
}

impl fmt::Display for DeterminismError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeterminismError::Generation(msg) => write!(f, "Generation failed: {}", msg),
        }
    }
}

/// Result for one configuration.
#[derive(Debug, Clone)]
pub struct DeterminismReportEntry {
    /// Configuration label.
    pub label: String,
    /// Verification result or the reason it could not run.
    pub result: Result<DeterminismResult, DeterminismError>,
}

/// Results for every configuration of a fixture.
#[derive(Debug, Clone, Default)]
pub struct DeterminismReport {
    /// One entry per configuration, in fixture order.
    pub entries: Vec<DeterminismReportEntry>,
}

impl DeterminismReport {
    /// True when every configuration generated and was deterministic.
    pub fn all_deterministic(&self) -> bool {
        self.entries
            .iter()
            .all(|e| matches!(&e.result, Ok(r) if r.is_deterministic))
    }
}

impl fmt::Display for DeterminismReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            match &entry.result {
                Ok(r) if r.is_deterministic => {
                    writeln!(f, "[PASS] {} ({} bytes, {})", entry.label, r.output_size, r.hash)?
                }
                Ok(r) => match &r.diff_info {
                    Some(diff) => writeln!(f, "[FAIL] {}: {}", entry.label, diff)?,
                    None => writeln!(f, "[FAIL] {}", entry.label)?,
                },
                Err(e) => writeln!(f, "[ERROR] {}: {}", entry.label, e)?,
            }
        }
        Ok(())
    }
}

/// Generates a test asserting that an expression yields identical bytes
/// on repeated evaluation.
///
/// ```rust,ignore
/// test_determinism!(default_batch, render_config(&GeneratorConfig::default()));
/// test_determinism!(gamma_only, runs = 5, render_config(&gamma_config()));
/// ```
#[macro_export]
macro_rules! test_determinism {
    ($name:ident, runs = $runs:expr, $generate:expr) => {
        #[test]
        fn $name() {
            $crate::determinism::verify_determinism(|| $generate, $runs).assert_deterministic();
        }
    };

    ($name:ident, $generate:expr) => {
        $crate::test_determinism!($name, runs = 3, $generate);
    };
}
