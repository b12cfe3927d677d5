//! BLAKE3 hashing for determinism checks.
//!
//! Hashes are 64-character lowercase hex strings. Table hashes cover the
//! exact bit patterns of every frequency, so two runs that agree here agree
//! bit for bit.

use crate::config::GeneratorConfig;
use crate::error::ScaleResult;
use crate::table::ScaleTable;

/// Hashes emitted output bytes.
pub fn output_hash(bytes: &[u8]) -> String {
    blake3::hash(bytes).to_hex().to_string()
}

/// Hashes a configuration in canonical form.
///
/// `serde_json` maps keep keys sorted, so serializing through a `Value`
/// yields the same text regardless of field order in the source file.
pub fn config_hash(config: &GeneratorConfig) -> ScaleResult<String> {
    let value = serde_json::to_value(config)?;
    let canonical = serde_json::to_string(&value)?;
    Ok(output_hash(canonical.as_bytes()))
}

/// Hashes a scale table: id, labels, frequency bit patterns, note names.
pub fn table_hash(table: &ScaleTable) -> String {
    let mut hasher = blake3::Hasher::new();
    hash_str(&mut hasher, &table.id);
    hash_str(&mut hasher, &table.name);
    hash_str(&mut hasher, &table.description);
    for name in &table.sub_scale_names {
        hash_str(&mut hasher, name);
    }
    for frequency in &table.frequencies {
        hasher.update(&frequency.to_bits().to_le_bytes());
    }
    for name in &table.note_names {
        hash_str(&mut hasher, name);
    }
    hasher.finalize().to_hex().to_string()
}

/// Hashes a sequence of coefficient rows by bit pattern.
pub fn rows_hash<'a>(rows: impl IntoIterator<Item = &'a [f64]>) -> String {
    let mut hasher = blake3::Hasher::new();
    for row in rows {
        hasher.update(&(row.len() as u64).to_le_bytes());
        for value in row {
            hasher.update(&value.to_bits().to_le_bytes());
        }
    }
    hasher.finalize().to_hex().to_string()
}

// Length-prefixed so adjacent strings cannot run together.
fn hash_str(hasher: &mut blake3::Hasher, s: &str) {
    hasher.update(&(s.len() as u64).to_le_bytes());
    hasher.update(s.as_bytes());
}
