//! The 11 × 21 scale table and its grid container.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ScaleError, ScaleResult};

/// Number of sub-scales in every tuning.
pub const NUM_SUB_SCALES: usize = 11;

/// Number of notes in every sub-scale.
pub const NOTES_PER_SUB_SCALE: usize = 21;

/// Total number of entries in a table.
pub const TABLE_LEN: usize = NUM_SUB_SCALES * NOTES_PER_SUB_SCALE;

/// Fixed-shape grid of `NUM_SUB_SCALES` rows by `NOTES_PER_SUB_SCALE` columns.
///
/// Storage is row-major, so flat iteration visits entries in the order the
/// firmware expects: sub-scale by sub-scale, note by note. Serialized as a
/// flat array; deserializing rejects anything but `TABLE_LEN` entries.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleGrid<T> {
    cells: Vec<T>,
}

impl<T> ScaleGrid<T> {
    /// Builds a grid by evaluating `f(sub_scale, note)` for every cell.
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(TABLE_LEN);
        for sub_scale in 0..NUM_SUB_SCALES {
            for note in 0..NOTES_PER_SUB_SCALE {
                cells.push(f(sub_scale, note));
            }
        }
        Self { cells }
    }

    /// Builds a grid from exactly `NUM_SUB_SCALES` rows of exactly
    /// `NOTES_PER_SUB_SCALE` entries.
    pub fn try_from_rows(tuning: &str, rows: Vec<Vec<T>>) -> ScaleResult<Self> {
        if rows.len() != NUM_SUB_SCALES {
            return Err(ScaleError::WrongCount {
                tuning: tuning.to_string(),
                what: "sub-scale rows",
                expected: NUM_SUB_SCALES,
                found: rows.len(),
            });
        }
        let mut cells = Vec::with_capacity(TABLE_LEN);
        for row in rows {
            if row.len() != NOTES_PER_SUB_SCALE {
                return Err(ScaleError::WrongCount {
                    tuning: tuning.to_string(),
                    what: "notes in a sub-scale",
                    expected: NOTES_PER_SUB_SCALE,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self { cells })
    }

    /// Entry at `(sub_scale, note)`, or `None` when out of range.
    pub fn get(&self, sub_scale: usize, note: usize) -> Option<&T> {
        if sub_scale >= NUM_SUB_SCALES || note >= NOTES_PER_SUB_SCALE {
            return None;
        }
        self.cells.get(sub_scale * NOTES_PER_SUB_SCALE + note)
    }

    /// One sub-scale as a slice of `NOTES_PER_SUB_SCALE` entries.
    ///
    /// # Panics
    ///
    /// Panics if `sub_scale >= NUM_SUB_SCALES`.
    pub fn row(&self, sub_scale: usize) -> &[T] {
        let start = sub_scale * NOTES_PER_SUB_SCALE;
        &self.cells[start..start + NOTES_PER_SUB_SCALE]
    }

    /// Iterates over the sub-scales in order.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(NOTES_PER_SUB_SCALE)
    }

    /// One note position across all sub-scales.
    pub fn column(&self, note: usize) -> impl Iterator<Item = &T> {
        self.cells.iter().skip(note).step_by(NOTES_PER_SUB_SCALE)
    }

    /// Row-major flat iteration.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Row-major flat view.
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Number of cells (always `TABLE_LEN`).
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<T> TryFrom<Vec<T>> for ScaleGrid<T> {
    type Error = ScaleError;

    fn try_from(cells: Vec<T>) -> ScaleResult<Self> {
        if cells.len() != TABLE_LEN {
            return Err(ScaleError::WrongCount {
                tuning: String::new(),
                what: "grid cells",
                expected: TABLE_LEN,
                found: cells.len(),
            });
        }
        Ok(Self { cells })
    }
}

impl<T: Serialize> Serialize for ScaleGrid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.cells.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ScaleGrid<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let cells = Vec::<T>::deserialize(deserializer)?;
        Self::try_from(cells).map_err(serde::de::Error::custom)
    }
}

impl<'a, T> IntoIterator for &'a ScaleGrid<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// One tuning system: 11 named sub-scales of 21 notes each.
///
/// Immutable once built. Deserializing goes through [`ScaleTable::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScaleTable")]
pub struct ScaleTable {
    /// Identifier used as the emitted symbol name.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: String,
    /// Labels of the sub-scales.
    pub sub_scale_names: Vec<String>,
    /// Note frequencies in Hz.
    pub frequencies: ScaleGrid<f64>,
    /// Note labels, parallel to `frequencies`.
    pub note_names: ScaleGrid<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScaleTable {
    id: String,
    name: String,
    description: String,
    sub_scale_names: Vec<String>,
    frequencies: ScaleGrid<f64>,
    note_names: ScaleGrid<String>,
}

impl TryFrom<RawScaleTable> for ScaleTable {
    type Error = ScaleError;

    fn try_from(raw: RawScaleTable) -> ScaleResult<Self> {
        ScaleTable::new(
            raw.id,
            raw.name,
            raw.description,
            raw.sub_scale_names,
            raw.frequencies,
            raw.note_names,
        )
    }
}

impl ScaleTable {
    /// Assembles a table, checking the sub-scale label count and that every
    /// frequency is positive and finite.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        sub_scale_names: Vec<String>,
        frequencies: ScaleGrid<f64>,
        note_names: ScaleGrid<String>,
    ) -> ScaleResult<Self> {
        let id = id.into();

        if sub_scale_names.len() != NUM_SUB_SCALES {
            return Err(ScaleError::WrongCount {
                tuning: id,
                what: "sub-scale names",
                expected: NUM_SUB_SCALES,
                found: sub_scale_names.len(),
            });
        }

        for (sub_scale, row) in frequencies.rows().enumerate() {
            for (note, &value) in row.iter().enumerate() {
                if !(value.is_finite() && value > 0.0) {
                    return Err(ScaleError::InvalidFrequency {
                        tuning: id,
                        sub_scale,
                        note,
                        value,
                    });
                }
            }
        }

        Ok(Self {
            id,
            name: name.into(),
            description: description.into(),
            sub_scale_names,
            frequencies,
            note_names,
        })
    }

    /// Frequency at `(sub_scale, note)`.
    pub fn frequency(&self, sub_scale: usize, note: usize) -> Option<f64> {
        self.frequencies.get(sub_scale, note).copied()
    }

    /// Note label at `(sub_scale, note)`.
    pub fn note_name(&self, sub_scale: usize, note: usize) -> Option<&str> {
        self.note_names.get(sub_scale, note).map(String::as_str)
    }
}
