//! C++ source emission.
//!
//! Renders each table as one `Scale <id> = { ... };` designated initialiser:
//! labels first, then the optional `.frequency` block, then one `.c_<filter>`
//! block per filter configuration in configuration order. Numbers are
//! written as `%.16g`.

mod block;

pub use block::escape_c_string;

use std::io::{self, Write};

use scalegen_backend_filter::CoefficientSet;
use scalegen_spec::{GeneratorConfig, ScaleTable, DEFAULT_HEADER};

use block::{write_number_block, write_string_block, write_string_field};

/// Writes tables as C++ source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEmitter {
    header: String,
    include_frequencies: bool,
}

impl Default for TableEmitter {
    fn default() -> Self {
        Self::new(DEFAULT_HEADER, true)
    }
}

impl TableEmitter {
    /// Creates an emitter.
    pub fn new(header: impl Into<String>, include_frequencies: bool) -> Self {
        Self {
            header: header.into(),
            include_frequencies,
        }
    }

    /// Creates an emitter from configuration.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(config.header.clone(), config.include_frequencies)
    }

    /// Writes the leading `#include` line.
    pub fn write_preamble<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "#include \"{}\"", escape_c_string(&self.header))
    }

    /// Writes one table with its coefficient sets.
    pub fn write_table<W: Write>(
        &self,
        out: &mut W,
        table: &ScaleTable,
        coefficients: &[CoefficientSet],
    ) -> io::Result<()> {
        writeln!(out, "Scale {} = {{", table.id)?;
        write_string_field(out, "name", &table.name)?;
        write_string_field(out, "description", &table.description)?;
        write_string_block(
            out,
            "scalename",
            table.sub_scale_names.iter().map(String::as_str),
        )?;
        write_string_block(out, "notedesc", table.note_names.iter().map(String::as_str))?;

        if self.include_frequencies {
            write_number_block(
                out,
                "frequency",
                table.frequencies.iter().map(std::slice::from_ref),
            )?;
        }

        for set in coefficients {
            write_number_block(out, &format!("c_{}", set.filter), set.row_slices())?;
        }

        writeln!(out, "}};")
    }
}
