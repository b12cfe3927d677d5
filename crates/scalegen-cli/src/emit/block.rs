//! Designated-initialiser blocks.

use std::io::{self, Write};

use scalegen_spec::format_table_value;

/// Escapes `"` and `\` for a C string literal.
pub fn escape_c_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Writes `\t.<field> = "<value>",`.
pub fn write_string_field<W: Write>(out: &mut W, field: &str, value: &str) -> io::Result<()> {
    writeln!(out, "\t.{} = \"{}\",", field, escape_c_string(value))
}

/// Writes a block of quoted strings.
///
/// The closing brace shares the line of the last entry:
///
/// ```text
/// 	.scalename = {
/// 		"a",
/// 		"b"},
/// ```
pub fn write_string_block<'a, W: Write>(
    out: &mut W,
    field: &str,
    values: impl IntoIterator<Item = &'a str>,
) -> io::Result<()> {
    writeln!(out, "\t.{} = {{", field)?;
    let mut values = values.into_iter().peekable();
    if values.peek().is_none() {
        return writeln!(out, "\t}},");
    }
    while let Some(value) = values.next() {
        let close = if values.peek().is_some() { "," } else { "}," };
        writeln!(out, "\t\t\"{}\"{}", escape_c_string(value), close)?;
    }
    Ok(())
}

/// Writes a block of numeric rows.
///
/// One-value rows are written bare, longer rows as `{ a, b, c }`. Every row
/// but the last carries a trailing comma; the block closes with `\t},`.
pub fn write_number_block<'a, W: Write>(
    out: &mut W,
    field: &str,
    rows: impl IntoIterator<Item = &'a [f64]>,
) -> io::Result<()> {
    writeln!(out, "\t.{} = {{", field)?;
    let mut rows = rows.into_iter().peekable();
    while let Some(row) = rows.next() {
        let comma = if rows.peek().is_some() { "," } else { "" };
        writeln!(out, "\t\t{}{}", render_row(row), comma)?;
    }
    writeln!(out, "\t}},")
}

fn render_row(row: &[f64]) -> String {
    match row {
        [value] => format_table_value(*value),
        _ => {
            let values: Vec<String> = row.iter().map(|v| format_table_value(*v)).collect();
            format!("{{ {} }}", values.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_c_string(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_c_string(r"a\b"), r"a\\b");
        assert_eq!(escape_c_string("7/4"), "7/4");
    }

    #[test]
    fn test_string_field() {
        let text = render(|out| write_string_field(out, "name", "Bohlen-Pierce"));
        assert_eq!(text, "\t.name = \"Bohlen-Pierce\",\n");
    }

    #[test]
    fn test_string_block() {
        let text = render(|out| write_string_block(out, "scalename", ["Lambda", "Moll 1"]));
        assert_eq!(
            text,
            "\t.scalename = {\n\t\t\"Lambda\",\n\t\t\"Moll 1\"},\n"
        );
    }

    #[test]
    fn test_empty_string_block() {
        let text = render(|out| write_string_block(out, "notedesc", std::iter::empty()));
        assert_eq!(text, "\t.notedesc = {\n\t},\n");
    }

    #[test]
    fn test_single_value_block() {
        let rows: [&[f64]; 3] = [&[0.5], &[1.0 / 3.0], &[440.0]];
        let text = render(|out| write_number_block(out, "frequency", rows));
        assert_eq!(
            text,
            "\t.frequency = {\n\t\t0.5,\n\t\t0.3333333333333333,\n\t\t440\n\t},\n"
        );
    }

    #[test]
    fn test_triple_block() {
        let rows: [&[f64]; 2] = [&[2.0, 0.25, -0.5], &[1.5, 0.125, -1.75]];
        let text = render(|out| write_number_block(out, "c_bpre48000_q2_g2", rows));
        assert_eq!(
            text,
            "\t.c_bpre48000_q2_g2 = {\n\t\t{ 2, 0.25, -0.5 },\n\t\t{ 1.5, 0.125, -1.75 }\n\t},\n"
        );
    }
}
