//! C-compatible `%g` number formatting.
//!
//! The emitted tables are read by a C++ toolchain and compared against
//! reference dumps, so numbers are rendered exactly the way `printf("%.Ng")`
//! renders them rather than with Rust's shortest round-trip `Display`.

/// Significant digits used for table values (`%.16g`).
pub const TABLE_PRECISION: usize = 16;

/// Significant digits of a bare `%g`.
pub const DEFAULT_PRECISION: usize = 6;

/// Formats `value` like C's `%.{precision}g`.
///
/// Picks fixed or scientific notation from the decimal exponent of the
/// rounded value, then strips trailing zeros and a trailing decimal point.
/// A precision of 0 is treated as 1.
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    let precision = precision.max(1);

    // Scientific rendering at P-1 fractional digits decides the exponent
    // after rounding, e.g. 9.9999996 at P=6 becomes 1.00000e1.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let mantissa = trim_fraction(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Formats a table value with 16 significant digits.
pub fn format_table_value(value: f64) -> String {
    format_general(value, TABLE_PRECISION)
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
