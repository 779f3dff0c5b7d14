// ==============================================================================
// format.rs - Float Rendering
// ==============================================================================
// Description: Shortest round-trip float text matching Python's repr(float)
// Author: Matt Barham
// Created: 2026-10-18
// Modified: 2026-10-18
// Version: 1.0.0
// ==============================================================================
// Rules (decimal exponent = exponent of the shortest scientific form):
//   -4 <= exponent < 16  → positional, always with a fractional part (1.0, 0.001)
//   otherwise            → mantissa + 'e' + sign + at least two digits (1e-05)
//   non-finite           → inf, -inf, nan
// ==============================================================================

/// Render a float the way downstream cojo files have always carried P values
///
/// # Examples
/// ```
/// use gwas_prep::format::format_float;
///
/// assert_eq!(format_float(0.001), "0.001");
/// assert_eq!(format_float(1e-5), "1e-05");
/// assert_eq!(format_float(1.0), "1.0");
/// assert_eq!(format_float(2.5e-300), "2.5e-300");
/// ```
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => match e.parse::<i32>() {
            Ok(exp) => (m, exp),
            Err(_) => return scientific,
        },
        None => return scientific,
    };

    if (-4..16).contains(&exponent) {
        let positional = value.to_string();
        if positional.contains('.') {
            positional
        } else {
            format!("{}.0", positional)
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}
