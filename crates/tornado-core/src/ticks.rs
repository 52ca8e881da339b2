// File: crates/tornado-core/src/ticks.rs
// Summary: Tick position and numeric label formatting helpers.

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Format a quantity with thousands separators, keeping one decimal only for
/// non-integral values: `12345.0 -> "12,345"`, `1234.56 -> "1,234.6"`.
pub fn format_quantity(v: f64) -> String {
    let s = format!("{v:.1}");
    if s == "0.0" || s == "-0.0" {
        return "0".to_string();
    }
    let (mantissa, frac) = match s.split_once('.') {
        Some(parts) => parts,
        None => (s.as_str(), "0"),
    };
    let grouped = group_thousands(mantissa);
    if frac == "0" {
        grouped
    } else {
        format!("{grouped}.{frac}")
    }
}

fn group_thousands(mantissa: &str) -> String {
    let (sign, digits) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    format!("{sign}{out}")
}
