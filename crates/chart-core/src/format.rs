// File: crates/chart-core/src/format.rs
// Summary: Display formatting for axis labels and the focused-sample readout.

use chrono::NaiveDateTime;

/// Axis label with magnitude suffix: `1.2B`, `85M`, `950K`, `42`.
///
/// Billions keep one decimal; everything else is rounded to an integer.
pub fn compact_value(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.1}B", clean_zero((value / 1_000_000_000.0 * 10.0).round() / 10.0))
    } else if abs >= 1_000_000.0 {
        format!("{:.0}M", clean_zero((value / 1_000_000.0).round()))
    } else if abs >= 1_000.0 {
        format!("{:.0}K", clean_zero((value / 1_000.0).round()))
    } else {
        format!("{:.0}", clean_zero(value.round()))
    }
}

/// Rupiah amount the way the id-ID locale prints it: `Rp 85.200.501`.
pub fn currency_idr(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}Rp {}", group_thousands(&digits, '.'))
}

fn group_thousands(digits: &str, sep: char) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    out
}

// Avoid printing "-0" for values that round to zero.
fn clean_zero(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { v }
}

/// `"3 Feb 2024"`, shown next to the readout amount.
pub fn readout_date(ts: NaiveDateTime) -> String {
    ts.format("%-d %b %Y").to_string()
}

/// Raw value kept alongside its display strings so nothing is parsed back from text.
#[derive(Clone, Debug, PartialEq)]
pub struct Readout {
    pub value: f64,
    pub label: String,
    pub date_label: String,
}

impl Readout {
    pub fn new(ts: NaiveDateTime, value: f64) -> Self {
        Self { value, label: currency_idr(value), date_label: readout_date(ts) }
    }
}
