/// Compact display form of a counter: `500`, `1.2K`, `1.5M`.
///
/// Values of a million or more are shown in millions and values of a thousand or more in
/// thousands, both with exactly one fractional digit rounded to nearest. A value never moves up
/// a suffix through rounding, so `999_950` reads `1000.0K`.
pub fn format_count(n: u64) -> String {
    if n >= 1_000_000 {
        return format!("{:.1}M", n as f64 / 1_000_000.0);
    }
    if n >= 1_000 {
        return format!("{:.1}K", n as f64 / 1_000.0);
    }
    n.to_string()
}

#[cfg(test)]
#[path = "../../tests/unit/stats/format.rs"]
mod tests;
