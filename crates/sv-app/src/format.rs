//! Human-readable sizes for the status line.

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// `512B`, `1.5KB`, `2MB`: binary steps, one decimal above bytes, no
/// trailing `.0`.
pub fn format_bytes(bytes: u64) -> String {
    let mut unit = 0;
    let mut n = bytes as f64;
    while n >= 1024.0 && unit < UNITS.len() - 1 {
        n /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{}{}", bytes, UNITS[0])
    } else {
        format!("{}{}", (n * 10.0).round() / 10.0, UNITS[unit])
    }
}
