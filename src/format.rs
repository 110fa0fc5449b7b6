//! Human-readable byte counts for the document panel.

const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// Formats `bytes` with base-1024 units rounded to two decimals.
///
/// `1536` renders as `1.5 KB`, `0` as `0 B`. Anything past the gigabyte
/// range stays in `GB`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut unit = 0;
    let mut scale: u64 = 1;
    while unit + 1 < UNITS.len() && bytes >= scale * 1024 {
        scale *= 1024;
        unit += 1;
    }

    let value = bytes as f64 / scale as f64;
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod tests;
