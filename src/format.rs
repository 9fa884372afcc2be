//! Byte count formatting.
//!
//! Converts a raw byte count into the string printed next to the path:
//! either `"<N>B"` or a value scaled by powers of 1024 with one decimal
//! place (`"1.5KB"`, `"10.0MB"`).

/// Unit ladder used by human-readable output, smallest first.
pub const UNITS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];

const STEP: f64 = 1024.0;

/// Format a byte count for display.
///
/// With `human == false` the count is printed verbatim followed by `B`.
/// Otherwise the value is divided by 1024 while it is at least 1024 and a
/// larger unit remains. Unscaled values are printed as integers; scaled
/// values always carry exactly one decimal digit.
///
/// # Examples
///
/// ```
/// # use path_size::format::format_size;
/// assert_eq!(format_size(1536, false), "1536B");
/// assert_eq!(format_size(1536, true), "1.5KB");
/// assert_eq!(format_size(999, true), "999B");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_size(bytes: u64, human: bool) -> String {
    if !human || bytes < 1024 {
        return format!("{bytes}B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= STEP && unit < UNITS.len() - 1 {
        value /= STEP;
        unit += 1;
    }

    format!("{value:.1}{}", UNITS[unit])
}
