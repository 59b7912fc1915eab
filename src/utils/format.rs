use chrono::{DateTime, Local};
use textwrap::fill;

/// Display form of an engine average: always 2 fractional digits.
/// The value is already rounded by the engine; this only formats.
pub fn fmt2(value: f64) -> String {
    format!("{value:.2}")
}

/// Entry timestamp as shown in lists, local time.
pub fn fmt_timestamp(ts: &DateTime<Local>) -> String {
    ts.format("%Y-%m-%d %H:%M").to_string()
}

/// Medication labels joined for single-line display.
pub fn join_medications(meds: &[String]) -> String {
    meds.join(", ")
}

/// Notes wrapped and indented under the entry row.
pub fn wrap_notes(notes: &str, width: usize, indent: &str) -> String {
    fill(
        notes,
        textwrap::Options::new(width)
            .initial_indent(indent)
            .subsequent_indent(indent),
    )
}

/// Horizontal bar for the distribution chart, capped at `max_width` cells.
pub fn bar(count: usize, max_count: usize, max_width: usize) -> String {
    if max_count == 0 || count == 0 {
        return String::new();
    }
    let len = (count * max_width).div_ceil(max_count);
    "#".repeat(len.max(1))
}
