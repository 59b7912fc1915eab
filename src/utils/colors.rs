/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Well-being score color: 1-3 red, 4-6 yellow, 7-10 green, no score grey.
pub fn color_for_score(score: Option<i64>) -> &'static str {
    match score {
        Some(s) if s >= 7 => GREEN,
        Some(s) if s >= 4 => YELLOW,
        Some(_) => RED,
        None => GREY,
    }
}

/// Correlation difference color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_difference(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}
