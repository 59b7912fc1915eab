use crate::models::Entry;

/// Round half-up to 2 decimal places. All engine outputs carrying an average
/// go through this before they leave the module; display code then formats
/// with `{:.2}` and must not round again.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Arithmetic mean of the well-being scores, rounded to 2 decimals.
///
/// Missing and out-of-range scores count as 0 (see `Entry::score`). The
/// empty snapshot yields exactly `0.0` — a sentinel, not a derived average.
///
/// Takes any iterator of entry refs so callers holding a partition
/// (`Vec<&Entry>`) do not have to clone.
pub fn average_wellbeing<'a, I>(entries: I) -> f64
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut sum: i64 = 0;
    let mut count: usize = 0;
    for entry in entries {
        sum += entry.score_or_zero();
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    round2(sum as f64 / count as f64)
}
