//! The analytics engine: pure, stateless transformations over an entry
//! snapshot. No I/O, no mutation of the input, total on every input shape —
//! malformed records are defaulted, never rejected. Callers may invoke these
//! repeatedly on the same snapshot and get identical results.

pub mod average;
pub mod correlation;
pub mod distribution;
pub mod frequency;
pub mod trend;

pub use average::{average_wellbeing, round2};
pub use correlation::{
    Interpretation, MedicationCorrelation, medication_correlation, ranked_correlations,
};
pub use distribution::wellbeing_distribution;
pub use frequency::{medication_frequency, unique_medications};
pub use trend::{TrendPoint, wellbeing_trend, wellbeing_trend_at};

/// Minimum number of "with" samples before a correlation is worth ranking.
pub const MIN_CORRELATION_SAMPLES: usize = 2;
