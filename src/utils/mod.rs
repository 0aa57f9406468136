pub mod date;

/// Presentation-time rounding to two decimals. Accumulation always stays at
/// full precision; rounding earlier would compound the error across weeks.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
