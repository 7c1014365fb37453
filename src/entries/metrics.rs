// src/entries/metrics.rs
//! Diet adherence metrics

use super::models::DietMetrics;

/// Length of the longest contiguous run of `true` flags.
pub fn longest_streak<I>(flags: I) -> i64
where
    I: IntoIterator<Item = bool>,
{
    let mut current = 0;
    let mut best = 0;

    for in_diet in flags {
        current = if in_diet { current + 1 } else { 0 };
        best = best.max(current);
    }

    best
}

impl DietMetrics {
    /// `total_meals_out_diet` is always derived, never stored.
    pub fn new(total_meals: i64, total_meals_in_diet: i64, best: i64) -> Self {
        Self {
            total_meals,
            total_meals_in_diet,
            total_meals_out_diet: total_meals - total_meals_in_diet,
            best,
        }
    }

    /// Metrics over flags already in scan order.
    #[cfg(test)]
    pub fn from_flags(flags: &[bool]) -> Self {
        let total = flags.len() as i64;
        let in_diet = flags.iter().filter(|f| **f).count() as i64;
        Self::new(total, in_diet, longest_streak(flags.iter().copied()))
    }
}
