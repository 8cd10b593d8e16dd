//! Summary numbers for a finished packing.

use crate::wagon::Wagon;
use serde::{Deserialize, Serialize};

/// Aggregate view of one packing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PackingStats {
    /// Animals loaded.
    pub animals: usize,
    /// Wagons in the train.
    pub wagons: usize,
    /// Wagons opened in relaxed mode.
    pub relaxed_wagons: usize,
    /// Sum of all animal weights.
    pub total_weight: u64,
    /// Capacity points left empty across all wagons.
    pub wasted_capacity: u64,
    /// Fewest wagons any packing could use, ignoring predation.
    pub lower_bound: usize,
    /// Capacity per wagon the numbers were computed against.
    pub wagon_capacity: u32,
}

impl PackingStats {
    pub fn from_wagons(wagons: &[Wagon], wagon_capacity: u32) -> Self {
        // u64 so sums over wagons of any valid capacity cannot overflow.
        let total_weight: u64 = wagons.iter().map(|w| u64::from(w.used_capacity())).sum();
        let lower_bound = if wagon_capacity == 0 {
            0
        } else {
            total_weight.div_ceil(u64::from(wagon_capacity)) as usize
        };

        Self {
            animals: wagons.iter().map(Wagon::len).sum(),
            wagons: wagons.len(),
            relaxed_wagons: wagons.iter().filter(|w| w.is_relaxed()).count(),
            total_weight,
            wasted_capacity: wagons
                .iter()
                .map(|w| u64::from(w.remaining_capacity(wagon_capacity)))
                .sum(),
            lower_bound,
            wagon_capacity,
        }
    }

    /// Share of the train's capacity that is occupied (0.0 for no wagons).
    pub fn fill_ratio(&self) -> f64 {
        let total = self.total_capacity();
        if total == 0 {
            return 0.0;
        }
        self.total_weight as f64 / total as f64
    }

    /// Capacity points across the whole train.
    pub fn total_capacity(&self) -> u64 {
        self.wagons as u64 * u64::from(self.wagon_capacity)
    }

    /// Wagons used beyond the capacity-only lower bound.
    pub fn excess_wagons(&self) -> usize {
        self.wagons.saturating_sub(self.lower_bound)
    }
}

impl std::fmt::Display for PackingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} animals in {} wagons ({} relaxed), {}/{} points used, lower bound {}",
            self.animals,
            self.wagons,
            self.relaxed_wagons,
            self.total_weight,
            self.total_capacity(),
            self.lower_bound
        )
    }
}
