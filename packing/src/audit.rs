//! Invariant audit for a finished packing.
//!
//! Re-checks a train against its input batch: capacity, predation safety,
//! relaxed-wagon budget, and that every animal boarded exactly once. Works on
//! any wagon list, not just the packer's output, so hand-built or
//! deserialized trains can be verified too.

use crate::animal::Animal;
use crate::packer::PackerConfig;
use crate::safety::is_safe;
use crate::wagon::Wagon;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One broken invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    /// Wagon load exceeds capacity.
    OverCapacity {
        wagon: usize,
        used: u32,
        capacity: u32,
    },
    /// Occupant would not have been admitted by the animals boarded before it.
    UnsafeOccupant {
        wagon: usize,
        position: usize,
        animal: Animal,
    },
    /// More relaxed wagons than one run may open.
    RelaxedBudgetExceeded { relaxed: usize, max: u32 },
    /// Input animals that are not in any wagon.
    MissingAnimals { animal: Animal, count: usize },
    /// Wagon occupants that were not in the input (or appear too often).
    UnexpectedAnimals { animal: Animal, count: usize },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OverCapacity {
                wagon,
                used,
                capacity,
            } => write!(f, "wagon {} over capacity ({}/{})", wagon, used, capacity),
            Self::UnsafeOccupant {
                wagon,
                position,
                animal,
            } => write!(
                f,
                "wagon {} occupant {} ({}) is not predation-safe",
                wagon, position, animal
            ),
            Self::RelaxedBudgetExceeded { relaxed, max } => {
                write!(f, "{} relaxed wagons exceed budget of {}", relaxed, max)
            }
            Self::MissingAnimals { animal, count } => {
                write!(f, "{} x {} never boarded", count, animal)
            }
            Self::UnexpectedAnimals { animal, count } => {
                write!(f, "{} x {} boarded but not in input", count, animal)
            }
        }
    }
}

/// Result of auditing one train.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub wagons_checked: usize,
    pub violations: Vec<Violation>,
}

impl AuditReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Audit `wagons` as a packing of `input` under `config`.
///
/// Safety is replayed in insertion order: occupant `k` must be admissible to
/// a wagon of the same mode holding occupants `0..k`.
pub fn audit(input: &[Animal], wagons: &[Wagon], config: &PackerConfig) -> AuditReport {
    let mut violations = Vec::new();

    for (index, wagon) in wagons.iter().enumerate() {
        let used = wagon.used_capacity();
        if used > config.wagon_capacity {
            violations.push(Violation::OverCapacity {
                wagon: index,
                used,
                capacity: config.wagon_capacity,
            });
        }

        for (position, animal) in wagon.occupants().iter().enumerate() {
            if !is_safe(&wagon.prefix(position), animal) {
                violations.push(Violation::UnsafeOccupant {
                    wagon: index,
                    position,
                    animal: *animal,
                });
            }
        }
    }

    let relaxed = wagons.iter().filter(|w| w.is_relaxed()).count();
    if relaxed > config.max_relaxed as usize {
        violations.push(Violation::RelaxedBudgetExceeded {
            relaxed,
            max: config.max_relaxed,
        });
    }

    violations.extend(completeness(input, wagons));

    AuditReport {
        wagons_checked: wagons.len(),
        violations,
    }
}

/// Multiset difference between input and boarded animals, in first-seen
/// input order so reports are deterministic.
fn completeness(input: &[Animal], wagons: &[Wagon]) -> Vec<Violation> {
    let mut balance: HashMap<Animal, i64> = HashMap::new();
    let mut order: Vec<Animal> = Vec::new();

    let boarded = wagons.iter().flat_map(|w| w.occupants().iter());
    for (animal, delta) in input
        .iter()
        .map(|a| (a, 1))
        .chain(boarded.map(|a| (a, -1)))
    {
        let entry = balance.entry(*animal).or_insert_with(|| {
            order.push(*animal);
            0
        });
        *entry += delta;
    }

    order
        .into_iter()
        .filter_map(|animal| match balance[&animal] {
            0 => None,
            n if n > 0 => Some(Violation::MissingAnimals {
                animal,
                count: n as usize,
            }),
            n => Some(Violation::UnexpectedAnimals {
                animal,
                count: n.unsigned_abs() as usize,
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animal::Size::{Large, Medium, Small};
    use crate::packer::Packer;

    fn c(size: crate::animal::Size) -> Animal {
        Animal::carnivore(size)
    }

    fn h(size: crate::animal::Size) -> Animal {
        Animal::herbivore(size)
    }

    #[test]
    fn test_packer_output_is_clean() {
        let input = [c(Large), c(Medium), h(Large), h(Medium), h(Small)];
        let wagons = Packer::default().pack(&input);
        let report = audit(&input, &wagons, &PackerConfig::default());
        assert!(report.is_clean(), "{:?}", report.violations);
        assert_eq!(report.wagons_checked, wagons.len());
    }

    #[test]
    fn test_missing_animal_detected() {
        let input = [h(Large), h(Small)];
        let wagons = Packer::default().pack(&[h(Large)]);
        let report = audit(&input, &wagons, &PackerConfig::default());
        assert_eq!(
            report.violations,
            vec![Violation::MissingAnimals {
                animal: h(Small),
                count: 1
            }]
        );
    }

    #[test]
    fn test_unexpected_animal_detected() {
        let wagons = Packer::default().pack(&[h(Large), h(Large)]);
        let report = audit(&[h(Large)], &wagons, &PackerConfig::default());
        assert_eq!(
            report.violations,
            vec![Violation::UnexpectedAnimals {
                animal: h(Large),
                count: 1
            }]
        );
    }

    #[test]
    fn test_over_capacity_against_tighter_config() {
        let input = [h(Large), h(Large)];
        let wagons = Packer::default().pack(&input);
        let tight = PackerConfig {
            wagon_capacity: 8,
            max_relaxed: 4,
        };
        let report = audit(&input, &wagons, &tight);
        assert_eq!(
            report.violations,
            vec![Violation::OverCapacity {
                wagon: 0,
                used: 10,
                capacity: 8
            }]
        );
    }

    #[test]
    fn test_relaxed_budget_exceeded() {
        let wagons: Vec<Wagon> = (0..5)
            .map(|_| {
                let mut w = Wagon::relaxed();
                w.try_insert(c(Small), 10);
                w
            })
            .collect();
        let input = [c(Small); 5];
        let report = audit(&input, &wagons, &PackerConfig::default());
        assert_eq!(
            report.violations,
            vec![Violation::RelaxedBudgetExceeded { relaxed: 5, max: 4 }]
        );
    }

    #[test]
    fn test_relaxed_pair_checked_under_relaxed_rules() {
        let mut wagon = Wagon::relaxed();
        assert!(wagon.try_insert(c(Medium), 10));
        assert!(wagon.try_insert(h(Medium), 10));
        let report = audit(&[c(Medium), h(Medium)], &[wagon], &PackerConfig::default());
        assert!(report.is_clean());
    }

    #[test]
    fn test_unsafe_occupant_detected() {
        // A relaxed pair relabelled as a normal wagon breaks normal-mode safety.
        let forged = Wagon::unchecked(false, vec![c(Medium), h(Medium)]);

        let report = audit(&[c(Medium), h(Medium)], &[forged], &PackerConfig::default());
        assert_eq!(
            report.violations,
            vec![Violation::UnsafeOccupant {
                wagon: 0,
                position: 1,
                animal: h(Medium)
            }]
        );
        assert!(report.violations[0].to_string().contains("not predation-safe"));
    }

    #[test]
    fn test_overloaded_unsafe_wagon_reports_every_violation() {
        let input = [c(Large), h(Small), h(Large), h(Large)];
        let forged = Wagon::unchecked(false, input.to_vec());

        let report = audit(&input, &[forged], &PackerConfig::default());
        assert_eq!(
            report.violations[0],
            Violation::OverCapacity {
                wagon: 0,
                used: 16,
                capacity: 10
            }
        );
        let unsafe_positions: Vec<usize> = report
            .violations
            .iter()
            .filter_map(|v| match v {
                Violation::UnsafeOccupant { position, .. } => Some(*position),
                _ => None,
            })
            .collect();
        assert_eq!(unsafe_positions, vec![1, 2, 3]);
    }
}
