//! Predation safety predicate.
//!
//! Decides whether a candidate may join a wagon given its current occupants
//! and mode. Evaluated fresh on every call: wagon contents change between
//! calls within a run.

use crate::animal::{Animal, Diet};
use crate::wagon::Wagon;

/// Whether `candidate` can join `wagon` without predation.
///
/// Normal mode: a carnivore only boards if every occupant is strictly heavier
/// than it; a herbivore only boards if every carnivore aboard is strictly
/// lighter than it.
///
/// Relaxed mode applies to small and medium candidates only and allows at
/// most a pair: the second animal boards if the first is small or medium
/// (carnivore candidate) or a small/medium carnivore (herbivore candidate).
/// Large candidates in a relaxed wagon fall back to the normal rules.
pub fn is_safe(wagon: &Wagon, candidate: &Animal) -> bool {
    let occupants = wagon.occupants();
    let relaxed_pairing = wagon.is_relaxed() && candidate.size.is_small_or_medium();

    match candidate.diet {
        Diet::Carnivore => {
            if relaxed_pairing {
                return match occupants {
                    [] => true,
                    [only] => only.size.is_small_or_medium(),
                    _ => false,
                };
            }
            occupants.iter().all(|o| o.weight() > candidate.weight())
        }
        Diet::Herbivore => {
            if !occupants.iter().any(Animal::is_carnivore) {
                return true;
            }
            if relaxed_pairing {
                return occupants.len() < 2
                    && occupants
                        .iter()
                        .all(|o| o.is_carnivore() && o.size.is_small_or_medium());
            }
            occupants
                .iter()
                .filter(|o| o.is_carnivore())
                .all(|o| o.weight() < candidate.weight())
        }
    }
}
