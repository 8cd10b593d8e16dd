//! Wagons: ordered occupants plus a mode fixed at creation.

use crate::animal::Animal;
use crate::error::RebuildError;
use crate::safety::is_safe;
use serde::Serialize;

/// One transport wagon.
///
/// Occupants can only be added through [`Wagon::try_insert`], which runs the
/// capacity check and the safety predicate, so a wagon never holds an unsafe
/// or overweight load. The relaxed flag has no setter. There is no
/// `Deserialize`: stored trains come back through [`Wagon::rebuild`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Wagon {
    occupants: Vec<Animal>,
    relaxed: bool,
}

impl Wagon {
    /// Empty wagon in normal mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty wagon in relaxed mode (small/medium pairing exception).
    pub fn relaxed() -> Self {
        Self {
            occupants: Vec::new(),
            relaxed: true,
        }
    }

    /// Occupants in insertion order.
    pub fn occupants(&self) -> &[Animal] {
        &self.occupants
    }

    pub fn is_relaxed(&self) -> bool {
        self.relaxed
    }

    pub fn len(&self) -> usize {
        self.occupants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    /// Sum of occupant weights.
    pub fn used_capacity(&self) -> u32 {
        self.occupants.iter().map(Animal::weight).sum()
    }

    pub fn remaining_capacity(&self, capacity: u32) -> u32 {
        capacity.saturating_sub(self.used_capacity())
    }

    /// Capacity check only.
    pub fn fits(&self, candidate: &Animal, capacity: u32) -> bool {
        u64::from(self.used_capacity()) + u64::from(candidate.weight()) <= u64::from(capacity)
    }

    /// Whether `candidate` may board: fits and is safe with the current load.
    pub fn accepts(&self, candidate: &Animal, capacity: u32) -> bool {
        self.fits(candidate, capacity) && is_safe(self, candidate)
    }

    /// Board `candidate` if the wagon accepts it. Returns whether it boarded;
    /// a rejected candidate leaves the wagon untouched.
    pub fn try_insert(&mut self, candidate: Animal, capacity: u32) -> bool {
        if !self.accepts(&candidate, capacity) {
            return false;
        }
        self.occupants.push(candidate);
        true
    }

    /// Rebuild a stored wagon by boarding `occupants` in order. Fails on the
    /// first animal the wagon would have refused.
    pub fn rebuild(
        relaxed: bool,
        occupants: impl IntoIterator<Item = Animal>,
        capacity: u32,
    ) -> Result<Self, RebuildError> {
        let mut wagon = if relaxed { Self::relaxed() } else { Self::new() };
        for (position, animal) in occupants.into_iter().enumerate() {
            if !wagon.fits(&animal, capacity) {
                return Err(RebuildError::OverCapacity {
                    position,
                    animal,
                    capacity,
                });
            }
            if !wagon.try_insert(animal, capacity) {
                return Err(RebuildError::Unsafe { position, animal });
            }
        }
        Ok(wagon)
    }

    /// Wagon that skips every check, for exercising the audit.
    #[cfg(test)]
    pub(crate) fn unchecked(relaxed: bool, occupants: Vec<Animal>) -> Self {
        Self {
            occupants,
            relaxed,
        }
    }

    /// Wagon with the same mode holding only the first `count` occupants.
    pub(crate) fn prefix(&self, count: usize) -> Self {
        Self {
            occupants: self.occupants[..count.min(self.occupants.len())].to_vec(),
            relaxed: self.relaxed,
        }
    }
}
