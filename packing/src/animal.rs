//! Animal domain types and the weight function.
//!
//! Diet and size are closed enums so every `match` over them is exhaustive;
//! adding a size or diet forces the weight function and the safety predicate
//! to be revisited.

use crate::error::AnimalError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What an animal eats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Diet {
    /// Eats other animals of equal or lesser weight.
    Carnivore,
    /// Never eats anyone.
    Herbivore,
}

impl FromStr for Diet {
    type Err = AnimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "carnivore" => Ok(Self::Carnivore),
            "herbivore" => Ok(Self::Herbivore),
            _ => Err(AnimalError::UnknownDiet {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Diet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Carnivore => write!(f, "carnivore"),
            Self::Herbivore => write!(f, "herbivore"),
        }
    }
}

/// Size class of an animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    /// Capacity points this size occupies in a wagon.
    pub const fn weight(self) -> u32 {
        match self {
            Self::Small => 1,
            Self::Medium => 3,
            Self::Large => 5,
        }
    }

    /// Small and medium animals are the only ones eligible for relaxed wagons.
    pub const fn is_small_or_medium(self) -> bool {
        matches!(self, Self::Small | Self::Medium)
    }

    /// Every size, lightest first.
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];
}

impl FromStr for Size {
    type Err = AnimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(AnimalError::UnknownSize {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Small => write!(f, "small"),
            Self::Medium => write!(f, "medium"),
            Self::Large => write!(f, "large"),
        }
    }
}

/// Capacity points for a size. Same as [`Size::weight`].
pub const fn weight(size: Size) -> u32 {
    size.weight()
}

/// An animal waiting to be loaded. Weight is always derived from size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Animal {
    pub diet: Diet,
    pub size: Size,
}

impl Animal {
    pub const fn new(diet: Diet, size: Size) -> Self {
        Self { diet, size }
    }

    pub const fn carnivore(size: Size) -> Self {
        Self::new(Diet::Carnivore, size)
    }

    pub const fn herbivore(size: Size) -> Self {
        Self::new(Diet::Herbivore, size)
    }

    pub const fn weight(&self) -> u32 {
        self.size.weight()
    }

    pub const fn is_carnivore(&self) -> bool {
        matches!(self.diet, Diet::Carnivore)
    }

    /// Whether this animal could eat `other`: carnivores prey on anything
    /// with equal or lesser weight.
    pub fn can_eat(&self, other: &Animal) -> bool {
        self.is_carnivore() && other.weight() <= self.weight()
    }
}

impl std::fmt::Display for Animal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.size, self.diet)
    }
}
