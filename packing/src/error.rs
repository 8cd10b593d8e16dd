//! Error taxonomy for the packing core.
//!
//! Packing itself is total over valid input, so every error here is raised
//! either while validating animal records or while validating configuration,
//! always before a run starts.

use crate::animal::Animal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single animal description could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimalError {
    /// Diet text is not `carnivore` or `herbivore`.
    #[error("unknown diet: {value:?}")]
    UnknownDiet { value: String },

    /// Size text is not `small`, `medium` or `large`.
    #[error("unknown size: {value:?}")]
    UnknownSize { value: String },
}

impl AnimalError {
    /// Machine-readable code for reports.
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownDiet { .. } => "UNKNOWN_DIET",
            Self::UnknownSize { .. } => "UNKNOWN_SIZE",
        }
    }
}

/// One failing record inside a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordFailure {
    /// Position of the record in the submitted batch (0-indexed).
    pub index: usize,
    /// Why it was rejected.
    pub error: AnimalError,
}

impl std::fmt::Display for RecordFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}: {}", self.index, self.error)
    }
}

/// Strict batch validation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    /// At least one record was malformed. Every failure is listed.
    #[error("{} of {total} animal records are invalid: {}", .failures.len(), summarize(.failures))]
    InvalidRecords {
        total: usize,
        failures: Vec<RecordFailure>,
    },
}

impl BatchError {
    /// All failing records, in input order.
    pub fn failures(&self) -> &[RecordFailure] {
        match self {
            Self::InvalidRecords { failures, .. } => failures,
        }
    }
}

fn summarize(failures: &[RecordFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A stored wagon could not be rebuilt through guarded insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RebuildError {
    /// Boarding this animal would exceed capacity.
    #[error("occupant {position} ({animal}) exceeds wagon capacity {capacity}")]
    OverCapacity {
        position: usize,
        animal: Animal,
        capacity: u32,
    },

    /// This animal is not predation-safe with the animals boarded before it.
    #[error("occupant {position} ({animal}) is not predation-safe")]
    Unsafe { position: usize, animal: Animal },
}

/// Packer configuration that would break the engine's guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A lone animal of the heaviest size would not fit in an empty wagon.
    #[error("wagon capacity {capacity} is smaller than the heaviest animal ({heaviest})")]
    CapacityTooSmall { capacity: u32, heaviest: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animal_error_display() {
        let err = AnimalError::UnknownDiet {
            value: "omnivore".into(),
        };
        assert_eq!(err.to_string(), "unknown diet: \"omnivore\"");
        assert_eq!(err.code(), "UNKNOWN_DIET");

        let err = AnimalError::UnknownSize {
            value: "huge".into(),
        };
        assert!(err.to_string().contains("huge"));
        assert_eq!(err.code(), "UNKNOWN_SIZE");
    }

    #[test]
    fn test_batch_error_lists_every_failure() {
        let err = BatchError::InvalidRecords {
            total: 5,
            failures: vec![
                RecordFailure {
                    index: 1,
                    error: AnimalError::UnknownDiet {
                        value: "plant".into(),
                    },
                },
                RecordFailure {
                    index: 4,
                    error: AnimalError::UnknownSize {
                        value: "xl".into(),
                    },
                },
            ],
        };
        let display = err.to_string();
        assert!(display.starts_with("2 of 5 animal records are invalid"));
        assert!(display.contains("#1: unknown diet"));
        assert!(display.contains("#4: unknown size"));
        assert_eq!(err.failures().len(), 2);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::CapacityTooSmall {
            capacity: 4,
            heaviest: 5,
        };
        assert!(err.to_string().contains("capacity 4"));
    }

    #[test]
    fn test_animal_error_serde() {
        let err = AnimalError::UnknownSize {
            value: "tiny".into(),
        };
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"kind":"unknown_size","value":"tiny"}"#);
        let parsed: AnimalError = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, err);
    }
}
