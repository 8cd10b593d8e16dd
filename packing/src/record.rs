//! Boundary validation for raw animal records.
//!
//! Callers hand in whatever their source produced (file rows, JSON payloads)
//! as [`AnimalRecord`]s. Nothing reaches the packer until it has been turned
//! into a typed [`Animal`] here.

use crate::animal::{Animal, Diet, Size};
use crate::error::{AnimalError, BatchError, RecordFailure};
use serde::{Deserialize, Serialize};

/// Unvalidated animal description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimalRecord {
    pub diet: String,
    pub size: String,
}

impl AnimalRecord {
    pub fn new(diet: impl Into<String>, size: impl Into<String>) -> Self {
        Self {
            diet: diet.into(),
            size: size.into(),
        }
    }

    /// Parse both fields. Diet is checked first.
    pub fn validate(&self) -> Result<Animal, AnimalError> {
        let diet: Diet = self.diet.parse()?;
        let size: Size = self.size.parse()?;
        Ok(Animal::new(diet, size))
    }
}

impl From<Animal> for AnimalRecord {
    fn from(animal: Animal) -> Self {
        Self::new(animal.diet.to_string(), animal.size.to_string())
    }
}

/// A record skipped by lenient validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedRecord {
    pub index: usize,
    pub record: AnimalRecord,
    pub error: AnimalError,
}

/// Validate every record; fail if any is malformed, listing all failures.
pub fn validate_batch(records: &[AnimalRecord]) -> Result<Vec<Animal>, BatchError> {
    let (animals, rejected) = partition_records(records);
    if rejected.is_empty() {
        return Ok(animals);
    }
    Err(BatchError::InvalidRecords {
        total: records.len(),
        failures: rejected
            .into_iter()
            .map(|r| RecordFailure {
                index: r.index,
                error: r.error,
            })
            .collect(),
    })
}

/// Split records into valid animals (input order kept) and rejects.
pub fn partition_records(records: &[AnimalRecord]) -> (Vec<Animal>, Vec<RejectedRecord>) {
    let mut animals = Vec::with_capacity(records.len());
    let mut rejected = Vec::new();

    for (index, record) in records.iter().enumerate() {
        match record.validate() {
            Ok(animal) => animals.push(animal),
            Err(error) => {
                tracing::debug!(index, %error, "Rejected animal record");
                rejected.push(RejectedRecord {
                    index,
                    record: record.clone(),
                    error,
                });
            }
        }
    }

    (animals, rejected)
}
