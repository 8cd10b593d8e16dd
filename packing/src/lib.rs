//! Circus train packing.
//!
//! Assigns a batch of animals to an ordered train of wagons so that no wagon
//! exceeds its capacity and no animal can eat a wagon-mate.
//!
//! # Modules
//!
//! - [`animal`] — `Diet`, `Size`, `Animal` and the weight function
//! - [`wagon`] — wagon load, mode, and guarded insertion
//! - [`safety`] — the predation safety predicate
//! - [`packer`] — stable heaviest-first ordering and first-fit placement
//! - [`stats`] — summary numbers for a finished train
//! - [`audit`] — invariant checks over any train
//! - [`record`] — validation of raw records before packing
//! - [`error`] — typed errors raised before a run starts
//!
//! # Example
//!
//! ```
//! use packing::{pack, Animal, Size};
//!
//! let wagons = pack(&[
//!     Animal::carnivore(Size::Large),
//!     Animal::herbivore(Size::Large),
//!     Animal::herbivore(Size::Small),
//! ]);
//! assert_eq!(wagons.len(), 2);
//! assert!(wagons.iter().all(|w| w.used_capacity() <= packing::WAGON_CAPACITY));
//! ```

#![allow(clippy::uninlined_format_args)]

pub mod animal;
pub mod audit;
pub mod error;
pub mod packer;
pub mod record;
pub mod safety;
pub mod stats;
pub mod wagon;

pub use animal::{weight, Animal, Diet, Size};
pub use audit::{audit, AuditReport, Violation};
pub use error::{AnimalError, BatchError, ConfigError, RebuildError, RecordFailure};
pub use packer::{
    pack, sort_by_weight_desc, Packer, PackerConfig, PackingOutcome, MAX_ANIMAL_WEIGHT,
    MAX_RELAXED, WAGON_CAPACITY,
};
pub use record::{partition_records, validate_batch, AnimalRecord, RejectedRecord};
pub use safety::is_safe;
pub use stats::PackingStats;
pub use wagon::Wagon;
