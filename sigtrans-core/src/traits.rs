//! Core traits for the engine
//!
//! Keep them small: a catalog that resolves medium identifiers, and a finite
//! check for the numeric guards.

use crate::errors::{SignalError, SignalResult};
use crate::medium::{MediumEntry, MediumProfile};

/// Source of medium profiles the engine can resolve identifiers against
///
/// Implementors only provide their entries; lookup is an exact,
/// case-sensitive match on the identifier.
pub trait MediumCatalog {
    /// All entries, in display order
    fn entries(&self) -> &[MediumEntry];

    /// Resolve an identifier to its profile
    fn lookup(&self, medium_id: &str) -> SignalResult<&MediumProfile> {
        match self.entries().iter().find(|entry| entry.id == medium_id) {
            Some(entry) => Ok(&entry.profile),
            None => {
                log_warn!("Medium lookup failed for id {:?}", medium_id);
                Err(SignalError::UnknownMedium)
            }
        }
    }
}

impl MediumCatalog for [MediumEntry] {
    fn entries(&self) -> &[MediumEntry] {
        self
    }
}

impl<const N: usize> MediumCatalog for [MediumEntry; N] {
    fn entries(&self) -> &[MediumEntry] {
        self
    }
}

/// Trait for values that can be checked before entering a computation
pub trait Validatable {
    /// Check if the value is usable (not NaN, not infinite)
    fn is_valid(&self) -> bool;
}

impl Validatable for f64 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f32 {
    fn is_valid(&self) -> bool {
        self.is_finite()
    }
}
