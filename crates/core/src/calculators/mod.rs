//! The calculator catalog.
//!
//! One module per specialty; each module exposes its scoring functions and a
//! `register` hook that adds them to the registry during bootstrap. Scoring
//! functions are pure: no I/O, no shared state, deterministic for a given
//! parameter set.

use crate::registry::{Registry, RegistryError};

pub mod cardiology;
pub mod emergency;
pub mod gastroenterology;
pub mod infectious_disease;
pub mod nephrology;
pub mod neurology;
pub mod psychiatry;
pub mod pulmonology;

/// Registers every calculator in the catalog.
pub fn register_all(registry: &mut Registry) -> Result<(), RegistryError> {
    cardiology::register(registry)?;
    emergency::register(registry)?;
    gastroenterology::register(registry)?;
    infectious_disease::register(registry)?;
    nephrology::register(registry)?;
    neurology::register(registry)?;
    psychiatry::register(registry)?;
    pulmonology::register(registry)?;
    Ok(())
}
