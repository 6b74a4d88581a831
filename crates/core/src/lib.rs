//! # medscore Core
//!
//! Core scoring logic for the medscore calculator service.
//!
//! This crate contains the calculator dispatch framework and the calculator
//! catalog itself:
//! - A string-keyed registry of scoring functions, built once at startup
//! - A dispatch service that resolves an identifier, runs the scoring
//!   function, and classifies failures
//! - Pure scoring functions, one per clinical tool, grouped by specialty
//!
//! **No API concerns**: HTTP routing, request/response schemas, and error
//! envelopes belong in `api-rest` and `api-shared`.

pub mod calculators;
pub mod dispatch;
pub mod error;
pub mod output;
pub mod params;
pub mod registry;

pub use dispatch::{DispatchError, DispatchService};
pub use error::{CalcResult, ScoreError};
pub use output::ScoreOutput;
pub use params::ParameterSet;
pub use registry::{bootstrap, CalculatorEntry, Registry, RegistryError, ScoringFn, Specialty};
