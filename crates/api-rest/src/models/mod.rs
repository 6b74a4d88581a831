//! Typed request/response models, one pair per calculator.
//!
//! Each request model mirrors the calculator's declared field set: enums
//! constrain categorical inputs at deserialization time and
//! `ValidateRequest` enforces numeric bounds. Each response model redeclares
//! the uniform result shape so that a scoring function's output is checked
//! against the calculator's schema before it leaves the service.

pub mod cardiology;
pub mod common;
pub mod emergency;
pub mod gastroenterology;
pub mod infectious_disease;
pub mod nephrology;
pub mod neurology;
pub mod psychiatry;
pub mod pulmonology;
