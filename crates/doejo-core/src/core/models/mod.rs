//! # Models Module
//!
//! Typed representations of the analytes handed to the engine by the compound-resolution
//! layer, and of the batch-level aggregate derived from them.
//!
//! - [`cas`] - Validated CAS Registry Numbers
//! - [`compound`] - A single resolved compound and its physicochemical properties
//! - [`profile`] - The aggregate profile of a compound batch

pub mod cas;
pub mod compound;
pub mod profile;
