//! # SPME-DoEjo Core Library
//!
//! A library for deriving Solid-Phase Microextraction (SPME) operating conditions from the
//! physicochemical properties of an analyte set, and for laying out the Box-Behnken experiment
//! that optimizes those conditions.
//!
//! ## Architectural Philosophy
//!
//! The library follows a strict three-layer architecture so that every stage can be tested
//! in isolation:
//!
//! - **[`core`]: The Foundation.** Stateless data models (`Compound`, `AggregateProfile`),
//!   the ranked threshold rules that map an aggregate profile onto operating ranges, and the
//!   Box-Behnken design generator.
//!
//! - **[`engine`]: The Glue.** Design configuration, the unified error type, and progress
//!   reporting shared by every workflow.
//!
//! - **[`workflows`]: The Public API.** Ties `core` and `engine` together into the complete
//!   aggregate → classify → factor → design pipeline.

pub mod core;
pub mod engine;
pub mod workflows;
