//! # Engine Module
//!
//! Shared plumbing for the planning workflows: how a design is configured, how failures from
//! every pipeline stage are reported, and how callers observe progress.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Center-point policy and design options, assembled through
//!   a builder that rejects missing parameters
//! - **Progress Monitoring** ([`progress`]) - Callback-based phase reporting, so that the library
//!   never decides how progress is displayed
//! - **Error Handling** ([`error`]) - [`error::EngineError`], the single error type returned by
//!   workflows, convertible from every stage-level error

pub mod config;
pub mod error;
pub mod progress;
