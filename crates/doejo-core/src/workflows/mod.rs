//! # Workflows Module
//!
//! High-level entry points that run the complete planning pipeline.
//!
//! ## Overview
//!
//! A workflow takes raw compound records and a [`DesignConfig`](crate::engine::config::DesignConfig),
//! and returns everything a laboratory needs to start optimizing an extraction: the aggregate
//! profile that drove the decisions, the recommended fiber and process ranges, the settings held
//! constant, and the ordered Box-Behnken run table.
//!
//! ## Architecture
//!
//! - **Planning Workflow** ([`plan`]) - Aggregation, classification, factor construction and
//!   design generation, each reported as a separate progress phase.

pub mod plan;
