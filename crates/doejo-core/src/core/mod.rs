//! # Core Module
//!
//! This module provides the pure, synchronous building blocks of SPME-DoEjo. Nothing in here
//! performs I/O or holds state between calls; every function maps owned or borrowed inputs to
//! freshly allocated outputs.
//!
//! ## Architecture
//!
//! - **Analyte Representation** ([`models`]) - Resolved compounds, CAS numbers, and the
//!   aggregate profile of a compound batch
//! - **Operating Conditions** ([`conditions`]) - Fiber coatings, process parameter ranges, and
//!   the ranked threshold rules that select them
//! - **Experiment Design** ([`design`]) - Coded design factors and the Box-Behnken matrix
//!
//! ## Scientific Foundation
//!
//! - **Partitioning** - fiber polarity follows the maximum XLogP of the batch
//! - **Volatility** - extraction temperature follows the Clausius-Clapeyron derived boiling
//!   point bands
//! - **Diffusion kinetics** - extraction time follows the Stokes-Einstein cube-root scaling of
//!   molecular weight
//! - **Salting-out** - NaCl addition follows the Setschenow relation for polar analytes
//! - **Mass transfer** - agitation rate follows the matrix viscosity

pub mod conditions;
pub mod design;
pub mod models;
