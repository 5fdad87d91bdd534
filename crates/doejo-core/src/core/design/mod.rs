//! # Design Module
//!
//! Builds the Box-Behnken experiment that optimizes the recommended process conditions.
//!
//! ## Overview
//!
//! A Box-Behnken design is a three-level incomplete factorial: every pair of factors is varied
//! over the four `{-1, +1}²` corners while all other factors stay at their center level, and the
//! design is completed by replicate runs with every factor at its center. Compared with a full
//! `3^k` factorial it needs far fewer runs and never visits the extreme corners of the cube.
//!
//! ## Key Components
//!
//! - [`factor`] - Coded levels and continuous design factors built from process ranges
//! - [`bbd`] - Generation of the coded Box-Behnken runs
//! - [`matrix`] - The real-unit design matrix handed to the presentation layer
//!
//! Run order is fully deterministic: pair blocks in factor order (first factor varies slowest),
//! corners in the order `(-1,-1), (-1,+1), (+1,-1), (+1,+1)`, then all center points.

pub mod bbd;
pub mod factor;
pub mod matrix;
