//! # Conditions Module
//!
//! Maps an [`AggregateProfile`](crate::core::models::profile::AggregateProfile) onto recommended
//! SPME operating conditions.
//!
//! ## Overview
//!
//! Each operating parameter is selected by its own ranked rule table: an ordered list of
//! `(predicate, outcome)` pairs evaluated first-match-wins, with the narrowest condition listed
//! first. Unknown driver values are matched by an explicit rule in each table rather than by a
//! numeric default.
//!
//! ## Key Components
//!
//! - [`fiber`] - Fiber coatings and their desorption conditions
//! - [`parameter`] - Process parameters, units, and the ranges or fixed values chosen for them
//! - [`rules`] - The ranked rule tables themselves
//! - [`kinetics`] - Diffusion-limited equilibration time scaling
//! - [`classifier`] - Evaluates every table against a profile

pub mod classifier;
pub mod fiber;
pub mod kinetics;
pub mod parameter;
pub mod rules;
