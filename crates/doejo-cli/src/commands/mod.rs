pub mod batch;
pub mod cas;
pub mod plan;
