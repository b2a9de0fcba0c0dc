//! Scheduler layer for the agent
//!
//! This layer sequences the work cycle (list, match, apply, check, fulfil)
//! and, in continuous mode, repeats it on a fixed interval.

pub mod cycle;

pub use cycle::CycleRunner;
