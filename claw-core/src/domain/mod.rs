//! Core domain types
//!
//! This module contains the entities the agent works with. Gigs and
//! applications are owned by the remote marketplace and only ever observed
//! as snapshots; identities and deliverables are produced locally.

pub mod application;
pub mod deliverable;
pub mod gig;
pub mod identity;
