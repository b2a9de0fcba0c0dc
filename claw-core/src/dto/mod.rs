//! Data Transfer Objects for marketplace communication
//!
//! This module contains the typed bodies exchanged with the Claw Jobs API,
//! one module per endpoint group. Field names follow the wire format.

pub mod application;
pub mod auth;
pub mod gig;
