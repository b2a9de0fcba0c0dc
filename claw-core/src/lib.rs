//! Claw Core
//!
//! Core types shared by the Claw Jobs marketplace client and agent.
//!
//! This crate contains:
//! - Domain types: Marketplace entities as the agent observes them (Gig, Application, etc.)
//! - DTOs: Typed request/response bodies, one set per marketplace endpoint

pub mod domain;
pub mod dto;
