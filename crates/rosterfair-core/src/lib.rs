//! rosterfair Core - data model for fair day-to-worker allocation
//!
//! This crate provides the fundamental types shared by the rosterfair crates:
//! - Worker and day identities
//! - Availability sets and per-day assignments
//! - The validated [`RosterProblem`] input
//! - Error types for malformed input
//! - Audit predicates that re-verify a finished roster independently of the solver

pub mod assignment;
pub mod audit;
pub mod availability;
pub mod error;
pub mod problem;
pub mod worker;

pub use assignment::Assignment;
pub use audit::AuditViolation;
pub use availability::AvailabilitySet;
pub use error::{Result, RosterError};
pub use problem::RosterProblem;
pub use worker::{DayIndex, WorkerId};
