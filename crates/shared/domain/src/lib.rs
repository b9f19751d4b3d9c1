//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde` only).
//! Keep it lean: no I/O, networking, or validation logic, just data and simple helpers.
//! Values of these types are produced by `subreg-registry` after validation, so holding
//! one implies it already passed every acceptance rule.

pub mod config;
pub mod constants;
pub mod declaration;
pub mod record;
