//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, gender, pagination, errors)
//! - `segment` - Segment records and the analytics computed over their users

pub mod foundation;
pub mod segment;
