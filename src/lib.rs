//! Segment Analytics - Audience segment reporting service
//!
//! This crate serves per-segment summaries (user count, average income,
//! dominant gender) and gender breakdowns computed from the users that
//! reference each segment.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
