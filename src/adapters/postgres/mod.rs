//! PostgreSQL adapters - Database implementations for reader ports.
//!
//! - `PostgresSegmentReader` - Segment pages, lookups, and per-gender grouping

mod segment_reader;

pub use segment_reader::PostgresSegmentReader;
