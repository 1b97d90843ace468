//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SegmentReader` - Query access to the segments and users collections

mod segment_reader;

pub use segment_reader::{SegmentError, SegmentReader};
