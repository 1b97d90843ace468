//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - REST endpoints and middleware stack (axum)
//! - `memory` - In-memory segment store for tests and local runs
//! - `postgres` - PostgreSQL segment reader (sqlx)

pub mod http;
pub mod memory;
pub mod postgres;

pub use http::{app_router, SegmentAppState};
pub use memory::InMemorySegmentStore;
pub use postgres::PostgresSegmentReader;
