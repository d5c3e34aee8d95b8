//! Opsdeck API server library.
//!
//! Exposes the HTTP routes and the JSON-file record stores for use in tests
//! and embedding. The server translates REST-like requests into store calls
//! and applies the entity-specific business rules (email uniqueness, the
//! last-admin guard) before any mutation.

pub mod config;
pub mod routes;
pub mod store;
