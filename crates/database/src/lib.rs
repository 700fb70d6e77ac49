//! # Emission Types Database Crate
//!
//! This crate acts as a high-level, application-specific interface to the
//! PostgreSQL database. It owns the `emission_type` table outright.
//!
//! ## Architectural Principles
//!
//! - **Single Writer:** The repository is the only component that reads from
//!   or writes to the backing table. Everything above it works with the
//!   `EmissionType` structs from `core-types`, never with SQL.
//! - **Asynchronous & Pooled:** All operations are asynchronous, and it uses a
//!   connection pool (`PgPool`) for high-performance, concurrent database access.
//!   Connections are acquired per call and released on every exit path.
//!
//! ## Public API
//!
//! - `connect`: The async function to establish the database connection pool.
//! - `run_migrations`: A utility to apply database migrations, ensuring the schema is up-to-date.
//! - `EmissionTypeRepository`: The main struct that holds the connection pool
//!   and provides the data access methods (`select_by_id`, `select_all`,
//!   `insert_all`, `update`).
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use error::DbError;
pub use repository::EmissionTypeRepository;
