//! # StaffQL Shared Library
//!
//! This crate contains the storage and validation layers used by the
//! StaffQL API server.
//!
//! ## Module Organization
//!
//! - `db`: SQLite connection pool, schema bootstrap and the `Database` handle
//! - `models`: Database models and their CRUD operations
//! - `validation`: Input validation applied before records reach storage

pub mod db;
pub mod models;
pub mod validation;

/// Current version of the StaffQL shared library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
