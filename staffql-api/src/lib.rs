//! # StaffQL API Server Library
//!
//! This library provides the GraphQL-over-HTTP API for StaffQL.
//!
//! ## Modules
//!
//! - `app`: Application state and router builder
//! - `config`: Configuration management
//! - `error`: Error handling and GraphQL error mapping
//! - `graphql`: Schema, queries and mutations
//! - `routes`: HTTP route handlers

pub mod app;
pub mod config;
pub mod error;
pub mod graphql;
pub mod routes;
