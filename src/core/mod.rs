//! core
//!
//! Dataset schema, code resolution, and the query algorithms.
//!
//! # Modules
//!
//! - [`types`] - Code schemes, entity kinds, script direction
//! - [`error`] - Load and query errors
//! - [`schema`] - Typed dataset records
//! - [`dataset`] - The validated, indexed dataset
//! - [`resolve`] - Code scheme inference from raw input
//! - [`lookup`] - Single-record fetch and one-hop expansion
//! - [`aggregate`] - Code listings, related codes, locales, families
//! - [`config`] - Configuration schema and loading
//!
//! # Design Principles
//!
//! - The dataset is validated once; queries never re-check it
//! - Queries are pure reads over shared, immutable data
//! - Caller mistakes are typed errors, never panics

pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod error;
pub mod lookup;
pub mod resolve;
pub mod schema;
pub mod types;
