//! Link Server Library
//!
//! This library crate defines the core modules of the link search front end.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The system is composed of three loosely coupled subsystems:
//!
//! - **`query`**: The tag index query logic. Contains the search and suggestion
//!   engine, the query parsing utilities, and the HTTP request handlers.
//! - **`store`**: The persistence collaborator boundary. Defines the `LinkStore`
//!   trait consumed by the query engine and an in-memory implementation backed
//!   by a concurrent map, loadable from a JSON seed file.
//! - **`server`**: The HTTP server object. Holds the listening configuration,
//!   builds the router, and runs the accept loop.

pub mod query;
pub mod server;
pub mod store;
