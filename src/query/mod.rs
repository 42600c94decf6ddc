//! Tag Index Query Module
//!
//! The core component: selecting links by a set of query tags and completing a
//! partial tag against the vocabulary of known tags.
//!
//! ## Overview
//! This module bridges the HTTP API layer with the underlying link store. The
//! engine is read-only and side-effect free; it consumes the store through the
//! `LinkStore` trait so handlers and tests inject their own backend.
//!
//! ## Responsibilities
//! - **Parsing**: Extracting tag tokens from the caller's form body or query
//!   string. Parse failure on `/search` fails closed to an empty result; on
//!   `/suggest` it is a client error.
//! - **Retrieval**: Hydrating matched link ids with their property mappings,
//!   preserving the store's result order.
//! - **Completion**: Building suggestion strings from the confirmed tags plus
//!   each candidate completion of the trailing prefix.
//! - **API**: Exposing both operations via HTTP endpoints on the Axum router.
//!
//! ## Submodules
//! - **`engine`**: Core search and suggestion logic.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Data Transfer Objects (DTOs) for API communication.

pub mod engine;
pub mod handlers;
pub mod types;
