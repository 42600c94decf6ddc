//! Link Store Module
//!
//! The persistence collaborator consumed by the query engine.
//!
//! ## Overview
//! The query logic is read-only: links, their tag sets, and their properties
//! are owned and mutated exclusively by the store. This module pins down the
//! exact surface the engine needs as the `LinkStore` trait, so the concrete
//! backend can be swapped (in-memory map here, a stub in tests).
//!
//! ## Submodules
//! - **`memory`**: In-memory store backed by a concurrent map, loadable from
//!   a JSON seed file.
//! - **`types`**: The stored link record and its property mapping.

pub mod memory;
pub mod types;


use self::types::Properties;

/// Read-only view of the link/tag index.
///
/// `sorted_links` defines both the match policy and the result order; the
/// query engine treats them as opaque and preserves the returned order.
pub trait LinkStore: Send + Sync {
    /// All links matching the given query tags, in the store's sort order.
    fn sorted_links(&self, tags: &[String]) -> Vec<String>;

    /// The property mapping of a single link, if the link exists.
    fn get_link_properties(&self, link: &str) -> Option<Properties>;

    /// All known tags beginning with `prefix`.
    fn complete_tags(&self, prefix: &str) -> Vec<String>;
}
