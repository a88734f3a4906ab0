//! Catalog and query core for the Mars mineral image finder.
//!
//! The modules hold the two input tables (image records with mineral flags,
//! mineral descriptions) as immutable in-memory state and expose the filter
//! and lookup operations the web views are built on.

pub mod catalog;
pub mod prelude;
pub mod telemetry;

pub use prelude::{CatalogError, CatalogResult, TableSchema};
