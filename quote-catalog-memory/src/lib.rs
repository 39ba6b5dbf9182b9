//! In-memory catalog backend.
//!
//! Serves a validated [`quote_core::Catalog`] from memory. The `"memory"`
//! backend is seeded with the shop's built-in catalog; other crates (the CSV
//! loader) wrap their own catalogs in [`InMemoryCatalog`].

mod factory;
mod repository;
pub mod seed;

pub use factory::MemoryCatalogFactory;
pub use repository::InMemoryCatalog;
