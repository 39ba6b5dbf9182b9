pub mod calculations;
pub mod catalog;
pub mod models;

pub use calculations::{CompleteSelection, PricingEngine, SelectionState, compute_quote};
pub use catalog::{CatalogRepository, ModelFilter, RepositoryError};
pub use models::*;
