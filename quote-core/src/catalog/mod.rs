pub mod factory;
pub mod filter;
pub mod repository;

pub use factory::{CatalogConfig, CatalogFactory, CatalogRegistry};
pub use filter::ModelFilter;
pub use repository::{CatalogRepository, RepositoryError};
