use async_trait::async_trait;
use quote_core::catalog::{CatalogConfig, CatalogFactory, CatalogRepository, RepositoryError};
use tracing::{debug, info};

use crate::repository::InMemoryCatalog;

/// [`CatalogFactory`] for the built-in in-memory catalog.
///
/// Register this with a [`quote_core::catalog::CatalogRegistry`] to make the
/// `"memory"` backend available:
///
/// ```rust
/// use quote_core::catalog::CatalogRegistry;
/// use quote_catalog_memory::MemoryCatalogFactory;
///
/// let mut registry = CatalogRegistry::new();
/// registry.register(Box::new(MemoryCatalogFactory));
/// assert_eq!(registry.available_backends(), vec!["memory"]);
/// ```
pub struct MemoryCatalogFactory;

#[async_trait]
impl CatalogFactory for MemoryCatalogFactory {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    /// Returns the seeded catalog. `config.source` is not used.
    async fn create(
        &self,
        config: &CatalogConfig,
    ) -> Result<Box<dyn CatalogRepository>, RepositoryError> {
        if let Some(source) = &config.source {
            debug!(%source, "memory backend ignores the catalog source");
        }
        let repo = InMemoryCatalog::seeded();
        info!(
            models = repo.catalog().models.len(),
            "using built-in catalog"
        );
        Ok(Box::new(repo))
    }
}
