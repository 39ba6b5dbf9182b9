use std::path::Path;

use async_trait::async_trait;
use quote_catalog_memory::InMemoryCatalog;
use quote_core::catalog::{CatalogConfig, CatalogFactory, CatalogRepository, RepositoryError};
use tracing::info;

use crate::loader::{CatalogLoader, CatalogLoaderError};

/// [`CatalogFactory`] that reads the catalog from a directory of CSV files.
///
/// `config.source` must name that directory.
pub struct CsvCatalogFactory;

#[async_trait]
impl CatalogFactory for CsvCatalogFactory {
    fn backend_name(&self) -> &'static str {
        "csv"
    }

    async fn create(
        &self,
        config: &CatalogConfig,
    ) -> Result<Box<dyn CatalogRepository>, RepositoryError> {
        let source = config.source.as_deref().ok_or_else(|| {
            RepositoryError::Configuration(
                "the csv backend needs a source directory".to_string(),
            )
        })?;

        let catalog = CatalogLoader::load_dir(Path::new(source)).map_err(|e| match e {
            CatalogLoaderError::Validation { .. }
            | CatalogLoaderError::InvalidCategory { .. }
            | CatalogLoaderError::InvalidCalculationType { .. }
            | CatalogLoaderError::UnknownModel { .. } => RepositoryError::Invalid(e.to_string()),
            CatalogLoaderError::Io { .. } | CatalogLoaderError::CsvParse { .. } => {
                RepositoryError::Source(e.to_string())
            }
        })?;

        info!(%source, "using CSV catalog");
        Ok(Box::new(InMemoryCatalog::new(catalog)?))
    }
}
