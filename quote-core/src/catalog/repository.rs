use async_trait::async_trait;
use thiserror::Error;

use super::filter::ModelFilter;
use crate::models::{LaminationMaterial, PrintMaterial, VehicleModel};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("{kind} '{id}' not found")]
    NotFound { kind: &'static str, id: String },

    #[error("Catalog source error: {0}")]
    Source(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid catalog: {0}")]
    Invalid(String),
}

impl RepositoryError {
    pub fn not_found(
        kind: &'static str,
        id: &str,
    ) -> Self {
        Self::NotFound {
            kind,
            id: id.to_string(),
        }
    }
}

/// Read-only access to the vehicle and material catalog.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    // Vehicle models
    async fn list_models(&self) -> Result<Vec<VehicleModel>, RepositoryError>;
    async fn get_model(&self, id: &str) -> Result<VehicleModel, RepositoryError>;

    /// Models matching `filter`, in catalog order.
    async fn search_models(
        &self,
        filter: &ModelFilter,
    ) -> Result<Vec<VehicleModel>, RepositoryError> {
        let models = self.list_models().await?;
        Ok(models.into_iter().filter(|m| filter.matches(m)).collect())
    }

    // Print materials
    async fn list_print_materials(&self) -> Result<Vec<PrintMaterial>, RepositoryError>;
    async fn get_print_material(&self, id: &str) -> Result<PrintMaterial, RepositoryError>;

    // Lamination materials
    async fn list_lamination_materials(
        &self,
    ) -> Result<Vec<LaminationMaterial>, RepositoryError>;
    async fn get_lamination_material(
        &self,
        id: &str,
    ) -> Result<LaminationMaterial, RepositoryError>;
}
