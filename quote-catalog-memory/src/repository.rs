use async_trait::async_trait;
use quote_core::{
    Catalog, CatalogRepository, LaminationMaterial, PrintMaterial, RepositoryError, VehicleModel,
};
use tracing::debug;

use crate::seed;

/// A read-only catalog held in memory.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    catalog: Catalog,
}

impl InMemoryCatalog {
    /// Wraps `catalog` after validating it.
    ///
    /// # Errors
    /// [`RepositoryError::Invalid`] when any record breaks a catalog invariant.
    pub fn new(catalog: Catalog) -> Result<Self, RepositoryError> {
        catalog
            .validate()
            .map_err(|e| RepositoryError::Invalid(e.to_string()))?;
        debug!(
            models = catalog.models.len(),
            print_materials = catalog.print_materials.len(),
            lamination_materials = catalog.lamination_materials.len(),
            "catalog loaded into memory"
        );
        Ok(Self { catalog })
    }

    /// The built-in shop catalog.
    pub fn seeded() -> Self {
        Self {
            catalog: seed::catalog(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn list_models(&self) -> Result<Vec<VehicleModel>, RepositoryError> {
        Ok(self.catalog.models.clone())
    }

    async fn get_model(
        &self,
        id: &str,
    ) -> Result<VehicleModel, RepositoryError> {
        self.catalog
            .models
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("model", id))
    }

    async fn list_print_materials(&self) -> Result<Vec<PrintMaterial>, RepositoryError> {
        Ok(self.catalog.print_materials.clone())
    }

    async fn get_print_material(
        &self,
        id: &str,
    ) -> Result<PrintMaterial, RepositoryError> {
        self.catalog
            .print_materials
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("print material", id))
    }

    async fn list_lamination_materials(
        &self,
    ) -> Result<Vec<LaminationMaterial>, RepositoryError> {
        Ok(self.catalog.lamination_materials.clone())
    }

    async fn get_lamination_material(
        &self,
        id: &str,
    ) -> Result<LaminationMaterial, RepositoryError> {
        self.catalog
            .lamination_materials
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found("lamination material", id))
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quote_core::{LaminationCalculationType, ModelFilter, VehicleCategory};
    use rust_decimal_macros::dec;

    use super::*;

    #[tokio::test]
    async fn test_list_models_in_catalog_order() {
        let repo = InMemoryCatalog::seeded();

        let models = repo.list_models().await.unwrap();
        let names: Vec<_> = models.iter().map(|m| m.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["Yamaha YFZ450R", "Can-Am Maverick X3", "Honda CRF450R"]
        );
    }

    #[tokio::test]
    async fn test_get_model() {
        let repo = InMemoryCatalog::seeded();

        let model = repo.get_model("2").await.unwrap();

        assert_eq!(model.name, "Can-Am Maverick X3");
        assert_eq!(model.base_price, dec!(4500));
        assert_eq!(model.extra_options.len(), 4);
    }

    #[tokio::test]
    async fn test_get_model_not_found() {
        let repo = InMemoryCatalog::seeded();

        let result = repo.get_model("99").await;

        assert_eq!(
            result,
            Err(RepositoryError::NotFound {
                kind: "model",
                id: "99".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn test_search_models_by_category() {
        let repo = InMemoryCatalog::seeded();
        let filter = ModelFilter::new().with_category(VehicleCategory::Motorcycle);

        let models = repo.search_models(&filter).await.unwrap();

        assert_eq!(models.len(), 1);
        assert_eq!(models[0].name, "Honda CRF450R");
    }

    #[tokio::test]
    async fn test_search_models_by_name() {
        let repo = InMemoryCatalog::seeded();
        let filter = ModelFilter::new().with_search("450r");

        let models = repo.search_models(&filter).await.unwrap();
        let ids: Vec<_> = models.iter().map(|m| m.id.as_str()).collect();

        assert_eq!(ids, vec!["1", "3"]);
    }

    #[tokio::test]
    async fn test_search_models_no_match() {
        let repo = InMemoryCatalog::seeded();
        let filter = ModelFilter::new()
            .with_search("maverick")
            .with_category(VehicleCategory::Atv);

        assert!(repo.search_models(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_print_material() {
        let repo = InMemoryCatalog::seeded();

        let material = repo.get_print_material("2").await.unwrap();

        assert_eq!(material.percentage, dec!(32));
        assert_eq!(material.white_print_cost(), Some(dec!(280)));
    }

    #[tokio::test]
    async fn test_get_print_material_not_found() {
        let repo = InMemoryCatalog::seeded();

        assert!(matches!(
            repo.get_print_material("0").await,
            Err(RepositoryError::NotFound { kind: "print material", .. })
        ));
    }

    #[tokio::test]
    async fn test_get_lamination_material() {
        let repo = InMemoryCatalog::seeded();

        let material = repo.get_lamination_material("3").await.unwrap();

        assert_eq!(material.calculation_type, LaminationCalculationType::Fixed);
        assert_eq!(material.value, dec!(680));
    }

    #[tokio::test]
    async fn test_list_materials() {
        let repo = InMemoryCatalog::seeded();

        assert_eq!(repo.list_print_materials().await.unwrap().len(), 5);
        assert_eq!(repo.list_lamination_materials().await.unwrap().len(), 6);
    }

    #[test]
    fn test_new_rejects_invalid_catalog() {
        let mut catalog = seed::catalog();
        catalog.models[0].base_price = dec!(-100);

        let result = InMemoryCatalog::new(catalog);

        assert!(matches!(result, Err(RepositoryError::Invalid(_))));
    }

    #[test]
    fn test_new_accepts_empty_catalog() {
        let repo = InMemoryCatalog::new(Catalog::default()).unwrap();

        assert!(repo.catalog().models.is_empty());
    }
}
