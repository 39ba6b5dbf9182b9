use std::collections::HashMap;

use async_trait::async_trait;

use super::repository::{CatalogRepository, RepositoryError};

/// Backend-agnostic catalog configuration.
///
/// `backend` must match the [`CatalogFactory::backend_name`] of a
/// registered factory. `source` is passed through to that factory
/// unchanged; its meaning is entirely backend-specific.
///
/// | backend  | source                                   |
/// |----------|------------------------------------------|
/// | `memory` | ignored (built-in catalog)               |
/// | `csv`    | directory holding the catalog CSV files  |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"memory"`).
    pub backend: String,
    /// Opaque value forwarded to the factory's `create` method.
    pub source: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            backend: "memory".to_string(),
            source: None,
        }
    }
}

/// One implementation per catalog backend. Each backend crate exports a
/// unit struct that implements this trait and is registered with a
/// [`CatalogRegistry`] at startup.
#[async_trait]
pub trait CatalogFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Load the catalog and return a ready-to-use repository.
    async fn create(
        &self,
        config: &CatalogConfig,
    ) -> Result<Box<dyn CatalogRepository>, RepositoryError>;
}

/// Registry of [`CatalogFactory`] instances, keyed by backend name.
pub struct CatalogRegistry {
    factories: HashMap<&'static str, Box<dyn CatalogFactory>>,
}

impl CatalogRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory, replacing any factory with the same name.
    pub fn register(
        &mut self,
        factory: Box<dyn CatalogFactory>,
    ) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory that matches `config.backend`.
    ///
    /// # Errors
    /// * [`RepositoryError::Configuration`] when no factory is registered for
    ///   the requested backend name.
    /// * Any error the chosen factory itself returns.
    pub async fn create(
        &self,
        config: &CatalogConfig,
    ) -> Result<Box<dyn CatalogRepository>, RepositoryError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                RepositoryError::Configuration(format!(
                    "unknown catalog backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config).await
    }
}

impl Default for CatalogRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// tests
// ─────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use crate::models::{LaminationMaterial, PrintMaterial, VehicleModel};

    use super::{CatalogConfig, CatalogFactory, CatalogRegistry, CatalogRepository, RepositoryError};

    // ── stub repository ──────────────────────────────────────────────────
    // An empty catalog; the registry tests only check routing.
    struct StubRepository;

    #[async_trait]
    impl CatalogRepository for StubRepository {
        async fn list_models(&self) -> Result<Vec<VehicleModel>, RepositoryError> {
            Ok(Vec::new())
        }
        async fn get_model(&self, id: &str) -> Result<VehicleModel, RepositoryError> {
            Err(RepositoryError::not_found("model", id))
        }
        async fn list_print_materials(&self) -> Result<Vec<PrintMaterial>, RepositoryError> {
            Ok(Vec::new())
        }
        async fn get_print_material(&self, id: &str) -> Result<PrintMaterial, RepositoryError> {
            Err(RepositoryError::not_found("print material", id))
        }
        async fn list_lamination_materials(
            &self,
        ) -> Result<Vec<LaminationMaterial>, RepositoryError> {
            Ok(Vec::new())
        }
        async fn get_lamination_material(
            &self,
            id: &str,
        ) -> Result<LaminationMaterial, RepositoryError> {
            Err(RepositoryError::not_found("lamination material", id))
        }
    }

    // ── stub factory ─────────────────────────────────────────────────────
    /// Flips `called` when `create` runs so tests can prove dispatch.
    struct StubFactory {
        name: &'static str,
        called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl CatalogFactory for StubFactory {
        fn backend_name(&self) -> &'static str {
            self.name
        }
        async fn create(
            &self,
            _config: &CatalogConfig,
        ) -> Result<Box<dyn CatalogRepository>, RepositoryError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(Box::new(StubRepository))
        }
    }

    struct FailingFactory;

    #[async_trait]
    impl CatalogFactory for FailingFactory {
        fn backend_name(&self) -> &'static str {
            "failing"
        }
        async fn create(
            &self,
            _config: &CatalogConfig,
        ) -> Result<Box<dyn CatalogRepository>, RepositoryError> {
            Err(RepositoryError::Source("intentional failure".to_string()))
        }
    }

    fn stub_factory(name: &'static str) -> (Box<dyn CatalogFactory>, Arc<AtomicBool>) {
        let flag = Arc::new(AtomicBool::new(false));
        (
            Box::new(StubFactory {
                name,
                called: flag.clone(),
            }),
            flag,
        )
    }

    fn config(backend: &str) -> CatalogConfig {
        CatalogConfig {
            backend: backend.to_string(),
            source: None,
        }
    }

    // ── CatalogConfig ────────────────────────────────────────────────────
    #[test]
    fn config_default_is_memory_without_source() {
        let cfg = CatalogConfig::default();
        assert_eq!(cfg.backend, "memory");
        assert_eq!(cfg.source, None);
    }

    // ── registration ─────────────────────────────────────────────────────
    #[test]
    fn new_registry_has_no_backends() {
        assert!(CatalogRegistry::new().available_backends().is_empty());
    }

    #[test]
    fn available_backends_is_sorted() {
        let mut reg = CatalogRegistry::new();
        let (f1, _) = stub_factory("memory");
        let (f2, _) = stub_factory("csv");
        reg.register(f1);
        reg.register(f2);
        assert_eq!(reg.available_backends(), vec!["csv", "memory"]);
    }

    #[test]
    fn duplicate_registration_replaces_previous() {
        let mut reg = CatalogRegistry::new();
        let (old, _) = stub_factory("memory");
        let (new, _) = stub_factory("memory");
        reg.register(old);
        reg.register(new);
        assert_eq!(reg.available_backends(), vec!["memory"]);
    }

    // ── dispatch ─────────────────────────────────────────────────────────
    #[tokio::test]
    async fn create_calls_only_matching_factory() {
        let mut reg = CatalogRegistry::new();
        let (memory, memory_called) = stub_factory("memory");
        let (csv, csv_called) = stub_factory("csv");
        reg.register(memory);
        reg.register(csv);

        let result = reg.create(&config("memory")).await;

        assert!(result.is_ok(), "expected Ok, got {:#?}", result.err());
        assert!(memory_called.load(Ordering::SeqCst));
        assert!(!csv_called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn unknown_backend_error_names_requested_and_available() {
        let mut reg = CatalogRegistry::new();
        let (f, _) = stub_factory("memory");
        reg.register(f);

        match reg.create(&config("postgres")).await {
            Err(RepositoryError::Configuration(msg)) => {
                assert!(msg.contains("postgres"), "error should name the requested backend");
                assert!(msg.contains("memory"), "error should list available backends");
            }
            Err(other) => panic!("expected Configuration error, got {other:#?}"),
            Ok(_) => panic!("expected Configuration error, got a repository"),
        }
    }

    #[tokio::test]
    async fn create_propagates_factory_error() {
        let mut reg = CatalogRegistry::new();
        reg.register(Box::new(FailingFactory));

        let err = reg.create(&config("failing")).await.err();

        assert_eq!(
            err,
            Some(RepositoryError::Source("intentional failure".to_string()))
        );
    }

    // ── default search_models ────────────────────────────────────────────
    #[tokio::test]
    async fn default_search_over_empty_catalog_is_empty() {
        let repo = StubRepository;

        let models = repo
            .search_models(&crate::catalog::ModelFilter::new())
            .await
            .unwrap();

        assert!(models.is_empty());
    }
}
