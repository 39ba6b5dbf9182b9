use std::collections::BTreeSet;

use quote_catalog_memory::MemoryCatalogFactory;
use quote_core::catalog::CatalogRegistry;
use quote_core::{
    CatalogRepository, LaminationMaterial, ModelFilter, PrintMaterial, RepositoryError,
    VehicleModel,
};
use quote_data::CsvCatalogFactory;
use tracing::{debug, warn};

use crate::state::QuoteSession;

/// Build a [`CatalogRegistry`] with every backend compiled into this binary.
pub fn build_registry() -> CatalogRegistry {
    let mut registry = CatalogRegistry::new();
    registry.register(Box::new(MemoryCatalogFactory));
    registry.register(Box::new(CsvCatalogFactory));
    registry
}

/// The choices passed to the `quote` command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteRequest {
    pub model_id: Option<String>,
    pub coverage_id: Option<String>,
    pub extra_ids: Vec<String>,
    pub print_material_id: Option<String>,
    pub lamination_material_id: Option<String>,
    pub white_print: bool,
}

/// Turns a `NotFound` lookup into `None` so the slot stays empty.
fn found<T>(
    result: Result<T, RepositoryError>
) -> Result<Option<T>, RepositoryError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(RepositoryError::NotFound { kind, id }) => {
            warn!(kind, %id, "not in catalog; leaving selection empty");
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

async fn lookup_model(
    repo: &dyn CatalogRepository,
    id: Option<&str>,
) -> Result<Option<VehicleModel>, RepositoryError> {
    match id {
        Some(id) => found(repo.get_model(id).await),
        None => Ok(None),
    }
}

async fn lookup_print_material(
    repo: &dyn CatalogRepository,
    id: Option<&str>,
) -> Result<Option<PrintMaterial>, RepositoryError> {
    match id {
        Some(id) => found(repo.get_print_material(id).await),
        None => Ok(None),
    }
}

async fn lookup_lamination_material(
    repo: &dyn CatalogRepository,
    id: Option<&str>,
) -> Result<Option<LaminationMaterial>, RepositoryError> {
    match id {
        Some(id) => found(repo.get_lamination_material(id).await),
        None => Ok(None),
    }
}

/// Apply each choice of `request` to a fresh [`QuoteSession`], in the order
/// a user would pick them.
///
/// Ids the catalog does not know leave their slot empty, which makes the
/// quote incomplete. Repeated extras count once.
pub async fn build_session(
    repo: &dyn CatalogRepository,
    request: &QuoteRequest,
) -> Result<QuoteSession, RepositoryError> {
    let mut session = QuoteSession::new();

    let model = lookup_model(repo, request.model_id.as_deref()).await?;
    session.select_model(model);
    session.select_coverage(request.coverage_id.clone());

    let extra_ids: BTreeSet<&str> = request.extra_ids.iter().map(String::as_str).collect();
    for extra_id in extra_ids {
        let offered = session
            .selection()
            .model
            .as_ref()
            .is_some_and(|m| m.extra(extra_id).is_some());
        if !offered {
            warn!(extra = extra_id, "extra not offered for this model; ignored");
            continue;
        }
        session.toggle_extra(extra_id);
    }

    let print_material =
        lookup_print_material(repo, request.print_material_id.as_deref()).await?;
    session.select_print_material(print_material);

    let lamination_material =
        lookup_lamination_material(repo, request.lamination_material_id.as_deref()).await?;
    session.select_lamination_material(lamination_material);

    if request.white_print && !session.set_white_print(true) {
        warn!("white print is not available for the selected print material");
    }

    debug!(complete = !session.quote().is_incomplete(), "quote session built");
    Ok(session)
}

/// Models matching `filter`, in catalog order.
pub async fn find_models(
    repo: &dyn CatalogRepository,
    filter: &ModelFilter,
) -> Result<Vec<VehicleModel>, RepositoryError> {
    let models = repo.search_models(filter).await?;
    debug!(
        search = %filter.search,
        category = ?filter.category,
        matches = models.len(),
        "model search"
    );
    Ok(models)
}
