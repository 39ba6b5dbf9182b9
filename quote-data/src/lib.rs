//! CSV-backed catalog loading.

mod factory;
mod loader;

pub use factory::CsvCatalogFactory;
pub use loader::{
    COVERAGE_TYPES_FILE, CatalogLoader, CatalogLoaderError, CatalogRecords, CoverageRecord,
    EXTRA_OPTIONS_FILE, ExtraRecord, LAMINATION_MATERIALS_FILE, LaminationRecord, MODELS_FILE,
    ModelRecord, PRINT_MATERIALS_FILE, PrintMaterialRecord,
};
