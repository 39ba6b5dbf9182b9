mod catalog;
mod material;
mod quote;
mod vehicle_category;
mod vehicle_model;

pub use catalog::{Catalog, CatalogValidationError, MAX_AMOUNT};
pub use material::{LaminationCalculationType, LaminationMaterial, PrintMaterial, WhitePrintSettings};
pub use quote::{QuoteCalculation, QuoteOutcome};
pub use vehicle_category::VehicleCategory;
pub use vehicle_model::{CoverageType, ExtraOption, VehicleModel};
