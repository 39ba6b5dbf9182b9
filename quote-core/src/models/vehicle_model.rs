use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::VehicleCategory;

/// A graphic-wrap style offered for a model. Does not affect price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageType {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// An additional vehicle part that can be wrapped for an extra charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraOption {
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleModel {
    pub id: String,
    pub name: String,
    pub category: VehicleCategory,
    /// Production year range as shown to customers, e.g. `2020-2024`.
    pub years: String,
    pub base_price: Decimal,
    pub coverage_types: Vec<CoverageType>,
    pub extra_options: Vec<ExtraOption>,
}

impl VehicleModel {
    pub fn coverage(&self, coverage_id: &str) -> Option<&CoverageType> {
        self.coverage_types.iter().find(|c| c.id == coverage_id)
    }

    pub fn extra(&self, extra_id: &str) -> Option<&ExtraOption> {
        self.extra_options.iter().find(|e| e.id == extra_id)
    }
}
