use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CoverageType, ExtraOption, LaminationMaterial, PrintMaterial, VehicleModel};

/// A fully priced quote for one complete selection.
///
/// Amounts keep full precision; rounding is left to the display layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteCalculation {
    pub selected_model: VehicleModel,
    pub selected_coverage: CoverageType,
    /// Extras in the model's catalog order.
    pub selected_extras: Vec<ExtraOption>,
    pub selected_print_material: PrintMaterial,
    pub selected_lamination_material: LaminationMaterial,
    pub white_print_enabled: bool,

    pub subtotal: Decimal,
    pub print_cost: Decimal,
    pub lamination_cost: Decimal,
    pub white_print_cost: Decimal,
    pub total: Decimal,
}

/// Result of pricing a selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteOutcome {
    /// A required selection is missing or does not resolve against the
    /// chosen model.
    Incomplete,
    Computed(QuoteCalculation),
}

impl QuoteOutcome {
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::Incomplete)
    }

    pub fn calculation(&self) -> Option<&QuoteCalculation> {
        match self {
            Self::Incomplete => None,
            Self::Computed(calc) => Some(calc),
        }
    }

    pub fn into_calculation(self) -> Option<QuoteCalculation> {
        match self {
            Self::Incomplete => None,
            Self::Computed(calc) => Some(calc),
        }
    }
}
