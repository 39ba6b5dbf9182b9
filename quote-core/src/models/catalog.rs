use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{LaminationCalculationType, LaminationMaterial, PrintMaterial, VehicleModel};

/// Reasons a catalog record is rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogValidationError {
    #[error("{kind} id must not be blank")]
    BlankId { kind: &'static str },

    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },

    #[error("model '{model_id}' has a negative base price {value}")]
    NegativeBasePrice { model_id: String, value: Decimal },

    #[error("extra option '{extra_id}' on model '{model_id}' has a negative price {value}")]
    NegativeExtraPrice {
        model_id: String,
        extra_id: String,
        value: Decimal,
    },

    #[error("print material '{material_id}' percentage must be between 0 and 100, got {value}")]
    PrintPercentageOutOfRange { material_id: String, value: Decimal },

    #[error("print material '{material_id}' has a negative white print cost {value}")]
    NegativeWhitePrintCost { material_id: String, value: Decimal },

    #[error("lamination material '{material_id}' percentage must be between 0 and 100, got {value}")]
    LaminationPercentageOutOfRange { material_id: String, value: Decimal },

    #[error("lamination material '{material_id}' has a negative fixed cost {value}")]
    NegativeLaminationCost { material_id: String, value: Decimal },

    #[error("{kind} '{id}' amount {value} exceeds the maximum of {max}", max = MAX_AMOUNT)]
    AmountTooLarge {
        kind: &'static str,
        id: String,
        value: Decimal,
    },
}

/// Largest amount a catalog may hold, for any single price or cost and for
/// a model's base price plus all of its extras.
///
/// Keeps every sum and product in the pricing engine far inside
/// [`Decimal::MAX`], so a validated catalog can always be priced.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

fn check_amount(
    kind: &'static str,
    id: &str,
    value: Decimal,
) -> Result<(), CatalogValidationError> {
    if value > MAX_AMOUNT {
        return Err(CatalogValidationError::AmountTooLarge {
            kind,
            id: id.to_string(),
            value,
        });
    }
    Ok(())
}

fn is_percentage(value: Decimal) -> bool {
    value >= Decimal::ZERO && value <= Decimal::ONE_HUNDRED
}

fn check_id(
    kind: &'static str,
    id: &str,
    seen: &mut HashSet<String>,
) -> Result<(), CatalogValidationError> {
    if id.trim().is_empty() {
        return Err(CatalogValidationError::BlankId { kind });
    }
    if !seen.insert(id.to_string()) {
        return Err(CatalogValidationError::DuplicateId {
            kind,
            id: id.to_string(),
        });
    }
    Ok(())
}

impl VehicleModel {
    /// Checks the model's own invariants: base and extra prices in
    /// `0..=MAX_AMOUNT` (also for their sum) and unique coverage/extra ids
    /// within the model.
    pub fn validate(&self) -> Result<(), CatalogValidationError> {
        if self.id.trim().is_empty() {
            return Err(CatalogValidationError::BlankId { kind: "model" });
        }
        if self.base_price < Decimal::ZERO {
            return Err(CatalogValidationError::NegativeBasePrice {
                model_id: self.id.clone(),
                value: self.base_price,
            });
        }
        check_amount("model", &self.id, self.base_price)?;

        let mut coverage_ids = HashSet::new();
        for coverage in &self.coverage_types {
            check_id("coverage type", &coverage.id, &mut coverage_ids)?;
        }

        let mut extra_ids = HashSet::new();
        let mut full_price = self.base_price;
        for extra in &self.extra_options {
            check_id("extra option", &extra.id, &mut extra_ids)?;
            if extra.price < Decimal::ZERO {
                return Err(CatalogValidationError::NegativeExtraPrice {
                    model_id: self.id.clone(),
                    extra_id: extra.id.clone(),
                    value: extra.price,
                });
            }
            check_amount("extra option", &extra.id, extra.price)?;
            // Both terms are at most MAX_AMOUNT, so this cannot overflow.
            full_price += extra.price;
            check_amount("model price with all extras", &self.id, full_price)?;
        }
        Ok(())
    }
}

impl PrintMaterial {
    pub fn validate(&self) -> Result<(), CatalogValidationError> {
        if self.id.trim().is_empty() {
            return Err(CatalogValidationError::BlankId {
                kind: "print material",
            });
        }
        if !is_percentage(self.percentage) {
            return Err(CatalogValidationError::PrintPercentageOutOfRange {
                material_id: self.id.clone(),
                value: self.percentage,
            });
        }
        if let Some(settings) = &self.white_print_settings {
            if settings.additional_cost < Decimal::ZERO {
                return Err(CatalogValidationError::NegativeWhitePrintCost {
                    material_id: self.id.clone(),
                    value: settings.additional_cost,
                });
            }
            check_amount("white print cost", &self.id, settings.additional_cost)?;
        }
        Ok(())
    }
}

impl LaminationMaterial {
    pub fn validate(&self) -> Result<(), CatalogValidationError> {
        if self.id.trim().is_empty() {
            return Err(CatalogValidationError::BlankId {
                kind: "lamination material",
            });
        }
        match self.calculation_type {
            LaminationCalculationType::Percentage if !is_percentage(self.value) => {
                Err(CatalogValidationError::LaminationPercentageOutOfRange {
                    material_id: self.id.clone(),
                    value: self.value,
                })
            }
            LaminationCalculationType::Fixed if self.value < Decimal::ZERO => {
                Err(CatalogValidationError::NegativeLaminationCost {
                    material_id: self.id.clone(),
                    value: self.value,
                })
            }
            LaminationCalculationType::Fixed => {
                check_amount("lamination material", &self.id, self.value)
            }
            LaminationCalculationType::Percentage => Ok(()),
        }
    }
}

/// The read-only reference data a shop quotes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub models: Vec<VehicleModel>,
    pub print_materials: Vec<PrintMaterial>,
    pub lamination_materials: Vec<LaminationMaterial>,
}

impl Catalog {
    /// Validates every record and checks that ids are unique per list.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogValidationError`] encountered, in list order
    /// (models, then print materials, then lamination materials).
    pub fn validate(&self) -> Result<(), CatalogValidationError> {
        let mut model_ids = HashSet::new();
        for model in &self.models {
            model.validate()?;
            check_id("model", &model.id, &mut model_ids)?;
        }

        let mut print_ids = HashSet::new();
        for material in &self.print_materials {
            material.validate()?;
            check_id("print material", &material.id, &mut print_ids)?;
        }

        let mut lamination_ids = HashSet::new();
        for material in &self.lamination_materials {
            material.validate()?;
            check_id("lamination material", &material.id, &mut lamination_ids)?;
        }
        Ok(())
    }
}
