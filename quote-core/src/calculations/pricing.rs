//! Quote pricing for vehicle graphics.
//!
//! # Pricing Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Resolve the coverage type on the model (missing -> incomplete) |
//! | 2    | Resolve selected extras on the model (unknown ids are skipped) |
//! | 3    | Subtotal: base price + sum of extra prices |
//! | 4    | Print cost: subtotal × print percentage / 100 |
//! | 5    | Lamination cost: subtotal × value / 100, or the fixed value |
//! | 6    | White print cost: the material's surcharge when enabled and offered |
//! | 7    | Total: subtotal + print + lamination + white print |
//!
//! No rounding is applied; amounts keep full precision.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use rust_decimal_macros::dec;
//! use quote_core::calculations::compute_quote;
//! use quote_core::{
//!     CoverageType, ExtraOption, LaminationCalculationType, LaminationMaterial, PrintMaterial,
//!     VehicleCategory, VehicleModel,
//! };
//!
//! let model = VehicleModel {
//!     id: "1".to_string(),
//!     name: "Yamaha YFZ450R".to_string(),
//!     category: VehicleCategory::Atv,
//!     years: "2020-2024".to_string(),
//!     base_price: dec!(3200),
//!     coverage_types: vec![CoverageType {
//!         id: "full".to_string(),
//!         name: "Full coverage".to_string(),
//!         description: "Complete vehicle protection".to_string(),
//!     }],
//!     extra_options: vec![ExtraOption {
//!         id: "fenders".to_string(),
//!         name: "Fenders".to_string(),
//!         price: dec!(280),
//!     }],
//! };
//! let print = PrintMaterial {
//!     id: "2".to_string(),
//!     name: "Avery Dennison MPI 1105".to_string(),
//!     percentage: dec!(32),
//!     allows_white_print: true,
//!     white_print_settings: None,
//! };
//! let lamination = LaminationMaterial {
//!     id: "3".to_string(),
//!     name: "Avery DOL 1460Z".to_string(),
//!     calculation_type: LaminationCalculationType::Fixed,
//!     value: dec!(680),
//! };
//! let extras = BTreeSet::from(["fenders".to_string()]);
//!
//! let outcome = compute_quote(
//!     Some(&model),
//!     Some("full"),
//!     &extras,
//!     Some(&print),
//!     Some(&lamination),
//!     false,
//! );
//! let quote = outcome.calculation().unwrap();
//!
//! assert_eq!(quote.subtotal, dec!(3480));
//! assert_eq!(quote.print_cost, dec!(1113.6));
//! assert_eq!(quote.total, dec!(5273.6));
//! ```

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::percent_of;
use crate::calculations::selection::{CompleteSelection, SelectionState};
use crate::models::{
    ExtraOption, LaminationCalculationType, LaminationMaterial, PrintMaterial, QuoteCalculation,
    QuoteOutcome, VehicleModel,
};

/// Stateless quote calculator.
///
/// Every call prices the selection from scratch; nothing from a previous
/// quote is reused.
#[derive(Debug, Clone, Copy, Default)]
pub struct PricingEngine;

impl PricingEngine {
    pub fn new() -> Self {
        Self
    }

    /// Prices the given choices, or returns [`QuoteOutcome::Incomplete`] when
    /// the model, a matching coverage, the print material or the lamination
    /// material is missing.
    pub fn compute_quote(
        &self,
        model: Option<&VehicleModel>,
        coverage_id: Option<&str>,
        extra_ids: &BTreeSet<String>,
        print_material: Option<&PrintMaterial>,
        lamination_material: Option<&LaminationMaterial>,
        white_print_enabled: bool,
    ) -> QuoteOutcome {
        match CompleteSelection::from_parts(
            model,
            coverage_id,
            extra_ids,
            print_material,
            lamination_material,
            white_print_enabled,
        ) {
            Some(selection) => QuoteOutcome::Computed(self.calculate(&selection)),
            None => {
                debug!("selection incomplete; no quote");
                QuoteOutcome::Incomplete
            }
        }
    }

    /// Prices a [`SelectionState`].
    pub fn quote(
        &self,
        selection: &SelectionState,
    ) -> QuoteOutcome {
        match selection.resolve() {
            Some(complete) => QuoteOutcome::Computed(self.calculate(&complete)),
            None => {
                debug!("selection incomplete; no quote");
                QuoteOutcome::Incomplete
            }
        }
    }

    /// Runs every pricing step for a complete selection.
    pub fn calculate(
        &self,
        selection: &CompleteSelection<'_>,
    ) -> QuoteCalculation {
        let extras = self.resolve_extras(selection.model, selection.extra_ids);
        let subtotal = self.subtotal(selection.model.base_price, &extras);
        let print_cost = self.print_cost(subtotal, selection.print_material);
        let lamination_cost = self.lamination_cost(subtotal, selection.lamination_material);
        let white_print_cost =
            self.white_print_cost(selection.print_material, selection.white_print_enabled);
        let total = self.total(subtotal, print_cost, lamination_cost, white_print_cost);

        debug!(
            model = %selection.model.id,
            coverage = %selection.coverage.id,
            extras = extras.len(),
            %subtotal,
            %print_cost,
            %lamination_cost,
            %white_print_cost,
            %total,
            "quote computed"
        );

        QuoteCalculation {
            selected_model: selection.model.clone(),
            selected_coverage: selection.coverage.clone(),
            selected_extras: extras,
            selected_print_material: selection.print_material.clone(),
            selected_lamination_material: selection.lamination_material.clone(),
            white_print_enabled: selection.white_print_enabled,
            subtotal,
            print_cost,
            lamination_cost,
            white_print_cost,
            total,
        }
    }

    /// Extras offered by the model whose id was selected, in model order.
    fn resolve_extras(
        &self,
        model: &VehicleModel,
        extra_ids: &BTreeSet<String>,
    ) -> Vec<ExtraOption> {
        let extras: Vec<ExtraOption> = model
            .extra_options
            .iter()
            .filter(|extra| extra_ids.contains(&extra.id))
            .cloned()
            .collect();

        if extras.len() < extra_ids.len() {
            debug!(
                model = %model.id,
                requested = extra_ids.len(),
                matched = extras.len(),
                "ignoring extra ids not offered by model"
            );
        }
        extras
    }

    fn subtotal(
        &self,
        base_price: Decimal,
        extras: &[ExtraOption],
    ) -> Decimal {
        base_price + extras.iter().map(|extra| extra.price).sum::<Decimal>()
    }

    fn print_cost(
        &self,
        subtotal: Decimal,
        material: &PrintMaterial,
    ) -> Decimal {
        percent_of(subtotal, material.percentage)
    }

    fn lamination_cost(
        &self,
        subtotal: Decimal,
        material: &LaminationMaterial,
    ) -> Decimal {
        match material.calculation_type {
            LaminationCalculationType::Percentage => percent_of(subtotal, material.value),
            LaminationCalculationType::Fixed => material.value,
        }
    }

    fn white_print_cost(
        &self,
        material: &PrintMaterial,
        enabled: bool,
    ) -> Decimal {
        if !enabled {
            return Decimal::ZERO;
        }
        material.white_print_cost().unwrap_or(Decimal::ZERO)
    }

    fn total(
        &self,
        subtotal: Decimal,
        print_cost: Decimal,
        lamination_cost: Decimal,
        white_print_cost: Decimal,
    ) -> Decimal {
        subtotal + print_cost + lamination_cost + white_print_cost
    }
}

/// Convenience wrapper around [`PricingEngine::compute_quote`].
pub fn compute_quote(
    model: Option<&VehicleModel>,
    coverage_id: Option<&str>,
    extra_ids: &BTreeSet<String>,
    print_material: Option<&PrintMaterial>,
    lamination_material: Option<&LaminationMaterial>,
    white_print_enabled: bool,
) -> QuoteOutcome {
    PricingEngine::new().compute_quote(
        model,
        coverage_id,
        extra_ids,
        print_material,
        lamination_material,
        white_print_enabled,
    )
}
