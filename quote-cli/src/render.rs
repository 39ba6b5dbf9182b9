//! Plain-text rendering of catalogs and quotes.

use quote_core::{LaminationMaterial, PrintMaterial, QuoteCalculation, QuoteOutcome, VehicleModel};
use rust_decimal::Decimal;

use crate::utils::{
    format_amount, format_surcharge, lamination_material_label, print_material_label,
};

pub const INCOMPLETE_PLACEHOLDER: &str =
    "Select a model, coverage, and materials to calculate the quote";

pub const NO_MODELS_FOUND: &str = "No models found";

/// One labelled amount in a quote summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub label: String,
    pub amount: String,
}

impl LineItem {
    fn new(
        label: impl Into<String>,
        amount: String,
    ) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// The quote's line items in display order: base price, extras, subtotal,
/// print, lamination, white print (only when charged) and total.
pub fn quote_lines(
    calc: &QuoteCalculation,
    currency: &str,
) -> Vec<LineItem> {
    let mut lines = vec![LineItem::new(
        "Base price",
        format_amount(calc.selected_model.base_price, currency),
    )];

    for extra in &calc.selected_extras {
        lines.push(LineItem::new(
            extra.name.as_str(),
            format_surcharge(extra.price, currency),
        ));
    }

    lines.push(LineItem::new(
        "Subtotal",
        format_amount(calc.subtotal, currency),
    ));
    lines.push(LineItem::new(
        print_material_label(&calc.selected_print_material),
        format_surcharge(calc.print_cost, currency),
    ));
    lines.push(LineItem::new(
        lamination_material_label(&calc.selected_lamination_material, currency),
        format_surcharge(calc.lamination_cost, currency),
    ));

    if calc.white_print_enabled && calc.white_print_cost > Decimal::ZERO {
        lines.push(LineItem::new(
            "White print",
            format_surcharge(calc.white_print_cost, currency),
        ));
    }

    lines.push(LineItem::new("Total", format_amount(calc.total, currency)));
    lines
}

/// Renders a quote summary, or the placeholder when the selection is
/// incomplete.
pub fn render_quote(
    outcome: &QuoteOutcome,
    currency: &str,
) -> String {
    let Some(calc) = outcome.calculation() else {
        return INCOMPLETE_PLACEHOLDER.to_string();
    };

    let lines = quote_lines(calc, currency);
    let label_width = lines.iter().map(|l| l.label.chars().count()).max().unwrap_or(0) + 1;
    let amount_width = lines.iter().map(|l| l.amount.len()).max().unwrap_or(0);

    let mut out = vec![
        calc.selected_model.name.clone(),
        format!("{} | {}", calc.selected_coverage.name, calc.selected_model.years),
        String::new(),
    ];
    for line in &lines {
        if line.label == "Subtotal" || line.label == "Total" {
            out.push("-".repeat(label_width + amount_width + 1));
        }
        out.push(format!(
            "{:<label_width$} {:>amount_width$}",
            format!("{}:", line.label),
            line.amount,
        ));
    }
    out.join("\n")
}

pub fn render_models(
    models: &[VehicleModel],
    currency: &str,
) -> String {
    if models.is_empty() {
        return NO_MODELS_FOUND.to_string();
    }

    let mut out = Vec::new();
    for model in models {
        out.push(format!(
            "[{}] {} ({}, {}) {}",
            model.id,
            model.name,
            model.category.label(),
            model.years,
            format_amount(model.base_price, currency),
        ));
        for coverage in &model.coverage_types {
            out.push(format!(
                "    coverage {:<10} {}: {}",
                coverage.id, coverage.name, coverage.description
            ));
        }
        for extra in &model.extra_options {
            out.push(format!(
                "    extra    {:<10} {} {}",
                extra.id,
                extra.name,
                format_surcharge(extra.price, currency),
            ));
        }
    }
    out.join("\n")
}

pub fn render_print_materials(
    materials: &[PrintMaterial],
    currency: &str,
) -> String {
    materials
        .iter()
        .map(|material| {
            let label = format!("[{}] {}", material.id, print_material_label(material));
            match material.white_print_cost() {
                Some(cost) => format!(
                    "{label}, white print {}",
                    format_surcharge(cost, currency)
                ),
                None => label,
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_lamination_materials(
    materials: &[LaminationMaterial],
    currency: &str,
) -> String {
    materials
        .iter()
        .map(|material| {
            format!(
                "[{}] {}",
                material.id,
                lamination_material_label(material, currency)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
