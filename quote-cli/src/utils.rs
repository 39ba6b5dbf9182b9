use quote_core::calculations::common::round_half_up;
use quote_core::{LaminationCalculationType, LaminationMaterial, PrintMaterial};
use rust_decimal::Decimal;

/// Formats an amount rounded half-up to two decimals, followed by the
/// currency label (e.g. `"5273.60 RON"`).
pub fn format_amount(
    value: Decimal,
    currency: &str,
) -> String {
    format!("{} {currency}", round_half_up(value))
}

/// Same as [`format_amount`] with a leading `+`, for add-on line items.
pub fn format_surcharge(
    value: Decimal,
    currency: &str,
) -> String {
    format!("+{}", format_amount(value, currency))
}

/// Formats a rate without trailing zeros (e.g. `"35%"`, `"12.5%"`).
pub fn format_rate(rate: Decimal) -> String {
    format!("{}%", rate.normalize())
}

/// `"name (35%)"`
pub fn print_material_label(material: &PrintMaterial) -> String {
    format!("{} ({})", material.name, format_rate(material.percentage))
}

/// `"name (18%)"` for percentage laminates, `"name (680 RON)"` for fixed ones.
pub fn lamination_material_label(
    material: &LaminationMaterial,
    currency: &str,
) -> String {
    match material.calculation_type {
        LaminationCalculationType::Percentage => {
            format!("{} ({})", material.name, format_rate(material.value))
        }
        LaminationCalculationType::Fixed => {
            format!("{} ({} {currency})", material.name, material.value.normalize())
        }
    }
}
