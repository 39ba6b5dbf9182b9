use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitePrintSettings {
    pub additional_cost: Decimal,
}

/// A printable vinyl or substrate.
///
/// `percentage` is the surcharge applied to the quote subtotal, expressed in
/// percent (0 to 100). White print is only offered when `allows_white_print`
/// is set, and only charged when `white_print_settings` carries a cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrintMaterial {
    pub id: String,
    pub name: String,
    pub percentage: Decimal,
    pub allows_white_print: bool,
    pub white_print_settings: Option<WhitePrintSettings>,
}

impl PrintMaterial {
    /// Surcharge for white print on this material, if the material offers it.
    pub fn white_print_cost(&self) -> Option<Decimal> {
        if !self.allows_white_print {
            return None;
        }
        self.white_print_settings
            .as_ref()
            .map(|settings| settings.additional_cost)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LaminationCalculationType {
    Percentage,
    Fixed,
}

impl LaminationCalculationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Percentage => "percentage",
            Self::Fixed => "fixed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "percentage" => Some(Self::Percentage),
            "fixed" => Some(Self::Fixed),
            _ => None,
        }
    }
}

/// A protective overlay. `value` is a percent of the subtotal for
/// [`LaminationCalculationType::Percentage`] and a currency amount for
/// [`LaminationCalculationType::Fixed`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaminationMaterial {
    pub id: String,
    pub name: String,
    pub calculation_type: LaminationCalculationType,
    pub value: Decimal,
}
