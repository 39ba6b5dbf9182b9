use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleCategory {
    Atv,
    Ssv,
    Motorcycle,
}

impl VehicleCategory {
    pub fn all() -> &'static [VehicleCategory] {
        &[Self::Atv, Self::Ssv, Self::Motorcycle]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Atv => "ATV",
            Self::Ssv => "SSV",
            Self::Motorcycle => "MOTO",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Atv => "ATV",
            Self::Ssv => "Side-by-side (SSV)",
            Self::Motorcycle => "Motorcycle",
        }
    }

    /// Parses a category code. Matching ignores case, and the long
    /// `Motorcycle`/`Motocicleta` spellings are accepted for motorcycles.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ATV" => Some(Self::Atv),
            "SSV" => Some(Self::Ssv),
            "MOTO" | "MOTORCYCLE" | "MOTOCICLETA" => Some(Self::Motorcycle),
            _ => None,
        }
    }
}
