//! The shop's built-in catalog.

use quote_core::{
    Catalog, CoverageType, ExtraOption, LaminationCalculationType, LaminationMaterial,
    PrintMaterial, VehicleCategory, VehicleModel, WhitePrintSettings,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn coverage(
    id: &str,
    name: &str,
    description: &str,
) -> CoverageType {
    CoverageType {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
    }
}

fn extra(
    id: &str,
    name: &str,
    price: Decimal,
) -> ExtraOption {
    ExtraOption {
        id: id.to_string(),
        name: name.to_string(),
        price,
    }
}

fn print(
    id: &str,
    name: &str,
    percentage: Decimal,
    white_print_cost: Option<Decimal>,
) -> PrintMaterial {
    PrintMaterial {
        id: id.to_string(),
        name: name.to_string(),
        percentage,
        allows_white_print: white_print_cost.is_some(),
        white_print_settings: white_print_cost
            .map(|additional_cost| WhitePrintSettings { additional_cost }),
    }
}

fn lamination(
    id: &str,
    name: &str,
    calculation_type: LaminationCalculationType,
    value: Decimal,
) -> LaminationMaterial {
    LaminationMaterial {
        id: id.to_string(),
        name: name.to_string(),
        calculation_type,
        value,
    }
}

pub fn models() -> Vec<VehicleModel> {
    vec![
        VehicleModel {
            id: "1".to_string(),
            name: "Yamaha YFZ450R".to_string(),
            category: VehicleCategory::Atv,
            years: "2020-2024".to_string(),
            base_price: dec!(3200),
            coverage_types: vec![
                coverage("full", "Full coverage", "Complete vehicle protection"),
                coverage("partial", "Partial coverage", "Protection for the main areas"),
                coverage("sport", "Sport coverage", "Sport design with aggressive graphics"),
            ],
            extra_options: vec![
                extra("fenders", "Fenders", dec!(280)),
                extra("tank", "Tank", dec!(320)),
                extra("plastics", "Side plastics", dec!(450)),
            ],
        },
        VehicleModel {
            id: "2".to_string(),
            name: "Can-Am Maverick X3".to_string(),
            category: VehicleCategory::Ssv,
            years: "2021-2024".to_string(),
            base_price: dec!(4500),
            coverage_types: vec![
                coverage("full", "Full coverage", "Complete vehicle protection"),
                coverage("partial", "Partial coverage", "Protection for the main areas"),
                coverage("racing", "Racing coverage", "Competition design"),
            ],
            extra_options: vec![
                extra("doors", "Doors", dec!(650)),
                extra("hood", "Hood", dec!(380)),
                extra("roof", "Roof", dec!(420)),
                extra("bumpers", "Bumpers", dec!(290)),
            ],
        },
        VehicleModel {
            id: "3".to_string(),
            name: "Honda CRF450R".to_string(),
            category: VehicleCategory::Motorcycle,
            years: "2019-2024".to_string(),
            base_price: dec!(2800),
            coverage_types: vec![
                coverage("full", "Full coverage", "Complete vehicle protection"),
                coverage("minimal", "Minimal coverage", "Essential parts only"),
                coverage("custom", "Custom coverage", "Unique custom design"),
            ],
            extra_options: vec![
                extra("tank", "Tank", dec!(250)),
                extra("fender", "Front fender", dec!(180)),
                extra("shrouds", "Radiator shrouds", dec!(320)),
                extra("airbox", "Airbox cover", dec!(150)),
            ],
        },
    ]
}

pub fn print_materials() -> Vec<PrintMaterial> {
    vec![
        print("1", "3M IJ180Cv3 - Premium Cast Vinyl", dec!(35), None),
        print("2", "Avery Dennison MPI 1105 - Cast Vinyl", dec!(32), Some(dec!(280))),
        print("3", "Hexis HX30000 - Premium Cast Vinyl", dec!(38), Some(dec!(320))),
        print("4", "Oracal 3651 - Calendered Vinyl", dec!(22), None),
        print("5", "Arlon DPF 4500LX - Textured Vinyl", dec!(42), Some(dec!(380))),
    ]
}

pub fn lamination_materials() -> Vec<LaminationMaterial> {
    use LaminationCalculationType::{Fixed, Percentage};

    vec![
        lamination("1", "3M 8518 - Gloss Laminate", Percentage, dec!(18)),
        lamination("2", "3M 8519 - Matte Laminate", Percentage, dec!(20)),
        lamination("3", "Avery DOL 1460Z - Textured Laminate", Fixed, dec!(680)),
        lamination("4", "Oracal 290 - Standard Laminate", Fixed, dec!(450)),
        lamination("5", "Hexis BODYFENCE - Protective Laminate", Fixed, dec!(680)),
        lamination("6", "Arlon SLX+ - Premium Laminate", Percentage, dec!(28)),
    ]
}

pub fn catalog() -> Catalog {
    Catalog {
        models: models(),
        print_materials: print_materials(),
        lamination_materials: lamination_materials(),
    }
}
