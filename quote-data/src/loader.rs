use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use quote_core::{
    Catalog, CatalogValidationError, CoverageType, ExtraOption, LaminationCalculationType,
    LaminationMaterial, PrintMaterial, VehicleCategory, VehicleModel, WhitePrintSettings,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

pub const MODELS_FILE: &str = "models.csv";
pub const COVERAGE_TYPES_FILE: &str = "coverage_types.csv";
pub const EXTRA_OPTIONS_FILE: &str = "extra_options.csv";
pub const PRINT_MATERIALS_FILE: &str = "print_materials.csv";
pub const LAMINATION_MATERIALS_FILE: &str = "lamination_materials.csv";

/// Errors that can occur when loading catalog data.
///
/// Row numbers are 1-based data rows (the header is row 0).
#[derive(Debug, Error)]
pub enum CatalogLoaderError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error in {file}: {message}")]
    CsvParse { file: &'static str, message: String },

    #[error("{file} row {row}: unknown vehicle category '{value}'")]
    InvalidCategory {
        file: &'static str,
        row: usize,
        value: String,
    },

    #[error("{file} row {row}: unknown calculation type '{value}' (expected percentage or fixed)")]
    InvalidCalculationType {
        file: &'static str,
        row: usize,
        value: String,
    },

    #[error("{file} row {row}: model '{model_id}' is not defined in {MODELS_FILE}")]
    UnknownModel {
        file: &'static str,
        row: usize,
        model_id: String,
    },

    #[error("{file} row {row}: {source}")]
    Validation {
        file: &'static str,
        row: usize,
        #[source]
        source: CatalogValidationError,
    },
}

/// A row of `models.csv`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ModelRecord {
    pub id: String,
    pub name: String,
    pub category: String,
    pub years: String,
    pub base_price: Decimal,
}

/// A row of `coverage_types.csv`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CoverageRecord {
    pub model_id: String,
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// A row of `extra_options.csv`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExtraRecord {
    pub model_id: String,
    pub id: String,
    pub name: String,
    pub price: Decimal,
}

/// A row of `print_materials.csv`. An empty `white_print_cost` means the
/// material has no white print settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PrintMaterialRecord {
    pub id: String,
    pub name: String,
    pub percentage: Decimal,
    #[serde(deserialize_with = "deserialize_flag")]
    pub allows_white_print: bool,
    #[serde(default, deserialize_with = "deserialize_optional_decimal")]
    pub white_print_cost: Option<Decimal>,
}

/// A row of `lamination_materials.csv`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LaminationRecord {
    pub id: String,
    pub name: String,
    pub calculation_type: String,
    pub value: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" | "" => Ok(false),
        other => Err(serde::de::Error::custom(format!(
            "invalid flag '{other}' (expected true or false)"
        ))),
    }
}

/// The five raw record sets that make up a catalog directory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogRecords {
    pub models: Vec<ModelRecord>,
    pub coverage_types: Vec<CoverageRecord>,
    pub extra_options: Vec<ExtraRecord>,
    pub print_materials: Vec<PrintMaterialRecord>,
    pub lamination_materials: Vec<LaminationRecord>,
}

/// Loader for catalog data held in CSV files.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Parse every record from a headed CSV reader. Whitespace around values
    /// is trimmed and column order does not matter.
    pub fn parse<T, R>(
        file: &'static str,
        reader: R,
    ) -> Result<Vec<T>, CatalogLoaderError>
    where
        T: DeserializeOwned,
        R: Read,
    {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        csv_reader
            .deserialize()
            .map(|result| {
                result.map_err(|e| CatalogLoaderError::CsvParse {
                    file,
                    message: e.to_string(),
                })
            })
            .collect()
    }

    /// Read the five catalog files from `dir`.
    pub fn read_dir(dir: &Path) -> Result<CatalogRecords, CatalogLoaderError> {
        Ok(CatalogRecords {
            models: Self::parse_file(dir, MODELS_FILE)?,
            coverage_types: Self::parse_file(dir, COVERAGE_TYPES_FILE)?,
            extra_options: Self::parse_file(dir, EXTRA_OPTIONS_FILE)?,
            print_materials: Self::parse_file(dir, PRINT_MATERIALS_FILE)?,
            lamination_materials: Self::parse_file(dir, LAMINATION_MATERIALS_FILE)?,
        })
    }

    /// Read, assemble, and validate the catalog stored in `dir`.
    pub fn load_dir(dir: &Path) -> Result<Catalog, CatalogLoaderError> {
        let records = Self::read_dir(dir)?;
        let catalog = Self::assemble(records)?;
        info!(
            dir = %dir.display(),
            models = catalog.models.len(),
            print_materials = catalog.print_materials.len(),
            lamination_materials = catalog.lamination_materials.len(),
            "catalog loaded from CSV"
        );
        Ok(catalog)
    }

    fn parse_file<T: DeserializeOwned>(
        dir: &Path,
        file: &'static str,
    ) -> Result<Vec<T>, CatalogLoaderError> {
        let path = dir.join(file);
        let reader = File::open(&path).map_err(|source| CatalogLoaderError::Io { path, source })?;
        Self::parse(file, reader)
    }

    /// Build a validated [`Catalog`] from raw records.
    ///
    /// Coverage types and extras attach to their model in file order. Each
    /// row is validated as it is added, so a rejected record is reported
    /// with its file and row.
    pub fn assemble(records: CatalogRecords) -> Result<Catalog, CatalogLoaderError> {
        let mut models: Vec<VehicleModel> = Vec::with_capacity(records.models.len());
        let mut index: HashMap<String, usize> = HashMap::new();
        for (idx, record) in records.models.into_iter().enumerate() {
            let row = idx + 1;
            let model = model_from_record(record, row)?;
            if index.contains_key(&model.id) {
                return Err(duplicate(MODELS_FILE, row, "model", &model.id));
            }
            index.insert(model.id.clone(), models.len());
            models.push(model);
        }

        for (idx, record) in records.coverage_types.into_iter().enumerate() {
            let row = idx + 1;
            let pos = model_position(&index, COVERAGE_TYPES_FILE, row, &record.model_id)?;
            let model = &mut models[pos];
            model.coverage_types.push(CoverageType {
                id: record.id,
                name: record.name,
                description: record.description,
            });
            // Earlier rows already passed, so any failure is this row's.
            model
                .validate()
                .map_err(|source| invalid(COVERAGE_TYPES_FILE, row, source))?;
        }

        for (idx, record) in records.extra_options.into_iter().enumerate() {
            let row = idx + 1;
            let pos = model_position(&index, EXTRA_OPTIONS_FILE, row, &record.model_id)?;
            let model = &mut models[pos];
            model.extra_options.push(ExtraOption {
                id: record.id,
                name: record.name,
                price: record.price,
            });
            model
                .validate()
                .map_err(|source| invalid(EXTRA_OPTIONS_FILE, row, source))?;
        }

        let mut print_materials: Vec<PrintMaterial> =
            Vec::with_capacity(records.print_materials.len());
        for (idx, record) in records.print_materials.into_iter().enumerate() {
            let row = idx + 1;
            let material = print_material_from_record(record, row)?;
            if print_materials.iter().any(|m| m.id == material.id) {
                return Err(duplicate(PRINT_MATERIALS_FILE, row, "print material", &material.id));
            }
            print_materials.push(material);
        }

        let mut lamination_materials: Vec<LaminationMaterial> =
            Vec::with_capacity(records.lamination_materials.len());
        for (idx, record) in records.lamination_materials.into_iter().enumerate() {
            let row = idx + 1;
            let material = lamination_from_record(record, row)?;
            if lamination_materials.iter().any(|m| m.id == material.id) {
                return Err(duplicate(
                    LAMINATION_MATERIALS_FILE,
                    row,
                    "lamination material",
                    &material.id,
                ));
            }
            lamination_materials.push(material);
        }

        Ok(Catalog {
            models,
            print_materials,
            lamination_materials,
        })
    }
}

fn invalid(
    file: &'static str,
    row: usize,
    source: CatalogValidationError,
) -> CatalogLoaderError {
    CatalogLoaderError::Validation { file, row, source }
}

fn duplicate(
    file: &'static str,
    row: usize,
    kind: &'static str,
    id: &str,
) -> CatalogLoaderError {
    invalid(
        file,
        row,
        CatalogValidationError::DuplicateId {
            kind,
            id: id.to_string(),
        },
    )
}

fn model_position(
    index: &HashMap<String, usize>,
    file: &'static str,
    row: usize,
    model_id: &str,
) -> Result<usize, CatalogLoaderError> {
    index
        .get(model_id)
        .copied()
        .ok_or_else(|| CatalogLoaderError::UnknownModel {
            file,
            row,
            model_id: model_id.to_string(),
        })
}

fn model_from_record(
    record: ModelRecord,
    row: usize,
) -> Result<VehicleModel, CatalogLoaderError> {
    let category = VehicleCategory::parse(&record.category).ok_or_else(|| {
        CatalogLoaderError::InvalidCategory {
            file: MODELS_FILE,
            row,
            value: record.category.clone(),
        }
    })?;

    let model = VehicleModel {
        id: record.id,
        name: record.name,
        category,
        years: record.years,
        base_price: record.base_price,
        coverage_types: Vec::new(),
        extra_options: Vec::new(),
    };
    model
        .validate()
        .map_err(|source| invalid(MODELS_FILE, row, source))?;
    Ok(model)
}

fn print_material_from_record(
    record: PrintMaterialRecord,
    row: usize,
) -> Result<PrintMaterial, CatalogLoaderError> {
    let material = PrintMaterial {
        id: record.id,
        name: record.name,
        percentage: record.percentage,
        allows_white_print: record.allows_white_print,
        white_print_settings: record
            .white_print_cost
            .map(|additional_cost| WhitePrintSettings { additional_cost }),
    };
    material
        .validate()
        .map_err(|source| invalid(PRINT_MATERIALS_FILE, row, source))?;
    Ok(material)
}

fn lamination_from_record(
    record: LaminationRecord,
    row: usize,
) -> Result<LaminationMaterial, CatalogLoaderError> {
    let calculation_type =
        LaminationCalculationType::parse(&record.calculation_type).ok_or_else(|| {
            CatalogLoaderError::InvalidCalculationType {
                file: LAMINATION_MATERIALS_FILE,
                row,
                value: record.calculation_type.clone(),
            }
        })?;

    let material = LaminationMaterial {
        id: record.id,
        name: record.name,
        calculation_type,
        value: record.value,
    };
    material
        .validate()
        .map_err(|source| invalid(LAMINATION_MATERIALS_FILE, row, source))?;
    Ok(material)
}
