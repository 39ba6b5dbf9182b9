use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use quote_core::catalog::{CatalogConfig, CatalogFactory};
use quote_data::{CatalogLoader, CsvCatalogFactory};
use tracing_subscriber::EnvFilter;

/// Check a directory of catalog CSV files and print what it contains.
///
/// The directory must hold:
/// - models.csv: id, name, category, years, base_price
/// - coverage_types.csv: model_id, id, name, description
/// - extra_options.csv: model_id, id, name, price
/// - print_materials.csv: id, name, percentage, allows_white_print, white_print_cost
/// - lamination_materials.csv: id, name, calculation_type, value
#[derive(Parser, Debug)]
#[command(name = "catalog-loader")]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing the catalog CSV files
    #[arg(short, long)]
    dir: PathBuf,

    /// List every record instead of only the counts
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let args = Args::parse();

    println!("Reading catalog from: {}", args.dir.display());

    let records = CatalogLoader::read_dir(&args.dir)
        .with_context(|| format!("Failed to read CSV files in: {}", args.dir.display()))?;

    println!(
        "Parsed {} models, {} coverage types, {} extras, {} print materials, {} lamination materials",
        records.models.len(),
        records.coverage_types.len(),
        records.extra_options.len(),
        records.print_materials.len(),
        records.lamination_materials.len(),
    );

    let catalog = CatalogLoader::assemble(records).context("Catalog failed validation")?;

    if args.verbose {
        for model in &catalog.models {
            println!(
                "  [{}] {} {} ({}) base {} | {} coverage types, {} extras",
                model.id,
                model.category.as_str(),
                model.name,
                model.years,
                model.base_price,
                model.coverage_types.len(),
                model.extra_options.len(),
            );
        }
        for material in &catalog.print_materials {
            println!(
                "  print [{}] {} {}%{}",
                material.id,
                material.name,
                material.percentage,
                material
                    .white_print_cost()
                    .map(|cost| format!(", white print {cost}"))
                    .unwrap_or_default(),
            );
        }
        for material in &catalog.lamination_materials {
            println!(
                "  lamination [{}] {} {} {}",
                material.id,
                material.name,
                material.calculation_type.as_str(),
                material.value,
            );
        }
    }

    // Same path the application takes when started with `--backend csv`.
    let config = CatalogConfig {
        backend: CsvCatalogFactory.backend_name().to_string(),
        source: Some(args.dir.display().to_string()),
    };
    CsvCatalogFactory
        .create(&config)
        .await
        .context("CSV backend rejected the catalog")?;

    println!("Catalog is valid.");

    Ok(())
}
