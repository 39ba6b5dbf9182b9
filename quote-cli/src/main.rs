use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use quote_core::{ModelFilter, VehicleCategory};
use tracing::{debug, warn};

use quote_cli::app::{self, QuoteRequest};
use quote_cli::config::AppConfig;
use quote_cli::{logging, render};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Price estimator for vehicle wrap graphics.
///
/// Loads the configured catalog, then lists models or materials, or prices
/// a selection of model, coverage, extras and materials.
#[derive(Debug, Parser)]
#[command(name = "QuoteEstimator", version)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Catalog backend ("memory" or "csv"). Overrides the config file.
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Backend source, e.g. the CSV catalog directory.
    #[arg(long, global = true)]
    source: Option<String>,

    /// Log level or filter directive. Overrides the config file.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Do not print log records to the console.
    #[arg(short, long, global = true, default_value_t = false)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List vehicle models.
    Models {
        /// Case-insensitive text to look for in model names.
        #[arg(long, default_value = "")]
        search: String,

        /// Only models of this category (ATV, SSV, MOTO).
        #[arg(long, value_parser = parse_category)]
        category: Option<VehicleCategory>,
    },

    /// List print and lamination materials.
    Materials {
        /// Only one kind of material.
        #[arg(long, value_enum)]
        kind: Option<MaterialKind>,
    },

    /// Price a selection.
    Quote {
        #[arg(long)]
        model: Option<String>,

        #[arg(long)]
        coverage: Option<String>,

        /// Extra option id; repeat for several.
        #[arg(long = "extra")]
        extras: Vec<String>,

        /// Print material id.
        #[arg(long)]
        print: Option<String>,

        /// Lamination material id.
        #[arg(long)]
        lamination: Option<String>,

        /// Add white print when the print material offers it.
        #[arg(long, default_value_t = false)]
        white_print: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MaterialKind {
    Print,
    Lamination,
}

fn parse_category(s: &str) -> Result<VehicleCategory, String> {
    VehicleCategory::parse(s).ok_or_else(|| format!("unknown category '{s}' (expected ATV, SSV or MOTO)"))
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(cli.log_level.as_deref().unwrap_or("info"));
    if cli.quiet {
        logging::set_console_enabled(false)?;
    }

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_overrides(cli.backend, cli.source, cli.log_level);

    if std::env::var_os("RUST_LOG").is_none() {
        logging::set_log_level(&config.logging.level)?;
    }
    if let Some(path) = &config.logging.file {
        logging::enable_file_logging(path)?;
    }

    let catalog_config = config.catalog_config();
    debug!(backend = %catalog_config.backend, "opening catalog");
    let registry = app::build_registry();
    let repo = registry
        .create(&catalog_config)
        .await
        .with_context(|| format!("Failed to open the '{}' catalog", catalog_config.backend))?;

    let currency = config.display.currency.as_str();

    match cli.command {
        Command::Models { search, category } => {
            let filter = ModelFilter { search, category };
            let models = app::find_models(&*repo, &filter).await?;
            println!("{}", render::render_models(&models, currency));
        }
        Command::Materials { kind } => {
            if !matches!(kind, Some(MaterialKind::Lamination)) {
                let materials = repo.list_print_materials().await?;
                println!("Print materials:");
                println!("{}", render::render_print_materials(&materials, currency));
            }
            if !matches!(kind, Some(MaterialKind::Print)) {
                let materials = repo.list_lamination_materials().await?;
                println!("Lamination materials:");
                println!("{}", render::render_lamination_materials(&materials, currency));
            }
        }
        Command::Quote {
            model,
            coverage,
            extras,
            print,
            lamination,
            white_print,
        } => {
            let request = QuoteRequest {
                model_id: model,
                coverage_id: coverage,
                extra_ids: extras,
                print_material_id: print,
                lamination_material_id: lamination,
                white_print,
            };
            let session = app::build_session(&*repo, &request).await?;
            if session.quote().is_incomplete() {
                warn!("selection incomplete");
            }
            println!("{}", render::render_quote(session.quote(), currency));
        }
    }

    Ok(())
}
