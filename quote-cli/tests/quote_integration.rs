//! End-to-end tests: configuration file -> catalog backend -> quote session
//! -> rendered output.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use quote_cli::app::{self, QuoteRequest};
use quote_cli::config::{AppConfig, ConfigError};
use quote_cli::render;
use quote_core::{ModelFilter, RepositoryError};
use rust_decimal_macros::dec;

fn manifest_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

fn fixture(name: &str) -> PathBuf {
    manifest_dir().join("tests").join("fixtures").join(name)
}

fn csv_config() -> AppConfig {
    let mut config = AppConfig::load(Some(fixture("csv_catalog.toml").as_path())).unwrap();
    let source = manifest_dir().join("..").join("quote-data").join("test-data");
    config.apply_overrides(None, Some(source.display().to_string()), None);
    config
}

fn request() -> QuoteRequest {
    QuoteRequest {
        model_id: Some("2".to_string()),
        coverage_id: Some("racing".to_string()),
        extra_ids: vec!["doors".to_string(), "roof".to_string()],
        print_material_id: Some("3".to_string()),
        lamination_material_id: Some("6".to_string()),
        white_print: true,
    }
}

#[test]
fn test_fixture_config_values() {
    let config = AppConfig::load(Some(fixture("csv_catalog.toml").as_path())).unwrap();

    assert_eq!(config.catalog.backend, "csv");
    assert_eq!(config.display.currency, "EUR");
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.file, None);
}

#[test]
fn test_broken_config_is_parse_error() {
    let result = AppConfig::load(Some(fixture("broken.toml").as_path()));

    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[tokio::test]
async fn test_quote_through_csv_backend() {
    let config = csv_config();
    let repo = app::build_registry()
        .create(&config.catalog_config())
        .await
        .expect("csv catalog should load");

    let session = app::build_session(&*repo, &request()).await.unwrap();
    let calc = session.quote().calculation().expect("should be computed");

    // 4500 + 650 + 420 = 5570; print 38% = 2116.6; lamination 28% = 1559.6; white 320
    assert_eq!(calc.subtotal, dec!(5570));
    assert_eq!(calc.print_cost, dec!(2116.6));
    assert_eq!(calc.lamination_cost, dec!(1559.6));
    assert_eq!(calc.white_print_cost, dec!(320));
    assert_eq!(calc.total, dec!(9566.2));

    let text = render::render_quote(session.quote(), &config.display.currency);
    assert!(text.contains("Hexis HX30000 - Premium Cast Vinyl (38%):"));
    assert!(text.contains("+2116.60 EUR"));
    assert!(text.lines().last().unwrap().ends_with("9566.20 EUR"));
}

#[tokio::test]
async fn test_memory_and_csv_backends_agree() {
    let memory = app::build_registry()
        .create(&AppConfig::default().catalog_config())
        .await
        .unwrap();
    let csv = app::build_registry()
        .create(&csv_config().catalog_config())
        .await
        .unwrap();

    let from_memory = app::build_session(&*memory, &request()).await.unwrap();
    let from_csv = app::build_session(&*csv, &request()).await.unwrap();

    assert_eq!(from_memory.quote(), from_csv.quote());
}

#[tokio::test]
async fn test_incomplete_quote_renders_placeholder() {
    let repo = app::build_registry()
        .create(&AppConfig::default().catalog_config())
        .await
        .unwrap();
    let request = QuoteRequest {
        coverage_id: None,
        ..request()
    };

    let session = app::build_session(&*repo, &request).await.unwrap();

    assert_eq!(
        render::render_quote(session.quote(), "RON"),
        render::INCOMPLETE_PLACEHOLDER
    );
}

#[tokio::test]
async fn test_model_search_without_matches() {
    let repo = app::build_registry()
        .create(&AppConfig::default().catalog_config())
        .await
        .unwrap();

    let models = app::find_models(&*repo, &ModelFilter::new().with_search("ducati"))
        .await
        .unwrap();

    assert_eq!(render::render_models(&models, "RON"), render::NO_MODELS_FOUND);
}

#[tokio::test]
async fn test_csv_backend_without_source_is_configuration_error() {
    let mut config = AppConfig::default();
    config.apply_overrides(Some("csv".to_string()), None, None);

    let result = app::build_registry().create(&config.catalog_config()).await;

    assert!(matches!(result, Err(RepositoryError::Configuration(_))));
}

#[tokio::test]
async fn test_unknown_backend_is_configuration_error() {
    let mut config = AppConfig::default();
    config.apply_overrides(Some("postgres".to_string()), None, None);

    let result = app::build_registry().create(&config.catalog_config()).await;

    assert!(matches!(result, Err(RepositoryError::Configuration(_))));
}
