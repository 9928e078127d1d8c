//! Tests for the configuration module.

use crate::config::loader::{Delimiter, LoaderConfig};
use crate::config::render::RenderStyle;
use crate::config::{ConfigLoader, LogConfig, Validate, WordTrieConfig};
use crate::error::config::ConfigError;
use crate::tests::TestFixture;
use test_case::test_case;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_config_is_valid() {
    let config = WordTrieConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.loader.delimiter, Delimiter::Whitespace);
    assert_eq!(config.render.style, RenderStyle::Unicode);
}

#[test_case("trace", true)]
#[test_case("info", true)]
#[test_case("error", true)]
#[test_case("verbose", false)]
#[test_case("", false ; "empty level")]
fn test_log_level_validation(level: &str, valid: bool) {
    let log = LogConfig {
        level: level.to_string(),
        ..LogConfig::default()
    };
    assert_eq!(log.validate().is_ok(), valid);
}

#[test]
fn test_zero_max_words_is_rejected() {
    let loader = LoaderConfig {
        max_words: Some(0),
        ..LoaderConfig::default()
    };
    assert!(matches!(
        loader.validate(),
        Err(ConfigError::ValueOutOfRange { .. })
    ));
}

/// Test loading configuration without a file yields defaults.
#[test]
fn test_load_without_file() {
    let loader = ConfigLoader::new(None::<&str>, "TEST_NOFILE");
    let config = loader.load().unwrap();
    assert_eq!(config.loader.max_words, None);
    assert!(config.render.show_payloads);
}

/// Test loading configuration from a file.
#[test]
fn test_load_config_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "config_file_test.toml",
            r#"
            [loader]
            delimiter = "line"
            max_words = 10

            [render]
            style = "ascii"
            "#,
        )
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_FILE").load().unwrap();

    assert_eq!(config.loader.delimiter, Delimiter::Line);
    assert_eq!(config.loader.max_words, Some(10));
    assert_eq!(config.render.style, RenderStyle::Ascii);
    // Other values should be defaults
    assert!(config.render.show_payloads);
    assert_eq!(config.log.level, "warn");
}

/// Test loading configuration from a JSON file.
#[test]
fn test_load_config_from_json() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config.json", r#"{ "render": { "show_payloads": false } }"#)
        .unwrap();

    let config = ConfigLoader::new(Some(&config_path), "TEST_JSON").load().unwrap();
    assert!(!config.render.show_payloads);
}

/// Test environment variables override file values.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("config_env_test.toml", "[render]\nstyle = \"unicode\"\n")
        .unwrap();

    fixture.set_env("TEST_ENV__RENDER__STYLE", "ascii");
    fixture.set_env("TEST_ENV__LOG__LEVEL", "debug");

    let config = ConfigLoader::new(Some(&config_path), "TEST_ENV").load().unwrap();

    assert_eq!(config.render.style, RenderStyle::Ascii);
    assert_eq!(config.log.level, "debug");
}

#[test]
fn test_missing_file() {
    let loader = ConfigLoader::new(Some("/nonexistent/wordtrie.toml"), "TEST_MISSING");
    assert!(matches!(loader.load(), Err(ConfigError::FileNotFound(_))));
}

#[test]
fn test_unsupported_extension() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture.create_file("config.ini", "[loader]\n").unwrap();

    let loader = ConfigLoader::new(Some(&path), "TEST_EXT");
    assert!(matches!(loader.load(), Err(ConfigError::ParseError(_))));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("invalid.toml", "[loader\ndelimiter = line\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&path), "TEST_INVALID");
    assert!(loader.load().is_err());
}

/// Test that validation runs after loading.
#[test]
fn test_load_rejects_invalid_values() {
    let fixture = TestFixture::new().unwrap();
    let path = fixture
        .create_file("bad_level.toml", "[log]\nlevel = \"loud\"\n")
        .unwrap();

    let loader = ConfigLoader::new(Some(&path), "TEST_BAD_LEVEL");
    assert!(matches!(loader.load(), Err(ConfigError::ValidationError(_))));
}

/// The generated default file must load back.
#[test]
fn test_default_config_round_trips_through_toml() {
    let fixture = TestFixture::new().unwrap();
    let toml = toml::to_string_pretty(&WordTrieConfig::default()).unwrap();
    let path = fixture.create_file("generated.toml", toml).unwrap();

    let config = ConfigLoader::new(Some(&path), "TEST_GENERATED").load().unwrap();
    assert_eq!(config.loader.delimiter, Delimiter::Whitespace);
}
