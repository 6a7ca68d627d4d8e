use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};

use dinescore_cli::commands::rate::{self, RateOptions};
use dinescore_cli::load_config;
use dinescore_core::config::{AppConfig, ConfigOverrides, LogFormat};
use serde_json::Value;
use tempfile::TempDir;

const REVIEWS: &str = "Bistro Azul.Comida incrível. Atendimento ruim.\n\
                       Cantina Roma.O prato estava incrível, o garçom foi incrível.\n\
                       Bistro Azul.Voltaria sempre.\n";

#[test]
fn rates_restaurant_from_quality_question() {
    with_reviews(|path| {
        let result = rate::run(&options("Quão bom é o restaurante Cantina Roma?"), &config(path));

        assert_eq!(result.exit_code, 0, "expected successful rating");
        assert_eq!(result.output, "A avaliação média do Cantina Roma é 10.000.");
    });
}

#[test]
fn rates_restaurant_from_average_question() {
    with_reviews(|path| {
        let result =
            rate::run(&options("qual é a avaliação média do Bistro Azul?"), &config(path));

        assert_eq!(result.exit_code, 0, "expected successful rating");
        assert!(result.output.starts_with("A avaliação média do Bistro Azul é "));
        assert!(result.output.ends_with('.'));
    });
}

#[test]
fn unidentified_name_prints_user_message() {
    with_reviews(|path| {
        let result = rate::run(&options("Me recomende um restaurante"), &config(path));

        assert_eq!(result.exit_code, 1);
        assert_eq!(result.output, "Nome do restaurante não identificado na consulta.");
    });
}

#[test]
fn unknown_restaurant_prints_user_message() {
    with_reviews(|path| {
        let result = rate::run(&options("Quão bom é o restaurante Casa Nova?"), &config(path));

        assert_eq!(result.exit_code, 1);
        assert_eq!(result.output, "Restaurante Casa Nova não encontrado.");
    });
}

#[test]
fn missing_review_file_prints_user_message() {
    let result = rate::run(
        &options("Quão bom é o restaurante Bistro Azul?"),
        &config(Path::new("does/not/exist/restaurantes.txt")),
    );

    assert_eq!(result.exit_code, 1);
    assert_eq!(result.output, "Arquivo restaurantes.txt não encontrado.");
}

#[test]
fn json_output_carries_status_and_error_class() {
    with_reviews(|path| {
        let json = RateOptions { json: true, ..options("Quão bom é o restaurante Cantina Roma?") };
        let payload = parse_payload(&rate::run(&json, &config(path)).output);
        assert_eq!(payload["command"], "rate");
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["message"], "A avaliação média do Cantina Roma é 10.000.");

        let json = RateOptions { json: true, ..options("Quão bom é o restaurante Casa Nova?") };
        let result = rate::run(&json, &config(path));
        assert_eq!(result.exit_code, 1);
        let payload = parse_payload(&result.output);
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "not_found");
    });
}

#[test]
fn tool_replay_does_not_change_printed_result() {
    with_reviews(|path| {
        let direct = rate::run(&options("Quão bom é o restaurante Bistro Azul?"), &config(path));
        let replayed = rate::run(
            &RateOptions { via_tools: true, ..options("Quão bom é o restaurante Bistro Azul?") },
            &config(path),
        );

        assert_eq!(direct.exit_code, replayed.exit_code);
        assert_eq!(direct.output, replayed.output);
    });
}

#[test]
fn review_file_edits_are_visible_to_next_query() {
    with_reviews(|path| {
        let query = options("Quão bom é o restaurante Casa Nova?");
        assert_eq!(rate::run(&query, &config(path)).exit_code, 1);

        let mut contents = REVIEWS.to_string();
        contents.push_str("Casa Nova.A comida é boa\n");
        fs::write(path, contents).expect("reviews should be writable");

        let result = rate::run(&query, &config(path));
        assert_eq!(result.exit_code, 0);
        assert!(result.output.starts_with("A avaliação média do Casa Nova é "));
    });
}

#[test]
fn reviews_flag_overrides_environment() {
    with_env(&[("DINESCORE_REVIEWS_PATH", "from-env.txt")], || {
        let from_env = load_config(None, ConfigOverrides::default()).expect("config should load");
        assert_eq!(from_env.reviews.path, PathBuf::from("from-env.txt"));

        let flags = ConfigOverrides {
            reviews_path: Some(PathBuf::from("from-flag.txt")),
            ..ConfigOverrides::default()
        };
        let from_flag = load_config(None, flags).expect("config should load");
        assert_eq!(from_flag.reviews.path, PathBuf::from("from-flag.txt"));
    });
}

#[test]
fn invalid_log_level_fails_config_load() {
    with_env(&[("DINESCORE_LOGGING_LEVEL", "chatty")], || {
        let error =
            load_config(None, ConfigOverrides::default()).expect_err("invalid level should fail");
        assert!(error.to_string().contains("logging.level"));
    });
}

#[test]
fn log_flags_override_environment() {
    with_env(&[("DINESCORE_LOGGING_LEVEL", "error"), ("DINESCORE_LOG_FORMAT", "pretty")], || {
        let from_env = load_config(None, ConfigOverrides::default()).expect("config should load");
        assert_eq!(from_env.logging.level, "error");
        assert_eq!(from_env.logging.format, LogFormat::Pretty);

        let flags = ConfigOverrides {
            log_level: Some("debug".to_string()),
            log_format: Some(LogFormat::Json),
            ..ConfigOverrides::default()
        };
        let from_flags = load_config(None, flags).expect("config should load");
        assert_eq!(from_flags.logging.level, "debug");
        assert_eq!(from_flags.logging.format, LogFormat::Json);
    });
}

#[test]
fn explicit_missing_config_file_fails_load() {
    with_env(&[], || {
        let missing = Some(PathBuf::from("does/not/exist/dinescore.toml"));
        let error = load_config(missing, ConfigOverrides::default())
            .expect_err("explicit config path must exist");
        assert!(error.to_string().contains("required config file was not found"));
    });
}

fn options(query: &str) -> RateOptions {
    RateOptions { query: query.to_string(), ..RateOptions::default() }
}

fn config(path: &Path) -> AppConfig {
    let mut config = AppConfig::default();
    config.reviews.path = path.to_path_buf();
    config
}

fn with_reviews(test_fn: impl FnOnce(&Path)) {
    let dir = TempDir::new().expect("temp dir should be created");
    let path = dir.path().join("restaurantes.txt");
    fs::write(&path, REVIEWS).expect("reviews should be writable");
    test_fn(&path);
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "DINESCORE_REVIEWS_PATH",
        "DINESCORE_LOGGING_LEVEL",
        "DINESCORE_LOGGING_FORMAT",
        "DINESCORE_LOG_LEVEL",
        "DINESCORE_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
