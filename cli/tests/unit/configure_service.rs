//! Config bootstrap: first-run prompting and reuse of an existing file.

use launcher_cli::application::ports::ConfigStore;
use launcher_cli::application::services::configure::ensure_config;
use launcher_cli::domain::{AppConfig, ConfigError};
use launcher_cli::infra::config::JsonConfigStore;
use launcher_cli::output::prompter::TerminalPrompter;
use tempfile::TempDir;

use crate::helpers::{RecordingReporter, ScriptedPrompter};

#[test]
fn first_run_with_all_defaults_writes_pretty_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let prompter = ScriptedPrompter::new(&["", "", "", "", ""]);

    let config = ensure_config(
        &JsonConfigStore,
        &prompter,
        &RecordingReporter::default(),
        &path,
        "/home/op/.minecraft/saves",
    )
    .unwrap();

    assert_eq!(config, AppConfig::with_defaults("/home/op/.minecraft/saves"));
    assert_eq!(
        *prompter.asked.borrow(),
        vec![
            "IPFS API URL:",
            "IPFS Gateway URL:",
            "Ethereum RPC URL:",
            "Minecraft Saves Directory:",
            "Minecraft Shortcut:",
        ]
    );
    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("\n  \"IPFS_API\": \"http://localhost:5001/\""));
    assert!(!written.contains("MINECRAFT_SHORTCUT"));
}

#[test]
fn first_run_keeps_typed_values_and_shortcut() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let prompter = ScriptedPrompter::new(&[
        " http://10.0.0.2:5001/ ",
        "",
        "https://rpc.example/",
        "/srv/saves",
        "/usr/bin/minecraft",
    ]);

    let config = ensure_config(
        &JsonConfigStore,
        &prompter,
        &RecordingReporter::default(),
        &path,
        "",
    )
    .unwrap();

    assert_eq!(config.ipfs_api, "http://10.0.0.2:5001/");
    assert_eq!(config.ipfs_gateway, "http://localhost:8080/");
    assert_eq!(config.ethereum_rpc_url, "https://rpc.example/");
    assert_eq!(config.minecraft_saves_dir, "/srv/saves");
    assert_eq!(config.minecraft_shortcut.as_deref(), Some("/usr/bin/minecraft"));
    assert_eq!(JsonConfigStore.read(&path).unwrap(), config);
}

#[test]
fn empty_required_answer_without_default_is_asked_again() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let prompter = ScriptedPrompter::new(&["", "", "", "", "/saves", "optional"]);
    let reporter = RecordingReporter::default();

    let config = ensure_config(&JsonConfigStore, &prompter, &reporter, &path, "").unwrap();

    assert_eq!(config.minecraft_saves_dir, "/saves");
    assert_eq!(config.minecraft_shortcut, None);
    assert_eq!(prompter.count(), 6);
    assert!(
        reporter
            .warnings()
            .iter()
            .any(|w| w.contains("MINECRAFT_SAVES_DIR"))
    );
}

#[test]
fn existing_config_is_read_without_prompting() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    let existing = AppConfig::with_defaults("/saves");
    JsonConfigStore.write(&path, &existing).unwrap();
    let prompter = ScriptedPrompter::new(&[]);

    let config = ensure_config(
        &JsonConfigStore,
        &prompter,
        &RecordingReporter::default(),
        &path,
        "/other",
    )
    .unwrap();

    assert_eq!(config, existing);
    assert_eq!(prompter.count(), 0);
}

#[test]
fn corrupt_config_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "IPFS_API=http://x").unwrap();

    let err = ensure_config(
        &JsonConfigStore,
        &ScriptedPrompter::new(&[]),
        &RecordingReporter::default(),
        &path,
        "",
    )
    .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::Parse { .. })
    ));
}

#[test]
fn unattended_first_run_without_saves_dir_fails_instead_of_guessing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let err = ensure_config(
        &JsonConfigStore,
        &TerminalPrompter::new(true),
        &RecordingReporter::default(),
        &path,
        "",
    )
    .unwrap_err();

    assert!(err.to_string().contains("Minecraft Saves Directory"), "got: {err:#}");
    assert!(!path.exists());
}

#[test]
fn unattended_first_run_takes_every_default() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");

    let config = ensure_config(
        &JsonConfigStore,
        &TerminalPrompter::new(true),
        &RecordingReporter::default(),
        &path,
        "/home/op/.minecraft/saves",
    )
    .unwrap();

    assert_eq!(config, AppConfig::with_defaults("/home/op/.minecraft/saves"));
    assert!(path.is_file());
}
