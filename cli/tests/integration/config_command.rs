//! `launcher config` against a temp install root.

use predicates::prelude::*;
use tempfile::TempDir;

use crate::launcher;

fn config_file(root: &TempDir) -> std::path::PathBuf {
    root.path().join("world-hash-release").join("config.json")
}

#[test]
fn test_config_show_without_file_fails() {
    let root = TempDir::new().unwrap();
    launcher(&root)
        .args(["config", "show"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No configuration"));
}

#[test]
fn test_config_set_creates_file_and_show_lists_it() {
    let root = TempDir::new().unwrap();
    launcher(&root)
        .args(["config", "set", "ipfs_api", "http://10.0.0.2:5001/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set IPFS_API = http://10.0.0.2:5001/"));

    let written = std::fs::read_to_string(config_file(&root)).unwrap();
    assert!(written.contains("\"IPFS_API\": \"http://10.0.0.2:5001/\""));
    assert!(written.contains("\"IPFS_GATEWAY\": \"http://localhost:8080/\""));

    launcher(&root)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://10.0.0.2:5001/"))
        .stdout(predicate::str::contains("MINECRAFT_SHORTCUT:  (unset)"));
}

#[test]
fn test_config_set_and_unset_shortcut() {
    let root = TempDir::new().unwrap();
    launcher(&root)
        .args(["config", "set", "MINECRAFT_SHORTCUT", "/usr/bin/minecraft"])
        .assert()
        .success();
    assert!(
        std::fs::read_to_string(config_file(&root))
            .unwrap()
            .contains("/usr/bin/minecraft")
    );

    launcher(&root)
        .args(["config", "unset", "minecraft_shortcut"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Unset MINECRAFT_SHORTCUT"));
    assert!(
        !std::fs::read_to_string(config_file(&root))
            .unwrap()
            .contains("MINECRAFT_SHORTCUT")
    );
}

#[test]
fn test_config_unset_required_key_fails() {
    let root = TempDir::new().unwrap();
    launcher(&root)
        .args(["config", "unset", "IPFS_API"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IPFS_API is required"));
    assert!(!config_file(&root).exists());
}

#[test]
fn test_config_set_unknown_key_lists_valid_keys() {
    let root = TempDir::new().unwrap();
    launcher(&root)
        .args(["config", "set", "IPFS_APU", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown setting: IPFS_APU"))
        .stderr(predicate::str::contains("ETHEREUM_RPC_URL"));
}

#[test]
fn test_config_set_preserves_hand_edited_values() {
    let root = TempDir::new().unwrap();
    let path = config_file(&root);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(
        &path,
        r#"{"ipfs_api":"a","ipfs_gateway":"b","ethereum_rpc_url":"c","minecraft_saves_dir":"d"}"#,
    )
    .unwrap();

    launcher(&root)
        .args(["config", "set", "IPFS_GATEWAY", "http://gw/"])
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("\"IPFS_API\": \"a\""));
    assert!(written.contains("\"IPFS_GATEWAY\": \"http://gw/\""));
    assert!(written.contains("\"MINECRAFT_SAVES_DIR\": \"d\""));
}
