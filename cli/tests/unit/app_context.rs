//! Settings resolution and non-interactive detection, which read process
//! state (environment, working directory).

#![allow(unsafe_code)]

use launcher_cli::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use launcher_cli::domain::LauncherSettings;
use launcher_cli::infra::settings::load_settings;
use serial_test::serial;
use tempfile::TempDir;

fn flags(yes: bool) -> AppFlags {
    AppFlags {
        output: OutputFlags {
            no_color: true,
            quiet: true,
        },
        behaviour: BehaviourFlags { yes },
    }
}

fn clear_env() {
    // SAFETY: every test touching these variables is #[serial].
    unsafe {
        std::env::remove_var("CI");
        std::env::remove_var("LAUNCHER_YES");
    }
}

#[test]
#[serial]
fn interactive_by_default() {
    clear_env();
    let app = AppContext::new(&flags(false), LauncherSettings::default());
    assert!(!app.non_interactive);
}

#[test]
#[serial]
fn yes_flag_disables_prompts() {
    clear_env();
    let app = AppContext::new(&flags(true), LauncherSettings::default());
    assert!(app.non_interactive);
}

#[test]
#[serial]
fn launcher_yes_env_disables_prompts() {
    clear_env();
    // SAFETY: serialized with every other env-mutating test.
    unsafe { std::env::set_var("LAUNCHER_YES", "1") };
    let app = AppContext::new(&flags(false), LauncherSettings::default());
    clear_env();
    assert!(app.non_interactive);
}

#[test]
#[serial]
fn ci_env_disables_prompts() {
    clear_env();
    // SAFETY: serialized with every other env-mutating test.
    unsafe { std::env::set_var("CI", "true") };
    let app = AppContext::new(&flags(false), LauncherSettings::default());
    clear_env();
    assert!(app.non_interactive);
}

#[test]
#[serial]
fn implicit_settings_file_is_read_from_working_directory() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("launcher.yaml"), "app_name: Test App\nport: 9000\n").unwrap();
    let previous = std::env::current_dir().unwrap();

    std::env::set_current_dir(dir.path()).unwrap();
    let loaded = load_settings(None);
    std::env::set_current_dir(previous).unwrap();

    let settings = loaded.unwrap();
    assert_eq!(settings.app_name, "Test App");
    assert_eq!(settings.port, 9000);
}

#[test]
#[serial]
fn no_settings_file_means_defaults() {
    let dir = TempDir::new().unwrap();
    let previous = std::env::current_dir().unwrap();

    std::env::set_current_dir(dir.path()).unwrap();
    let loaded = load_settings(None);
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(loaded.unwrap(), LauncherSettings::default());
}
