//! `launcher config`: show and edit the app configuration.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;
use crate::domain::{AppConfig, ConfigKey};
use crate::infra::config::JsonConfigStore;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Set configuration value
    Set {
        /// Configuration key (e.g. `IPFS_API`)
        key: String,
        /// Configuration value
        value: String,
    },
    /// Clear an optional configuration value
    Unset {
        /// Configuration key
        key: String,
    },
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the key is unknown, the value is rejected, or the
/// file cannot be read or written.
pub fn run(app: &AppContext, cmd: ConfigCommand) -> Result<ExitCode> {
    let store = JsonConfigStore;
    match cmd {
        ConfigCommand::Show => show_config(app, &store),
        ConfigCommand::Path => {
            println!("{}", app.settings.config_path().display());
            Ok(ExitCode::SUCCESS)
        }
        ConfigCommand::Set { key, value } => {
            let key = ConfigKey::parse(&key)?;
            update_config(app, &store, |config| config.set(key, &value))?;
            match load(app, &store)?.get(key) {
                Some(v) => app.output.success(&format!("Set {key} = {v}")),
                None => app.output.success(&format!("Unset {key}")),
            }
            Ok(ExitCode::SUCCESS)
        }
        ConfigCommand::Unset { key } => {
            let key = ConfigKey::parse(&key)?;
            update_config(app, &store, |config| config.unset(key))?;
            app.output.success(&format!("Unset {key}"));
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn show_config(app: &AppContext, store: &impl ConfigStore) -> Result<ExitCode> {
    let path = app.settings.config_path();
    if !store.exists(&path) {
        app.output.error(&format!(
            "No configuration at {}. Run `launcher` to create one.",
            path.display()
        ));
        return Ok(ExitCode::FAILURE);
    }
    let config = store.read(&path)?;
    app.output.header(&path.display().to_string());
    for key in ConfigKey::ALL {
        app.output
            .kv(&format!("{key}:"), config.get(key).unwrap_or("(unset)"));
    }
    Ok(ExitCode::SUCCESS)
}

/// Existing config, or the first-run defaults when there is none yet.
fn load(app: &AppContext, store: &impl ConfigStore) -> Result<AppConfig> {
    let path = app.settings.config_path();
    if store.exists(&path) {
        store.read(&path)
    } else {
        Ok(AppConfig::with_defaults(&app.default_saves_dir()))
    }
}

fn update_config<E>(
    app: &AppContext,
    store: &impl ConfigStore,
    edit: impl FnOnce(&mut AppConfig) -> Result<(), E>,
) -> Result<()>
where
    E: std::error::Error + Send + Sync + 'static,
{
    let mut config = load(app, store)?;
    edit(&mut config)?;
    store.write(&app.settings.config_path(), &config)
}
