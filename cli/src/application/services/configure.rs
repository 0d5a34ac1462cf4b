//! Application service: configuration use-cases.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::{ConfigStore, ProgressReporter, Prompter};
use crate::domain::config::{AppConfig, ConfigKey, SKIP_SENTINEL};

/// Load the app config, asking the operator for every field on first run.
///
/// # Errors
///
/// Returns an error if an existing config cannot be parsed, an answer cannot
/// be read, or the new config cannot be written.
pub fn ensure_config(
    store: &impl ConfigStore,
    prompter: &impl Prompter,
    reporter: &impl ProgressReporter,
    path: &Path,
    default_saves_dir: &str,
) -> Result<AppConfig> {
    reporter.step("Loading configuration...");
    if store.exists(path) {
        let config = store.read(path)?;
        reporter.success("Configuration loaded.");
        return Ok(config);
    }

    reporter.warn("Configuration not found.");
    reporter.step(
        "Please provide the following configuration options. Press ENTER to accept the default in brackets.",
    );
    let config = prompt_config(prompter, reporter, default_saves_dir)?;

    reporter.step("Saving configuration...");
    store.write(path, &config)?;
    reporter.success("Configuration loaded.");
    Ok(config)
}

/// Ask for every field in order, offering the defaults.
///
/// The optional shortcut offers [`SKIP_SENTINEL`], which leaves it unset.
///
/// # Errors
///
/// Returns an error if the prompter fails.
pub fn prompt_config(
    prompter: &impl Prompter,
    reporter: &impl ProgressReporter,
    default_saves_dir: &str,
) -> Result<AppConfig> {
    let mut config = AppConfig::with_defaults(default_saves_dir);
    for key in ConfigKey::ALL {
        let default = config
            .get(key)
            .filter(|v| !v.is_empty())
            .map_or_else(|| optional_default(key), ToString::to_string);
        let default = (!default.is_empty()).then_some(default.as_str());
        loop {
            let answer = prompter.prompt(key.prompt(), default)?;
            match config.set(key, &answer) {
                Ok(()) => break,
                Err(e) => reporter.warn(&e.to_string()),
            }
        }
    }
    Ok(config)
}

fn optional_default(key: ConfigKey) -> String {
    if key.is_optional() {
        SKIP_SENTINEL.to_string()
    } else {
        String::new()
    }
}
