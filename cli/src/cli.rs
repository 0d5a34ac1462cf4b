//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;
use crate::domain::LauncherSettings;
use crate::infra::settings::load_settings;

/// Keeps a managed web app installed, configured and running
#[derive(Parser)]
#[command(name = "launcher", version, propagate_version = true)]
pub struct Cli {
    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Answer prompts with their defaults and accept updates
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Launcher settings file (default: ./launcher.yaml if present)
    #[arg(long, global = true, env = "LAUNCHER_SETTINGS", value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Branch to install and track
    #[arg(long, global = true, env = "LAUNCHER_BRANCH")]
    pub branch: Option<String>,

    /// Directory the app is installed under
    #[arg(long, global = true, env = "LAUNCHER_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[arg(long, global = true, hide = true, env = "LAUNCHER_ARCHIVE_URL")]
    pub archive_url: Option<String>,

    #[arg(long, global = true, hide = true, env = "LAUNCHER_MANIFEST_URL")]
    pub manifest_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check, update, configure and start the app (default)
    Launch,

    /// Check for and install updates without starting the app
    Update,

    /// Reinstall the latest version, keeping the configuration
    Install,

    /// Manage the app configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Diagnose the toolchain and installation
    Doctor,

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if settings cannot be loaded or the command fails.
    pub async fn run(self) -> Result<ExitCode> {
        let command = self.command.unwrap_or(Command::Launch);
        if matches!(command, Command::Version) {
            commands::version::run();
            return Ok(ExitCode::SUCCESS);
        }

        let mut settings = load_settings(self.settings.as_deref())?;
        apply_overrides(
            &mut settings,
            Overrides {
                branch: self.branch,
                root: self.root,
                archive_url: self.archive_url,
                manifest_url: self.manifest_url,
            },
        );

        let app = AppContext::new(
            &AppFlags {
                output: OutputFlags {
                    no_color: self.no_color,
                    quiet: self.quiet,
                },
                behaviour: BehaviourFlags { yes: self.yes },
            },
            settings,
        );

        match command {
            Command::Launch => commands::launch::run(&app).await,
            Command::Update => commands::update::run(&app).await,
            Command::Install => commands::install::run(&app).await,
            Command::Config(cmd) => commands::config::run(&app, cmd),
            Command::Doctor => commands::doctor::run(&app).await,
            Command::Version => Ok(ExitCode::SUCCESS),
        }
    }
}

/// Flag values that take precedence over the settings file.
#[derive(Default)]
pub struct Overrides {
    pub branch: Option<String>,
    pub root: Option<PathBuf>,
    pub archive_url: Option<String>,
    pub manifest_url: Option<String>,
}

/// Replace every settings field for which a flag was given.
pub fn apply_overrides(settings: &mut LauncherSettings, overrides: Overrides) {
    if let Some(branch) = overrides.branch {
        settings.branch = branch;
    }
    if let Some(root) = overrides.root {
        settings.install_root = root;
    }
    if overrides.archive_url.is_some() {
        settings.archive_url = overrides.archive_url;
    }
    if overrides.manifest_url.is_some() {
        settings.manifest_url = overrides.manifest_url;
    }
}
