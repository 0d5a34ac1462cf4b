//! Application context: unified state passed to every command handler.
//!
//! `AppContext` owns the resolved launcher settings and the output context,
//! and builds the production port implementations on demand so command
//! handlers never construct infrastructure themselves.

use std::path::PathBuf;

use crate::application::services::install::InstallPlan;
use crate::domain::{CommandSpec, LauncherSettings};
use crate::infra::archive::HttpArchiveSource;
use crate::infra::config::default_minecraft_saves_dir;
use crate::infra::manifest::HttpManifestSource;
use crate::infra::supervisor::TokioProcessSupervisor;
use crate::output::OutputContext;
use crate::output::prompter::TerminalPrompter;
use crate::output::reporter::TerminalReporter;
use crate::output::terminal::TerminalConsole;

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Skip interactive prompts (also set by `CI` / `LAUNCHER_YES` env vars).
    pub yes: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Settings after file loading and flag overrides.
    pub settings: LauncherSettings,
    /// When `true`, skip interactive prompts: defaults are accepted and
    /// update offers answered with yes.
    ///
    /// Set when `--yes` / `-y` is passed, or when the `CI` or `LAUNCHER_YES`
    /// environment variables are present.
    pub non_interactive: bool,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags and loaded settings.
    #[must_use]
    pub fn new(flags: &AppFlags, settings: LauncherSettings) -> Self {
        let ci_env = std::env::var("CI").is_ok() || std::env::var("LAUNCHER_YES").is_ok();
        let non_interactive = flags.behaviour.yes || ci_env;

        Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            settings,
            non_interactive,
        }
    }

    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    #[must_use]
    pub fn prompter(&self) -> TerminalPrompter {
        TerminalPrompter::new(self.non_interactive)
    }

    /// Supervisor echoing child output to this terminal, keeping the app
    /// name as window title.
    #[must_use]
    pub fn supervisor(&self) -> TokioProcessSupervisor<TerminalConsole> {
        TokioProcessSupervisor::new(TerminalConsole::new(&self.settings.app_name))
    }

    #[must_use]
    pub fn manifests(&self) -> HttpManifestSource {
        HttpManifestSource::new(self.settings.user_agent())
    }

    #[must_use]
    pub fn archives(&self) -> HttpArchiveSource {
        HttpArchiveSource::new(self.settings.user_agent(), self.output.show_progress())
    }

    /// Default offered for `MINECRAFT_SAVES_DIR`, empty when unknown.
    #[must_use]
    pub fn default_saves_dir(&self) -> String {
        default_minecraft_saves_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn layout(&self) -> InstallLayout {
        InstallLayout::from_settings(&self.settings)
    }
}

/// Owned paths and URLs of one installation, derived from settings.
///
/// Services borrow from this via [`InstallLayout::plan`].
pub struct InstallLayout {
    pub app_dir: PathBuf,
    pub config_path: PathBuf,
    pub manifest_path: PathBuf,
    pub archive_path: PathBuf,
    pub archive_url: String,
    pub manifest_url: String,
    pub build_steps: Vec<CommandSpec>,
}

impl InstallLayout {
    #[must_use]
    pub fn from_settings(settings: &LauncherSettings) -> Self {
        Self {
            app_dir: settings.app_dir(),
            config_path: settings.config_path(),
            manifest_path: settings.manifest_path(),
            archive_path: settings.archive_path(),
            archive_url: settings.archive_url(),
            manifest_url: settings.manifest_url(),
            build_steps: vec![
                settings.commands.install.clone(),
                settings.commands.build.clone(),
            ],
        }
    }

    #[must_use]
    pub fn plan(&self) -> InstallPlan<'_> {
        InstallPlan {
            archive_url: &self.archive_url,
            archive_path: &self.archive_path,
            target_dir: &self.app_dir,
            config_path: &self.config_path,
            build_steps: &self.build_steps,
        }
    }
}
