//! Launcher settings: where the managed app comes from and how it is run.
//!
//! Pure data and path derivation; loading from disk lives in `crate::infra`.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::toolchain::DEFAULT_MIN_NODE_MAJOR;

/// Name of the persisted app configuration inside the app directory.
pub const CONFIG_FILENAME: &str = "config.json";
/// Name of the version manifest inside the app directory.
pub const MANIFEST_FILENAME: &str = "package.json";
/// Environment variable carrying the bind host to the managed app.
pub const HOST_ENV: &str = "HOST";
/// Environment variable carrying the bind port to the managed app.
pub const PORT_ENV: &str = "PORT";

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSpec {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CommandSpec {
    #[must_use]
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(ToString::to_string).collect(),
        }
    }

    /// Shell-like rendering for log lines.
    #[must_use]
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// `npm` is a batch script on Windows and must be named with its extension.
#[must_use]
pub fn npm_program() -> &'static str {
    if cfg!(windows) { "npm.cmd" } else { "npm" }
}

/// Commands run inside the app directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandSettings {
    /// Dependency resolution step.
    pub install: CommandSpec,
    /// Build step.
    pub build: CommandSpec,
    /// Long-running app process.
    pub serve: CommandSpec,
}

impl Default for CommandSettings {
    fn default() -> Self {
        Self {
            install: CommandSpec::new(npm_program(), &["i"]),
            build: CommandSpec::new(npm_program(), &["run", "build"]),
            serve: CommandSpec::new("node", &["build/index.js"]),
        }
    }
}

/// Top-level launcher settings, optionally read from `launcher.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LauncherSettings {
    /// Human-readable name, also used as the terminal window title.
    pub app_name: String,
    pub repo_owner: String,
    pub repo_name: String,
    /// Branch whose archive is installed.
    pub branch: String,
    /// Directory the app directory and the archive live in.
    pub install_root: PathBuf,
    pub host: String,
    pub port: u16,
    pub min_node_major: u64,
    /// Open the app in the default browser once it is started.
    pub open_browser: bool,
    /// Overrides the GitHub branch archive URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_url: Option<String>,
    /// Overrides the raw GitHub manifest URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest_url: Option<String>,
    pub commands: CommandSettings,
}

impl Default for LauncherSettings {
    fn default() -> Self {
        Self {
            app_name: "World Hash".to_string(),
            repo_owner: "trmid".to_string(),
            repo_name: "world-hash".to_string(),
            branch: "release".to_string(),
            install_root: PathBuf::from("."),
            host: "localhost".to_string(),
            port: 25557,
            min_node_major: DEFAULT_MIN_NODE_MAJOR,
            open_browser: true,
            archive_url: None,
            manifest_url: None,
            commands: CommandSettings::default(),
        }
    }
}

impl LauncherSettings {
    /// `<root>/<repo>-<branch>`, the top-level directory of the branch archive.
    ///
    /// GitHub flattens `/` in branch names to `-` in that directory name.
    #[must_use]
    pub fn app_dir(&self) -> PathBuf {
        self.install_root.join(format!(
            "{}-{}",
            self.repo_name,
            self.branch.replace('/', "-")
        ))
    }

    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.app_dir().join(CONFIG_FILENAME)
    }

    #[must_use]
    pub fn manifest_path(&self) -> PathBuf {
        self.app_dir().join(MANIFEST_FILENAME)
    }

    /// Local download target for the branch archive.
    #[must_use]
    pub fn archive_path(&self) -> PathBuf {
        self.install_root.join(format!("{}.tar.gz", self.repo_name))
    }

    #[must_use]
    pub fn archive_url(&self) -> String {
        self.archive_url.clone().unwrap_or_else(|| {
            format!(
                "https://github.com/{}/{}/archive/refs/heads/{}.tar.gz",
                self.repo_owner, self.repo_name, self.branch
            )
        })
    }

    #[must_use]
    pub fn manifest_url(&self) -> String {
        self.manifest_url.clone().unwrap_or_else(|| {
            format!(
                "https://raw.githubusercontent.com/{}/{}/{}/{MANIFEST_FILENAME}",
                self.repo_owner, self.repo_name, self.branch
            )
        })
    }

    /// Client tag sent as `User-Agent` on every HTTP request.
    #[must_use]
    pub fn user_agent(&self) -> String {
        format!("{}-installer", self.repo_name)
    }

    /// Where the running app can be reached.
    #[must_use]
    pub fn app_url(&self) -> String {
        format!("http://{}:{}/", self.host, self.port)
    }

    /// Project page, used as remediation when installation fails.
    #[must_use]
    pub fn project_url(&self) -> String {
        format!("https://github.com/{}/{}", self.repo_owner, self.repo_name)
    }
}
