//! Manifest infrastructure: implements `ManifestSource` over disk and HTTP.

use std::path::Path;

use anyhow::Result;

use crate::application::ports::ManifestSource;
use crate::domain::{ManifestError, VersionManifest};
use crate::infra::http;

/// Reads `package.json` from an install and from the raw GitHub branch.
pub struct HttpManifestSource {
    user_agent: String,
}

impl HttpManifestSource {
    #[must_use]
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
        }
    }
}

impl ManifestSource for HttpManifestSource {
    fn read_local(&self, path: &Path) -> Result<VersionManifest> {
        let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(VersionManifest::parse(&content)?)
    }

    fn read_remote(&self, url: &str) -> Result<VersionManifest> {
        let network = |reason: String| ManifestError::Network {
            url: url.to_string(),
            reason,
        };
        let body = http::get(url, &self.user_agent)
            .map_err(network)?
            .into_string()
            .map_err(|e| network(e.to_string()))?;
        Ok(VersionManifest::parse(&body)?)
    }
}
