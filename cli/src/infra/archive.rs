//! Archive infrastructure: downloads the branch tarball and unpacks it.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use anyhow::Result;

use crate::application::ports::ArchiveSource;
use crate::domain::InstallError;
use crate::infra::http;

/// GitHub branch archives (`.tar.gz`) fetched with ureq.
pub struct HttpArchiveSource {
    user_agent: String,
    show_progress: bool,
}

impl HttpArchiveSource {
    #[must_use]
    pub fn new(user_agent: impl Into<String>, show_progress: bool) -> Self {
        Self {
            user_agent: user_agent.into(),
            show_progress,
        }
    }
}

impl ArchiveSource for HttpArchiveSource {
    fn download(&self, url: &str, dest: &Path) -> Result<u64> {
        let network = |reason: String| InstallError::Network {
            url: url.to_string(),
            reason,
        };
        let response = http::get(url, &self.user_agent).map_err(network)?;
        let total = response
            .header("Content-Length")
            .and_then(|v| v.parse::<u64>().ok());

        // Stream into a sibling temp file so a broken transfer never leaves a
        // truncated archive under the final name.
        let dir = dest
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));
        let mut partial = tempfile::NamedTempFile::new_in(dir)
            .map_err(InstallError::io("creating download file in", dir))?;

        let pb = make_progress_bar(self.show_progress, total);
        let mut reader = response.into_reader();
        let mut buf = vec![0u8; 64 * 1024];
        let mut written = 0u64;
        loop {
            let n = reader
                .read(&mut buf)
                .map_err(|e| network(format!("download interrupted: {e}")))?;
            if n == 0 {
                break;
            }
            partial
                .write_all(&buf[..n])
                .map_err(InstallError::io("writing", dest))?;
            written += n as u64;
            pb.inc(n as u64);
        }
        pb.finish_and_clear();

        partial
            .persist(dest)
            .map_err(|e| InstallError::io("saving", dest)(e.error))?;
        Ok(written)
    }

    fn extract(&self, archive: &Path, into: &Path) -> Result<()> {
        let file = File::open(archive).map_err(InstallError::io("opening", archive))?;
        let mut tar = tar::Archive::new(flate2::read::GzDecoder::new(BufReader::new(file)));
        tar.unpack(into).map_err(|e| InstallError::Extract {
            archive: archive.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(())
    }
}

fn make_progress_bar(show: bool, total: Option<u64>) -> indicatif::ProgressBar {
    if !show {
        return indicatif::ProgressBar::hidden();
    }
    if let Some(t) = total {
        let pb = indicatif::ProgressBar::new(t);
        pb.set_style(
            indicatif::ProgressStyle::default_bar()
                .template("  [{bar:40}] {percent}%  {bytes}/{total_bytes}")
                .unwrap_or_else(|_| indicatif::ProgressStyle::default_bar())
                .progress_chars("█▓░"),
        );
        pb
    } else {
        indicatif::ProgressBar::new_spinner()
    }
}
