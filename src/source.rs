//! Reading the registry and writing the generated files.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::generator::Artifact;

fn is_url(input: &str) -> bool {
    input.starts_with("http://") || input.starts_with("https://")
}

/// Reads `input` from disk, or downloads it when it is an http(s) URL.
pub fn load(input: &str) -> Result<String> {
    if is_url(input) {
        log::info!("fetching {input}");
        let fetch = |source| Error::Fetch {
            url: input.to_string(),
            source,
        };
        reqwest::blocking::get(input)
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(fetch)
    } else {
        fs::read_to_string(input).map_err(|source| Error::Io {
            path: input.to_string(),
            source,
        })
    }
}

/// Writes every artifact into `out_dir`, leaving files whose contents are already current
/// untouched. Returns how many files were written.
pub fn write_artifacts(out_dir: &Path, artifacts: &[Artifact]) -> Result<usize> {
    let io_error = |path: &Path| {
        let path = path.display().to_string();
        move |source| Error::Io { path, source }
    };

    fs::create_dir_all(out_dir).map_err(io_error(out_dir))?;
    let mut written = 0;
    for artifact in artifacts {
        let path = out_dir.join(&artifact.file_name);
        if fs::read_to_string(&path).is_ok_and(|existing| existing == artifact.contents) {
            log::debug!("{} is up to date", path.display());
            continue;
        }
        fs::write(&path, &artifact.contents).map_err(io_error(&path))?;
        log::info!("wrote {}", path.display());
        written += 1;
    }
    Ok(written)
}
