//! Data ingestion: fetch the dataset archive, then unpack it.

use super::error::{IngestionError, IngestionResult};
use crate::utils::{create_directories, get_size};
use mlp_protocol::entity_models::DataIngestionConfig;
use reqwest::blocking::{Client, Response};
use reqwest::Url;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use zip::ZipArchive;

const GOOGLE_DRIVE_HOST: &str = "drive.google.com";

/// What [`DataIngestion::download_file`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadOutcome {
    /// The archive was fetched; carries the number of bytes written.
    Downloaded(u64),

    /// A non-empty archive was already present and was kept.
    AlreadyPresent,
}

/// Fetches and unpacks the dataset described by a [`DataIngestionConfig`].
///
/// The stage root is expected to exist already (the configuration manager
/// creates it); the archive's parent and the extraction directory are
/// created on demand.
pub struct DataIngestion {
    config: DataIngestionConfig,
    client: Client,
}

impl DataIngestion {
    /// Create the component with a default HTTP client.
    pub fn new(config: DataIngestionConfig) -> IngestionResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|source| IngestionError::Download {
                url: config.source_url.clone(),
                source,
            })?;
        Ok(Self::with_client(config, client))
    }

    /// Create the component around an existing HTTP client.
    pub fn with_client(config: DataIngestionConfig, client: Client) -> Self {
        Self { config, client }
    }

    pub fn config(&self) -> &DataIngestionConfig {
        &self.config
    }

    /// Download the archive to `local_data_file`.
    ///
    /// The body is streamed into a `.part` sibling and renamed on success,
    /// so an interrupted transfer never leaves a truncated archive behind.
    /// The `.part` file is removed if streaming or the rename fails.
    /// An existing non-empty archive is kept as-is.
    ///
    /// # Errors
    ///
    /// - [`IngestionError::InvalidUrl`] if `source_URL` does not parse
    /// - [`IngestionError::Download`] / [`IngestionError::HttpStatus`] for
    ///   transport failures or non-success responses
    /// - [`IngestionError::Io`] if the archive cannot be written
    pub fn download_file(&self) -> IngestionResult<DownloadOutcome> {
        let destination = &self.config.local_data_file;

        if is_non_empty_file(destination) {
            tracing::info!(
                "File already exists of size: {}",
                get_size(destination)?
            );
            return Ok(DownloadOutcome::AlreadyPresent);
        }

        if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
            create_directories(&[parent], false)?;
        }

        let url = resolve_download_url(&self.config.source_url)?;
        tracing::info!(
            "Downloading data from {} into file {}",
            self.config.source_url,
            destination.display()
        );

        let mut response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|source| IngestionError::Download {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(IngestionError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let partial = partial_path(destination);
        let written = match persist_body(&mut response, &url, &partial, destination) {
            Ok(written) => written,
            Err(err) => {
                let _ = fs::remove_file(&partial);
                return Err(err);
            }
        };

        tracing::info!(
            bytes = written,
            "Downloaded data from {} into file {}",
            self.config.source_url,
            destination.display()
        );
        Ok(DownloadOutcome::Downloaded(written))
    }

    /// Extract `local_data_file` into `unzip_dir`, returning the number of
    /// files written.
    ///
    /// Entries whose names would land outside `unzip_dir` are skipped with a
    /// warning.
    pub fn extract_zip_file(&self) -> IngestionResult<usize> {
        let archive_path = &self.config.local_data_file;
        let unzip_dir = &self.config.unzip_dir;
        create_directories(&[unzip_dir], false)?;

        let file = File::open(archive_path).map_err(|source| IngestionError::Io {
            path: archive_path.clone(),
            source,
        })?;
        let mut archive =
            ZipArchive::new(BufReader::new(file)).map_err(|source| IngestionError::Archive {
                path: archive_path.clone(),
                source,
            })?;

        let mut extracted = 0;
        for index in 0..archive.len() {
            let mut entry = archive
                .by_index(index)
                .map_err(|source| IngestionError::Archive {
                    path: archive_path.clone(),
                    source,
                })?;

            let Some(relative) = entry.enclosed_name() else {
                tracing::warn!(entry = entry.name(), "skipping archive entry outside target directory");
                continue;
            };
            let out_path = unzip_dir.join(relative);

            if entry.is_dir() {
                create_directories(&[&out_path], false)?;
                continue;
            }
            if let Some(parent) = out_path.parent() {
                create_directories(&[parent], false)?;
            }

            let mut out = File::create(&out_path).map_err(|source| IngestionError::Io {
                path: out_path.clone(),
                source,
            })?;
            io::copy(&mut entry, &mut out).map_err(|source| IngestionError::Io {
                path: out_path.clone(),
                source,
            })?;
            extracted += 1;
        }

        tracing::info!(
            files = extracted,
            "Extracted zip file {} into directory {}",
            archive_path.display(),
            unzip_dir.display()
        );
        Ok(extracted)
    }
}

/// Turn a Google Drive share link into its direct-download form; any other
/// URL is returned unchanged.
///
/// `https://drive.google.com/file/d/<id>/view?usp=sharing` becomes
/// `https://drive.google.com/uc?export=download&id=<id>`.
pub fn resolve_download_url(source: &str) -> IngestionResult<Url> {
    let invalid = |reason: String| IngestionError::InvalidUrl {
        url: source.to_string(),
        reason,
    };

    let parsed = Url::parse(source).map_err(|e| invalid(e.to_string()))?;
    if parsed.host_str() != Some(GOOGLE_DRIVE_HOST) {
        return Ok(parsed);
    }

    let segments: Vec<&str> = parsed
        .path_segments()
        .map(Iterator::collect)
        .unwrap_or_default();
    match segments.as_slice() {
        ["file", "d", file_id, ..] if !file_id.is_empty() => {
            let mut direct = Url::parse("https://drive.google.com/uc")
                .map_err(|e| invalid(e.to_string()))?;
            direct
                .query_pairs_mut()
                .append_pair("export", "download")
                .append_pair("id", file_id);
            Ok(direct)
        }
        _ => Ok(parsed),
    }
}

/// Stream the response body into `partial`, then move it to `destination`.
fn persist_body(
    response: &mut Response,
    url: &Url,
    partial: &Path,
    destination: &Path,
) -> IngestionResult<u64> {
    let mut file = File::create(partial).map_err(|source| IngestionError::Io {
        path: partial.to_path_buf(),
        source,
    })?;
    let written = response
        .copy_to(&mut file)
        .map_err(|source| IngestionError::Download {
            url: url.to_string(),
            source,
        })?;
    drop(file);

    fs::rename(partial, destination).map_err(|source| IngestionError::Io {
        path: destination.to_path_buf(),
        source,
    })?;
    Ok(written)
}

fn is_non_empty_file(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|meta| meta.is_file() && meta.len() > 0)
}

fn partial_path(destination: &Path) -> PathBuf {
    let mut name = destination.as_os_str().to_os_string();
    name.push(".part");
    PathBuf::from(name)
}
