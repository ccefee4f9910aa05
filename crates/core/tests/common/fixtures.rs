//! Test fixtures for creating sample configurations and archives.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// A temporary project with `config/config.yaml` and `params.yaml`.
///
/// All paths written into the config are absolute so tests never touch the
/// process working directory.
#[allow(dead_code)]
pub struct TestProject {
    pub dir: TempDir,
    pub config_path: PathBuf,
    pub params_path: PathBuf,
}

#[allow(dead_code)]
impl TestProject {
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }
}

/// Create a project whose data ingestion stage downloads from `source_url`.
#[allow(dead_code)]
pub fn create_test_project(source_url: &str) -> std::io::Result<TestProject> {
    let dir = tempfile::tempdir()?;
    let root = dir.path();
    let abs = |rel: &str| root.join(rel).display().to_string();

    let config_yaml = format!(
        r#"artifacts_root: {artifacts}

data_ingestion:
  root_dir: {stage}
  source_URL: {source_url}
  local_data_file: {archive}
  unzip_dir: {stage}
"#,
        artifacts = abs("artifacts"),
        stage = abs("artifacts/data_ingestion"),
        archive = abs("artifacts/data_ingestion/data.zip"),
    );

    let params_yaml = "AUGMENTATION: True\nIMAGE_SIZE: [224, 224, 3]\nBATCH_SIZE: 16\nEPOCHS: 1\n";

    std::fs::create_dir_all(root.join("config"))?;
    let config_path = root.join("config/config.yaml");
    let params_path = root.join("params.yaml");
    std::fs::write(&config_path, config_yaml)?;
    std::fs::write(&params_path, params_yaml)?;

    Ok(TestProject {
        dir,
        config_path,
        params_path,
    })
}

/// Build an in-memory zip archive from `(name, content)` pairs.
#[allow(dead_code)]
pub fn zip_bytes(entries: &[(&str, &str)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, content) in entries {
        zip.start_file(*name, SimpleFileOptions::default())
            .expect("Failed to start zip entry");
        zip.write_all(content.as_bytes())
            .expect("Failed to write zip entry");
    }
    zip.finish().expect("Failed to finish zip").into_inner()
}

/// Write a zip archive to `path`.
#[allow(dead_code)]
pub fn write_zip(path: &Path, entries: &[(&str, &str)]) {
    let mut file = File::create(path).expect("Failed to create zip file");
    file.write_all(&zip_bytes(entries))
        .expect("Failed to write zip file");
}
