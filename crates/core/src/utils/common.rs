//! Directory materialization and JSON/size helpers.

use super::error::{FsError, FsResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Ensure every path in `paths` exists as a directory.
///
/// Missing parents are created along the way and paths that already exist
/// are left untouched, so calling this repeatedly with the same input is
/// safe. Paths are processed in order; when `verbose` is set one event is
/// logged per path, whether or not it had to be created.
///
/// # Errors
///
/// Returns [`FsError::DirectoryCreation`] naming the first path that could
/// not be created. Earlier paths stay on disk; nothing is rolled back.
///
/// # Example
///
/// ```no_run
/// use mlp_core::utils::create_directories;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// create_directories(&["artifacts", "artifacts/data_ingestion"], true)?;
/// # Ok(())
/// # }
/// ```
pub fn create_directories<P: AsRef<Path>>(paths: &[P], verbose: bool) -> FsResult<()> {
    for path in paths {
        let path = path.as_ref();
        fs::create_dir_all(path).map_err(|source| FsError::DirectoryCreation {
            path: path.to_path_buf(),
            source,
        })?;

        if verbose {
            tracing::info!(path = %path.display(), "created directory at: {}", path.display());
        }
    }

    Ok(())
}

/// Write `data` to `path` as pretty-printed JSON (4-space indent).
pub fn save_json<T: Serialize + ?Sized>(path: &Path, data: &T) -> FsResult<()> {
    let file = fs::File::create(path).map_err(|source| FsError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    let mut writer = BufWriter::new(file);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    data.serialize(&mut serializer)
        .map_err(|source| FsError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    writer.flush().map_err(|source| FsError::FileWrite {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("json file saved at: {}", path.display());
    Ok(())
}

/// Load a JSON document from `path` into `T`.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> FsResult<T> {
    let file = fs::File::open(path).map_err(|source| FsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let data = serde_json::from_reader(BufReader::new(file)).map_err(|source| FsError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("json file loaded successfully from: {}", path.display());
    Ok(data)
}

/// Size of the file at `path` in kilobytes, formatted as `~ N KB`.
///
/// Halves round to the nearest even number (2.5 KB reads `~ 2 KB`).
pub fn get_size(path: &Path) -> FsResult<String> {
    let metadata = fs::metadata(path).map_err(|source| FsError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let size_in_kb = (metadata.len() as f64 / 1024.0).round_ties_even() as u64;
    Ok(format!("~ {size_in_kb} KB"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::collections::BTreeMap;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::tempdir;

    /// Formatted log output collected by a scoped subscriber.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn count(&self, needle: &str) -> usize {
            String::from_utf8_lossy(&self.0.lock().unwrap())
                .matches(needle)
                .count()
        }
    }

    fn capture_logs(f: impl FnOnce()) -> CapturedLogs {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        logs
    }

    #[test]
    fn test_create_directories_nested() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a/b/c/d");

        create_directories(&[&nested], true).unwrap();

        assert!(nested.is_dir(), "All intermediate directories should exist");
    }

    #[test]
    fn test_create_directories_is_idempotent() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("artifacts");

        create_directories(&[&target], false).unwrap();
        fs::write(target.join("marker.txt"), "keep me").unwrap();
        let before = fs::metadata(&target).unwrap().modified().unwrap();

        create_directories(&[&target], false).expect("Second call should succeed");

        let after = fs::metadata(&target).unwrap().modified().unwrap();
        assert_eq!(before, after, "Existing directory should not be touched");
        assert_eq!(
            fs::read_to_string(target.join("marker.txt")).unwrap(),
            "keep me"
        );
    }

    #[test]
    fn test_create_directories_multiple_in_order() {
        let dir = tempdir().unwrap();
        let paths = vec![dir.path().join("root"), dir.path().join("root/stage")];

        create_directories(&paths, true).unwrap();

        assert!(paths.iter().all(|p| p.is_dir()));
    }

    #[test]
    fn test_create_directories_no_rollback_on_failure() {
        let dir = tempdir().unwrap();
        let created = dir.path().join("created");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "a regular file").unwrap();
        let impossible = blocker.join("child");

        let result = create_directories(&[&created, &impossible], true);

        match result {
            Err(FsError::DirectoryCreation { path, .. }) => assert_eq!(path, impossible),
            other => panic!("Expected DirectoryCreation error, got {other:?}"),
        }
        assert!(created.is_dir(), "Earlier directories should remain");
    }

    #[test]
    fn test_create_directories_logs_every_path_when_verbose() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("artifacts");
        fs::create_dir(&target).unwrap();

        let verbose = capture_logs(|| create_directories(&[&target, &target], true).unwrap());
        assert_eq!(
            verbose.count("created directory at:"),
            2,
            "One event per path, even when it already existed"
        );

        let silent = capture_logs(|| create_directories(&[&target, &target], false).unwrap());
        assert_eq!(silent.count("created directory at:"), 0);
    }

    #[test]
    fn test_create_directories_empty_input() {
        let paths: Vec<&Path> = Vec::new();
        assert!(create_directories(&paths, true).is_ok());
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Scores {
        loss: f64,
        accuracy: f64,
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("scores.json");
        let mut data = BTreeMap::new();
        data.insert("loss", 0.25);
        data.insert("accuracy", 0.75);

        save_json(&path, &data).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\n    \"accuracy\""), "Should indent by 4 spaces: {raw}");

        let scores: Scores = load_json(&path).unwrap();
        assert_eq!(
            scores,
            Scores {
                loss: 0.25,
                accuracy: 0.75
            }
        );
    }

    #[test]
    fn test_load_json_invalid_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let result: FsResult<serde_json::Value> = load_json(&path);
        assert!(matches!(result, Err(FsError::Json { .. })));
    }

    #[test]
    fn test_load_json_missing_file() {
        let dir = tempdir().unwrap();
        let result: FsResult<serde_json::Value> = load_json(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(FsError::FileRead { .. })));
    }

    #[test]
    fn test_get_size_rounds_to_kilobytes() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blob.bin");

        fs::write(&path, vec![0u8; 3 * 1024 + 600]).unwrap();
        assert_eq!(get_size(&path).unwrap(), "~ 4 KB");

        fs::write(&path, vec![0u8; 100]).unwrap();
        assert_eq!(get_size(&path).unwrap(), "~ 0 KB");
    }

    #[test]
    fn test_get_size_rounds_half_to_even() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("blob.bin");

        fs::write(&path, vec![0u8; 2560]).unwrap();
        assert_eq!(get_size(&path).unwrap(), "~ 2 KB");

        fs::write(&path, vec![0u8; 3584]).unwrap();
        assert_eq!(get_size(&path).unwrap(), "~ 4 KB");
    }
}
