//! Log directory discovery and creation

use chrono::Local;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name used below the platform's per-user data location.
pub const APP_DIR_NAME: &str = "rust_sink_logger";

const BUILD_DIR_MARKERS: [&str; 4] = ["build", "out", "bin", "cmake-build"];

/// Preferred per-user log directory for this platform.
///
/// Falls back to `<cwd>/logs` inside something that looks like a build
/// directory, and finally to the relative path `logs`.
pub fn platform_log_directory() -> PathBuf {
    platform_directory()
        .or_else(|| {
            env::current_dir()
                .ok()
                .filter(|cwd| is_build_directory(cwd))
                .map(|cwd| cwd.join("logs"))
        })
        .unwrap_or_else(|| PathBuf::from("logs"))
}

#[cfg(any(target_os = "linux", windows))]
fn platform_directory() -> Option<PathBuf> {
    dirs::data_local_dir().map(|data| data.join(APP_DIR_NAME).join("logs"))
}

#[cfg(target_os = "macos")]
fn platform_directory() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join("Library/Logs").join(APP_DIR_NAME))
}

#[cfg(not(any(target_os = "linux", target_os = "macos", windows)))]
fn platform_directory() -> Option<PathBuf> {
    None
}

fn is_build_directory(dir: &Path) -> bool {
    let text = dir.to_string_lossy();
    BUILD_DIR_MARKERS.iter().any(|marker| text.contains(marker))
}

/// Create `dir` and its parents; `true` if it exists afterwards.
pub fn ensure_log_directory(dir: impl AsRef<Path>) -> bool {
    let dir = dir.as_ref();
    if dir.as_os_str().is_empty() {
        return false;
    }
    if dir.is_dir() {
        return true;
    }
    match fs::create_dir_all(dir) {
        Ok(()) => true,
        Err(e) => {
            eprintln!(
                "[LOGGER WARNING] Cannot create log directory '{}': {}",
                dir.display(),
                e
            );
            false
        }
    }
}

/// Path for `filename` inside a fresh `base/<YYYY-MM-DD_HH-MM-SS>` folder.
///
/// Falls back to `base/filename` when the timestamped folder cannot be
/// created, then to the bare `filename`.
pub fn create_logging_folder(base: impl AsRef<Path>, filename: &str) -> PathBuf {
    let base = base.as_ref();
    let stamped = base.join(Local::now().format("%Y-%m-%d_%H-%M-%S").to_string());

    if ensure_log_directory(&stamped) {
        return stamped.join(filename);
    }
    if ensure_log_directory(base) {
        return base.join(filename);
    }
    PathBuf::from(filename)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_platform_log_directory_is_not_empty() {
        let dir = platform_log_directory();
        assert!(!dir.as_os_str().is_empty());
        assert!(dir.ends_with("logs") || dir.ends_with(APP_DIR_NAME));
    }

    #[cfg(any(target_os = "linux", windows))]
    #[test]
    fn test_platform_directory_under_local_data() {
        if let Some(data) = dirs::data_local_dir() {
            assert_eq!(
                platform_log_directory(),
                data.join(APP_DIR_NAME).join("logs")
            );
        }
    }

    #[test]
    fn test_build_directory_detection() {
        assert!(is_build_directory(Path::new("/work/project/build/debug")));
        assert!(is_build_directory(Path::new("/work/cmake-build-release")));
        assert!(!is_build_directory(Path::new("/home/user/src")));
    }

    #[test]
    fn test_ensure_log_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("x/y/z");
        assert!(ensure_log_directory(&nested));
        assert!(nested.is_dir());
        assert!(ensure_log_directory(&nested));
        assert!(!ensure_log_directory(""));
    }

    #[test]
    fn test_ensure_log_directory_over_a_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("occupied");
        fs::write(&file, "not a directory").unwrap();
        assert!(!ensure_log_directory(&file));
    }

    #[test]
    fn test_create_logging_folder_is_timestamped() {
        let dir = TempDir::new().unwrap();
        let path = create_logging_folder(dir.path(), "run.log");

        assert_eq!(path.file_name().unwrap(), "run.log");
        let stamp = path.parent().unwrap();
        assert_eq!(stamp.parent().unwrap(), dir.path());
        assert!(stamp.is_dir());
        // YYYY-MM-DD_HH-MM-SS
        assert_eq!(stamp.file_name().unwrap().len(), 19);
    }

    #[test]
    fn test_create_logging_folder_falls_back_to_filename() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let path = create_logging_folder(&blocker, "run.log");
        assert_eq!(path, PathBuf::from("run.log"));
    }
}
