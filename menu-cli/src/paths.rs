//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "menu";
const APPLICATION: &str = "menu";

const LATEST_LOG: &str = "latest.log";
const ARCHIVE_PREFIX: &str = "menu-";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory, where logs are written.
///
/// - Linux: `$XDG_CACHE_HOME/menu` or `~/.cache/menu`
/// - macOS: `~/Library/Caches/dev.menu.menu`
/// - Windows: `C:\Users\<User>\AppData\Local\menu\menu\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/menu` or `~/.config/menu`
/// - macOS: `~/Library/Application Support/dev.menu.menu`
/// - Windows: `C:\Users\<User>\AppData\Roaming\menu\menu\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the config file.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the path to the log file of the current run.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archived logs kept next to `latest.log`.
pub const KEPT_LOGS: usize = 25;

/// Moves `latest.log` in `dir` aside as `menu-<timestamp>.log` and prunes
/// archives beyond the newest `keep`.
///
/// Archive names sort by creation time, so pruning goes by name.
pub fn rotate_logs(dir: &Path, keep: usize) -> io::Result<()> {
    let latest = dir.join(LATEST_LOG);
    if latest.exists() {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S%.3f");
        fs::rename(&latest, dir.join(format!("{}{}.log", ARCHIVE_PREFIX, stamp)))?;
    }

    let mut archives: Vec<PathBuf> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_archive(path))
        .collect();
    archives.sort();

    let excess = archives.len().saturating_sub(keep);
    for old in &archives[..excess] {
        fs::remove_file(old)?;
    }
    Ok(())
}

fn is_archive(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(ARCHIVE_PREFIX) && name.ends_with(".log"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir()
            .join(format!("menu-paths-{}-{}", name, std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_rotate_archives_latest() {
        let dir = scratch_dir("archive");
        fs::write(dir.join(LATEST_LOG), "previous run").unwrap();

        rotate_logs(&dir, KEPT_LOGS).unwrap();

        assert!(!dir.join(LATEST_LOG).exists());
        let archived: Vec<_> = fs::read_dir(&dir).unwrap().map(|e| e.unwrap().path()).collect();
        assert_eq!(archived.len(), 1);
        assert!(is_archive(&archived[0]));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_rotate_prunes_oldest_archives() {
        let dir = scratch_dir("prune");
        for day in 1..=4 {
            fs::write(dir.join(format!("menu-2026010{}-000000.000.log", day)), "").unwrap();
        }
        fs::write(dir.join("notes.txt"), "").unwrap();

        rotate_logs(&dir, 2).unwrap();

        let mut left: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        left.sort();
        assert_eq!(
            left,
            vec![
                "menu-20260103-000000.000.log",
                "menu-20260104-000000.000.log",
                "notes.txt",
            ]
        );
        fs::remove_dir_all(&dir).unwrap();
    }
}
