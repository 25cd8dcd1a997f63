//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/src/art/     ← cwd
/// /home/user/site/vitrine.toml ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_upward(&cwd, config_name)
}

/// Walk up from `start` looking for `config_name`.
fn find_upward(start: &Path, config_name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_find_upward_from_nested_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("src/lib/assets");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("vitrine.toml"), "").unwrap();

        let found = find_upward(&nested, Path::new("vitrine.toml"));
        assert_eq!(found, Some(dir.path().join("vitrine.toml")));
    }

    #[test]
    fn test_find_upward_prefers_closest() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("sub");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("vitrine.toml"), "").unwrap();
        fs::write(nested.join("vitrine.toml"), "").unwrap();

        let found = find_upward(&nested, Path::new("vitrine.toml"));
        assert_eq!(found, Some(nested.join("vitrine.toml")));
    }

    #[test]
    fn test_find_upward_ignores_directories() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("vitrine.toml")).unwrap();

        let found = find_upward(dir.path(), Path::new("vitrine.toml"));
        assert_ne!(found, Some(dir.path().join("vitrine.toml")));
    }

    #[test]
    fn test_absolute_missing() {
        let missing = Path::new("/definitely/not/here/vitrine.toml");
        assert_eq!(find_config_file(missing), None);
    }
}
