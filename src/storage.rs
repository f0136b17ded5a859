use std::path::{Path, PathBuf};

use ini::{EscapePolicy, Ini};
use tracing::debug;

use crate::error::AppError;

/// azgit folder relative to the user's home directory
const AZGIT_FOLDER: &str = ".config/azgit";
/// Identity store inside the azgit folder
const AZGIT_CONFIG_FILE: &str = "config.ini";
/// Git global config relative to the user's home directory
const GIT_GLOBAL_CONFIG_FILE: &str = ".gitconfig";

/// File locations used by azgit, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigPaths {
    /// Identity store (`~/.config/azgit/config.ini`)
    pub config_file: PathBuf,
    /// Git global config (`~/.gitconfig`)
    pub git_config_file: PathBuf,
}

impl ConfigPaths {
    /// Builds the locations relative to a home directory
    pub fn from_home(home: &Path) -> Self {
        Self {
            config_file: home.join(AZGIT_FOLDER).join(AZGIT_CONFIG_FILE),
            git_config_file: home.join(GIT_GLOBAL_CONFIG_FILE),
        }
    }

    /// Builds the locations relative to the current user's home directory
    pub fn resolve() -> Result<Self, AppError> {
        let home_dir: PathBuf = dirs::home_dir().ok_or(AppError::HomeDirNotFound)?;
        Ok(Self::from_home(&home_dir))
    }

    /// Directory holding the identity store
    pub fn config_dir(&self) -> &Path {
        self.config_file.parent().unwrap_or(Path::new("."))
    }
}

/// Loads an INI file, keeping section order
///
/// # Arguments
/// * `path` - File to load
pub fn load_store(path: &Path) -> Result<Ini, AppError> {
    debug!(path = %path.display(), "loading ini file");
    Ini::load_from_file(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Saves the store to disk, escaping comment characters in values
///
/// # Arguments
/// * `store` - Store to save
/// * `path` - Destination file
pub fn save_store(store: &Ini, path: &Path) -> Result<(), AppError> {
    store
        .write_to_file_policy(path, EscapePolicy::Reserved)
        .map_err(|source| AppError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_relative_to_home() {
        let paths = ConfigPaths::from_home(Path::new("/home/alice"));
        assert_eq!(
            paths.config_file,
            PathBuf::from("/home/alice/.config/azgit/config.ini")
        );
        assert_eq!(paths.git_config_file, PathBuf::from("/home/alice/.gitconfig"));
        assert_eq!(paths.config_dir(), Path::new("/home/alice/.config/azgit"));
    }

    #[test]
    fn load_missing_file_names_the_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("nope.ini");

        let err = load_store(&path).unwrap_err();
        assert!(matches!(err, AppError::ConfigRead { .. }));
        assert!(err.to_string().contains("nope.ini"));
    }

    #[test]
    fn save_then_load_keeps_section_order() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.ini");

        let mut store = Ini::new();
        store.with_section(Some("work")).set("name", "Bob");
        store.with_section(Some("home")).set("name", "Robert");
        save_store(&store, &path).unwrap();

        let loaded = load_store(&path).unwrap();
        let names: Vec<&str> = loaded.sections().flatten().collect();
        assert_eq!(names, ["work", "home"]);
    }

    #[test]
    fn comment_characters_survive_save_and_load() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.ini");

        let mut store = Ini::new();
        store
            .with_section(Some("work"))
            .set("name", "Bob ; the builder")
            .set("signingkey", "#F00D");
        save_store(&store, &path).unwrap();

        let loaded = load_store(&path).unwrap();
        let props = loaded.section(Some("work")).unwrap();
        assert_eq!(props.get("name"), Some("Bob ; the builder"));
        assert_eq!(props.get("signingkey"), Some("#F00D"));
    }

    #[test]
    fn save_failure_names_the_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("missing-dir").join("config.ini");

        let err = save_store(&Ini::new(), &path).unwrap_err();
        assert!(matches!(err, AppError::ConfigWrite { .. }));
        assert!(err.to_string().contains("config.ini"));
    }
}
