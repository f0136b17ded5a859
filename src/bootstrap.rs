use std::fs;

use ini::Ini;
use tracing::{debug, info};

use crate::{
    error::AppError,
    git::fetch_default_identity,
    identity::{EMAIL_KEY, GPG_SIGN_KEY, GitIdentity, NAME_KEY, SIGNING_KEY_KEY},
    storage::{ConfigPaths, save_store},
};

/// Section seeded from the Git global config on first run
pub const DEFAULT_SECTION: &str = "default";

/// Builds a store holding a single `default` identity
fn default_store(identity: &GitIdentity) -> Ini {
    let mut store = Ini::new();
    let mut section = store.with_section(Some(DEFAULT_SECTION));
    section
        .set(NAME_KEY, identity.name.as_str())
        .set(EMAIL_KEY, identity.email.as_str());
    if !identity.signing_key.is_empty() {
        section.set(SIGNING_KEY_KEY, identity.signing_key.as_str());
    }
    if !identity.gpg_sign.is_empty() {
        section.set(GPG_SIGN_KEY, identity.gpg_sign.as_str());
    }
    store
}

/// Creates the identity store from the Git global config unless it already exists
///
/// Returns whether a new store was written.
///
/// # Arguments
/// * `paths` - Store and Git global config locations
pub fn ensure_initialized(paths: &ConfigPaths) -> Result<bool, AppError> {
    if paths.config_file.try_exists()? {
        debug!(path = %paths.config_file.display(), "azgit config already exists");
        return Ok(false);
    }

    let config_dir = paths.config_dir();
    fs::create_dir_all(config_dir).map_err(|source| AppError::CreateDir {
        path: config_dir.to_path_buf(),
        source,
    })?;

    let identity: GitIdentity = fetch_default_identity(&paths.git_config_file)?;
    save_store(&default_store(&identity), &paths.config_file)?;

    info!(
        path = %paths.config_file.display(),
        name = %identity.name,
        email = %identity.email,
        "created azgit config with default identity"
    );
    Ok(true)
}
