use std::path::Path;

use ini::Ini;

use crate::{error::AppError, identity::GitIdentity, storage::load_store};

/// Looks up `section.key` the way Git does, ignoring ASCII case
fn git_config_value(config: &Ini, section: &str, key: &str) -> String {
    config
        .iter()
        .filter(|(name, _)| name.is_some_and(|name| name.eq_ignore_ascii_case(section)))
        .flat_map(|(_, props)| props.iter())
        .filter(|(k, _)| k.eq_ignore_ascii_case(key))
        .map(|(_, v)| v.to_string())
        .last()
        .unwrap_or_default()
}

/// Reads the identity configured in the Git global config
///
/// # Arguments
/// * `git_config_path` - Path to the Git global config (`~/.gitconfig`)
pub fn fetch_default_identity(git_config_path: &Path) -> Result<GitIdentity, AppError> {
    let config: Ini = load_store(git_config_path)?;

    Ok(GitIdentity {
        name: git_config_value(&config, "user", "name"),
        email: git_config_value(&config, "user", "email"),
        signing_key: git_config_value(&config, "user", "signingkey"),
        gpg_sign: git_config_value(&config, "commit", "gpgsign"),
    })
}
