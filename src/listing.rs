use std::{io::Write, path::Path};

use crate::{error::AppError, identity::GitIdentity, storage::load_store};

/// Display name of the unnamed section at the top of an INI file
const GENERAL_SECTION_NAME: &str = "DEFAULT";

/// Writes every stored identity to `out`, in file order
///
/// Sections without name and email are skipped.
///
/// # Arguments
/// * `config_path` - Identity store to read
/// * `out` - Sink for the formatted listing
pub fn list_identities<W: Write>(config_path: &Path, out: &mut W) -> Result<(), AppError> {
    let store = load_store(config_path)?;

    writeln!(out, "List of Identities:")?;
    for (section, props) in store.iter() {
        let identity = GitIdentity::from_properties(props);
        if identity.is_empty() {
            continue;
        }
        identity.write_block(section.unwrap_or(GENERAL_SECTION_NAME), out)?;
    }
    Ok(())
}
