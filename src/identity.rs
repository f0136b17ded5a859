use std::io::{self, Write};

use ini::Properties;

/// Store key for the author name
pub const NAME_KEY: &str = "name";
/// Store key for the author email
pub const EMAIL_KEY: &str = "email";
/// Store key for the signing key id
pub const SIGNING_KEY_KEY: &str = "signingkey";
/// Store key for the commit signing flag
pub const GPG_SIGN_KEY: &str = "gpgsign";

/// Represents one named Git identity. Absent values are empty strings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GitIdentity {
    /// Git author name (user.name)
    pub name: String,
    /// Git author email (user.email)
    pub email: String,
    /// Signing key id (user.signingkey)
    pub signing_key: String,
    /// Commit signing flag (commit.gpgsign)
    pub gpg_sign: String,
}

impl GitIdentity {
    /// Reads an identity from a store section
    pub fn from_properties(props: &Properties) -> Self {
        let value = |key: &str| props.get(key).unwrap_or_default().to_string();
        Self {
            name: value(NAME_KEY),
            email: value(EMAIL_KEY),
            signing_key: value(SIGNING_KEY_KEY),
            gpg_sign: value(GPG_SIGN_KEY),
        }
    }

    /// An identity without name and email is not worth showing
    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty()
    }

    /// Writes the identity as a display block headed by its section name
    ///
    /// # Arguments
    /// * `section` - Name of the section holding the identity
    /// * `out` - Sink to write the block to
    pub fn write_block<W: Write>(&self, section: &str, out: &mut W) -> io::Result<()> {
        writeln!(out)?;
        writeln!(out, "Identity [{section}]:")?;
        writeln!(out, "\tName: {}", self.name)?;
        writeln!(out, "\tEmail: {}", self.email)?;
        if !self.signing_key.is_empty() {
            writeln!(out, "\tSigning Key: {}", self.signing_key)?;
        }
        if !self.gpg_sign.is_empty() {
            writeln!(out, "\tGPG Sign: {}", self.gpg_sign)?;
        }
        Ok(())
    }
}
