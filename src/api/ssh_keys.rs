use std::path::Path;

use crate::error::Result;

/// How an SSH key reference is sent to the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SshKeyRef {
    /// Public key material read from a local file.
    Material(String),
    /// Name of a key already registered with the account.
    Name(String),
}

/// A reference naming a readable file is sent as key material.
pub fn resolve_ssh_key(reference: &str) -> Result<SshKeyRef> {
    let path = Path::new(reference);
    if path.is_file() {
        let material = std::fs::read_to_string(path)?;
        return Ok(SshKeyRef::Material(material.trim().to_string()));
    }
    Ok(SshKeyRef::Name(reference.to_string()))
}
