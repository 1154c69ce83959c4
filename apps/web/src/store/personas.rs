use std::fmt;
use std::path::Path;

use tracing::warn;

use crate::models::Persona;
use crate::store::{read_json, StoreError};

const MAX_NAME_LEN: usize = 64;

/// A persona identifier that is safe to use as a file stem: ASCII
/// alphanumerics, `-` and `_`, at most 64 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonaName(String);

impl PersonaName {
    pub fn parse(raw: &str) -> Result<Self, StoreError> {
        let name = raw.trim();
        let valid = !name.is_empty()
            && name.len() <= MAX_NAME_LEN
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(Self(name.to_string()))
        } else {
            Err(StoreError::InvalidName(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Loads `personas/<name>.json`.
pub async fn load_persona(personas_dir: &Path, name: &PersonaName) -> Result<Persona, StoreError> {
    read_json(&personas_dir.join(format!("{}.json", name.as_str()))).await
}

/// Names of the personas on disk, sorted. Files whose stem is not a valid
/// persona name are skipped.
pub async fn list_personas(personas_dir: &Path) -> Result<Vec<String>, StoreError> {
    let mut entries = match tokio::fs::read_dir(personas_dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("personas directory {} does not exist", personas_dir.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: personas_dir.to_path_buf(),
                source,
            })
        }
    };

    let mut names = Vec::new();
    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(source) => {
                return Err(StoreError::Io {
                    path: personas_dir.to_path_buf(),
                    source,
                })
            }
        };
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            if PersonaName::parse(stem).is_ok() {
                names.push(stem.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
