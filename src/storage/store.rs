use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::{
    error::Result,
    storage::models::Scheme,
};
use tracing::{debug, error, info, warn};

pub const ID_PREFIX: &str = "SCH";

/// Owns the scheme collection and the JSON document backing it
pub struct SchemeStore {
    path: PathBuf,
    schemes: Vec<Scheme>,
}

impl SchemeStore {
    /// Open the store at `path`, loading whatever the document holds.
    ///
    /// Never fails: a missing or unreadable document yields an empty store.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        Self::remove_interrupted_write(&path);

        let schemes = Self::load(&path);
        info!("Loaded {} schemes from {}", schemes.len(), path.display());

        Self { path, schemes }
    }

    /// Read the scheme document.
    ///
    /// Recovery policy: a missing document, an I/O failure or a document that
    /// does not parse all degrade to an empty collection instead of an error.
    pub fn load(path: &Path) -> Vec<Scheme> {
        if !path.exists() {
            debug!("Scheme document {} does not exist", path.display());
            return Vec::new();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to read {}, starting empty: {}", path.display(), e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Scheme>>(&content) {
            Ok(schemes) => schemes,
            Err(e) => {
                warn!("Scheme document {} is corrupt, starting empty: {}", path.display(), e);
                Vec::new()
            }
        }
    }

    /// Append a scheme under the next sequential id and persist the collection.
    ///
    /// A caller-supplied id is overwritten. If the write fails the error is
    /// logged and the record stays in memory, so memory and disk can diverge
    /// until the next successful save.
    pub fn add(&mut self, mut scheme: Scheme) -> String {
        let scheme_id = Self::format_id(self.schemes.len() + 1);
        scheme.id = scheme_id.clone();

        info!("Adding scheme {} ({})", scheme_id, scheme.name);
        self.schemes.push(scheme);

        if let Err(e) = self.save() {
            error!("Failed to save schemes to {}: {}", self.path.display(), e);
        }

        scheme_id
    }

    /// Write the whole collection to the backing document.
    ///
    /// Writes to a sibling `.tmp` file, syncs it and renames it over the
    /// document so a crash mid-write never leaves a truncated file behind.
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(&self.schemes)?;
        let tmp_path = Self::tmp_path(&self.path);

        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        drop(file);

        fs::rename(&tmp_path, &self.path)?;

        debug!("Saved {} schemes to {}", self.schemes.len(), self.path.display());
        Ok(())
    }

    pub fn schemes(&self) -> &[Scheme] {
        &self.schemes
    }

    pub fn get(&self, id: &str) -> Option<&Scheme> {
        self.schemes.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.schemes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schemes.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `SCH` followed by the index padded to at least three digits
    pub fn format_id(index: usize) -> String {
        format!("{}{:03}", ID_PREFIX, index)
    }

    fn tmp_path(path: &Path) -> PathBuf {
        let mut name = path.as_os_str().to_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn remove_interrupted_write(path: &Path) {
        let tmp_path = Self::tmp_path(path);
        if tmp_path.exists() {
            debug!("Removing interrupted write {}", tmp_path.display());
            if let Err(e) = fs::remove_file(&tmp_path) {
                warn!("Failed to remove interrupted write {}: {}", tmp_path.display(), e);
            }
        }
    }
}
