use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::core::errors::Result;

const TMP_SUFFIX: &str = "tmp";

/// Identifies which backing document a store operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Purchases,
    Movements,
    Profile,
}

impl CollectionKind {
    /// File name of the backing document under the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            CollectionKind::Purchases => "purchases.json",
            CollectionKind::Movements => "movements.json",
            CollectionKind::Profile => "profile.json",
        }
    }
}

/// Whole-document JSON persistence for the portal collections.
///
/// Every operation is a full read or a full replace of the backing file.
/// Writes stage to a `.tmp` sibling and rename over the destination, so a
/// concurrent reader observes either the previous or the new document, never
/// a torn one.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    /// Creates a store rooted at `data_dir`. The directory itself is only
    /// created on the first save.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path(&self, kind: CollectionKind) -> PathBuf {
        self.data_dir.join(kind.file_name())
    }

    pub fn exists(&self, kind: CollectionKind) -> bool {
        self.path(kind).exists()
    }

    /// Loads the backing document, or `None` when no file has been persisted
    /// yet. Object keys are folded to lowercase before deserializing so
    /// field-name matching is case-insensitive.
    pub fn load<T: DeserializeOwned>(&self, kind: CollectionKind) -> Result<Option<T>> {
        let path = self.path(kind);
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&data)?;
        let document = serde_json::from_value(fold_keys(value))?;
        Ok(Some(document))
    }

    /// Serializes the full document and replaces the backing file, creating
    /// the parent directory if missing. Serialization happens before the file
    /// is touched; a failed serialize leaves the previous contents intact.
    pub fn save<T: Serialize>(&self, kind: CollectionKind, document: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        let path = self.path(kind);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = tmp_path(&path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }

    /// Deletes the backing file, returning `false` when it did not exist.
    pub fn remove(&self, kind: CollectionKind) -> Result<bool> {
        let path = self.path(kind);
        if !path.exists() {
            return Ok(false);
        }
        fs::remove_file(&path)?;
        Ok(true)
    }
}

/// Lowercases every object key, recursively, so documents parse regardless of
/// the field-name casing they were written with. The HTTP layer applies the
/// same folding to request bodies.
pub fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(entries) => Value::Object(
            entries
                .into_iter()
                .map(|(key, value)| (key.to_ascii_lowercase(), fold_keys(value)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
