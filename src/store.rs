use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;
use tracing::{debug, error};

/// One user entry.
///
/// Keys other than the four known fields are kept in `extra` so that a
/// load/save cycle never drops data written by something else.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Record {
    #[serde(alias = "nombre", deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(alias = "telefono", deserialize_with = "null_as_empty")]
    pub phone: String,
    #[serde(alias = "mensaje", deserialize_with = "null_as_empty")]
    pub message: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Record {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            message: message.into(),
            extra: Default::default(),
        }
    }
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Fields to overwrite on an existing record. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl RecordPatch {
    pub fn apply(&self, record: &mut Record) {
        let fields = [
            (&mut record.name, &self.name),
            (&mut record.email, &self.email),
            (&mut record.phone, &self.phone),
            (&mut record.message, &self.message),
        ];

        for (field, value) in fields {
            if let Some(value) = value {
                field.clone_from(value);
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read store file {0}")]
    ReadStore(String, #[source] io::Error),
    #[error("Failed to parse store file {0} as a JSON array of records")]
    ParseStore(String, #[source] serde_json::Error),
    #[error("Failed to serialize records")]
    SerializeStore(#[source] serde_json::Error),
    #[error("Failed to write store file {0}")]
    WriteStore(String, #[source] io::Error),
}

/// A JSON array of records kept in a single file.
///
/// Every operation reloads the file, and every mutation rewrites it in full.
/// There is no locking: two processes racing on the same file lose updates.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path().display().to_string()
    }

    /// A missing file or one holding only whitespace is an empty store.
    pub fn load(&self) -> Result<Vec<Record>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file does not exist yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(StoreError::ReadStore(self.display_path(), e)),
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let records: Vec<Record> = serde_json::from_str(&content)
            .map_err(|e| StoreError::ParseStore(self.display_path(), e))?;

        debug!(path = %self.path.display(), count = records.len(), "loaded records");

        Ok(records)
    }

    /// Like [`Store::load`], but logs any failure and falls back to no records.
    pub fn load_or_empty(&self) -> Vec<Record> {
        self.load().unwrap_or_else(|e| {
            error!(error = %e, cause = %source_of(&e), "treating store as empty");
            Vec::new()
        })
    }

    pub fn save(&self, records: &[Record]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(records).map_err(StoreError::SerializeStore)?;

        fs::write(&self.path, content)
            .map_err(|e| StoreError::WriteStore(self.display_path(), e))?;

        debug!(path = %self.path.display(), count = records.len(), "saved records");

        Ok(())
    }

    /// Appends `record` and returns its index.
    pub fn create(&self, record: Record) -> Result<usize, StoreError> {
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)?;
        Ok(records.len() - 1)
    }

    pub fn read(&self) -> Vec<Record> {
        self.load_or_empty()
    }

    /// Returns the merged record, or `None` without writing if `index` is out of range.
    pub fn update(&self, index: i64, patch: &RecordPatch) -> Result<Option<Record>, StoreError> {
        let mut records = self.load()?;

        let Some(i) = position(index, records.len()) else {
            return Ok(None);
        };

        patch.apply(&mut records[i]);
        let updated = records[i].clone();
        self.save(&records)?;

        Ok(Some(updated))
    }

    /// Returns the removed record, or `None` without writing if `index` is out of range.
    pub fn delete(&self, index: i64) -> Result<Option<Record>, StoreError> {
        let mut records = self.load()?;

        let Some(i) = position(index, records.len()) else {
            return Ok(None);
        };

        let removed = records.remove(i);
        self.save(&records)?;

        Ok(Some(removed))
    }
}

fn position(index: i64, len: usize) -> Option<usize> {
    usize::try_from(index).ok().filter(|&i| i < len)
}

pub(crate) fn source_of(e: &(dyn std::error::Error + 'static)) -> String {
    e.source().map(ToString::to_string).unwrap_or_default()
}
