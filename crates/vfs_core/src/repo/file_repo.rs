//! File records and the per-folder file registry.
//!
//! # Responsibility
//! - Own the files of exactly one folder.
//! - Provide create, delete and sorted listing.
//!
//! # Invariants
//! - File names are unique within one registry.
//! - Files are immutable after creation; there is no rename or edit.
//! - A rejected create leaves the registry unchanged.

use crate::model::name::{is_valid_name, name_len, MAX_FILE_NAME_LEN};
use crate::model::timestamp::{SharedClock, Timestamp};
use crate::repo::error::{NodeKind, StoreError, StoreResult};
use crate::repo::listing::{sort_entries, ListQuery, Listable};
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// Metadata-only file record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct File {
    name: String,
    description: String,
    created_at: Timestamp,
    #[serde(skip)]
    seq: u64,
}

impl File {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Empty when no description was given.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

impl Listable for File {
    fn list_name(&self) -> &str {
        &self.name
    }

    fn list_created_at(&self) -> Timestamp {
        self.created_at
    }

    fn insertion_seq(&self) -> u64 {
        self.seq
    }
}

/// Keyed collection of files owned by one folder.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct FileRegistry {
    files: BTreeMap<String, File>,
    #[serde(skip)]
    next_seq: u64,
    #[serde(skip)]
    clock: SharedClock,
}

impl FileRegistry {
    pub(crate) fn new(clock: SharedClock) -> Self {
        Self {
            files: BTreeMap::new(),
            next_seq: 0,
            clock,
        }
    }

    /// Creates one file stamped with the registry clock.
    ///
    /// # Errors
    /// - `InvalidName` when `name` fails the name policy.
    /// - `AlreadyExists` when `name` is already present in this folder.
    /// - `TooLong` when `name` exceeds 255 characters.
    pub fn create_file(&mut self, name: &str, description: &str) -> StoreResult<()> {
        if !is_valid_name(name) {
            return Err(StoreError::InvalidName {
                kind: NodeKind::File,
                name: name.to_string(),
            });
        }
        if self.files.contains_key(name) {
            return Err(StoreError::AlreadyExists {
                kind: NodeKind::File,
                name: name.to_string(),
            });
        }
        if name_len(name) > MAX_FILE_NAME_LEN {
            return Err(StoreError::TooLong {
                kind: NodeKind::File,
                name: name.to_string(),
                max: MAX_FILE_NAME_LEN,
            });
        }

        let file = File {
            name: name.to_string(),
            description: description.to_string(),
            created_at: self.clock.now(),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.files.insert(file.name.clone(), file);
        debug!(
            "event=file_create module=repo status=ok file_count={}",
            self.files.len()
        );
        Ok(())
    }

    /// Deletes one file.
    ///
    /// # Errors
    /// - `NotFound` when `name` is absent.
    pub fn delete_file(&mut self, name: &str) -> StoreResult<()> {
        if self.files.remove(name).is_none() {
            return Err(StoreError::NotFound {
                kind: NodeKind::File,
                name: name.to_string(),
            });
        }
        debug!(
            "event=file_delete module=repo status=ok file_count={}",
            self.files.len()
        );
        Ok(())
    }

    /// Loads one file by name.
    pub fn get_file(&self, name: &str) -> StoreResult<&File> {
        self.files.get(name).ok_or_else(|| StoreError::NotFound {
            kind: NodeKind::File,
            name: name.to_string(),
        })
    }

    /// Returns a sorted snapshot of references to every file.
    pub fn list_files(&self, query: ListQuery) -> Vec<&File> {
        sort_entries(self.files.values(), query)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
