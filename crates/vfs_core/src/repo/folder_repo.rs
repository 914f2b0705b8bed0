//! Folder records and the per-user folder registry.
//!
//! # Responsibility
//! - Own the folders of exactly one user, each with its own file registry.
//! - Provide create, delete, rename, lookup and sorted listing.
//!
//! # Invariants
//! - Folder names are unique within one registry.
//! - The map key and `Folder::name` always agree, including after rename.
//! - Deleting a folder discards all of its files; there is no confirmation
//!   step and no way to recover them.
//! - A rejected mutation leaves the registry unchanged.

use crate::model::name::{is_valid_name, name_len, MAX_FOLDER_NAME_LEN};
use crate::model::timestamp::{SharedClock, Timestamp};
use crate::repo::error::{NodeKind, StoreError, StoreResult};
use crate::repo::file_repo::FileRegistry;
use crate::repo::listing::{sort_entries, ListQuery, Listable};
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// Folder record owning one file registry.
#[derive(Debug, Clone, Serialize)]
pub struct Folder {
    name: String,
    description: String,
    created_at: Timestamp,
    files: FileRegistry,
    #[serde(skip)]
    seq: u64,
}

impl Folder {
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

    pub fn files(&self) -> &FileRegistry {
        &self.files
    }

    pub fn files_mut(&mut self) -> &mut FileRegistry {
        &mut self.files
    }
}

impl Listable for Folder {
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

/// Keyed collection of folders owned by one user.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct FolderRegistry {
    folders: BTreeMap<String, Folder>,
    #[serde(skip)]
    next_seq: u64,
    #[serde(skip)]
    clock: SharedClock,
}

impl FolderRegistry {
    pub(crate) fn new(clock: SharedClock) -> Self {
        Self {
            folders: BTreeMap::new(),
            next_seq: 0,
            clock,
        }
    }

    /// Creates one empty folder stamped with the registry clock.
    ///
    /// # Errors
    /// - `InvalidName` when `name` fails the name policy.
    /// - `AlreadyExists` when this user already has a folder `name`.
    /// - `TooLong` when `name` exceeds 255 characters.
    pub fn create_folder(&mut self, name: &str, description: &str) -> StoreResult<()> {
        if !is_valid_name(name) {
            return Err(StoreError::InvalidName {
                kind: NodeKind::Folder,
                name: name.to_string(),
            });
        }
        if self.folders.contains_key(name) {
            return Err(StoreError::AlreadyExists {
                kind: NodeKind::Folder,
                name: name.to_string(),
            });
        }
        ensure_folder_len(name)?;

        let folder = Folder {
            name: name.to_string(),
            description: description.to_string(),
            created_at: self.clock.now(),
            files: FileRegistry::new(self.clock.clone()),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.folders.insert(folder.name.clone(), folder);
        debug!(
            "event=folder_create module=repo status=ok folder_count={}",
            self.folders.len()
        );
        Ok(())
    }

    /// Deletes one folder together with every file it holds.
    ///
    /// # Errors
    /// - `NotFound` when `name` is absent.
    pub fn delete_folder(&mut self, name: &str) -> StoreResult<()> {
        let removed = self.folders.remove(name).ok_or_else(|| StoreError::NotFound {
            kind: NodeKind::Folder,
            name: name.to_string(),
        })?;
        debug!(
            "event=folder_delete module=repo status=ok folder_count={} files_dropped={}",
            self.folders.len(),
            removed.files.len()
        );
        Ok(())
    }

    /// Renames one folder, re-keying it in place.
    ///
    /// Creation time, description, files and listing position are kept.
    ///
    /// # Errors
    /// - `NotFound` when `old_name` is absent.
    /// - `AlreadyExists` when `new_name` is taken (including `old_name` itself).
    /// - `InvalidName` / `TooLong` when `new_name` breaks the create rules.
    pub fn rename_folder(&mut self, old_name: &str, new_name: &str) -> StoreResult<()> {
        if !self.folders.contains_key(old_name) {
            return Err(StoreError::NotFound {
                kind: NodeKind::Folder,
                name: old_name.to_string(),
            });
        }
        if self.folders.contains_key(new_name) {
            return Err(StoreError::AlreadyExists {
                kind: NodeKind::Folder,
                name: new_name.to_string(),
            });
        }
        if !is_valid_name(new_name) {
            return Err(StoreError::InvalidName {
                kind: NodeKind::Folder,
                name: new_name.to_string(),
            });
        }
        ensure_folder_len(new_name)?;

        // All checks passed; the remove below cannot miss.
        if let Some(mut folder) = self.folders.remove(old_name) {
            folder.name = new_name.to_string();
            self.folders.insert(folder.name.clone(), folder);
        }
        debug!("event=folder_rename module=repo status=ok");
        Ok(())
    }

    /// Loads one folder by name.
    pub fn get_folder(&self, name: &str) -> StoreResult<&Folder> {
        self.folders.get(name).ok_or_else(|| StoreError::NotFound {
            kind: NodeKind::Folder,
            name: name.to_string(),
        })
    }

    /// Loads one folder by name for file operations.
    pub fn get_folder_mut(&mut self, name: &str) -> StoreResult<&mut Folder> {
        self.folders
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound {
                kind: NodeKind::Folder,
                name: name.to_string(),
            })
    }

    /// Returns a sorted snapshot of references to every folder.
    pub fn list_folders(&self, query: ListQuery) -> Vec<&Folder> {
        sort_entries(self.folders.values(), query)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.folders.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }
}

fn ensure_folder_len(name: &str) -> StoreResult<()> {
    if name_len(name) > MAX_FOLDER_NAME_LEN {
        return Err(StoreError::TooLong {
            kind: NodeKind::Folder,
            name: name.to_string(),
            max: MAX_FOLDER_NAME_LEN,
        });
    }
    Ok(())
}
