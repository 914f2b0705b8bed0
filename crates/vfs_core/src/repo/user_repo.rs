//! Users and the process-wide user directory.
//!
//! # Responsibility
//! - Register users and resolve them by name.
//! - Hand the directory clock down to every folder and file registry.
//!
//! # Invariants
//! - Usernames are unique; callers apply case folding before calling.
//! - Users are never renamed or removed.

use crate::model::name::{is_valid_name, name_len, MAX_USERNAME_LEN};
use crate::model::timestamp::{system_clock, SharedClock};
use crate::repo::error::{NodeKind, StoreError, StoreResult};
use crate::repo::folder_repo::FolderRegistry;
use log::debug;
use serde::Serialize;
use std::collections::BTreeMap;

/// Registered user and the folders it owns.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    username: String,
    folders: FolderRegistry,
}

impl User {
    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn folders(&self) -> &FolderRegistry {
        &self.folders
    }

    pub fn folders_mut(&mut self) -> &mut FolderRegistry {
        &mut self.folders
    }
}

/// Store entry point: every user, keyed by username.
#[derive(Debug)]
pub struct UserDirectory {
    users: BTreeMap<String, User>,
    clock: SharedClock,
}

impl Default for UserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory {
    /// Creates an empty directory stamping records with wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(system_clock())
    }

    /// Creates an empty directory with a caller-provided clock.
    pub fn with_clock(clock: SharedClock) -> Self {
        Self {
            users: BTreeMap::new(),
            clock,
        }
    }

    /// Registers one user with no folders.
    ///
    /// # Errors
    /// - `AlreadyExists` when `username` is registered.
    /// - `InvalidName` when `username` fails the name policy.
    /// - `TooLong` when `username` exceeds 25 characters.
    pub fn register_user(&mut self, username: &str) -> StoreResult<()> {
        if self.users.contains_key(username) {
            return Err(StoreError::AlreadyExists {
                kind: NodeKind::User,
                name: username.to_string(),
            });
        }
        if !is_valid_name(username) {
            return Err(StoreError::InvalidName {
                kind: NodeKind::User,
                name: username.to_string(),
            });
        }
        if name_len(username) > MAX_USERNAME_LEN {
            return Err(StoreError::TooLong {
                kind: NodeKind::User,
                name: username.to_string(),
                max: MAX_USERNAME_LEN,
            });
        }

        let user = User {
            username: username.to_string(),
            folders: FolderRegistry::new(self.clock.clone()),
        };
        self.users.insert(user.username.clone(), user);
        debug!(
            "event=user_register module=repo status=ok user_count={}",
            self.users.len()
        );
        Ok(())
    }

    /// Loads one user by name.
    pub fn get_user(&self, username: &str) -> StoreResult<&User> {
        self.users.get(username).ok_or_else(|| not_found(username))
    }

    /// Loads one user by name for folder/file mutations.
    pub fn get_user_mut(&mut self, username: &str) -> StoreResult<&mut User> {
        self.users
            .get_mut(username)
            .ok_or_else(|| not_found(username))
    }

    /// Registered usernames in ascending order.
    pub fn usernames(&self) -> Vec<&str> {
        self.users.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

fn not_found(username: &str) -> StoreError {
    StoreError::NotFound {
        kind: NodeKind::User,
        name: username.to_string(),
    }
}
