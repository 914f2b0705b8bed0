//! In-memory namespace store: users own folders, folders own files.
//!
//! # Responsibility
//! - Enforce uniqueness, name validation and lifecycle rules per level.
//! - Provide deterministic sorted listings over folders and files.
//!
//! # Invariants
//! - Ownership is strictly tree shaped with no back-references.
//! - Every mutation either fully applies or changes nothing.
//! - Store errors are returned to the caller, never logged here.

pub mod error;
pub mod file_repo;
pub mod folder_repo;
pub mod listing;
pub mod user_repo;
