//! Domain primitives shared by every level of the namespace.
//!
//! # Responsibility
//! - Define the name policy applied to users, folders and files.
//! - Define creation timestamps and the clock seam that stamps them.
//!
//! # Invariants
//! - Timestamps are assigned by registries, never supplied by callers.

pub mod name;
pub mod timestamp;
