//! Core of the virtual file system shell.
//! Users own folders, folders own files; everything lives in memory.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::name::{
    is_valid_name, MAX_FILE_NAME_LEN, MAX_FOLDER_NAME_LEN, MAX_NAME_CHARS, MAX_USERNAME_LEN,
};
pub use model::timestamp::{Clock, SharedClock, SystemClock, Timestamp, TIMESTAMP_FORMAT};
pub use repo::error::{NodeKind, StoreError, StoreResult};
pub use repo::file_repo::{File, FileRegistry};
pub use repo::folder_repo::{Folder, FolderRegistry};
pub use repo::listing::{ListQuery, SortKey, SortOrder};
pub use repo::user_repo::{User, UserDirectory};
pub use service::shell_service::{ShellCommand, ShellError, ShellOutput, ShellService};
pub use service::tokenizer::parse_input;
pub use service::usage::HELP_TEXT;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
