//! Shell command layer over the namespace store.
//!
//! # Responsibility
//! - Check argument arity and translate argv into store calls.
//! - Fold user, folder and file names to lowercase before lookup.
//! - Render successes as text and errors as display lines.
//!
//! # Invariants
//! - Usage errors are a distinct kind, never inferred from message text.
//! - Descriptions are forwarded exactly as tokenized.
//! - Every command outcome is logged here, at the boundary.

use crate::model::timestamp::Timestamp;
use crate::repo::error::StoreError;
use crate::repo::listing::ListQuery;
use crate::repo::user_repo::UserDirectory;
use crate::service::tokenizer::parse_input;
use crate::service::usage::{
    CREATE_FILE_USAGE, CREATE_FOLDER_USAGE, DELETE_FILE_USAGE, DELETE_FOLDER_USAGE, EXIT_USAGE,
    HELP_TEXT, HELP_USAGE, LIST_FILES_USAGE, LIST_FOLDERS_USAGE, REGISTER_USAGE,
    RENAME_FOLDER_USAGE,
};
use log::{debug, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_SORT_KEY: &str = "--sort-name";
const DEFAULT_SORT_ORDER: &str = "asc";

/// Successful command outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellOutput {
    /// Text for stdout; may be empty.
    Text(String),
    /// The shell should terminate.
    Exit,
}

/// Failed command outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// Wrong arity or malformed flags; carries the command synopsis.
    Usage(&'static str),
    /// Data error from the store.
    Store(StoreError),
    /// First token is not a known command.
    UnrecognizedCommand(String),
}

impl ShellError {
    /// Renders the line shown to the user.
    pub fn render(&self) -> String {
        match self {
            Self::Usage(usage) => (*usage).to_string(),
            Self::Store(err) => format!("Error: {err}"),
            Self::UnrecognizedCommand(_) => "Error: Unrecognized command".to_string(),
        }
    }

    /// Stable machine-readable code used in diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usage(_) => "usage",
            Self::Store(err) => err.code(),
            Self::UnrecognizedCommand(_) => "unrecognized_command",
        }
    }
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Usage(usage) => write!(f, "{usage}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::UnrecognizedCommand(name) => write!(f, "unrecognized command `{name}`"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for ShellError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Known shell commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    Register,
    CreateFolder,
    ListFolders,
    DeleteFolder,
    RenameFolder,
    CreateFile,
    ListFiles,
    DeleteFile,
    Help,
    Exit,
}

impl ShellCommand {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "register" => Some(Self::Register),
            "create-folder" => Some(Self::CreateFolder),
            "list-folders" => Some(Self::ListFolders),
            "delete-folder" => Some(Self::DeleteFolder),
            "rename-folder" => Some(Self::RenameFolder),
            "create-file" => Some(Self::CreateFile),
            "list-files" => Some(Self::ListFiles),
            "delete-file" => Some(Self::DeleteFile),
            "help" => Some(Self::Help),
            "exit" => Some(Self::Exit),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Register => "register",
            Self::CreateFolder => "create-folder",
            Self::ListFolders => "list-folders",
            Self::DeleteFolder => "delete-folder",
            Self::RenameFolder => "rename-folder",
            Self::CreateFile => "create-file",
            Self::ListFiles => "list-files",
            Self::DeleteFile => "delete-file",
            Self::Help => "help",
            Self::Exit => "exit",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Self::Register => REGISTER_USAGE,
            Self::CreateFolder => CREATE_FOLDER_USAGE,
            Self::ListFolders => LIST_FOLDERS_USAGE,
            Self::DeleteFolder => DELETE_FOLDER_USAGE,
            Self::RenameFolder => RENAME_FOLDER_USAGE,
            Self::CreateFile => CREATE_FILE_USAGE,
            Self::ListFiles => LIST_FILES_USAGE,
            Self::DeleteFile => DELETE_FILE_USAGE,
            Self::Help => HELP_USAGE,
            Self::Exit => EXIT_USAGE,
        }
    }

    /// Inclusive bounds on arguments after the command name.
    fn arity(self) -> (usize, usize) {
        match self {
            Self::Register => (1, 1),
            Self::CreateFolder => (2, 3),
            Self::ListFolders => (1, 3),
            Self::DeleteFolder => (2, 2),
            Self::RenameFolder => (3, 3),
            Self::CreateFile => (3, 4),
            Self::ListFiles => (2, 4),
            Self::DeleteFile => (3, 3),
            Self::Help | Self::Exit => (0, 0),
        }
    }
}

/// Command layer owning one user directory.
#[derive(Debug, Default)]
pub struct ShellService {
    directory: UserDirectory,
}

impl ShellService {
    /// Creates a shell over an empty wall-clock directory.
    pub fn new() -> Self {
        Self::with_directory(UserDirectory::new())
    }

    /// Creates a shell over a caller-provided directory.
    pub fn with_directory(directory: UserDirectory) -> Self {
        Self { directory }
    }

    pub fn directory(&self) -> &UserDirectory {
        &self.directory
    }

    /// Tokenizes and executes one input line. Blank lines produce no text.
    pub fn execute_line(&mut self, line: &str) -> Result<ShellOutput, ShellError> {
        let args = parse_input(line);
        if args.is_empty() {
            return Ok(ShellOutput::Text(String::new()));
        }
        self.execute(&args)
    }

    /// Executes one tokenized command, command name first.
    pub fn execute(&mut self, argv: &[String]) -> Result<ShellOutput, ShellError> {
        let Some((name, args)) = argv.split_first() else {
            return Ok(ShellOutput::Text(String::new()));
        };

        let command = ShellCommand::from_name(name);
        let result = match command {
            Some(command) => self.dispatch(command, args),
            None => Err(ShellError::UnrecognizedCommand(name.clone())),
        };

        let command_name = command_label(command);
        match &result {
            Ok(_) => debug!("event=command module=shell status=ok command={command_name}"),
            Err(err) => warn!(
                "event=command module=shell status=error command={command_name} error_code={}",
                err.code()
            ),
        }
        result
    }

    fn dispatch(
        &mut self,
        command: ShellCommand,
        args: &[String],
    ) -> Result<ShellOutput, ShellError> {
        let (min, max) = command.arity();
        if args.len() < min || args.len() > max {
            return Err(ShellError::Usage(command.usage()));
        }

        let text = match command {
            ShellCommand::Register => self.register(args)?,
            ShellCommand::CreateFolder => self.create_folder(args)?,
            ShellCommand::ListFolders => self.list_folders(args)?,
            ShellCommand::DeleteFolder => self.delete_folder(args)?,
            ShellCommand::RenameFolder => self.rename_folder(args)?,
            ShellCommand::CreateFile => self.create_file(args)?,
            ShellCommand::ListFiles => self.list_files(args)?,
            ShellCommand::DeleteFile => self.delete_file(args)?,
            ShellCommand::Help => HELP_TEXT.to_string(),
            ShellCommand::Exit => return Ok(ShellOutput::Exit),
        };
        Ok(ShellOutput::Text(text))
    }

    fn register(&mut self, args: &[String]) -> Result<String, ShellError> {
        let username = fold_name(&args[0]);
        self.directory.register_user(&username)?;
        Ok(format!("Add {username} successfully\n"))
    }

    fn create_folder(&mut self, args: &[String]) -> Result<String, ShellError> {
        let username = fold_name(&args[0]);
        let folder_name = fold_name(&args[1]);
        let description = args.get(2).map_or("", String::as_str);

        self.directory
            .get_user_mut(&username)?
            .folders_mut()
            .create_folder(&folder_name, description)?;
        Ok(format!("Create {folder_name} successfully\n"))
    }

    fn list_folders(&mut self, args: &[String]) -> Result<String, ShellError> {
        let username = fold_name(&args[0]);
        let query = parse_list_query(args.get(1), args.get(2), LIST_FOLDERS_USAGE)?;

        let user = self.directory.get_user(&username)?;
        let mut output = String::new();
        for folder in user.folders().list_folders(query) {
            push_listing_line(
                &mut output,
                folder.name(),
                folder.description(),
                folder.created_at(),
                user.username(),
            );
        }
        Ok(output)
    }

    fn delete_folder(&mut self, args: &[String]) -> Result<String, ShellError> {
        let username = fold_name(&args[0]);
        let folder_name = fold_name(&args[1]);

        self.directory
            .get_user_mut(&username)?
            .folders_mut()
            .delete_folder(&folder_name)?;
        Ok(format!("Delete {folder_name} successfully\n"))
    }

    fn rename_folder(&mut self, args: &[String]) -> Result<String, ShellError> {
        let username = fold_name(&args[0]);
        let folder_name = fold_name(&args[1]);
        let new_folder_name = fold_name(&args[2]);

        self.directory
            .get_user_mut(&username)?
            .folders_mut()
            .rename_folder(&folder_name, &new_folder_name)?;
        Ok(format!(
            "Rename {folder_name} to {new_folder_name} successfully\n"
        ))
    }

    fn create_file(&mut self, args: &[String]) -> Result<String, ShellError> {
        let username = fold_name(&args[0]);
        let folder_name = fold_name(&args[1]);
        let file_name = fold_name(&args[2]);
        let description = args.get(3).map_or("", String::as_str);

        self.directory
            .get_user_mut(&username)?
            .folders_mut()
            .get_folder_mut(&folder_name)?
            .files_mut()
            .create_file(&file_name, description)?;
        Ok(format!(
            "Create {file_name} in {username}/{folder_name} successfully\n"
        ))
    }

    fn list_files(&mut self, args: &[String]) -> Result<String, ShellError> {
        let username = fold_name(&args[0]);
        let folder_name = fold_name(&args[1]);
        let query = parse_list_query(args.get(2), args.get(3), LIST_FILES_USAGE)?;

        let user = self.directory.get_user(&username)?;
        let folder = user.folders().get_folder(&folder_name)?;
        let mut output = String::new();
        for file in folder.files().list_files(query) {
            push_listing_line(
                &mut output,
                file.name(),
                file.description(),
                file.created_at(),
                user.username(),
            );
        }
        Ok(output)
    }

    fn delete_file(&mut self, args: &[String]) -> Result<String, ShellError> {
        let username = fold_name(&args[0]);
        let folder_name = fold_name(&args[1]);
        let file_name = fold_name(&args[2]);

        self.directory
            .get_user_mut(&username)?
            .folders_mut()
            .get_folder_mut(&folder_name)?
            .files_mut()
            .delete_file(&file_name)?;
        Ok(format!(
            "Deleted file {file_name} from {username}/{folder_name} successfully\n"
        ))
    }
}

/// Log label for a command; raw input never reaches the log.
fn command_label(command: Option<ShellCommand>) -> &'static str {
    command.map_or("unknown", ShellCommand::name)
}

fn fold_name(value: &str) -> String {
    value.to_lowercase()
}

fn parse_list_query(
    sort_by: Option<&String>,
    order: Option<&String>,
    usage: &'static str,
) -> Result<ListQuery, ShellError> {
    let sort_by = sort_by.map_or(DEFAULT_SORT_KEY, String::as_str);
    let order = order.map_or(DEFAULT_SORT_ORDER, String::as_str);
    // Listings only accept the flag spelling at the shell.
    if sort_by != "--sort-name" && sort_by != "--sort-created" {
        return Err(ShellError::Usage(usage));
    }
    ListQuery::parse(sort_by, order).map_err(|_| ShellError::Usage(usage))
}

/// Appends `<name>[ <description>] <created_at> <owner>\n`.
fn push_listing_line(
    output: &mut String,
    name: &str,
    description: &str,
    created_at: Timestamp,
    owner: &str,
) {
    output.push_str(name);
    if !description.is_empty() {
        output.push(' ');
        output.push_str(description);
    }
    output.push_str(&format!(" {created_at} {owner}\n"));
}
