//! Command synopsis table and help text.

pub const REGISTER_USAGE: &str = "Usage: register [username]";
pub const CREATE_FOLDER_USAGE: &str =
    "Usage: create-folder [username] [foldername] [description]?";
pub const LIST_FOLDERS_USAGE: &str =
    "Usage: list-folders [username] [--sort-name|--sort-created] [asc|desc]";
pub const DELETE_FOLDER_USAGE: &str = "Usage: delete-folder [username] [foldername]";
pub const RENAME_FOLDER_USAGE: &str =
    "Usage: rename-folder [username] [foldername] [new-folder-name]";
pub const CREATE_FILE_USAGE: &str =
    "Usage: create-file [username] [foldername] [filename] [description]?";
pub const LIST_FILES_USAGE: &str =
    "Usage: list-files [username] [foldername] [--sort-name|--sort-created] [asc|desc]";
pub const DELETE_FILE_USAGE: &str = "Usage: delete-file [username] [foldername] [filename]";
pub const HELP_USAGE: &str = "Usage: help";
pub const EXIT_USAGE: &str = "Usage: exit";

pub const HELP_TEXT: &str = "\
Available commands:
  register [username]                                                         - Register a new user
  create-folder [username] [foldername] [description]?                        - Create a new folder
  list-folders [username] [--sort-name|--sort-created] [asc|desc]             - List folders for a user
  delete-folder [username] [foldername]                                       - Delete a folder
  rename-folder [username] [foldername] [new-folder-name]                     - Rename a folder
  create-file [username] [foldername] [filename] [description]?               - Create a new file
  list-files [username] [foldername] [--sort-name|--sort-created] [asc|desc]  - List files in a folder
  delete-file [username] [foldername] [filename]                              - Delete a file
  help                                                                        - Show this help message
  exit                                                                        - Exit the program

Note: Parameters in square brackets [] are required, those with ? are optional.
For sorting, you can use either --sort-name or --sort-created, followed by asc (ascending) or desc (descending).
";
