//! Interactive shell over the in-memory virtual file system.
//!
//! # Responsibility
//! - Read configuration from flags and environment.
//! - Run the line-editing REPL and print command results.
//!
//! Usage:
//!   vfs                          # start the shell, logging to the temp dir
//!   vfs --log-dir /var/log/vfs   # choose the log directory
//!   vfs --no-log                 # run without file logging

use anyhow::Result;
use clap::Parser;
use log::info;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use vfs_core::{default_log_level, init_logging, ShellOutput, ShellService};

const PROMPT: &str = "> ";
const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Virtual file system management shell
#[derive(Parser, Debug)]
#[command(name = "vfs")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log level: trace|debug|info|warn|error
    #[arg(long, env = "VFS_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files
    #[arg(long, env = "VFS_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Disable file logging
    #[arg(long)]
    no_log: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if !args.no_log {
        start_logging(&args);
    }

    let mut shell = ShellService::new();
    let mut editor = DefaultEditor::new()?;

    print!("{CLEAR_SCREEN}");
    println!("Welcome to Virtual File System Management REPL");
    println!("Type 'help' to see the list of commands");

    loop {
        println!();
        let line = match editor.readline(PROMPT) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => {
                eprintln!("Error: {err}");
                continue;
            }
        };
        if !line.trim().is_empty() {
            let _ = editor.add_history_entry(line.as_str());
        }

        match shell.execute_line(&line) {
            Ok(ShellOutput::Text(text)) => print!("{text}"),
            Ok(ShellOutput::Exit) => {
                print!("{CLEAR_SCREEN}");
                break;
            }
            Err(err) => eprintln!("{}", err.render()),
        }
    }

    info!("event=shell_exit module=cli status=ok");
    log::logger().flush();
    Ok(())
}

fn start_logging(args: &Args) {
    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| default_log_level().to_string());
    let log_dir = args
        .log_dir
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("vfs-shell").join("logs"));

    if let Err(err) = init_logging(&level, &log_dir.to_string_lossy()) {
        eprintln!("warning: logging disabled: {err}");
    }
}
