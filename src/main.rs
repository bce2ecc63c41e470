//! codepush-fs - Entry Point
//!
//! Command-line access to the package cache file helpers.

use clap::{Parser, Subcommand};
use log::info;
use std::path::PathBuf;
use std::process::ExitCode;

use codepush_fs::error::handlers::{error_to_exit_code, handle_error};
use codepush_fs::utils::setup_logging;
use codepush_fs::{CacheConfig, CacheError, Directory, FileUtil, FsLocation, LocalFilesystem, Presence};

#[derive(Debug, Parser)]
#[command(name = "codepush-fs", version, about = "Manage the local update package cache")]
struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check whether a directory (or, with --file, a file) exists
    Exists {
        path: String,
        #[arg(long, default_value_t = Directory::Data)]
        dir: Directory,
        #[arg(long)]
        file: bool,
    },
    /// Empty a data directory, creating it if needed, and print its URI
    Clean { path: String },
    /// Print the URI of a path
    Uri {
        path: String,
        #[arg(long, default_value_t = Directory::Data)]
        dir: Directory,
    },
    /// Copy the entries of one directory into another
    Copy {
        source: String,
        destination: String,
        #[arg(long, default_value_t = Directory::Data)]
        from_dir: Directory,
        #[arg(long, default_value_t = Directory::Data)]
        to_dir: Directory,
        /// Entry name to skip (repeatable)
        #[arg(long = "ignore")]
        ignore: Vec<String>,
    },
    /// Recursively delete a data directory
    Rmdir { path: String },
    /// Delete the named files from a data directory
    Prune {
        dir_path: String,
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Print a file's text content
    Read {
        path: String,
        #[arg(long, default_value_t = Directory::Data)]
        dir: Directory,
    },
    /// Write text content to a file
    Write {
        path: String,
        content: String,
        #[arg(long, default_value_t = Directory::Data)]
        dir: Directory,
        /// Accepted for compatibility; a missing file is always created
        #[arg(long)]
        create: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match CacheConfig::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            setup_logging("info");
            let err = CacheError::from(e);
            handle_error(&err);
            return ExitCode::from(error_to_exit_code(&err));
        }
    };

    setup_logging(&config.log_level);
    info!("Data root: {}", config.storage.data.display());

    let util = FileUtil::new(LocalFilesystem::new(config.storage));

    match run(cli.command, &util).await {
        Ok(code) => code,
        Err(err) => {
            handle_error(&err);
            ExitCode::from(error_to_exit_code(&err))
        }
    }
}

async fn run(command: Command, util: &FileUtil<LocalFilesystem>) -> Result<ExitCode, CacheError> {
    match command {
        Command::Exists { path, dir, file } => {
            let presence = if file {
                util.probe_file(dir, &path).await
            } else {
                util.probe_directory(dir, &path).await
            };

            match presence {
                Presence::Exists => {
                    println!("exists");
                    return Ok(ExitCode::SUCCESS);
                }
                Presence::Absent => println!("absent"),
                Presence::QueryFailed(e) => println!("unknown ({e})"),
            }
            return Ok(ExitCode::FAILURE);
        }
        Command::Clean { path } => {
            println!("{}", util.clean_data_directory(&path).await?);
        }
        Command::Uri { path, dir } => {
            println!("{}", util.get_uri(dir, &path).await?);
        }
        Command::Copy {
            source,
            destination,
            from_dir,
            to_dir,
            ignore,
        } => {
            let source = FsLocation::new(from_dir, source);
            let destination = FsLocation::new(to_dir, destination);
            util.copy_directory_entries_to(&source, &destination, ignore.as_slice())
                .await?;
        }
        Command::Rmdir { path } => {
            util.delete_data_directory(&path).await?;
        }
        Command::Prune { dir_path, files } => {
            let summary = util.delete_entries_from_data_directory(&dir_path, files.as_slice()).await;
            for path in &summary.deleted {
                println!("deleted {path}");
            }
            for path in &summary.skipped {
                println!("skipped {path}");
            }
            for path in &summary.failed {
                println!("failed {path}");
            }
            if !summary.is_clean() {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Read { path, dir } => {
            print!("{}", util.read_file(dir, &path).await?);
        }
        Command::Write {
            path,
            content,
            dir,
            create,
        } => {
            util.write_string_to_file(&content, dir, &path, create).await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_copy_with_ignores() {
        let cli = Cli::parse_from([
            "codepush-fs",
            "copy",
            "download/unzipped",
            "codepush/new",
            "--from-dir",
            "cache",
            "--ignore",
            "Thumbs.db",
            "--ignore",
            "desktop.ini",
        ]);

        match cli.command {
            Command::Copy {
                from_dir,
                to_dir,
                ignore,
                ..
            } => {
                assert_eq!(from_dir, Directory::Cache);
                assert_eq!(to_dir, Directory::Data);
                assert_eq!(ignore, vec!["Thumbs.db", "desktop.ini"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
