// Chunk: docs/chunks/terminal_surface - Terminal front end for the launcher
//!
//! Handing the committed command off to a new process.
//!
//! The launcher core only ever sees [`ProcessLauncher::launch`]. Process
//! creation details (shell, process group, standard streams) live here, and
//! the caller releases the terminal before calling it.

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use thiserror::Error;

/// Errors that can occur while launching a command.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("refusing to launch an empty command")]
    EmptyCommand,
    #[error("failed to spawn {}: {source}", .shell.display())]
    Spawn {
        shell: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Runs a command string.
pub trait ProcessLauncher {
    /// Starts `command` and returns without waiting for it.
    fn launch(&self, command: &str) -> Result<(), LaunchError>;
}

/// Runs commands as `<shell> -c <command>`, detached from the launcher.
#[derive(Debug, Clone)]
pub struct ShellLauncher {
    shell: PathBuf,
}

impl ShellLauncher {
    pub fn new(shell: impl Into<PathBuf>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    pub fn shell(&self) -> &Path {
        &self.shell
    }

    fn command(&self, command: &str) -> Command {
        let mut cmd = Command::new(&self.shell);
        cmd.arg("-c").arg(command).stdin(Stdio::null());
        // Detach into a new process group
        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            cmd.process_group(0);
        }
        cmd
    }
}

impl Default for ShellLauncher {
    fn default() -> Self {
        Self::new("/bin/sh")
    }
}

impl ProcessLauncher for ShellLauncher {
    fn launch(&self, command: &str) -> Result<(), LaunchError> {
        if command.trim().is_empty() {
            return Err(LaunchError::EmptyCommand);
        }

        let child = self
            .command(command)
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                shell: self.shell.clone(),
                source,
            })?;
        tracing::info!(pid = child.id(), command, shell = %self.shell.display(), "launched");
        // Dropping the handle neither waits for nor kills the child
        drop(child);
        Ok(())
    }
}
