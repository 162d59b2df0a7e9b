// Chunk: docs/chunks/terminal_surface - Terminal front end for the launcher
//!
//! arun: an interactive application launcher for the terminal.
//!
//! Startup order:
//!
//! 1. Logging, then configuration (fatal if invalid)
//! 2. Scan `$PATH` once for the candidate universe
//! 3. Open the terminal (fatal if it is not a terminal)
//! 4. Run the event loop until commit or cancel
//! 5. Restore the terminal, then hand the command to the shell
//!
//! Exit status is 0 after a successful hand-off and 1 otherwise.

use std::io;
use std::process::ExitCode;

use anyhow::{Context, Result};

use arun::{
    logging, CandidateSource, EventLoop, Exit, LauncherConfig, Launcher, PathScanner,
    ProcessLauncher, ShellLauncher, TerminalRenderer, TerminalSession,
};

fn main() -> ExitCode {
    let _guard = logging::init();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            tracing::error!(error = ?err, "arun failed");
            eprintln!("arun: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Runs the launcher. Returns `Ok(true)` if a command was launched.
fn run() -> Result<bool> {
    let config = LauncherConfig::load().context("failed to load configuration")?;
    let palette = config.palette()?;

    let universe = PathScanner::from_env().load();
    tracing::info!(candidates = universe.len(), "loaded candidates");

    let mut session = TerminalSession::open().context("failed to set up the terminal")?;
    let renderer = TerminalRenderer::new(io::stdout(), palette, config.display_width);

    let launcher = Launcher::from_config(&universe, &config);
    let exit = EventLoop::new(launcher, &mut session, renderer)
        .run()
        .context("terminal I/O failed")?;

    // Release the terminal before anything else touches it
    session.restore();

    match exit {
        Exit::Commit(command) => {
            ShellLauncher::new(&config.shell)
                .launch(&command)
                .with_context(|| format!("failed to launch {command:?}"))?;
            Ok(true)
        }
        Exit::Cancelled => Ok(false),
    }
}
