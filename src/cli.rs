//! Command-line interface.

use clap::Parser;

/// Rewindable tic-tac-toe in the terminal.
#[derive(Parser, Debug)]
#[command(name = "rewind_tictactoe")]
#[command(about = "Two-player tic-tac-toe with a browsable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Write tracing output to this file (stderr would corrupt the TUI).
    /// Filtered via RUST_LOG; logging is off when the flag is absent.
    #[arg(long)]
    pub log_file: Option<std::path::PathBuf>,
}
