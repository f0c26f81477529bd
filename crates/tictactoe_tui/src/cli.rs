//! Command-line interface for the terminal board.

use clap::Parser;
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML theme file (colors for marks, highlights and grid)
    #[arg(long)]
    pub theme: Option<PathBuf>,

    /// File to write logs to (the terminal is taken by the board)
    #[arg(long, default_value = "tictactoe.log")]
    pub log_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tictactoe"]).expect("no args is valid");
        assert_eq!(cli.theme, None);
        assert_eq!(cli.log_file, PathBuf::from("tictactoe.log"));
    }

    #[test]
    fn test_theme_and_log_file() {
        let cli = Cli::try_parse_from([
            "tictactoe",
            "--theme",
            "dark.toml",
            "--log-file",
            "/tmp/ttt.log",
        ])
        .expect("valid args");
        assert_eq!(cli.theme, Some(PathBuf::from("dark.toml")));
        assert_eq!(cli.log_file, PathBuf::from("/tmp/ttt.log"));
    }
}
