use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Main command-line interface for the Snake BnB booking tool
///
/// Snake BnB is an interactive console application where hosts register
/// cages and availability windows and guests register snakes and book cages
/// for date ranges. It starts a menu-driven session in either host or guest
/// mode; the mode can be switched from inside the session.
#[derive(Parser)]
#[command(version, about, name = "snakebnb")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/snakebnb/snakebnb.db
    #[arg(long)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long)]
    pub no_color: bool,

    /// Menu to start the session in
    #[arg(value_enum, default_value_t = StartMode::Host)]
    pub mode: StartMode,
}

/// Which menu the session opens with.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StartMode {
    /// Host menu: register cages, manage availability, view bookings
    Host,
    /// Guest menu: add snakes, search and book cages
    Guest,
}
