use clap::{Parser, Subcommand};

/// CLI surface definition. Running without a subcommand opens the menu.
#[derive(Parser, Debug)]
#[command(
    name = "registro",
    about = "Interactive student registry",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Optional subcommand; defaults to the interactive menu when absent.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Open the interactive student menu.
    Menu,
    /// Print version and exit.
    Version,
}
