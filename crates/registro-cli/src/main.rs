mod cli;
mod menu;
mod prompt;

use std::io;

use clap::Parser;
use color_eyre::Result;
use registro_core::{format::NumberFormat, registry::InMemoryRegistry};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Entry point wiring the CLI to the interactive menu.
fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing();

    let cli = cli::Cli::parse();
    match cli.command.unwrap_or(cli::Command::Menu) {
        cli::Command::Menu => run_menu()?,
        cli::Command::Version => print_version(),
    }

    Ok(())
}

fn init_tracing() {
    // Logs go to stderr so the menu on stdout stays untouched.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(io::stderr);
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}

fn print_version() {
    println!("registro {}", env!("CARGO_PKG_VERSION"));
}

fn run_menu() -> Result<()> {
    let console = prompt::Console::new(io::stdin().lock(), io::stdout().lock());
    let mut session =
        menu::Session::new(InMemoryRegistry::new(), console, NumberFormat::default());
    session.run()
}
