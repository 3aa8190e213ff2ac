use anyhow::Result;
use clap::Parser;
use gradebook::{FileStore, GradeStore};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod prompter;
mod settings;
mod table;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(format!("gradebook={}", level).parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = settings::resolve(cli.data_dir.as_deref(), cli.config.as_deref())?;
    let mut store = GradeStore::open(FileStore::new(&config.data_dir), &config);

    match cli.command {
        Command::Import { file } => commands::import::run(&mut store, &file),
        Command::Show => commands::show::run(&store),
        Command::Edit { row, field, value } => {
            commands::edit::run(&mut store, cli::row_index(row)?, &field, &value)
        }
        Command::Add => commands::add::run(&mut store),
        Command::Delete { row, yes } => commands::delete::run(&mut store, cli::row_index(row)?, yes),
        Command::Stats { json } => commands::stats::run(&store, json),
        Command::Export { format, output } => {
            commands::export::run(&store, format.into(), output.as_deref())
        }
        Command::Clear { yes } => commands::clear::run(&mut store, yes),
    }
}
