use std::io::{self, Write};
use std::process;

use clap::Parser;
use common::Config;
use generator::{output_targets, write_targets, ArityTable, Generator, GeneratorError};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    // Logs go to stderr; stdout is reserved for the generated source.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::parse();

    if let Err(e) = run(&config) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), GeneratorError> {
    let table = match config.table() {
        Some(text) => text.parse::<ArityTable>()?,
        None => ArityTable::default(),
    };
    let generator = Generator::new(table);

    if config.list_only() {
        let mut stdout = io::stdout().lock();
        for symbol in generator.symbols() {
            writeln!(stdout, "{symbol}")?;
        }
        return Ok(());
    }

    let targets = output_targets(config)?;
    let source = generator.render()?;
    write_targets(&targets, &source)
}
