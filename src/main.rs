use anyhow::Result;

use swiss_tournament::{execute, interpret, load_config, logging};

fn main() {
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn parse_and_execute() -> Result<()> {
    let cli = interpret();
    let config = load_config(&cli)?;
    logging::init(&config.logging.level)?;
    execute(&cli, &config)
}
