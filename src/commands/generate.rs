//! Generate command implementation

use std::io::Write;

use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::data::{format_json, format_table, FakeGenerator, FormatOptions, Generator};
use crate::error::Result;

/// Run the generate command
pub fn run(args: GenerateArgs, config: &Config) -> Result<()> {
    let output = render(&args, config)?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

/// Build the command's output without printing it
pub fn render(args: &GenerateArgs, config: &Config) -> Result<String> {
    let seed = args.seed.or(config.list.seed);
    tracing::info!(count = args.count, ?seed, "Generating records");

    let mut generator = FakeGenerator::from_seed_opt(seed);
    let records = generator.records(args.count);

    if args.json {
        let mut json = format_json(&records, true)?;
        json.push('\n');
        return Ok(json);
    }

    let currency = args
        .currency
        .clone()
        .unwrap_or_else(|| config.list.currency_symbol.clone());
    let options = FormatOptions::new().with_currency(currency);

    Ok(format_table(&records, &options))
}
