use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::Verbosity;
use log::info;
use unit_converter::conversion::convert_expression;

/// Converts a quantity between metric and imperial units
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Arguments {
    /// The quantity to convert, e.g. "3/2lbs", "10.5gal" or "km"
    input: String,

    /// Also print the parsed and the converted quantity on separate lines
    #[clap(short, long)]
    details: bool,

    #[clap(flatten)]
    verbose: Verbosity,
}

fn main() -> Result<()> {
    let args = Arguments::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .parse_default_env()
        .init();

    info!("Converting {:?}", args.input);
    let conversion = convert_expression(&args.input)
        .with_context(|| format!("Could not convert {:?}", args.input))?;

    println!("{}", conversion);
    if args.details {
        println!(
            "initial: {} {}",
            conversion.initial_value, conversion.initial_unit
        );
        println!(
            "converted: {} {}",
            conversion.converted_value, conversion.converted_unit
        );
    }

    Ok(())
}
