/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::{env, process};

use clap::{ArgAction, Parser};
use dim::{parse_quantity, parse_unit, DimError, FormatRegistry, Quantity};

#[derive(Parser)]
#[clap(version = env!("CARGO_PKG_VERSION"))]
/// Unit Parser
///
/// Parses unit expressions or quantities and outputs a JSON
/// representation of their value in SI base units and their dimension.
struct Args {
    #[clap(long, short)]
    /// Parse the input as `<number> <unit>` instead of a bare unit.
    quantity: bool,
    #[clap(long, short)]
    /// Output the result in its default output format.
    format: bool,
    #[clap(short, long, action = ArgAction::Count)]
    /// Increase log verbosity.
    verbose: u8,
    /// The units or quantities to parse.
    input: Vec<String>,
}

impl Args {
    fn init_logger(&self) {
        if let Err(e) = simplelog::TermLogger::init(
            match self.verbose {
                0 => simplelog::LevelFilter::Warn,
                1 => simplelog::LevelFilter::Info,
                2 => simplelog::LevelFilter::Debug,
                3.. => simplelog::LevelFilter::Trace,
            },
            simplelog::ConfigBuilder::new().build(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ) {
            eprintln!("Error: failed to initialize logging: {}", e);
            process::exit(1);
        }
    }

    fn parse_input(&self, input: &str) -> Result<Quantity, DimError> {
        match self.quantity {
            true => parse_quantity(input),
            false => parse_unit(input),
        }
    }
}

fn run(args: &Args) -> Result<(), DimError> {
    let registry = FormatRegistry::si();
    for input in &args.input {
        let q = args.parse_input(input)?;
        let json = match args.format {
            false => serde_json::to_string(&q),
            true => serde_json::to_string(&registry.format(q)?),
        }
        .map_err(|e| DimError::Json(e.to_string()))?;
        println!("{}", json);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    args.init_logger();

    if let Err(err) = run(&args) {
        eprintln!("{}", err);
        process::exit(1)
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use dim::si;

    use super::Args;

    #[test]
    fn command_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn parse_arguments() {
        let args = Args::try_parse_from(["parse_unit", "-q", "-vv", "5 m"])
            .unwrap();
        assert!(args.quantity);
        assert!(!args.format);
        assert_eq!(args.verbose, 2);
        let q = args.parse_input(&args.input[0]).unwrap();
        assert_eq!((q.0, q.1), (5.0, si::LENGTH));

        let args = Args::try_parse_from(["parse_unit", "kg*m/s^2"]).unwrap();
        let q = args.parse_input(&args.input[0]).unwrap();
        assert_eq!(q.1, si::FORCE);
    }
}
