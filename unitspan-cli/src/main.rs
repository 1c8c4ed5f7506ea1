//! unitspan CLI
//!
//! Loads a conversion definition file and runs diagnostic commands
//! against it:
//! - query <from> <to>: look up or derive one conversion
//! - convert <value> <from> <to>: apply a conversion to a value
//! - table: dump the conversion table as a fixed-width grid
//! - saturate: derive everything, then dump the table
//! - complete: report whether every ordered pair is cached
//!
//! `--json` switches query/convert/complete output to JSON.

use std::env;
use std::fs;
use std::process::ExitCode;

use serde_json::json;
use tracing::debug;
use unitspan::{parse, table, ConvertError, UnitConverter};

const USAGE: &str = "\
Usage: unitspan <file> <command> [args] [--json]

Commands:
  query <from> <to>            look up or derive a conversion
  convert <value> <from> <to>  convert a value between units
  table                        print the conversion table
  saturate                     derive all conversions, print the table
  complete                     report completeness of the table
";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let json = args.iter().any(|a| a == "--json");
    args.retain(|a| a != "--json");

    if args.len() < 2 {
        eprint!("{}", USAGE);
        return ExitCode::FAILURE;
    }

    match run(&args, json) {
        Ok(output) => {
            println!("{}", output.trim_end());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String], json: bool) -> Result<String, Box<dyn std::error::Error>> {
    let path = &args[0];
    let command = args[1].as_str();

    let text = fs::read_to_string(path)?;
    let defs = parse::parse_definitions(&text)?;
    debug!(
        units = defs.units.len(),
        conversions = defs.conversions.len(),
        path = %path,
        "loaded definitions"
    );
    let mut converter = UnitConverter::new(defs.units, defs.conversions)?;

    let output = match command {
        "query" => {
            let (from, to) = two_args(args, "query")?;
            let conversion = converter.get_conversion(from, to)?;
            if json {
                json!({
                    "source": from,
                    "target": to,
                    "factor": conversion.factor,
                })
                .to_string()
            } else {
                format!("{} -> {} = {}", from, to, conversion.factor)
            }
        }
        "convert" => {
            if args.len() < 5 {
                return Err(USAGE.into());
            }
            let value: f64 = args[2]
                .parse()
                .map_err(|_| ConvertError::Parse(format!("invalid value '{}'", args[2])))?;
            let (from, to) = (&args[3], &args[4]);
            let result = converter.convert(value, from, to)?;
            if json {
                json!({
                    "value": value,
                    "source": from,
                    "target": to,
                    "result": result,
                })
                .to_string()
            } else {
                format!("{} {} = {} {}", value, from, result, to)
            }
        }
        "table" => table::render(&converter),
        "saturate" => {
            converter.saturate()?;
            table::render(&converter)
        }
        "complete" => {
            let complete = converter.is_complete();
            if json {
                json!({ "complete": complete }).to_string()
            } else {
                format!("complete: {}", complete)
            }
        }
        other => {
            return Err(format!("unknown command '{}'\n{}", other, USAGE).into());
        }
    };

    Ok(output)
}

fn two_args<'a>(args: &'a [String], command: &str) -> Result<(&'a str, &'a str), String> {
    if args.len() < 4 {
        return Err(format!("{} needs <from> <to>\n{}", command, USAGE));
    }
    Ok((args[2].as_str(), args[3].as_str()))
}
