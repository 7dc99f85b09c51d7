//! Nut Code CLI
//!
//! Encode nutrition records into nut:// URLs and decode them back.

use std::error::Error;
use std::io::Read;

use nutcodes::build_info::BuildInfo;
use nutcodes::codec::{self, DecodeOptions};
use nutcodes::nutrition::{format_mass, parse_mass, Nutrient};
use nutcodes::{Food, FoodOrServing, Serving};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage:
  nutcode encode [key=mass ...]   Encode nutrients (or JSON from stdin) into a nut:// URL
  nutcode decode <url>            Print the decoded record as JSON
  nutcode show <url>              Print the decoded record as a nutrient list
  nutcode version                 Print build information

Masses accept units: 61, 4.3g, 163mg, 5mcg, 1oz.
Special keys: serving=<mass>, total=<mass>.
Set NUTCODE_STRICT=1 to reject unknown nutrient codes.";

/// Read decoder settings from the environment
fn decode_options() -> DecodeOptions {
    let strict = std::env::var("NUTCODE_STRICT")
        .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(false);

    DecodeOptions {
        strict_nutrient_codes: strict,
    }
}

/// Build a record from `key=mass` arguments
fn record_from_args(args: &[String]) -> Result<FoodOrServing, Box<dyn Error>> {
    let mut food = Food::default();
    let mut serving_mass = None;

    for arg in args {
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| format!("Expected key=mass, got '{}'", arg))?;
        let mass = parse_mass(value).ok_or_else(|| format!("Invalid mass '{}' for {}", value, key))?;

        match key.trim().to_lowercase().as_str() {
            "serving" => serving_mass = Some(mass),
            "total" | "total_mass" => food.total_mass = mass,
            other => {
                let nutrient =
                    Nutrient::from_key(other).ok_or_else(|| format!("Unknown nutrient '{}'", other))?;
                nutrient.set(&mut food, mass);
            }
        }
    }

    Ok(match serving_mass {
        Some(mass) => Serving::new(food, mass).into(),
        None => food.into(),
    })
}

/// Read a JSON record from stdin
fn record_from_stdin() -> Result<FoodOrServing, Box<dyn Error>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(serde_json::from_str(&input)?)
}

fn url_arg(args: &[String]) -> Result<&str, Box<dyn Error>> {
    match args {
        [url] => Ok(url.as_str()),
        _ => Err(format!("Expected exactly one nut:// URL\n\n{}", USAGE).into()),
    }
}

fn decode_arg(args: &[String]) -> Result<FoodOrServing, Box<dyn Error>> {
    let url = url::Url::parse(url_arg(args)?.trim())?;
    Ok(codec::parse_with(&url, decode_options())?)
}

fn print_record(record: &FoodOrServing) {
    if let Some(serving) = record.as_serving() {
        let label = serving.description.as_deref().unwrap_or("Serving");
        println!("{}: {}", label, format_mass(serving.mass));
    }

    println!("Per {}:", format_mass(record.food().total_mass));
    for (nutrient, mass) in record.food().nutrients() {
        println!("  {:<22} {}", nutrient.name(), format_mass(mass));
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Logs go to stderr so stdout stays clean for piping
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("nutcodes=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };

    match command.as_str() {
        "encode" => {
            let record = if rest.is_empty() {
                record_from_stdin()?
            } else {
                record_from_args(rest)?
            };
            let url = codec::urlify(&record)?;
            tracing::debug!("Encoded {} characters", url.as_str().len());
            println!("{}", url);
        }
        "decode" => {
            let record = decode_arg(rest)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        "show" => {
            let record = decode_arg(rest)?;
            print_record(&record);
        }
        "version" | "--version" | "-V" => {
            println!("{}", BuildInfo::current());
        }
        "help" | "--help" | "-h" => {
            println!("{}", USAGE);
        }
        other => {
            eprintln!("Unknown command '{}'\n\n{}", other, USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}
