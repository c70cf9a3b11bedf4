//! League tally CLI
//!
//! Tally match records into a standings table, or generate synthetic
//! fixtures to feed it.

use std::env;
use std::io::Read;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use fixture_gen::GenConfig;

mod logger;

fn print_usage() {
    println!("League Tally");
    println!();
    println!("Usage:");
    println!("  tally standings [file] [--format table|json]");
    println!("  tally generate [--teams N] [--seed S] [--config FILE]");
    println!("  tally demo [--teams N] [--seed S]");
    println!();
    println!("Records are read one per line as <first>;<second>;<outcome>,");
    println!("where <outcome> is win, draw or loss for the first-listed team.");
    println!("Blank lines and lines starting with # are skipped.");
    println!();
    println!("Examples:");
    println!("  tally standings results.txt");
    println!("  cat results.txt | tally standings");
    println!("  tally generate --teams 8 --seed 42 | tally standings");
}

/// Read records from a file, or from stdin for `-` or no operand.
fn read_input(source: Option<&str>) -> Result<String> {
    match source {
        Some(path) if path != "-" => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))
        }
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn run_standings(args: &[String]) -> Result<()> {
    let mut file: Option<&str> = None;
    let mut format = String::from("table");

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--format" | "-f" => {
                if i + 1 < args.len() {
                    format = args[i + 1].clone();
                    i += 1;
                }
            }
            arg if arg == "-" || !arg.starts_with('-') => file = Some(arg),
            _ => {}
        }
        i += 1;
    }

    let input = read_input(file)?;
    let table = tally_core::aggregate(&input)?.table();

    tracing::info!(teams = table.len(), "tallied standings");

    match format.as_str() {
        "json" => println!("{}", tally_core::render_json(&table)?),
        "table" => print!("{}", tally_core::render(&table)),
        other => {
            eprintln!("Unknown format: {}, using table", other);
            print!("{}", tally_core::render(&table));
        }
    }

    Ok(())
}

/// Build a generator config from `--config` (if given) plus flag overrides.
fn parse_gen_config(args: &[String]) -> Result<GenConfig> {
    let mut config = GenConfig::default();

    let mut i = 0;
    while i < args.len() {
        if args[i] == "--config" || args[i] == "-c" {
            if i + 1 < args.len() {
                config = GenConfig::load(Path::new(&args[i + 1]))
                    .with_context(|| format!("failed to load {}", args[i + 1]))?;
                i += 1;
            }
        }
        i += 1;
    }

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--teams" | "-t" => {
                if i + 1 < args.len() {
                    config.teams = args[i + 1].parse().unwrap_or(config.teams);
                    i += 1;
                }
            }
            "--seed" | "-s" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    Ok(config)
}

fn run_generate(args: &[String]) -> Result<()> {
    let config = parse_gen_config(args)?;
    let fixtures = fixture_gen::generate(&config);

    tracing::info!(teams = config.teams, fixtures = fixtures.len(), "generated fixtures");

    for line in &fixtures {
        println!("{}", line);
    }

    Ok(())
}

fn run_demo(args: &[String]) -> Result<()> {
    let config = parse_gen_config(args)?;
    let fixtures = fixture_gen::generate(&config);

    println!("=== Demo: {} teams, {} fixtures ===", config.teams, fixtures.len());
    println!();

    let table = tally_core::aggregate(&fixtures.join("\n"))?.table();
    print!("{}", tally_core::render(&table));

    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    logger::init(verbose);

    if args.len() < 2 {
        print_usage();
        return;
    }

    let rest: Vec<String> = args[2..]
        .iter()
        .filter(|a| a.as_str() != "--verbose" && a.as_str() != "-v")
        .cloned()
        .collect();

    let result = match args[1].as_str() {
        "standings" | "tally" => run_standings(&rest),
        "generate" | "gen" => run_generate(&rest),
        "demo" => run_demo(&rest),
        "help" | "--help" | "-h" => {
            print_usage();
            return;
        }
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            print_usage();
            process::exit(2);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
