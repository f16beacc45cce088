use std::io::{self, Read};

use clap::Parser;
use relata::engine::RecommendConfig;
use relata::ops;
use serde_json::Value;

#[derive(Parser)]
#[command(
    name = "relata",
    version,
    about = "Annotate a JSON catalog with related-item recommendations"
)]
struct Cli {
    /// Text vocabulary cap
    #[arg(long, default_value_t = 300)]
    max_features: usize,
    /// Minimum document frequency for text features
    #[arg(long, default_value_t = 1)]
    min_df: usize,
    /// Maximum recommendations per entry
    #[arg(short = 'n', long, default_value_t = 4)]
    max_recommendations: usize,
    /// Width of the Gaussian temporal kernel, in years
    #[arg(long, default_value_t = 3.0)]
    sigma: f64,
    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,
}

fn main() {
    let cli = Cli::parse();

    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        eprintln!("Error reading stdin: {e}");
        std::process::exit(1);
    }

    let rows: Vec<Value> = match serde_json::from_str::<Value>(&input) {
        Ok(Value::Array(rows)) => rows,
        Ok(_) => {
            eprintln!("Error: input must be a JSON array of catalog records");
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("Error parsing JSON input: {e}");
            std::process::exit(1);
        }
    };

    let config = RecommendConfig {
        max_features: cli.max_features,
        min_df: cli.min_df,
        max_recommendations: cli.max_recommendations,
        sigma: cli.sigma,
    };

    let run = ops::op_recommend(&rows, &config);

    for id in &run.report.id_collisions {
        eprintln!("Id collision detected: {id}");
    }
    if !run.report.entries_without_id.is_empty() {
        eprintln!("Entries without defined id:");
        for title in &run.report.entries_without_id {
            eprintln!("  {title}");
        }
    }
    eprintln!(
        "Recommended over {} valid of {} total entries",
        run.report.valid_entries, run.report.total_entries
    );

    let serialized = if cli.pretty {
        serde_json::to_string_pretty(&run.rows)
    } else {
        serde_json::to_string(&run.rows)
    };
    match serialized {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error serializing output: {e}");
            std::process::exit(1);
        }
    }
}
