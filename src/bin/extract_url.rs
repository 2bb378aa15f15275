//! Fetch a URL, extract its article and print it as JSON.
//!
//! Usage: `extract_url <url> [timeout_secs]`
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use std::env;
use std::process;
use std::time::Duration;

use rs_readability::extract;
use tracing_subscriber::EnvFilter;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(url) = args.get(1) else {
        let program = args.first().map_or("extract_url", String::as_str);
        eprintln!("Usage: {program} <url> [timeout_secs]");
        process::exit(2);
    };

    let timeout_secs = match args.get(2).map(|s| s.parse::<u64>()) {
        None => DEFAULT_TIMEOUT_SECS,
        Some(Ok(secs)) => secs,
        Some(Err(e)) => {
            eprintln!("Invalid timeout {:?}: {e}", args[2]);
            process::exit(2);
        }
    };

    match extract(url, Duration::from_secs(timeout_secs)) {
        Ok(article) => match serde_json::to_string_pretty(&article) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Failed to serialize article: {e}");
                process::exit(1);
            }
        },
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
