//! Read HTML from stdin and output the extracted article as JSON.
//!
//! Usage: `extract_stdin <base_url> < page.html`
//!
//! The base URL resolves relative links and images in the content.

use std::env;
use std::io::{self, Read};
use std::process;

use rs_readability::{extract_bytes, Options};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(false)
        .init();

    let args: Vec<String> = env::args().collect();
    let Some(base_url) = args.get(1) else {
        let program = args.first().map_or("extract_stdin", String::as_str);
        eprintln!("Usage: {program} <base_url> < page.html");
        process::exit(2);
    };

    // Read bytes so that non-UTF-8 pages are decoded by their declared charset.
    let mut html = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut html) {
        eprintln!("Failed to read from stdin: {e}");
        process::exit(1);
    }

    let article = match extract_bytes(&html, None, base_url, &Options::default()) {
        Ok(article) => article,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match serde_json::to_string(&article) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize article: {e}");
            process::exit(1);
        }
    }
}
