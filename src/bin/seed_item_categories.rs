// Seed the default item categories, skipping any the server already has
// (matched case-insensitively). Safe to run repeatedly.

use std::env;
use std::process;

use worldsmith_cli::api::{ensure_scheme, ApiClient};
use worldsmith_cli::flows::{seed_item_categories, DEFAULT_ITEM_CATEGORIES};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: seed_item_categories <server_url>");
        eprintln!("Example: seed_item_categories http://localhost:8000");
        process::exit(1);
    }
    let server_url = ensure_scheme(&args[1]);
    let api = ApiClient::new(&server_url, None)?;

    println!("Seeding default item categories (you can edit these later)...");
    let summary = seed_item_categories(&api, DEFAULT_ITEM_CATEGORIES);
    println!(
        "Created: {}, Already existed: {}, Failed: {}",
        summary.created, summary.existing, summary.failed
    );
    Ok(())
}
