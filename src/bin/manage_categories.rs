// Interactive cosmetic-category management: list what the server already
// has, then create categories until `q` is entered. Names can also be
// piped on stdin for unattended seeding.

use std::env;
use std::process;
use std::thread;

use worldsmith_cli::api::{ApiClient, ApiError};
use worldsmith_cli::flows::CREATE_DELAY;
use worldsmith_cli::ui;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: manage_categories <server_url> [auth_token]");
        eprintln!("Example (manual): manage_categories http://localhost:8000");
        eprintln!("Example (automatic): cat categories.txt | manage_categories http://localhost:8000");
        process::exit(1);
    }
    let api = ApiClient::new(&args[1], args.get(2).cloned())?;

    println!("Existing categories:");
    match api.fetch_categories() {
        Ok(categories) => ui::print_categories(&categories),
        Err(e) => println!("Failed to fetch categories: {}", e),
    }

    println!("Add new categories (q to exit):");
    ui::category_name_loop(|name| match api.create_category(name) {
        Ok(category) => {
            println!(
                "✓ Created: {} (ID: {})\n",
                category.category_name, category.category_id
            );
            thread::sleep(CREATE_DELAY);
        }
        Err(ApiError::Conflict) => println!("✗ Category '{}' already exists\n", name),
        Err(ApiError::Status { status, body }) => {
            println!("✗ Failed: {} - {}\n", status.as_u16(), body)
        }
        Err(e) => println!("✗ Error: {}\n", e),
    })?;
    Ok(())
}
