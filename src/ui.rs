// Terminal helpers shared by the binaries: category listings and the
// interactive prompts. The prompts for the upload flow use `dialoguer`;
// the category-name loop reads stdin lines directly so names can also be
// piped in (`cat names.txt | manage_categories <url>`).

use anyhow::Result;
use dialoguer::{Confirm, Input};
use std::io::{self, Write};

use crate::api::{Category, ItemCategory};

pub fn print_categories(categories: &[Category]) {
    if categories.is_empty() {
        println!("\nNo categories found.\n");
        return;
    }
    println!("\n=== Current Categories ===");
    for (idx, category) in categories.iter().enumerate() {
        println!(
            "{}. {} (ID: {})",
            idx + 1,
            category.category_name,
            category.category_id
        );
    }
    println!("\nTotal: {} categories\n", categories.len());
}

pub fn print_item_categories(categories: &[ItemCategory]) {
    println!("\n=== Current Item Categories ===");
    if categories.is_empty() {
        println!("No item categories found.");
    } else {
        for (idx, category) in categories.iter().enumerate() {
            println!("{}. {} (ID: {})", idx + 1, category.name, category.id);
        }
    }
    println!();
}

/// Prompt for category names until `q` is entered or piped input runs
/// out. Empty names are rejected with a message and prompted again; each
/// accepted name is handed to `handle`.
pub fn category_name_loop(mut handle: impl FnMut(&str)) -> Result<()> {
    let stdin = io::stdin();
    loop {
        print!("Enter category name: ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let name = line.trim();
        if name == "q" {
            break;
        }
        if name.is_empty() {
            println!("Category name cannot be empty.\n");
            continue;
        }
        handle(name);
    }
    Ok(())
}

/// Numbered, 1-based category pick. Non-numeric or out-of-range input is
/// rejected and prompted again.
pub fn select_category(categories: &[Category]) -> Result<i64> {
    println!("\nAvailable categories:");
    for (idx, category) in categories.iter().enumerate() {
        println!(
            "{}. {} (ID: {})",
            idx + 1,
            category.category_name,
            category.category_id
        );
    }
    let count = categories.len();
    let choice: usize = Input::new()
        .with_prompt("Select category number")
        .validate_with(move |n: &usize| {
            if (1..=count).contains(n) {
                Ok(())
            } else {
                Err(format!("Please enter a number between 1 and {}", count))
            }
        })
        .interact_text()?;
    let selected = &categories[choice - 1];
    println!("Selected: {}", selected.category_name);
    Ok(selected.category_id)
}

/// Ask which file extensions to pick up, already cleaned of dots and
/// whitespace.
pub fn prompt_extensions() -> Result<Vec<String>> {
    let raw: String = Input::new()
        .with_prompt("Enter file extensions to upload (comma-separated, e.g., png,jpg)")
        .interact_text()?;
    Ok(crate::flows::parse_extensions(&raw))
}

/// Show the pending work and require an explicit yes before uploading.
pub fn confirm_upload(pending: usize, server: &str, category_id: i64) -> Result<bool> {
    println!("\nFound {} files to upload", pending);
    println!("Server: {}", server);
    println!("Category ID: {}\n", category_id);
    Ok(Confirm::new()
        .with_prompt("Proceed with upload?")
        .default(false)
        .interact()?)
}
