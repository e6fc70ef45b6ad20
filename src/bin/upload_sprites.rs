// Bulk sprite upload: pick a category, pick file extensions, glob the
// assets folder, confirm, then upload one file at a time. Partial failure
// is reported but never aborts the batch.

use std::env;
use std::path::Path;
use std::process;

use worldsmith_cli::api::ApiClient;
use worldsmith_cli::flows;
use worldsmith_cli::ui;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: upload_sprites <server_url> <assets_folder_path> [auth_token]");
        eprintln!("Example: upload_sprites http://localhost:8000 ./cosmetics");
        process::exit(1);
    }
    let assets_path = Path::new(&args[2]);
    if !assets_path.is_dir() {
        eprintln!("Error: {} is not a valid directory", assets_path.display());
        process::exit(1);
    }
    let api = ApiClient::new(&args[1], args.get(3).cloned())?;

    let categories = match api.fetch_categories() {
        Ok(categories) if !categories.is_empty() => categories,
        Ok(_) => {
            println!("No categories available or failed to fetch categories");
            return Ok(());
        }
        Err(e) => {
            println!("Failed to fetch categories: {}", e);
            println!("No categories available or failed to fetch categories");
            return Ok(());
        }
    };

    let category_id = ui::select_category(&categories)?;
    let extensions = ui::prompt_extensions()?;
    let files = flows::collect_files(assets_path, &extensions)?;
    if files.is_empty() {
        println!("No files found with extensions: {}", extensions.join(", "));
        return Ok(());
    }

    if !ui::confirm_upload(files.len(), api.base_url(), category_id)? {
        println!("Upload cancelled");
        return Ok(());
    }

    let summary = flows::upload_files(&api, &files, category_id);
    println!("\n--- Summary ---");
    println!("Successfully uploaded: {}", summary.uploaded);
    println!("Failed: {}", summary.failed);
    Ok(())
}
