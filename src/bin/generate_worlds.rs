// Authenticate, then generate and submit a batch of randomly named
// worlds. The server base URL comes from `WORLD_SERVER_URL`, defaulting
// to the local development server; the naming strategy is picked by
// `WORLD_NAME_STRATEGY` (see `namegen`).

use std::env;
use std::process;

use indicatif::{ProgressBar, ProgressStyle};
use worldsmith_cli::api::ApiClient;
use worldsmith_cli::flows;
use worldsmith_cli::namegen::NameGenerator;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        eprintln!("Usage: generate_worlds <email> <password> <number_of_worlds>");
        eprintln!("Example: generate_worlds admin@example.com secret 10");
        process::exit(1);
    }
    let count: usize = match args[3].parse() {
        Ok(count) => count,
        Err(_) => {
            eprintln!("number_of_worlds must be an integer");
            process::exit(1);
        }
    };

    let base_url =
        env::var("WORLD_SERVER_URL").unwrap_or_else(|_| "http://localhost:8000".into());
    let mut api = ApiClient::new(&base_url, None)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}").unwrap());
    spinner.set_message("Logging in...");
    let token = match api.login(&args[1], &args[2]) {
        Ok(token) => token,
        Err(e) => {
            spinner.finish_and_clear();
            eprintln!("Authentication failed: {}", e);
            process::exit(1);
        }
    };
    spinner.finish_and_clear();
    api.set_token(&token);

    let generator = NameGenerator::from_env();
    flows::post_worlds(&api, &generator, count);
    Ok(())
}
