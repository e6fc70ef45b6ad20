// Batch operations shared by the admin binaries. Everything here runs
// strictly sequentially: one unit of work, one request, one progress line,
// in enumeration order.

use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use crate::api::{
    display_id, ApiClient, ApiError, ObjectPlacement, Position, WorldCreationRequest, WorldData,
};
use crate::namegen::NameGenerator;
use crate::ui;

/// Pause after each successful category creation.
pub const CREATE_DELAY: Duration = Duration::from_millis(500);
/// Pause after each completed world submission.
pub const WORLD_DELAY: Duration = Duration::from_millis(200);

/// Categories every fresh server gets.
pub const DEFAULT_ITEM_CATEGORIES: &[&str] = &["Weapons", "Armor", "Potions"];

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub created: usize,
    pub existing: usize,
    pub failed: usize,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct UploadSummary {
    pub uploaded: usize,
    pub failed: usize,
}

/// Ensure the given item categories exist. Lookup against the server's
/// current list is case-insensitive; creation keeps the caller's casing.
/// Running this twice against the same server creates no duplicates.
pub fn seed_item_categories(api: &ApiClient, names: &[&str]) -> SeedSummary {
    let existing = match api.fetch_item_categories() {
        Ok(categories) => {
            ui::print_item_categories(&categories);
            categories
        }
        Err(e) => {
            println!("Failed to fetch item categories: {}", e);
            Vec::new()
        }
    };
    let existing_by_name: HashMap<String, _> = existing
        .iter()
        .map(|c| (c.name.to_lowercase(), c))
        .collect();

    let mut summary = SeedSummary::default();
    for name in names {
        if let Some(category) = existing_by_name.get(&name.to_lowercase()) {
            println!("= Exists item category: {} (ID: {})", category.name, category.id);
            summary.existing += 1;
            continue;
        }
        match api.create_item_category(name) {
            Ok(category) => {
                println!("✓ Created item category: {} (ID: {})", category.name, category.id);
                summary.created += 1;
                thread::sleep(CREATE_DELAY);
            }
            Err(ApiError::Conflict) => {
                println!("✗ Item category '{}' already exists", name);
                summary.existing += 1;
            }
            Err(e) => {
                println!("✗ Failed to create item category '{}': {}", name, e);
                summary.failed += 1;
            }
        }
    }
    summary
}

/// Split a comma-separated extension list, dropping leading dots and
/// surrounding whitespace (`" .png, JPG"` becomes `["png", "JPG"]`).
pub fn parse_extensions(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(|ext| ext.trim().trim_start_matches('.').to_string())
        .filter(|ext| !ext.is_empty())
        .collect()
}

/// Gather the files under `dir` whose extension matches any of
/// `extensions` (case-insensitive), sorted by name so the upload order is
/// stable across runs.
pub fn collect_files(dir: &Path, extensions: &[String]) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            continue;
        };
        if extensions.iter().any(|wanted| ext.eq_ignore_ascii_case(wanted)) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Upload each file in order, printing one line per file. Failures are
/// counted, never fatal.
pub fn upload_files(api: &ApiClient, files: &[PathBuf], category_id: i64) -> UploadSummary {
    let mut summary = UploadSummary::default();
    let bar = ProgressBar::new(files.len() as u64);
    bar.set_style(ProgressStyle::with_template("{bar:30} {pos}/{len}").unwrap());
    for file in files {
        let shown = file.file_name().and_then(|s| s.to_str()).unwrap_or("?");
        match api.upload_sprite(file, category_id) {
            Ok(sprite_id) => {
                bar.println(format!("✓ Uploaded: {} -> {}", shown, display_id(&sprite_id)));
                summary.uploaded += 1;
            }
            Err(ApiError::Status { status, body }) => {
                bar.println(format!(
                    "✗ Failed: {} - {} - {}",
                    shown,
                    status.as_u16(),
                    body
                ));
                summary.failed += 1;
            }
            Err(e) => {
                bar.println(format!("✗ Error uploading {}: {}", shown, e));
                summary.failed += 1;
            }
        }
        bar.inc(1);
    }
    bar.finish_and_clear();
    summary
}

/// Derive the on-server file name from a world name: keep alphanumerics,
/// spaces and hyphens, strip trailing whitespace, then lowercase with
/// underscores for spaces. A name that sanitizes to nothing falls back to
/// the iteration index.
pub fn world_file_name(world_name: &str, index: usize) -> String {
    let kept: String = world_name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '-')
        .collect();
    let stem = kept.trim_end().replace(' ', "_").to_lowercase();
    if stem.is_empty() {
        format!("world_{}.world", index)
    } else {
        format!("{}.world", stem)
    }
}

/// Build the submission payload for one generated world. The placement
/// data is the fixed starter layout every generated world receives.
pub fn world_request(world_name: String, index: usize) -> WorldCreationRequest {
    let file_name = world_file_name(&world_name, index);
    WorldCreationRequest {
        data: WorldData {
            world_name,
            object_placement_data: vec![
                ObjectPlacement {
                    position: Position { x: -4.0, y: 0.0, z: -4.0 },
                    asset_data_id: 12,
                },
                ObjectPlacement {
                    position: Position { x: 0.0, y: 0.0, z: -5.0 },
                    asset_data_id: 4,
                },
            ],
        },
        file_name,
    }
}

/// Generate and submit `count` worlds, printing `[i] <status> -> <body>`
/// per attempt. Transport failures go to stderr and the loop continues.
pub fn post_worlds(api: &ApiClient, generator: &NameGenerator, count: usize) {
    for i in 0..count {
        let request = world_request(generator.generate(), i);
        match api.create_world(&request) {
            Ok((status, body)) => {
                let shown = match serde_json::from_str::<serde_json::Value>(&body) {
                    Ok(json) => json.to_string(),
                    Err(_) => body,
                };
                println!("[{}] {} -> {}", i, status.as_u16(), shown);
            }
            Err(e) => {
                eprintln!("[{}] request failed: {}", i, e);
                continue;
            }
        }
        thread::sleep(WORLD_DELAY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_split_and_cleaned() {
        assert_eq!(
            parse_extensions(" .png, JPG ,,gif"),
            vec!["png", "JPG", "gif"]
        );
        assert!(parse_extensions("").is_empty());
    }

    #[test]
    fn collect_files_matches_case_insensitively_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.PNG", "a.png", "c.jpg", "skip.txt", "noext"] {
            std::fs::write(dir.path().join(name), b"x").unwrap();
        }
        let files = collect_files(dir.path(), &["png".to_string()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.png", "b.PNG"]);
    }

    #[test]
    fn world_file_names_are_sanitized() {
        assert_eq!(world_file_name("Ancient Realmia!", 0), "ancient_realmia.world");
        assert_eq!(world_file_name("###", 7), "world_7.world");
        assert_eq!(world_file_name("Iron-Keep", 0), "iron-keep.world");
    }

    #[test]
    fn world_request_derives_its_file_name() {
        let request = world_request("Dark Abyss".into(), 3);
        assert_eq!(request.file_name, "dark_abyss.world");
        assert_eq!(request.data.world_name, "Dark Abyss");
        assert_eq!(request.data.object_placement_data.len(), 2);
    }
}
