// World-name generation. Three interchangeable strategies sit behind one
// generator value:
//
// - `Curated`: fixed adjective/noun/suffix lists embedded below.
// - `WordFile`: a `type,word` listing loaded once per process, with a
//   built-in fallback when the file cannot be read.
// - `RandomToken`: a bare alphanumeric token, for call sites where the
//   name doubles as a file name stem and must not contain spaces.

use once_cell::sync::OnceCell;
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::path::{Path, PathBuf};

/// Default word-list file, looked up next to the executable.
pub const WORD_FILE_NAME: &str = "world_name_words.csv";

/// Generated names never exceed this length.
const MAX_NAME_LEN: usize = 24;

/// Chance of a two-word "Adjective Noun" name instead of a suffixed one.
const COMPOUND_CHANCE: f64 = 0.4;

const ADJECTIVES: &[&str] = &[
    "Ancient", "Dark", "Forgotten", "Hidden", "Lost", "Mystical", "Shadow", "Eternal",
    "Crystal", "Frozen", "Golden", "Silver", "Emerald", "Azure", "Crimson", "Obsidian",
    "Whispering", "Thunder", "Storm", "Blood", "Iron", "Steel", "Fire", "Ice",
    "Sacred", "Cursed", "Blessed", "Divine", "Arcane", "Enchanted", "Haunted", "Radiant",
];

const NOUNS: &[&str] = &[
    "Realm", "Kingdom", "Land", "World", "Domain", "Empire", "Valley", "Mountain",
    "Forest", "Desert", "Ocean", "Island", "Castle", "Temple", "Cave", "Garden",
    "Throne", "Crown", "Sword", "Shield", "Fortress", "Citadel", "Sanctuary", "Haven",
    "Abyss", "Peak", "Grove", "Spire", "Forge", "Keep", "Burg", "Stead",
];

const SUFFIXES: &[&str] = &[
    "ia", "land", "realm", "world", "haven", "spire", "forge", "keep", "burg", "stead",
];

// Minimal set used when the word file cannot be read.
const FALLBACK_ADJECTIVES: &[&str] = &["Ancient", "Hidden", "Golden"];
const FALLBACK_NOUNS: &[&str] = &["Realm", "Valley", "Keep"];
const FALLBACK_SUFFIXES: &[&str] = &["ia", "land", "haven"];

#[derive(Debug, Clone)]
pub enum Strategy {
    Curated,
    WordFile(PathBuf),
    RandomToken,
}

/// Parsed word sets. Immutable after load.
#[derive(Debug)]
pub struct WordList {
    pub adjectives: Vec<String>,
    pub nouns: Vec<String>,
    pub suffixes: Vec<String>,
}

impl WordList {
    fn from_slices(adjectives: &[&str], nouns: &[&str], suffixes: &[&str]) -> WordList {
        WordList {
            adjectives: adjectives.iter().map(|w| w.to_string()).collect(),
            nouns: nouns.iter().map(|w| w.to_string()).collect(),
            suffixes: suffixes.iter().map(|w| w.to_string()).collect(),
        }
    }

    fn curated() -> WordList {
        WordList::from_slices(ADJECTIVES, NOUNS, SUFFIXES)
    }

    fn fallback() -> WordList {
        WordList::from_slices(FALLBACK_ADJECTIVES, FALLBACK_NOUNS, FALLBACK_SUFFIXES)
    }

    /// Load a word file, substituting the built-in fallback set when the
    /// file is missing or unreadable. Never fails.
    fn load(path: &Path) -> WordList {
        let Ok(text) = fs::read_to_string(path) else {
            eprintln!(
                "Word list {} not readable, using built-in words",
                path.display()
            );
            return WordList::fallback();
        };
        WordList::parse(&text)
    }

    /// Parse `type,word` records. Blank lines, `#` comments, the literal
    /// `type,word` header, and malformed or unknown-type lines are skipped.
    fn parse(text: &str) -> WordList {
        let mut list = WordList {
            adjectives: Vec::new(),
            nouns: Vec::new(),
            suffixes: Vec::new(),
        };
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line == "type,word" {
                continue;
            }
            let Some((kind, word)) = line.split_once(',') else {
                continue;
            };
            let word = word.trim();
            if word.is_empty() {
                continue;
            }
            match kind.trim() {
                "adjective" => list.adjectives.push(word.to_string()),
                "noun" => list.nouns.push(word.to_string()),
                "suffix" => list.suffixes.push(word.to_string()),
                _ => {}
            }
        }
        list
    }

    /// Compose one name. Falls back to the numeric `World<nnn>` form when
    /// either required set is empty, so composition never fails.
    fn pick_name(&self) -> String {
        let mut rng = rand::thread_rng();
        let (Some(adjective), Some(noun)) =
            (self.adjectives.choose(&mut rng), self.nouns.choose(&mut rng))
        else {
            return format!("World{}", rng.gen_range(100..1000));
        };
        let name = if rng.gen_bool(COMPOUND_CHANCE) {
            format!("{} {}", adjective, noun)
        } else {
            match self.suffixes.choose(&mut rng) {
                Some(suffix) => format!("{}{}{}", adjective, noun, suffix),
                None => format!("{}{}", adjective, noun),
            }
        };
        truncate_name(name)
    }
}

/// Name generator with an explicitly owned, lazily-initialized word-list
/// cache: the backing file is read at most once per process regardless of
/// how many names are generated.
pub struct NameGenerator {
    strategy: Strategy,
    words: OnceCell<WordList>,
}

impl NameGenerator {
    pub fn new(strategy: Strategy) -> Self {
        NameGenerator {
            strategy,
            words: OnceCell::new(),
        }
    }

    /// Pick the strategy from `WORLD_NAME_STRATEGY` (`curated`, `words`,
    /// or `random`), defaulting to the curated lists. The `words` strategy
    /// reads the file named by `WORLD_NAME_WORDS`, or a
    /// `world_name_words.csv` sibling of the executable.
    pub fn from_env() -> Self {
        let strategy = match std::env::var("WORLD_NAME_STRATEGY").as_deref() {
            Ok("words") => Strategy::WordFile(default_word_file()),
            Ok("random") => Strategy::RandomToken,
            _ => Strategy::Curated,
        };
        NameGenerator::new(strategy)
    }

    /// Produce one world name, 1..=24 characters, no trailing whitespace.
    pub fn generate(&self) -> String {
        match self.strategy {
            Strategy::RandomToken => random_token(),
            _ => self.word_list().pick_name(),
        }
    }

    fn word_list(&self) -> &WordList {
        self.words.get_or_init(|| match &self.strategy {
            Strategy::WordFile(path) => WordList::load(path),
            _ => WordList::curated(),
        })
    }
}

fn default_word_file() -> PathBuf {
    if let Ok(path) = std::env::var("WORLD_NAME_WORDS") {
        return PathBuf::from(path);
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(WORD_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(WORD_FILE_NAME))
}

/// Alphanumeric token of 6..=24 characters. No spaces, so the result can
/// be used directly as a file name stem.
fn random_token() -> String {
    let mut rng = rand::thread_rng();
    let len = rng.gen_range(6..=MAX_NAME_LEN);
    (&mut rng)
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

/// Cap a name at `MAX_NAME_LEN` characters, trimming any whitespace the
/// cut leaves behind.
fn truncate_name(name: String) -> String {
    if name.chars().count() <= MAX_NAME_LEN {
        return name;
    }
    let truncated: String = name.chars().take(MAX_NAME_LEN).collect();
    truncated.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn curated_names_stay_within_bounds() {
        let gen = NameGenerator::new(Strategy::Curated);
        for _ in 0..200 {
            let name = gen.generate();
            let len = name.chars().count();
            assert!((1..=MAX_NAME_LEN).contains(&len), "bad length: {:?}", name);
            assert_eq!(name, name.trim(), "stray whitespace: {:?}", name);
        }
    }

    #[test]
    fn random_tokens_are_alphanumeric() {
        let gen = NameGenerator::new(Strategy::RandomToken);
        for _ in 0..200 {
            let name = gen.generate();
            let len = name.chars().count();
            assert!((6..=MAX_NAME_LEN).contains(&len), "bad length: {:?}", name);
            assert!(
                name.chars().all(|c| c.is_ascii_alphanumeric()),
                "non-alphanumeric char in {:?}",
                name
            );
        }
    }

    #[test]
    fn parse_skips_header_comments_and_junk() {
        let list = WordList::parse(
            "type,word\n\
             # a comment\n\
             \n\
             adjective, Ancient \n\
             noun,Realm\n\
             suffix,ia\n\
             verb,Running\n\
             notacsvline\n",
        );
        assert_eq!(list.adjectives, vec!["Ancient"]);
        assert_eq!(list.nouns, vec!["Realm"]);
        assert_eq!(list.suffixes, vec!["ia"]);
    }

    #[test]
    fn word_file_is_read_once_and_cached() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "type,word").unwrap();
        writeln!(file, "adjective,Iron").unwrap();
        writeln!(file, "noun,Keep").unwrap();
        let path = file.path().to_path_buf();

        let gen = NameGenerator::new(Strategy::WordFile(path.clone()));
        let first = gen.word_list();
        assert_eq!(first.adjectives, vec!["Iron"]);

        // Remove the backing file; the cached list must keep serving.
        drop(file);
        assert!(!path.exists());
        let second = gen.word_list();
        assert!(std::ptr::eq(first, second));
        let name = gen.generate();
        assert!((1..=MAX_NAME_LEN).contains(&name.chars().count()));
    }

    #[test]
    fn missing_file_falls_back_to_builtin_words() {
        let gen = NameGenerator::new(Strategy::WordFile(PathBuf::from(
            "/definitely/not/here/world_name_words.csv",
        )));
        let list = gen.word_list();
        assert_eq!(list.adjectives.len(), 3);
        assert_eq!(list.nouns.len(), 3);
        assert_eq!(list.suffixes.len(), 3);
        let name = gen.generate();
        assert!((1..=MAX_NAME_LEN).contains(&name.chars().count()));
    }

    #[test]
    fn empty_adjectives_produce_the_numeric_form() {
        let list = WordList::parse("type,word\nnoun,Realm\nsuffix,ia\n");
        for _ in 0..20 {
            let name = list.pick_name();
            let digits = name.strip_prefix("World").expect("numeric fallback form");
            assert_eq!(digits.len(), 3);
            assert!(digits.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn suffixless_list_omits_the_suffix_component() {
        let list = WordList::parse("adjective,Iron\nnoun,Keep\n");
        for _ in 0..50 {
            let name = list.pick_name();
            assert!(name == "Iron Keep" || name == "IronKeep", "got {:?}", name);
        }
    }

    #[test]
    fn truncation_trims_trailing_whitespace() {
        let long = "a".repeat(30);
        assert_eq!(truncate_name(long).chars().count(), MAX_NAME_LEN);

        // A cut that lands right after the word break must not leave a
        // trailing space behind.
        let spaced = format!("{} {}", "a".repeat(23), "bcd");
        let out = truncate_name(spaced);
        assert_eq!(out, "a".repeat(23));
    }
}
