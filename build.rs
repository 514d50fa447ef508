//! Build script to embed the game's word lists
//!
//! Each list in `data/` becomes a generated source file holding a const slice
//! and its length. Words are lowercased, blank lines skipped and duplicates
//! dropped; anything that is not five ASCII letters fails the build.

use std::collections::BTreeSet;
use std::env;
use std::error::Error;
use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;

struct EmbeddedList {
    source: &'static str,
    output: &'static str,
    name: &'static str,
    doc: &'static str,
}

const LISTS: [EmbeddedList; 2] = [
    EmbeddedList {
        source: "data/answers.txt",
        output: "answers.rs",
        name: "ANSWERS",
        doc: "Words that can be drawn as the hidden answer",
    },
    EmbeddedList {
        source: "data/allowed.txt",
        output: "allowed.rs",
        name: "ALLOWED",
        doc: "Every word accepted as a guess",
    },
];

fn main() -> Result<(), Box<dyn Error>> {
    let out_dir = env::var("OUT_DIR")?;

    for list in &LISTS {
        println!("cargo:rerun-if-changed={}", list.source);
        let words = read_words(list.source)?;
        let code = render(list, &words)?;
        fs::write(Path::new(&out_dir).join(list.output), code)?;
    }

    Ok(())
}

fn read_words(source: &str) -> Result<Vec<String>, Box<dyn Error>> {
    let content =
        fs::read_to_string(source).map_err(|e| format!("cannot read {source}: {e}"))?;

    let mut seen = BTreeSet::new();
    let mut words = Vec::new();

    for (index, line) in content.lines().enumerate() {
        let word = line.trim().to_ascii_lowercase();
        if word.is_empty() {
            continue;
        }
        if word.len() != 5 || !word.bytes().all(|b| b.is_ascii_lowercase()) {
            return Err(format!("{source}:{}: '{word}' is not a 5-letter word", index + 1).into());
        }
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    Ok(words)
}

fn render(list: &EmbeddedList, words: &[String]) -> Result<String, fmt::Error> {
    let mut code = String::new();
    writeln!(code, "/// {} ({} words)", list.doc, words.len())?;
    writeln!(code, "pub const {}: &[&str] = &[", list.name)?;
    for word in words {
        writeln!(code, "    \"{word}\",")?;
    }
    writeln!(code, "];")?;
    writeln!(code)?;
    writeln!(code, "/// Number of entries in `{}`", list.name)?;
    writeln!(code, "pub const {}_COUNT: usize = {};", list.name, words.len())?;
    Ok(code)
}
