//! Interactive prompting for the folder and the query word

use eyre::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::path::{Path, PathBuf};

/// Folder and word collected from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answers {
    pub dir: PathBuf,
    pub word: String,
}

/// Trim raw answers; an empty folder falls back to `default_dir`
pub fn resolve(folder: &str, word: &str, default_dir: &Path) -> Answers {
    let folder = folder.trim();
    let dir = if folder.is_empty() {
        default_dir.to_path_buf()
    } else {
        PathBuf::from(folder)
    };
    Answers {
        dir,
        word: word.trim().to_string(),
    }
}

/// Ask for the folder, then the word
pub fn ask(default_dir: &Path) -> Result<Answers> {
    let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;

    let folder = read(&mut rl, "Enter the folder path: ")?;
    let word = read(&mut rl, "Enter the word to search for: ")?;

    Ok(resolve(&folder, &word, default_dir))
}

fn read(rl: &mut DefaultEditor, prompt: &str) -> Result<String> {
    match rl.readline(prompt) {
        Ok(line) => Ok(line),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Err(eyre::eyre!("Input cancelled")),
        Err(e) => Err(eyre::eyre!("Failed to read input: {}", e)),
    }
}
