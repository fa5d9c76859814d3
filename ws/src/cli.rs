//! CLI argument parsing for wordsearch

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ws")]
#[command(author, version, about = "Search a folder of text documents for a word", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the documents that do NOT contain the word (substring match)
    Absent(SearchArgs),

    /// Show every whole-word occurrence of the word with surrounding words
    Context {
        #[command(flatten)]
        search: SearchArgs,

        /// Words shown on each side of a match (default: 3)
        #[arg(short, long)]
        radius: Option<usize>,
    },

    /// Print the effective configuration
    Config,
}

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    /// Word to search for; prompts for folder and word when omitted
    pub word: Option<String>,

    /// Corpus directory (default depends on the command)
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Visit documents in file name order
    #[arg(long)]
    pub sorted: bool,

    /// Abort on the first document that cannot be decoded
    #[arg(long)]
    pub strict: bool,
}
