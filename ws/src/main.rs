use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

use wordsearch::cli::{Cli, Command, SearchArgs};
use wordsearch::config::Config;
use wordsearch::{DecodePolicy, ReportLines, SearchOptions, SearchReport, prompt};

fn setup_logging(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => level
            .parse::<log::LevelFilter>()
            .map_err(|_| eyre::eyre!("Invalid log level: {}", level))?,
        None => log::LevelFilter::Warn,
    };
    env_logger::Builder::from_default_env().filter_level(filter).init();
    Ok(())
}

/// Folder and word for a search, prompting when the word was not given
fn resolve_input(args: &SearchArgs, default_dir: &Path) -> Result<(PathBuf, String)> {
    match &args.word {
        Some(word) => {
            let dir = args.dir.clone().unwrap_or_else(|| default_dir.to_path_buf());
            Ok((dir, word.clone()))
        }
        None => {
            let answers = prompt::ask(args.dir.as_deref().unwrap_or(default_dir))?;
            Ok((answers.dir, answers.word))
        }
    }
}

fn search_options(config: &Config, args: &SearchArgs) -> SearchOptions {
    let mut options = config.search_options();
    if args.sorted {
        options.load.sorted = true;
    }
    if args.strict {
        options.on_decode_error = DecodePolicy::Abort;
    }
    options
}

fn print_report<H: ReportLines>(report: &SearchReport<H>) -> Result<()> {
    for skipped in &report.skipped {
        eprintln!("{} Skipped {}: {}", "⚠".yellow(), skipped.name.bold(), skipped.reason);
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    report.render(&mut out).context("Failed to write results")?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("wordsearch starting");

    match cli.command {
        Command::Absent(args) => {
            let (dir, word) = resolve_input(&args, &config.absent_corpus)?;
            let options = search_options(&config, &args);
            let report = wordsearch::search_absent(&dir, &word, &options)
                .wrap_err_with(|| format!("Search in {} failed", dir.display()))?;
            print_report(&report)?;
        }
        Command::Context { search, radius } => {
            let (dir, word) = resolve_input(&search, &config.context_corpus)?;
            let mut options = search_options(&config, &search);
            if let Some(radius) = radius {
                options.context_radius = radius;
            }
            let report = wordsearch::search_context(&dir, &word, &options)
                .wrap_err_with(|| format!("Search in {} failed", dir.display()))?;
            print_report(&report)?;
        }
        Command::Config => {
            print!("{}", config.to_yaml()?);
        }
    }

    Ok(())
}
