//! WordTrie - Main entrypoint.
//!
//! Loads words from a file into a frequency trie and prints the tree,
//! completions, lookups or counts.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;

use wordtrie_lib::config::{self, ConfigLoader, LogConfig, WordTrieConfig};
use wordtrie_lib::data_structures::Trie;
use wordtrie_lib::error::{
    ErrorContext, ErrorReporter, TracingErrorReporter, WordTrieError, WordTrieResult,
};
use wordtrie_lib::loader::{index_words, WordLoader};
use wordtrie_lib::render::TreeRenderer;

/// Command line arguments for WordTrie.
#[derive(Parser, Debug)]
#[clap(name = "wordtrie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the word tree followed by the number of distinct words
    Tree {
        /// Word file to load
        file: PathBuf,
    },

    /// List the words starting with a prefix
    Complete {
        /// Word file to load
        file: PathBuf,

        /// Prefix to complete
        prefix: String,

        /// Emit JSON instead of plain lines
        #[clap(long)]
        json: bool,
    },

    /// Look up a single word
    Search {
        /// Word file to load
        file: PathBuf,

        /// Word to look up
        word: String,
    },

    /// Print the number of distinct words
    Count {
        /// Word file to load
        file: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// One completion in `--json` output.
#[derive(Serialize)]
struct Completion<'a> {
    word: &'a str,
    count: usize,
}

/// Initialize the logging system on stderr.
fn init_logging(log: &LogConfig) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let installed = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    installed.context("Failed to set global tracing subscriber")
}

fn load_trie(config: &WordTrieConfig, file: &Path) -> WordTrieResult<Trie<usize>> {
    let words = WordLoader::new(config.loader.clone()).load_file(file)?;
    Ok(index_words(&words))
}

/// Writes the rendered tree followed by the word count trailer.
fn write_tree<W: Write>(
    out: &mut W,
    trie: &Trie<usize>,
    renderer: &TreeRenderer,
) -> io::Result<()> {
    write!(out, "{}", renderer.render(trie))?;
    writeln!(out, "Number of words: {}", trie.count_words())
}

/// Writes the completions of `prefix` sorted by word, as lines or as JSON.
fn write_completions<W: Write>(
    out: &mut W,
    trie: &Trie<usize>,
    prefix: &str,
    json: bool,
) -> WordTrieResult<()> {
    let mut completions = trie.auto_complete(prefix);
    completions.sort_by(|a, b| a.0.cmp(&b.0));
    info!(prefix = %prefix, matches = completions.len(), "Completed prefix");

    if json {
        let entries: Vec<Completion<'_>> = completions
            .iter()
            .map(|(word, count)| Completion { word, count: **count })
            .collect();
        writeln!(out, "{}", serde_json::to_string_pretty(&entries)?)?;
    } else {
        for (word, count) in completions {
            writeln!(out, "{word}\t{count}")?;
        }
    }
    Ok(())
}

/// Writes the count for `word`, or a not-found line.
fn write_search<W: Write>(out: &mut W, trie: &Trie<usize>, word: &str) -> io::Result<()> {
    match trie.search(word) {
        Some(count) => writeln!(out, "{word}\t{count}"),
        None => writeln!(out, "{word}: not found"),
    }
}

/// Writes the default configuration as TOML to `output`.
fn write_default_config(output: &Path) -> WordTrieResult<()> {
    info!("Generating default configuration");
    let default_config = WordTrieConfig::default();

    // Create parent directories if they don't exist
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&default_config)
        .map_err(|e| WordTrieError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

fn run<W: Write>(command: Command, config: &WordTrieConfig, out: &mut W) -> WordTrieResult<()> {
    match command {
        Command::Tree { file } => {
            let trie = load_trie(config, &file)?;
            let renderer = TreeRenderer::new(config.render.clone());
            write_tree(out, &trie, &renderer)?;
        }
        Command::Complete { file, prefix, json } => {
            let trie = load_trie(config, &file)?;
            write_completions(out, &trie, &prefix, json)?;
        }
        Command::Search { file, word } => {
            let trie = load_trie(config, &file)?;
            write_search(out, &trie, &word)?;
        }
        Command::Count { file } => {
            let trie = load_trie(config, &file)?;
            writeln!(out, "{}", trie.count_words())?;
        }
        Command::Validate => {
            info!("Configuration validated successfully");
        }
        Command::GenConfig { output } => write_default_config(&output)?,
    }
    Ok(())
}

/// Prints `error` to `stderr` and hands it to the tracing reporter.
///
/// The direct line keeps failures visible when the log filter is silenced.
fn report_fatal<W: Write>(
    error: WordTrieError,
    component: &str,
    stderr: &mut W,
) -> io::Result<()> {
    writeln!(stderr, "Error: {error}")?;
    TracingErrorReporter.report(ErrorContext::new(error, component));
    Ok(())
}

/// Main entry point for the application.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config_loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);
    let config = match config_loader.load() {
        Ok(config) => config,
        Err(e) => {
            init_logging(&LogConfig::default())?;
            report_fatal(e.into(), "config", &mut io::stderr())?;
            process::exit(1);
        }
    };
    init_logging(&config.log)?;

    let stdout = io::stdout();
    if let Err(e) = run(args.command, &config, &mut stdout.lock()) {
        report_fatal(e, "cli", &mut io::stderr())?;
        process::exit(1);
    }
    Ok(())
}
