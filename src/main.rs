//! Wordle Filter - CLI
//!
//! Narrow a word list to Wordle candidates from a position pattern, loose
//! letters and excluded letters, either one-shot or interactively.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wordle_filter::{
    commands::{SearchConfig, explain_word, run_search, run_simple},
    output::{print_explanation, print_search_result},
    wordlists::{
        Corpus, CorpusConfig, WordSource, load_corpus,
        config::{DEFAULT_EXTENDED_PATH, DEFAULT_USER_PATH},
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_filter",
    about = "Find Wordle candidates from known, misplaced and absent letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base word list file (default: built-in list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Use the extended word pack instead of the base list
    #[arg(short = 'e', long, global = true)]
    extended: bool,

    /// Extended word pack file
    #[arg(long, global = true, default_value = DEFAULT_EXTENDED_PATH)]
    extended_path: PathBuf,

    /// Your own additions, appended to the list if the file exists
    #[arg(short = 'u', long, global = true, default_value = DEFAULT_USER_PATH)]
    user_words: PathBuf,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive prompt mode (default)
    Simple,

    /// Filter the word list once and print the matches
    Filter {
        #[command(flatten)]
        constraints: ConstraintArgs,
    },

    /// Show whether a word passes the constraints, and why not
    Explain {
        /// The word to check
        word: String,

        #[command(flatten)]
        constraints: ConstraintArgs,
    },
}

#[derive(Args)]
struct ConstraintArgs {
    /// Known letters in place, '_' for unknown (e.g. "_ a _ b _")
    #[arg(short, long, default_value = "")]
    pattern: String,

    /// Letters in the word but not at these 1-based positions (e.g. "a(1,4) b(3,4)")
    #[arg(short, long, default_value = "")]
    loose: String,

    /// Letters not in the word (e.g. "a,d,e,i,s,y")
    #[arg(short = 'x', long, default_value = "")]
    exclude: String,
}

impl From<ConstraintArgs> for SearchConfig {
    fn from(args: ConstraintArgs) -> Self {
        Self::new(args.pattern, args.loose, args.exclude)
    }
}

impl Cli {
    /// Build the corpus sources from the global flags
    fn corpus_config(&self) -> CorpusConfig {
        CorpusConfig {
            base: self
                .words
                .clone()
                .map_or(WordSource::Embedded, WordSource::File),
            extended_path: self.extended_path.clone(),
            use_extended: self.extended,
            user_path: self.user_words.clone(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let debug_enabled = cli.debug || std::env::var(wordle_filter::log::DEBUG_ENV).is_ok();
    wordle_filter::log::init_logger(debug_enabled);

    let config = cli.corpus_config();
    log::debug!("corpus config: {config:?}");

    let corpus = load_corpus(&config).context("Could not load any words to filter")?;

    // Default to Simple mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&config, corpus).map_err(|e| anyhow::anyhow!(e)),
        Commands::Filter { constraints } => {
            run_filter_command(&constraints.into(), &corpus, &config);
            Ok(())
        }
        Commands::Explain { word, constraints } => {
            run_explain_command(&word, &constraints.into(), &corpus)
        }
    }
}

fn run_filter_command(search: &SearchConfig, corpus: &Corpus, config: &CorpusConfig) {
    let result = run_search(search, &corpus.words);
    print_search_result(&result, config.user_path());
}

fn run_explain_command(word: &str, search: &SearchConfig, corpus: &Corpus) -> Result<()> {
    let explanation = explain_word(word, search, &corpus.words).map_err(|e| anyhow::anyhow!(e))?;
    print_explanation(&explanation);
    Ok(())
}
