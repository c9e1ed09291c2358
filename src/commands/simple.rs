//! Simple interactive CLI mode
//!
//! Prompts for the three constraint strings, shows the matches, and repeats.

use super::search::{SearchConfig, run_search};
use crate::output::{print_corpus_summary, print_search_result};
use crate::wordlists::{Corpus, CorpusConfig, CorpusError, load_corpus};
use std::io::{self, Write};

/// What the user typed at a prompt
///
/// Commands carry a `:` prefix so they never collide with constraint text
/// such as excluding the letters `e`, `x` and `t`.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Input {
    Text(String),
    ToggleExtended,
    Quit,
}

impl Input {
    fn classify(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            ":quit" | ":q" | ":exit" => Self::Quit,
            ":ext" | ":extended" => Self::ToggleExtended,
            _ => Self::Text(line.trim().to_string()),
        }
    }
}

/// Run the simple interactive CLI mode
///
/// Starts from an already loaded corpus. The word lists are read again before
/// every search, so words added to the user file mid-session are picked up.
/// Typing `:ext` at any prompt switches the extended word pack on or off. A
/// failed reload in either case leaves the previous corpus in use.
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(config: &CorpusConfig, mut corpus: Corpus) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Wordle Filter - Interactive Mode              ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter what you know so far; leave a field blank to skip it.");
    println!("  [1] Pattern:  known letters in place, '_' for unknown   (e.g. _ a _ b _)");
    println!("  [2] Loose:    letter(positions) it must avoid, 1-based  (e.g. a(1,4) b(3,4))");
    println!("  [3] Exclude:  letters not in the word                   (e.g. a,d,e,i,s,y)");
    println!("Leave all three blank to list every word alphabetically.");
    println!("Commands: ':ext' to toggle the extended word pack, ':quit' to exit\n");

    let mut config = config.clone();
    print_corpus_summary(&corpus);

    loop {
        println!();
        let mut fields = Vec::with_capacity(3);
        for prompt in ["[1] Pattern", "[2] Loose letters", "[3] Excluded letters"] {
            match get_user_input(prompt)? {
                Input::Quit => {
                    println!("\n👋 Happy puzzling!\n");
                    return Ok(());
                }
                Input::ToggleExtended => {
                    toggle_extended(&mut config, &mut corpus);
                    break;
                }
                Input::Text(text) => fields.push(text),
            }
        }

        if let [pattern, loose, exclude] = fields.as_slice() {
            if let Err(e) = refresh(&config, &mut corpus) {
                log::warn!("reload failed, keeping the current word list: {e}");
            }
            let search = SearchConfig::new(pattern, loose, exclude);
            let result = run_search(&search, &corpus.words);
            print_search_result(&result, config.user_path());
        }
    }
}

/// Flip the extended pack and report the outcome
fn toggle_extended(config: &mut CorpusConfig, corpus: &mut Corpus) {
    match reload_toggled(config, corpus) {
        Ok(()) => {
            println!(
                "\n✓ Extended word pack {}",
                if config.use_extended { "on" } else { "off" }
            );
            print_corpus_summary(corpus);
        }
        Err(e) => {
            log::warn!("reload failed: {e}");
            println!("\n❌ {e}; keeping the current word list.");
        }
    }
}

/// Load the corpus with the extended pack flipped
///
/// `config` and `corpus` are replaced together, and only once the new corpus
/// has loaded.
fn reload_toggled(config: &mut CorpusConfig, corpus: &mut Corpus) -> Result<(), CorpusError> {
    let next = config.with_extended(!config.use_extended);
    let loaded = load_corpus(&next)?;

    *config = next;
    *corpus = loaded;
    Ok(())
}

/// Re-read the word lists for the current config
///
/// On error `corpus` is left untouched.
fn refresh(config: &CorpusConfig, corpus: &mut Corpus) -> Result<(), CorpusError> {
    *corpus = load_corpus(config)?;
    log::debug!("reloaded {} words", corpus.len());
    Ok(())
}

/// Get user input with a prompt
///
/// End of input counts as a quit.
fn get_user_input(prompt: &str) -> Result<Input, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = io::stdin()
        .read_line(&mut line)
        .map_err(|e| e.to_string())?;

    if read == 0 {
        return Ok(Input::Quit);
    }

    Ok(Input::classify(&line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;
    use crate::wordlists::WordSource;
    use std::fs;
    use std::path::Path;

    fn config_in(dir: &Path) -> CorpusConfig {
        CorpusConfig {
            base: WordSource::File(dir.join("words.txt")),
            extended_path: dir.join("extended_words.txt"),
            use_extended: false,
            user_path: dir.join("user_words.txt"),
        }
    }

    fn texts(corpus: &Corpus) -> Vec<&str> {
        corpus.words.iter().map(Word::text).collect()
    }

    #[test]
    fn classify_commands() {
        assert_eq!(Input::classify(":quit\n"), Input::Quit);
        assert_eq!(Input::classify("  :Q "), Input::Quit);
        assert_eq!(Input::classify(":EXT"), Input::ToggleExtended);
    }

    #[test]
    fn bare_words_are_constraint_text() {
        assert_eq!(Input::classify("ext"), Input::Text("ext".to_string()));
        assert_eq!(Input::classify("q"), Input::Text("q".to_string()));
    }

    #[test]
    fn classify_text_is_trimmed() {
        assert_eq!(
            Input::classify("  _ a _ b _ \n"),
            Input::Text("_ a _ b _".to_string())
        );
        assert_eq!(Input::classify("\n"), Input::Text(String::new()));
    }

    #[test]
    fn toggle_switches_to_extended_pack() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("words.txt"), "crane\n").unwrap();
        fs::write(dir.path().join("extended_words.txt"), "aback\nabase\n").unwrap();

        let mut config = config_in(dir.path());
        let mut corpus = load_corpus(&config).unwrap();

        reload_toggled(&mut config, &mut corpus).unwrap();
        assert!(config.use_extended);
        assert_eq!(texts(&corpus), ["aback", "abase"]);

        reload_toggled(&mut config, &mut corpus).unwrap();
        assert!(!config.use_extended);
        assert_eq!(texts(&corpus), ["crane"]);
    }

    #[test]
    fn failed_toggle_keeps_previous_corpus() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("words.txt"), "crane\nslate\n").unwrap();

        let mut config = config_in(dir.path());
        let mut corpus = load_corpus(&config).unwrap();

        let err = reload_toggled(&mut config, &mut corpus).unwrap_err();
        assert!(matches!(err, CorpusError::Empty));
        assert!(!config.use_extended);
        assert_eq!(texts(&corpus), ["crane", "slate"]);
    }

    #[test]
    fn refresh_picks_up_new_user_words() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("words.txt"), "crane\n").unwrap();

        let config = config_in(dir.path());
        let mut corpus = load_corpus(&config).unwrap();
        assert_eq!(texts(&corpus), ["crane"]);

        fs::write(dir.path().join("user_words.txt"), "zesty\n").unwrap();
        refresh(&config, &mut corpus).unwrap();
        assert_eq!(texts(&corpus), ["crane", "zesty"]);
    }

    #[test]
    fn failed_refresh_keeps_previous_corpus() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("words.txt"), "crane\n").unwrap();

        let config = config_in(dir.path());
        let mut corpus = load_corpus(&config).unwrap();

        fs::remove_file(dir.path().join("words.txt")).unwrap();
        let err = refresh(&config, &mut corpus).unwrap_err();
        assert!(matches!(err, CorpusError::Empty));
        assert_eq!(texts(&corpus), ["crane"]);
    }
}
