//! Display functions for command results

use super::formatters::{
    exclusion_summary, loose_summary, pattern_summary, word_columns, word_count,
};
use crate::commands::Explanation;
use crate::core::Word;
use crate::filter::{FilterResult, LetterGroup};
use crate::wordlists::loader::{Corpus, SourceStatus};
use colored::Colorize;
use std::path::Path;

/// Words per row in the alphabetical listing
const GROUP_COLUMNS: usize = 6;

/// Print where the corpus came from
pub fn print_corpus_summary(corpus: &Corpus) {
    println!("\n📚 {}", "Word lists:".bright_cyan().bold());
    for report in &corpus.sources {
        match report.status {
            SourceStatus::Loaded(count) => {
                println!("   {:<24} {}", report.source.to_string(), word_count(count));
            }
            SourceStatus::Missing => {
                println!(
                    "   {:<24} {}",
                    report.source.to_string(),
                    "not found".bright_black()
                );
            }
        }
    }
}

/// Print the result of a search
///
/// `user_path` is suggested as the place to add a missing answer when
/// nothing matches.
pub fn print_search_result(result: &FilterResult, user_path: &Path) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Total words: {}", result.corpus_size());

    match result {
        FilterResult::Grouped { groups, .. } => {
            println!(
                "{}",
                "No constraints given, listing every word alphabetically.".bright_black()
            );
            println!("{}", "─".repeat(60).cyan());
            for group in groups {
                print_group(group);
            }
        }
        FilterResult::Matches { words, .. } if words.is_empty() => {
            println!("{}", "─".repeat(60).cyan());
            println!("\n{}", "😥 No words match these constraints.".red().bold());
            println!(
                "Once you know today's answer, add it to {} so it turns up next time.",
                user_path.display().to_string().bright_yellow()
            );
        }
        FilterResult::Matches { words, .. } => {
            println!(
                "{}",
                format!("✅ {} match!", word_count(words.len()))
                    .green()
                    .bold()
            );
            println!("{}", "─".repeat(60).cyan());
            for word in words {
                println!("  • {word}");
            }
        }
    }
}

fn print_group(group: &LetterGroup) {
    println!(
        "\n{}",
        format!("[{}]", group.key).bright_magenta().bold()
    );
    let texts: Vec<&str> = group.words.iter().map(Word::text).collect();
    for row in word_columns(&texts, GROUP_COLUMNS) {
        println!("  {row}");
    }
}

/// Print the result of explaining a word
pub fn print_explanation(explanation: &Explanation) {
    let request = &explanation.request;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "EXPLAIN:".bright_cyan().bold(),
        explanation.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n   Pattern:   {}", pattern_summary(request.pattern()));
    println!("   Loose:     {}", loose_summary(request.loose()));
    println!("   Excluded:  {}", exclusion_summary(request.excluded()));
    println!(
        "   In list:   {}",
        if explanation.in_corpus { "yes" } else { "no" }
    );

    println!();
    match &explanation.verdict {
        Ok(()) => println!("{}", "✅ Passes every constraint".green().bold()),
        Err(rejection) => println!("{}", format!("❌ Rejected: {rejection}").red().bold()),
    }
}
