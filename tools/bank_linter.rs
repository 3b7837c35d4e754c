/// Bank Linter — validates a word-bank file before it meets the encoder.
///
/// Usage: bank_linter <banks.ron>
///
/// Errors (exit 1): empty word lists, duplicate words within a list.
/// Warnings: words straddling both polarities of the same bank, adjectives
/// that do not start with a lowercase letter (the a/an rule only inspects
/// lowercase vowels).

use playbill::wordbanks::{WordBank, WordBanks};
use rustc_hash::FxHashSet;
use std::path::Path;
use std::process;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        println!("Usage: bank_linter <banks.ron>");
        process::exit(0);
    }

    let banks = match WordBanks::load_from_ron(Path::new(&args[1])) {
        Ok(banks) => banks,
        Err(e) => {
            eprintln!("ERROR: failed to load word banks: {}", e);
            process::exit(1);
        }
    };

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    lint_bank("adjectives", &banks.adjectives, &mut errors, &mut warnings);
    lint_bank("nouns", &banks.nouns, &mut errors, &mut warnings);

    for adjective in banks
        .adjectives
        .positive_neutral
        .iter()
        .chain(banks.adjectives.negative.iter())
    {
        if !adjective.starts_with(|c: char| c.is_ascii_lowercase()) {
            warnings.push(format!(
                "adjective '{}' does not start with a lowercase letter; \
                 the a/an rule will never see it as a vowel",
                adjective
            ));
        }
    }

    println!("\n=== Word Bank Lint Report ===\n");

    if errors.is_empty() && warnings.is_empty() {
        println!("All checks passed!");
    }
    for warning in &warnings {
        println!("WARNING: {}", warning);
    }
    for error in &errors {
        println!("ERROR: {}", error);
    }

    println!(
        "\n{} adjectives / {} nouns (positive_neutral + negative)",
        banks.adjectives.positive_neutral.len() + banks.adjectives.negative.len(),
        banks.nouns.positive_neutral.len() + banks.nouns.negative.len()
    );

    if !errors.is_empty() {
        process::exit(1);
    }
}

fn lint_bank(label: &str, bank: &WordBank, errors: &mut Vec<String>, warnings: &mut Vec<String>) {
    for (polarity, words) in [
        ("positive_neutral", &bank.positive_neutral),
        ("negative", &bank.negative),
    ] {
        if words.is_empty() {
            errors.push(format!("{}.{} is empty", label, polarity));
        }

        let mut seen = FxHashSet::default();
        for word in words {
            if !seen.insert(word.as_str()) {
                errors.push(format!("{}.{} lists '{}' twice", label, polarity, word));
            }
        }
    }

    let positive: FxHashSet<&str> = bank.positive_neutral.iter().map(String::as_str).collect();
    for word in &bank.negative {
        if positive.contains(word.as_str()) {
            warnings.push(format!(
                "'{}' appears in both polarities of {}",
                word, label
            ));
        }
    }
}
