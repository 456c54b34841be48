// Colored terminal output for moderation results.
//
// main.rs delegates all formatting here so the command handlers stay small.

use colored::Colorize;

use crate::sentiment::engine::AnalysisResult;
use crate::toxicity::traits::ToxicityResult;

/// One-line verdict for `check`.
pub fn display_profanity_verdict(text: &str, profane: bool) {
    let preview = super::truncate_chars(text, 60);
    if profane {
        println!("{} \"{}\"", "PROFANE".red().bold(), preview);
    } else {
        println!("{} \"{}\"", "CLEAN".green().bold(), preview);
    }
}

/// Sentiment breakdown for `sentiment`.
pub fn display_sentiment(result: &AnalysisResult, language: &str) {
    println!(
        "\n{}",
        format!("=== Sentiment ({language}) ===").bold()
    );

    let score = format!("{:+}", result.score);
    let colored_score = match result.score {
        s if s > 0 => score.green().bold(),
        s if s < 0 => score.red().bold(),
        _ => score.dimmed(),
    };

    println!("  Score:       {colored_score}");
    println!("  Comparative: {:.3}", result.comparative);
    println!(
        "  Tokens:      {} ({} scored)",
        result.tokens.len(),
        result.words.len()
    );

    if result.calculation.is_empty() {
        println!("  {}", "No scored words.".dimmed());
        return;
    }

    println!();
    println!("  {:<20} {:>6}", "Word".dimmed(), "Score".dimmed());
    println!("  {}", "-".repeat(27).dimmed());
    for entry in &result.calculation {
        let value = format!("{:>+6}", entry.score);
        let value = if entry.score > 0 {
            value.green()
        } else if entry.score < 0 {
            value.red()
        } else {
            value.normal()
        };
        println!("  {:<20} {}", entry.token, value);
    }
}

/// Attribute scores for `toxicity`.
pub fn display_toxicity(result: &ToxicityResult) {
    println!("\n{}", "=== Toxicity ===".bold());

    let rows = [
        ("Toxicity", result.toxicity),
        ("Severe toxicity", result.attributes.severe_toxicity),
        ("Identity attack", result.attributes.identity_attack),
        ("Insult", result.attributes.insult),
        ("Profanity", result.attributes.profanity),
        ("Threat", result.attributes.threat),
    ];

    for (label, value) in rows {
        if let Some(v) = value {
            println!("  {:<16} {}", label, colorize_probability(v));
        }
    }
}

fn colorize_probability(value: f64) -> colored::ColoredString {
    let text = format!("{value:.3}");
    if value >= 0.7 {
        text.red().bold()
    } else if value >= 0.4 {
        text.yellow()
    } else {
        text.green()
    }
}
