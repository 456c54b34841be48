// French lexicon. Negation is detected on the particle that precedes the
// scored word ("pas bon", "plus content").

use super::super::traits::{LabelMapping, LanguageEntry, NegationStrategy};

const LABELS: &[(&str, i32)] = &[
    ("adore", 3),
    ("affreux", -3),
    ("aime", 2),
    ("beau", 3),
    ("bien", 2),
    ("bon", 2),
    ("colère", -3),
    ("content", 2),
    ("déteste", -3),
    ("ennuyeux", -2),
    ("excellent", 3),
    ("génial", 3),
    ("heureux", 3),
    ("horrible", -3),
    ("joli", 2),
    ("magnifique", 3),
    ("mal", -2),
    ("mauvais", -3),
    ("merci", 2),
    ("nul", -3),
    ("peur", -2),
    ("super", 3),
    ("triste", -2),
];

const NEGATORS: &[&str] = &["aucun", "jamais", "ni", "pas", "plus", "sans"];

pub fn entry() -> LanguageEntry {
    let labels: LabelMapping = LABELS.iter().map(|&(w, s)| (w.to_string(), s)).collect();
    LanguageEntry::new(labels, NegationStrategy::new(NEGATORS.iter().copied()))
}
