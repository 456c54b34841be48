// English lexicon (AFINN-style integer weights, -5..=5) and negators.

use super::super::traits::{LabelMapping, LanguageEntry, NegationStrategy};

const LABELS: &[(&str, i32)] = &[
    ("abandon", -2),
    ("abandoned", -2),
    ("abuse", -3),
    ("abusive", -3),
    ("accept", 1),
    ("admire", 3),
    ("adore", 3),
    ("afraid", -2),
    ("agree", 1),
    ("amazing", 4),
    ("angry", -3),
    ("annoyed", -2),
    ("annoying", -2),
    ("anxious", -2),
    ("appreciate", 2),
    ("awesome", 4),
    ("awful", -3),
    ("bad", -3),
    ("beautiful", 3),
    ("best", 3),
    ("better", 2),
    ("bitter", -2),
    ("bored", -2),
    ("boring", -3),
    ("brave", 2),
    ("brilliant", 4),
    ("broken", -1),
    ("calm", 2),
    ("care", 2),
    ("charming", 3),
    ("cheerful", 2),
    ("clean", 2),
    ("clever", 2),
    ("confused", -2),
    ("cool", 1),
    ("crap", -3),
    ("crazy", -2),
    ("cruel", -3),
    ("cry", -1),
    ("damn", -2),
    ("dead", -3),
    ("delight", 3),
    ("delighted", 3),
    ("depressed", -2),
    ("disappointed", -2),
    ("disaster", -2),
    ("disgusting", -3),
    ("dislike", -2),
    ("dumb", -3),
    ("easy", 1),
    ("enjoy", 2),
    ("evil", -3),
    ("excellent", 3),
    ("excited", 3),
    ("fail", -2),
    ("failed", -2),
    ("failure", -2),
    ("fair", 2),
    ("fantastic", 4),
    ("fear", -2),
    ("fine", 2),
    ("friendly", 2),
    ("fun", 4),
    ("funny", 4),
    ("glad", 3),
    ("good", 2),
    ("gorgeous", 3),
    ("great", 3),
    ("grief", -2),
    ("happy", 3),
    ("hate", -3),
    ("hated", -3),
    ("helpful", 2),
    ("hope", 2),
    ("horrible", -3),
    ("hurt", -2),
    ("ideal", 3),
    ("idiot", -3),
    ("ill", -2),
    ("important", 2),
    ("impressed", 3),
    ("interesting", 2),
    ("joy", 3),
    ("kill", -3),
    ("kind", 2),
    ("lame", -2),
    ("like", 2),
    ("lonely", -2),
    ("love", 3),
    ("loved", 3),
    ("lovely", 3),
    ("lucky", 3),
    ("mad", -3),
    ("mess", -2),
    ("miserable", -3),
    ("nasty", -3),
    ("nice", 3),
    ("no", -1),
    ("ok", 2),
    ("outstanding", 5),
    ("pain", -2),
    ("pathetic", -2),
    ("perfect", 3),
    ("pleasant", 3),
    ("pleased", 3),
    ("poor", -2),
    ("problem", -2),
    ("proud", 2),
    ("rude", -2),
    ("sad", -2),
    ("scared", -2),
    ("shame", -2),
    ("sick", -2),
    ("smile", 2),
    ("sorry", -1),
    ("stupid", -2),
    ("success", 2),
    ("superb", 5),
    ("sweet", 2),
    ("terrible", -3),
    ("terrific", 4),
    ("thank", 2),
    ("thanks", 2),
    ("tired", -2),
    ("ugly", -3),
    ("unhappy", -2),
    ("upset", -2),
    ("useful", 2),
    ("useless", -2),
    ("weak", -2),
    ("win", 4),
    ("wonderful", 4),
    ("worried", -3),
    ("worse", -3),
    ("worst", -3),
    ("wow", 4),
    ("wrong", -2),
    ("yes", 1),
];

const NEGATORS: &[&str] = &[
    "aren't", "arent", "can't", "cant", "couldn't", "couldnt", "didn't", "didnt", "doesn't",
    "doesnt", "don't", "dont", "hadn't", "hasn't", "haven't", "isn't", "isnt", "never", "non",
    "not", "shouldn't", "wasn't", "weren't", "won't", "wont", "wouldn't",
];

pub fn entry() -> LanguageEntry {
    let labels: LabelMapping = LABELS.iter().map(|&(w, s)| (w.to_string(), s)).collect();
    LanguageEntry::new(labels, NegationStrategy::new(NEGATORS.iter().copied()))
}
