// Sentiment tokenizer.
//
// Lower-cases the input, drops a fixed set of punctuation characters, and
// splits on whitespace. Apostrophes and hyphens are kept so contractions like
// "don't" and compounds like "well-known" survive as one token. The blacklist
// filter does its own splitting and never goes through here.

/// Characters removed before splitting.
const STRIPPED: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '_', '`', '"', '~',
    '(', ')',
];

/// Split `text` into lower-case word tokens, in order.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED.contains(c))
        .collect();

    cleaned.split_whitespace().map(str::to_string).collect()
}
