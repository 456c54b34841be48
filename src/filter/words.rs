// Built-in blacklist.
//
// A merged English + French list. Entries that contain characters outside
// [A-Za-z0-9_] (leetspeak spellings, multi-word phrases) are matched with an
// escaped whole-word pattern instead of plain set lookup.

/// English entries, including common leetspeak spellings.
const ENGLISH: &[&str] = &[
    "anal", "anus", "arse", "arsehole", "ass", "asshole", "a$$", "a$$hole", "bastard", "bitch",
    "b!tch", "bitches", "blowjob", "bollocks", "boner", "boob", "boobs", "bullshit", "clit",
    "cock", "cocksucker", "crap", "cum", "cunt", "damn", "dick", "dickhead", "dildo", "douche",
    "douchebag", "dyke", "fag", "faggot", "fuck", "fucked", "fucker", "fuckin", "fucking",
    "f*ck", "goddamn", "handjob", "hell", "homo", "jackass", "jerkoff", "jizz", "kike",
    "motherfucker", "nigga", "nigger", "nazi", "penis", "piss", "pissed", "porn", "prick",
    "pussy", "queef", "retard", "scrotum", "sh!t", "shit", "shitty", "skank", "slut", "smegma",
    "son of a bitch", "spic", "tit", "tits", "twat", "vagina", "wank", "wanker", "whore",
];

/// French entries.
const FRENCH: &[&str] = &[
    "batard", "bordel", "branleur", "connard", "connasse", "conne", "couille", "couilles",
    "encule", "enculé", "enfoiré", "fils de pute", "foutre", "merde", "nique", "pétasse",
    "putain", "pute", "salaud", "salope", "tapette",
];

/// The default blacklist used when a filter isn't built with `empty_list`.
pub fn default_words() -> Vec<String> {
    ENGLISH
        .iter()
        .chain(FRENCH.iter())
        .map(|w| (*w).to_string())
        .collect()
}
