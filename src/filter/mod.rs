// Blacklist filtering — detection and masking of disallowed words.

pub mod blacklist;
pub mod words;
