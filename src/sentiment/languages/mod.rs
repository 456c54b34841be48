// Built-in languages, registered into every default registry.

pub mod en;
pub mod fr;

use super::traits::LanguageEntry;

pub fn builtins() -> Vec<(&'static str, LanguageEntry)> {
    vec![("en", en::entry()), ("fr", fr::entry())]
}
