use regex::Regex;
use lazy_static::lazy_static;

use unicode_normalization::UnicodeNormalization;
use unicode_categories::UnicodeCategories;

lazy_static! {
    /* Word runs, or a single non-space character of anything else. Runs of
     * separators ("=====") are split into one token per character. */
    static ref TOKEN: Regex = Regex::new(r"\w+|[^\w\s]").expect("invalid regexp");
}

/// Split text into raw word and punctuation tokens, in text order.
pub fn split(text: &str) -> Vec<&str> {
    TOKEN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Decompose accents into separate unicode characters and drop them.
pub fn fold_accents(token: &str) -> String {
    let mut token: String = token.nfd().filter(|ch| !ch.is_mark_nonspacing()).collect();

    /* Various language-specific letters which don't decompose */
    for (ch_from, ch_to) in [("ł", "l"), ("Ł", "L"), ("ß", "ss")] {
        if token.contains(ch_from) {
            token = token.replace(ch_from, ch_to);
        }
    }
    token
}
