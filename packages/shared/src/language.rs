//! Heuristic Chinese / English language detection.
//!
//! Only two scripts are told apart: CJK unified ideographs (the common
//! `U+4E00..=U+9FA5` block) and ASCII Latin letters. Everything else is
//! indeterminate and reported as [`Language::Auto`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Minimum number of Latin letters for Latin-only text to count as English.
///
/// Keeps emoticons and initials such as `ok` or `J.` out of the `en` bucket.
pub const MIN_LATIN_LETTERS: usize = 3;

/// Result of language detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Zh,
    En,
    Auto,
}

impl Language {
    /// Language code as used by the translation endpoint
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Zh => "zh",
            Language::En => "en",
            Language::Auto => "auto",
        }
    }

    /// The language a message in `self` gets translated into.
    ///
    /// `Auto` has no counterpart: indeterminate text is never translated.
    pub fn counterpart(&self) -> Option<Language> {
        match self {
            Language::Zh => Some(Language::En),
            Language::En => Some(Language::Zh),
            Language::Auto => None,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Classify `text` as Chinese, English or indeterminate.
///
/// # Examples
///
/// ```
/// use bilingo_shared::language::{detect_language, Language};
///
/// assert_eq!(detect_language("你好"), Language::Zh);
/// assert_eq!(detect_language("hello world"), Language::En);
/// assert_eq!(detect_language("ok"), Language::Auto);
/// ```
pub fn detect_language(text: &str) -> Language {
    if text.trim().is_empty() {
        return Language::Auto;
    }

    let ideographs = text.chars().filter(|c| is_cjk_ideograph(*c)).count();
    let latin = text.chars().filter(|c| c.is_ascii_alphabetic()).count();

    match (ideographs > 0, latin > 0) {
        (true, false) => Language::Zh,
        (false, true) if latin >= MIN_LATIN_LETTERS => Language::En,
        (true, true) if ideographs >= latin => Language::Zh,
        (true, true) => Language::En,
        _ => Language::Auto,
    }
}
