use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::MIN_JAPANESE_RATIO;

/// Letters, numbers and punctuation in any script.
static MEANINGFUL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}\p{P}]").expect("static pattern"));

/// Hiragana, katakana, CJK ideographs, Japanese punctuation and full-width forms.
pub fn is_japanese_char(c: char) -> bool {
    matches!(
        c as u32,
        0x3040..=0x309F | 0x30A0..=0x30FF | 0x4E00..=0x9FFF | 0x3000..=0x303F | 0xFF00..=0xFFEF
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharCounts {
    pub japanese: usize,
    pub meaningful: usize,
}

impl CharCounts {
    pub fn of(text: &str) -> Self {
        Self {
            japanese: text.chars().filter(|&c| is_japanese_char(c)).count(),
            meaningful: MEANINGFUL.find_iter(text).count(),
        }
    }

    /// `None` when there is nothing to measure against.
    pub fn ratio(&self) -> Option<f64> {
        if self.meaningful == 0 {
            return None;
        }
        Some(self.japanese as f64 / self.meaningful as f64)
    }
}

/// Heuristic check that `text` is mostly Japanese.
///
/// Japanese characters are counted against every letter, number and
/// punctuation mark in the input, so mixed text such as `これはtest123です`
/// passes as long as the Japanese share reaches `min_ratio`. Empty input and
/// input without any meaningful character never pass.
pub fn is_japanese_with_ratio(text: &str, min_ratio: f64) -> bool {
    if text.is_empty() {
        return false;
    }
    match CharCounts::of(text).ratio() {
        Some(ratio) => ratio >= min_ratio,
        None => false,
    }
}

pub fn is_japanese(text: &str) -> bool {
    is_japanese_with_ratio(text, MIN_JAPANESE_RATIO)
}
