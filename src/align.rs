// Maps a bunsetsu's morphemes back onto its phrase; unmatched morphemes and
// uncovered text are reported, never fatal.

use std::fmt;

use crate::model::{Bunsetsu, Morpheme};

#[derive(Debug, Clone, PartialEq)]
pub enum Segment<'a> {
    /// Phrase text with no morpheme, already trimmed.
    Gap(&'a str),
    /// A morpheme matched at its position in the phrase.
    Token { token: usize, morpheme: &'a Morpheme },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlignNote<'a> {
    UnknownMorpheme { phrase: &'a str, surface: &'a str },
    UntokenizedGap { phrase: &'a str, gap: &'a str },
    UntokenizedTail { phrase: &'a str, tail: &'a str },
}

impl fmt::Display for AlignNote<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignNote::UnknownMorpheme { phrase, surface } => {
                write!(f, "phrase: {phrase} unknown morpheme: {surface}")
            }
            AlignNote::UntokenizedGap { phrase, gap } => {
                write!(f, "phrase: {phrase} missing morpheme: {gap}")
            }
            AlignNote::UntokenizedTail { phrase, tail } => {
                write!(f, "phrase: {phrase} dropped untokenized suffix: {tail}")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alignment<'a> {
    pub segments: Vec<Segment<'a>>,
    pub notes: Vec<AlignNote<'a>>,
}

pub fn align(bunsetsu: &Bunsetsu) -> Alignment<'_> {
    let phrase = bunsetsu.japanese_phrase.as_str();
    let mut out = Alignment::default();
    let mut next = 0usize;

    for (token, morpheme) in bunsetsu.morphological_analysis.iter().enumerate() {
        let surface = morpheme.surface_form.as_str();
        let Some(found) = phrase[next..].find(surface).map(|at| next + at) else {
            out.notes.push(AlignNote::UnknownMorpheme { phrase, surface });
            continue;
        };

        if found > next {
            let gap = phrase[next..found].trim();
            if !gap.is_empty() {
                out.notes.push(AlignNote::UntokenizedGap { phrase, gap });
                out.segments.push(Segment::Gap(gap));
            }
        }

        out.segments.push(Segment::Token { token, morpheme });
        next = found + surface.len();
    }

    // The unmatched suffix is reported but not rendered.
    let tail = phrase[next..].trim();
    if !tail.is_empty() {
        out.notes.push(AlignNote::UntokenizedTail { phrase, tail });
    }

    out
}

#[cfg(test)]
impl<'a> Alignment<'a> {
    pub fn tokens(&self) -> impl Iterator<Item = &'a Morpheme> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Token { morpheme, .. } => Some(*morpheme),
            Segment::Gap(_) => None,
        })
    }

    pub fn gaps(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Gap(text) => Some(*text),
            Segment::Token { .. } => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bunsetsu(phrase: &str, surfaces: &[&str]) -> Bunsetsu {
        Bunsetsu {
            japanese_phrase: phrase.to_string(),
            morphological_analysis: surfaces.iter().map(|s| Morpheme::with_surface(s)).collect(),
            ..Bunsetsu::default()
        }
    }

    fn surfaces<'a>(alignment: &Alignment<'a>) -> Vec<&'a str> {
        alignment.tokens().map(|m| m.surface_form.as_str()).collect()
    }

    #[test]
    fn fully_tokenized_phrase() {
        let b = bunsetsu("東京に行く", &["東京", "に", "行く"]);
        let a = align(&b);
        assert_eq!(surfaces(&a), vec!["東京", "に", "行く"]);
        assert_eq!(a.gaps().count(), 0);
        assert!(a.notes.is_empty());
    }

    #[test]
    fn gap_text_sits_between_tokens() {
        let b = bunsetsu("東京はとても大きい", &["東京", "大きい"]);
        let a = align(&b);
        assert_eq!(a.segments.len(), 3);
        assert!(matches!(a.segments[0], Segment::Token { token: 0, .. }));
        assert_eq!(a.segments[1], Segment::Gap("はとても"));
        assert!(matches!(a.segments[2], Segment::Token { token: 1, .. }));
        assert_eq!(
            a.notes,
            vec![AlignNote::UntokenizedGap { phrase: "東京はとても大きい", gap: "はとても" }]
        );
    }

    #[test]
    fn whitespace_only_gap_is_dropped() {
        let b = bunsetsu("東京 　に", &["東京", "に"]);
        let a = align(&b);
        assert_eq!(surfaces(&a), vec!["東京", "に"]);
        assert_eq!(a.gaps().count(), 0);
        assert!(a.notes.is_empty());
    }

    #[test]
    fn gap_is_trimmed() {
        let b = bunsetsu("猫 は 好き", &["猫", "好き"]);
        let a = align(&b);
        assert_eq!(a.gaps().collect::<Vec<_>>(), vec!["は"]);
    }

    #[test]
    fn unknown_morpheme_is_skipped_without_moving_cursor() {
        let b = bunsetsu("東京に行く", &["東京", "大阪", "に", "行く"]);
        let a = align(&b);
        assert_eq!(surfaces(&a), vec!["東京", "に", "行く"]);
        assert_eq!(a.gaps().count(), 0);
        assert_eq!(
            a.notes,
            vec![AlignNote::UnknownMorpheme { phrase: "東京に行く", surface: "大阪" }]
        );
        // Token ids keep the morpheme's position in the server sequence.
        assert!(matches!(a.segments[1], Segment::Token { token: 2, .. }));
    }

    #[test]
    fn morpheme_before_cursor_is_unknown() {
        // "東京" only occurs before the cursor once "東京に" is consumed.
        let b = bunsetsu("東京に", &["東京", "に", "東京"]);
        let a = align(&b);
        assert_eq!(surfaces(&a), vec!["東京", "に"]);
        assert_eq!(a.notes.len(), 1);
    }

    #[test]
    fn repeated_surface_matches_in_order() {
        let b = bunsetsu("ののの", &["の", "の", "の"]);
        let a = align(&b);
        assert_eq!(a.tokens().count(), 3);
        assert!(a.notes.is_empty());
    }

    #[test]
    fn trailing_suffix_is_reported_not_rendered() {
        let b = bunsetsu("東京に行きます", &["東京", "に"]);
        let a = align(&b);
        assert_eq!(surfaces(&a), vec!["東京", "に"]);
        assert_eq!(a.gaps().count(), 0);
        assert_eq!(
            a.notes,
            vec![AlignNote::UntokenizedTail { phrase: "東京に行きます", tail: "行きます" }]
        );
    }

    #[test]
    fn no_morphemes_renders_nothing() {
        let b = bunsetsu("東京", &[]);
        let a = align(&b);
        assert!(a.segments.is_empty());
    }

    #[test]
    fn note_messages() {
        let note = AlignNote::UnknownMorpheme { phrase: "東京", surface: "大阪" };
        assert_eq!(note.to_string(), "phrase: 東京 unknown morpheme: 大阪");
    }
}
