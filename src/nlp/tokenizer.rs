//! Sentence splitting and word tokenization
//!
//! Both levels use Unicode text segmentation (UAX #29). A sentence fragment
//! ending in a title ("Dr.") is always merged with the fragment that follows;
//! one ending in another abbreviation ("St.", "e.g.") only when the next
//! fragment starts with a lowercase letter or a digit.

use rustc_hash::FxHashSet;
use unicode_segmentation::UnicodeSegmentation;

use crate::types::{Sentence, Token, TokenKind};

/// Titles that precede a name and never end a sentence
const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "rev", "gov", "sen", "rep", "lt", "col", "capt", "sgt",
];

/// Abbreviations that may end a sentence; merged only when the text after
/// them does not start like a new sentence
const ABBREVIATIONS: &[&str] = &[
    "sr", "jr", "st", "mt", "vs", "e.g", "i.e", "fig", "approx", "dept", "gen",
];

const SYMBOLS: &[char] = &['$', '€', '£', '¥', '%', '&', '+', '<', '=', '>', '^', '|', '~', '#', '@', '*'];

/// Unicode-aware tokenizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    titles: FxHashSet<&'static str>,
    abbreviations: FxHashSet<&'static str>,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            titles: TITLES.iter().copied().collect(),
            abbreviations: ABBREVIATIONS.iter().copied().collect(),
        }
    }

    /// Split text into trimmed sentence byte ranges
    pub fn sentence_spans(&self, text: &str) -> Vec<(usize, usize)> {
        let mut spans: Vec<(usize, usize)> = Vec::new();
        let joined = join_wrapped_lines(text);

        for (offset, fragment) in joined.split_sentence_bound_indices() {
            let trimmed_start = fragment.trim_start();
            if trimmed_start.is_empty() {
                continue;
            }
            let start = offset + (fragment.len() - trimmed_start.len());
            let end = offset + fragment.trim_end().len();

            match spans.last_mut() {
                Some(prev) if self.continues_after(&text[prev.0..prev.1], trimmed_start) => {
                    prev.1 = end;
                }
                _ => spans.push((start, end)),
            }
        }

        spans
    }

    /// Whether the fragment after `sentence` belongs to the same sentence
    ///
    /// True after a title ("Dr. Smith"), or after another abbreviation when
    /// the next fragment starts with a lowercase letter or a digit.
    fn continues_after(&self, sentence: &str, next: &str) -> bool {
        let Some(word) = trailing_abbreviation(sentence) else {
            return false;
        };
        if self.titles.contains(word.as_str()) {
            return true;
        }
        self.abbreviations.contains(word.as_str())
            && next
                .chars()
                .next()
                .is_some_and(|c| c.is_lowercase() || c.is_ascii_digit())
    }

    /// Tokenize text into sentences and tokens
    ///
    /// Token lemmas are the lowercased surface form; [`super::TextProcessor`]
    /// replaces them with real lemmas.
    pub fn tokenize(&self, text: &str) -> (Vec<Sentence>, Vec<Token>) {
        let mut sentences = Vec::new();
        let mut tokens = Vec::new();

        for (index, (start, end)) in self.sentence_spans(text).into_iter().enumerate() {
            let slice = &text[start..end];
            let start_token = tokens.len();

            for (offset, word) in slice.split_word_bound_indices() {
                if word.chars().all(char::is_whitespace) {
                    continue;
                }
                let token_idx = tokens.len();
                tokens.push(Token::new(
                    word,
                    word.to_lowercase(),
                    classify(word),
                    start + offset,
                    start + offset + word.len(),
                    index,
                    token_idx,
                ));
            }

            sentences.push(Sentence {
                text: collapse_whitespace(slice),
                start,
                end,
                index,
                start_token,
                end_token: tokens.len(),
                score: 0.0,
            });
        }

        (sentences, tokens)
    }
}

/// Replace single line breaks with spaces so hard-wrapped text is not split
/// mid-sentence. Blank lines still end a sentence. Byte offsets are preserved.
fn join_wrapped_lines(text: &str) -> String {
    let is_blank = |c: char| c == ' ' || c == '\t' || c == '\r';
    text.char_indices()
        .map(|(i, c)| match c {
            '\r' => ' ',
            '\n' => {
                let prev_break = text[..i].trim_end_matches(is_blank).ends_with('\n');
                let next_break = text[i + 1..].trim_start_matches(is_blank).starts_with('\n');
                if prev_break || next_break {
                    c
                } else {
                    ' '
                }
            }
            _ => c,
        })
        .collect()
}

fn classify(word: &str) -> TokenKind {
    let has_digit = word.chars().any(|c| c.is_numeric());
    let has_alpha = word.chars().any(char::is_alphabetic);

    if has_digit && word.chars().all(|c| c.is_numeric() || c == '.' || c == ',') {
        TokenKind::Number
    } else if has_alpha || has_digit {
        TokenKind::Word
    } else if word.chars().all(|c| SYMBOLS.contains(&c)) {
        TokenKind::Symbol
    } else {
        TokenKind::Punctuation
    }
}

/// Lowercased last word of `sentence` if it ends with a period
fn trailing_abbreviation(sentence: &str) -> Option<String> {
    let last = sentence.split_whitespace().last()?;
    let word = last.strip_suffix('.')?;
    let word = word.trim_start_matches(|c: char| !c.is_alphanumeric());
    Some(word.to_lowercase())
}

/// Collapse whitespace runs to single spaces and trim
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentence_split() {
        let tokenizer = Tokenizer::new();
        let text = "Cats are mammals. Dogs are mammals too. Fish live in water.";
        let (sentences, _) = tokenizer.tokenize(text);

        let texts: Vec<_> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(
            texts,
            vec!["Cats are mammals.", "Dogs are mammals too.", "Fish live in water."]
        );
    }

    #[test]
    fn test_abbreviation_not_split() {
        let tokenizer = Tokenizer::new();
        let text = "We met Dr. Smith yesterday. He was well.";
        let (sentences, _) = tokenizer.tokenize(text);

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "We met Dr. Smith yesterday.");
    }

    #[test]
    fn test_abbreviation_ending_sentence() {
        let tokenizer = Tokenizer::new();
        let (sentences, _) = tokenizer.tokenize("He lives on Main St. The house is big.");

        let texts: Vec<_> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["He lives on Main St.", "The house is big."]);
    }

    #[test]
    fn test_abbreviation_before_lowercase_merged() {
        let tokenizer = Tokenizer::new();
        let (sentences, _) = tokenizer.tokenize("Small pets, e.g. hamsters, are cheap. Dogs cost more.");

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "Small pets, e.g. hamsters, are cheap.");
    }

    #[test]
    fn test_whitespace_collapsed() {
        let tokenizer = Tokenizer::new();
        let text = "  A line\n   that wraps.  ";
        let (sentences, _) = tokenizer.tokenize(text);

        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].text, "A line that wraps.");
        assert_eq!(&text[sentences[0].start..sentences[0].end], "A line\n   that wraps.");
    }

    #[test]
    fn test_blank_line_ends_sentence() {
        let tokenizer = Tokenizer::new();
        let text = "Heading without a period\n\nBody text follows here.";
        let (sentences, _) = tokenizer.tokenize(text);

        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "Heading without a period");
    }

    #[test]
    fn test_token_offsets_slice_source() {
        let tokenizer = Tokenizer::new();
        let text = "Prices rose 5% in 2023. Analysts weren't surprised!";
        let (sentences, tokens) = tokenizer.tokenize(text);

        for token in &tokens {
            assert_eq!(&text[token.start..token.end], token.text);
        }
        assert_eq!(sentences[1].start_token, sentences[0].end_token);
        assert_eq!(sentences[1].end_token, tokens.len());
        assert!(tokens.iter().any(|t| t.text == "weren't"));
    }

    #[test]
    fn test_token_kinds() {
        assert_eq!(classify("cats"), TokenKind::Word);
        assert_eq!(classify("2023"), TokenKind::Number);
        assert_eq!(classify("3.5"), TokenKind::Number);
        assert_eq!(classify("."), TokenKind::Punctuation);
        assert_eq!(classify("%"), TokenKind::Symbol);
        assert_eq!(classify("COVID19"), TokenKind::Word);
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = Tokenizer::new();
        let (sentences, tokens) = tokenizer.tokenize("   \n ");
        assert!(sentences.is_empty());
        assert!(tokens.is_empty());
    }
}
