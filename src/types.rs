//! Core data types shared across the crate
//!
//! Tokens and sentences carry byte offsets into the source text so that
//! downstream stages can always recover the original surface form.

use serde::{Deserialize, Serialize};

/// Coarse token category assigned by the tokenizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    Word,
    Number,
    Punctuation,
    Symbol,
}

/// A token with its normalized form and position
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Surface text as it appears in the source
    pub text: String,
    /// Normalized base form
    pub lemma: String,
    pub kind: TokenKind,
    /// Byte offset where the token starts
    pub start: usize,
    /// Byte offset where the token ends
    pub end: usize,
    /// Index of the containing sentence
    pub sentence_idx: usize,
    /// Index of this token in the document
    pub token_idx: usize,
    pub is_stopword: bool,
}

impl Token {
    /// Create a new token (not marked as a stopword)
    pub fn new(
        text: impl Into<String>,
        lemma: impl Into<String>,
        kind: TokenKind,
        start: usize,
        end: usize,
        sentence_idx: usize,
        token_idx: usize,
    ) -> Self {
        Self {
            text: text.into(),
            lemma: lemma.into(),
            kind,
            start,
            end,
            sentence_idx,
            token_idx,
            is_stopword: false,
        }
    }

    /// Whether this token contributes to sentence similarity
    ///
    /// Only non-stopword words and numbers count.
    pub fn is_content(&self) -> bool {
        matches!(self.kind, TokenKind::Word | TokenKind::Number) && !self.is_stopword
    }
}

/// A sentence of the source document
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Sentence text with whitespace runs collapsed to a single space
    pub text: String,
    /// Byte offset where the sentence starts
    pub start: usize,
    /// Byte offset where the sentence ends
    pub end: usize,
    /// Position of the sentence in the document
    pub index: usize,
    /// First token index (inclusive)
    pub start_token: usize,
    /// Last token index (exclusive)
    pub end_token: usize,
    /// Centrality score, filled in by a summarizer
    pub score: f64,
}

impl Sentence {
    /// Number of tokens in the sentence
    pub fn token_len(&self) -> usize {
        self.end_token - self.start_token
    }
}

/// Entity category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityLabel {
    Person,
    Org,
    Gpe,
    Date,
    Money,
    Percent,
    Cardinal,
    Misc,
}

impl EntityLabel {
    /// Returns the label as rendered to users
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "PERSON",
            Self::Org => "ORG",
            Self::Gpe => "GPE",
            Self::Date => "DATE",
            Self::Money => "MONEY",
            Self::Percent => "PERCENT",
            Self::Cardinal => "CARDINAL",
            Self::Misc => "MISC",
        }
    }
}

impl std::fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tagged entity span
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntitySpan {
    pub text: String,
    pub label: EntityLabel,
    pub start: usize,
    pub end: usize,
}

/// A fully analyzed document as produced by a language model
#[derive(Debug, Clone, Default)]
pub struct Doc {
    pub sentences: Vec<Sentence>,
    pub tokens: Vec<Token>,
    pub entities: Vec<EntitySpan>,
}

impl Doc {
    /// Tokens belonging to a sentence
    pub fn sentence_tokens(&self, sentence: &Sentence) -> &[Token] {
        &self.tokens[sentence.start_token..sentence.end_token]
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }
}

/// A `(token, lemma)` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenLemma {
    pub token: String,
    pub lemma: String,
}

/// Tokens and tagged entities of a text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntityAnalysis {
    pub tokens: Vec<String>,
    pub entities: Vec<EntitySpan>,
}

/// Sentiment scores
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sentiment {
    /// Negative to positive tone, in `[-1, 1]`
    pub polarity: f64,
    /// Factual to opinionated, in `[0, 1]`
    pub subjectivity: f64,
}

impl Sentiment {
    /// Create a sentiment, clamping both scores into range
    pub fn new(polarity: f64, subjectivity: f64) -> Self {
        Self {
            polarity: polarity.clamp(-1.0, 1.0),
            subjectivity: subjectivity.clamp(0.0, 1.0),
        }
    }
}
