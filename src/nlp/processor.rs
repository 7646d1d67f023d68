//! Text processing front end
//!
//! Runs the tokenizer, then fills in lemmas and stopword flags.

use super::lemmatizer::Lemmatizer;
use super::stopwords::StopwordFilter;
use super::tokenizer::Tokenizer;
use super::Language;
use crate::types::{Doc, TokenKind};

#[derive(Debug)]
pub struct TextProcessor {
    tokenizer: Tokenizer,
    lemmatizer: Lemmatizer,
    stopwords: StopwordFilter,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new(Language::English)
    }
}

impl TextProcessor {
    pub fn new(language: Language) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            lemmatizer: Lemmatizer::new(language),
            stopwords: StopwordFilter::new(language),
        }
    }

    /// Replace the stopword list
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Split, tokenize and lemmatize `text`. Entities are left empty.
    pub fn process(&self, text: &str) -> Doc {
        let (sentences, mut tokens) = self.tokenizer.tokenize(text);

        for token in &mut tokens {
            if token.kind == TokenKind::Word {
                token.lemma = self.lemmatizer.lemma(&token.text);
                token.is_stopword = self.stopwords.is_stopword(&token.text);
            }
        }

        Doc {
            sentences,
            tokens,
            entities: Vec::new(),
        }
    }
}
