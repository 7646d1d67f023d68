//! Natural Language Processing components
//!
//! This module provides sentence splitting, tokenization, lemmatization and
//! stopword filtering, combined by [`TextProcessor`].

pub mod lemmatizer;
pub mod processor;
pub mod stopwords;
pub mod tokenizer;

pub use processor::TextProcessor;

use rust_stemmers::Algorithm;
use stop_words::LANGUAGE;

/// Languages with both a stopword list and a stemmer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    German,
    French,
    Spanish,
    Italian,
    Portuguese,
    Dutch,
    Russian,
    Swedish,
    Norwegian,
    Danish,
    Hungarian,
    Turkish,
}

impl Language {
    /// Parse an ISO 639-1 code or English language name
    pub fn from_code(code: &str) -> Option<Self> {
        let lang = match code.trim().to_lowercase().as_str() {
            "en" | "english" => Self::English,
            "de" | "german" => Self::German,
            "fr" | "french" => Self::French,
            "es" | "spanish" => Self::Spanish,
            "it" | "italian" => Self::Italian,
            "pt" | "portuguese" => Self::Portuguese,
            "nl" | "dutch" => Self::Dutch,
            "ru" | "russian" => Self::Russian,
            "sv" | "swedish" => Self::Swedish,
            "no" | "norwegian" => Self::Norwegian,
            "da" | "danish" => Self::Danish,
            "hu" | "hungarian" => Self::Hungarian,
            "tr" | "turkish" => Self::Turkish,
            _ => return None,
        };
        Some(lang)
    }

    /// Parse a code, falling back to English for unsupported languages
    pub fn from_code_or_default(code: &str) -> Self {
        Self::from_code(code).unwrap_or_else(|| {
            tracing::warn!(language = code, "unsupported language, using English");
            Self::English
        })
    }

    pub(crate) fn stopword_list(self) -> LANGUAGE {
        match self {
            Self::English => LANGUAGE::English,
            Self::German => LANGUAGE::German,
            Self::French => LANGUAGE::French,
            Self::Spanish => LANGUAGE::Spanish,
            Self::Italian => LANGUAGE::Italian,
            Self::Portuguese => LANGUAGE::Portuguese,
            Self::Dutch => LANGUAGE::Dutch,
            Self::Russian => LANGUAGE::Russian,
            Self::Swedish => LANGUAGE::Swedish,
            Self::Norwegian => LANGUAGE::Norwegian,
            Self::Danish => LANGUAGE::Danish,
            Self::Hungarian => LANGUAGE::Hungarian,
            Self::Turkish => LANGUAGE::Turkish,
        }
    }

    pub(crate) fn stem_algorithm(self) -> Algorithm {
        match self {
            Self::English => Algorithm::English,
            Self::German => Algorithm::German,
            Self::French => Algorithm::French,
            Self::Spanish => Algorithm::Spanish,
            Self::Italian => Algorithm::Italian,
            Self::Portuguese => Algorithm::Portuguese,
            Self::Dutch => Algorithm::Dutch,
            Self::Russian => Algorithm::Russian,
            Self::Swedish => Algorithm::Swedish,
            Self::Norwegian => Algorithm::Norwegian,
            Self::Danish => Algorithm::Danish,
            Self::Hungarian => Algorithm::Hungarian,
            Self::Turkish => Algorithm::Turkish,
        }
    }
}
