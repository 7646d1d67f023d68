//! Extractive summarization
//!
//! Two interchangeable strategies select sentences from the source text:
//! - [`SummarizerKind::TextRank`]: overlap-weighted sentence graph, keeps a
//!   fraction of the document, sentences separated by newlines.
//! - [`SummarizerKind::LexRank`]: thresholded TF-IDF cosine graph, keeps the
//!   top three sentences, separated by single spaces.
//!
//! [`SummarizerDispatch`] picks the strategy from a name and falls back to
//! TextRank when the name is missing or not recognized.

pub mod lexrank;
pub mod selector;
pub mod similarity;
pub mod textrank;

use serde::Serialize;

use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::nlp::{Language, TextProcessor};
use crate::types::Sentence;

use lexrank::LexRankSummarizer;
use textrank::TextRankSummarizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizerKind {
    #[default]
    TextRank,
    LexRank,
}

impl SummarizerKind {
    /// Parse a strategy name; `None` if it is not recognized
    ///
    /// Accepts the algorithm name, the library name it replaces, or the
    /// single letter of its slot.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "textrank" | "text_rank" | "gensim" | "a" => Some(Self::TextRank),
            "lexrank" | "lex_rank" | "sumy" | "b" => Some(Self::LexRank),
            _ => None,
        }
    }

    /// Resolve an optional name, returning the strategy and whether the
    /// default had to be used
    pub fn resolve(value: Option<&str>) -> (Self, bool) {
        match value.and_then(Self::parse) {
            Some(kind) => (kind, false),
            None => (Self::default(), true),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TextRank => "textrank",
            Self::LexRank => "lexrank",
        }
    }

    /// Separator placed between selected sentences
    pub fn separator(&self) -> &'static str {
        match self {
            Self::TextRank => "\n",
            Self::LexRank => " ",
        }
    }
}

impl std::fmt::Display for SummarizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SummarizerKind {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| format!("unknown summarizer `{value}`"))
    }
}

/// A summary together with how it was produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryOutcome {
    /// Strategy that actually ran
    pub strategy: SummarizerKind,
    /// Whether the requested strategy was missing or unrecognized
    pub fell_back: bool,
    /// Selected sentences in output order
    pub sentences: Vec<String>,
    pub summary: String,
}

/// Strategy selection and output normalization
#[derive(Debug)]
pub struct SummarizerDispatch {
    processor: TextProcessor,
    textrank: TextRankSummarizer,
    lexrank: LexRankSummarizer,
}

impl Default for SummarizerDispatch {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}

impl SummarizerDispatch {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            processor: TextProcessor::new(Language::from_code_or_default(&config.language)),
            textrank: TextRankSummarizer::new(config.textrank.clone()),
            lexrank: LexRankSummarizer::new(config.lexrank.clone()),
        }
    }

    /// Summarize `text` with the named strategy
    pub fn summarize(&self, text: &str, strategy: Option<&str>) -> Result<String> {
        self.summarize_detailed(text, strategy)
            .map(|outcome| outcome.summary)
    }

    /// Like [`Self::summarize`], also reporting the strategy used and the
    /// selected sentences
    pub fn summarize_detailed(&self, text: &str, strategy: Option<&str>) -> Result<SummaryOutcome> {
        let (kind, fell_back) = SummarizerKind::resolve(strategy);
        if fell_back {
            tracing::warn!(
                requested = strategy.unwrap_or("<none>"),
                "Using default summarizer ({kind})"
            );
        }

        let selected = self.run(kind, text)?;
        let summary = selector::render(&selected, kind.separator());

        Ok(SummaryOutcome {
            strategy: kind,
            fell_back,
            sentences: selected.into_iter().map(|s| s.text).collect(),
            summary,
        })
    }

    /// Run one strategy and return the selected sentences
    pub fn run(&self, kind: SummarizerKind, text: &str) -> Result<Vec<Sentence>> {
        let doc = self.processor.process(text);
        match kind {
            SummarizerKind::TextRank => self.textrank.summarize(&doc),
            SummarizerKind::LexRank => Ok(self.lexrank.summarize(&doc)),
        }
    }
}
