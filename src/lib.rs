//! nlpiffy: small NLP toolkit
//!
//! Tokens with lemmas, rule-based entity tagging, VADER sentiment and two
//! graph-based extractive summarizers behind one dispatch point.
//!
//! ```no_run
//! use nlpiffy::{Analyzer, AnalyzerConfig};
//!
//! let analyzer = Analyzer::from_config(&AnalyzerConfig::default())?;
//! let summary = analyzer.summarize("First point. Second point. Third point.", Some("lexrank"))?;
//! println!("{summary}");
//! # Ok::<(), nlpiffy::AnalyzerError>(())
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod graph;
pub mod model;
pub mod nlp;
pub mod pagerank;
pub mod sentiment;
pub mod summarizer;
pub mod types;

pub use analyzer::Analyzer;
pub use config::{AnalyzerConfig, LexRankConfig, RankConfig, TextRankConfig, ValidationReport};
pub use error::{AnalyzerError, Result};
pub use model::{LanguageModel, ModelRegistry, RuleBasedModel, DEFAULT_MODEL};
pub use sentiment::{SentimentScorer, VaderScorer};
pub use summarizer::{SummarizerDispatch, SummarizerKind, SummaryOutcome};
pub use types::{Doc, EntityAnalysis, EntityLabel, EntitySpan, Sentence, Sentiment, Token, TokenLemma};
