//! Analyzer configuration
//!
//! Loaded from JSON. Every field has a default, so `{}` is a valid config.
//!
//! ```json
//! {
//!   "model": "en_core_web_sm",
//!   "language": "en",
//!   "textrank": { "ratio": 0.2 },
//!   "lexrank": { "num_sentences": 3, "similarity_threshold": 0.1 }
//! }
//! ```
//!
//! [`AnalyzerConfig::validate`] runs every check and collects all findings
//! into a [`ValidationReport`] instead of stopping at the first problem.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AnalyzerError, Result};
use crate::model::DEFAULT_MODEL;

/// PageRank parameters shared by both summarizers
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    pub damping: f64,
    pub max_iterations: usize,
    pub threshold: f64,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            threshold: 1e-6,
        }
    }
}

/// Settings for the TextRank summarizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRankConfig {
    /// Fraction of sentences kept in the summary
    pub ratio: f64,
    pub rank: RankConfig,
}

impl Default for TextRankConfig {
    fn default() -> Self {
        Self {
            ratio: 0.2,
            rank: RankConfig::default(),
        }
    }
}

/// Settings for the LexRank summarizer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexRankConfig {
    /// Number of sentences to select
    pub num_sentences: usize,
    /// Minimum cosine similarity for two sentences to be linked
    pub similarity_threshold: f64,
    pub rank: RankConfig,
}

impl Default for LexRankConfig {
    fn default() -> Self {
        Self {
            num_sentences: 3,
            similarity_threshold: 0.1,
            rank: RankConfig::default(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Language model identifier
    pub model: String,
    /// Stopword language
    pub language: String,
    pub textrank: TextRankConfig,
    pub lexrank: LexRankConfig,

    /// Fields not recognized by the schema
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            language: "en".to_string(),
            textrank: TextRankConfig::default(),
            lexrank: LexRankConfig::default(),
            unknown_fields: HashMap::new(),
        }
    }
}

impl AnalyzerConfig {
    /// Parse a config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a config from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Run all validation checks
    pub fn validate(&self) -> ValidationReport {
        let mut report = ValidationReport::default();

        if self.model.trim().is_empty() {
            report.error("model", "model identifier must not be empty");
        }

        let ratio = self.textrank.ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            report.error(
                "textrank.ratio",
                format!("ratio must be in (0, 1], got {ratio}"),
            );
        }

        if self.lexrank.num_sentences == 0 {
            report.error("lexrank.num_sentences", "must select at least one sentence");
        }

        let threshold = self.lexrank.similarity_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            report.error(
                "lexrank.similarity_threshold",
                format!("threshold must be in [0, 1], got {threshold}"),
            );
        }

        check_rank(&mut report, "textrank.rank", &self.textrank.rank);
        check_rank(&mut report, "lexrank.rank", &self.lexrank.rank);

        let mut unknown: Vec<_> = self.unknown_fields.keys().collect();
        unknown.sort();
        for key in unknown {
            report.warning(key, "unrecognized field is ignored");
        }

        report
    }

    /// Validate and turn the first error into an [`AnalyzerError`]
    pub fn ensure_valid(&self) -> Result<()> {
        let report = self.validate();
        for warning in report.warnings() {
            tracing::warn!(path = %warning.path, "{}", warning.message);
        }
        let first = report.errors().next().map(ToString::to_string);
        match first {
            Some(first) => Err(AnalyzerError::InvalidConfig(first)),
            None => Ok(()),
        }
    }
}

fn check_rank(report: &mut ValidationReport, path: &str, rank: &RankConfig) {
    if !(rank.damping > 0.0 && rank.damping < 1.0) {
        report.error(
            format!("{path}.damping"),
            format!("damping must be in (0, 1), got {}", rank.damping),
        );
    }
    if rank.max_iterations == 0 {
        report.error(format!("{path}.max_iterations"), "must be at least 1");
    }
    if rank.threshold < 0.0 {
        report.error(format!("{path}.threshold"), "must not be negative");
    }
}

// ─── Validation report ──────────────────────────────────────────────────────

/// Whether a diagnostic is a hard error or a soft warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Error,
    Warning,
}

/// A single validation finding
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Dotted path of the offending field
    pub path: String,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Collected diagnostics from a validation run
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    fn push(&mut self, severity: Severity, path: impl Into<String>, message: impl Into<String>) {
        self.diagnostics.push(Diagnostic {
            severity,
            path: path.into(),
            message: message.into(),
        });
    }

    fn error(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Error, path, message);
    }

    fn warning(&mut self, path: impl Into<String>, message: impl Into<String>) {
        self.push(Severity::Warning, path, message);
    }

    /// Iterate over error-severity diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    /// Iterate over warning-severity diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Returns `true` if there are no errors (warnings are acceptable).
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
