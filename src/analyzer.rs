//! Analyzer facade
//!
//! Bundles a language model, a sentiment scorer and the summarizer dispatch
//! behind the four user-facing analyses. Results are typed; formatting is
//! left to the caller.

use std::sync::Arc;

use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::model::{LanguageModel, ModelRegistry};
use crate::sentiment::{SentimentScorer, VaderScorer};
use crate::summarizer::{SummarizerDispatch, SummaryOutcome};
use crate::types::{EntityAnalysis, Sentiment, TokenLemma};

pub struct Analyzer {
    model: Arc<dyn LanguageModel>,
    sentiment: Arc<dyn SentimentScorer>,
    summarizer: SummarizerDispatch,
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("model", &self.model.name())
            .field("summarizer", &self.summarizer)
            .finish_non_exhaustive()
    }
}

impl Analyzer {
    /// Validate `config` and load its model from the global registry
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        Self::with_registry(config, ModelRegistry::global())
    }

    /// Like [`Self::from_config`] with an explicit registry
    pub fn with_registry(config: &AnalyzerConfig, registry: &ModelRegistry) -> Result<Self> {
        config.ensure_valid()?;
        let model = registry.load(&config.model)?;
        Ok(Self::with_parts(model, Arc::new(VaderScorer::new()), config))
    }

    /// Assemble an analyzer from already-built collaborators
    pub fn with_parts(
        model: Arc<dyn LanguageModel>,
        sentiment: Arc<dyn SentimentScorer>,
        config: &AnalyzerConfig,
    ) -> Self {
        Self {
            model,
            sentiment,
            summarizer: SummarizerDispatch::new(config),
        }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Every token paired with its lemma, in document order
    pub fn tokens_and_lemmas(&self, text: &str) -> Vec<TokenLemma> {
        self.model
            .analyze(text)
            .tokens
            .into_iter()
            .map(|t| TokenLemma {
                token: t.text,
                lemma: t.lemma,
            })
            .collect()
    }

    /// Token texts and tagged entity spans
    pub fn entities(&self, text: &str) -> EntityAnalysis {
        let doc = self.model.analyze(text);
        EntityAnalysis {
            tokens: doc.tokens.into_iter().map(|t| t.text).collect(),
            entities: doc.entities,
        }
    }

    pub fn sentiment(&self, text: &str) -> Sentiment {
        self.sentiment.score(text)
    }

    /// Summarize with a named strategy, falling back to the default
    pub fn summarize(&self, text: &str, strategy: Option<&str>) -> Result<String> {
        self.summarizer.summarize(text, strategy)
    }

    pub fn summarize_detailed(&self, text: &str, strategy: Option<&str>) -> Result<SummaryOutcome> {
        self.summarizer.summarize_detailed(text, strategy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalyzerError;
    use crate::types::{Doc, EntityLabel};

    struct FixedSentiment;

    impl SentimentScorer for FixedSentiment {
        fn score(&self, _text: &str) -> Sentiment {
            Sentiment::new(0.25, 0.5)
        }
    }

    struct EmptyModel;

    impl LanguageModel for EmptyModel {
        fn name(&self) -> &str {
            "empty"
        }

        fn analyze(&self, _text: &str) -> Doc {
            Doc::default()
        }
    }

    #[test]
    fn test_tokens_and_lemmas() {
        let analyzer = Analyzer::from_config(&AnalyzerConfig::default()).unwrap();
        let pairs = analyzer.tokens_and_lemmas("Dogs were running.");

        let expected = vec![
            ("Dogs", "dog"),
            ("were", "be"),
            ("running", "run"),
            (".", "."),
        ];
        let actual: Vec<_> = pairs
            .iter()
            .map(|p| (p.token.as_str(), p.lemma.as_str()))
            .collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_entities() {
        let analyzer = Analyzer::from_config(&AnalyzerConfig::default()).unwrap();
        let analysis = analyzer.entities("We flew to Tokyo.");

        assert_eq!(analysis.tokens, vec!["We", "flew", "to", "Tokyo", "."]);
        assert_eq!(analysis.entities.len(), 1);
        assert_eq!(analysis.entities[0].text, "Tokyo");
        assert_eq!(analysis.entities[0].label, EntityLabel::Gpe);
    }

    #[test]
    fn test_injected_collaborators() {
        let analyzer = Analyzer::with_parts(
            Arc::new(EmptyModel),
            Arc::new(FixedSentiment),
            &AnalyzerConfig::default(),
        );

        assert_eq!(analyzer.model_name(), "empty");
        assert!(analyzer.tokens_and_lemmas("anything").is_empty());
        assert_eq!(analyzer.sentiment("anything"), Sentiment::new(0.25, 0.5));
    }

    #[test]
    fn test_unknown_model_is_unavailable() {
        let config = AnalyzerConfig {
            model: "zz_missing".to_string(),
            ..AnalyzerConfig::default()
        };
        let err = Analyzer::with_registry(&config, &ModelRegistry::new()).unwrap_err();
        assert!(matches!(err, AnalyzerError::ModelUnavailable(_)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = AnalyzerConfig::default();
        config.textrank.ratio = 0.0;
        let err = Analyzer::from_config(&config).unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidConfig(_)));
    }
}
