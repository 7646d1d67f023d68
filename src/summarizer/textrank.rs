//! TextRank sentence extraction
//!
//! Sentences are linked by normalized lexical overlap and ranked with
//! weighted PageRank. The summary keeps a fixed fraction of the document.

use super::selector::select_top;
use super::similarity::{content_terms, overlap_similarity};
use crate::config::TextRankConfig;
use crate::error::{AnalyzerError, Result};
use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::pagerank::{PageRankResult, StandardPageRank};
use crate::types::{Doc, Sentence};

/// Fewest sentences TextRank will summarize
pub const MIN_SENTENCES: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct TextRankSummarizer {
    config: TextRankConfig,
}

impl TextRankSummarizer {
    pub fn new(config: TextRankConfig) -> Self {
        Self { config }
    }

    pub fn with_ratio(mut self, ratio: f64) -> Self {
        self.config.ratio = ratio;
        self
    }

    /// Number of sentences kept for a document of `total` sentences
    pub fn summary_length(&self, total: usize) -> usize {
        let length = (total as f64 * self.config.ratio).floor() as usize;
        length.clamp(1, total.max(1))
    }

    /// Sentence graph weighted by content-lemma overlap
    pub fn graph(&self, doc: &Doc) -> CsrGraph {
        let terms: Vec<Vec<String>> = doc
            .sentences
            .iter()
            .map(|s| content_terms(doc, s))
            .collect();

        let builder = GraphBuilder::from_similarity(terms.len(), |i, j| {
            overlap_similarity(&terms[i], &terms[j])
        });
        CsrGraph::from_builder(&builder)
    }

    /// Rank every sentence of the document
    pub fn rank(&self, doc: &Doc) -> PageRankResult {
        self.rank_graph(&self.graph(doc))
    }

    fn rank_graph(&self, graph: &CsrGraph) -> PageRankResult {
        let result = StandardPageRank::from_config(&self.config.rank).run(graph);

        tracing::debug!(
            sentences = graph.num_nodes,
            edges = graph.num_edges() / 2,
            iterations = result.iterations,
            "textrank ranked sentences"
        );
        result
    }

    /// Select the summary sentences in document order
    ///
    /// Empty documents produce no sentences; a single sentence is an error.
    /// When no two sentences share a content lemma there is nothing to rank
    /// and the summary is empty.
    pub fn summarize(&self, doc: &Doc) -> Result<Vec<Sentence>> {
        let total = doc.sentences.len();
        if total == 0 {
            return Ok(Vec::new());
        }
        if total < MIN_SENTENCES {
            return Err(AnalyzerError::TextTooShort {
                found: total,
                required: MIN_SENTENCES,
            });
        }

        let graph = self.graph(doc);
        if graph.num_edges() == 0 {
            tracing::warn!(sentences = total, "no related sentences, summary is empty");
            return Ok(Vec::new());
        }

        let ranks = self.rank_graph(&graph);
        Ok(select_top(&doc.sentences, &ranks, self.summary_length(total)))
    }
}
