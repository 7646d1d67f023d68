//! LexRank sentence extraction
//!
//! Builds a binary graph linking sentences whose TF-IDF cosine similarity
//! reaches a threshold, ranks it with PageRank, and keeps a fixed number of
//! sentences. Documents shorter than that are returned whole.

use super::selector::select_top;
use super::similarity::{content_terms, SparseVector, TfIdfIndex};
use crate::config::LexRankConfig;
use crate::graph::builder::GraphBuilder;
use crate::graph::csr::CsrGraph;
use crate::pagerank::{PageRankResult, StandardPageRank};
use crate::types::{Doc, Sentence};

#[derive(Debug, Clone, Default)]
pub struct LexRankSummarizer {
    config: LexRankConfig,
}

impl LexRankSummarizer {
    pub fn new(config: LexRankConfig) -> Self {
        Self { config }
    }

    pub fn with_num_sentences(mut self, n: usize) -> Self {
        self.config.num_sentences = n;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.config.similarity_threshold = threshold;
        self
    }

    /// Rank every sentence of the document
    pub fn rank(&self, doc: &Doc) -> PageRankResult {
        let terms: Vec<Vec<String>> = doc
            .sentences
            .iter()
            .map(|s| content_terms(doc, s))
            .collect();
        let index = TfIdfIndex::new(&terms);
        let vectors: Vec<SparseVector> = terms.iter().map(|t| index.vector(t)).collect();

        let threshold = self.config.similarity_threshold;
        let builder = GraphBuilder::from_similarity(vectors.len(), |i, j| {
            let cosine = vectors[i].cosine_similarity(&vectors[j]);
            if cosine > 0.0 && cosine >= threshold {
                1.0
            } else {
                0.0
            }
        });
        let graph = CsrGraph::from_builder(&builder);
        let result = StandardPageRank::from_config(&self.config.rank).run(&graph);

        tracing::debug!(
            sentences = graph.num_nodes,
            edges = builder.edge_count(),
            iterations = result.iterations,
            "lexrank ranked sentences"
        );
        result
    }

    /// Select up to `num_sentences` sentences in document order
    pub fn summarize(&self, doc: &Doc) -> Vec<Sentence> {
        if doc.is_empty() {
            return Vec::new();
        }
        let ranks = self.rank(doc);
        select_top(&doc.sentences, &ranks, self.config.num_sentences)
    }
}
