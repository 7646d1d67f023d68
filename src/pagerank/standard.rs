//! Weighted PageRank by power iteration
//!
//! Dangling nodes (sentences with no similar neighbor) spread their mass
//! uniformly, so scores always sum to one.

use super::PageRankResult;
use crate::config::RankConfig;
use crate::graph::csr::CsrGraph;

#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    pub max_iterations: usize,
    /// L1 convergence threshold
    pub threshold: f64,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self::from_config(&RankConfig::default())
    }
}

impl StandardPageRank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &RankConfig) -> Self {
        Self {
            damping: config.damping,
            max_iterations: config.max_iterations,
            threshold: config.threshold,
        }
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run PageRank, propagating mass in proportion to edge weight
    ///
    /// Returns the last iterate with `converged = false` when the
    /// iteration cap is reached.
    pub fn run(&self, graph: &CsrGraph) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(Vec::new(), 0, 0.0, true);
        }

        let uniform = 1.0 / n as f64;
        let mut scores = vec![uniform; n];
        let mut next = vec![0.0; n];
        let dangling = graph.dangling_nodes();
        let teleport = (1.0 - self.damping) * uniform;

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            let dangling_mass: f64 = dangling.iter().map(|&d| scores[d as usize]).sum();
            next.fill(teleport + self.damping * dangling_mass * uniform);

            for (node, &score) in scores.iter().enumerate() {
                let total = graph.node_total_weight(node as u32);
                if total > 0.0 {
                    for (neighbor, weight) in graph.neighbors(node as u32) {
                        next[neighbor as usize] += self.damping * score * weight / total;
                    }
                }
            }

            delta = scores
                .iter()
                .zip(next.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            std::mem::swap(&mut scores, &mut next);
        }

        let sum: f64 = scores.iter().sum();
        if sum > 0.0 {
            for score in &mut scores {
                *score /= sum;
            }
        }

        let converged = delta <= self.threshold;
        if !converged {
            tracing::warn!(iterations, delta, "PageRank did not converge");
        }

        PageRankResult::new(scores, iterations, delta, converged)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::builder::GraphBuilder;

    fn triangle() -> CsrGraph {
        let mut builder = GraphBuilder::new(3);
        builder.increment_edge(0, 1, 1.0);
        builder.increment_edge(1, 2, 1.0);
        builder.increment_edge(2, 0, 1.0);
        CsrGraph::from_builder(&builder)
    }

    fn star() -> CsrGraph {
        let mut builder = GraphBuilder::new(4);
        for spoke in 1..4 {
            builder.increment_edge(0, spoke, 1.0);
        }
        CsrGraph::from_builder(&builder)
    }

    #[test]
    fn test_symmetric_graph_equal_scores() {
        let result = StandardPageRank::new().run(&triangle());

        assert!(result.converged);
        for score in &result.scores {
            assert!((score - 1.0 / 3.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_hub_ranks_first() {
        let result = StandardPageRank::new().run(&star());

        assert!(result.converged);
        assert_eq!(result.ranking()[0], 0);
    }

    #[test]
    fn test_scores_sum_to_one_with_isolated_node() {
        let mut builder = GraphBuilder::new(3);
        builder.increment_edge(0, 1, 2.0);
        let result = StandardPageRank::new().run(&CsrGraph::from_builder(&builder));

        let sum: f64 = result.scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert!(result.scores[2] < result.scores[0]);
    }

    #[test]
    fn test_heavier_edge_attracts_more_mass() {
        let mut builder = GraphBuilder::new(3);
        builder.increment_edge(0, 1, 3.0);
        builder.increment_edge(0, 2, 1.0);
        let result = StandardPageRank::new().run(&CsrGraph::from_builder(&builder));

        assert!(result.scores[1] > result.scores[2]);
    }

    #[test]
    fn test_iteration_cap() {
        let result = StandardPageRank::new()
            .with_max_iterations(1)
            .with_threshold(0.0)
            .run(&star());

        assert_eq!(result.iterations, 1);
        assert!(!result.converged);
        assert_eq!(result.scores.len(), 4);
    }

    #[test]
    fn test_empty_graph() {
        let result = StandardPageRank::new().run(&CsrGraph::default());
        assert!(result.converged);
        assert!(result.scores.is_empty());
    }

    #[test]
    fn test_from_config() {
        let config = RankConfig {
            damping: 0.5,
            max_iterations: 7,
            threshold: 1e-3,
        };
        let pr = StandardPageRank::from_config(&config);
        assert_eq!(pr.max_iterations, 7);
        assert_eq!(pr.damping, 0.5);
    }
}
