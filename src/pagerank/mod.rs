//! PageRank over sentence graphs

pub mod standard;

pub use standard::StandardPageRank;

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Score per node, summing to 1
    pub scores: Vec<f64>,
    pub iterations: usize,
    /// Final L1 change between iterations
    pub delta: f64,
    pub converged: bool,
}

impl PageRankResult {
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Node indices ordered by descending score
    ///
    /// Equal scores keep ascending node order, so earlier sentences win ties.
    pub fn ranking(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.scores.len()).collect();
        order.sort_by(|&a, &b| self.scores[b].total_cmp(&self.scores[a]).then(a.cmp(&b)));
        order
    }

    /// The `n` best node indices
    pub fn top_n(&self, n: usize) -> Vec<usize> {
        let mut order = self.ranking();
        order.truncate(n);
        order
    }

    pub fn score(&self, node: usize) -> f64 {
        self.scores.get(node).copied().unwrap_or(0.0)
    }
}
