//! Compressed Sparse Row (CSR) graph representation
//!
//! PageRank iterates over every node's neighbors on each pass, so edges are
//! stored contiguously per node.

use super::builder::GraphBuilder;

/// A graph in Compressed Sparse Row format
#[derive(Debug, Clone)]
pub struct CsrGraph {
    pub num_nodes: usize,
    /// Node i's edges are at indices `row_ptr[i]..row_ptr[i+1]`
    pub row_ptr: Vec<usize>,
    /// Target node of each edge
    pub col_idx: Vec<u32>,
    pub weights: Vec<f64>,
    /// Sum of outgoing edge weights per node
    pub total_weight: Vec<f64>,
}

impl CsrGraph {
    /// Freeze a [`GraphBuilder`]; neighbors are sorted for deterministic iteration
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);
        for (_, edges) in builder.nodes() {
            let mut sorted: Vec<_> = edges.iter().map(|(&k, &v)| (k, v)).collect();
            sorted.sort_by_key(|(k, _)| *k);

            total_weight.push(sorted.iter().map(|(_, w)| w).sum());
            for (target, weight) in sorted {
                col_idx.push(target);
                weights.push(weight);
            }
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
        }
    }

    /// Iterate over `(neighbor, weight)` pairs of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Number of directed edges (each undirected edge counts twice)
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Nodes without outgoing edges
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.degree(n) == 0)
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_test_graph() -> GraphBuilder {
        let mut builder = GraphBuilder::new(4);
        builder.increment_edge(0, 1, 1.0);
        builder.increment_edge(1, 2, 2.0);
        builder.increment_edge(0, 2, 1.5);
        builder
    }

    #[test]
    fn test_csr_conversion() {
        let csr = CsrGraph::from_builder(&build_test_graph());

        assert_eq!(csr.num_nodes, 4);
        assert_eq!(csr.num_edges(), 6);
        assert_eq!(csr.row_ptr.len(), 5);
    }

    #[test]
    fn test_neighbors_sorted() {
        let csr = CsrGraph::from_builder(&build_test_graph());

        let neighbors: Vec<_> = csr.neighbors(2).collect();
        assert_eq!(neighbors, vec![(0, 1.5), (1, 2.0)]);
    }

    #[test]
    fn test_degree_and_weight() {
        let csr = CsrGraph::from_builder(&build_test_graph());

        assert_eq!(csr.degree(0), 2);
        assert!((csr.node_total_weight(0) - 2.5).abs() < 1e-10);
    }

    #[test]
    fn test_dangling_nodes() {
        let csr = CsrGraph::from_builder(&build_test_graph());
        assert_eq!(csr.dangling_nodes(), vec![3]);
    }

    #[test]
    fn test_empty_graph() {
        let csr = CsrGraph::from_builder(&GraphBuilder::new(0));
        assert!(csr.is_empty());
        assert_eq!(csr.num_edges(), 0);
    }
}
