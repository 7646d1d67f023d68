//! Top-k sentence selection
//!
//! Picks the highest-ranked sentences and restores document order.

use crate::pagerank::PageRankResult;
use crate::types::Sentence;

/// Select up to `count` sentences by rank, returned in document order with
/// their scores filled in
pub fn select_top(sentences: &[Sentence], ranks: &PageRankResult, count: usize) -> Vec<Sentence> {
    let mut selected: Vec<Sentence> = ranks
        .top_n(count)
        .into_iter()
        .filter_map(|idx| {
            sentences.get(idx).map(|s| Sentence {
                score: ranks.score(idx),
                ..s.clone()
            })
        })
        .collect();

    selected.sort_by_key(|s| s.index);
    selected
}

/// Join sentence texts with `separator`
pub fn render(sentences: &[Sentence], separator: &str) -> String {
    sentences
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(separator)
}
