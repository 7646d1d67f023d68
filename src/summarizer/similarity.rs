//! Sentence similarity measures
//!
//! - [`overlap_similarity`]: normalized lexical overlap used by TextRank.
//! - [`SparseVector`] + [`TfIdfIndex`]: TF-IDF cosine similarity used by LexRank.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::types::{Doc, Sentence};

/// Content lemmas of a sentence, in order (duplicates kept)
pub fn content_terms(doc: &Doc, sentence: &Sentence) -> Vec<String> {
    doc.sentence_tokens(sentence)
        .iter()
        .filter(|t| t.is_content())
        .map(|t| t.lemma.clone())
        .collect()
}

/// Lexical overlap normalized by sentence length
///
/// `|A ∩ B| / (ln|A| + ln|B|)` over distinct terms, where `|A|` and `|B|`
/// count all content terms. The raw overlap is returned when the
/// denominator is not positive (two one-word sentences).
pub fn overlap_similarity(a: &[String], b: &[String]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let set_a: FxHashSet<&str> = a.iter().map(String::as_str).collect();
    let set_b: FxHashSet<&str> = b.iter().map(String::as_str).collect();
    let common = set_a.intersection(&set_b).count() as f64;
    if common == 0.0 {
        return 0.0;
    }

    let denominator = (a.len() as f64).ln() + (b.len() as f64).ln();
    if denominator > 0.0 {
        common / denominator
    } else {
        common
    }
}

/// A sparse L2-normalized vector
#[derive(Debug, Clone, Default)]
pub struct SparseVector {
    /// Non-zero dimensions: term -> weight
    pub dimensions: FxHashMap<String, f64>,
    /// L2 norm before normalization
    pub norm: f64,
}

impl SparseVector {
    /// Normalize a map of raw weights into a unit vector
    pub fn from_dimensions(mut dimensions: FxHashMap<String, f64>) -> Self {
        let norm = dimensions.values().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in dimensions.values_mut() {
                *value /= norm;
            }
        }
        Self { dimensions, norm }
    }

    /// Cosine similarity (dot product of unit vectors)
    pub fn cosine_similarity(&self, other: &SparseVector) -> f64 {
        let (small, large) = if self.dimensions.len() <= other.dimensions.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .dimensions
            .iter()
            .filter_map(|(term, w)| large.dimensions.get(term).map(|o| w * o))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}

/// Inverse document frequencies where each sentence is a document
#[derive(Debug, Clone)]
pub struct TfIdfIndex {
    idf: FxHashMap<String, f64>,
}

impl TfIdfIndex {
    /// Build from the content terms of every sentence
    ///
    /// Uses smoothed IDF `ln((1 + N) / (1 + df)) + 1`, which stays positive
    /// for terms present in every sentence.
    pub fn new(sentences: &[Vec<String>]) -> Self {
        let mut df: FxHashMap<&str, usize> = FxHashMap::default();
        for terms in sentences {
            let distinct: FxHashSet<&str> = terms.iter().map(String::as_str).collect();
            for term in distinct {
                *df.entry(term).or_insert(0) += 1;
            }
        }

        let n = sentences.len() as f64;
        let idf = df
            .into_iter()
            .map(|(term, count)| {
                let value = ((1.0 + n) / (1.0 + count as f64)).ln() + 1.0;
                (term.to_string(), value)
            })
            .collect();

        Self { idf }
    }

    pub fn idf(&self, term: &str) -> f64 {
        self.idf.get(term).copied().unwrap_or(0.0)
    }

    /// TF-IDF vector of a sentence; TF is the count divided by the most
    /// frequent term's count
    pub fn vector(&self, terms: &[String]) -> SparseVector {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for term in terms {
            *counts.entry(term.as_str()).or_insert(0) += 1;
        }
        let max_count = counts.values().copied().max().unwrap_or(0);
        if max_count == 0 {
            return SparseVector::default();
        }

        let dimensions = counts
            .into_iter()
            .map(|(term, count)| {
                let tf = count as f64 / max_count as f64;
                (term.to_string(), tf * self.idf(term))
            })
            .collect();

        SparseVector::from_dimensions(dimensions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_overlap_similarity() {
        let a = terms(&["cat", "mammal"]);
        let b = terms(&["dog", "mammal"]);
        let expected = 1.0 / (2.0f64.ln() * 2.0);
        assert!((overlap_similarity(&a, &b) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_overlap_disjoint_and_empty() {
        let a = terms(&["fish", "water"]);
        let b = terms(&["cat", "mammal"]);
        assert_eq!(overlap_similarity(&a, &b), 0.0);
        assert_eq!(overlap_similarity(&a, &[]), 0.0);
    }

    #[test]
    fn test_overlap_single_words() {
        let a = terms(&["cat"]);
        assert_eq!(overlap_similarity(&a, &a), 1.0);
    }

    #[test]
    fn test_cosine_identical_and_orthogonal() {
        let index = TfIdfIndex::new(&[terms(&["a", "b"]), terms(&["c"])]);
        let v1 = index.vector(&terms(&["a", "b"]));
        let v2 = index.vector(&terms(&["a", "b"]));
        let v3 = index.vector(&terms(&["c"]));

        assert!((v1.cosine_similarity(&v2) - 1.0).abs() < 1e-9);
        assert!(v1.cosine_similarity(&v3).abs() < 1e-12);
    }

    #[test]
    fn test_idf_prefers_rare_terms() {
        let index = TfIdfIndex::new(&[
            terms(&["common", "rare"]),
            terms(&["common"]),
            terms(&["common"]),
        ]);
        assert!(index.idf("rare") > index.idf("common"));
        assert!(index.idf("common") > 0.0);
        assert_eq!(index.idf("missing"), 0.0);
    }

    #[test]
    fn test_unit_normalization() {
        let mut dims = FxHashMap::default();
        dims.insert("a".to_string(), 3.0);
        dims.insert("b".to_string(), 4.0);

        let v = SparseVector::from_dimensions(dims);
        assert!((v.norm - 5.0).abs() < 1e-12);
        let norm: f64 = v.dimensions.values().map(|x| x * x).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_vector() {
        let index = TfIdfIndex::new(&[]);
        let v = index.vector(&[]);
        assert!(v.is_empty());
        assert_eq!(v.norm, 0.0);
    }
}
