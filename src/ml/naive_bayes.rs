// ============================================================
// Layer 5 — Multinomial Naive Bayes
// ============================================================
// Event-count Naive Bayes over TermCounts.
//
// Every distinct label seen at fit time is one class, kept in
// sorted order. With alpha = 1 (Laplace smoothing):
//
//   log P(class)        = ln(docs in class / total docs)
//   log P(term | class) = ln((count(term, class) + alpha)
//                            / (total terms in class + alpha * V))
//
// Prediction picks the class with the highest joint
// log-likelihood  log P(class) + Σ count(term) · log P(term|class).
// Ties go to the first class in sorted order.
//
// Reference: Manning et al. (2008), Introduction to IR §13.2

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::ml::vectorizer::TermCounts;

/// Additive smoothing used when fitting
pub const DEFAULT_ALPHA: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultinomialNb {
    /// Sorted class labels
    classes: Vec<String>,

    /// One entry per class
    class_log_prior: Vec<f64>,

    /// [class][feature] log probabilities
    feature_log_prob: Vec<Vec<f64>>,

    n_features: usize,
}

impl MultinomialNb {
    /// Fit on paired rows and labels. `rows` and `labels` must have the
    /// same length and at least one entry; the trainer guarantees both.
    pub fn fit(rows: &[TermCounts], labels: &[String], n_features: usize, alpha: f64) -> Self {
        debug_assert_eq!(rows.len(), labels.len());

        // label → (document count, per-feature counts)
        let mut per_class: BTreeMap<&str, (usize, Vec<f64>)> = BTreeMap::new();
        for (row, label) in rows.iter().zip(labels) {
            let entry = per_class
                .entry(label.as_str())
                .or_insert_with(|| (0, vec![0.0; n_features]));
            entry.0 += 1;
            for (&col, &count) in row {
                entry.1[col] += f64::from(count);
            }
        }

        let total_docs = rows.len() as f64;
        let mut classes          = Vec::with_capacity(per_class.len());
        let mut class_log_prior  = Vec::with_capacity(per_class.len());
        let mut feature_log_prob = Vec::with_capacity(per_class.len());

        for (label, (docs, counts)) in per_class {
            let denom = counts.iter().sum::<f64>() + alpha * n_features as f64;
            classes.push(label.to_string());
            class_log_prior.push((docs as f64 / total_docs).ln());
            feature_log_prob.push(counts.iter().map(|c| ((c + alpha) / denom).ln()).collect());
        }

        Self { classes, class_log_prior, feature_log_prob, n_features }
    }

    /// Most probable class for one row, or None for an unfitted model
    pub fn predict(&self, row: &TermCounts) -> Option<&str> {
        let mut best: Option<(usize, f64)> = None;
        for (k, score) in self.joint_log_likelihood(row).into_iter().enumerate() {
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((k, score));
            }
        }
        best.map(|(k, _)| self.classes[k].as_str())
    }

    /// Unnormalised log posterior of every class, in class order
    pub fn joint_log_likelihood(&self, row: &TermCounts) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(&self.feature_log_prob)
            .map(|(prior, flp)| {
                prior
                    + row
                        .iter()
                        .filter_map(|(&col, &count)| flp.get(col).map(|lp| lp * f64::from(count)))
                        .sum::<f64>()
            })
            .collect()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    /// Shape check for models read back from disk
    pub fn is_consistent(&self) -> bool {
        !self.classes.is_empty()
            && self.class_log_prior.len() == self.classes.len()
            && self.feature_log_prob.len() == self.classes.len()
            && self.feature_log_prob.iter().all(|r| r.len() == self.n_features)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(usize, u32)]) -> TermCounts {
        pairs.iter().copied().collect()
    }

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_classes_are_sorted_and_deduplicated() {
        let rows = vec![row(&[(0, 1)]), row(&[(1, 1)]), row(&[(0, 2)])];
        let nb   = MultinomialNb::fit(&rows, &labels(&["zeta", "alpha", "zeta"]), 2, DEFAULT_ALPHA);
        assert_eq!(nb.classes(), &["alpha".to_string(), "zeta".to_string()]);
        assert!(nb.is_consistent());
    }

    #[test]
    fn test_prefers_class_sharing_terms() {
        // features: 0 = weather, 1 = rain, 2 = food, 3 = pizza
        let rows = vec![row(&[(0, 1), (1, 1)]), row(&[(2, 1), (3, 1)])];
        let nb   = MultinomialNb::fit(&rows, &labels(&["umbrella", "eat"]), 4, DEFAULT_ALPHA);
        assert_eq!(nb.predict(&row(&[(1, 1)])), Some("umbrella"));
        assert_eq!(nb.predict(&row(&[(3, 2)])), Some("eat"));
    }

    #[test]
    fn test_empty_row_falls_back_to_prior() {
        let rows = vec![row(&[(0, 1)]), row(&[(1, 1)]), row(&[(1, 1)])];
        let nb   = MultinomialNb::fit(&rows, &labels(&["rare", "common", "common"]), 2, DEFAULT_ALPHA);
        assert_eq!(nb.predict(&TermCounts::new()), Some("common"));
    }

    #[test]
    fn test_ties_go_to_first_sorted_class() {
        let rows = vec![row(&[(0, 1)]), row(&[(1, 1)])];
        let nb   = MultinomialNb::fit(&rows, &labels(&["b", "a"]), 2, DEFAULT_ALPHA);
        assert_eq!(nb.predict(&TermCounts::new()), Some("a"));
    }

    #[test]
    fn test_log_probabilities_are_normalised() {
        let rows = vec![row(&[(0, 3), (1, 1)])];
        let nb   = MultinomialNb::fit(&rows, &labels(&["only"]), 3, DEFAULT_ALPHA);
        let total: f64 = nb.feature_log_prob[0].iter().map(|lp| lp.exp()).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!((nb.class_log_prior[0]).abs() < 1e-12);
    }
}
