//! Confidence ranking of model output.

use crate::labels::LabelRegistry;

/// Turn a probability vector into a full descending-confidence ranking.
///
/// Every known label appears exactly once, paired with its confidence.
/// Ties break by ascending label index so equal scores rank
/// deterministically. Probabilities past the registry's range are ignored;
/// a short vector ranks the missing labels at 0.0. The output length always
/// equals the number of known labels — callers take a prefix for top-K.
pub fn rank(probabilities: &[f32], labels: &LabelRegistry) -> Vec<(String, f32)> {
    let mut indexed: Vec<(usize, f32)> = (0..labels.len())
        .map(|i| (i, probabilities.get(i).copied().unwrap_or(0.0)))
        .collect();

    indexed.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.0.cmp(&b.0))
    });

    indexed
        .into_iter()
        .map(|(i, confidence)| (labels.name_for(i).to_string(), confidence))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> LabelRegistry {
        LabelRegistry::from_names(["bulbasaur", "charmander", "squirtle", "pikachu"])
    }

    #[test]
    fn sorts_by_confidence_descending() {
        let ranked = rank(&[0.1, 0.6, 0.05, 0.25], &registry());
        assert_eq!(ranked[0], ("Charmander".to_string(), 0.6));
        assert_eq!(ranked[1], ("Pikachu".to_string(), 0.25));
        assert_eq!(ranked[2], ("Bulbasaur".to_string(), 0.1));
        assert_eq!(ranked[3], ("Squirtle".to_string(), 0.05));
    }

    #[test]
    fn output_is_non_increasing() {
        let ranked = rank(&[0.3, 0.3, 0.9, 0.0], &registry());
        for pair in ranked.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn ties_break_by_label_index() {
        let ranked = rank(&[0.5, 0.5, 0.5, 0.5], &registry());
        let names: Vec<&str> = ranked.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["Bulbasaur", "Charmander", "Squirtle", "Pikachu"]);
    }

    #[test]
    fn length_equals_label_count() {
        let reg = registry();
        assert_eq!(rank(&[0.2, 0.8], &reg).len(), reg.len());
        assert_eq!(rank(&[0.1; 10], &reg).len(), reg.len());
    }

    #[test]
    fn extra_probabilities_never_produce_labels() {
        let ranked = rank(&[0.0, 0.0, 0.0, 0.0, 0.99, 0.98], &registry());
        assert!(ranked.iter().all(|(n, _)| n != crate::labels::UNKNOWN_LABEL));
        assert_eq!(ranked.len(), 4);
    }

    #[test]
    fn short_vector_ranks_missing_labels_at_zero() {
        let ranked = rank(&[0.4, 0.7], &registry());
        assert_eq!(ranked[0].0, "Charmander");
        assert_eq!(ranked[1].0, "Bulbasaur");
        assert_eq!(ranked[2], ("Squirtle".to_string(), 0.0));
        assert_eq!(ranked[3], ("Pikachu".to_string(), 0.0));
    }
}
