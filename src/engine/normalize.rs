//! Rescale raw totals into the 40-100 confidence band.

use super::scorer::CategoryScores;

const FLOOR: f64 = 40.0;
const SPAN: f64 = 60.0;

/// Map every positive raw score to `round(40 + s / max * 60)`.
///
/// Zero stays zero. When nothing scored at all the input is returned as-is.
pub fn normalize(raw: &CategoryScores) -> CategoryScores {
    let max = raw.max();
    if max == 0.0 {
        return raw.clone();
    }
    CategoryScores::from_values(
        raw.iter()
            .map(|(_, s)| {
                if s > 0.0 {
                    (FLOOR + s / max * SPAN).round()
                } else {
                    0.0
                }
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(scores: &CategoryScores) -> Vec<f64> {
        scores.iter().map(|(_, v)| v).collect()
    }

    #[test]
    fn all_zero_is_unchanged() {
        let raw = CategoryScores::from_values(vec![0.0; 5]);
        assert_eq!(normalize(&raw), raw);
    }

    #[test]
    fn positive_scores_land_in_band() {
        let raw = CategoryScores::from_values(vec![0.0, 0.5, 3.0, 12.0, 7.5]);
        let norm = values(&normalize(&raw));
        assert_eq!(norm[0], 0.0);
        assert_eq!(norm[3], 100.0);
        for v in &norm[1..] {
            assert!((40.0..=100.0).contains(v), "{v}");
            assert_eq!(v.fract(), 0.0);
        }
        assert_eq!(norm[1], 43.0);
        assert_eq!(norm[2], 55.0);
    }

    #[test]
    fn order_is_preserved() {
        let raw = vec![1.0, 2.0, 2.5, 9.0, 30.0, 31.0];
        let norm = values(&normalize(&CategoryScores::from_values(raw.clone())));
        for i in 0..raw.len() {
            for j in 0..raw.len() {
                if raw[i] > raw[j] {
                    assert!(norm[i] >= norm[j]);
                }
            }
        }
    }

    #[test]
    fn single_positive_score_is_full_confidence() {
        let raw = CategoryScores::from_values(vec![0.0, 0.1, 0.0]);
        assert_eq!(values(&normalize(&raw)), vec![0.0, 100.0, 0.0]);
    }
}
