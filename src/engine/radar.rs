//! Skill radar from combined scoring.

use super::scorer::CategoryScores;
use crate::models::profile::RadarAxis;
use crate::taxonomy::Taxonomy;

pub const MAX_AXES: usize = 8;

/// Strongest categories by normalized combined confidence.
pub fn radar_axes(confidence: &CategoryScores, taxonomy: &Taxonomy) -> Vec<RadarAxis> {
    let mut ranked: Vec<_> = confidence.iter().filter(|(_, v)| *v > 0.0).collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
        .into_iter()
        .take(MAX_AXES)
        .map(|(id, value)| {
            let c = taxonomy.get(id);
            RadarAxis {
                category_id: c.id.clone(),
                label: c.title.clone(),
                value: value.clamp(0.0, 100.0) as u8,
                color: c.accent_color.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_axes_only() {
        let t = Taxonomy::builtin();
        let values: Vec<f64> = (0..t.len()).map(|i| (i % 50) as f64 + 40.0).collect();
        let axes = radar_axes(&CategoryScores::from_values(values), t);
        assert_eq!(axes.len(), MAX_AXES);
        assert!(axes.windows(2).all(|w| w[0].value >= w[1].value));
        assert_eq!(axes[0].value, 89);
    }

    #[test]
    fn zero_scores_give_no_axes() {
        let t = Taxonomy::builtin();
        assert!(radar_axes(&CategoryScores::zeroed(t), t).is_empty());
    }

    #[test]
    fn axis_carries_category_display() {
        let t = Taxonomy::builtin();
        let mut values = vec![0.0; t.len()];
        values[t.lookup("rust").unwrap().index()] = 100.0;
        let axes = radar_axes(&CategoryScores::from_values(values), t);
        assert_eq!(axes.len(), 1);
        assert_eq!(axes[0].label, "Rustacean");
        assert_eq!(axes[0].color, "#FF6B35");
        assert_eq!(axes[0].value, 100);
    }
}
