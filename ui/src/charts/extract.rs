use api::model::{SeriesPoint, Visual};

/// Normalize a visual into labeled points.
///
/// A non-empty `series` wins and is returned as-is. Otherwise every entry of
/// `points` is paired with the matching `x_labels` entry, or `P<n>` when the
/// label is missing.
pub fn extract_points(visual: Option<&Visual>) -> Vec<SeriesPoint> {
    let Some(visual) = visual else {
        return Vec::new();
    };

    if let Some(series) = visual.series.as_ref().filter(|s| !s.is_empty()) {
        return series.clone();
    }

    let labels = visual.x_labels.as_deref().unwrap_or_default();
    visual
        .points
        .as_deref()
        .unwrap_or_default()
        .iter()
        .enumerate()
        .map(|(idx, value)| {
            let label = labels
                .get(idx)
                .cloned()
                .unwrap_or_else(|| format!("P{}", idx + 1));
            SeriesPoint::new(label, *value)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::model::ChartKind;

    #[test]
    fn missing_visual_has_no_points() {
        assert!(extract_points(None).is_empty());
    }

    #[test]
    fn non_empty_series_is_returned_unchanged() {
        let series = vec![SeriesPoint::new("Q1", 40.0), SeriesPoint::new("Q2", 55.5)];
        let visual = Visual::series(ChartKind::Bar, series.clone());
        assert_eq!(extract_points(Some(&visual)), series);
    }

    #[test]
    fn points_without_labels_are_numbered() {
        let visual = Visual::points(ChartKind::Sparkline, vec![5.0, 10.0], Vec::new());
        let extracted = extract_points(Some(&visual));
        assert_eq!(
            extracted,
            vec![SeriesPoint::new("P1", 5.0), SeriesPoint::new("P2", 10.0)]
        );
    }

    #[test]
    fn short_label_list_fills_the_tail() {
        let visual = Visual::points(
            ChartKind::Sparkline,
            vec![1.0, 2.0, 3.0],
            vec!["Jan".to_string()],
        );
        let labels: Vec<String> = extract_points(Some(&visual))
            .into_iter()
            .map(|p| p.label)
            .collect();
        assert_eq!(labels, ["Jan", "P2", "P3"]);
    }

    #[test]
    fn surplus_labels_are_dropped() {
        let visual = Visual::points(
            ChartKind::Sparkline,
            vec![4.0, 8.0],
            ["Jan", "Feb", "Mar", "Apr"].map(String::from).to_vec(),
        );
        let extracted = extract_points(Some(&visual));
        assert_eq!(extracted.len(), 2);
        assert_eq!(
            extracted,
            vec![SeriesPoint::new("Jan", 4.0), SeriesPoint::new("Feb", 8.0)]
        );
    }

    #[test]
    fn empty_series_falls_back_to_points() {
        let visual = Visual {
            kind: ChartKind::Bar,
            series: Some(Vec::new()),
            points: Some(vec![7.0]),
            x_labels: None,
        };
        assert_eq!(extract_points(Some(&visual)), vec![SeriesPoint::new("P1", 7.0)]);
    }
}
