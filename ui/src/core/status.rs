//! Status color utilities for consistent styling across the dashboard.

use api::model::Status;

pub fn status_text_class(status: Status) -> &'static str {
    match status {
        Status::Strong => "text-emerald-600",
        Status::Average => "text-amber-600",
        Status::Critical => "text-red-600",
    }
}

pub fn status_bg_class(status: Status) -> &'static str {
    match status {
        Status::Strong => "bg-emerald-500/10",
        Status::Average => "bg-amber-500/10",
        Status::Critical => "bg-red-500/10",
    }
}

pub fn status_border_class(status: Status) -> &'static str {
    match status {
        Status::Strong => "border-emerald-200",
        Status::Average => "border-amber-200",
        Status::Critical => "border-red-200",
    }
}

pub fn status_dot_class(status: Status) -> &'static str {
    match status {
        Status::Strong => "bg-emerald-500",
        Status::Average => "bg-amber-500",
        Status::Critical => "bg-red-500",
    }
}

/// Hex stroke color for gauge rings.
pub fn status_ring_color(status: Status) -> &'static str {
    match status {
        Status::Strong => "#059669",
        Status::Average => "#f59e0b",
        Status::Critical => "#ef4444",
    }
}

pub fn status_badge_classes(status: Status) -> String {
    format!(
        "{} {} border {}",
        status_text_class(status),
        status_bg_class(status),
        status_border_class(status)
    )
}

/// Comparison polarity color: gains green, losses red.
pub fn polarity_text_class(is_positive: bool) -> &'static str {
    if is_positive {
        "text-green-600"
    } else {
        "text-red-500"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_combines_text_background_and_border() {
        assert_eq!(
            status_badge_classes(Status::Critical),
            "text-red-600 bg-red-500/10 border border-red-200"
        );
    }

    #[test]
    fn ring_colors_are_distinct() {
        let colors = [
            status_ring_color(Status::Strong),
            status_ring_color(Status::Average),
            status_ring_color(Status::Critical),
        ];
        assert_eq!(colors, ["#059669", "#f59e0b", "#ef4444"]);
    }
}
