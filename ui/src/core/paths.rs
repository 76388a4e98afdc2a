//! In-app URL builders shared by links, breadcrumbs and redirects.

pub const OVERVIEWS_PATH: &str = "/dashboard/overviews";

pub fn section_path(section_id: &str) -> String {
    format!("{OVERVIEWS_PATH}/{section_id}")
}

pub fn insight_path(section_id: &str, insight_id: &str) -> String {
    format!("{OVERVIEWS_PATH}/{section_id}/insights/{insight_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insight_paths_nest_under_their_section() {
        assert_eq!(
            section_path("execution-habits"),
            "/dashboard/overviews/execution-habits"
        );
        assert_eq!(
            insight_path("execution-habits", "accountability"),
            "/dashboard/overviews/execution-habits/insights/accountability"
        );
    }
}
