use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::{AppNavbar, DashboardBreadcrumb};
use ui::views::{InsightView, NotFoundView, OverviewsView, SectionView};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DashboardShell)]
        #[redirect("/", || Route::Overviews {})]
        #[redirect("/dashboard", || Route::Overviews {})]
        #[route("/dashboard/overviews")]
        Overviews {},
        #[route("/dashboard/overviews/:section_id")]
        Section { section_id: String },
        #[route("/dashboard/overviews/:section_id/insights/:insight_id")]
        Insight { section_id: String, insight_id: String },

        // Old report links keep working.
        #[redirect("/dashboard/reports/diagnostics/:section_id", |section_id: String| Route::Section { section_id })]
        #[redirect(
            "/dashboard/reports/diagnostics/:section_id/insights/:insight_id",
            |section_id: String, insight_id: String| Route::Insight { section_id, insight_id }
        )]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

fn nav_overviews(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        active_class: "navbar__link--active",
        to: Route::Overviews {},
        "{label}"
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    register_nav(NavBuilder {
        overviews: nav_overviews,
    });

    let lang_code = use_signal(|| ui::i18n::DEFAULT_LANGUAGE.to_string());
    use_context_provider(|| lang_code);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        Router::<Route> {}
    }
}

/// Navbar and breadcrumb around every dashboard page.
#[component]
fn DashboardShell() -> Element {
    let pathname = use_route::<Route>().to_string();

    rsx! {
        AppNavbar {}
        main { class: "dashboard",
            DashboardBreadcrumb { pathname }
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Overviews() -> Element {
    rsx! { OverviewsView {} }
}

#[component]
fn Section(section_id: String) -> Element {
    rsx! { SectionView { section_id } }
}

#[component]
fn Insight(section_id: String, insight_id: String) -> Element {
    rsx! { InsightView { section_id, insight_id } }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let _ = segments;
    rsx! {
        section { class: "page page-not-found", NotFoundView {} }
    }
}
