//! Shared Dioxus UI for the FastTrack diagnostics dashboard: data client,
//! chart engine, section panels and routed pages. Platform crates only add
//! the router and the launch call.

pub mod charts;
pub mod core;
pub mod i18n;
pub mod sections;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::{register_nav, AppNavbar, NavBuilder};

    pub mod breadcrumb;
    pub use breadcrumb::DashboardBreadcrumb;
}

use dioxus::prelude::manganis;

/// Shared dashboard theme; platform crates link it once at the root.
pub const THEME_CSS: dioxus::prelude::Asset = dioxus::prelude::asset!("/assets/theme/main.css");
