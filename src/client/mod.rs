//! Server-side rendered change-driver page.
//!
//! The page is built from Dioxus components and rendered to a static HTML string once per
//! request; there is no client-side hydration.

pub mod components;
pub mod routes;

use dioxus::prelude::*;

use crate::{
    client::routes::driver_page::{DriverPage, DriverPageProps},
    model::page::DriverPageView,
};

pub const PAGE_TITLE: &str = "Change driver (Syrve/iikoCloud)";
pub const BOOTSTRAP_CSS: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Renders the full HTML document for the given view.
pub fn render_page(view: DriverPageView) -> String {
    let mut dom = VirtualDom::new_with_props(DriverPage, DriverPageProps { view });
    dom.rebuild_in_place();

    let body = dioxus_ssr::render(&dom);

    format!(
        concat!(
            "<!DOCTYPE html>",
            "<html lang=\"en\">",
            "<head>",
            "<meta charset=\"utf-8\">",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">",
            "<title>{}</title>",
            "<link rel=\"stylesheet\" href=\"{}\">",
            "</head>",
            "<body>{}</body>",
            "</html>"
        ),
        PAGE_TITLE, BOOTSTRAP_CSS, body
    )
}
