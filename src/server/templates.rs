//! HTML templates for the web interface.

use askama::Template;

use crate::api::SEARCH_PATH;

/// The single-page search form.
#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate<'a> {
    title: &'a str,
    search_path: &'a str,
}

/// Render the search page.
pub fn index_page() -> Result<String, askama::Error> {
    IndexTemplate {
        title: "Company Lookup",
        search_path: SEARCH_PATH,
    }
    .render()
}
