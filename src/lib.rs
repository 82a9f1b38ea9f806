/// Dork Board - ATS job-search query builder
/// Built with Rust + WASM + Yew

mod criteria;
mod query;
mod registry;
mod relay;
mod theme;
pub mod ui;

use wasm_bindgen::prelude::*;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Re-export the query builder for JavaScript access
#[wasm_bindgen]
pub fn search_url(
    keywords: &str,
    location: &str,
    work_type: &str,
    date_posted: &str,
    site_fragment: &str,
) -> String {
    let criteria = query::SearchCriteria {
        keywords: keywords.to_string(),
        location: location.to_string(),
        work_type: work_type.to_string(),
        date_posted: date_posted.to_string(),
    };
    query::build_search_url(&criteria, site_fragment)
}

// Start the Yew app
#[wasm_bindgen]
pub fn start_app() {
    yew::Renderer::<ui::app::App>::new().render();
}
