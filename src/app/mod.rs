use crate::config::CatalogConfig;
use crate::pages::CatalogPage;
use crate::state::{CatalogContext, CatalogState};
use leptos::logging::log;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = CatalogConfig::new();
    log!(
        "[catalog] {} (persist playground: {}, action log limit: {})",
        config.title,
        config.persist_playground,
        config.action_log_limit
    );
    provide_context(CatalogContext(CatalogState::new(config)));

    // IMPORTANT: Leptos CSR requires the `csr` feature on `leptos`.
    view! { <CatalogPage /> }
}
