//! Main browser component.
//!
//! Single-column layout: toolbar on top, the folder listing in the middle,
//! and the export panel pinned at the bottom.

use leptos::prelude::*;

use super::{DocList, ExportPanel, Toolbar};
use crate::app::AppContext;

stylance::import_crate_style!(css, "src/components/browser/browser.module.css");

/// Document browser view component.
#[component]
pub fn Browser() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let loading = ctx.browser.loading;
    let load_error = ctx.browser.load_error;

    view! {
        <div class=css::browser>
            <Toolbar />

            <Show when=move || load_error.get().is_some()>
                <div class=css::errorBanner>
                    {move || load_error.get().unwrap_or_default()}
                </div>
            </Show>

            <div class=css::body>
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class=css::loading>"Syncing with tablet..."</div> }
                >
                    <DocList />
                </Show>
            </div>

            <ExportPanel />
        </div>
    }
}
