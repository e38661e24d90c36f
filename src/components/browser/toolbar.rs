//! Browser toolbar component.
//!
//! Contains up navigation, the current folder title, and the tablet
//! address field with its refresh action.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::APP_NAME;
use crate::core::is_ip_valid;

stylance::import_crate_style!(css, "src/components/browser/toolbar.module.css");

/// Toolbar with navigation and tablet connection controls.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_root = Signal::derive(move || ctx.browser.is_at_root());

    // Title of the folder currently listed ("My files" at the root).
    let current_name = Memo::new(move |_| {
        let folder = ctx.browser.current_folder.get();
        if folder.is_empty() {
            return "My files".to_string();
        }
        ctx.browser.tree.with(|tree| {
            tree.get(&folder)
                .map(|doc| doc.name.clone())
                .unwrap_or_else(|| "My files".to_string())
        })
    });

    let addr_valid = Signal::derive(move || is_ip_valid(&ctx.tablet_addr.get()));
    let refresh_disabled =
        Signal::derive(move || !addr_valid.get() || ctx.browser.loading.get());

    let on_up = move |_: leptos::ev::MouseEvent| {
        ctx.browser.go_up();
    };

    let on_addr_input = move |ev: leptos::ev::Event| {
        ctx.tablet_addr.set(event_target_value(&ev));
    };

    let on_refresh = move |_: leptos::ev::MouseEvent| {
        ctx.browser.refresh(ctx.tablet_addr.get_untracked());
    };

    let addr_class = move || {
        if addr_valid.get() {
            css::addrInput.to_string()
        } else {
            format!("{} {}", css::addrInput, css::addrInvalid)
        }
    };

    view! {
        <header class=css::toolbar>
            <div class=css::nav>
                <button
                    class=move || {
                        if is_root.get() {
                            format!("{} {}", css::navButton, css::navButtonDisabled)
                        } else {
                            css::navButton.to_string()
                        }
                    }
                    on:click=on_up
                    disabled=move || is_root.get()
                    title="Go to parent folder"
                >
                    <Icon icon=ic::UP />
                </button>
                <span class=css::title>{move || current_name.get()}</span>
            </div>

            <div class=css::connection>
                <span class=css::appName>{APP_NAME}</span>
                <span class=css::addrIcon aria-hidden="true"><Icon icon=ic::NETWORK /></span>
                <input
                    class=addr_class
                    type="text"
                    prop:value=move || ctx.tablet_addr.get()
                    on:input=on_addr_input
                    title="Tablet address"
                    aria-label="Tablet address"
                />
                <button
                    class=css::refreshButton
                    on:click=on_refresh
                    disabled=move || refresh_disabled.get()
                    title="Reload documents from the tablet"
                >
                    <Icon icon=ic::REFRESH />
                </button>
            </div>
        </header>
    }
}
