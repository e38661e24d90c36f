//! Folder listing component.
//!
//! Displays the children of the current folder, one row per item, with a
//! tri-state checkbox per row. Folders open on click; documents are leaves.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::cascade;
use crate::models::{DocInfo, SelectionInfo, SelectionStatus};
use crate::utils::format::{format_file_type, format_modified};

stylance::import_crate_style!(css, "src/components/browser/doc_list.module.css");

/// Get icon for a listing entry based on its type.
fn get_icon(entry: &DocInfo) -> IconData {
    if entry.is_folder {
        ic::FOLDER
    } else {
        match entry.file_type.as_deref() {
            Some("notebook") => ic::FILE_NOTEBOOK,
            Some("pdf") => ic::FILE_PDF,
            Some("epub") => ic::FILE_EPUB,
            _ => ic::FILE,
        }
    }
}

#[component]
pub fn DocList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Children of the current folder, in listing order.
    let entries = Signal::derive(move || {
        let folder = ctx.browser.current_folder.get();
        ctx.browser.tree.with(|tree| tree.children(&folder))
    });

    // Checked statuses for those children, recomputed on any selection change.
    let statuses = Signal::derive(move || {
        let folder = ctx.browser.current_folder.get();
        ctx.browser.tree.with(|tree| {
            ctx.selection
                .with(|store| cascade::folder_selection(tree, store, &folder))
        })
    });

    view! {
        <div class=css::list role="grid" aria-label="Document list">
            <div class=css::listHeader role="row">
                <span class=css::headerCheck></span>
                <span class=css::headerIcon></span>
                <span class=css::headerName>"Name"</span>
                <span class=css::headerDate>"Modified"</span>
                <span class=css::headerType>"Type"</span>
                <span class=css::headerMark></span>
            </div>
            <Show when=move || entries.get().is_empty()>
                <div class=css::emptyNote>"This folder is empty"</div>
            </Show>
            <For
                each=move || entries.get()
                key=|entry| entry.id.clone()
                children=move |entry| {
                    view! { <DocRow entry=entry statuses=statuses /> }
                }
            />
        </div>
    }
}

#[component]
fn DocRow(entry: DocInfo, statuses: Signal<Vec<SelectionInfo>>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let is_folder = entry.is_folder;
    let icon = get_icon(&entry);
    let modified = format_modified(entry.last_modified);
    let type_label = format_file_type(entry.file_type.as_deref(), is_folder);

    let row_id = entry.id.clone();
    let status = Signal::derive(move || {
        statuses
            .get()
            .into_iter()
            .find(|info| info.id == row_id)
            .map(|info| info.status)
            .unwrap_or_default()
    });

    // Checkbox change: folders cascade over their subtree, documents toggle
    // just themselves. Either way the flat store is the one mutated.
    let toggle_id = entry.id.clone();
    let on_toggle = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        ctx.browser.tree.with_untracked(|tree| {
            ctx.selection.update(|store| {
                if is_folder {
                    cascade::set_subtree(tree, store, &toggle_id, checked);
                } else {
                    store.set_checked(&toggle_id, checked);
                }
            });
        });
    };

    let nav_id = entry.id.clone();
    let on_open = move |_: leptos::ev::MouseEvent| {
        if is_folder {
            ctx.browser.enter_folder(nav_id.clone());
        }
    };

    let name_class = if is_folder {
        format!("{} {}", css::name, css::nameFolder)
    } else {
        css::name.to_string()
    };

    let aria_label = if is_folder {
        format!("Folder: {}", entry.name)
    } else {
        format!("Document: {}", entry.name)
    };

    view! {
        <div class=css::listItem role="row" aria-label=aria_label>
            <span class=css::check>
                <input
                    type="checkbox"
                    prop:checked=move || status.get() == SelectionStatus::Selected
                    prop:indeterminate=move || status.get() == SelectionStatus::Indeterminate
                    on:change=on_toggle
                    aria-label=format!("Select {}", entry.name)
                />
            </span>
            <span class=css::icon aria-hidden="true"><Icon icon=icon /></span>
            <span class=name_class on:click=on_open>{entry.name.clone()}</span>
            <span class=css::itemDate>{modified}</span>
            <span class=css::itemType>{type_label}</span>
            <span class=css::mark aria-hidden="true">
                {entry.bookmarked.then(|| view! { <Icon icon=ic::BOOKMARK /> })}
            </span>
        </div>
    }
}
