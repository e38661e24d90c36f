//! Export panel component.
//!
//! The export trigger described by the selection core's contract: commits
//! the current selection, reads the committed snapshot off the channel and
//! hands it to the backend bridge. Also subscribes to the channel so the
//! last committed snapshot stays visible.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_icons::Icon;

use crate::api;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::DEFAULT_EXPORT_LOCATION;
use crate::models::{DocId, ExportFormat, ExportOptions, ExportRequest};
use crate::utils::format::format_selected_count;

stylance::import_crate_style!(css, "src/components/browser/export_panel.module.css");

/// Progress of the last export hand-off.
#[derive(Clone, Debug, PartialEq)]
enum ExportPhase {
    Idle,
    Sending,
    Accepted(usize),
    Failed(String),
}

#[component]
pub fn ExportPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Mirror the export channel into a signal; unsubscribe with the panel.
    let exports = ctx.selection.with_untracked(|store| store.exports().clone());
    let (committed, set_committed) = signal(Vec::<DocId>::new());
    let subscription = exports.subscribe(move |list| set_committed.set(list.to_vec()));
    on_cleanup(move || subscription.unsubscribe());

    let format = RwSignal::new(ExportFormat::default());
    let location = RwSignal::new(DEFAULT_EXPORT_LOCATION.to_string());
    let phase = RwSignal::new(ExportPhase::Idle);

    let count_label =
        Signal::derive(move || format_selected_count(ctx.selection.with(|s| s.checked_count())));
    let nothing_selected = Signal::derive(move || ctx.selection.with(|s| s.is_empty()));
    let export_disabled =
        Signal::derive(move || nothing_selected.get() || phase.get() == ExportPhase::Sending);

    let on_format_change = move |ev: leptos::ev::Event| {
        format.set(ExportFormat::from_value(&event_target_value(&ev)));
    };

    let on_location_input = move |ev: leptos::ev::Event| {
        location.set(event_target_value(&ev));
    };

    let on_export = move |_: leptos::ev::MouseEvent| {
        // Snapshot the checked set, then read it back off the channel.
        ctx.selection.with_untracked(|store| store.commit());
        let ids = exports.current();

        // Folders are a selection convenience; only documents are exported.
        let items: Vec<_> = ctx.browser.tree.with_untracked(|tree| {
            ids.iter()
                .filter_map(|id| tree.get(id))
                .filter(|doc| !doc.is_folder)
                .cloned()
                .collect()
        });

        let request = ExportRequest {
            options: ExportOptions {
                format: format.get_untracked(),
                location: location.get_untracked(),
            },
            tablet_addr: ctx.tablet_addr.get_untracked(),
            items,
        };

        let sent = request.items.len();
        phase.set(ExportPhase::Sending);
        spawn_local(async move {
            match api::start_export(&request).await {
                Ok(()) => phase.set(ExportPhase::Accepted(sent)),
                Err(e) => phase.set(ExportPhase::Failed(e.to_string())),
            }
        });
    };

    let phase_note = move || match phase.get() {
        ExportPhase::Idle => {
            let committed = committed.get().len();
            if committed == 0 {
                String::new()
            } else {
                format!("Last commit: {} item(s)", committed)
            }
        }
        ExportPhase::Sending => "Handing selection to the exporter...".to_string(),
        ExportPhase::Accepted(n) => format!("Export of {} document(s) started", n),
        ExportPhase::Failed(msg) => format!("Export failed: {}", msg),
    };

    view! {
        <footer class=css::panel>
            <div class=css::options>
                <label class=css::field>
                    "Format"
                    <select on:change=on_format_change aria-label="Export format">
                        <option value="pdf" selected=move || format.get() == ExportFormat::Pdf>
                            "PDF"
                        </option>
                        <option value="rmdoc" selected=move || format.get() == ExportFormat::Rmdoc>
                            "rmdoc"
                        </option>
                    </select>
                </label>
                <label class=css::field>
                    "Location"
                    <input
                        class=css::locationInput
                        type="text"
                        prop:value=move || location.get()
                        on:input=on_location_input
                        aria-label="Export location"
                    />
                </label>
            </div>

            <div class=css::actions>
                <span class=css::count>{move || count_label.get()}</span>
                <button
                    class=css::exportButton
                    on:click=on_export
                    disabled=move || export_disabled.get()
                    title="Export the selected documents"
                >
                    <Icon icon=ic::EXPORT />
                    "Export"
                </button>
            </div>

            <div class=css::note>{phase_note}</div>
        </footer>
    }
}
