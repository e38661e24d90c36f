//! Root application module.
//!
//! Contains the main App component, AppContext definition, BrowserState,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::Browser;
use crate::config::DEFAULT_TABLET_ADDR;
use crate::core::{DocumentTree, SelectionStore, is_ip_valid};
use crate::models::{DocId, ROOT_PARENT_ID};

// ============================================================================
// BrowserState
// ============================================================================

/// Document-browsing state managed with Leptos signals.
///
/// Holds the synced tree, the folder currently listed, and the status of the
/// last sync. The selection itself lives in [`AppContext::selection`]; this
/// struct only knows how to navigate and refresh.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct BrowserState {
    /// Index over the last fetched document listing.
    pub tree: RwSignal<DocumentTree>,
    /// Folder whose children are currently listed.
    pub current_folder: RwSignal<DocId>,
    /// Whether a listing fetch is in flight.
    pub loading: RwSignal<bool>,
    /// Error message from the last failed fetch, if any.
    pub load_error: RwSignal<Option<String>>,
}

impl BrowserState {
    /// Creates a new browser state: empty tree, root folder, idle.
    pub fn new() -> Self {
        Self {
            tree: RwSignal::new(DocumentTree::empty()),
            current_folder: RwSignal::new(ROOT_PARENT_ID.to_string()),
            loading: RwSignal::new(false),
            load_error: RwSignal::new(None),
        }
    }

    /// Navigate into a folder.
    pub fn enter_folder(&self, id: DocId) {
        self.current_folder.set(id);
    }

    /// Navigate to the parent of the current folder.
    pub fn go_up(&self) {
        let current = self.current_folder.get_untracked();
        let parent = self.tree.with_untracked(|tree| tree.parent_of(&current));
        self.current_folder.set(parent);
    }

    /// Whether the root listing is currently shown.
    pub fn is_at_root(&self) -> bool {
        self.current_folder.get() == ROOT_PARENT_ID
    }

    /// Fetch the listing from the tablet at `addr` and replace the tree.
    ///
    /// Navigation resets to the root because folder ids are not guaranteed
    /// to survive a re-sync. Invalid addresses are rejected up front so the
    /// refresh button stays safe to wire directly to user input.
    pub fn refresh(&self, addr: String) {
        if !is_ip_valid(&addr) {
            self.load_error
                .set(Some(format!("Not a valid tablet address: {}", addr)));
            return;
        }

        let state = *self;
        state.loading.set(true);
        spawn_local(async move {
            match api::read_files(&addr).await {
                Ok(items) => {
                    state.tree.set(DocumentTree::new(items));
                    state.current_folder.set(ROOT_PARENT_ID.to_string());
                    state.load_error.set(None);
                }
                Err(e) => {
                    state.load_error.set(Some(e.to_string()));
                }
            }
            state.loading.set(false);
        });
    }
}

impl Default for BrowserState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// This context is provided at the root of the component tree and can be
/// accessed from any child component using `use_context::<AppContext>()`.
///
/// # Architecture
///
/// The [`AppContext`] separates concerns into independent domains:
/// - **Browser state**: Synced tree, navigation, sync status
/// - **Selection**: The per-session [`SelectionStore`] (one instance,
///   injected here rather than living as module state)
/// - **Tablet address**: The address the next refresh will target
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Document browsing state (tree, navigation, sync status).
    pub browser: BrowserState,

    /// Checked-state store for the session.
    pub selection: RwSignal<SelectionStore>,

    /// Address of the tablet's USB web interface.
    pub tablet_addr: RwSignal<String>,
}

impl AppContext {
    /// Creates a new application context with default state.
    pub fn new() -> Self {
        Self {
            browser: BrowserState::new(),
            selection: RwSignal::new(SelectionStore::new()),
            tablet_addr: RwSignal::new(DEFAULT_TABLET_ADDR.to_string()),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Kicks off the initial listing fetch
/// - Wraps the app in an ErrorBoundary for graceful error handling
#[component]
pub fn App() -> impl IntoView {
    // Create and provide application context
    let ctx = AppContext::new();
    provide_context(ctx);

    // Initial sync against the default USB address.
    ctx.browser.refresh(ctx.tablet_addr.get_untracked());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    font-family: sans-serif;
                ">
                    <h1 style="color: #c0392b;">"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <ul style="color: #c0392b; font-size: 0.9rem;">
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <Browser />
        </ErrorBoundary>
    }
}
