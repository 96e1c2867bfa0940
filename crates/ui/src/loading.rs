//! Loading states: the initial screen and the in-flight overlay.

use leptos::prelude::*;

#[component]
pub(crate) fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="mx-auto flex max-w-6xl items-center justify-center py-24" role="status">
            <span class="spinner" aria-hidden="true"></span>
            <span class="ml-3 text-sm text-slate-600">"Loading inventory…"</span>
        </div>
    }
}

/// Covers a panel while a change is in flight.
#[component]
pub(crate) fn LoadingOverlay(visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <div
            class="loading-overlay"
            class:hidden=move || !visible.get()
            aria-hidden=move || (!visible.get()).to_string()
        >
            <span class="spinner"></span>
        </div>
    }
}
