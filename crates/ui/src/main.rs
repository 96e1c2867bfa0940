//! Stockroom Inventory Dashboard

use leptos::{logging::error, prelude::*, task::spawn_local};
use stockroom::prelude::*;

use crate::form::StockForm;

mod api;
mod current_stock;
mod form;
mod grid;
mod loading;
mod management;

/// Dashboard shell: fetches inventory once, then after every successful change.
#[component]
fn App() -> impl IntoView {
    let records = RwSignal::new(Vec::<InventoryRecord>::new());
    let form = RwSignal::new(StockForm::default());
    let loading = RwSignal::new(true);
    let updating = RwSignal::new(false);

    spawn_local(async move {
        refresh(records).await;
        loading.set(false);
    });

    let on_change = move |action: StockAction| {
        if updating.get_untracked() {
            return;
        }

        let change = match form.get_untracked().change(action) {
            Ok(change) => change,
            Err(validation) => {
                error!("refusing stock change: {validation}");
                return;
            }
        };

        updating.set(true);

        spawn_local(async move {
            match api::submit_change(&change).await {
                Ok(_) => refresh(records).await,
                Err(failure) => error!("error updating stock: {failure}"),
            }

            updating.set(false);
        });
    };

    view! {
        <main class="min-h-screen bg-slate-50 px-4 py-6 text-slate-900">
            <div class="mx-auto mb-6 max-w-6xl">
                <h1 class="text-2xl font-semibold tracking-tight">"Inventory"</h1>
            </div>
            {move || {
                if loading.get() {
                    view! { <loading::LoadingScreen /> }.into_any()
                } else {
                    view! {
                        <div class="mx-auto grid max-w-6xl grid-cols-1 gap-6 lg:grid-cols-3">
                            <management::StockManagementPanel
                                form=form
                                updating=updating
                                on_change=on_change
                            />
                            <current_stock::CurrentStockPanel
                                records=records
                                form=form
                                updating=updating
                            />
                        </div>
                    }
                        .into_any()
                }
            }}
        </main>
    }
}

/// Replace the local records with the server's. Failures leave them as they were.
async fn refresh(records: RwSignal<Vec<InventoryRecord>>) {
    match api::fetch_inventory().await {
        Ok(fetched) => records.set(fetched),
        Err(failure) => error!("error fetching stock: {failure}"),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(App);
}
