//! Stock management form panel.

use leptos::prelude::*;
use stockroom::prelude::*;

use crate::{form::StockForm, grid, loading::LoadingOverlay};

#[component]
pub(crate) fn StockManagementPanel(
    form: RwSignal<StockForm>,
    updating: RwSignal<bool>,
    on_change: impl Fn(StockAction) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let disabled = move || updating.get();

    view! {
        <section class="panel relative" aria-labelledby="manage-stock-heading">
            <h2 id="manage-stock-heading" class="panel-title">"Manage Stock"</h2>

            <label class="field">
                <span>"Brand"</span>
                <select
                    disabled=disabled
                    prop:value=move || form.get().brand.as_str()
                    on:change=move |ev| {
                        if let Ok(brand) = event_target_value(&ev).parse::<Brand>() {
                            form.update(|state| state.select_brand(brand));
                        }
                    }
                >
                    {Brand::ALL
                        .into_iter()
                        .map(|brand| view! { <option value=brand.as_str()>{brand.as_str()}</option> })
                        .collect_view()}
                </select>
            </label>

            <label class="field">
                <span>"Category"</span>
                <select
                    disabled=disabled
                    prop:value=move || form.get().category.as_str()
                    on:change=move |ev| {
                        if let Ok(category) = event_target_value(&ev).parse::<Category>() {
                            form.update(|state| state.select_category(category));
                        }
                    }
                >
                    <option value="adult">"Adult"</option>
                    <option value="youth">"Youth"</option>
                </select>
            </label>

            <label class="field">
                <span>"Size"</span>
                <select
                    disabled=disabled
                    prop:value=move || {
                        let state = form.get();

                        grid::display_label(state.size, state.category)
                    }
                    on:change=move |ev| {
                        if let Some((size, _)) = grid::parse_display_label(&event_target_value(&ev)) {
                            form.update(|state| state.select_size(size));
                        }
                    }
                >
                    {move || {
                        let category = form.get().category;

                        category
                            .sizes()
                            .iter()
                            .map(|&size| {
                                let label = grid::display_label(size, category);

                                view! { <option value=label.clone()>{label.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
            </label>

            <div class="field">
                <span>"Quantity"</span>
                <div class="quantity-stepper">
                    <button
                        type="button"
                        aria-label="Decrease quantity"
                        disabled=move || updating.get() || form.get().quantity() <= 1
                        on:click=move |_| form.update(StockForm::decrement)
                    >
                        "−"
                    </button>
                    <input
                        type="number"
                        min="1"
                        disabled=disabled
                        prop:value=move || form.get().quantity().to_string()
                        on:input=move |ev| {
                            let text = event_target_value(&ev);

                            form.update(|state| state.set_quantity_text(&text));
                        }
                    />
                    <button
                        type="button"
                        aria-label="Increase quantity"
                        disabled=disabled
                        on:click=move |_| form.update(StockForm::increment)
                    >
                        "+"
                    </button>
                </div>
            </div>

            <div class="actions">
                <button
                    type="button"
                    class="button button-primary"
                    disabled=disabled
                    on:click=move |_| on_change(StockAction::Add)
                >
                    "Add Stock"
                </button>
                <button
                    type="button"
                    class="button button-secondary"
                    disabled=disabled
                    on:click=move |_| on_change(StockAction::Remove)
                >
                    "Remove Stock"
                </button>
            </div>

            <LoadingOverlay visible=updating />
        </section>
    }
}
