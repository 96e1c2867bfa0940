//! Current stock panel: quick stats and one size grid per brand.

use leptos::prelude::*;
use stockroom::prelude::*;

use crate::{
    form::StockForm,
    grid::{self, BrandGrid, SizeCell},
    loading::LoadingOverlay,
};

#[component]
pub(crate) fn CurrentStockPanel(
    records: RwSignal<Vec<InventoryRecord>>,
    form: RwSignal<StockForm>,
    updating: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <section class="panel relative lg:col-span-2" aria-labelledby="current-stock-heading">
            <h2 id="current-stock-heading" class="panel-title">"Current Stock"</h2>

            <QuickStats records=records />

            <div class="brand-grids">
                {move || {
                    records
                        .with(|records| grid::build_grids(records))
                        .into_iter()
                        .map(|brand_grid| view! { <BrandCard brand_grid=brand_grid form=form updating=updating /> })
                        .collect_view()
                }}
            </div>

            <LoadingOverlay visible=updating />
        </section>
    }
}

#[component]
fn QuickStats(records: RwSignal<Vec<InventoryRecord>>) -> impl IntoView {
    let summaries = move || records.with(|records| summarize(records));

    view! {
        <dl class="quick-stats">
            <div>
                <dt>"Total Items"</dt>
                <dd>{move || grand_total(&summaries())}</dd>
            </div>
            <div>
                <dt>"Brands Stocked"</dt>
                <dd>{move || summaries().len()}</dd>
            </div>
        </dl>
    }
}

#[component]
fn BrandCard(
    brand_grid: BrandGrid,
    form: RwSignal<StockForm>,
    updating: RwSignal<bool>,
) -> impl IntoView {
    let brand = brand_grid.brand;

    let rows = Category::ALL
        .into_iter()
        .map(|category| {
            let cells = brand_grid.cells(category).to_vec();

            view! {
                <div class="size-row">
                    <h4 class="size-row-title">
                        {match category {
                            Category::Adult => "Adult",
                            Category::Youth => "Youth",
                        }}
                    </h4>
                    <div class="size-cells">
                        {cells
                            .into_iter()
                            .map(|cell| view! { <SizeCellButton brand=brand cell=cell form=form updating=updating /> })
                            .collect_view()}
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <article class="brand-card">
            <header class="brand-card-header">
                <h3>{brand.as_str()}</h3>
                <span class="brand-total">{format!("{} items", brand_grid.total_quantity)}</span>
            </header>
            {rows}
        </article>
    }
}

#[component]
fn SizeCellButton(
    brand: Brand,
    cell: SizeCell,
    form: RwSignal<StockForm>,
    updating: RwSignal<bool>,
) -> impl IntoView {
    let selected = move || {
        let state = form.get();

        state.brand == brand && state.size == cell.size && state.category == cell.category
    };

    view! {
        <button
            type="button"
            class="size-cell"
            class:size-cell-empty=cell.is_empty()
            class:size-cell-selected=selected
            disabled=move || updating.get()
            aria-pressed=move || selected().to_string()
            on:click=move |_| form.update(|state| state.prefill(brand, cell.size, cell.category))
        >
            <span class="size-cell-label">{cell.label()}</span>
            <span class="size-cell-quantity">{cell.quantity}</span>
        </button>
    }
}
