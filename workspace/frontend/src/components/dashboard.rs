use common::{DashboardFigures, DashboardLayout};
use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::chart::FigureChart;
use crate::api_client::{get_dashboard_layout, get_product_dashboard};
use crate::hooks::FetchState;

/// Heading, product dropdown and the two chart panels.
///
/// Every selection change fetches both figures for the new product.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let layout = use_state(FetchState::<DashboardLayout>::default);
    let selected = use_state(|| None::<String>);
    let figures = use_state(FetchState::<DashboardFigures>::default);

    {
        let layout = layout.clone();
        let selected = selected.clone();
        use_effect_with((), move |_| {
            layout.set(FetchState::Loading);
            wasm_bindgen_futures::spawn_local(async move {
                match get_dashboard_layout().await {
                    Ok(data) => {
                        log::debug!("Dashboard layout with {} products", data.dropdown.options.len());
                        selected.set(data.dropdown.value.clone());
                        layout.set(FetchState::Success(data));
                    }
                    Err(e) => layout.set(FetchState::Error(e)),
                }
            });
            || ()
        });
    }

    // Latest selection; responses for any other product are stale
    let latest = use_mut_ref(|| None::<String>);

    {
        let figures = figures.clone();
        let latest = latest.clone();
        use_effect_with((*selected).clone(), move |product| {
            *latest.borrow_mut() = product.clone();
            if let Some(product_id) = product.clone() {
                figures.set(FetchState::Loading);
                wasm_bindgen_futures::spawn_local(async move {
                    log::info!("Loading dashboard for product {}", product_id);
                    let result = get_product_dashboard(&product_id).await;
                    if !is_current_selection(latest.borrow().as_deref(), &product_id) {
                        log::debug!("Dropping stale dashboard response for product {}", product_id);
                        return;
                    }
                    match result {
                        Ok(data) => figures.set(FetchState::Success(data)),
                        Err(e) => figures.set(FetchState::Error(e)),
                    }
                });
            }
            || ()
        });
    }

    let on_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
                selected.set(Some(select.value()));
            }
        })
    };

    match &*layout {
        FetchState::NotStarted | FetchState::Loading => html! {
            <div class="flex justify-center items-center py-8">
                <span class="loading loading-spinner loading-lg"></span>
            </div>
        },
        FetchState::Error(error) => html! {
            <div class="alert alert-error"><span>{error}</span></div>
        },
        FetchState::Success(layout) => {
            let current = (*selected).clone().unwrap_or_default();
            let graph_id = |index: usize| -> AttrValue {
                layout.graphs.get(index).cloned().unwrap_or_else(|| format!("graph-{}", index)).into()
            };

            html! {
                <div>
                    <h1 class="text-2xl font-bold mb-4">{&layout.title}</h1>
                    <select id={layout.dropdown.id.clone()} class="select select-bordered mb-6" onchange={on_change}>
                        { for layout.dropdown.options.iter().map(|option| html! {
                            <option value={option.value.clone()} selected={option.value == current}>
                                {&option.label}
                            </option>
                        }) }
                    </select>
                    {match &*figures {
                        FetchState::Success(data) => html! {
                            <>
                                <FigureChart id={graph_id(0)} figure={data.demand_forecast.clone()} />
                                <FigureChart id={graph_id(1)} figure={data.price_comparison.clone()} />
                            </>
                        },
                        FetchState::Error(error) => html! {
                            <div class="alert alert-error"><span>{error}</span></div>
                        },
                        state if state.is_loading() => html! {
                            <span class="loading loading-spinner loading-lg"></span>
                        },
                        _ => html! { <></> },
                    }}
                </div>
            }
        }
    }
}

/// True when a response for `product_id` still matches the dropdown
fn is_current_selection(latest: Option<&str>, product_id: &str) -> bool {
    latest == Some(product_id)
}
