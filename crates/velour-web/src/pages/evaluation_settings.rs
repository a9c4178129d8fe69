use crate::api;
use crate::components::data_grid::DataGrid;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use velour_core::{EvaluationSetting, FetchTracker};

#[component]
pub fn EvaluationSettingsPage() -> impl IntoView {
    let params = use_params_map();
    let name = move || params.read().get("name").unwrap_or_default();
    let tracker = RwSignal::new(FetchTracker::<Vec<EvaluationSetting>>::new());

    // Fetch on mount and whenever the route's model name changes
    Effect::new(move || {
        let raw = name();
        let Some(ticket) = tracker.try_update(|t| t.on_route_name(&raw)).flatten() else {
            return;
        };

        wasm_bindgen_futures::spawn_local(async move {
            let result = api::fetch_evaluation_settings(ticket.name().clone()).await;
            if let Err(e) = &result {
                leptos::logging::error!("evaluation settings for {}: {}", ticket.name(), e);
            }
            // No-op if the page was unmounted meanwhile
            tracker.try_update(|t| t.complete(ticket, result));
        });
    });

    let rows = Signal::derive(move || {
        tracker.with(|t| t.state().loaded().cloned().unwrap_or_default())
    });

    view! {
        <div class="page evaluation-settings-page">
            <h2>"Evaluation Settings"</h2>
            <p class="subtitle">{move || format!("Model: {}", name())}</p>

            {move || tracker.with(|t| t.state().is_loading()).then(|| view! {
                <p class="loading"><span class="spinner"></span>" Loading..."</p>
            })}

            {move || tracker.with(|t| t.state().error().map(str::to_string)).map(|e| view! {
                <div class="error-panel">
                    <p style="color: var(--error);">"Error: " {e}</p>
                </div>
            })}

            <DataGrid rows=rows />
        </div>
    }
}
