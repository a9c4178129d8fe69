use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use velour_core::ModelName;

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = use_navigate();
    let (model, set_model) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let open_model = move |_| match ModelName::parse(model.get().trim()) {
        Ok(name) => {
            set_error.set(None);
            navigate(&format!("/models/{}", name), Default::default());
        }
        Err(e) => set_error.set(Some(e.to_string())),
    };

    view! {
        <div class="page home-page">
            <h2>"Welcome to Velour"</h2>
            <p>"Browse the evaluation settings recorded for a model."</p>

            <div class="config-panel">
                <div class="form-group">
                    <label>"Model"</label>
                    <input
                        type="text"
                        placeholder="resnet50"
                        prop:value=model
                        on:input=move |ev| set_model.set(event_target_value(&ev))
                    />
                </div>
                <button class="run-btn" on:click=open_model>"View Evaluation Settings"</button>
            </div>

            {move || error.get().map(|e| view! {
                <div class="error-panel">
                    <p style="color: var(--error);">"Error: " {e}</p>
                </div>
            })}
        </div>
    }
}
