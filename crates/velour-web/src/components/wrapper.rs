use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Wrapper(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <header class="header">
                <A href="/">
                    <h1>"Velour"</h1>
                </A>
                <span class="subtitle">"Model Evaluation"</span>
            </header>
            <main class="content">{children()}</main>
        </div>
    }
}
