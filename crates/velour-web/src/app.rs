use leptos::prelude::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::components::wrapper::Wrapper;
use crate::pages::{evaluation_settings::EvaluationSettingsPage, home::HomePage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Wrapper>
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/models/:name") view=EvaluationSettingsPage />
                </Routes>
            </Wrapper>
        </Router>
    }
}
