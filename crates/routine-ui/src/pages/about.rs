use leptos::prelude::*;

use crate::store::Store;

#[component]
pub fn AboutPage() -> impl IntoView {
    let store = expect_context::<Store>();
    let titleStore = store.clone();

    view! {
        <div class="dashboard-header">
            <h1>{move || titleStore.translate("about.title")}</h1>
        </div>
        <div class="card">
            <p>{move || store.translate("about.body")}</p>
        </div>
    }
}
