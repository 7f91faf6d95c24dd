use leptos::prelude::*;

use crate::store::Store;

#[component]
pub fn ForbiddenPage() -> impl IntoView {
    let store = expect_context::<Store>();
    let titleStore = store.clone();

    view! {
        <div class="dashboard-header">
            <h1>{move || titleStore.translate("forbidden.title")}</h1>
        </div>
        <div class="card">
            <p class="login-error">{move || store.translate("forbidden.body")}</p>
            <a class="btn btn-ghost btn-sm" href="/">"\u{2190}"</a>
        </div>
    }
}
