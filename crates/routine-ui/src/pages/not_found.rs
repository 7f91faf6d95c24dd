use leptos::prelude::*;

use crate::store::Store;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let store = expect_context::<Store>();
    view! { <p>{move || store.translate("not_found.title")}</p> }
}
