use leptos::prelude::*;

/// Card wrapper with a title header.
#[component]
pub fn Card(
    /// Title displayed at the top of the card
    title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="card">
            <div class="card-title">{title}</div>
            {children()}
        </div>
    }
}

/// Spinner row shown while a request or deferred view is pending.
#[component]
pub fn Loading(label: String) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="spinner"></div>
            {label}
        </div>
    }
}
