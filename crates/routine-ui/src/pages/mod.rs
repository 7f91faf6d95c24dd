pub mod about;
pub mod docker_compose;
pub mod forbidden;
pub mod home;
pub mod login;
pub mod not_found;
pub mod posts;
pub mod profile;
pub mod register;
pub mod table;

use leptos::prelude::*;
use routine_client::ApiError;

use crate::routes::Page;

pub fn render_page(page: Page) -> AnyView {
    match page {
        Page::Home => view! { <home::HomePage /> }.into_any(),
        Page::Login => view! { <login::LoginPage /> }.into_any(),
        Page::Register => view! { <register::RegisterPage /> }.into_any(),
        Page::Profile => view! { <profile::ProfilePage /> }.into_any(),
        Page::DockerCompose => view! { <docker_compose::DockerComposePage /> }.into_any(),
        Page::Table => view! { <table::TablePage /> }.into_any(),
        Page::Posts => view! { <posts::PostsPage /> }.into_any(),
        Page::About => view! { <about::AboutPage /> }.into_any(),
        Page::Forbidden => view! { <forbidden::ForbiddenPage /> }.into_any(),
    }
}

/// Outcome of a page load as the view shows it. A failure that already
/// triggered a redirect stays `None` so the page keeps its loading state
/// while the router moves away.
pub fn settle<T>(result: Result<T, ApiError>) -> Option<Result<T, String>> {
    match result {
        Ok(value) => Some(Ok(value)),
        Err(e) if e.redirect_pending => None,
        Err(e) => Some(Err(e.to_string())),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
