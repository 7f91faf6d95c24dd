use leptos::prelude::*;
use routine_client::SessionContext;

use crate::components::card::Card;
use crate::store::Store;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = expect_context::<Store>();
    let session = expect_context::<SessionContext>();
    let name = session.current_username().unwrap_or_default();

    let welcomeStore = store.clone();
    let subtitleStore = store.clone();
    let cardTitle = store.translate("nav.table");

    view! {
        <div class="dashboard-header">
            <h1>{move || welcomeStore.translate_with("home.welcome", &[("name", name.as_str())])}</h1>
            <p class="subtitle">{move || subtitleStore.translate("home.subtitle")}</p>
        </div>
        <Card title=cardTitle>
            <ul class="link-list">
                <li><a href="/table">"/table"</a></li>
                <li><a href="/posts">"/posts"</a></li>
                <li><a href="/docker-compose">"/docker-compose"</a></li>
            </ul>
        </Card>
    }
}
