use leptos::prelude::*;
use routine_types::Snippet;

use crate::components::card::{Card, Loading};
use crate::store::Store;

#[component]
pub fn PostsPage() -> impl IntoView {
    let store = expect_context::<Store>();
    #[allow(unused_variables)]
    let (snippets, setSnippets) = signal(Option::<Result<Vec<Snippet>, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use super::settle;
        use wasm_bindgen_futures::spawn_local;

        let api = store.api().clone();
        spawn_local(async move {
            if let Some(result) = settle(api.list_snippets().await) {
                setSnippets.set(Some(result));
            }
        });
    }

    let titleStore = store.clone();

    view! {
        <div class="dashboard-header">
            <h1>{move || titleStore.translate("posts.title")}</h1>
        </div>
        {move || match snippets.get() {
            None => view! { <Loading label=store.translate("common.loading") /> }.into_any(),
            Some(Err(error)) => {
                view! {
                    <div class="login-error">
                        {store.translate_with("common.load_failed", &[("error", error.as_str())])}
                    </div>
                }
                    .into_any()
            }
            Some(Ok(list)) if list.is_empty() => {
                view! {
                    <div class="container-empty">
                        <p>{store.translate("posts.empty")}</p>
                    </div>
                }
                    .into_any()
            }
            Some(Ok(list)) => {
                list.into_iter()
                    .map(|snippet| {
                        let title = if snippet.title.is_empty() {
                            format!("#{}", snippet.id)
                        } else {
                            snippet.title
                        };
                        view! {
                            <Card title=title>
                                <div class="snippet-meta">
                                    {snippet.owner.unwrap_or_default()}
                                    " \u{00B7} "
                                    {snippet.language}
                                </div>
                                <pre class="snippet-code">{snippet.code}</pre>
                            </Card>
                        }
                    })
                    .collect_view()
                    .into_any()
            }
        }}
    }
}
