use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use routine_client::SessionContext;
use routine_types::User;

use crate::components::toast::{ToastContext, ToastLevel};
use crate::guard::LOGIN_PATH;
use crate::store::Store;

/// The account record for the signed-in user, matched by username.
pub fn find_account(users: Vec<User>, username: &str) -> Option<User> {
    users.into_iter().find(|user| user.username == username)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let store = expect_context::<Store>();
    let session = expect_context::<SessionContext>();
    let toasts = use_context::<ToastContext>();
    let navigate = use_navigate();

    let username = session.current_username().unwrap_or_default();
    #[allow(unused_variables)]
    let (account, setAccount) = signal(Option::<User>::None);

    #[cfg(feature = "hydrate")]
    {
        use super::settle;
        use wasm_bindgen_futures::spawn_local;

        let api = store.api().clone();
        let name = username.clone();
        spawn_local(async move {
            match settle(api.list_users().await) {
                Some(Ok(users)) => setAccount.set(find_account(users, &name)),
                Some(Err(e)) => tracing::warn!("could not load account details: {e}"),
                None => {}
            }
        });
    }

    let onSignOut = move |_| match session.sign_out() {
        Ok(()) => navigate(LOGIN_PATH, Default::default()),
        Err(e) => {
            tracing::warn!("sign out failed: {e}");
            if let Some(toasts) = toasts {
                toasts.push(e.to_string(), ToastLevel::Error);
            }
        }
    };

    let titleStore = store.clone();
    let signedInStore = store.clone();
    let accountStore = store.clone();

    view! {
        <div class="dashboard-header">
            <h1>{move || titleStore.translate("profile.title")}</h1>
            <p class="subtitle">
                {move || {
                    signedInStore.translate_with("profile.signed_in_as", &[("name", username.as_str())])
                }}
            </p>
        </div>
        {move || {
            account
                .get()
                .map(|user| {
                    let id = user.id.to_string();
                    let count = user.snippets.len().to_string();
                    view! {
                        <div class="card">
                            {accountStore
                                .translate_with(
                                    "profile.account",
                                    &[("id", id.as_str()), ("count", count.as_str())],
                                )}
                        </div>
                    }
                })
        }}
        <div class="card">
            <button class="btn btn-primary" on:click=onSignOut>
                {move || store.translate("profile.sign_out")}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, username: &str) -> User {
        User {
            url: None,
            id,
            username: username.to_owned(),
            snippets: Vec::new(),
        }
    }

    #[test]
    fn account_is_matched_by_username() {
        let users = vec![user(1, "bo"), user(2, "ana")];
        assert_eq!(find_account(users, "ana").map(|u| u.id), Some(2));
    }

    #[test]
    fn unknown_username_has_no_account() {
        assert_eq!(find_account(vec![user(1, "bo")], "ana"), None);
        assert_eq!(find_account(Vec::new(), ""), None);
    }
}
