use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use routine_client::SessionContext;

use crate::navigation::SignalNavigator;
use crate::store::Store;

/// Where to go after signing in: the `redirect` query the auth redirect left
/// behind, or home.
pub fn post_login_target(redirect: Option<&str>) -> String {
    match redirect {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => "/".to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let store = expect_context::<Store>();
    let (username, setUsername) = signal(String::new());
    let (password, setPassword) = signal(String::new());
    #[allow(unused_variables)]
    let (error, setError) = signal(Option::<String>::None);
    #[allow(unused_variables)]
    let (pending, setPending) = signal(false);

    #[allow(unused_variables)]
    let submitStore = store.clone();
    #[allow(unused_variables)]
    let session = expect_context::<SessionContext>();
    #[allow(unused_variables)]
    let navigator = expect_context::<SignalNavigator>();
    #[allow(unused_variables)]
    let navigate = use_navigate();

    let onSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use routine_client::Navigator;
            use routine_types::Credentials;
            use wasm_bindgen_futures::spawn_local;

            let api = submitStore.api().clone();
            let session = session.clone();
            let navigator = navigator.clone();
            let navigate = navigate.clone();
            let credentials = Credentials {
                username: username.get_untracked(),
                password: password.get_untracked(),
            };

            setPending.set(true);
            setError.set(None);
            spawn_local(async move {
                let result = api.obtain_token(&credentials).await;
                setPending.set(false);
                match result {
                    Ok(token) => {
                        if let Err(e) = session.sign_in(&credentials.username, &token.token) {
                            setError.set(Some(e.to_string()));
                            return;
                        }
                        let current = navigator.current_route();
                        let target = post_login_target(current.query_value("redirect"));
                        navigate(&target, Default::default());
                    }
                    Err(e) if e.redirect_pending => {}
                    Err(e) => setError.set(Some(e.to_string())),
                }
            });
        }
    };

    let titleStore = store.clone();
    let userLabelStore = store.clone();
    let passLabelStore = store.clone();
    let submitLabelStore = store.clone();
    let registerStore = store.clone();

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"R"</div>
                    <h1>{move || titleStore.translate("login.title")}</h1>
                </div>

                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="login-error">{message}</div> })
                }}

                <form on:submit=onSubmit>
                    <div class="form-group">
                        <label for="username">
                            {move || userLabelStore.translate("login.username")}
                        </label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            required
                            prop:value=username
                            on:input=move |ev| setUsername.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">
                            {move || passLabelStore.translate("login.password")}
                        </label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            required
                            prop:value=password
                            on:input=move |ev| setPassword.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary" disabled=move || pending.get()>
                        {move || submitLabelStore.translate("login.submit")}
                    </button>
                </form>
                <a class="login-link" href="/register">
                    {move || registerStore.translate("login.register")}
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;
