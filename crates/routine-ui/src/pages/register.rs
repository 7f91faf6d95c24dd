use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::toast::ToastContext;
use crate::store::Store;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let store = expect_context::<Store>();
    let (username, setUsername) = signal(String::new());
    let (email, setEmail) = signal(String::new());
    let (password, setPassword) = signal(String::new());
    #[allow(unused_variables)]
    let (error, setError) = signal(Option::<String>::None);

    #[allow(unused_variables)]
    let submitStore = store.clone();
    #[allow(unused_variables)]
    let toasts = use_context::<ToastContext>();
    #[allow(unused_variables)]
    let navigate = use_navigate();

    let onSubmit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use crate::components::toast::ToastLevel;
            use routine_types::Registration;
            use wasm_bindgen_futures::spawn_local;

            let api = submitStore.api().clone();
            let doneMessage = submitStore.translate("register.done");
            let navigate = navigate.clone();
            let registration = Registration {
                username: username.get_untracked(),
                email: email.get_untracked(),
                password: password.get_untracked(),
            };

            setError.set(None);
            spawn_local(async move {
                match api.register(&registration).await {
                    Ok(user) => {
                        tracing::info!("registered {}", user.username);
                        if let Some(toasts) = toasts {
                            toasts.push(doneMessage, ToastLevel::Success);
                        }
                        navigate("/login", Default::default());
                    }
                    Err(e) if e.redirect_pending => {}
                    Err(e) => setError.set(Some(e.to_string())),
                }
            });
        }
    };

    let titleStore = store.clone();
    let userLabelStore = store.clone();
    let emailLabelStore = store.clone();
    let passLabelStore = store.clone();
    let submitLabelStore = store.clone();

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-header">
                    <div class="login-icon">"R"</div>
                    <h1>{move || titleStore.translate("register.title")}</h1>
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
                            required
                            prop:value=username
                            on:input=move |ev| setUsername.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="email">
                            {move || emailLabelStore.translate("register.email")}
                        </label>
                        <input
                            type="email"
                            id="email"
                            required
                            prop:value=email
                            on:input=move |ev| setEmail.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="form-group">
                        <label for="password">
                            {move || passLabelStore.translate("login.password")}
                        </label>
                        <input
                            type="password"
                            id="password"
                            required
                            prop:value=password
                            on:input=move |ev| setPassword.set(event_target_value(&ev))
                        />
                    </div>
                    <button type="submit" class="btn btn-primary">
                        {move || submitLabelStore.translate("register.submit")}
                    </button>
                </form>
            </div>
        </div>
    }
}
