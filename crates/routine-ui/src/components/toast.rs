use std::time::Duration;

use leptos::prelude::*;
use routine_client::ApiError;

const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

impl ToastLevel {
    fn class(self) -> &'static str {
        match self {
            ToastLevel::Success => "toast toast-success",
            ToastLevel::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub level: ToastLevel,
}

/// Visible toasts in arrival order. Ids are never reused.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, message: String, level: ToastLevel) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Toast { id, message, level });
        id
    }

    /// Returns whether the toast was still showing.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[Toast] {
        &self.items
    }
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    queue: RwSignal<ToastQueue>,
}

impl ToastContext {
    pub fn push(&self, message: String, level: ToastLevel) {
        let mut id = 0;
        self.queue.update(|queue| id = queue.push(message, level));

        let queue = self.queue;
        set_timeout(
            move || {
                queue.update(|queue| {
                    queue.dismiss(id);
                });
            },
            TOAST_LIFETIME,
        );
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|queue| {
            queue.dismiss(id);
        });
    }

    /// Show an API failure, unless the client is already navigating away
    /// because of it.
    pub fn report(&self, error: &ApiError) {
        if error.redirect_pending {
            return;
        }
        self.push(error.to_string(), ToastLevel::Error);
    }
}

/// Provides [`ToastContext`] to its children and renders the stack.
/// Clicking a toast dismisses it early.
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toasts = ToastContext {
        queue: RwSignal::new(ToastQueue::default()),
    };
    provide_context(toasts);

    view! {
        {children()}
        <div class="toast-container">
            <For
                each=move || toasts.queue.with(|queue| queue.items().to_vec())
                key=|toast| toast.id
                let:toast
            >
                <div class=toast.level.class() on:click=move |_| toasts.dismiss(toast.id)>
                    {toast.message.clone()}
                </div>
            </For>
        </div>
    }
}
