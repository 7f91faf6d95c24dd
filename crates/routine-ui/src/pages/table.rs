use leptos::prelude::*;
use routine_types::{Routine, Schedule, Task};
use serde_json::Value;

use crate::components::card::{Card, Loading};
use crate::components::toast::ToastContext;
use crate::store::Store;

type Loaded<T> = Option<Result<Vec<T>, String>>;

fn task_count(routine: &Routine) -> String {
    match routine.tasks.len() {
        1 => "1 task".to_owned(),
        n => format!("{n} tasks"),
    }
}

fn reference_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Title of the routine a task points at, by hyperlink or primary key.
/// Unknown references are shown as they came.
pub fn routine_label(reference: &Value, routines: &[Routine]) -> String {
    let found = match reference {
        Value::Number(n) => n
            .as_u64()
            .and_then(|id| routines.iter().find(|r| r.id == id)),
        Value::String(url) => routines
            .iter()
            .find(|r| r.url.as_deref() == Some(url.as_str())),
        _ => None,
    };
    match found {
        Some(routine) => routine.title.clone(),
        None => reference_text(reference),
    }
}

/// How a new task refers to its routine: the hyperlink when the API sent one,
/// the primary key otherwise.
pub fn routine_reference(routine: &Routine) -> Value {
    match &routine.url {
        Some(url) => Value::String(url.clone()),
        None => Value::from(routine.id),
    }
}

fn loaded_view<T>(
    store: &Store,
    state: Loaded<T>,
    empty_key: &str,
    render: impl FnOnce(Vec<T>) -> AnyView,
) -> AnyView {
    match state {
        None => view! { <Loading label=store.translate("common.loading") /> }.into_any(),
        Some(Err(error)) => view! {
            <div class="login-error">
                {store.translate_with("common.load_failed", &[("error", error.as_str())])}
            </div>
        }
        .into_any(),
        Some(Ok(list)) if list.is_empty() => view! {
            <div class="container-empty">
                <p>{store.translate(empty_key)}</p>
            </div>
        }
        .into_any(),
        Some(Ok(list)) => render(list),
    }
}

/// Routines with their tasks and schedules. Bound at `/table` and
/// `/reference`.
#[component]
pub fn TablePage() -> impl IntoView {
    let store = expect_context::<Store>();
    #[allow(unused_variables)]
    let (routines, setRoutines) = signal(Loaded::<Routine>::None);
    #[allow(unused_variables)]
    let (tasks, setTasks) = signal(Loaded::<Task>::None);
    #[allow(unused_variables)]
    let (schedules, setSchedules) = signal(Loaded::<Schedule>::None);
    let (title, setTitle) = signal(String::new());
    let (taskTitle, setTaskTitle) = signal(String::new());
    let (taskRoutine, setTaskRoutine) = signal(String::new());
    #[allow(unused_variables)]
    let (busy, setBusy) = signal(false);
    #[allow(unused_variables)]
    let toasts = use_context::<ToastContext>();

    #[cfg(feature = "hydrate")]
    let refetch = {
        use super::settle;
        use crate::store::app::AppMutation;
        use wasm_bindgen_futures::spawn_local;

        let loadingStore = store.clone();
        move || {
            let store = loadingStore.clone();
            let api = store.api().clone();
            store.commit(AppMutation::SetLoading(true));
            spawn_local(async move {
                if let Some(result) = settle(api.list_routines().await) {
                    setRoutines.set(Some(result));
                }
                if let Some(result) = settle(api.list_tasks().await) {
                    setTasks.set(Some(result));
                }
                if let Some(result) = settle(api.list_schedules().await) {
                    setSchedules.set(Some(result));
                }
                store.commit(AppMutation::SetLoading(false));
            });
        }
    };

    #[cfg(feature = "hydrate")]
    refetch();

    #[allow(unused_variables)]
    let createStore = store.clone();
    #[cfg(feature = "hydrate")]
    let createRefetch = refetch.clone();
    let onCreate = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use routine_types::NewRoutine;
            use wasm_bindgen_futures::spawn_local;

            let routine = NewRoutine {
                title: title.get_untracked().trim().to_owned(),
            };
            if routine.title.is_empty() {
                return;
            }
            let api = createStore.api().clone();
            let refetch = createRefetch.clone();
            setBusy.set(true);
            spawn_local(async move {
                match api.create_routine(&routine).await {
                    Ok(created) => {
                        tracing::info!("created routine {}", created.id);
                        setTitle.set(String::new());
                        refetch();
                    }
                    Err(e) => {
                        if let Some(toasts) = toasts {
                            toasts.report(&e);
                        }
                    }
                }
                setBusy.set(false);
            });
        }
    };

    #[allow(unused_variables)]
    let taskStore = store.clone();
    #[cfg(feature = "hydrate")]
    let taskRefetch = refetch.clone();
    let onCreateTask = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            let title = taskTitle.get_untracked().trim().to_owned();
            let selected = taskRoutine.get_untracked().parse::<u64>().ok();
            let parent = routines.with_untracked(|state| {
                let list = state.as_ref()?.as_ref().ok()?;
                list.iter().find(|r| Some(r.id) == selected).cloned()
            });
            let Some(parent) = parent.filter(|_| !title.is_empty()) else {
                return;
            };
            let task = Task {
                title,
                routine: routine_reference(&parent),
                schedule: None,
            };
            let api = taskStore.api().clone();
            let refetch = taskRefetch.clone();
            setBusy.set(true);
            spawn_local(async move {
                match api.create_task(&task).await {
                    Ok(created) => {
                        tracing::info!("added task {} to routine {}", created.title, parent.id);
                        setTaskTitle.set(String::new());
                        refetch();
                    }
                    Err(e) => {
                        if let Some(toasts) = toasts {
                            toasts.report(&e);
                        }
                    }
                }
                setBusy.set(false);
            });
        }
    };

    #[allow(unused_variables)]
    let deleteStore = store.clone();
    #[cfg(feature = "hydrate")]
    let deleteRefetch = refetch.clone();
    let handleDelete = move |id: u64| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen_futures::spawn_local;

            let api = deleteStore.api().clone();
            let refetch = deleteRefetch.clone();
            setBusy.set(true);
            spawn_local(async move {
                match api.delete_routine(id).await {
                    Ok(()) => refetch(),
                    Err(e) => {
                        if let Some(toasts) = toasts {
                            toasts.report(&e);
                        }
                    }
                }
                setBusy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    };

    let titleStore = store.clone();
    let newStore = store.clone();
    let addStore = store.clone();
    let newTaskStore = store.clone();
    let addTaskStore = store.clone();
    let routinesStore = store.clone();
    let tasksStore = store.clone();
    let schedulesStore = store.clone();

    view! {
        <div class="dashboard-header">
            <h1>{move || titleStore.translate("table.title")}</h1>
        </div>
        <form class="inline-form" on:submit=onCreate>
            <input
                type="text"
                placeholder=move || newStore.translate("table.new")
                prop:value=title
                on:input=move |ev| setTitle.set(event_target_value(&ev))
            />
            <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                {move || addStore.translate("table.add")}
            </button>
        </form>
        {move || {
            let handleDelete = handleDelete.clone();
            loaded_view(
                &routinesStore,
                routines.get(),
                "table.empty",
                move |list| {
                    view! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>"#"</th>
                                    <th>"Title"</th>
                                    <th>"Owner"</th>
                                    <th>"Tasks"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {list
                                    .into_iter()
                                    .map(|routine| {
                                        let handleDelete = handleDelete.clone();
                                        let id = routine.id;
                                        let tasks = task_count(&routine);
                                        view! {
                                            <tr>
                                                <td>{id}</td>
                                                <td>{routine.title}</td>
                                                <td>{routine.owner.unwrap_or_default()}</td>
                                                <td>{tasks}</td>
                                                <td>
                                                    <button
                                                        class="btn btn-ghost btn-sm"
                                                        disabled=move || busy.get()
                                                        on:click=move |_| handleDelete(id)
                                                    >
                                                        "\u{2715}"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                },
            )
        }}

        <Card title=store.translate("table.tasks")>
            <form class="inline-form" on:submit=onCreateTask>
                <input
                    type="text"
                    placeholder=move || newTaskStore.translate("table.new_task")
                    prop:value=taskTitle
                    on:input=move |ev| setTaskTitle.set(event_target_value(&ev))
                />
                <select
                    prop:value=taskRoutine
                    on:change=move |ev| setTaskRoutine.set(event_target_value(&ev))
                >
                    <option value="">"-"</option>
                    {move || {
                        routines
                            .get()
                            .and_then(Result::ok)
                            .unwrap_or_default()
                            .into_iter()
                            .map(|r| view! { <option value=r.id.to_string()>{r.title}</option> })
                            .collect_view()
                    }}
                </select>
                <button type="submit" class="btn btn-primary" disabled=move || busy.get()>
                    {move || addTaskStore.translate("table.add")}
                </button>
            </form>
            {move || {
                let known = routines.get().and_then(Result::ok).unwrap_or_default();
                loaded_view(
                    &tasksStore,
                    tasks.get(),
                    "table.no_tasks",
                    move |list| {
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Task"</th>
                                        <th>"Routine"</th>
                                        <th>"Schedule"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|task| {
                                            let routine = routine_label(&task.routine, &known);
                                            let schedule = task
                                                .schedule
                                                .as_ref()
                                                .map(reference_text)
                                                .unwrap_or_default();
                                            view! {
                                                <tr>
                                                    <td>{task.title}</td>
                                                    <td>{routine}</td>
                                                    <td>{schedule}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    },
                )
            }}
        </Card>

        <Card title=store.translate("table.schedules")>
            {move || {
                loaded_view(
                    &schedulesStore,
                    schedules.get(),
                    "table.no_schedules",
                    |list| {
                        view! {
                            <table class="data-table">
                                <thead>
                                    <tr>
                                        <th>"Task"</th>
                                        <th>"Timing"</th>
                                        <th>"Day"</th>
                                        <th>"Time"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|schedule| {
                                            view! {
                                                <tr>
                                                    <td>{reference_text(&schedule.task)}</td>
                                                    <td>{schedule.timing}</td>
                                                    <td>{schedule.day}</td>
                                                    <td>{schedule.time}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    },
                )
            }}
        </Card>
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;
