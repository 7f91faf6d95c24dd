use leptos::prelude::*;

use crate::store::Store;

const COMPOSE_FILE: &str = r#"services:
  db:
    image: postgres:16
    environment:
      POSTGRES_DB: tracker
      POSTGRES_PASSWORD: tracker
    volumes:
      - db-data:/var/lib/postgresql/data
  api:
    build: ./routine_tracker
    command: python manage.py runserver 0.0.0.0:8000
    environment:
      DATABASE_URL: postgres://postgres:tracker@db:5432/tracker
    ports:
      - "8000:8000"
    depends_on:
      - db
volumes:
  db-data:
"#;

#[component]
pub fn DockerComposePage() -> impl IntoView {
    let store = expect_context::<Store>();
    let titleStore = store.clone();

    view! {
        <div class="dashboard-header">
            <h1>{move || titleStore.translate("docker.title")}</h1>
            <p class="subtitle">{move || store.translate("docker.subtitle")}</p>
        </div>
        <div class="card">
            <div class="card-title">"docker-compose.yml"</div>
            <pre class="code-block">{COMPOSE_FILE}</pre>
            <p class="subtitle">
                "ROUTINE_API_BASE_URL=http://localhost:8000 cargo leptos watch"
            </p>
        </div>
    }
}
