#![allow(non_snake_case)]

#[cfg(feature = "ssr")]
mod config;

#[cfg(feature = "ssr")]
fn main() {
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = std::env::args().collect();
    let configPath = config::path_from_args(&args);
    let appConfig = config::load(&configPath);
    tracing::info!(
        "loaded config from {configPath}: bind={}:{}",
        appConfig.server.bind,
        appConfig.server.port
    );

    // Server-side renders build their API client from the environment, so it
    // is written before the runtime starts its worker threads.
    config::export_api_base_url(&appConfig.api);

    tokio::runtime::Runtime::new()
        .expect("failed to start tokio runtime")
        .block_on(serve(appConfig));
}

#[cfg(feature = "ssr")]
async fn serve(appConfig: config::Config) {
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use routine_ui::{shell, App};
    use tower_http::trace::TraceLayer;

    let conf = get_configuration(None).expect("failed to load Leptos configuration");
    let leptosOptions = conf.leptos_options;
    let addr = match appConfig.server.socket_addr() {
        Some(addr) => addr,
        None => {
            tracing::warn!(
                "invalid bind address {}:{}, using {}",
                appConfig.server.bind,
                appConfig.server.port,
                leptosOptions.site_addr
            );
            leptosOptions.site_addr
        }
    };

    let routes = generate_route_list(App);

    let app = Router::new()
        .leptos_routes(&leptosOptions, routes, {
            let leptosOptions = leptosOptions.clone();
            move || shell(leptosOptions.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptosOptions)
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on {addr}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind to {addr}: {e}"));
    axum::serve(listener, app.into_make_service())
        .await
        .expect("server exited with error");
}

#[cfg(not(feature = "ssr"))]
fn main() {}
