#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::routing::get;
    use axum::Router;
    use clap::Parser;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use vintry::app::*;
    use vintry::server::{search_passthrough, SearchProxy, ServerConfig, ServerState};

    vintry::logging::init_logging()?;
    let config = ServerConfig::parse();

    let conf = get_configuration(None).context("failed to load leptos configuration")?;
    let addr = conf.leptos_options.site_addr;
    let leptos_options = conf.leptos_options;
    let shell_options = leptos_options.clone();
    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);

    let state = ServerState {
        leptos_options,
        proxy: SearchProxy::new(&config),
    };

    let app = Router::new()
        .route("/api/search/{query}", get(search_passthrough))
        .leptos_routes(&state, routes, move || {
            let val = shell_options.clone();
            move || shell(val.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(state);

    tracing::info!(%addr, upstream = %config.search_upstream, "listening");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app.into_make_service())
        .await
        .context("server exited with an error")?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // no client-side main function
    // see lib.rs for the hydration entry point instead
}
