use axum::{
    body::Body as AxumBody,
    extract::State,
    http::Request,
    middleware,
    response::IntoResponse,
    routing::get,
    Router,
};
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};

use crate::app::*;
use crate::config::load_options;
use crate::error::ServerError;
use crate::middleware::trace_requests;
use crate::state::AppState;

pub fn router(app_state: AppState) -> Router {
    let routes = generate_route_list(App);

    Router::new()
        .leptos_routes_with_handler(routes, get(|State(app_state): State<AppState>, request: Request<AxumBody>| async move {
            let leptos_options = app_state.leptos_options.clone();
            let handler = leptos_axum::render_app_to_stream_with_context(
                move || {
                    provide_context(app_state.clone());
                },
                move || shell(leptos_options.clone()),
            );
            handler(request).await.into_response()
        }))
        .fallback(leptos_axum::file_and_error_handler::<AppState, _>(shell))
        .layer(middleware::from_fn(trace_requests))
        .with_state(app_state)
}

pub async fn run() -> Result<(), ServerError> {
    let leptos_options = load_options()?;
    let addr = leptos_options.site_addr;
    let app = router(AppState::new(leptos_options));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    log::info!("listening on http://{}", &addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
