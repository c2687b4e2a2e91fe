use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, Response},
    middleware, Router,
};
use surrealdb::{engine::any::Any, Surreal};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::Span;
use uuid::Uuid;

use crate::{
    auth::token_service::AuthConfig,
    config::{DbConfig, ServerConfig},
    routes::{auth_routes::AuthRoutes, post_routes::PostRoutes, profile_routes::ProfileRoutes},
};

pub use self::error::{Error, Result};

mod auth;
mod config;
mod controllers;
mod db;
mod error;
mod helpers;
mod middlewares;
mod models;
mod routes;
mod services;
#[cfg(test)]
mod test_utils;

#[derive(Clone)]
struct AppState {
    db: Surreal<Any>,
    auth_config: AuthConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    init_tracing();

    tracing::info!("Starting Social Network API...");

    let db_config = DbConfig::from_env()?;
    let db = db::connect(&db_config).await?;

    let auth_config = AuthConfig::from_env()?;
    tracing::info!("Auth configuration loaded");

    let app_state = AppState { db, auth_config };

    let addr = ServerConfig::from_env().socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app(app_state)).await?;

    Ok(())
}

fn app(app_state: AppState) -> Router {
    let public_routes = Router::new().nest("/profile", ProfileRoutes::routes());

    let protected_routes = Router::new()
        .nest("/auth", AuthRoutes::routes())
        .nest("/posts", PostRoutes::routes())
        .route_layer(middleware::from_fn_with_state(
            app_state.clone(),
            middlewares::mw_auth::mw_auth,
        ));

    Router::new()
        .nest("/api", public_routes.merge(protected_routes))
        .with_state(app_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4();
                    tracing::info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    tracing::info!("{} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &Response<Body>, latency: Duration, _span: &Span| {
                    let status = response.status();
                    let latency_ms = latency.as_millis();

                    match status.as_u16() {
                        400..=499 => tracing::warn!("{} ({}ms)", status, latency_ms),
                        500..=599 => tracing::error!("{} ({}ms)", status, latency_ms),
                        _ => tracing::info!("{} ({}ms)", status, latency_ms),
                    }
                }),
        )
        .layer(CorsLayer::very_permissive())
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "social_network_api_rust=debug,tower_http=info,info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(true)
                .with_line_number(true)
                .compact(),
        )
        .init();
}
