include!("../../lib.rs");
use std::net::SocketAddr;
use axum::{
    routing::post,
    Router,
};
use crate::utils::logs::setup_tracing;
use crate::core::controller::AppState;
use crate::gateway::GatewayProviderVia;
use crate::borrow::controller::{issue_book, preview_due_date};

const DEV_MODE: bool = true;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let state = if DEV_MODE {
        AppState::new("dev", GatewayProviderVia::Fixture)
    } else {
        AppState::new("main", GatewayProviderVia::System)
    };

    let app = Router::new()
        .route("/borrow", post(issue_book))
        .route("/borrow/preview", post(preview_due_date))
        .with_state(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], 8080));
    tracing::info!("listening on {}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
