use anyhow::{Context, Result};
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

use crate::api::handlers::AppState;
use crate::api::routes::create_router;
use crate::services::TournamentRegistry;

pub struct ServerService {
    port: u16,
    registry: TournamentRegistry,
}

impl ServerService {
    pub fn new(port: u16, registry: TournamentRegistry) -> Self {
        Self { port, registry }
    }

    pub async fn run(&self) -> Result<()> {
        let state = Arc::new(AppState {
            registry: self.registry.clone(),
        });

        let app = create_router(state).layer(CorsLayer::permissive());

        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));
        info!("Server listening on {}", addr);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        axum::serve(listener, app).await.context("Server stopped unexpectedly")?;

        Ok(())
    }
}
