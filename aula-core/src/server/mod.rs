//! HTTP relay server.
//!
//! A thin actix-web surface over the prompt composer and the provider
//! clients; all routing here is glue and every decision of substance lives
//! in [`crate::prompts`] and [`crate::llm`].

pub mod error;
pub mod routes;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use anyhow::Context;
use tracing::info;

use crate::config::RelayConfig;
use crate::llm::{ChatProvider, select_provider};

pub struct AppState {
    pub provider: Arc<dyn ChatProvider>,
    pub gemini_configured: bool,
    pub openai_configured: bool,
}

fn app_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(routes::status))
        .service(
            web::scope("/api")
                .route("/chat", web::post().to(routes::chat))
                .route("/tts", web::post().to(routes::tts)),
        );
}

fn cors_for(origin: &str) -> Cors {
    if origin == "*" {
        Cors::permissive()
    } else {
        Cors::default()
            .allowed_origin(origin)
            .allow_any_method()
            .allow_any_header()
    }
}

/// Run the relay until the process is stopped.
pub async fn run(config: RelayConfig) -> anyhow::Result<()> {
    let provider: Arc<dyn ChatProvider> =
        Arc::from(select_provider(&config).context("selecting upstream provider")?);

    info!(
        provider = provider.name(),
        model = provider.model(),
        port = config.port,
        cors = %config.cors_origin,
        "starting relay"
    );

    let state = web::Data::new(AppState {
        provider,
        gemini_configured: config.gemini.is_some(),
        openai_configured: config.openai.is_some(),
    });
    let cors_origin = config.cors_origin.clone();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(cors_for(&cors_origin))
            .configure(app_config)
    })
    .bind(("0.0.0.0", config.port))
    .with_context(|| format!("binding port {}", config.port))?
    .run()
    .await
    .context("relay server error")
}
