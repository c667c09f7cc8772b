use std::{sync::Arc, time::Duration};

use anyhow::Context;
use axum::{
    Router,
    extract::Request,
    response::Response,
    routing::{get, post},
    serve::Serve,
};
use tokio::net::TcpListener;
use tower_http::{services::ServeFile, trace::TraceLayer};
use tracing::{Span, info, info_span};
use uuid::Uuid;

use crate::{
    api_client::RecipientsClient,
    configuration::Settings,
    routes::{
        edit_recipient_page, health_check, new_recipient_page, submit_new_recipient,
        submit_recipient_update,
    },
};

pub struct AppState {
    pub api_client: RecipientsClient,
}

pub fn run(
    listener: TcpListener,
    api_client: RecipientsClient,
) -> Serve<TcpListener, Router, Router> {
    let app_state = Arc::new(AppState { api_client });
    let app = Router::new()
        .route("/health_check", get(health_check))
        .route("/recipients", post(submit_new_recipient))
        .route("/recipients/new", get(new_recipient_page))
        .route("/recipients/{id}", post(submit_recipient_update))
        .route("/recipients/{id}/edit", get(edit_recipient_page))
        .route_service("/assets/style.css", ServeFile::new("templates/style.css"))
        .with_state(app_state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let request_id = Uuid::new_v4();
                    info_span!(
                        "http_request",
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        request_id = ?request_id,
                    )
                })
                .on_response(|response: &Response, latency: Duration, span: &Span| {
                    let status = response.status();
                    info!(parent: span, ?status, ?latency, "Response sent");
                }),
        );

    axum::serve(listener, app)
}

pub struct Application {
    port: u16,
    server: Serve<TcpListener, Router, Router>,
}

impl Application {
    pub async fn build(configuration: Settings) -> anyhow::Result<Self> {
        let api_client = RecipientsClient::new(
            configuration.api.base_url.clone(),
            configuration.api.timeout(),
        )
        .context("Failed to build the recipients API client")?;

        let listener = TcpListener::bind(format!(
            "{}:{}",
            configuration.application.host, configuration.application.port
        ))
        .await?;
        let port = listener.local_addr()?.port();

        let server = run(listener, api_client);

        Ok(Self { port, server })
    }

    pub async fn run_until_stopped(self) -> anyhow::Result<()> {
        Ok(self.server.await?)
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}
