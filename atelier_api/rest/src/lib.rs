use std::net::IpAddr;

use anyhow::Context;
use atelier_core_contact_contracts::ContactFeatureService;
use atelier_core_health_contracts::HealthFeatureService;
use atelier_utils::Apply;
use axum::{
    http::{header, HeaderValue, Method},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

mod models;
mod routes;

#[derive(Debug, Clone)]
pub struct RestServer<Health, Contact> {
    health: Health,
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    /// Front-end origins allowed to call the API from a browser. Empty
    /// disables the CORS layer entirely.
    pub allowed_origins: Vec<HeaderValue>,
}

impl RestServerConfig {
    /// Parses the configured origin list into header values.
    pub fn new(allowed_origins: &[String]) -> anyhow::Result<Self> {
        Ok(Self {
            allowed_origins: allowed_origins
                .iter()
                .map(|origin| {
                    origin
                        .parse()
                        .with_context(|| format!("Invalid CORS origin {origin}"))
                })
                .collect::<anyhow::Result<_>>()?,
        })
    }
}

impl<Health, Contact> RestServer<Health, Contact>
where
    Health: HealthFeatureService,
    Contact: ContactFeatureService,
{
    pub fn new(health: Health, contact: Contact, config: RestServerConfig) -> Self {
        Self {
            health,
            contact,
            config,
        }
    }

    pub async fn serve(self, host: IpAddr, port: u16) -> anyhow::Result<()> {
        let router = self.router();
        let listener = TcpListener::bind((host, port)).await?;
        axum::serve(listener, router).await.map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let cors = cors_layer(&self.config.allowed_origins);

        Router::new()
            .merge(routes::health::router(self.health.into()))
            .merge(routes::contact::router(self.contact.into()))
            .layer(TraceLayer::new_for_http())
            .apply_map(cors, |router, cors| router.layer(cors))
    }
}

fn cors_layer(allowed_origins: &[HeaderValue]) -> Option<CorsLayer> {
    (!allowed_origins.is_empty()).then(|| {
        CorsLayer::new()
            .allow_origin(allowed_origins.to_vec())
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE])
    })
}
