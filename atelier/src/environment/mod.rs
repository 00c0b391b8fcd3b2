use std::sync::Arc;

use atelier_api_rest::RestServerConfig;
use atelier_config::Config;
use atelier_core_contact_impl::{ContactFeatureConfig, ContactFeatureServiceImpl};
use atelier_core_health_impl::{HealthFeatureConfig, HealthFeatureServiceImpl};
use atelier_email_impl::template::TemplateEmailServiceImpl;
use atelier_persistence_postgres::contact::PostgresContactSubmissionRepository;
use atelier_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use atelier_templates_impl::TemplateServiceImpl;
use types::{Database, Email, RestServer};

pub mod types;

/// Wires the concrete service graph. The object graph is one feature deep,
/// so the wiring is spelled out instead of going through a DI container.
pub fn build_rest_server(
    config: &Config,
    database: Database,
    email: Email,
) -> anyhow::Result<RestServer> {
    let template_email =
        TemplateEmailServiceImpl::new(email.clone(), TemplateServiceImpl::default());

    let contact = ContactFeatureServiceImpl::new(
        database.clone(),
        IdServiceImpl,
        TimeServiceImpl,
        email.clone(),
        template_email,
        PostgresContactSubmissionRepository,
        ContactFeatureConfig {
            sales: Arc::new(
                config
                    .email
                    .sales
                    .clone()
                    .with_name(config.email.sales_name.clone()),
            ),
            send_timeout: config.email.send_timeout.into(),
        },
    );

    let health = HealthFeatureServiceImpl::new(
        TimeServiceImpl,
        database,
        email,
        HealthFeatureConfig {
            cache_ttl: config.health.cache_ttl.into(),
        },
    );

    Ok(RestServer::new(
        health,
        contact,
        RestServerConfig::new(&config.http.allowed_origins)?,
    ))
}
