use atelier_core_contact_impl::ContactFeatureServiceImpl;
use atelier_core_health_impl::HealthFeatureServiceImpl;
use atelier_email_impl::{template::TemplateEmailServiceImpl, EmailServiceImpl};
use atelier_persistence_postgres::{contact::PostgresContactSubmissionRepository, PostgresDatabase};
use atelier_shared_impl::{id::IdServiceImpl, time::TimeServiceImpl};
use atelier_templates_impl::TemplateServiceImpl;

// Persistence
pub type Database = PostgresDatabase;

// Email
pub type Email = EmailServiceImpl;
pub type TemplateEmail = TemplateEmailServiceImpl<Email, Template>;

// Template
pub type Template = TemplateServiceImpl;

// Shared
pub type Id = IdServiceImpl;
pub type Time = TimeServiceImpl;

// Repositories
pub type ContactRepo = PostgresContactSubmissionRepository;

// Core
pub type ContactFeature =
    ContactFeatureServiceImpl<Database, Id, Time, Email, TemplateEmail, ContactRepo>;
pub type HealthFeature = HealthFeatureServiceImpl<Time, Database, Email>;

// API
pub type RestServer = atelier_api_rest::RestServer<HealthFeature, ContactFeature>;
