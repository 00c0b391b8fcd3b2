use atelier_config::EmailConfig;
use atelier_email_impl::{EmailServiceConfig, EmailServiceImpl};

pub fn build(config: &EmailConfig) -> EmailServiceImpl {
    EmailServiceImpl::new(EmailServiceConfig::new(
        config.api_key.clone(),
        config.from.clone().with_name(config.from_name.clone()),
        config.api_endpoint_override.clone(),
    ))
}
