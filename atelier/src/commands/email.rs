use atelier_config::Config;
use atelier_email_contracts::{Email, EmailService};
use atelier_models::email_address::EmailAddress;
use clap::Subcommand;

use crate::email;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Send a test email to the given address
    #[command(aliases(["t"]))]
    Test { recipient: EmailAddress },
    /// Show the mail provider configuration and connectivity
    #[command(aliases(["s"]))]
    Status,
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let email = email::build(&config.email);

        match self {
            Self::Test { recipient } => {
                let sent = email
                    .send(Email {
                        recipient: recipient.into(),
                        subject: "Atelier Studios Test Email".into(),
                        html_body: "<p>This is a test email. Everything seems to work!</p>"
                            .into(),
                        text_body: "This is a test email. Everything seems to work!".into(),
                        reply_to: None,
                    })
                    .await?;
                anyhow::ensure!(sent, "The mail provider did not accept the test email");
                println!("Test email sent");
            }
            Self::Status => {
                let backend = email.backend();
                println!("Configured: {}", backend.configured);
                println!("Provider: {}", backend.provider);
                match email.ping().await {
                    Ok(()) => println!("Connectivity: ok"),
                    Err(err) => println!("Connectivity: failed ({err:#})"),
                }
            }
        }

        Ok(())
    }
}
