use atelier_core_contact_contracts::{ContactFeatureService, EmailStatus};
use atelier_email_contracts::{EmailBackend, MockEmailService};
use atelier_shared_contracts::time::MockTimeService;
use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use crate::{tests::Sut, ContactFeatureServiceImpl};

#[tokio::test]
async fn configured_and_connected() {
    // Arrange
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

    let email = MockEmailService::new()
        .with_backend(EmailBackend {
            configured: true,
            provider: "SendGrid",
        })
        .with_ping(true);
    let time = MockTimeService::new().with_now(now);

    let sut = ContactFeatureServiceImpl {
        email,
        time,
        ..Sut::default()
    };

    // Act
    let result = sut.get_email_status().await;

    // Assert
    assert_eq!(
        result,
        EmailStatus {
            configured: true,
            provider: "SendGrid",
            connected: true,
            last_checked: now,
        }
    );
}

#[tokio::test]
async fn configured_but_unreachable() {
    // Arrange
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

    let email = MockEmailService::new()
        .with_backend(EmailBackend {
            configured: true,
            provider: "SendGrid",
        })
        .with_ping(false);
    let time = MockTimeService::new().with_now(now);

    let sut = ContactFeatureServiceImpl {
        email,
        time,
        ..Sut::default()
    };

    // Act
    let result = sut.get_email_status().await;

    // Assert
    assert_eq!(
        result,
        EmailStatus {
            configured: true,
            provider: "SendGrid",
            connected: false,
            last_checked: now,
        }
    );
}

#[tokio::test]
async fn not_configured_skips_the_ping() {
    // Arrange
    let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap();

    let email = MockEmailService::new().with_backend(EmailBackend {
        configured: false,
        provider: "None",
    });
    let time = MockTimeService::new().with_now(now);

    let sut = ContactFeatureServiceImpl {
        email,
        time,
        ..Sut::default()
    };

    // Act
    let result = sut.get_email_status().await;

    // Assert
    assert_eq!(
        result,
        EmailStatus {
            configured: false,
            provider: "None",
            connected: false,
            last_checked: now,
        }
    );
}
