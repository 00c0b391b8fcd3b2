use atelier_core_contact_contracts::ContactFeatureService;
use atelier_demo::contact::ALL_SUBMISSIONS;
use atelier_persistence_contracts::{contact::MockContactSubmissionRepository, MockDatabase};
use pretty_assertions::assert_eq;

use crate::{tests::Sut, ContactFeatureServiceImpl};

#[tokio::test]
async fn ok() {
    // Arrange
    let expected = ALL_SUBMISSIONS
        .iter()
        .copied()
        .cloned()
        .collect::<Vec<_>>();

    let db = MockDatabase::build(false);
    let contact_repo = MockContactSubmissionRepository::new().with_list(expected.clone());

    let sut = ContactFeatureServiceImpl {
        db,
        contact_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.list_submissions().await;

    // Assert
    assert_eq!(result.unwrap(), expected);
}

#[tokio::test]
async fn repo_error() {
    // Arrange
    let db = MockDatabase::build(false);

    let mut contact_repo = MockContactSubmissionRepository::new();
    contact_repo
        .expect_list()
        .once()
        .return_once(|_| Box::pin(std::future::ready(Err(anyhow::anyhow!("database error")))));

    let sut = ContactFeatureServiceImpl {
        db,
        contact_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.list_submissions().await;

    // Assert
    result.unwrap_err();
}
