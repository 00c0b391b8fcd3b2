use atelier_core_contact_contracts::{ContactFeatureService, SubmissionPage};
use atelier_demo::contact::JANE;
use atelier_models::pagination::{PageNumber, PageRequest, PageSize};
use atelier_persistence_contracts::{contact::MockContactSubmissionRepository, MockDatabase};
use pretty_assertions::assert_eq;

use crate::{tests::Sut, ContactFeatureServiceImpl};

#[tokio::test]
async fn ok() {
    // Arrange
    let page = PageRequest {
        page: PageNumber::try_new(2).unwrap(),
        size: PageSize::try_new(1).unwrap(),
    };

    let db = MockDatabase::build(false);
    let contact_repo = MockContactSubmissionRepository::new()
        .with_count(2)
        .with_list_page(page, vec![JANE.clone()]);

    let sut = ContactFeatureServiceImpl {
        db,
        contact_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.list_submissions_paginated(page).await;

    // Assert
    assert_eq!(
        result.unwrap(),
        SubmissionPage {
            submissions: vec![JANE.clone()],
            total: 2,
        }
    );
}

#[tokio::test]
async fn empty_page_past_the_end() {
    // Arrange
    let page = PageRequest {
        page: PageNumber::try_new(7).unwrap(),
        size: PageSize::default(),
    };

    let db = MockDatabase::build(false);
    let contact_repo = MockContactSubmissionRepository::new()
        .with_count(2)
        .with_list_page(page, Vec::new());

    let sut = ContactFeatureServiceImpl {
        db,
        contact_repo,
        ..Sut::default()
    };

    // Act
    let result = sut.list_submissions_paginated(page).await;

    // Assert
    let page = result.unwrap();
    assert!(page.submissions.is_empty());
    assert_eq!(page.total, 2);
}
