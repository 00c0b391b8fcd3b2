use atelier_email_contracts::{template::MockTemplateEmailService, MockEmailService};
use atelier_persistence_contracts::{
    contact::MockContactSubmissionRepository, MockDatabase, MockTransaction,
};
use atelier_shared_contracts::{id::MockIdService, time::MockTimeService};

use crate::ContactFeatureServiceImpl;

mod email_status;
mod list_submissions;
mod list_submissions_paginated;
mod submit;

type Sut = ContactFeatureServiceImpl<
    MockDatabase,
    MockIdService,
    MockTimeService,
    MockEmailService,
    MockTemplateEmailService,
    MockContactSubmissionRepository<MockTransaction>,
>;
