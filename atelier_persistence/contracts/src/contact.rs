use std::future::Future;

use atelier_models::{
    contact::{ContactSubmission, SubmissionId},
    pagination::PageRequest,
};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactSubmissionRepository<Txn: Send + Sync + 'static>: Send + Sync + 'static {
    /// Persists a new submission.
    ///
    /// Submissions are immutable; this is the only mutating operation on the
    /// table.
    fn create(
        &self,
        txn: &mut Txn,
        submission: &ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Returns the total number of stored submissions.
    fn count(&self, txn: &mut Txn) -> impl Future<Output = anyhow::Result<u64>> + Send;

    /// Returns all submissions, newest first.
    fn list(&self, txn: &mut Txn)
        -> impl Future<Output = anyhow::Result<Vec<ContactSubmission>>> + Send;

    /// Returns the requested page of submissions, newest first.
    fn list_page(
        &self,
        txn: &mut Txn,
        page: PageRequest,
    ) -> impl Future<Output = anyhow::Result<Vec<ContactSubmission>>> + Send;

    /// Returns the submission with the given id.
    fn get(
        &self,
        txn: &mut Txn,
        submission_id: SubmissionId,
    ) -> impl Future<Output = anyhow::Result<Option<ContactSubmission>>> + Send;
}

#[cfg(feature = "mock")]
impl<Txn: Send + Sync + 'static> MockContactSubmissionRepository<Txn> {
    pub fn with_create(mut self, submission: ContactSubmission) -> Self {
        self.expect_create()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(submission))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_create_error(mut self, submission: ContactSubmission) -> Self {
        self.expect_create()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(submission))
            .return_once(|_, _| {
                Box::pin(std::future::ready(Err(anyhow::anyhow!("database error"))))
            });
        self
    }

    pub fn with_count(mut self, result: u64) -> Self {
        self.expect_count()
            .once()
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list(mut self, result: Vec<ContactSubmission>) -> Self {
        self.expect_list()
            .once()
            .return_once(|_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_list_page(mut self, page: PageRequest, result: Vec<ContactSubmission>) -> Self {
        self.expect_list_page()
            .once()
            .with(mockall::predicate::always(), mockall::predicate::eq(page))
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_get(
        mut self,
        submission_id: SubmissionId,
        result: Option<ContactSubmission>,
    ) -> Self {
        self.expect_get()
            .once()
            .with(
                mockall::predicate::always(),
                mockall::predicate::eq(submission_id),
            )
            .return_once(|_, _| Box::pin(std::future::ready(Ok(result))));
        self
    }
}
