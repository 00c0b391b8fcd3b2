use atelier_models::{
    contact::{ContactSubmission, SubmissionId},
    pagination::PageRequest,
};
use atelier_persistence_contracts::contact::ContactSubmissionRepository;
use bb8_postgres::tokio_postgres::Row;
use uuid::Uuid;

use crate::{arg_indices, columns, PostgresTransaction};

#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresContactSubmissionRepository;

columns!(submission as "s": "id", "name", "email", "company", "project_type", "budget", "message", "created_at");

impl ContactSubmissionRepository<PostgresTransaction> for PostgresContactSubmissionRepository {
    async fn create(
        &self,
        txn: &mut PostgresTransaction,
        submission: &ContactSubmission,
    ) -> anyhow::Result<()> {
        let name: &str = &submission.name;
        let company = submission.company.as_deref().map(String::as_str);
        let message: &str = &submission.message;

        txn.txn()
            .execute(
                &format!(
                    "insert into contact_submissions ({SUBMISSION_COL_NAMES}) values ({})",
                    arg_indices(1..=SUBMISSION_CNT)
                ),
                &[
                    &*submission.id,
                    &name,
                    &submission.email.as_str(),
                    &company,
                    &submission.project_type.as_str(),
                    &submission.budget.map(|x| x.as_str()),
                    &message,
                    &submission.created_at,
                ],
            )
            .await
            .map(|_| ())
            .map_err(Into::into)
    }

    async fn count(&self, txn: &mut PostgresTransaction) -> anyhow::Result<u64> {
        txn.txn()
            .query_one("select count(*) from contact_submissions", &[])
            .await
            .map(|row| row.get::<_, i64>(0) as u64)
            .map_err(Into::into)
    }

    async fn list(&self, txn: &mut PostgresTransaction) -> anyhow::Result<Vec<ContactSubmission>> {
        txn.txn()
            .query(
                &format!(
                    "select {SUBMISSION_COLS} from contact_submissions s order by created_at desc"
                ),
                &[],
            )
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_submission(&row, &mut 0))
                    .collect()
            })
    }

    async fn list_page(
        &self,
        txn: &mut PostgresTransaction,
        page: PageRequest,
    ) -> anyhow::Result<Vec<ContactSubmission>> {
        txn.txn()
            .query(
                &format!(
                    "select {SUBMISSION_COLS} from contact_submissions s order by created_at \
                     desc limit $1 offset $2"
                ),
                &[&(page.limit() as i64), &(page.offset() as i64)],
            )
            .await
            .map_err(Into::into)
            .and_then(|rows| {
                rows.into_iter()
                    .map(|row| decode_submission(&row, &mut 0))
                    .collect()
            })
    }

    async fn get(
        &self,
        txn: &mut PostgresTransaction,
        submission_id: SubmissionId,
    ) -> anyhow::Result<Option<ContactSubmission>> {
        txn.txn()
            .query_opt(
                &format!("select {SUBMISSION_COLS} from contact_submissions s where id=$1"),
                &[&*submission_id],
            )
            .await
            .map_err(Into::into)
            .and_then(|row| row.map(|row| decode_submission(&row, &mut 0)).transpose())
    }
}

fn decode_submission(row: &Row, offset: &mut usize) -> anyhow::Result<ContactSubmission> {
    let mut idx = || {
        *offset += 1;
        *offset - 1
    };

    Ok(ContactSubmission {
        id: row.get::<_, Uuid>(idx()).into(),
        name: row.get::<_, String>(idx()).try_into()?,
        email: row.get::<_, String>(idx()).parse()?,
        company: row
            .get::<_, Option<String>>(idx())
            .map(TryInto::try_into)
            .transpose()?,
        project_type: row.get::<_, String>(idx()).parse()?,
        budget: row
            .get::<_, Option<String>>(idx())
            .map(|x| x.parse())
            .transpose()?,
        message: row.get::<_, String>(idx()).try_into()?,
        created_at: row.get(idx()),
    })
}
